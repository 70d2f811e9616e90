#![deny(bare_trait_objects)]

//! Utilities to read and write the path data of SVG documents.
//!
//! The [parser](parser/index.html) decodes the content of a `d` attribute
//! into a sequence of `PathCommand` and the [serializer](serializer/index.html)
//! encodes such a sequence back into a string.
//!
//! ```
//! # extern crate pathclose_svg;
//! use pathclose_svg::{parse_path, serialize_path};
//!
//! let commands = parse_path("M0,0 10,0 l-5 5z").unwrap();
//! assert_eq!(commands.len(), 4);
//! assert_eq!(serialize_path(&commands), "M 0 0 L 10 0 l -5 5 Z");
//! ```

pub extern crate pathclose_path as path;

pub mod parser;
pub mod serializer;

pub use crate::parser::{parse_path, ParseError, ParserOptions, PathParser, Source};
pub use crate::serializer::{serialize_path, PathSerializer, SerializerOptions};
