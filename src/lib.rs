#![deny(bare_trait_objects)]

//! Normalization of SVG path data for icon assets.
//!
//! Many generated icons finish their outlines with a line segment back to
//! the first point of the sub-path rather than with an explicit close
//! command. This crate finds these segments and rewrites them as `Z`,
//! leaving every other command untouched.
//!
//! # Crates
//!
//! This meta-crate (`pathclose`) reexports the following sub-crates for convenience:
//!
//! * **pathclose_path** - Typed path commands and pen position tracking.
//! * **pathclose_algorithms** - The close-path normalization pass.
//! * **pathclose_svg** - Parsing and serializing the content of `d` attributes.
//!
//! Each `pathclose_<name>` crate is reexported as a `<name>` module in `pathclose`.
//!
//! # Feature flags
//!
//! serialization of the path commands using serde can be enabled with the
//! `serialization` feature flag (disabled by default).
//!
//! # Examples
//!
//! ```
//! use pathclose::algorithms::close_path::close_subpaths;
//! use pathclose::svg::{parse_path, serialize_path};
//!
//! let mut commands = parse_path("M 2 2 h 10 v 10 h -10 V 2").unwrap();
//! let replaced = close_subpaths(&mut commands);
//!
//! assert_eq!(replaced, 1);
//! assert_eq!(serialize_path(&commands), "M 2 2 h 10 v 10 h -10 Z");
//! ```

pub extern crate pathclose_algorithms;
pub extern crate pathclose_path;
pub extern crate pathclose_svg;

pub use pathclose_algorithms as algorithms;
pub use pathclose_path as path;
pub use pathclose_svg as svg;

pub use path::math;

/// Parses path data, closes the sub-paths that end on their start point
/// and serializes the result.
///
/// Returns the new path data along with the number of replaced commands.
pub fn normalize_path_data(
    src: &str,
    options: &svg::SerializerOptions,
) -> Result<(String, usize), svg::ParseError> {
    let mut commands = svg::parse_path(src)?;
    let replaced = algorithms::close_path::close_subpaths(&mut commands);

    let mut serializer = svg::PathSerializer::with_options(options.clone());
    serializer.commands(&commands);

    Ok((serializer.build(), replaced))
}

#[test]
fn normalize_icon_path() {
    let (d, replaced) = normalize_path_data(
        "M0 0L24 0L24 24L0 24L0 0M4 4l16 0l0 16l-16 0l0-16",
        &svg::SerializerOptions::DEFAULT,
    )
    .unwrap();

    assert_eq!(replaced, 2);
    assert_eq!(
        d,
        "M 0 0 L 24 0 L 24 24 L 0 24 Z M 4 4 l 16 0 l 0 16 l -16 0 Z"
    );
}

#[test]
fn normalize_invalid_path_data() {
    assert!(normalize_path_data("M 0 0 L", &svg::SerializerOptions::DEFAULT).is_err());
}
