#![deny(bare_trait_objects)]
#![allow(clippy::float_cmp)]

//! Normalization passes over sequences of SVG path commands.
//!
//! This crate is reexported in `pathclose`.

pub extern crate pathclose_path as path;

pub mod close_path;

pub use crate::path::math;
