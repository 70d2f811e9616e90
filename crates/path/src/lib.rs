#![deny(bare_trait_objects)]
#![deny(unconditional_recursion)]
#![allow(clippy::float_cmp)]

//! Data structures to represent SVG path commands and track the pen
//! position while walking through them.
//!
//! Unlike a flattened path representation, a sequence of
//! [`PathCommand`](enum.PathCommand.html) preserves the exact form of the
//! `d` attribute it was decoded from: relative commands stay relative,
//! horizontal and vertical lines keep their single coordinate, and so on.
//! This makes it possible to rewrite individual commands without changing
//! anything else about the serialized path.
//!
//! This crate is reexported in `pathclose`.
//!
//! # Examples
//!
//! ```
//! # extern crate pathclose_path;
//! # fn main() {
//! use pathclose_path::{PathCommand, PathState};
//! use pathclose_path::math::{point, vector};
//!
//! let commands = [
//!     PathCommand::MoveTo(point(1.0, 1.0)),
//!     PathCommand::RelativeLineTo(vector(2.0, 0.0)),
//!     PathCommand::VerticalLineTo(5.0),
//! ];
//!
//! let mut state = PathState::new();
//! for cmd in &commands {
//!     state.update(cmd);
//! }
//!
//! assert_eq!(state.current_position(), point(3.0, 5.0));
//! assert_eq!(state.start_position(), point(1.0, 1.0));
//! # }
//! ```

pub use euclid;

#[cfg(feature = "serialization")]
#[macro_use]
pub extern crate serde;

pub mod commands;
mod path_state;

#[doc(inline)]
pub use crate::commands::{CommandKind, PathCommand};
pub use crate::path_state::PathState;

pub mod math {
    //! f64 versions of the euclid types used everywhere. The other pathclose
    //! crates reexport them.

    /// Alias for ```euclid::default::Point2D<f64>```.
    pub type Point = euclid::default::Point2D<f64>;

    /// Alias for ```euclid::default::Vector2D<f64>```.
    pub type Vector = euclid::default::Vector2D<f64>;

    /// Shorthand for `Vector::new(x, y)`.
    #[inline]
    pub fn vector(x: f64, y: f64) -> Vector {
        Vector::new(x, y)
    }

    /// Shorthand for `Point::new(x, y)`.
    #[inline]
    pub fn point(x: f64, y: f64) -> Point {
        Point::new(x, y)
    }
}

/// Flag parameters for arcs as described by the SVG specification.
///
/// For most situations using the SVG arc notation, there are four different arcs
/// (two different ellipses, each with two different arc sweeps) that satisfy the
/// arc parameters. The `large_arc` and `sweep` flags indicate which one of the
/// four arcs are drawn.
///
/// See more examples at <https://svgwg.org/specs/paths/>.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub struct ArcFlags {
    /// Of the four candidate arc sweeps, two will represent an arc sweep of greater
    /// than or equal to 180 degrees (the "large-arc"), and two will represent an arc
    /// sweep of less than or equal to 180 degrees (the "small arc"). If `large_arc`
    /// is `true`, then one of the two larger arc sweeps will be chosen; otherwise, if
    /// `large_arc` is `false`, one of the smaller arc sweeps will be chosen.
    pub large_arc: bool,
    /// If `sweep` is `true`, then the arc will be drawn in a "positive-angle" direction
    /// (the ellipse formula `x=cx+rx*cos(theta)` and `y=cy+ry*sin(theta)` is evaluated
    /// such that theta starts at an angle corresponding to the current point and increases
    /// positively until the arc reaches the destination position). A value of `false`
    /// causes the arc to be drawn in a "negative-angle" direction (theta starts at an
    /// angle value corresponding to the current point and decreases until the arc reaches
    /// the destination position).
    pub sweep: bool,
}
