//! Typed SVG path commands.
//!
//! A [`PathCommand`](enum.PathCommand.html) is one drawing instruction of a
//! `d` attribute, in the exact form it was written: the absolute and
//! relative variants of a command are distinct, and horizontal/vertical
//! lines only store the coordinate they change.
//!
//! Each variant can also be looked at as a command letter plus a list of
//! numeric arguments, which is the view the SVG grammar uses:
//!
//! ```
//! # extern crate pathclose_path;
//! use pathclose_path::{CommandKind, PathCommand};
//! use pathclose_path::math::vector;
//!
//! let cmd = PathCommand::from_letter('l', &[10.0, -2.0]).unwrap();
//! assert_eq!(cmd, PathCommand::RelativeLineTo(vector(10.0, -2.0)));
//! assert_eq!(cmd.kind(), CommandKind::LineTo);
//! assert_eq!(cmd.letter(), 'l');
//! assert_eq!(&cmd.arguments()[..], &[10.0, -2.0]);
//! ```

use crate::math::{point, vector, Point, Vector};
use crate::ArcFlags;

use arrayvec::ArrayVec;

/// The maximum number of arguments a single command can carry (elliptical arcs).
pub const MAX_ARGUMENTS: usize = 7;

/// The ten kinds of SVG path commands, regardless of absolute or relative form.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub enum CommandKind {
    MoveTo,
    LineTo,
    HorizontalLineTo,
    VerticalLineTo,
    CubicTo,
    SmoothCubicTo,
    QuadraticTo,
    SmoothQuadraticTo,
    ArcTo,
    Close,
}

impl CommandKind {
    /// Returns the kind of command designated by an SVG command letter.
    ///
    /// The letter's case is ignored.
    pub fn from_letter(letter: char) -> Option<Self> {
        Some(match letter.to_ascii_uppercase() {
            'M' => CommandKind::MoveTo,
            'L' => CommandKind::LineTo,
            'H' => CommandKind::HorizontalLineTo,
            'V' => CommandKind::VerticalLineTo,
            'C' => CommandKind::CubicTo,
            'S' => CommandKind::SmoothCubicTo,
            'Q' => CommandKind::QuadraticTo,
            'T' => CommandKind::SmoothQuadraticTo,
            'A' => CommandKind::ArcTo,
            'Z' => CommandKind::Close,
            _ => {
                return None;
            }
        })
    }

    /// The SVG letter of this kind of command, lowercase for the relative form.
    ///
    /// Close has no relative form and is always `'Z'`.
    pub fn letter(self, relative: bool) -> char {
        let letter = match self {
            CommandKind::MoveTo => 'M',
            CommandKind::LineTo => 'L',
            CommandKind::HorizontalLineTo => 'H',
            CommandKind::VerticalLineTo => 'V',
            CommandKind::CubicTo => 'C',
            CommandKind::SmoothCubicTo => 'S',
            CommandKind::QuadraticTo => 'Q',
            CommandKind::SmoothQuadraticTo => 'T',
            CommandKind::ArcTo => 'A',
            CommandKind::Close => return 'Z',
        };

        if relative {
            letter.to_ascii_lowercase()
        } else {
            letter
        }
    }

    /// Number of numeric arguments a command of this kind takes.
    pub fn arity(self) -> usize {
        match self {
            CommandKind::MoveTo | CommandKind::LineTo | CommandKind::SmoothQuadraticTo => 2,
            CommandKind::HorizontalLineTo | CommandKind::VerticalLineTo => 1,
            CommandKind::CubicTo => 6,
            CommandKind::SmoothCubicTo | CommandKind::QuadraticTo => 4,
            CommandKind::ArcTo => 7,
            CommandKind::Close => 0,
        }
    }

    /// Returns true for straight line commands (`L`, `H` and `V` in either form).
    ///
    /// Curves and arcs are not part of the line family even though they may
    /// end where they started.
    pub fn is_line_family(self) -> bool {
        match self {
            CommandKind::LineTo | CommandKind::HorizontalLineTo | CommandKind::VerticalLineTo => {
                true
            }
            _ => false,
        }
    }
}

/// A single SVG path command.
///
/// Absolute commands store points, relative commands store vectors that are
/// offsets from the current position. Arc rotations are in degrees, as
/// written in the `d` attribute.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub enum PathCommand {
    MoveTo(Point),
    RelativeMoveTo(Vector),
    LineTo(Point),
    RelativeLineTo(Vector),
    HorizontalLineTo(f64),
    RelativeHorizontalLineTo(f64),
    VerticalLineTo(f64),
    RelativeVerticalLineTo(f64),
    /// Control point 1, control point 2, endpoint.
    CubicTo(Point, Point, Point),
    RelativeCubicTo(Vector, Vector, Vector),
    /// Control point 2, endpoint.
    SmoothCubicTo(Point, Point),
    SmoothRelativeCubicTo(Vector, Vector),
    /// Control point, endpoint.
    QuadraticTo(Point, Point),
    RelativeQuadraticTo(Vector, Vector),
    SmoothQuadraticTo(Point),
    SmoothRelativeQuadraticTo(Vector),
    /// Radii, x-axis rotation in degrees, flags, endpoint.
    ArcTo(Vector, f64, ArcFlags, Point),
    RelativeArcTo(Vector, f64, ArcFlags, Vector),
    /// `z` and `Z` are the same command.
    Close,
}

impl PathCommand {
    pub fn kind(&self) -> CommandKind {
        match self {
            PathCommand::MoveTo(..) | PathCommand::RelativeMoveTo(..) => CommandKind::MoveTo,
            PathCommand::LineTo(..) | PathCommand::RelativeLineTo(..) => CommandKind::LineTo,
            PathCommand::HorizontalLineTo(..) | PathCommand::RelativeHorizontalLineTo(..) => {
                CommandKind::HorizontalLineTo
            }
            PathCommand::VerticalLineTo(..) | PathCommand::RelativeVerticalLineTo(..) => {
                CommandKind::VerticalLineTo
            }
            PathCommand::CubicTo(..) | PathCommand::RelativeCubicTo(..) => CommandKind::CubicTo,
            PathCommand::SmoothCubicTo(..) | PathCommand::SmoothRelativeCubicTo(..) => {
                CommandKind::SmoothCubicTo
            }
            PathCommand::QuadraticTo(..) | PathCommand::RelativeQuadraticTo(..) => {
                CommandKind::QuadraticTo
            }
            PathCommand::SmoothQuadraticTo(..) | PathCommand::SmoothRelativeQuadraticTo(..) => {
                CommandKind::SmoothQuadraticTo
            }
            PathCommand::ArcTo(..) | PathCommand::RelativeArcTo(..) => CommandKind::ArcTo,
            PathCommand::Close => CommandKind::Close,
        }
    }

    pub fn is_relative(&self) -> bool {
        match self {
            PathCommand::RelativeMoveTo(..)
            | PathCommand::RelativeLineTo(..)
            | PathCommand::RelativeHorizontalLineTo(..)
            | PathCommand::RelativeVerticalLineTo(..)
            | PathCommand::RelativeCubicTo(..)
            | PathCommand::SmoothRelativeCubicTo(..)
            | PathCommand::RelativeQuadraticTo(..)
            | PathCommand::SmoothRelativeQuadraticTo(..)
            | PathCommand::RelativeArcTo(..) => true,
            _ => false,
        }
    }

    /// The SVG command letter of this command.
    pub fn letter(&self) -> char {
        self.kind().letter(self.is_relative())
    }

    /// The numeric arguments of this command in the order they appear in a
    /// `d` attribute. Arc flags are represented as `0.0` or `1.0`.
    pub fn arguments(&self) -> ArrayVec<f64, MAX_ARGUMENTS> {
        fn flag(value: bool) -> f64 {
            if value {
                1.0
            } else {
                0.0
            }
        }

        fn args(values: &[f64]) -> ArrayVec<f64, MAX_ARGUMENTS> {
            values.iter().copied().collect()
        }

        match *self {
            PathCommand::MoveTo(p) | PathCommand::LineTo(p) | PathCommand::SmoothQuadraticTo(p) => {
                args(&[p.x, p.y])
            }
            PathCommand::RelativeMoveTo(v)
            | PathCommand::RelativeLineTo(v)
            | PathCommand::SmoothRelativeQuadraticTo(v) => args(&[v.x, v.y]),
            PathCommand::HorizontalLineTo(x) | PathCommand::RelativeHorizontalLineTo(x) => args(&[x]),
            PathCommand::VerticalLineTo(y) | PathCommand::RelativeVerticalLineTo(y) => args(&[y]),
            PathCommand::CubicTo(c1, c2, to) => args(&[c1.x, c1.y, c2.x, c2.y, to.x, to.y]),
            PathCommand::RelativeCubicTo(c1, c2, to) => args(&[c1.x, c1.y, c2.x, c2.y, to.x, to.y]),
            PathCommand::SmoothCubicTo(c2, to) | PathCommand::QuadraticTo(c2, to) => {
                args(&[c2.x, c2.y, to.x, to.y])
            }
            PathCommand::SmoothRelativeCubicTo(c2, to)
            | PathCommand::RelativeQuadraticTo(c2, to) => args(&[c2.x, c2.y, to.x, to.y]),
            PathCommand::ArcTo(radii, x_rotation, flags, to) => args(&[
                radii.x,
                radii.y,
                x_rotation,
                flag(flags.large_arc),
                flag(flags.sweep),
                to.x,
                to.y,
            ]),
            PathCommand::RelativeArcTo(radii, x_rotation, flags, to) => args(&[
                radii.x,
                radii.y,
                x_rotation,
                flag(flags.large_arc),
                flag(flags.sweep),
                to.x,
                to.y,
            ]),
            PathCommand::Close => ArrayVec::new(),
        }
    }

    /// Builds a command out of an SVG command letter and its arguments.
    ///
    /// Returns `None` if the letter is not a path command or if the number
    /// of arguments does not match what the command expects. Non-zero arc
    /// flag arguments are read as `true`.
    pub fn from_letter(letter: char, args: &[f64]) -> Option<Self> {
        let kind = CommandKind::from_letter(letter)?;
        if args.len() != kind.arity() {
            return None;
        }

        let relative = letter.is_ascii_lowercase();
        let p = |i: usize| point(args[i], args[i + 1]);
        let v = |i: usize| vector(args[i], args[i + 1]);

        Some(match (kind, relative) {
            (CommandKind::MoveTo, false) => PathCommand::MoveTo(p(0)),
            (CommandKind::MoveTo, true) => PathCommand::RelativeMoveTo(v(0)),
            (CommandKind::LineTo, false) => PathCommand::LineTo(p(0)),
            (CommandKind::LineTo, true) => PathCommand::RelativeLineTo(v(0)),
            (CommandKind::HorizontalLineTo, false) => PathCommand::HorizontalLineTo(args[0]),
            (CommandKind::HorizontalLineTo, true) => PathCommand::RelativeHorizontalLineTo(args[0]),
            (CommandKind::VerticalLineTo, false) => PathCommand::VerticalLineTo(args[0]),
            (CommandKind::VerticalLineTo, true) => PathCommand::RelativeVerticalLineTo(args[0]),
            (CommandKind::CubicTo, false) => PathCommand::CubicTo(p(0), p(2), p(4)),
            (CommandKind::CubicTo, true) => PathCommand::RelativeCubicTo(v(0), v(2), v(4)),
            (CommandKind::SmoothCubicTo, false) => PathCommand::SmoothCubicTo(p(0), p(2)),
            (CommandKind::SmoothCubicTo, true) => PathCommand::SmoothRelativeCubicTo(v(0), v(2)),
            (CommandKind::QuadraticTo, false) => PathCommand::QuadraticTo(p(0), p(2)),
            (CommandKind::QuadraticTo, true) => PathCommand::RelativeQuadraticTo(v(0), v(2)),
            (CommandKind::SmoothQuadraticTo, false) => PathCommand::SmoothQuadraticTo(p(0)),
            (CommandKind::SmoothQuadraticTo, true) => PathCommand::SmoothRelativeQuadraticTo(v(0)),
            (CommandKind::ArcTo, relative) => {
                let radii = v(0);
                let x_rotation = args[2];
                let flags = ArcFlags {
                    large_arc: args[3] != 0.0,
                    sweep: args[4] != 0.0,
                };
                if relative {
                    PathCommand::RelativeArcTo(radii, x_rotation, flags, v(5))
                } else {
                    PathCommand::ArcTo(radii, x_rotation, flags, p(5))
                }
            }
            (CommandKind::Close, _) => PathCommand::Close,
        })
    }
}

#[test]
fn letters_and_kinds() {
    let letters = "MmLlHhVvCcSsQqTtAaZ";
    for letter in letters.chars() {
        let kind = CommandKind::from_letter(letter).unwrap();
        let args = [1.0; MAX_ARGUMENTS];
        let cmd = PathCommand::from_letter(letter, &args[..kind.arity()]).unwrap();

        assert_eq!(cmd.kind(), kind);
        assert_eq!(cmd.arguments().len(), kind.arity());
        if letter == 'Z' {
            assert_eq!(cmd.letter(), 'Z');
        } else {
            assert_eq!(cmd.letter(), letter);
            assert_eq!(cmd.is_relative(), letter.is_ascii_lowercase());
        }
    }

    assert_eq!(CommandKind::from_letter('x'), None);
    assert_eq!(PathCommand::from_letter('B', &[]), None);
}

#[test]
fn close_is_case_insensitive() {
    assert_eq!(PathCommand::from_letter('z', &[]), Some(PathCommand::Close));
    assert_eq!(PathCommand::from_letter('Z', &[]), Some(PathCommand::Close));
    assert!(!PathCommand::Close.is_relative());
    assert!(PathCommand::Close.arguments().is_empty());
}

#[test]
fn wrong_arity() {
    assert_eq!(PathCommand::from_letter('L', &[1.0]), None);
    assert_eq!(PathCommand::from_letter('H', &[1.0, 2.0]), None);
    assert_eq!(PathCommand::from_letter('z', &[0.0]), None);
    assert_eq!(PathCommand::from_letter('a', &[1.0; 6]), None);
}

#[test]
fn arc_arguments() {
    let cmd = PathCommand::from_letter('A', &[5.0, 4.0, 30.0, 1.0, 0.0, 10.0, 20.0]).unwrap();
    assert_eq!(
        cmd,
        PathCommand::ArcTo(
            vector(5.0, 4.0),
            30.0,
            ArcFlags {
                large_arc: true,
                sweep: false
            },
            point(10.0, 20.0),
        )
    );
    assert_eq!(&cmd.arguments()[..], &[5.0, 4.0, 30.0, 1.0, 0.0, 10.0, 20.0]);
}

#[test]
fn line_family() {
    assert!(CommandKind::LineTo.is_line_family());
    assert!(CommandKind::HorizontalLineTo.is_line_family());
    assert!(CommandKind::VerticalLineTo.is_line_family());

    assert!(!CommandKind::MoveTo.is_line_family());
    assert!(!CommandKind::CubicTo.is_line_family());
    assert!(!CommandKind::SmoothCubicTo.is_line_family());
    assert!(!CommandKind::QuadraticTo.is_line_family());
    assert!(!CommandKind::SmoothQuadraticTo.is_line_family());
    assert!(!CommandKind::ArcTo.is_line_family());
    assert!(!CommandKind::Close.is_line_family());
}
