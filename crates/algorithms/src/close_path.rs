//! Replace straight lines that return to the start of their sub-path with
//! an explicit close command.
//!
//! Generated icons often end a sub-path with a line back to its first point
//! instead of a `z`. Both draw the same outline, but the explicit close
//! joins the last segment to the first one when the path is stroked and
//! serializes to fewer bytes.
//!
//! Only `L`, `H` and `V` commands (absolute or relative) are rewritten. A
//! curve or an arc that ends on the start point stays as is since replacing
//! it with a straight segment would change the shape.
//!
//! # Examples
//!
//! ```
//! # extern crate pathclose_algorithms;
//! use pathclose_algorithms::close_path::close_subpaths;
//! use pathclose_algorithms::path::PathCommand;
//! use pathclose_algorithms::math::point;
//!
//! let mut commands = vec![
//!     PathCommand::MoveTo(point(0.0, 0.0)),
//!     PathCommand::LineTo(point(10.0, 0.0)),
//!     PathCommand::LineTo(point(10.0, 10.0)),
//!     PathCommand::LineTo(point(0.0, 0.0)),
//! ];
//!
//! assert_eq!(close_subpaths(&mut commands), 1);
//! assert_eq!(commands[3], PathCommand::Close);
//! ```

use crate::path::{PathCommand, PathState};

/// Rewrites, in place, every line command that brings the pen back to the
/// start of its sub-path into a close command.
///
/// The number of commands never changes. Returns the number of commands
/// that were replaced.
pub fn close_subpaths(commands: &mut [PathCommand]) -> usize {
    let mut state = PathState::new();
    let mut replaced = 0;

    for (idx, cmd) in commands.iter_mut().enumerate() {
        state.update(cmd);

        if cmd.kind().is_line_family() && state.is_at_start() {
            log::trace!(
                "command #{} {:?} closes the sub-path at {:?}",
                idx,
                cmd,
                state.start_position()
            );
            // Closing moves the pen to the start, which is where it already is.
            *cmd = PathCommand::Close;
            replaced += 1;
        }
    }

    if replaced > 0 {
        log::debug!(
            "replaced {} of {} path commands with close",
            replaced,
            commands.len()
        );
    }

    replaced
}

/// Same as [`close_subpaths`](fn.close_subpaths.html), taking and returning
/// ownership of the command sequence.
pub fn closed_subpaths(mut commands: Vec<PathCommand>) -> Vec<PathCommand> {
    close_subpaths(&mut commands);
    commands
}

#[cfg(test)]
use crate::math::{point, vector};
#[cfg(test)]
use crate::path::ArcFlags;

#[cfg(test)]
fn cmds(src: &[(char, &[f64])]) -> Vec<PathCommand> {
    src.iter()
        .map(|&(letter, args)| PathCommand::from_letter(letter, args).unwrap())
        .collect()
}

#[test]
fn absolute_closure() {
    let mut path = cmds(&[
        ('M', &[0.0, 0.0]),
        ('L', &[10.0, 0.0]),
        ('L', &[10.0, 10.0]),
        ('L', &[0.0, 0.0]),
    ]);

    assert_eq!(close_subpaths(&mut path), 1);
    assert_eq!(
        path,
        vec![
            PathCommand::MoveTo(point(0.0, 0.0)),
            PathCommand::LineTo(point(10.0, 0.0)),
            PathCommand::LineTo(point(10.0, 10.0)),
            PathCommand::Close,
        ]
    );
}

#[test]
fn relative_closure() {
    let mut path = cmds(&[
        ('m', &[0.0, 0.0]),
        ('l', &[10.0, 0.0]),
        ('l', &[0.0, 10.0]),
        ('l', &[-10.0, -10.0]),
    ]);

    assert_eq!(close_subpaths(&mut path), 1);
    assert_eq!(path[0], PathCommand::RelativeMoveTo(vector(0.0, 0.0)));
    assert_eq!(path[1], PathCommand::RelativeLineTo(vector(10.0, 0.0)));
    assert_eq!(path[2], PathCommand::RelativeLineTo(vector(0.0, 10.0)));
    assert_eq!(path[3], PathCommand::Close);
}

#[test]
fn no_closure() {
    let original = cmds(&[('M', &[0.0, 0.0]), ('L', &[10.0, 0.0]), ('L', &[5.0, 5.0])]);
    let mut path = original.clone();

    assert_eq!(close_subpaths(&mut path), 0);
    assert_eq!(path, original);
}

#[test]
fn curves_are_not_replaced() {
    let original = cmds(&[
        ('M', &[0.0, 0.0]),
        ('L', &[10.0, 10.0]),
        ('C', &[1.0, 1.0, 2.0, 2.0, 0.0, 0.0]),
    ]);
    let mut path = original.clone();

    assert_eq!(close_subpaths(&mut path), 0);
    assert_eq!(path, original);

    let original = cmds(&[
        ('M', &[3.0, 3.0]),
        ('q', &[1.0, 1.0, 2.0, 0.0]),
        ('s', &[1.0, 1.0, -2.0, 0.0]),
        ('M', &[0.0, 0.0]),
        ('A', &[5.0, 5.0, 0.0, 1.0, 1.0, 0.0, 0.0]),
        ('t', &[0.0, 0.0]),
    ]);
    let mut path = original.clone();

    assert_eq!(close_subpaths(&mut path), 0);
    assert_eq!(path, original);
}

#[test]
fn horizontal_and_vertical_lines() {
    let mut path = cmds(&[('M', &[5.0, 5.0]), ('H', &[5.0])]);
    assert_eq!(close_subpaths(&mut path), 1);
    assert_eq!(path, vec![PathCommand::MoveTo(point(5.0, 5.0)), PathCommand::Close]);

    let mut path = cmds(&[
        ('M', &[1.0, 1.0]),
        ('h', &[4.0]),
        ('v', &[4.0]),
        ('H', &[1.0]),
        ('V', &[1.0]),
    ]);
    assert_eq!(close_subpaths(&mut path), 1);
    assert_eq!(path[3], PathCommand::HorizontalLineTo(1.0));
    assert_eq!(path[4], PathCommand::Close);
}

#[test]
fn multiple_sub_paths() {
    let mut path = cmds(&[
        ('M', &[0.0, 0.0]),
        ('L', &[10.0, 0.0]),
        ('L', &[10.0, 10.0]),
        // Back to the first sub-path's start, but not this one's.
        ('M', &[20.0, 20.0]),
        ('L', &[30.0, 20.0]),
        ('L', &[0.0, 0.0]),
        ('L', &[20.0, 20.0]),
    ]);

    assert_eq!(close_subpaths(&mut path), 1);
    assert_eq!(path[5], PathCommand::LineTo(point(0.0, 0.0)));
    assert_eq!(path[6], PathCommand::Close);
}

#[test]
fn relative_move_after_close() {
    // After a close the pen is back at (10, 10), so the relative move
    // starts the next sub-path at (15, 10).
    let mut path = cmds(&[
        ('M', &[10.0, 10.0]),
        ('l', &[5.0, 5.0]),
        ('z', &[]),
        ('m', &[5.0, 0.0]),
        ('l', &[0.0, 5.0]),
        ('L', &[15.0, 10.0]),
    ]);

    assert_eq!(close_subpaths(&mut path), 1);
    assert_eq!(path[2], PathCommand::Close);
    assert_eq!(path[5], PathCommand::Close);
}

#[test]
fn line_without_move_to() {
    // The start position defaults to the origin.
    let mut path = cmds(&[('l', &[3.0, 0.0]), ('l', &[-3.0, 0.0])]);
    assert_eq!(close_subpaths(&mut path), 1);
    assert_eq!(path[1], PathCommand::Close);
}

#[test]
fn zero_length_line_after_move_to() {
    let mut path = cmds(&[('M', &[4.0, 4.0]), ('l', &[0.0, 0.0])]);
    assert_eq!(close_subpaths(&mut path), 1);
    assert_eq!(path[1], PathCommand::Close);
}

#[test]
fn equality_is_exact() {
    let mut path = cmds(&[
        ('M', &[0.0, 0.0]),
        ('l', &[0.1, 0.0]),
        ('l', &[0.2, 0.0]),
        ('L', &[0.0, 1e-12]),
    ]);
    assert_eq!(close_subpaths(&mut path), 0);

    let mut path = cmds(&[
        ('M', &[0.0, 0.0]),
        ('l', &[0.1, 0.0]),
        ('l', &[0.2, 0.0]),
        // 0.1 + 0.2 - 0.3 is not exactly zero in floating point.
        ('l', &[-0.3, 0.0]),
    ]);
    assert_eq!(close_subpaths(&mut path), 0);
}

#[test]
fn idempotent_and_length_preserving() {
    let arc = PathCommand::RelativeArcTo(
        vector(2.0, 2.0),
        0.0,
        ArcFlags {
            large_arc: false,
            sweep: true,
        },
        vector(4.0, 0.0),
    );
    let mut path = cmds(&[
        ('M', &[0.0, 0.0]),
        ('l', &[4.0, 4.0]),
        ('L', &[0.0, 0.0]),
        ('m', &[1.0, 1.0]),
        ('h', &[2.0]),
        ('v', &[2.0]),
        ('h', &[-2.0]),
        ('v', &[-2.0]),
        ('Z', &[]),
    ]);
    path.push(arc);
    path.push(PathCommand::LineTo(point(1.0, 1.0)));

    let len = path.len();
    assert_eq!(close_subpaths(&mut path), 3);
    assert_eq!(path.len(), len);

    let once = path.clone();
    assert_eq!(close_subpaths(&mut path), 0);
    assert_eq!(path, once);
}

#[test]
fn owned_variant() {
    let path = closed_subpaths(cmds(&[('M', &[1.0, 2.0]), ('V', &[2.0])]));
    assert_eq!(path, vec![PathCommand::MoveTo(point(1.0, 2.0)), PathCommand::Close]);

    assert!(closed_subpaths(Vec::new()).is_empty());
}
