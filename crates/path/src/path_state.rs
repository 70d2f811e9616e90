use crate::commands::PathCommand;
use crate::math::{point, Point, Vector};

/// Represents the pen position while walking through a sequence of
/// path commands.
///
/// Only endpoints matter: control points and arc parameters are ignored.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct PathState {
    /// The current point.
    current: Point,
    /// The first point of the current sub-path.
    first: Point,
}

impl PathState {
    /// Creates a state with both the current and the start position at the origin.
    pub fn new() -> Self {
        PathState {
            current: point(0.0, 0.0),
            first: point(0.0, 0.0),
        }
    }

    /// The current position.
    pub fn current_position(&self) -> Point {
        self.current
    }

    /// The position at the start of the current sub-path.
    pub fn start_position(&self) -> Point {
        self.first
    }

    /// Whether the pen is back at the start of the current sub-path.
    ///
    /// Positions are compared exactly.
    pub fn is_at_start(&self) -> bool {
        self.current == self.first
    }

    pub fn move_to(&mut self, to: Point) {
        self.current = to;
        self.first = to;
    }

    pub fn line_to(&mut self, to: Point) {
        self.current = to;
    }

    pub fn close(&mut self) {
        self.current = self.first;
    }

    pub fn relative_to_absolute(&self, v: Vector) -> Point {
        self.current + v
    }

    /// Moves the pen according to a command.
    pub fn update(&mut self, cmd: &PathCommand) {
        match *cmd {
            PathCommand::MoveTo(to) => self.move_to(to),
            PathCommand::RelativeMoveTo(to) => {
                let to = self.relative_to_absolute(to);
                self.move_to(to);
            }
            PathCommand::HorizontalLineTo(x) => self.current.x = x,
            PathCommand::RelativeHorizontalLineTo(dx) => self.current.x += dx,
            PathCommand::VerticalLineTo(y) => self.current.y = y,
            PathCommand::RelativeVerticalLineTo(dy) => self.current.y += dy,
            PathCommand::LineTo(to)
            | PathCommand::CubicTo(_, _, to)
            | PathCommand::SmoothCubicTo(_, to)
            | PathCommand::QuadraticTo(_, to)
            | PathCommand::SmoothQuadraticTo(to)
            | PathCommand::ArcTo(_, _, _, to) => self.line_to(to),
            PathCommand::RelativeLineTo(to)
            | PathCommand::RelativeCubicTo(_, _, to)
            | PathCommand::SmoothRelativeCubicTo(_, to)
            | PathCommand::RelativeQuadraticTo(_, to)
            | PathCommand::SmoothRelativeQuadraticTo(to)
            | PathCommand::RelativeArcTo(_, _, _, to) => {
                let to = self.relative_to_absolute(to);
                self.line_to(to);
            }
            PathCommand::Close => self.close(),
        }
    }
}

#[cfg(test)]
use crate::math::vector;
#[cfg(test)]
use crate::ArcFlags;

#[test]
fn absolute_commands() {
    let mut state = PathState::new();
    state.update(&PathCommand::MoveTo(point(1.0, 2.0)));
    assert_eq!(state.current_position(), point(1.0, 2.0));
    assert_eq!(state.start_position(), point(1.0, 2.0));

    state.update(&PathCommand::LineTo(point(3.0, 4.0)));
    assert_eq!(state.current_position(), point(3.0, 4.0));

    state.update(&PathCommand::HorizontalLineTo(10.0));
    assert_eq!(state.current_position(), point(10.0, 4.0));

    state.update(&PathCommand::VerticalLineTo(-1.0));
    assert_eq!(state.current_position(), point(10.0, -1.0));

    assert_eq!(state.start_position(), point(1.0, 2.0));
}

#[test]
fn relative_commands() {
    let mut state = PathState::new();
    state.update(&PathCommand::RelativeMoveTo(vector(1.0, 1.0)));
    state.update(&PathCommand::RelativeLineTo(vector(2.0, 3.0)));
    assert_eq!(state.current_position(), point(3.0, 4.0));

    state.update(&PathCommand::RelativeHorizontalLineTo(-3.0));
    state.update(&PathCommand::RelativeVerticalLineTo(1.0));
    assert_eq!(state.current_position(), point(0.0, 5.0));

    // A relative move is relative to the current position, not to the
    // start of the previous sub-path.
    state.update(&PathCommand::RelativeMoveTo(vector(1.0, 0.0)));
    assert_eq!(state.start_position(), point(1.0, 5.0));
}

#[test]
fn curves_only_use_endpoints() {
    let mut state = PathState::new();
    state.update(&PathCommand::CubicTo(
        point(100.0, 100.0),
        point(-100.0, 50.0),
        point(1.0, 1.0),
    ));
    assert_eq!(state.current_position(), point(1.0, 1.0));

    state.update(&PathCommand::RelativeQuadraticTo(
        vector(40.0, 40.0),
        vector(1.0, 1.0),
    ));
    assert_eq!(state.current_position(), point(2.0, 2.0));

    state.update(&PathCommand::SmoothRelativeCubicTo(
        vector(7.0, 7.0),
        vector(1.0, 0.0),
    ));
    state.update(&PathCommand::SmoothQuadraticTo(point(5.0, 5.0)));
    assert_eq!(state.current_position(), point(5.0, 5.0));

    state.update(&PathCommand::RelativeArcTo(
        vector(3.0, 3.0),
        45.0,
        ArcFlags {
            large_arc: true,
            sweep: true,
        },
        vector(-5.0, 0.0),
    ));
    assert_eq!(state.current_position(), point(0.0, 5.0));
    assert_eq!(state.start_position(), point(0.0, 0.0));
}

#[test]
fn close_returns_to_start() {
    let mut state = PathState::new();
    state.update(&PathCommand::MoveTo(point(2.0, 2.0)));
    state.update(&PathCommand::LineTo(point(8.0, 3.0)));
    assert!(!state.is_at_start());

    state.update(&PathCommand::Close);
    assert_eq!(state.current_position(), point(2.0, 2.0));
    assert_eq!(state.start_position(), point(2.0, 2.0));
    assert!(state.is_at_start());

    state.update(&PathCommand::RelativeLineTo(vector(1.0, 0.0)));
    assert_eq!(state.current_position(), point(3.0, 2.0));
}
