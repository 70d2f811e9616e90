use crate::path::PathCommand;

#[non_exhaustive]
#[derive(Clone, Debug, PartialEq)]
pub struct SerializerOptions {
    /// Write close commands as `z` instead of `Z`.
    pub lowercase_close: bool,
}

impl SerializerOptions {
    pub const DEFAULT: SerializerOptions = SerializerOptions {
        lowercase_close: false,
    };
}

impl Default for SerializerOptions {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Builds a `String` representation of a sequence of commands using the
/// SVG path syntax.
///
/// Each command is written with its own letter, so relative commands stay
/// relative and implicit repetitions become explicit. Numbers are written
/// with the shortest representation that reads back to the same value.
/// No other effort is made to make the output compact.
pub struct PathSerializer {
    path: String,
    options: SerializerOptions,
}

impl PathSerializer {
    pub fn new() -> Self {
        Self::with_options(SerializerOptions::DEFAULT)
    }

    pub fn with_options(options: SerializerOptions) -> Self {
        PathSerializer {
            path: String::new(),
            options,
        }
    }

    pub fn command(&mut self, cmd: &PathCommand) {
        if !self.path.is_empty() {
            self.path.push(' ');
        }

        let letter = match cmd {
            PathCommand::Close if self.options.lowercase_close => 'z',
            _ => cmd.letter(),
        };
        self.path.push(letter);

        for value in cmd.arguments() {
            self.path += &format!(" {}", value);
        }
    }

    pub fn commands<'l, Iter>(&mut self, commands: Iter)
    where
        Iter: IntoIterator<Item = &'l PathCommand>,
    {
        for cmd in commands {
            self.command(cmd);
        }
    }

    pub fn build(self) -> String {
        self.path
    }
}

impl Default for PathSerializer {
    fn default() -> Self {
        Self::new()
    }
}

/// Serializes commands to the content of a `d` attribute with the default options.
pub fn serialize_path(commands: &[PathCommand]) -> String {
    let mut serializer = PathSerializer::new();
    serializer.commands(commands);
    serializer.build()
}

#[cfg(test)]
use crate::path::math::{point, vector};
#[cfg(test)]
use crate::path::ArcFlags;

#[test]
fn simple_commands() {
    let commands = [
        PathCommand::MoveTo(point(0.0, 0.5)),
        PathCommand::RelativeLineTo(vector(-10.0, 2.25)),
        PathCommand::HorizontalLineTo(3.0),
        PathCommand::RelativeVerticalLineTo(-1.5),
        PathCommand::Close,
    ];

    assert_eq!(serialize_path(&commands), "M 0 0.5 l -10 2.25 H 3 v -1.5 Z");
}

#[test]
fn curves_and_arcs() {
    let commands = [
        PathCommand::MoveTo(point(1.0, 1.0)),
        PathCommand::CubicTo(point(1.0, 2.0), point(3.0, 4.0), point(5.0, 6.0)),
        PathCommand::SmoothRelativeCubicTo(vector(1.0, 1.0), vector(2.0, 2.0)),
        PathCommand::QuadraticTo(point(0.0, 1.0), point(2.0, 3.0)),
        PathCommand::SmoothRelativeQuadraticTo(vector(4.0, 4.0)),
        PathCommand::RelativeArcTo(
            vector(5.0, 5.0),
            45.0,
            ArcFlags {
                large_arc: true,
                sweep: false,
            },
            vector(10.0, 0.0),
        ),
    ];

    assert_eq!(
        serialize_path(&commands),
        "M 1 1 C 1 2 3 4 5 6 s 1 1 2 2 Q 0 1 2 3 t 4 4 a 5 5 45 1 0 10 0"
    );
}

#[test]
fn lowercase_close() {
    let mut serializer = PathSerializer::with_options(SerializerOptions {
        lowercase_close: true,
    });
    serializer.commands(&[PathCommand::MoveTo(point(0.0, 0.0)), PathCommand::Close]);

    assert_eq!(serializer.build(), "M 0 0 z");
}

#[test]
fn empty() {
    assert_eq!(serialize_path(&[]), "");
}

#[test]
fn round_trip() {
    use crate::parser::parse_path;

    let src = "m 0.1 -7e-7 l 1e21 0.3333333333333333 h 12.5 z";
    let commands = parse_path(src).unwrap();
    let serialized = serialize_path(&commands);

    assert_eq!(parse_path(&serialized).unwrap(), commands);
}
