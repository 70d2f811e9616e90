//! Decode the SVG path mini-language into a sequence of commands.
//!
//! The commands are kept in the form they are written in: a relative
//! command stays relative and repeated coordinates after a command letter
//! produce one command per coordinate set.

use crate::path::math::{point, vector};
use crate::path::{ArcFlags, PathCommand};

use thiserror::Error;

/// Errors that can happen while parsing a path. Lines and columns start at zero.
#[non_exhaustive]
#[derive(Error, Clone, Debug, PartialEq)]
pub enum ParseError {
    #[error("Line {line} Column {column}: Expected number, got {src:?}.")]
    Number { src: String, line: i32, column: i32 },
    #[error("Line {line} Column {column}: Expected flag (0/1), got {src:?}.")]
    Flag { src: char, line: i32, column: i32 },
    #[error("Line {line} Column {column}: Invalid command {command:?}.")]
    Command {
        command: char,
        line: i32,
        column: i32,
    },
    #[error("Line {line} Column {column}: Expected move-to command, got {command:?}.")]
    MissingMoveTo {
        command: char,
        line: i32,
        column: i32,
    },
}

#[non_exhaustive]
#[derive(Clone, Debug, PartialEq)]
pub struct ParserOptions {
    /// Optionally stop parsing when encountering a provided special character.
    pub stop_at: Option<char>,
}

impl ParserOptions {
    pub const DEFAULT: ParserOptions = ParserOptions { stop_at: None };
}

impl Default for ParserOptions {
    fn default() -> Self {
        Self::DEFAULT
    }
}

// A buffered iterator of characters keeping track of line and column.
pub struct Source<Iter> {
    src: Iter,
    current: char,
    line: i32,
    col: i32,
    finished: bool,
}

impl<Iter: Iterator<Item = char>> Source<Iter> {
    pub fn new<IntoIter>(src: IntoIter) -> Self
    where
        IntoIter: IntoIterator<IntoIter = Iter>,
    {
        Self::with_position(0, 0, src)
    }

    /// Starts counting lines and columns from a given position, for example
    /// the location of the attribute in the enclosing document.
    pub fn with_position<IntoIter>(line: i32, column: i32, src: IntoIter) -> Self
    where
        IntoIter: IntoIterator<IntoIter = Iter>,
    {
        let mut src = src.into_iter();

        let (current, finished) = match src.next() {
            Some(c) => (c, false),
            None => (' ', true),
        };

        let line = line + if current == '\n' { 1 } else { 0 };

        Source {
            current,
            finished,
            src,
            line,
            col: column,
        }
    }

    /// Consume the source and returns the iterator, line and column.
    pub fn unwrap(self) -> (Iter, i32, i32) {
        (self.src, self.line, self.col)
    }

    fn skip_whitespace(&mut self) {
        while !self.finished && (self.current.is_whitespace() || self.current == ',') {
            self.advance_one();
        }
    }

    fn advance_one(&mut self) {
        if self.finished {
            return;
        }
        match self.src.next() {
            Some('\n') => {
                self.current = '\n';
                self.line += 1;
                self.col = -1;
            }
            Some(c) => {
                self.current = c;
                self.col += 1;
            }
            None => {
                self.current = '~';
                self.finished = true;
            }
        }
    }

    fn push_digits(&mut self, buffer: &mut String) {
        while self.current.is_ascii_digit() {
            buffer.push(self.current);
            self.advance_one();
        }
    }
}

/// A context object for parsing SVG path data.
///
/// The parser can be reused to avoid reallocating its internal number buffer.
#[derive(Debug, Default)]
pub struct PathParser {
    float_buffer: String,
    stop_at: Option<char>,
}

impl PathParser {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses commands from `src` and appends them to `output`.
    ///
    /// On error, the commands parsed before the error are left in `output`.
    pub fn parse<Iter>(
        &mut self,
        options: &ParserOptions,
        src: &mut Source<Iter>,
        output: &mut Vec<PathCommand>,
    ) -> Result<(), ParseError>
    where
        Iter: Iterator<Item = char>,
    {
        self.stop_at = options.stop_at;

        let mut need_start = true;
        let mut implicit_cmd = 'M';

        src.skip_whitespace();

        while !src.finished {
            let mut cmd = src.current;
            let cmd_line = src.line;
            let cmd_col = src.col;

            if self.stop_at == Some(cmd) {
                break;
            }

            if cmd.is_ascii_alphabetic() {
                src.advance_one();
            } else {
                cmd = implicit_cmd;
            }

            // Path data must begin with a move-to. Once it has, SVG allows
            // drawing commands right after a close.
            if need_start && cmd != 'm' && cmd != 'M' {
                return Err(ParseError::MissingMoveTo {
                    command: cmd,
                    line: cmd_line,
                    column: cmd_col,
                });
            }

            let is_relative = cmd.is_ascii_lowercase();

            let command = match cmd {
                'm' | 'M' => {
                    let x = self.parse_number(src)?;
                    let y = self.parse_number(src)?;
                    need_start = false;
                    if is_relative {
                        PathCommand::RelativeMoveTo(vector(x, y))
                    } else {
                        PathCommand::MoveTo(point(x, y))
                    }
                }
                'l' | 'L' => {
                    let x = self.parse_number(src)?;
                    let y = self.parse_number(src)?;
                    if is_relative {
                        PathCommand::RelativeLineTo(vector(x, y))
                    } else {
                        PathCommand::LineTo(point(x, y))
                    }
                }
                'h' | 'H' => {
                    let x = self.parse_number(src)?;
                    if is_relative {
                        PathCommand::RelativeHorizontalLineTo(x)
                    } else {
                        PathCommand::HorizontalLineTo(x)
                    }
                }
                'v' | 'V' => {
                    let y = self.parse_number(src)?;
                    if is_relative {
                        PathCommand::RelativeVerticalLineTo(y)
                    } else {
                        PathCommand::VerticalLineTo(y)
                    }
                }
                'c' | 'C' => {
                    let args = self.parse_numbers::<_, 6>(src)?;
                    if is_relative {
                        PathCommand::RelativeCubicTo(
                            vector(args[0], args[1]),
                            vector(args[2], args[3]),
                            vector(args[4], args[5]),
                        )
                    } else {
                        PathCommand::CubicTo(
                            point(args[0], args[1]),
                            point(args[2], args[3]),
                            point(args[4], args[5]),
                        )
                    }
                }
                's' | 'S' => {
                    let args = self.parse_numbers::<_, 4>(src)?;
                    if is_relative {
                        PathCommand::SmoothRelativeCubicTo(
                            vector(args[0], args[1]),
                            vector(args[2], args[3]),
                        )
                    } else {
                        PathCommand::SmoothCubicTo(point(args[0], args[1]), point(args[2], args[3]))
                    }
                }
                'q' | 'Q' => {
                    let args = self.parse_numbers::<_, 4>(src)?;
                    if is_relative {
                        PathCommand::RelativeQuadraticTo(
                            vector(args[0], args[1]),
                            vector(args[2], args[3]),
                        )
                    } else {
                        PathCommand::QuadraticTo(point(args[0], args[1]), point(args[2], args[3]))
                    }
                }
                't' | 'T' => {
                    let x = self.parse_number(src)?;
                    let y = self.parse_number(src)?;
                    if is_relative {
                        PathCommand::SmoothRelativeQuadraticTo(vector(x, y))
                    } else {
                        PathCommand::SmoothQuadraticTo(point(x, y))
                    }
                }
                'a' | 'A' => {
                    let rx = self.parse_number(src)?;
                    let ry = self.parse_number(src)?;
                    let x_rotation = self.parse_number(src)?;
                    let large_arc = self.parse_flag(src)?;
                    let sweep = self.parse_flag(src)?;
                    let x = self.parse_number(src)?;
                    let y = self.parse_number(src)?;
                    let flags = ArcFlags { large_arc, sweep };
                    if is_relative {
                        PathCommand::RelativeArcTo(vector(rx, ry), x_rotation, flags, vector(x, y))
                    } else {
                        PathCommand::ArcTo(vector(rx, ry), x_rotation, flags, point(x, y))
                    }
                }
                'z' | 'Z' => PathCommand::Close,
                _ => {
                    return Err(ParseError::Command {
                        command: cmd,
                        line: cmd_line,
                        column: cmd_col,
                    });
                }
            };

            output.push(command);

            implicit_cmd = match cmd {
                'm' => 'l',
                'M' => 'L',
                'z' => 'm',
                'Z' => 'M',
                c => c,
            };

            src.skip_whitespace();
        }

        Ok(())
    }

    fn parse_numbers<Iter, const N: usize>(
        &mut self,
        src: &mut Source<Iter>,
    ) -> Result<[f64; N], ParseError>
    where
        Iter: Iterator<Item = char>,
    {
        let mut values = [0.0; N];
        for value in &mut values {
            *value = self.parse_number(src)?;
        }

        Ok(values)
    }

    fn parse_number(
        &mut self,
        src: &mut Source<impl Iterator<Item = char>>,
    ) -> Result<f64, ParseError> {
        self.float_buffer.clear();

        src.skip_whitespace();

        let line = src.line;
        let column = src.col;

        if src.current == '-' || src.current == '+' {
            self.float_buffer.push(src.current);
            src.advance_one();
        }

        src.push_digits(&mut self.float_buffer);

        if src.current == '.' {
            self.float_buffer.push('.');
            src.advance_one();

            src.push_digits(&mut self.float_buffer);
        }

        if src.current == 'e' || src.current == 'E' {
            self.float_buffer.push(src.current);
            src.advance_one();

            if src.current == '-' || src.current == '+' {
                self.float_buffer.push(src.current);
                src.advance_one();
            }

            src.push_digits(&mut self.float_buffer);
        }

        match self.float_buffer.parse::<f64>() {
            Ok(val) => Ok(val),
            Err(_) => Err(ParseError::Number {
                src: std::mem::take(&mut self.float_buffer),
                line,
                column,
            }),
        }
    }

    fn parse_flag(
        &mut self,
        src: &mut Source<impl Iterator<Item = char>>,
    ) -> Result<bool, ParseError> {
        src.skip_whitespace();
        match src.current {
            '1' => {
                src.advance_one();
                Ok(true)
            }
            '0' => {
                src.advance_one();
                Ok(false)
            }
            _ => Err(ParseError::Flag {
                src: src.current,
                line: src.line,
                column: src.col,
            }),
        }
    }
}

/// Parses the content of a `d` attribute with the default options.
pub fn parse_path(src: &str) -> Result<Vec<PathCommand>, ParseError> {
    let mut commands = Vec::new();
    PathParser::new().parse(
        &ParserOptions::DEFAULT,
        &mut Source::new(src.chars()),
        &mut commands,
    )?;

    Ok(commands)
}

#[test]
fn empty() {
    assert_eq!(parse_path(""), Ok(Vec::new()));
    assert_eq!(parse_path(" \n\t"), Ok(Vec::new()));
}

#[test]
fn simple_square() {
    let commands = parse_path("M 0 0 L 1 0 L 1 1 L 0 1 Z").unwrap();
    assert_eq!(
        commands,
        vec![
            PathCommand::MoveTo(point(0.0, 0.0)),
            PathCommand::LineTo(point(1.0, 0.0)),
            PathCommand::LineTo(point(1.0, 1.0)),
            PathCommand::LineTo(point(0.0, 1.0)),
            PathCommand::Close,
        ]
    );
}

#[test]
fn relative_commands_stay_relative() {
    let commands = parse_path("m1,2l3-4h5v-6c1 2 3 4 5 6s1 2 3 4q1 2 3 4t5 6z").unwrap();
    assert_eq!(
        commands,
        vec![
            PathCommand::RelativeMoveTo(vector(1.0, 2.0)),
            PathCommand::RelativeLineTo(vector(3.0, -4.0)),
            PathCommand::RelativeHorizontalLineTo(5.0),
            PathCommand::RelativeVerticalLineTo(-6.0),
            PathCommand::RelativeCubicTo(vector(1.0, 2.0), vector(3.0, 4.0), vector(5.0, 6.0)),
            PathCommand::SmoothRelativeCubicTo(vector(1.0, 2.0), vector(3.0, 4.0)),
            PathCommand::RelativeQuadraticTo(vector(1.0, 2.0), vector(3.0, 4.0)),
            PathCommand::SmoothRelativeQuadraticTo(vector(5.0, 6.0)),
            PathCommand::Close,
        ]
    );
}

#[test]
fn implicit_commands() {
    let commands = parse_path("M 0 0 1 1 2 2 m 1 1 1 1 H 1 2 3").unwrap();
    assert_eq!(
        commands,
        vec![
            PathCommand::MoveTo(point(0.0, 0.0)),
            PathCommand::LineTo(point(1.0, 1.0)),
            PathCommand::LineTo(point(2.0, 2.0)),
            PathCommand::RelativeMoveTo(vector(1.0, 1.0)),
            PathCommand::RelativeLineTo(vector(1.0, 1.0)),
            PathCommand::HorizontalLineTo(1.0),
            PathCommand::HorizontalLineTo(2.0),
            PathCommand::HorizontalLineTo(3.0),
        ]
    );
}

#[test]
fn compact_arc_flags() {
    let commands = parse_path("M0 0a1 2 30 014 5A1,2,0,1,0,6,7").unwrap();
    assert_eq!(
        commands[1],
        PathCommand::RelativeArcTo(
            vector(1.0, 2.0),
            30.0,
            ArcFlags {
                large_arc: false,
                sweep: true
            },
            vector(4.0, 5.0),
        )
    );
    assert_eq!(
        commands[2],
        PathCommand::ArcTo(
            vector(1.0, 2.0),
            0.0,
            ArcFlags {
                large_arc: true,
                sweep: false
            },
            point(6.0, 7.0),
        )
    );
}

#[test]
fn bad_flag() {
    match parse_path("M 0 0 A 1 1 0 2 0 1 1") {
        Err(ParseError::Flag { src: '2', .. }) => {}
        other => panic!("{:?}", other),
    }
}

#[test]
fn invalid_cmd() {
    assert_eq!(
        parse_path("M 0 0 x 0 0"),
        Err(ParseError::Command {
            command: 'x',
            line: 0,
            column: 6
        })
    );

    assert_eq!(
        parse_path("\n M 0 \n0 1 1 x 1 1"),
        Err(ParseError::Command {
            command: 'x',
            line: 2,
            column: 6
        })
    );
}

#[test]
fn number_01() {
    // Per the SVG path grammar, this is equivalent to "M 0.6 0.5".
    assert_eq!(
        parse_path("M 0.6.5"),
        Ok(vec![PathCommand::MoveTo(point(0.6, 0.5))])
    );
}

#[test]
fn number_scientific_notation() {
    assert_eq!(
        parse_path("M 1e-2 -1E3 L +1e+2 .5"),
        Ok(vec![
            PathCommand::MoveTo(point(0.01, -1000.0)),
            PathCommand::LineTo(point(100.0, 0.5)),
        ])
    );
}

#[test]
fn bad_numbers() {
    let bad_number = |src: &str| match parse_path(src) {
        Err(ParseError::Number { .. }) => true,
        r => {
            println!("{:?}", r);
            false
        }
    };

    assert!(bad_number("M 0 --1"));
    assert!(bad_number("M 0 1ee2"));
    assert!(bad_number("M 0 1e--1"));
    assert!(bad_number("M 0 *2"));
    assert!(bad_number("M 0 e"));
    assert!(bad_number("M 0 1e"));
    assert!(bad_number("M 0 ."));
    assert!(bad_number("M 0"));
}

#[test]
fn stop() {
    let options = ParserOptions {
        stop_at: Some('|'),
        ..ParserOptions::DEFAULT
    };
    let mut parser = PathParser::new();

    let mut parse = |src: &str| {
        let mut output = Vec::new();
        parser
            .parse(&options, &mut Source::new(src.chars()), &mut output)
            .map(|()| output)
    };

    assert_eq!(parse("M 0 0 | xxxxxx").unwrap().len(), 1);
    assert_eq!(parse("M 0 0| xxxxxx").unwrap().len(), 1);
    assert!(parse("| xxxxxx").unwrap().is_empty());
    assert!(parse("    | xxxxxx").unwrap().is_empty());
}

#[test]
fn resume_after_stop() {
    let options = ParserOptions {
        stop_at: Some('|'),
        ..ParserOptions::DEFAULT
    };
    let mut parser = PathParser::new();

    let mut src = Source::new("M 0 0 | M 1 1".chars());
    let mut first = Vec::new();
    parser.parse(&options, &mut src, &mut first).unwrap();
    assert_eq!(first, vec![PathCommand::MoveTo(point(0.0, 0.0))]);

    // The source stopped on the '|', the remaining iterator starts after it.
    let (rest, line, column) = src.unwrap();
    assert_eq!((line, column), (0, 6));

    let mut src = Source::with_position(line, column + 1, rest);
    let mut second = Vec::new();
    parser
        .parse(&ParserOptions::DEFAULT, &mut src, &mut second)
        .unwrap();
    assert_eq!(second, vec![PathCommand::MoveTo(point(1.0, 1.0))]);
}

#[test]
fn need_start() {
    match parse_path("L 1 1") {
        Err(ParseError::MissingMoveTo { command: 'L', .. }) => {}
        other => panic!("{:?}", other),
    }

    // Drawing after a close continues from the start of the closed sub-path.
    assert_eq!(
        parse_path("M 0 0 L 1 1 Z L 2 2").unwrap(),
        vec![
            PathCommand::MoveTo(point(0.0, 0.0)),
            PathCommand::LineTo(point(1.0, 1.0)),
            PathCommand::Close,
            PathCommand::LineTo(point(2.0, 2.0)),
        ]
    );
}

#[test]
fn partial_output_on_error() {
    let mut output = Vec::new();
    let res = PathParser::new().parse(
        &ParserOptions::DEFAULT,
        &mut Source::new("M 1 1 L 2 2 L x".chars()),
        &mut output,
    );

    assert!(res.is_err());
    assert_eq!(output.len(), 2);
}

#[test]
fn small_and_large_exponents() {
    parse_path("M 1e-9 0").unwrap();
    parse_path("M -1e-9 0").unwrap();
    parse_path("M -1e11 0").unwrap();
    parse_path("M 1.e-9 1.4e-4z").unwrap();
    parse_path("M 1.6e-9 1.4e-4 z").unwrap();
    parse_path("M0 1.6e-9L0 1.4e-4").unwrap();
}
