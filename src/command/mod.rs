// src/command/mod.rs

//! Parses command lines into typed actions and routes them to the grid.
//!
//! A command line is a single-letter verb followed by whitespace-separated
//! arguments, e.g. `K 1 1 3 4 W`. Each verb has a fixed argument schema that
//! is checked before anything touches the grid.

mod router;

use std::fmt;
use std::num::IntErrorKind;

use crate::error::CommandError;
use crate::pixel::Pixel;

pub use router::{CommandRouter, RouterStatus};

// --- Verbs ---

/// The commands the editor understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Verb {
    /// `I W H`: create a new grid.
    Init,
    /// `L X Y C`: set a single pixel.
    SetPixel,
    /// `V X Y1 Y2 C`: draw a vertical segment.
    DrawVertical,
    /// `H X1 X2 Y C`: draw a horizontal segment.
    DrawHorizontal,
    /// `F X Y C`: flood fill a region.
    FillRegion,
    /// `K X1 Y1 X2 Y2 C`: draw a solid rectangle.
    DrawRectangle,
    /// `S NAME`: save the grid.
    Save,
    /// `X`: end the session.
    Exit,
}

impl Verb {
    /// Every verb, in help-text order (sorted by letter).
    pub const ALL: [Verb; 8] = [
        Verb::FillRegion,
        Verb::DrawHorizontal,
        Verb::Init,
        Verb::DrawRectangle,
        Verb::SetPixel,
        Verb::Save,
        Verb::DrawVertical,
        Verb::Exit,
    ];

    /// Looks up the verb for a command token. Matching is case-sensitive.
    pub fn from_token(token: &str) -> Option<Self> {
        Verb::ALL.into_iter().find(|verb| {
            let mut chars = token.chars();
            chars.next() == Some(verb.letter()) && chars.next().is_none()
        })
    }

    /// The letter users type for this verb.
    pub fn letter(self) -> char {
        match self {
            Verb::Init => 'I',
            Verb::SetPixel => 'L',
            Verb::DrawVertical => 'V',
            Verb::DrawHorizontal => 'H',
            Verb::FillRegion => 'F',
            Verb::DrawRectangle => 'K',
            Verb::Save => 'S',
            Verb::Exit => 'X',
        }
    }

    pub fn usage(self) -> &'static str {
        match self {
            Verb::Init => "I W H",
            Verb::SetPixel => "L X Y C",
            Verb::DrawVertical => "V X Y1 Y2 C",
            Verb::DrawHorizontal => "H X1 X2 Y C",
            Verb::FillRegion => "F X Y C",
            Verb::DrawRectangle => "K X1 Y1 X2 Y2 C",
            Verb::Save => "S NAME",
            Verb::Exit => "X",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Verb::Init => "Start matrix",
            Verb::SetPixel => "Set pixel",
            Verb::DrawVertical => "Draw vertical line",
            Verb::DrawHorizontal => "Draw horizontal line",
            Verb::FillRegion => "Fill region",
            Verb::DrawRectangle => "Draw rectangle",
            Verb::Save => "Save file",
            Verb::Exit => "Exit program",
        }
    }

    /// Ordered argument kinds this verb takes.
    pub fn schema(self) -> &'static [ArgKind] {
        use ArgKind::{Coordinate, Integer, Name, Pixel};
        match self {
            Verb::Init => &[Integer, Integer],
            Verb::SetPixel => &[Coordinate, Coordinate, Pixel],
            Verb::DrawVertical => &[Coordinate, Coordinate, Coordinate, Pixel],
            Verb::DrawHorizontal => &[Coordinate, Coordinate, Coordinate, Pixel],
            Verb::FillRegion => &[Coordinate, Coordinate, Pixel],
            Verb::DrawRectangle => &[Coordinate, Coordinate, Coordinate, Coordinate, Pixel],
            Verb::Save => &[Name],
            Verb::Exit => &[],
        }
    }

    /// Whether the verb can only run once `I` has created a grid.
    pub fn requires_grid(self) -> bool {
        !matches!(self, Verb::Init | Verb::Exit)
    }

    /// One line per verb: `I (Start matrix, example: I W H)`.
    pub fn help_text() -> String {
        Verb::ALL
            .iter()
            .map(|verb| {
                format!(
                    "{} ({}, example: {})",
                    verb.letter(),
                    verb.description(),
                    verb.usage()
                )
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl fmt::Display for Verb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

// --- Arguments ---

/// The type an argument position expects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArgKind {
    /// Any base-10 integer. Range checks happen at the grid.
    Integer,
    /// A 1-based coordinate: an integer of at least 1.
    Coordinate,
    /// A single printable, non-whitespace character.
    Pixel,
    /// A free-form single token, such as a file name.
    Name,
}

/// A validated argument value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Arg {
    Integer(i64),
    Coordinate(usize),
    Pixel(Pixel),
    Name(String),
}

impl ArgKind {
    /// Converts a raw token, or explains why it does not fit.
    pub fn parse(self, raw: &str) -> Result<Arg, String> {
        match self {
            ArgKind::Integer => parse_integer(raw).map(Arg::Integer),
            ArgKind::Coordinate => {
                let value = parse_integer(raw)?;
                usize::try_from(value)
                    .ok()
                    .filter(|v| *v >= 1)
                    .map(Arg::Coordinate)
                    .ok_or_else(|| format!("coordinate {} must be 1 or greater", value))
            }
            ArgKind::Pixel => Pixel::from_token(raw)
                .map(Arg::Pixel)
                .ok_or_else(|| format!("'{}' is not a single-character color", raw)),
            ArgKind::Name => Ok(Arg::Name(raw.to_string())),
        }
    }
}

fn parse_integer(raw: &str) -> Result<i64, String> {
    raw.parse::<i64>().map_err(|e| match e.kind() {
        IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => {
            format!("'{}' is out of range", raw)
        }
        _ => format!("'{}' is not an integer", raw),
    })
}

// --- Commands and Actions ---

/// A tokenized command line: verb plus raw arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Command {
    pub verb: Verb,
    pub args: Vec<String>,
}

/// A fully validated command. Coordinates are still 1-based, as typed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Init {
        width: i64,
        height: i64,
    },
    SetPixel {
        x: usize,
        y: usize,
        pixel: Pixel,
    },
    DrawVertical {
        x: usize,
        y1: usize,
        y2: usize,
        pixel: Pixel,
    },
    DrawHorizontal {
        x1: usize,
        x2: usize,
        y: usize,
        pixel: Pixel,
    },
    FillRegion {
        x: usize,
        y: usize,
        pixel: Pixel,
    },
    DrawRectangle {
        x1: usize,
        y1: usize,
        x2: usize,
        y2: usize,
        pixel: Pixel,
    },
    Save {
        filename: String,
    },
    Exit,
}

impl Command {
    /// Splits a line into verb and arguments.
    ///
    /// Returns `Ok(None)` for a blank line and `UnknownCommand` when the first
    /// token is not a verb.
    pub fn parse(line: &str) -> Result<Option<Self>, CommandError> {
        let mut tokens = line.split_whitespace();
        let Some(head) = tokens.next() else {
            return Ok(None);
        };
        let verb =
            Verb::from_token(head).ok_or_else(|| CommandError::UnknownCommand(head.to_string()))?;
        Ok(Some(Command {
            verb,
            args: tokens.map(str::to_string).collect(),
        }))
    }

    /// Checks the arguments against the verb's schema.
    pub fn validate(&self) -> Result<Action, CommandError> {
        let schema = self.verb.schema();
        if self.args.len() != schema.len() {
            return Err(self.invalid(format!(
                "expected {} argument(s), got {}",
                schema.len(),
                self.args.len()
            )));
        }

        let values = schema
            .iter()
            .zip(&self.args)
            .enumerate()
            .map(|(i, (kind, raw))| {
                kind.parse(raw)
                    .map_err(|reason| self.invalid(format!("argument {}: {}", i + 1, reason)))
            })
            .collect::<Result<Vec<_>, _>>()?;

        use Arg::{Coordinate as C, Integer as N, Name, Pixel as P};
        let action = match (self.verb, values.as_slice()) {
            (Verb::Init, [N(width), N(height)]) => Action::Init {
                width: *width,
                height: *height,
            },
            (Verb::SetPixel, [C(x), C(y), P(pixel)]) => Action::SetPixel {
                x: *x,
                y: *y,
                pixel: *pixel,
            },
            (Verb::DrawVertical, [C(x), C(y1), C(y2), P(pixel)]) => Action::DrawVertical {
                x: *x,
                y1: *y1,
                y2: *y2,
                pixel: *pixel,
            },
            (Verb::DrawHorizontal, [C(x1), C(x2), C(y), P(pixel)]) => Action::DrawHorizontal {
                x1: *x1,
                x2: *x2,
                y: *y,
                pixel: *pixel,
            },
            (Verb::FillRegion, [C(x), C(y), P(pixel)]) => Action::FillRegion {
                x: *x,
                y: *y,
                pixel: *pixel,
            },
            (Verb::DrawRectangle, [C(x1), C(y1), C(x2), C(y2), P(pixel)]) => {
                Action::DrawRectangle {
                    x1: *x1,
                    y1: *y1,
                    x2: *x2,
                    y2: *y2,
                    pixel: *pixel,
                }
            }
            (Verb::Save, [Name(filename)]) => Action::Save {
                filename: filename.clone(),
            },
            (Verb::Exit, []) => Action::Exit,
            _ => return Err(self.invalid("arguments do not match the schema".to_string())),
        };
        Ok(action)
    }

    fn invalid(&self, reason: String) -> CommandError {
        CommandError::InvalidArguments {
            verb: self.verb,
            usage: self.verb.usage(),
            reason,
        }
    }
}
