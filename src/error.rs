// src/error.rs

//! Error types for grid operations and command execution.

use std::fmt;

use crate::command::Verb;

/// Errors raised by `Grid` operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// Width or height is not a positive size the grid accepts.
    InvalidDimension { width: i64, height: i64 },
    /// A coordinate lies outside `[0, width) x [0, height)`.
    OutOfBounds {
        x: usize,
        y: usize,
        width: usize,
        height: usize,
    },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GridError::InvalidDimension { width, height } => {
                write!(f, "invalid grid dimensions {}x{}", width, height)
            }
            GridError::OutOfBounds {
                x,
                y,
                width,
                height,
            } => write!(
                f,
                "coordinate ({}, {}) is outside the {}x{} grid",
                x + 1,
                y + 1,
                width,
                height
            ),
        }
    }
}

impl std::error::Error for GridError {}

/// Errors surfaced by `CommandRouter::execute`.
#[derive(Debug)]
pub enum CommandError {
    /// Blank input line while blank lines are configured as errors.
    EmptyCommand,
    /// The first token does not name a known verb.
    UnknownCommand(String),
    /// The verb needs a grid, but `I` has not been issued yet.
    NoActiveGrid { verb: Verb },
    /// Wrong arity or argument type for the verb.
    InvalidArguments {
        verb: Verb,
        usage: &'static str,
        reason: String,
    },
    /// The grid rejected the operation.
    Grid(GridError),
    /// The persistence sink failed to store the grid.
    Persistence {
        filename: String,
        source: anyhow::Error,
    },
}

impl fmt::Display for CommandError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CommandError::EmptyCommand => write!(f, "empty command"),
            CommandError::UnknownCommand(verb) => write!(f, "unknown command '{}'", verb),
            CommandError::NoActiveGrid { verb } => write!(
                f,
                "no matrix instance for '{}'; start with the command I X Y",
                verb
            ),
            CommandError::InvalidArguments {
                verb,
                usage,
                reason,
            } => write!(
                f,
                "invalid arguments for '{}' ({}): {}",
                verb, reason, usage
            ),
            CommandError::Grid(err) => write!(f, "{}", err),
            CommandError::Persistence { filename, source } => {
                write!(f, "failed to save '{}': {:#}", filename, source)
            }
        }
    }
}

impl std::error::Error for CommandError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CommandError::Grid(err) => Some(err),
            CommandError::Persistence { source, .. } => Some(&**source),
            _ => None,
        }
    }
}

impl From<GridError> for CommandError {
    fn from(err: GridError) -> Self {
        CommandError::Grid(err)
    }
}
