// src/command/router.rs

//! Routes validated commands to the live grid.

use log::{debug, info, warn};

use super::{Action, Command, Verb};
use crate::config::Config;
use crate::error::{CommandError, GridError};
use crate::grid::Grid;
use crate::sink::PersistenceSink;

/// What the caller should do after a command ran.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum RouterStatus {
    /// Keep reading commands.
    Running,
    /// `X` was issued; the session should end.
    Exit,
}

/// Router state: no grid until the first `I`, then exactly one live grid.
#[derive(Debug)]
enum SessionState {
    Uninitialized,
    Ready(Grid),
}

/// Owns the session's grid and executes command lines against it.
pub struct CommandRouter<S: PersistenceSink> {
    state: SessionState,
    sink: S,
    config: Config,
}

impl<S: PersistenceSink> CommandRouter<S> {
    /// Creates a router with default settings.
    pub fn new(sink: S) -> Self {
        Self::with_config(sink, Config::default())
    }

    pub fn with_config(sink: S, config: Config) -> Self {
        CommandRouter {
            state: SessionState::Uninitialized,
            sink,
            config,
        }
    }

    /// The live grid, if `I` has been issued.
    pub fn grid(&self) -> Option<&Grid> {
        match &self.state {
            SessionState::Ready(grid) => Some(grid),
            SessionState::Uninitialized => None,
        }
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Parses, validates and runs one command line.
    ///
    /// Checks happen in order: unknown verb, missing grid, bad arguments.
    /// A failing command leaves the router usable; drawing commands keep the
    /// cells they set before the failure.
    pub fn execute(&mut self, line: &str) -> Result<RouterStatus, CommandError> {
        let Some(command) = Command::parse(line)? else {
            if self.config.session.reject_blank_lines {
                return Err(CommandError::EmptyCommand);
            }
            return Ok(RouterStatus::Running);
        };

        if command.verb.requires_grid() && self.grid().is_none() {
            warn!("Rejected '{}': no grid yet", command.verb);
            return Err(CommandError::NoActiveGrid {
                verb: command.verb,
            });
        }

        let action = command.validate()?;
        debug!("Executing {:?}", action);
        self.apply(action)
    }

    fn apply(&mut self, action: Action) -> Result<RouterStatus, CommandError> {
        match action {
            Action::Init { width, height } => {
                let grid = self.create_grid(width, height)?;
                info!("Created {}x{} grid", grid.width(), grid.height());
                self.state = SessionState::Ready(grid);
            }
            // User ranges are inclusive and 1-based; the grid takes half-open,
            // 0-based ranges, so starts shift by one and ends stay as typed.
            Action::SetPixel { x, y, pixel } => {
                self.active_grid(Verb::SetPixel)?.set(x - 1, y - 1, pixel)?;
            }
            Action::DrawVertical { x, y1, y2, pixel } => {
                self.active_grid(Verb::DrawVertical)?
                    .draw_vertical_segment(x - 1, y1 - 1, y2, pixel)?;
            }
            Action::DrawHorizontal { x1, x2, y, pixel } => {
                self.active_grid(Verb::DrawHorizontal)?
                    .draw_horizontal_segment(x1 - 1, x2, y - 1, pixel)?;
            }
            Action::FillRegion { x, y, pixel } => {
                let changed = self
                    .active_grid(Verb::FillRegion)?
                    .fill_region(x - 1, y - 1, pixel)?;
                debug!("Fill changed {} cells", changed);
            }
            Action::DrawRectangle {
                x1,
                y1,
                x2,
                y2,
                pixel,
            } => {
                self.active_grid(Verb::DrawRectangle)?
                    .draw_rectangle(x1 - 1, x2, y1 - 1, y2, pixel)?;
            }
            Action::Save { filename } => self.save(filename)?,
            Action::Exit => {
                info!("Exit requested");
                return Ok(RouterStatus::Exit);
            }
        }
        Ok(RouterStatus::Running)
    }

    fn create_grid(&self, width: i64, height: i64) -> Result<Grid, GridError> {
        let invalid = GridError::InvalidDimension { width, height };
        let (Ok(w), Ok(h)) = (usize::try_from(width), usize::try_from(height)) else {
            return Err(invalid);
        };
        if w > self.config.grid.max_width || h > self.config.grid.max_height {
            warn!(
                "Grid {}x{} exceeds the configured maximum of {}x{}",
                w, h, self.config.grid.max_width, self.config.grid.max_height
            );
            return Err(invalid);
        }
        Grid::with_default_pixel(w, h, self.config.grid.default_pixel)
    }

    fn active_grid(&mut self, verb: Verb) -> Result<&mut Grid, CommandError> {
        match &mut self.state {
            SessionState::Ready(grid) => Ok(grid),
            SessionState::Uninitialized => Err(CommandError::NoActiveGrid { verb }),
        }
    }

    fn save(&mut self, filename: String) -> Result<(), CommandError> {
        let mut contents = self.active_grid(Verb::Save)?.export();
        if self.config.output.trailing_newline {
            contents.push(b'\n');
        }
        self.sink
            .save(&filename, &contents)
            .map_err(|source| CommandError::Persistence { filename, source })
    }
}
