// src/grid/mod.rs

//! The pixel grid: storage, coordinate-indexed access and rendering.
//!
//! All coordinates in this module are 0-based. Conversion from the 1-based
//! coordinates users type happens in `crate::command`.

mod draw;
mod fill;

use std::fmt;

use log::{debug, trace};

use crate::error::GridError;
use crate::pixel::{Pixel, DEFAULT_PIXEL};

/// A `width` x `height` matrix of pixels.
///
/// Every row holds exactly `width` pixels and there are exactly `height`
/// rows. Cells are never unset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    default_pixel: Pixel,
    cells: Vec<Vec<Pixel>>,
}

impl Grid {
    /// Creates a grid filled with `DEFAULT_PIXEL`.
    pub fn new(width: usize, height: usize) -> Result<Self, GridError> {
        Self::with_default_pixel(width, height, DEFAULT_PIXEL)
    }

    /// Creates a grid with every cell set to `default_pixel`.
    pub fn with_default_pixel(
        width: usize,
        height: usize,
        default_pixel: Pixel,
    ) -> Result<Self, GridError> {
        if width == 0 || height == 0 {
            return Err(GridError::InvalidDimension {
                width: width as i64,
                height: height as i64,
            });
        }
        debug!(
            "Creating {}x{} grid filled with '{}'",
            width, height, default_pixel
        );
        Ok(Grid {
            width,
            height,
            default_pixel,
            cells: vec![vec![default_pixel; width]; height],
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// The pixel every cell held when the grid was created.
    pub fn default_pixel(&self) -> Pixel {
        self.default_pixel
    }

    /// Iterates over the rows, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Pixel]> + '_ {
        self.cells.iter().map(Vec::as_slice)
    }

    /// Returns the pixel at `(x, y)`.
    pub fn get(&self, x: usize, y: usize) -> Result<Pixel, GridError> {
        self.check_bounds(x, y)?;
        Ok(self.cells[y][x])
    }

    /// Overwrites the pixel at `(x, y)`.
    ///
    /// Segments and rectangles are built from this call, so a failing
    /// draw leaves exactly the cells it had already set.
    pub fn set(&mut self, x: usize, y: usize, pixel: Pixel) -> Result<(), GridError> {
        self.check_bounds(x, y)?;
        trace!("set ({}, {}) = '{}'", x, y, pixel);
        self.cells[y][x] = pixel;
        Ok(())
    }

    /// Returns true if `(x, y)` addresses a cell of this grid.
    pub fn contains(&self, x: usize, y: usize) -> bool {
        x < self.width && y < self.height
    }

    fn check_bounds(&self, x: usize, y: usize) -> Result<(), GridError> {
        if self.contains(x, y) {
            return Ok(());
        }
        Err(GridError::OutOfBounds {
            x,
            y,
            width: self.width,
            height: self.height,
        })
    }

    /// Renders the grid as `height` lines joined by `\n`, no trailing newline.
    pub fn render(&self) -> String {
        self.to_string()
    }

    /// The rendered grid as bytes, ready for a persistence sink.
    pub fn export(&self) -> Vec<u8> {
        self.render().into_bytes()
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (y, row) in self.cells.iter().enumerate() {
            if y > 0 {
                writeln!(f)?;
            }
            for pixel in row {
                write!(f, "{}", pixel)?;
            }
        }
        Ok(())
    }
}
