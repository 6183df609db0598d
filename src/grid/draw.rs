// src/grid/draw.rs

//! Segment and rectangle drawing.
//!
//! Ranges are half-open: `start` is drawn, `end` is not. An empty range
//! draws nothing.

use log::debug;

use super::Grid;
use crate::error::GridError;
use crate::pixel::Pixel;

impl Grid {
    /// Sets column `x` for every row in `[start_y, end_y)`.
    pub fn draw_vertical_segment(
        &mut self,
        x: usize,
        start_y: usize,
        end_y: usize,
        pixel: Pixel,
    ) -> Result<(), GridError> {
        debug!(
            "draw_vertical_segment: x={}, y={}..{}, pixel='{}'",
            x, start_y, end_y, pixel
        );
        for y in start_y..end_y {
            self.set(x, y, pixel)?;
        }
        Ok(())
    }

    /// Sets row `y` for every column in `[start_x, end_x)`.
    pub fn draw_horizontal_segment(
        &mut self,
        start_x: usize,
        end_x: usize,
        y: usize,
        pixel: Pixel,
    ) -> Result<(), GridError> {
        debug!(
            "draw_horizontal_segment: x={}..{}, y={}, pixel='{}'",
            start_x, end_x, y, pixel
        );
        for x in start_x..end_x {
            self.set(x, y, pixel)?;
        }
        Ok(())
    }

    /// Fills `[start_x, end_x) x [start_y, end_y)` solid, row by row.
    pub fn draw_rectangle(
        &mut self,
        start_x: usize,
        end_x: usize,
        start_y: usize,
        end_y: usize,
        pixel: Pixel,
    ) -> Result<(), GridError> {
        debug!(
            "draw_rectangle: x={}..{}, y={}..{}, pixel='{}'",
            start_x, end_x, start_y, end_y, pixel
        );
        // An empty column range draws nothing, however many rows it spans.
        if start_x >= end_x {
            return Ok(());
        }
        for y in start_y..end_y {
            for x in start_x..end_x {
                self.set(x, y, pixel)?;
            }
        }
        Ok(())
    }
}
