// src/grid/fill.rs

//! Flood fill over 4-connected cells.

use log::{debug, trace};

use super::Grid;
use crate::error::GridError;
use crate::pixel::Pixel;

/// Neighbor visiting order: left, right, up, down.
const NEIGHBOR_OFFSETS: [(isize, isize); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

impl Grid {
    /// Replaces the 4-connected region sharing the value at `(x, y)` with `pixel`.
    ///
    /// The seed is painted first, then neighbors are walked with an explicit
    /// stack so large grids cannot exhaust the call stack. Neighbors outside
    /// the grid are skipped. A cell stops matching the region as soon as it
    /// is painted, so each cell is pushed at most once.
    ///
    /// Returns the number of cells changed. Filling with the value the
    /// region already has changes nothing.
    pub fn fill_region(&mut self, x: usize, y: usize, pixel: Pixel) -> Result<usize, GridError> {
        let region = self.get(x, y)?;
        if region == pixel {
            debug!(
                "fill_region: seed ({}, {}) already '{}', nothing to do",
                x, y, pixel
            );
            return Ok(0);
        }

        self.set(x, y, pixel)?;
        let mut changed = 1;
        let mut pending = vec![(x, y)];

        while let Some((cx, cy)) = pending.pop() {
            for (dx, dy) in NEIGHBOR_OFFSETS {
                let Some((nx, ny)) = self.neighbor(cx, cy, dx, dy) else {
                    continue;
                };
                if self.cells[ny][nx] != region {
                    continue;
                }
                self.cells[ny][nx] = pixel;
                changed += 1;
                trace!("fill_region: painted ({}, {})", nx, ny);
                pending.push((nx, ny));
            }
        }

        debug!(
            "fill_region: seed ({}, {}) region '{}' -> '{}', {} cells",
            x, y, region, pixel, changed
        );
        Ok(changed)
    }

    /// Offsets `(x, y)` by `(dx, dy)`, or `None` if that leaves the grid.
    fn neighbor(&self, x: usize, y: usize, dx: isize, dy: isize) -> Option<(usize, usize)> {
        let nx = x.checked_add_signed(dx)?;
        let ny = y.checked_add_signed(dy)?;
        self.contains(nx, ny).then_some((nx, ny))
    }
}
