use std::fmt;

use log::{debug, trace};
use randomize::PCG32;

use crate::auxiliary::randomizer::seeded_rng;
use crate::error::{GridError, GridResult};
use crate::projects::life;
use crate::traits_and_structs::cell::CellState;
use crate::traits_and_structs::point::Point;

/// Probability that [`Grid::new_random`] seeds a cell alive.
pub const DEFAULT_FILL: f32 = 0.5;

/// Offsets of the eight neighbors of a cell, `dx` outer and `dy` inner.
const NEIGHBOR_OFFSETS: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// A fixed-size grid of cells whose edges wrap around, making it a torus.
///
/// Every [`Point`] addresses exactly one cell: coordinates are reduced
/// modulo the width and height, so `(-1, 0)` is the last cell of the first
/// row and `(width, 0)` is the first one.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Grid {
    cells: Vec<CellState>,
    width: usize,
    height: usize,
}

impl Grid {
    pub fn new(width: usize, height: usize) -> GridResult<Self> {
        let size = checked_size(width, height)?;
        trace!("created {}x{} grid", width, height);
        Ok(Self {
            cells: vec![CellState::Dead; size],
            width,
            height,
        })
    }

    /// Create a grid seeded from OS entropy, each cell alive with
    /// probability [`DEFAULT_FILL`].
    pub fn new_random(width: usize, height: usize) -> GridResult<Self> {
        let mut result = Self::new(width, height)?;
        let mut rng = seeded_rng()?;
        result.randomize(&mut rng, DEFAULT_FILL);
        Ok(result)
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn get(&self, point: Point) -> CellState {
        self.cells[self.grid_idx(point)]
    }

    pub fn mark_alive(&mut self, point: Point) {
        self.set(point, CellState::Alive);
    }

    pub fn mark_dead(&mut self, point: Point) {
        self.set(point, CellState::Dead);
    }

    pub fn set(&mut self, point: Point, state: CellState) {
        let i = self.grid_idx(point);
        self.cells[i] = state;
    }

    pub fn toggle(&mut self, point: Point) -> CellState {
        let i = self.grid_idx(point);
        self.cells[i] = self.cells[i].toggle();
        self.cells[i]
    }

    /// The eight cells around `point`, in `NEIGHBOR_OFFSETS` order.
    ///
    /// On grids narrower or shorter than 3 cells some neighbors are the
    /// same cell (possibly `point` itself) seen through the wrap.
    pub fn neighbors(&self, point: Point) -> [CellState; 8] {
        let (x, y) = point.wrap(self.width, self.height);
        let center = Point::new(x as isize, y as isize);
        NEIGHBOR_OFFSETS.map(|offset| self.get(center + offset))
    }

    pub fn alive_neighbors(&self, point: Point) -> usize {
        self.neighbors(point)
            .iter()
            .filter(|cell| cell.is_alive())
            .count()
    }

    /// Row-major copy of the cells, `height` rows of `width` cells.
    pub fn to_array(&self) -> Vec<Vec<CellState>> {
        self.cells
            .chunks_exact(self.width)
            .map(<[CellState]>::to_vec)
            .collect()
    }

    pub fn iter_points(&self) -> impl Iterator<Item = Point> + Clone {
        let (width, height) = (self.width as isize, self.height as isize);
        (0..height).flat_map(move |y| (0..width).map(move |x| Point::new(x, y)))
    }

    pub fn is_empty(&self) -> bool {
        !self.cells.iter().any(|cell| cell.is_alive())
    }

    pub fn population(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_alive()).count()
    }

    pub fn clear(&mut self) {
        for c in self.cells.iter_mut() {
            *c = CellState::Dead;
        }
    }

    /// Reseed every cell, alive with probability `fill`.
    pub fn randomize(&mut self, rng: &mut PCG32, fill: f32) {
        for c in self.cells.iter_mut() {
            let alive = randomize::f32_half_open_right(rng.next_u32()) < fill;
            *c = CellState::from(alive);
        }
        debug!(
            "randomized {}x{} grid, {} alive",
            self.width,
            self.height,
            self.population()
        );
    }

    /// Set every cell on the line from `from` to `to`, both ends included.
    /// Points past an edge wrap like any other coordinate.
    ///
    /// A line longer than one lap of the torus is shortened to one lap in
    /// the same direction, so `to` itself may be left untouched.
    pub fn set_line(&mut self, from: Point, to: Point, state: CellState) {
        let (x0, y0) = from.wrap(self.width, self.height);
        let start = Point::new(x0 as isize, y0 as isize);
        let (dx, dy) = self.lap_offset(from, to);
        for (x, y) in line_drawing::Bresenham::new((0, 0), (dx, dy)) {
            self.set(start + (x, y), state);
        }
    }

    #[must_use]
    pub fn next_generation(&self) -> Grid {
        life::next(self)
    }

    // Offset from `from` to `to`, scaled down to at most one lap.
    fn lap_offset(&self, from: Point, to: Point) -> (isize, isize) {
        let dx = to.x as i128 - from.x as i128;
        let dy = to.y as i128 - from.y as i128;
        let steps = dx.abs().max(dy.abs());
        let lap = self.width.max(self.height) as i128;
        let (dx, dy) = if steps > lap {
            (dx * lap / steps, dy * lap / steps)
        } else {
            (dx, dy)
        };
        // |dx|, |dy| <= lap <= isize::MAX
        (dx as isize, dy as isize)
    }

    fn grid_idx(&self, point: Point) -> usize {
        let (x, y) = point.wrap(self.width, self.height);
        x + y * self.width
    }
}

fn checked_size(width: usize, height: usize) -> GridResult<usize> {
    match width.checked_mul(height) {
        Some(size) if width > 0 && height > 0 && size <= isize::MAX as usize => Ok(size),
        _ => {
            debug!("rejected grid dimensions {}x{}", width, height);
            Err(GridError::InvalidDimension { width, height })
        }
    }
}

impl TryFrom<Vec<Vec<CellState>>> for Grid {
    type Error = GridError;

    /// Rebuild a grid from a [`Grid::to_array`] snapshot. Rows must be
    /// non-empty and all the same length.
    fn try_from(rows: Vec<Vec<CellState>>) -> GridResult<Self> {
        let height = rows.len();
        let width = rows.first().map_or(0, Vec::len);
        if let Some(row) = rows.iter().find(|row| row.len() != width) {
            debug!("rejected ragged row of {} cells, expected {}", row.len(), width);
            return Err(GridError::InvalidDimension { width, height });
        }
        checked_size(width, height)?;
        Ok(Self {
            cells: rows.into_iter().flatten().collect(),
            width,
            height,
        })
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (y, row) in self.cells.chunks_exact(self.width).enumerate() {
            if y > 0 {
                writeln!(f)?;
            }
            for (x, cell) in row.iter().enumerate() {
                if x > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{}", u8::from(cell.is_alive()))?;
            }
        }
        Ok(())
    }
}
