//! Conway's Game of Life on a finite grid whose edges wrap around.
//!
//! Build a [`Grid`], seed some cells alive, then call [`next`] (or iterate
//! [`generations`]) to advance it:
//!
//! ```
//! use toroidal_life::{next, CellState, Grid, Point};
//!
//! let mut grid = Grid::new(5, 5)?;
//! for x in 1..=3 {
//!     grid.mark_alive(Point::new(x, 2));
//! }
//!
//! let rotated = next(&grid);
//! assert_eq!(rotated.get(Point::new(2, 1)), CellState::Alive);
//! assert_eq!(rotated.get(Point::new(1, 2)), CellState::Dead);
//! assert_eq!(next(&rotated), grid);
//! # Ok::<(), toroidal_life::GridError>(())
//! ```

#![deny(clippy::all)]
#![forbid(unsafe_code)]

pub mod auxiliary;
pub mod error;
pub mod projects;
pub mod traits_and_structs;

pub use error::{GridError, GridResult};
pub use projects::life::{generations, is_empty, next};
pub use traits_and_structs::cell::CellState;
pub use traits_and_structs::grid::{Grid, DEFAULT_FILL};
pub use traits_and_structs::point::Point;
