#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum CellState {
    #[default]
    Dead,
    Alive,
}

impl CellState {
    pub fn is_alive(self) -> bool {
        self == CellState::Alive
    }

    /// State of this cell in the next generation given its count of live
    /// neighbors (B3/S23).
    ///
    /// A count of 3 yields `Alive` whatever the current state is.
    #[must_use]
    pub fn next_state(self, alive_neighbors: usize) -> Self {
        match (self, alive_neighbors) {
            (_, 3) => CellState::Alive,
            (CellState::Alive, 2) => CellState::Alive,
            _ => CellState::Dead,
        }
    }

    #[must_use]
    pub fn toggle(self) -> Self {
        match self {
            CellState::Dead => CellState::Alive,
            CellState::Alive => CellState::Dead,
        }
    }
}

impl From<bool> for CellState {
    fn from(alive: bool) -> Self {
        if alive {
            CellState::Alive
        } else {
            CellState::Dead
        }
    }
}
