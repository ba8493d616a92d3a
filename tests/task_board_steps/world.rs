//! Shared world state for task board BDD scenarios.

use std::sync::Arc;

use mockable::DefaultClock;
use rstest::fixture;
use taskboard::board::adapters::InMemorySnapshotStore;
use taskboard::board::services::TaskBoard;

/// Board type used by the BDD world.
pub type TestBoard = TaskBoard<InMemorySnapshotStore, DefaultClock>;

/// Scenario world for task board behaviour tests.
pub struct BoardWorld {
    /// The board under test.
    pub board: TestBoard,
    /// Texts of the most recently derived view, if a search has run.
    pub last_view: Option<Vec<String>>,
}

impl BoardWorld {
    /// Creates a world with an empty board.
    #[must_use]
    pub fn new() -> Self {
        Self {
            board: TaskBoard::open(
                Arc::new(InMemorySnapshotStore::new()),
                Arc::new(DefaultClock),
            ),
            last_view: None,
        }
    }
}

impl Default for BoardWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> BoardWorld {
    BoardWorld::default()
}
