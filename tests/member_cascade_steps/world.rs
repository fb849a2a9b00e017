//! Shared world state for member cascade BDD scenarios.

use chrono::{DateTime, Utc};
use mockable::DefaultClock;
use rstest::fixture;
use taskboard::board::{
    adapters::memory::InMemoryStateStore,
    domain::{MemberId, Task},
    services::BoardService,
};

/// Service type used by the BDD world.
pub type TestBoardService = BoardService<InMemoryStateStore, DefaultClock>;

/// Scenario world for member cascade behaviour tests.
pub struct CascadeWorld {
    /// The board under test, starting empty.
    pub service: TestBoardService,
    /// Task update timestamps captured just before the deletion step, as
    /// `(title, updated_at)` pairs.
    pub updates_before_deletion: Vec<(String, DateTime<Utc>)>,
}

impl CascadeWorld {
    /// Creates a world with an empty board.
    #[must_use]
    pub fn new() -> Self {
        Self {
            service: BoardService::new(InMemoryStateStore::new(), DefaultClock),
            updates_before_deletion: Vec::new(),
        }
    }
}

impl Default for CascadeWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> CascadeWorld {
    CascadeWorld::default()
}

/// Looks up a member identifier by display name.
pub fn member_id_by_name(service: &TestBoardService, name: &str) -> Option<MemberId> {
    service
        .members()
        .iter()
        .find(|member| member.name() == name)
        .map(|member| member.id())
}

/// Looks up a task by title.
pub fn task_by_title<'a>(service: &'a TestBoardService, title: &str) -> Option<&'a Task> {
    service.tasks().iter().find(|task| task.title() == title)
}
