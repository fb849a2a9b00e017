//! Domain model for the task board.
//!
//! The board domain models tasks, team members, priorities, and the partial
//! updates applied to tasks, while keeping all infrastructure concerns
//! outside of the domain boundary.

mod error;
mod ids;
mod member;
mod priority;
mod quick_add;
mod task;

pub use error::{BoardDomainError, ParsePriorityError};
pub use ids::{MemberId, TaskId};
pub use member::{FALLBACK_AVATAR_URL, TeamMember};
pub use priority::Priority;
pub use quick_add::{QuickAddInput, parse_quick_add};
pub use task::{AssigneeChange, Task, TaskPatch};
