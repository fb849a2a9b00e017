//! Orchestration and query services for the board.

mod board;
mod seed;
mod views;

pub use board::{AddMemberRequest, BoardService, CreateTaskRequest};
pub use views::{BoardStats, CompletionFilter, PriorityFilter, display_order, filter_tasks, stats};
