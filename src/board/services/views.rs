//! Derived, read-only views over the task collection.
//!
//! Every function here is a pure computation over a task slice; nothing in
//! this module mutates board state or touches persistence.

use crate::board::domain::{Priority, Task};

/// Completion-state filter for task views.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CompletionFilter {
    /// Keep every task.
    #[default]
    All,
    /// Keep only tasks that are not completed.
    Active,
    /// Keep only completed tasks.
    Completed,
}

impl CompletionFilter {
    /// Returns whether the task passes this filter.
    #[must_use]
    pub const fn matches(self, task: &Task) -> bool {
        match self {
            Self::All => true,
            Self::Active => !task.completed(),
            Self::Completed => task.completed(),
        }
    }
}

/// Priority filter for task views.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PriorityFilter {
    /// Keep every task.
    #[default]
    All,
    /// Keep only tasks of the given priority.
    Only(Priority),
}

impl PriorityFilter {
    /// Returns whether the task passes this filter.
    #[must_use]
    pub fn matches(self, task: &Task) -> bool {
        match self {
            Self::All => true,
            Self::Only(priority) => task.priority() == priority,
        }
    }
}

/// Returns the tasks passing both filters, in their stored order.
#[must_use]
pub fn filter_tasks<'a>(
    tasks: &'a [Task],
    completion: CompletionFilter,
    priority: PriorityFilter,
) -> Vec<&'a Task> {
    tasks
        .iter()
        .filter(|task| completion.matches(task) && priority.matches(task))
        .collect()
}

/// Returns the tasks passing both filters in display order: open tasks
/// before completed ones, high before medium before low priority within
/// each group, and the stored order as the tie-break (stable sort).
#[must_use]
pub fn display_order<'a>(
    tasks: &'a [Task],
    completion: CompletionFilter,
    priority: PriorityFilter,
) -> Vec<&'a Task> {
    let mut view = filter_tasks(tasks, completion, priority);
    view.sort_by_key(|task| (task.completed(), task.priority().display_rank()));
    view
}

/// Aggregate counts over the whole task collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardStats {
    /// Number of tasks on the board.
    pub total: usize,
    /// Number of completed tasks.
    pub completed: usize,
    /// Number of open tasks.
    pub active: usize,
    /// Completed share of the board in whole percent, rounded half-up;
    /// zero for an empty board.
    pub completion_percent: usize,
}

/// Computes summary statistics for the given tasks.
#[must_use]
pub fn stats(tasks: &[Task]) -> BoardStats {
    let total = tasks.len();
    let completed = tasks.iter().filter(|task| task.completed()).count();
    let completion_percent = if total == 0 {
        0
    } else {
        (completed * 100 + total / 2) / total
    };
    BoardStats {
        total,
        completed,
        active: total - completed,
        completion_percent,
    }
}
