//! Task aggregate and the partial updates applied to it.

use super::{BoardDomainError, MemberId, Priority, TaskId};
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// A unit of work on the board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    id: TaskId,
    title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    description: Option<String>,
    completed: bool,
    priority: Priority,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    assignee: Option<MemberId>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl Task {
    /// Creates a new open task with a fresh identifier and both timestamps
    /// set to the current clock time.
    ///
    /// The title is trimmed. A description that is empty after trimming is
    /// stored as absent. The assignee is stored as given; resolving it
    /// against the current member collection is the caller's concern.
    ///
    /// # Errors
    ///
    /// Returns [`BoardDomainError::EmptyTaskTitle`] when the title is empty
    /// after trimming.
    pub fn new(
        title: impl Into<String>,
        description: Option<String>,
        priority: Priority,
        assignee: Option<MemberId>,
        clock: &impl Clock,
    ) -> Result<Self, BoardDomainError> {
        let title = title.into();
        let trimmed = title.trim();
        if trimmed.is_empty() {
            return Err(BoardDomainError::EmptyTaskTitle);
        }
        let timestamp = clock.utc();
        Ok(Self {
            id: TaskId::new(),
            title: trimmed.to_owned(),
            description: normalize_description(description),
            completed: false,
            priority,
            assignee,
            created_at: timestamp,
            updated_at: timestamp,
        })
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> TaskId {
        self.id
    }

    /// Returns the task title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the task description, if any.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Returns whether the task is completed.
    #[must_use]
    pub const fn completed(&self) -> bool {
        self.completed
    }

    /// Returns the task priority.
    #[must_use]
    pub const fn priority(&self) -> Priority {
        self.priority
    }

    /// Returns the assigned member identifier, if any.
    #[must_use]
    pub const fn assignee(&self) -> Option<MemberId> {
        self.assignee
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the latest mutation timestamp.
    #[must_use]
    pub const fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Flips the completion flag and refreshes the update timestamp.
    pub fn toggle_completion(&mut self, clock: &impl Clock) {
        self.completed = !self.completed;
        self.touch(clock);
    }

    /// Clears the assignee and refreshes the update timestamp.
    pub fn unassign(&mut self, clock: &impl Clock) {
        self.assignee = None;
        self.touch(clock);
    }

    /// Merges the supplied patch fields into this task and refreshes the
    /// update timestamp.
    ///
    /// A patch title that is empty after trimming is ignored, keeping the
    /// non-empty-title invariant without making the operation fallible. The
    /// assignee is applied as instructed by [`TaskPatch::assignee_change`];
    /// the caller resolves member references beforehand.
    pub fn apply(&mut self, patch: TaskPatch, clock: &impl Clock) {
        if let Some(title) = patch.title {
            let trimmed = title.trim();
            if !trimmed.is_empty() {
                self.title = trimmed.to_owned();
            }
        }
        if let Some(description) = patch.description {
            self.description = normalize_description(Some(description));
        }
        if let Some(priority) = patch.priority {
            self.priority = priority;
        }
        match patch.assignee {
            AssigneeChange::Keep => {}
            AssigneeChange::Assign(member) => self.assignee = Some(member),
            AssigneeChange::Clear => self.assignee = None,
        }
        self.touch(clock);
    }

    /// Updates the `updated_at` timestamp to the current clock time.
    fn touch(&mut self, clock: &impl Clock) {
        self.updated_at = clock.utc();
    }
}

/// Instruction for the assignee field of a [`TaskPatch`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AssigneeChange {
    /// Leave the current assignee unchanged.
    #[default]
    Keep,
    /// Assign the given member.
    Assign(MemberId),
    /// Remove the current assignee.
    Clear,
}

/// Partial update merged into an existing task.
///
/// Omitted fields leave the task unchanged; the assignee field carries an
/// explicit keep/assign/clear instruction so that "no change" and "remove
/// the assignee" stay distinguishable.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskPatch {
    title: Option<String>,
    description: Option<String>,
    priority: Option<Priority>,
    assignee: AssigneeChange,
}

impl TaskPatch {
    /// Creates an empty patch that changes nothing but the update timestamp.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a replacement title.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Sets a replacement description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets a replacement priority.
    #[must_use]
    pub const fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = Some(priority);
        self
    }

    /// Assigns the given member.
    #[must_use]
    pub const fn with_assignee(self, member: MemberId) -> Self {
        self.with_assignee_change(AssigneeChange::Assign(member))
    }

    /// Removes the current assignee.
    #[must_use]
    pub const fn clear_assignee(self) -> Self {
        self.with_assignee_change(AssigneeChange::Clear)
    }

    /// Sets the assignee instruction directly.
    #[must_use]
    pub const fn with_assignee_change(mut self, change: AssigneeChange) -> Self {
        self.assignee = change;
        self
    }

    /// Returns the assignee instruction carried by this patch.
    #[must_use]
    pub const fn assignee_change(&self) -> AssigneeChange {
        self.assignee
    }
}

/// Drops descriptions that are empty after trimming.
fn normalize_description(description: Option<String>) -> Option<String> {
    description.filter(|text| !text.trim().is_empty())
}
