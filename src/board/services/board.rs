//! The board service: canonical state, mutations, and persistence mirroring.

use std::collections::HashSet;

use log::warn;
use mockable::Clock;
use serde::Serialize;
use serde::de::DeserializeOwned;

use super::{seed, views};
use crate::board::{
    domain::{
        AssigneeChange, MemberId, Priority, Task, TaskId, TaskPatch, TeamMember, parse_quick_add,
    },
    ports::{StateKey, StateStore},
};

/// Request payload for creating a task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateTaskRequest {
    title: String,
    description: Option<String>,
    priority: Priority,
    assignee: Option<MemberId>,
}

impl CreateTaskRequest {
    /// Creates a request with the required title.
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: None,
            priority: Priority::default(),
            assignee: None,
        }
    }

    /// Sets the task description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the task priority.
    #[must_use]
    pub const fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = priority;
        self
    }

    /// Sets the member the task should be assigned to.
    #[must_use]
    pub const fn with_assignee(mut self, member: MemberId) -> Self {
        self.assignee = Some(member);
        self
    }
}

/// Request payload for adding a team member.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddMemberRequest {
    name: String,
    email: String,
    avatar_url: Option<String>,
}

impl AddMemberRequest {
    /// Creates a request with the required name and email.
    #[must_use]
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            avatar_url: None,
        }
    }

    /// Sets the avatar image reference.
    #[must_use]
    pub fn with_avatar_url(mut self, avatar_url: impl Into<String>) -> Self {
        self.avatar_url = Some(avatar_url.into());
        self
    }
}

/// Board state service.
///
/// Owns the canonical task and team-member collections together with the
/// injected persistence store and clock. Every mutation commits to the
/// in-memory collections first and then mirrors the affected collection to
/// the store. Writes are best-effort by contract: a failing store is
/// logged at warn level and never surfaces to the caller, so a crash
/// between a mutation and its write loses at most that one write.
///
/// All mutations are total. Unknown task or member identifiers degrade to
/// no-ops or to "unassigned" rather than erroring, and invalid creation
/// input (blank titles, names, or emails) is rejected by returning `None`
/// with the collections untouched.
pub struct BoardService<S, C>
where
    S: StateStore,
    C: Clock,
{
    store: S,
    clock: C,
    tasks: Vec<Task>,
    members: Vec<TeamMember>,
}

impl<S, C> BoardService<S, C>
where
    S: StateStore,
    C: Clock,
{
    /// Creates a board service with empty collections.
    #[must_use]
    pub const fn new(store: S, clock: C) -> Self {
        Self {
            store,
            clock,
            tasks: Vec::new(),
            members: Vec::new(),
        }
    }

    /// Creates a board service from the persisted state.
    ///
    /// Each collection is loaded independently; a key that is absent or
    /// whose payload fails to deserialize falls back to the fixed seed
    /// data set, with the failure logged and never propagated. After
    /// loading, tasks referencing members that are not in the loaded
    /// member collection are unassigned, re-establishing the referential
    /// invariant when the two persisted collections were written out of
    /// lock-step.
    #[must_use]
    pub fn load(store: S, clock: C) -> Self {
        let loaded_members = load_collection::<TeamMember>(&store, StateKey::TeamMembers);
        let loaded_tasks = load_collection::<Task>(&store, StateKey::Todos);
        let (members, tasks) = match (loaded_members, loaded_tasks) {
            (Some(members), Some(tasks)) => (members, tasks),
            (partial_members, partial_tasks) => {
                let (seed_members, seed_tasks) = seed::default_board(&clock);
                (
                    partial_members.unwrap_or(seed_members),
                    partial_tasks.unwrap_or(seed_tasks),
                )
            }
        };
        let mut service = Self {
            store,
            clock,
            tasks,
            members,
        };
        service.repair_assignments();
        service
    }

    /// Returns the tasks in insertion order.
    #[must_use]
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Returns the team members in insertion order.
    #[must_use]
    pub fn members(&self) -> &[TeamMember] {
        &self.members
    }

    /// Finds a task by identifier.
    #[must_use]
    pub fn find_task(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id() == id)
    }

    /// Finds a team member by identifier.
    #[must_use]
    pub fn find_member(&self, id: MemberId) -> Option<&TeamMember> {
        self.members.iter().find(|member| member.id() == id)
    }

    /// Creates a task and appends it to the board.
    ///
    /// An assignee that does not match a current member is silently
    /// dropped, leaving the task unassigned. Returns `None` without
    /// changing the board when the title is empty after trimming.
    pub fn add_task(&mut self, request: CreateTaskRequest) -> Option<TaskId> {
        let assignee = request
            .assignee
            .filter(|member| self.member_exists(*member));
        let task = Task::new(
            request.title,
            request.description,
            request.priority,
            assignee,
            &self.clock,
        )
        .ok()?;
        let id = task.id();
        self.tasks.push(task);
        self.persist_tasks();
        Some(id)
    }

    /// Creates a task from a quick-add input line.
    ///
    /// An inline `#high`, `#medium`, or `#low` tag selects the priority
    /// and is removed from the title; the remainder behaves exactly as
    /// [`Self::add_task`].
    pub fn quick_add_task(&mut self, input: &str, assignee: Option<MemberId>) -> Option<TaskId> {
        let parsed = parse_quick_add(input);
        let mut request = CreateTaskRequest::new(parsed.title).with_priority(parsed.priority);
        if let Some(member) = assignee {
            request = request.with_assignee(member);
        }
        self.add_task(request)
    }

    /// Removes the task with the given identifier; a no-op when absent.
    pub fn delete_task(&mut self, id: TaskId) {
        self.tasks.retain(|task| task.id() != id);
        self.persist_tasks();
    }

    /// Flips the completion flag of the given task and refreshes its
    /// update timestamp; a no-op when the identifier is unknown.
    pub fn toggle_completion(&mut self, id: TaskId) {
        let clock = &self.clock;
        if let Some(task) = self.tasks.iter_mut().find(|task| task.id() == id) {
            task.toggle_completion(clock);
        }
        self.persist_tasks();
    }

    /// Merges the patch into the given task and refreshes its update
    /// timestamp; a no-op when the identifier is unknown.
    ///
    /// A patched assignee that does not match a current member resolves to
    /// "unassigned", mirroring the permissive resolution of
    /// [`Self::add_task`].
    pub fn update_task(&mut self, id: TaskId, patch: TaskPatch) {
        let change = match patch.assignee_change() {
            AssigneeChange::Assign(member) if !self.member_exists(member) => AssigneeChange::Clear,
            other => other,
        };
        let resolved = patch.with_assignee_change(change);
        let clock = &self.clock;
        if let Some(task) = self.tasks.iter_mut().find(|task| task.id() == id) {
            task.apply(resolved, clock);
        }
        self.persist_tasks();
    }

    /// Adds a team member.
    ///
    /// Returns `None` without changing the board when the name or email is
    /// empty after trimming. A missing avatar URL is replaced by the fixed
    /// fallback image reference.
    pub fn add_member(&mut self, request: AddMemberRequest) -> Option<MemberId> {
        let member = TeamMember::new(request.name, request.email, request.avatar_url).ok()?;
        let id = member.id();
        self.members.push(member);
        self.persist_members();
        Some(id)
    }

    /// Removes the member with the given identifier and unassigns every
    /// task that referenced it, refreshing those tasks' update timestamps.
    ///
    /// The member collection and the task collection are written
    /// separately; both stay internally well-formed even when only one
    /// write lands, and [`Self::load`] re-establishes the cross-collection
    /// invariant on the next start.
    pub fn delete_member(&mut self, id: MemberId) {
        self.members.retain(|member| member.id() != id);
        self.persist_members();
        let clock = &self.clock;
        for task in self
            .tasks
            .iter_mut()
            .filter(|task| task.assignee() == Some(id))
        {
            task.unassign(clock);
        }
        self.persist_tasks();
    }

    /// Returns the tasks passing both filters, in insertion order.
    #[must_use]
    pub fn filtered_tasks(
        &self,
        completion: views::CompletionFilter,
        priority: views::PriorityFilter,
    ) -> Vec<&Task> {
        views::filter_tasks(&self.tasks, completion, priority)
    }

    /// Returns the tasks passing both filters in display order: open
    /// before completed, then high, medium, low priority, insertion order
    /// as the tie-break.
    #[must_use]
    pub fn display_tasks(
        &self,
        completion: views::CompletionFilter,
        priority: views::PriorityFilter,
    ) -> Vec<&Task> {
        views::display_order(&self.tasks, completion, priority)
    }

    /// Returns summary statistics over the whole board.
    #[must_use]
    pub fn stats(&self) -> views::BoardStats {
        views::stats(&self.tasks)
    }

    /// Returns whether a member with the given identifier exists.
    fn member_exists(&self, id: MemberId) -> bool {
        self.members.iter().any(|member| member.id() == id)
    }

    /// Unassigns tasks referencing members outside the current collection.
    fn repair_assignments(&mut self) {
        let known: HashSet<MemberId> = self.members.iter().map(TeamMember::id).collect();
        let clock = &self.clock;
        let mut repaired = 0_usize;
        for task in &mut self.tasks {
            if task.assignee().is_some_and(|member| !known.contains(&member)) {
                task.unassign(clock);
                repaired += 1;
            }
        }
        if repaired > 0 {
            warn!("unassigned {repaired} task(s) that referenced missing team members");
            self.persist_tasks();
        }
    }

    /// Mirrors the task collection to the store, best-effort.
    fn persist_tasks(&self) {
        persist_collection(&self.store, StateKey::Todos, &self.tasks);
    }

    /// Mirrors the member collection to the store, best-effort.
    fn persist_members(&self) {
        persist_collection(&self.store, StateKey::TeamMembers, &self.members);
    }
}

/// Loads and deserializes a persisted collection.
///
/// Returns `None` when the key is absent, unreadable, or holds a payload
/// that fails to deserialize; failures are logged and never propagated.
fn load_collection<T: DeserializeOwned>(store: &impl StateStore, key: StateKey) -> Option<Vec<T>> {
    let payload = match store.load(key) {
        Ok(payload) => payload?,
        Err(err) => {
            warn!("failed to load '{key}' from the state store: {err}");
            return None;
        }
    };
    match serde_json::from_str(&payload) {
        Ok(records) => Some(records),
        Err(err) => {
            warn!("discarding corrupt '{key}' payload: {err}");
            None
        }
    }
}

/// Serializes and saves a collection, logging failures instead of
/// propagating them.
fn persist_collection<T: Serialize>(store: &impl StateStore, key: StateKey, records: &[T]) {
    let payload = match serde_json::to_string(records) {
        Ok(payload) => payload,
        Err(err) => {
            warn!("failed to serialize '{key}': {err}");
            return;
        }
    };
    if let Err(err) = store.save(key, &payload) {
        warn!("failed to persist '{key}': {err}");
    }
}
