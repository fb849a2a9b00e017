//! Fixed seed data for first runs and corrupt-state recovery.
//!
//! The board service falls back to this data set whenever a persisted
//! collection is absent or unreadable, so the application is never empty on
//! first run.

use mockable::Clock;

use crate::board::domain::{Priority, Task, TeamMember};

/// Names and addresses of the sample team.
const SEED_MEMBERS: [(&str, &str); 4] = [
    ("John Doe", "john@example.com"),
    ("Jane Smith", "jane@example.com"),
    ("Bob Johnson", "bob@example.com"),
    ("Alice Williams", "alice@example.com"),
];

/// Returns the deterministic per-email avatar reference used for seed
/// members.
fn seed_avatar(email: &str) -> String {
    format!("https://i.pravatar.cc/150?u={email}")
}

/// Builds the sample team-member collection with fresh identifiers.
pub fn default_members() -> Vec<TeamMember> {
    SEED_MEMBERS
        .into_iter()
        .filter_map(|(name, email)| TeamMember::new(name, email, Some(seed_avatar(email))).ok())
        .collect()
}

/// Builds the sample board: the member collection plus a handful of tasks
/// assigned to them.
pub fn default_board(clock: &impl Clock) -> (Vec<TeamMember>, Vec<Task>) {
    let members = default_members();
    let samples = [
        (
            "Create project plan",
            "Outline the project milestones and deliverables",
            Priority::High,
            false,
            0_usize,
        ),
        (
            "Design mockups",
            "Create UI/UX designs for the application",
            Priority::Medium,
            true,
            1,
        ),
        (
            "Backend implementation",
            "Develop the API endpoints and database schema",
            Priority::High,
            false,
            2,
        ),
    ];
    let tasks = samples
        .into_iter()
        .filter_map(|(title, description, priority, completed, member_index)| {
            let assignee = members.get(member_index).map(TeamMember::id);
            let mut task =
                Task::new(title, Some(description.to_owned()), priority, assignee, clock).ok()?;
            if completed {
                task.toggle_completion(clock);
            }
            Some(task)
        })
        .collect();
    (members, tasks)
}
