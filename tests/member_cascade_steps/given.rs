//! Given steps for member cascade scenarios.

use super::world::{CascadeWorld, member_id_by_name};
use eyre::eyre;
use rstest_bdd_macros::given;
use taskboard::board::{
    domain::Priority,
    services::{AddMemberRequest, CreateTaskRequest},
};

#[given(r#"a team member named "{name}""#)]
fn team_member_named(world: &mut CascadeWorld, name: String) -> Result<(), eyre::Report> {
    let email = format!("{}@example.com", name.to_ascii_lowercase());
    world
        .service
        .add_member(AddMemberRequest::new(name.as_str(), email))
        .ok_or_else(|| eyre!("member '{name}' was rejected"))?;
    Ok(())
}

#[given(r#"an open "{priority}" priority task "{title}" assigned to "{name}""#)]
fn open_task_assigned_to(
    world: &mut CascadeWorld,
    priority: String,
    title: String,
    name: String,
) -> Result<(), eyre::Report> {
    let member = member_id_by_name(&world.service, &name)
        .ok_or_else(|| eyre!("unknown member '{name}' in scenario"))?;
    let parsed = Priority::try_from(priority.as_str())
        .map_err(|err| eyre!("invalid scenario priority: {err}"))?;
    world
        .service
        .add_task(
            CreateTaskRequest::new(title.as_str())
                .with_priority(parsed)
                .with_assignee(member),
        )
        .ok_or_else(|| eyre!("task '{title}' was rejected"))?;
    Ok(())
}
