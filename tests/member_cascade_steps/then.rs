//! Then steps for member cascade scenarios.

use super::world::{CascadeWorld, member_id_by_name, task_by_title};
use eyre::eyre;
use rstest_bdd_macros::then;

#[then(r#"the task "{title}" has no assignee"#)]
fn task_has_no_assignee(world: &CascadeWorld, title: String) -> Result<(), eyre::Report> {
    let task = task_by_title(&world.service, &title)
        .ok_or_else(|| eyre!("missing task '{title}' in scenario"))?;
    if task.assignee().is_some() {
        return Err(eyre!("expected task '{title}' to be unassigned"));
    }
    Ok(())
}

#[then(r#"the task "{title}" keeps "{priority}" priority"#)]
fn task_keeps_priority(
    world: &CascadeWorld,
    title: String,
    priority: String,
) -> Result<(), eyre::Report> {
    let task = task_by_title(&world.service, &title)
        .ok_or_else(|| eyre!("missing task '{title}' in scenario"))?;
    if task.priority().as_str() != priority {
        return Err(eyre!(
            "expected task '{title}' to keep {priority} priority, found {}",
            task.priority().as_str()
        ));
    }
    Ok(())
}

#[then(r#"the task "{title}" was updated no earlier than before the deletion"#)]
fn task_update_time_refreshed(world: &CascadeWorld, title: String) -> Result<(), eyre::Report> {
    let task = task_by_title(&world.service, &title)
        .ok_or_else(|| eyre!("missing task '{title}' in scenario"))?;
    let before = world
        .updates_before_deletion
        .iter()
        .find(|(recorded, _)| recorded == &title)
        .map(|(_, updated_at)| *updated_at)
        .ok_or_else(|| eyre!("no recorded update time for task '{title}'"))?;
    if task.updated_at() < before {
        return Err(eyre!(
            "expected task '{title}' update time to be refreshed by the deletion"
        ));
    }
    Ok(())
}

#[then(r#"the task "{title}" is still assigned to "{name}""#)]
fn task_still_assigned_to(
    world: &CascadeWorld,
    title: String,
    name: String,
) -> Result<(), eyre::Report> {
    let task = task_by_title(&world.service, &title)
        .ok_or_else(|| eyre!("missing task '{title}' in scenario"))?;
    let member = member_id_by_name(&world.service, &name)
        .ok_or_else(|| eyre!("unknown member '{name}' in scenario"))?;
    if task.assignee() != Some(member) {
        return Err(eyre!("expected task '{title}' to stay assigned to {name}"));
    }
    Ok(())
}
