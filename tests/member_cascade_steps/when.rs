//! When steps for member cascade scenarios.

use super::world::{CascadeWorld, member_id_by_name};
use eyre::eyre;
use rstest_bdd_macros::when;

#[when(r#"the member "{name}" is deleted"#)]
fn member_is_deleted(world: &mut CascadeWorld, name: String) -> Result<(), eyre::Report> {
    let member = member_id_by_name(&world.service, &name)
        .ok_or_else(|| eyre!("unknown member '{name}' in scenario"))?;
    world.updates_before_deletion = world
        .service
        .tasks()
        .iter()
        .map(|task| (task.title().to_owned(), task.updated_at()))
        .collect();
    world.service.delete_member(member);
    Ok(())
}
