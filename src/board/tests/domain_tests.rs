//! Domain-focused tests for board model behaviour.

use crate::board::domain::{
    BoardDomainError, FALLBACK_AVATAR_URL, ParsePriorityError, Priority, Task, TaskPatch,
    TeamMember, parse_quick_add,
};
use mockable::DefaultClock;
use rstest::{fixture, rstest};

#[fixture]
fn clock() -> DefaultClock {
    DefaultClock
}

#[rstest]
#[case("low", Priority::Low)]
#[case("medium", Priority::Medium)]
#[case("high", Priority::High)]
#[case("  HIGH  ", Priority::High)]
fn priority_parse_accepts_known_levels(#[case] input: &str, #[case] expected: Priority) {
    assert_eq!(Priority::try_from(input), Ok(expected));
}

#[rstest]
fn priority_parse_rejects_unknown_level() {
    assert_eq!(
        Priority::try_from("urgent"),
        Err(ParsePriorityError("urgent".to_owned()))
    );
}

#[rstest]
fn priority_display_rank_orders_high_first() {
    assert!(Priority::High.display_rank() < Priority::Medium.display_rank());
    assert!(Priority::Medium.display_rank() < Priority::Low.display_rank());
}

#[rstest]
#[case(Priority::Low, "green")]
#[case(Priority::Medium, "yellow")]
#[case(Priority::High, "red")]
fn priority_color_token_is_total(#[case] priority: Priority, #[case] token: &str) {
    assert_eq!(priority.color_token(), token);
}

#[rstest]
fn task_new_trims_title_and_aligns_timestamps(clock: DefaultClock) {
    let task = Task::new("  Write spec  ", None, Priority::High, None, &clock)
        .expect("valid task title");

    assert_eq!(task.title(), "Write spec");
    assert!(!task.completed());
    assert_eq!(task.priority(), Priority::High);
    assert_eq!(task.assignee(), None);
    assert_eq!(task.created_at(), task.updated_at());
}

#[rstest]
fn task_new_rejects_blank_title(clock: DefaultClock) {
    let result = Task::new("   ", None, Priority::Medium, None, &clock);
    assert_eq!(result, Err(BoardDomainError::EmptyTaskTitle));
}

#[rstest]
fn task_new_drops_blank_description(clock: DefaultClock) {
    let task = Task::new("Write spec", Some("   ".to_owned()), Priority::Medium, None, &clock)
        .expect("valid task title");
    assert_eq!(task.description(), None);
}

#[rstest]
fn task_toggle_flips_completion_and_refreshes_update_time(clock: DefaultClock) {
    let mut task =
        Task::new("Write spec", None, Priority::Medium, None, &clock).expect("valid task title");
    let created = task.created_at();

    task.toggle_completion(&clock);
    assert!(task.completed());
    assert_eq!(task.created_at(), created);
    assert!(task.updated_at() >= created);

    task.toggle_completion(&clock);
    assert!(!task.completed());
}

#[rstest]
fn task_apply_merges_supplied_fields(clock: DefaultClock) {
    let mut task = Task::new(
        "Draft outline",
        Some("First pass".to_owned()),
        Priority::Low,
        None,
        &clock,
    )
    .expect("valid task title");
    let created = task.created_at();

    task.apply(
        TaskPatch::new()
            .with_title("Draft the full outline")
            .with_description("Second pass")
            .with_priority(Priority::High),
        &clock,
    );

    assert_eq!(task.title(), "Draft the full outline");
    assert_eq!(task.description(), Some("Second pass"));
    assert_eq!(task.priority(), Priority::High);
    assert_eq!(task.created_at(), created);
    assert!(task.updated_at() >= created);
}

#[rstest]
fn task_apply_ignores_blank_patch_title(clock: DefaultClock) {
    let mut task =
        Task::new("Write spec", None, Priority::Medium, None, &clock).expect("valid task title");

    task.apply(TaskPatch::new().with_title("   "), &clock);
    assert_eq!(task.title(), "Write spec");
}

#[rstest]
fn task_patch_clear_assignee_removes_member(clock: DefaultClock) {
    let member = TeamMember::new("Ada Lovelace", "ada@example.com", None).expect("valid member");
    let mut task = Task::new("Write spec", None, Priority::Medium, Some(member.id()), &clock)
        .expect("valid task title");

    task.apply(TaskPatch::new().clear_assignee(), &clock);
    assert_eq!(task.assignee(), None);
}

#[rstest]
fn member_new_trims_fields_and_defaults_avatar() {
    let member = TeamMember::new("  Ada Lovelace  ", "  ada@example.com  ", None)
        .expect("valid member");

    assert_eq!(member.name(), "Ada Lovelace");
    assert_eq!(member.email(), "ada@example.com");
    assert_eq!(member.avatar_url(), FALLBACK_AVATAR_URL);
}

#[rstest]
fn member_new_replaces_blank_avatar_with_fallback() {
    let member = TeamMember::new("Ada Lovelace", "ada@example.com", Some("   ".to_owned()))
        .expect("valid member");
    assert_eq!(member.avatar_url(), FALLBACK_AVATAR_URL);
}

#[rstest]
fn member_new_keeps_supplied_avatar() {
    let member = TeamMember::new(
        "Ada Lovelace",
        "ada@example.com",
        Some("https://example.com/ada.png".to_owned()),
    )
    .expect("valid member");
    assert_eq!(member.avatar_url(), "https://example.com/ada.png");
}

#[rstest]
#[case("", "ada@example.com", BoardDomainError::EmptyMemberName)]
#[case("Ada Lovelace", "   ", BoardDomainError::EmptyMemberEmail)]
fn member_new_rejects_blank_required_fields(
    #[case] name: &str,
    #[case] email: &str,
    #[case] expected: BoardDomainError,
) {
    assert_eq!(TeamMember::new(name, email, None), Err(expected));
}

#[rstest]
#[case("Ada Lovelace", "AL")]
#[case("Grace", "G")]
#[case("ada brook lovelace", "ABL")]
fn member_initials_take_first_letters(#[case] name: &str, #[case] initials: &str) {
    let member = TeamMember::new(name, "person@example.com", None).expect("valid member");
    assert_eq!(member.initials(), initials);
}

#[rstest]
#[case("Ship release #high", "Ship release", Priority::High)]
#[case("#low water the plants", "water the plants", Priority::Low)]
#[case("plain task", "plain task", Priority::Medium)]
#[case("#medium tidy #low", "tidy #low", Priority::Medium)]
#[case("#high", "", Priority::High)]
fn quick_add_extracts_first_priority_tag(
    #[case] input: &str,
    #[case] title: &str,
    #[case] priority: Priority,
) {
    let parsed = parse_quick_add(input);
    assert_eq!(parsed.title, title);
    assert_eq!(parsed.priority, priority);
}
