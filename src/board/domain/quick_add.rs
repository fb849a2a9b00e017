//! Inline priority-tag parsing for quick task entry.

use super::Priority;

/// Result of parsing a quick-add input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuickAddInput {
    /// The input with the priority tag removed and the remainder trimmed.
    /// May be empty when the input held nothing but a tag.
    pub title: String,
    /// The parsed priority, [`Priority::Medium`] when no tag was present.
    pub priority: Priority,
}

/// Parses an inline `#high`, `#medium`, or `#low` tag out of a quick-add
/// input line.
///
/// The first matching tag wins, checked in high, medium, low order; only
/// its first occurrence is removed from the title. Untagged input keeps the
/// default priority.
#[must_use]
pub fn parse_quick_add(input: &str) -> QuickAddInput {
    for (tag, priority) in [
        ("#high", Priority::High),
        ("#medium", Priority::Medium),
        ("#low", Priority::Low),
    ] {
        if input.contains(tag) {
            return QuickAddInput {
                title: input.replacen(tag, "", 1).trim().to_owned(),
                priority,
            };
        }
    }
    QuickAddInput {
        title: input.trim().to_owned(),
        priority: Priority::Medium,
    }
}
