//! Team member aggregate.

use super::{BoardDomainError, MemberId};
use serde::{Deserialize, Serialize};

/// Image reference substituted when a member is created without an avatar.
pub const FALLBACK_AVATAR_URL: &str =
    "https://img.freepik.com/premium-photo/color-user-icon-white-background_961147-8.jpg?w=1380";

/// A person who may be assigned to tasks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamMember {
    id: MemberId,
    name: String,
    email: String,
    avatar_url: String,
}

impl TeamMember {
    /// Creates a member with a fresh identifier.
    ///
    /// Name and email are trimmed; when no avatar URL is supplied the fixed
    /// fallback image reference is substituted.
    ///
    /// # Errors
    ///
    /// Returns [`BoardDomainError::EmptyMemberName`] or
    /// [`BoardDomainError::EmptyMemberEmail`] when the respective value is
    /// empty after trimming.
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        avatar_url: Option<String>,
    ) -> Result<Self, BoardDomainError> {
        let name = validate_trimmed(name.into(), BoardDomainError::EmptyMemberName)?;
        let email = validate_trimmed(email.into(), BoardDomainError::EmptyMemberEmail)?;
        Ok(Self {
            id: MemberId::new(),
            name,
            email,
            avatar_url: avatar_url
                .filter(|url| !url.trim().is_empty())
                .unwrap_or_else(|| FALLBACK_AVATAR_URL.to_owned()),
        })
    }

    /// Returns the member identifier.
    #[must_use]
    pub const fn id(&self) -> MemberId {
        self.id
    }

    /// Returns the display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the email address.
    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }

    /// Returns the avatar image reference.
    #[must_use]
    pub fn avatar_url(&self) -> &str {
        &self.avatar_url
    }

    /// Returns the uppercased first letters of the whitespace-separated
    /// name parts, used as avatar fallback text.
    #[must_use]
    pub fn initials(&self) -> String {
        self.name
            .split_whitespace()
            .filter_map(|part| part.chars().next())
            .flat_map(char::to_uppercase)
            .collect()
    }
}

/// Trims a value, or returns the given error when nothing remains.
fn validate_trimmed(
    value: String,
    empty_error: BoardDomainError,
) -> Result<String, BoardDomainError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(empty_error);
    }
    Ok(trimmed.to_owned())
}
