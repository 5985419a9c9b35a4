use serde::{Deserialize, Serialize};

/// Session holder information supplied by the external authentication layer.
///
/// The role is kept as the raw token handed over by the session provider so
/// that unknown values can still be displayed and are denied downstream.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionIdentity {
    subject: String,
    display_name: String,
    role_token: Option<String>,
}

impl SessionIdentity {
    /// Creates a session identity from authentication data.
    #[must_use]
    pub fn new(
        subject: impl Into<String>,
        display_name: impl Into<String>,
        role_token: Option<String>,
    ) -> Self {
        let role_token = role_token.and_then(|value| {
            let trimmed = value.trim().to_owned();
            (!trimmed.is_empty()).then_some(trimmed)
        });

        Self {
            subject: subject.into(),
            display_name: display_name.into(),
            role_token,
        }
    }

    /// Returns the stable subject claim from the identity provider.
    #[must_use]
    pub fn subject(&self) -> &str {
        self.subject.as_str()
    }

    /// Returns the display name for the current session holder.
    #[must_use]
    pub fn display_name(&self) -> &str {
        self.display_name.as_str()
    }

    /// Returns the raw role token, if the session carries one.
    #[must_use]
    pub fn role_token(&self) -> Option<&str> {
        self.role_token.as_deref()
    }
}
