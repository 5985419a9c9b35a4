use std::str::FromStr;

use estatedesk_core::AppError;
use serde::{Deserialize, Serialize};

/// Organizational role held by the current session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// Agency owner.
    Owner,
    /// Branch or team manager.
    Manager,
    /// Real-estate agent working leads and deals.
    Agent,
    /// Finance department.
    Financial,
    /// Human-resources department.
    #[serde(alias = "human-resources")]
    HumanResources,
}

impl Role {
    /// Returns a stable token for this role.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Owner => "owner",
            Self::Manager => "manager",
            Self::Agent => "agent",
            Self::Financial => "financial",
            Self::HumanResources => "human_resources",
        }
    }

    /// Returns the label shown next to the session holder's name.
    #[must_use]
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Owner => "Owner",
            Self::Manager => "Manager",
            Self::Agent => "Agent",
            Self::Financial => "Financial",
            Self::HumanResources => "Human Resources",
        }
    }

    /// Returns all known roles.
    #[must_use]
    pub fn all() -> &'static [Self] {
        const ALL: &[Role] = &[
            Role::Owner,
            Role::Manager,
            Role::Agent,
            Role::Financial,
            Role::HumanResources,
        ];

        ALL
    }

    /// Parses a session token, returning `None` for unknown values.
    #[must_use]
    pub fn from_token(value: &str) -> Option<Self> {
        Self::from_str(value).ok()
    }
}

impl FromStr for Role {
    type Err = AppError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim() {
            "owner" => Ok(Self::Owner),
            "manager" => Ok(Self::Manager),
            "agent" => Ok(Self::Agent),
            "financial" => Ok(Self::Financial),
            "human_resources" | "human-resources" => Ok(Self::HumanResources),
            _ => Err(AppError::Validation(format!(
                "unknown role value '{value}'"
            ))),
        }
    }
}
