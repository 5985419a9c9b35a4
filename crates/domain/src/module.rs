use std::str::FromStr;

use estatedesk_core::AppError;
use serde::{Deserialize, Serialize};

/// Functional area of the dashboard gated independently of all others.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Module {
    /// Landing dashboard with summary widgets.
    Dashboard,
    /// Property listings.
    Properties,
    /// Sales and rental leads.
    Leads,
    /// Deals in negotiation or closed.
    Deals,
    /// Scheduled property visits.
    Visits,
    /// Reports and exports.
    Reports,
    /// Contracts and other documents.
    Documents,
    /// Finance: commissions, payables, receivables.
    Financial,
    /// Staff administration.
    #[serde(alias = "human-resources")]
    HumanResources,
    /// User accounts.
    Users,
    /// Agency settings.
    Settings,
    /// Physical key custody.
    Keys,
    /// Client registry.
    Clients,
    /// Contact book.
    Contacts,
}

impl Module {
    /// Returns a stable token for this module.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Dashboard => "dashboard",
            Self::Properties => "properties",
            Self::Leads => "leads",
            Self::Deals => "deals",
            Self::Visits => "visits",
            Self::Reports => "reports",
            Self::Documents => "documents",
            Self::Financial => "financial",
            Self::HumanResources => "human_resources",
            Self::Users => "users",
            Self::Settings => "settings",
            Self::Keys => "keys",
            Self::Clients => "clients",
            Self::Contacts => "contacts",
        }
    }

    /// Returns all known modules in declaration order.
    #[must_use]
    pub fn all() -> &'static [Self] {
        const ALL: &[Module] = &[
            Module::Dashboard,
            Module::Properties,
            Module::Leads,
            Module::Deals,
            Module::Visits,
            Module::Reports,
            Module::Documents,
            Module::Financial,
            Module::HumanResources,
            Module::Users,
            Module::Settings,
            Module::Keys,
            Module::Clients,
            Module::Contacts,
        ];

        ALL
    }

    /// Parses a module name, returning `None` for unknown values.
    #[must_use]
    pub fn from_name(value: &str) -> Option<Self> {
        Self::from_str(value).ok()
    }
}

impl FromStr for Module {
    type Err = AppError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim() {
            "dashboard" => Ok(Self::Dashboard),
            "properties" => Ok(Self::Properties),
            "leads" => Ok(Self::Leads),
            "deals" => Ok(Self::Deals),
            "visits" => Ok(Self::Visits),
            "reports" => Ok(Self::Reports),
            "documents" => Ok(Self::Documents),
            "financial" => Ok(Self::Financial),
            "human_resources" | "human-resources" => Ok(Self::HumanResources),
            "users" => Ok(Self::Users),
            "settings" => Ok(Self::Settings),
            "keys" => Ok(Self::Keys),
            "clients" => Ok(Self::Clients),
            "contacts" => Ok(Self::Contacts),
            _ => Err(AppError::Validation(format!(
                "unknown module value '{value}'"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::Module;

    #[test]
    fn module_roundtrip_token() {
        for module in Module::all() {
            assert_eq!(Module::from_str(module.as_str()).ok(), Some(*module));
        }
    }

    #[test]
    fn module_set_has_fourteen_areas() {
        assert_eq!(Module::all().len(), 14);
    }

    #[test]
    fn unknown_module_is_rejected() {
        assert!(Module::from_str("payroll").is_err());
        assert_eq!(Module::from_name("Properties"), None);
    }
}
