use std::collections::{BTreeMap, BTreeSet};

use estatedesk_core::{AppError, AppResult, NonEmptyString};
use serde::{Deserialize, Serialize};

use crate::{Module, Role};

/// Version tag of the built-in role to module table.
pub const STANDARD_MATRIX_VERSION: &str = "2024.1";

/// Capabilities granted to one role, answering for every known module.
///
/// Serialized as a full `module -> bool` map; modules missing from an input
/// map are denied.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "BTreeMap<Module, bool>", into = "BTreeMap<Module, bool>")]
pub struct PermissionSet {
    granted: BTreeSet<Module>,
}

impl PermissionSet {
    /// Creates a set granting exactly the listed modules.
    #[must_use]
    pub fn granting(modules: impl IntoIterator<Item = Module>) -> Self {
        Self {
            granted: modules.into_iter().collect(),
        }
    }

    /// Creates a set that denies every module.
    #[must_use]
    pub fn none() -> Self {
        Self::default()
    }

    /// Creates a set that grants every module.
    #[must_use]
    pub fn all() -> Self {
        Self::granting(Module::all().iter().copied())
    }

    /// Returns whether the module is granted.
    #[must_use]
    pub fn allows(&self, module: Module) -> bool {
        self.granted.contains(&module)
    }

    /// Returns whether no module is granted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.granted.is_empty()
    }

    /// Returns granted modules in declaration order.
    #[must_use]
    pub fn granted_modules(&self) -> Vec<Module> {
        Module::all()
            .iter()
            .copied()
            .filter(|module| self.allows(*module))
            .collect()
    }

    /// Returns the full boolean vector in declaration order.
    #[must_use]
    pub fn entries(&self) -> Vec<(Module, bool)> {
        Module::all()
            .iter()
            .map(|module| (*module, self.allows(*module)))
            .collect()
    }
}

impl From<BTreeMap<Module, bool>> for PermissionSet {
    fn from(value: BTreeMap<Module, bool>) -> Self {
        Self::granting(
            value
                .into_iter()
                .filter_map(|(module, allowed)| allowed.then_some(module)),
        )
    }
}

impl From<PermissionSet> for BTreeMap<Module, bool> {
    fn from(value: PermissionSet) -> Self {
        value.entries().into_iter().collect()
    }
}

/// Versioned role to module access table.
///
/// The matrix is total: a role absent from the table is denied every module.
/// Deserialization goes through [`PermissionMatrix::new`], so a blank version
/// or an unknown top-level key is rejected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "PermissionMatrixDocument")]
pub struct PermissionMatrix {
    version: String,
    grants: BTreeMap<Role, PermissionSet>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct PermissionMatrixDocument {
    version: String,
    #[serde(default)]
    grants: BTreeMap<Role, PermissionSet>,
}

impl TryFrom<PermissionMatrixDocument> for PermissionMatrix {
    type Error = AppError;

    fn try_from(value: PermissionMatrixDocument) -> Result<Self, Self::Error> {
        Self::new(value.version, value.grants)
    }
}

impl PermissionMatrix {
    /// Creates a validated permission matrix.
    pub fn new(
        version: impl Into<String>,
        grants: BTreeMap<Role, PermissionSet>,
    ) -> AppResult<Self> {
        Ok(Self {
            version: NonEmptyString::new(version)?.into(),
            grants,
        })
    }

    /// Returns the built-in agency matrix.
    #[must_use]
    pub fn standard() -> Self {
        use Module::*;

        let grants = BTreeMap::from([
            (Role::Owner, PermissionSet::all()),
            (
                Role::Manager,
                PermissionSet::granting([
                    Dashboard, Properties, Leads, Deals, Visits, Reports, Documents, Users, Keys,
                    Clients, Contacts,
                ]),
            ),
            (
                Role::Agent,
                PermissionSet::granting([
                    Dashboard, Properties, Leads, Deals, Visits, Documents, Keys, Clients,
                    Contacts,
                ]),
            ),
            (
                Role::Financial,
                PermissionSet::granting([Dashboard, Deals, Reports, Documents, Financial, Clients]),
            ),
            (
                Role::HumanResources,
                PermissionSet::granting([Dashboard, Documents, HumanResources, Users, Contacts]),
            ),
        ]);

        Self {
            version: STANDARD_MATRIX_VERSION.to_owned(),
            grants,
        }
    }

    /// Returns the configuration version tag.
    #[must_use]
    pub fn version(&self) -> &str {
        self.version.as_str()
    }

    /// Returns the capabilities of a role; absent roles receive none.
    #[must_use]
    pub fn permissions_for(&self, role: Role) -> PermissionSet {
        self.grants.get(&role).cloned().unwrap_or_default()
    }

    /// Returns whether the role may access the module.
    #[must_use]
    pub fn allows(&self, role: Role, module: Module) -> bool {
        self.grants
            .get(&role)
            .map(|permissions| permissions.allows(module))
            .unwrap_or(false)
    }
}
