use std::sync::Arc;

use estatedesk_domain::{Module, PermissionMatrix, PermissionSet, Role};
use tracing::warn;

/// Stateless permission lookups over a shared, read-only matrix.
///
/// Cloning is cheap; every consumer receives the resolver explicitly.
#[derive(Debug, Clone)]
pub struct PermissionResolver {
    matrix: Arc<PermissionMatrix>,
}

impl PermissionResolver {
    /// Creates a resolver over the given matrix.
    #[must_use]
    pub fn new(matrix: Arc<PermissionMatrix>) -> Self {
        Self { matrix }
    }

    /// Creates a resolver over the built-in agency matrix.
    #[must_use]
    pub fn standard() -> Self {
        Self::new(Arc::new(PermissionMatrix::standard()))
    }

    /// Returns the matrix backing this resolver.
    #[must_use]
    pub fn matrix(&self) -> &PermissionMatrix {
        &self.matrix
    }

    /// Returns the full capability vector for a role; `None` receives nothing.
    #[must_use]
    pub fn capabilities_for(&self, role: Option<Role>) -> PermissionSet {
        match role {
            Some(role) => self.matrix.permissions_for(role),
            None => PermissionSet::none(),
        }
    }

    /// Returns capabilities for a raw session role token.
    ///
    /// Unrecognized tokens receive no capabilities.
    #[must_use]
    pub fn capabilities_for_token(&self, token: Option<&str>) -> PermissionSet {
        self.capabilities_for(token.and_then(Role::from_token))
    }

    /// Returns whether the role may access the module.
    #[must_use]
    pub fn can_access(&self, role: Option<Role>, module: Module) -> bool {
        role.is_some_and(|role| self.matrix.allows(role, module))
    }

    /// Returns whether the role may access a module given by name.
    ///
    /// Unknown module names are denied.
    #[must_use]
    pub fn can_access_named(&self, role: Option<Role>, module_name: &str) -> bool {
        match Module::from_name(module_name) {
            Some(module) => self.can_access(role, module),
            None => {
                warn!(
                    module = module_name,
                    "access check against unknown module denied"
                );
                false
            }
        }
    }

    /// Returns modules the role may access, in declaration order.
    #[must_use]
    pub fn accessible_modules(&self, role: Option<Role>) -> Vec<Module> {
        self.capabilities_for(role).granted_modules()
    }

    /// Returns the display label for a role token, or the token itself when unknown.
    #[must_use]
    pub fn role_display_name(&self, token: &str) -> String {
        Role::from_token(token)
            .map(|role| role.display_name().to_owned())
            .unwrap_or_else(|| token.to_owned())
    }
}

impl Default for PermissionResolver {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;
    use std::sync::Arc;

    use estatedesk_domain::{Module, PermissionMatrix, PermissionSet, Role};
    use proptest::prelude::*;

    use super::PermissionResolver;

    fn any_role() -> impl Strategy<Value = Role> {
        proptest::sample::select(Role::all().to_vec())
    }

    fn any_module() -> impl Strategy<Value = Module> {
        proptest::sample::select(Module::all().to_vec())
    }

    #[test]
    fn absent_role_has_no_capabilities() {
        let resolver = PermissionResolver::standard();
        assert!(resolver.capabilities_for(None).is_empty());
        assert!(
            Module::all()
                .iter()
                .all(|module| !resolver.can_access(None, *module))
        );
    }

    #[test]
    fn unrecognized_token_has_no_capabilities() {
        let resolver = PermissionResolver::standard();
        assert!(resolver.capabilities_for_token(Some("intern")).is_empty());
        assert!(resolver.capabilities_for_token(None).is_empty());
        assert_eq!(
            resolver.capabilities_for_token(Some("agent")),
            resolver.capabilities_for(Some(Role::Agent))
        );
    }

    #[test]
    fn unknown_module_name_is_denied() {
        let resolver = PermissionResolver::standard();
        assert!(!resolver.can_access_named(Some(Role::Owner), "payroll"));
        assert!(resolver.can_access_named(Some(Role::Owner), "properties"));
    }

    #[test]
    fn role_display_name_falls_back_to_raw_token() {
        let resolver = PermissionResolver::standard();
        assert_eq!(
            resolver.role_display_name("human_resources"),
            "Human Resources"
        );
        assert_eq!(resolver.role_display_name("intern"), "intern");
    }

    #[test]
    fn accessible_modules_follow_declaration_order() {
        let matrix = PermissionMatrix::new(
            "test",
            BTreeMap::from([(
                Role::Agent,
                PermissionSet::granting([Module::Contacts, Module::Dashboard]),
            )]),
        )
        .unwrap_or_else(|_| unreachable!());
        let resolver = PermissionResolver::new(Arc::new(matrix));

        assert_eq!(
            resolver.accessible_modules(Some(Role::Agent)),
            vec![Module::Dashboard, Module::Contacts]
        );
        assert!(resolver.accessible_modules(Some(Role::Owner)).is_empty());
    }

    proptest! {
        #[test]
        fn can_access_equals_declared_matrix(role in any_role(), module in any_module()) {
            let resolver = PermissionResolver::standard();
            prop_assert_eq!(
                resolver.can_access(Some(role), module),
                PermissionMatrix::standard().allows(role, module)
            );
            prop_assert_eq!(
                resolver.can_access_named(Some(role), module.as_str()),
                resolver.can_access(Some(role), module)
            );
        }
    }
}
