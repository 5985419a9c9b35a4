use estatedesk_domain::{Module, Role};
use tracing::warn;

use crate::PermissionResolver;

/// Message rendered by the route guard when no fallback is supplied.
pub const ACCESS_DENIED_MESSAGE: &str = "You do not have permission to access this page.";

/// Module a guarded view requires, parsed once from its raw name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModuleRequirement {
    /// A module from the known set.
    Known(Module),
    /// A name outside the known set; always denied.
    Unrecognized(String),
}

impl ModuleRequirement {
    /// Parses a raw module name.
    #[must_use]
    pub fn parse(module_name: &str) -> Self {
        match Module::from_name(module_name) {
            Some(module) => Self::Known(module),
            None => Self::Unrecognized(module_name.to_owned()),
        }
    }
}

impl From<Module> for ModuleRequirement {
    fn from(value: Module) -> Self {
        Self::Known(value)
    }
}

/// Why a guard denied access.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DenialReason {
    /// The session carries no recognized role.
    NoRole,
    /// The role lacks the module capability.
    MissingCapability {
        /// Role that was checked.
        role: Role,
        /// Module that was required.
        module: Module,
    },
    /// The guard was configured with an unknown module name.
    UnrecognizedModule {
        /// Raw module name.
        name: String,
    },
}

/// Result of evaluating a module requirement for one role.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AccessDecision {
    /// Access granted.
    Allowed,
    /// Access denied.
    Denied(DenialReason),
}

impl AccessDecision {
    /// Returns whether access was granted.
    #[must_use]
    pub fn is_allowed(&self) -> bool {
        matches!(self, Self::Allowed)
    }
}

/// Tagged outcome of a guarded render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuardOutcome<C, F> {
    /// The guarded content.
    Allowed(C),
    /// The fallback rendered in its place.
    Denied(F),
}

impl<C, F> GuardOutcome<C, F> {
    /// Returns whether the guarded content was rendered.
    #[must_use]
    pub fn is_allowed(&self) -> bool {
        matches!(self, Self::Allowed(_))
    }

    /// Returns the guarded content, discarding any fallback.
    pub fn allowed(self) -> Option<C> {
        match self {
            Self::Allowed(content) => Some(content),
            Self::Denied(_) => None,
        }
    }
}

/// Default page-level fallback content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccessDenied {
    /// Message shown in place of the page body.
    pub message: &'static str,
    /// Reason the guard denied access.
    pub reason: DenialReason,
}

/// Evaluates a module requirement for a role; shared by both guards.
#[must_use]
pub fn evaluate_access(
    resolver: &PermissionResolver,
    role: Option<Role>,
    requirement: &ModuleRequirement,
) -> AccessDecision {
    let module = match requirement {
        ModuleRequirement::Known(module) => *module,
        ModuleRequirement::Unrecognized(name) => {
            warn!(
                module = name.as_str(),
                "guard configured with unknown module"
            );
            return AccessDecision::Denied(DenialReason::UnrecognizedModule { name: name.clone() });
        }
    };

    let Some(role) = role else {
        return AccessDecision::Denied(DenialReason::NoRole);
    };

    if resolver.can_access(Some(role), module) {
        AccessDecision::Allowed
    } else {
        AccessDecision::Denied(DenialReason::MissingCapability { role, module })
    }
}

/// Page-level guard substituting fallback content when access is denied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteGuard {
    requirement: ModuleRequirement,
}

impl RouteGuard {
    /// Creates a guard requiring the named module.
    #[must_use]
    pub fn new(module_name: &str) -> Self {
        Self {
            requirement: ModuleRequirement::parse(module_name),
        }
    }

    /// Creates a guard requiring a known module.
    #[must_use]
    pub fn for_module(module: Module) -> Self {
        Self {
            requirement: module.into(),
        }
    }

    /// Evaluates access without rendering.
    #[must_use]
    pub fn evaluate(&self, resolver: &PermissionResolver, role: Option<Role>) -> AccessDecision {
        evaluate_access(resolver, role, &self.requirement)
    }

    /// Renders the page, or the generic access-denied message.
    pub fn render<C>(
        &self,
        resolver: &PermissionResolver,
        role: Option<Role>,
        child: impl FnOnce() -> C,
    ) -> GuardOutcome<C, AccessDenied> {
        match self.evaluate(resolver, role) {
            AccessDecision::Allowed => GuardOutcome::Allowed(child()),
            AccessDecision::Denied(reason) => GuardOutcome::Denied(AccessDenied {
                message: ACCESS_DENIED_MESSAGE,
                reason,
            }),
        }
    }

    /// Renders the page, or the supplied fallback.
    pub fn render_with_fallback<C, F>(
        &self,
        resolver: &PermissionResolver,
        role: Option<Role>,
        child: impl FnOnce() -> C,
        fallback: impl FnOnce() -> F,
    ) -> GuardOutcome<C, F> {
        render_decision(self.evaluate(resolver, role), child, fallback)
    }
}

/// Fragment-level guard that renders nothing when access is denied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ElementGuard {
    requirement: ModuleRequirement,
}

impl ElementGuard {
    /// Creates a guard requiring the named module.
    #[must_use]
    pub fn new(module_name: &str) -> Self {
        Self {
            requirement: ModuleRequirement::parse(module_name),
        }
    }

    /// Creates a guard requiring a known module.
    #[must_use]
    pub fn for_module(module: Module) -> Self {
        Self {
            requirement: module.into(),
        }
    }

    /// Evaluates access without rendering.
    #[must_use]
    pub fn evaluate(&self, resolver: &PermissionResolver, role: Option<Role>) -> AccessDecision {
        evaluate_access(resolver, role, &self.requirement)
    }

    /// Renders the fragment, or nothing.
    pub fn render<C>(
        &self,
        resolver: &PermissionResolver,
        role: Option<Role>,
        child: impl FnOnce() -> C,
    ) -> Option<C> {
        let outcome = self.render_with_fallback(resolver, role, child, || ());
        outcome.allowed()
    }

    /// Renders the fragment, or the supplied fallback.
    pub fn render_with_fallback<C, F>(
        &self,
        resolver: &PermissionResolver,
        role: Option<Role>,
        child: impl FnOnce() -> C,
        fallback: impl FnOnce() -> F,
    ) -> GuardOutcome<C, F> {
        render_decision(self.evaluate(resolver, role), child, fallback)
    }
}

fn render_decision<C, F>(
    decision: AccessDecision,
    child: impl FnOnce() -> C,
    fallback: impl FnOnce() -> F,
) -> GuardOutcome<C, F> {
    if decision.is_allowed() {
        GuardOutcome::Allowed(child())
    } else {
        GuardOutcome::Denied(fallback())
    }
}
