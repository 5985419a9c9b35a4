use std::collections::BTreeSet;

use estatedesk_core::{AppError, AppResult, NonEmptyString};
use serde::Serialize;

use crate::Role;

/// Declared navigation menu: sections of items with optional sub-items.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct NavigationTree {
    sections: Vec<NavigationSection>,
}

impl NavigationTree {
    /// Creates a navigation tree from ordered sections.
    #[must_use]
    pub fn new(sections: Vec<NavigationSection>) -> Self {
        Self { sections }
    }

    /// Returns an empty tree.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Returns ordered sections.
    #[must_use]
    pub fn sections(&self) -> &[NavigationSection] {
        &self.sections
    }

    /// Returns whether the tree has no sections.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }
}

/// Titled group of navigation items.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavigationSection {
    label: NonEmptyString,
    items: Vec<NavigationNode>,
}

impl NavigationSection {
    /// Creates a validated navigation section.
    pub fn new(label: impl Into<String>, items: Vec<NavigationNode>) -> AppResult<Self> {
        Ok(Self {
            label: NonEmptyString::new(label)?,
            items,
        })
    }

    /// Returns the section header label.
    #[must_use]
    pub fn label(&self) -> &NonEmptyString {
        &self.label
    }

    /// Returns ordered items.
    #[must_use]
    pub fn items(&self) -> &[NavigationNode] {
        &self.items
    }

    /// Returns a copy of this section carrying the given items.
    #[must_use]
    pub fn with_items(&self, items: Vec<NavigationNode>) -> Self {
        Self {
            label: self.label.clone(),
            items,
        }
    }
}

/// One menu entry carrying its own allowed-roles set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavigationNode {
    label: NonEmptyString,
    icon: Option<String>,
    target_path: NonEmptyString,
    allowed_roles: BTreeSet<Role>,
    children: Vec<NavigationNode>,
}

impl NavigationNode {
    /// Creates a validated navigation node.
    pub fn new(
        label: impl Into<String>,
        icon: Option<String>,
        target_path: impl Into<String>,
        allowed_roles: impl IntoIterator<Item = Role>,
        children: Vec<NavigationNode>,
    ) -> AppResult<Self> {
        let target_path = NonEmptyString::new(target_path)?;
        if !target_path.as_str().starts_with('/') {
            return Err(AppError::Validation(format!(
                "navigation target path '{}' must start with '/'",
                target_path.as_str()
            )));
        }

        let icon = icon.and_then(|value| {
            let trimmed = value.trim().to_owned();
            (!trimmed.is_empty()).then_some(trimmed)
        });

        Ok(Self {
            label: NonEmptyString::new(label)?,
            icon,
            target_path,
            allowed_roles: allowed_roles.into_iter().collect(),
            children,
        })
    }

    /// Creates a validated node without sub-items.
    pub fn leaf(
        label: impl Into<String>,
        icon: Option<String>,
        target_path: impl Into<String>,
        allowed_roles: impl IntoIterator<Item = Role>,
    ) -> AppResult<Self> {
        Self::new(label, icon, target_path, allowed_roles, Vec::new())
    }

    /// Returns the node label.
    #[must_use]
    pub fn label(&self) -> &NonEmptyString {
        &self.label
    }

    /// Returns the optional icon reference.
    #[must_use]
    pub fn icon(&self) -> Option<&str> {
        self.icon.as_deref()
    }

    /// Returns the target path, possibly carrying a query string.
    #[must_use]
    pub fn target_path(&self) -> &NonEmptyString {
        &self.target_path
    }

    /// Returns the roles allowed to see this node directly.
    #[must_use]
    pub fn allowed_roles(&self) -> &BTreeSet<Role> {
        &self.allowed_roles
    }

    /// Returns ordered sub-items.
    #[must_use]
    pub fn children(&self) -> &[NavigationNode] {
        &self.children
    }

    /// Returns whether the role is listed on this node itself.
    #[must_use]
    pub fn permits(&self, role: Role) -> bool {
        self.allowed_roles.contains(&role)
    }

    /// Returns a copy of this node carrying the given sub-items.
    #[must_use]
    pub fn with_children(&self, children: Vec<NavigationNode>) -> Self {
        Self {
            label: self.label.clone(),
            icon: self.icon.clone(),
            target_path: self.target_path.clone(),
            allowed_roles: self.allowed_roles.clone(),
            children,
        }
    }
}

/// Route split into its path and optional raw query string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RouteLocation<'a> {
    /// Path portion without the `?`.
    pub path: &'a str,
    /// Raw query string after the `?`, if any.
    pub query: Option<&'a str>,
}

impl<'a> RouteLocation<'a> {
    /// Splits a route at the first `?`.
    #[must_use]
    pub fn parse(route: &'a str) -> Self {
        match route.split_once('?') {
            Some((path, query)) => Self {
                path,
                query: Some(query),
            },
            None => Self {
                path: route,
                query: None,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{NavigationNode, NavigationSection, RouteLocation};
    use crate::Role;

    #[test]
    fn navigation_node_requires_absolute_target_path() {
        let node = NavigationNode::leaf("Leads", None, "leads", [Role::Agent]);
        assert!(node.is_err());
    }

    #[test]
    fn navigation_section_requires_label() {
        assert!(NavigationSection::new("  ", Vec::new()).is_err());
    }

    #[test]
    fn blank_icon_is_dropped() {
        let node = NavigationNode::leaf("Leads", Some(" ".to_owned()), "/leads", [Role::Agent])
            .unwrap_or_else(|_| unreachable!());
        assert_eq!(node.icon(), None);
        assert!(node.permits(Role::Agent));
        assert!(!node.permits(Role::Financial));
    }

    #[test]
    fn route_location_splits_query() {
        let location = RouteLocation::parse("/deals?status=closed");
        assert_eq!(location.path, "/deals");
        assert_eq!(location.query, Some("status=closed"));
        assert_eq!(RouteLocation::parse("/deals").query, None);
    }
}
