use std::collections::BTreeSet;

use estatedesk_domain::{NavigationNode, NavigationTree, Role, RouteLocation};

#[cfg(test)]
mod tests;

/// Prunes a declared navigation tree to what the role may see.
///
/// Items survive when the role is listed on them directly or when at least
/// one of their sub-items survives. Sections left without items are dropped,
/// and a missing role yields an empty tree.
#[must_use]
pub fn filter_navigation(tree: &NavigationTree, role: Option<Role>) -> NavigationTree {
    let Some(role) = role else {
        return NavigationTree::empty();
    };

    let mut filtered_sections = Vec::new();
    for section in tree.sections() {
        let filtered_items: Vec<NavigationNode> = section
            .items()
            .iter()
            .filter_map(|item| filter_node(item, role))
            .collect();

        if !filtered_items.is_empty() {
            filtered_sections.push(section.with_items(filtered_items));
        }
    }

    NavigationTree::new(filtered_sections)
}

fn filter_node(node: &NavigationNode, role: Role) -> Option<NavigationNode> {
    let filtered_children: Vec<NavigationNode> = node
        .children()
        .iter()
        .filter_map(|child| filter_node(child, role))
        .collect();

    (node.permits(role) || !filtered_children.is_empty())
        .then(|| node.with_children(filtered_children))
}

/// Returns whether a navigation target matches the current route.
///
/// Targets with a query string match only when both path and query are equal;
/// targets without one match on the path alone.
#[must_use]
pub fn is_route_active(current_route: &str, target_path: &str) -> bool {
    let current = RouteLocation::parse(current_route);
    let target = RouteLocation::parse(target_path);

    if current.path != target.path {
        return false;
    }

    match target.query {
        Some(query) => current.query == Some(query),
        None => true,
    }
}

/// Expand/collapse state of menu items, keyed by item label.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NavigationUiState {
    expanded: BTreeSet<String>,
}

impl NavigationUiState {
    /// Creates a state with every item collapsed.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Flips the item's state and returns whether it is now expanded.
    pub fn toggle(&mut self, label: &str) -> bool {
        if self.expanded.remove(label) {
            false
        } else {
            self.expanded.insert(label.to_owned());
            true
        }
    }

    /// Marks the item expanded.
    pub fn expand(&mut self, label: &str) {
        self.expanded.insert(label.to_owned());
    }

    /// Marks the item collapsed.
    pub fn collapse(&mut self, label: &str) {
        self.expanded.remove(label);
    }

    /// Returns whether the item is expanded.
    #[must_use]
    pub fn is_expanded(&self, label: &str) -> bool {
        self.expanded.contains(label)
    }
}

/// Section ready for rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComposedSection {
    /// Section header label.
    pub label: String,
    /// Visible items.
    pub items: Vec<ComposedItem>,
}

/// Item ready for rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComposedItem {
    /// Item label.
    pub label: String,
    /// Optional icon reference.
    pub icon: Option<String>,
    /// Navigation target.
    pub target_path: String,
    /// Whether the role is listed on the item itself.
    pub directly_permitted: bool,
    /// Whether the item's target matches the current route.
    pub is_active: bool,
    /// Whether any visible sub-item is active.
    pub has_active_child: bool,
    /// Whether the item is expanded in the UI state.
    pub is_expanded: bool,
    /// Permission-filtered sub-items, independent of expand state.
    pub children: Vec<ComposedItem>,
}

/// Derives the role-specific menu from a declared navigation tree.
#[derive(Debug, Clone)]
pub struct NavigationComposer {
    tree: NavigationTree,
}

impl NavigationComposer {
    /// Creates a composer over the declared tree.
    #[must_use]
    pub fn new(tree: NavigationTree) -> Self {
        Self { tree }
    }

    /// Composes the menu for rendering.
    ///
    /// Permission pruning is recomputed on every call and applied before the
    /// UI state is consulted.
    #[must_use]
    pub fn compose(
        &self,
        role: Option<Role>,
        ui_state: &NavigationUiState,
        current_route: &str,
    ) -> Vec<ComposedSection> {
        let Some(role) = role else {
            return Vec::new();
        };

        filter_navigation(&self.tree, Some(role))
            .sections()
            .iter()
            .map(|section| ComposedSection {
                label: section.label().as_str().to_owned(),
                items: section
                    .items()
                    .iter()
                    .map(|item| compose_item(item, role, ui_state, current_route))
                    .collect(),
            })
            .collect()
    }

    /// Returns the first route the role can open, for post-login routing.
    #[must_use]
    pub fn landing_path(&self, role: Option<Role>) -> Option<String> {
        let role = role?;
        filter_navigation(&self.tree, Some(role))
            .sections()
            .iter()
            .flat_map(|section| section.items())
            .find_map(|item| first_permitted_path(item, role))
    }
}

fn compose_item(
    node: &NavigationNode,
    role: Role,
    ui_state: &NavigationUiState,
    current_route: &str,
) -> ComposedItem {
    let children: Vec<ComposedItem> = node
        .children()
        .iter()
        .map(|child| compose_item(child, role, ui_state, current_route))
        .collect();
    let has_active_child = children
        .iter()
        .any(|child| child.is_active || child.has_active_child);

    ComposedItem {
        label: node.label().as_str().to_owned(),
        icon: node.icon().map(ToOwned::to_owned),
        target_path: node.target_path().as_str().to_owned(),
        directly_permitted: node.permits(role),
        is_active: is_route_active(current_route, node.target_path().as_str()),
        has_active_child,
        is_expanded: ui_state.is_expanded(node.label().as_str()),
        children,
    }
}

fn first_permitted_path(node: &NavigationNode, role: Role) -> Option<String> {
    if node.permits(role) {
        return Some(node.target_path().as_str().to_owned());
    }

    node.children()
        .iter()
        .find_map(|child| first_permitted_path(child, role))
}
