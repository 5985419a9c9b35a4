use estatedesk_domain::{NavigationNode, NavigationSection, NavigationTree, Role};
use proptest::prelude::*;

use super::{NavigationComposer, NavigationUiState, filter_navigation, is_route_active};

fn leaf(label: &str, path: &str, roles: &[Role]) -> NavigationNode {
    NavigationNode::leaf(label, None, path, roles.iter().copied())
        .unwrap_or_else(|_| unreachable!())
}

fn parent(
    label: &str,
    path: &str,
    roles: &[Role],
    children: Vec<NavigationNode>,
) -> NavigationNode {
    NavigationNode::new(label, None, path, roles.iter().copied(), children)
        .unwrap_or_else(|_| unreachable!())
}

fn section(label: &str, items: Vec<NavigationNode>) -> NavigationSection {
    NavigationSection::new(label, items).unwrap_or_else(|_| unreachable!())
}

fn sample_tree() -> NavigationTree {
    NavigationTree::new(vec![
        section(
            "Main",
            vec![
                leaf("Dashboard", "/dashboard", Role::all()),
                parent(
                    "Deals",
                    "/deals",
                    &[Role::Owner, Role::Manager, Role::Agent],
                    vec![
                        leaf(
                            "Open deals",
                            "/deals?status=open",
                            &[Role::Agent, Role::Owner],
                        ),
                        leaf(
                            "Commissions",
                            "/deals/commissions",
                            &[Role::Financial, Role::Owner],
                        ),
                    ],
                ),
            ],
        ),
        section(
            "Administration",
            vec![
                leaf("Users", "/users", &[Role::Owner, Role::HumanResources]),
                leaf("Settings", "/settings", &[Role::Owner]),
            ],
        ),
    ])
}

fn labels(tree: &NavigationTree) -> Vec<(String, Vec<String>)> {
    tree.sections()
        .iter()
        .map(|section| {
            (
                section.label().as_str().to_owned(),
                section
                    .items()
                    .iter()
                    .map(|item| item.label().as_str().to_owned())
                    .collect(),
            )
        })
        .collect()
}

#[test]
fn missing_role_yields_empty_tree() {
    assert!(filter_navigation(&sample_tree(), None).is_empty());
}

#[test]
fn parent_is_retained_for_permitted_sub_item() {
    let filtered = filter_navigation(&sample_tree(), Some(Role::Financial));
    let main = &filtered.sections()[0];

    assert_eq!(main.items().len(), 2);
    let deals = &main.items()[1];
    assert_eq!(deals.label().as_str(), "Deals");
    assert!(!deals.permits(Role::Financial));
    assert_eq!(deals.children().len(), 1);
    assert_eq!(deals.children()[0].label().as_str(), "Commissions");
}

#[test]
fn parent_without_visible_children_is_dropped() {
    let tree = NavigationTree::new(vec![section(
        "Main",
        vec![
            leaf("Dashboard", "/dashboard", &[Role::HumanResources]),
            parent(
                "Deals",
                "/deals",
                &[Role::Owner],
                vec![leaf("Open deals", "/deals?status=open", &[Role::Agent])],
            ),
        ],
    )]);

    let filtered = filter_navigation(&tree, Some(Role::HumanResources));
    assert_eq!(
        labels(&filtered),
        vec![("Main".to_owned(), vec!["Dashboard".to_owned()])]
    );
}

#[test]
fn empty_section_is_omitted() {
    let filtered = filter_navigation(&sample_tree(), Some(Role::Agent));
    assert_eq!(
        labels(&filtered),
        vec![(
            "Main".to_owned(),
            vec!["Dashboard".to_owned(), "Deals".to_owned()]
        )]
    );
}

#[test]
fn query_target_requires_exact_query() {
    let target = "/deals?status=open";
    assert!(is_route_active("/deals?status=open", target));
    assert!(!is_route_active("/deals?status=closed", target));
    assert!(!is_route_active("/deals", target));
}

#[test]
fn plain_target_matches_on_path_alone() {
    assert!(is_route_active("/deals?status=open", "/deals"));
    assert!(is_route_active("/deals", "/deals"));
    assert!(!is_route_active("/deals/commissions", "/deals"));
}

#[test]
fn compose_keeps_expand_state_and_filters_collapsed_children() {
    let composer = NavigationComposer::new(sample_tree());
    let mut ui_state = NavigationUiState::new();

    let collapsed = composer.compose(Some(Role::Agent), &ui_state, "/deals?status=open");
    let deals = &collapsed[0].items[1];
    assert!(!deals.is_expanded);
    assert!(deals.is_active);
    assert!(deals.has_active_child);
    assert_eq!(deals.children.len(), 1);
    assert_eq!(deals.children[0].label, "Open deals");

    assert!(ui_state.toggle("Deals"));
    let expanded = composer.compose(Some(Role::Financial), &ui_state, "/dashboard");
    let deals = &expanded[0].items[1];
    assert!(deals.is_expanded);
    assert!(!deals.directly_permitted);
    assert_eq!(deals.children.len(), 1);
    assert_eq!(deals.children[0].label, "Commissions");
    assert!(expanded[0].items[0].is_active);
}

#[test]
fn toggle_flips_state() {
    let mut ui_state = NavigationUiState::new();
    assert!(ui_state.toggle("Deals"));
    assert!(!ui_state.toggle("Deals"));
    ui_state.expand("Users");
    assert!(ui_state.is_expanded("Users"));
    ui_state.collapse("Users");
    assert!(!ui_state.is_expanded("Users"));
}

#[test]
fn compose_without_role_is_empty() {
    let composer = NavigationComposer::new(sample_tree());
    assert!(
        composer
            .compose(None, &NavigationUiState::new(), "/dashboard")
            .is_empty()
    );
}

#[test]
fn landing_path_prefers_first_permitted_target() {
    let tree = NavigationTree::new(vec![section(
        "Main",
        vec![parent(
            "Deals",
            "/deals",
            &[Role::Owner],
            vec![leaf("Commissions", "/deals/commissions", &[Role::Financial])],
        )],
    )]);
    let composer = NavigationComposer::new(tree);

    assert_eq!(
        composer.landing_path(Some(Role::Financial)),
        Some("/deals/commissions".to_owned())
    );
    assert_eq!(
        composer.landing_path(Some(Role::Owner)),
        Some("/deals".to_owned())
    );
    assert_eq!(composer.landing_path(Some(Role::Agent)), None);
    assert_eq!(composer.landing_path(None), None);
}

fn roles_from_mask(mask: u8) -> Vec<Role> {
    Role::all()
        .iter()
        .enumerate()
        .filter(|(index, _)| mask & (1 << index) != 0)
        .map(|(_, role)| *role)
        .collect()
}

fn tree_from_masks(masks: &[Vec<(u8, Vec<u8>)>]) -> NavigationTree {
    let sections = masks
        .iter()
        .enumerate()
        .map(|(section_index, items)| {
            let items = items
                .iter()
                .enumerate()
                .map(|(item_index, (item_mask, child_masks))| {
                    let children = child_masks
                        .iter()
                        .enumerate()
                        .map(|(child_index, child_mask)| {
                            leaf(
                                &format!("child-{section_index}-{item_index}-{child_index}"),
                                &format!("/s{section_index}/i{item_index}/c{child_index}"),
                                &roles_from_mask(*child_mask),
                            )
                        })
                        .collect();
                    parent(
                        &format!("item-{section_index}-{item_index}"),
                        &format!("/s{section_index}/i{item_index}"),
                        &roles_from_mask(*item_mask),
                        children,
                    )
                })
                .collect();
            section(&format!("section-{section_index}"), items)
        })
        .collect();

    NavigationTree::new(sections)
}

fn any_masks() -> impl Strategy<Value = Vec<Vec<(u8, Vec<u8>)>>> {
    let item = (0u8..32, proptest::collection::vec(0u8..32, 0..4));
    proptest::collection::vec(proptest::collection::vec(item, 0..4), 0..4)
}

proptest! {
    #[test]
    fn filtering_is_idempotent(masks in any_masks(), role_index in 0usize..5) {
        let tree = tree_from_masks(&masks);
        let role = Role::all()[role_index];

        let once = filter_navigation(&tree, Some(role));
        let again = filter_navigation(&tree, Some(role));
        prop_assert_eq!(&once, &again);
        prop_assert_eq!(filter_navigation(&once, Some(role)), once);
    }

    #[test]
    fn every_surviving_node_is_reachable(masks in any_masks(), role_index in 0usize..5) {
        let tree = tree_from_masks(&masks);
        let role = Role::all()[role_index];

        for section in filter_navigation(&tree, Some(role)).sections() {
            prop_assert!(!section.items().is_empty());
            for item in section.items() {
                prop_assert!(item.permits(role) || !item.children().is_empty());
                for child in item.children() {
                    prop_assert!(child.permits(role));
                }
            }
        }
    }
}
