//! Declared dashboard menu.

use estatedesk_core::AppResult;
use estatedesk_domain::{NavigationNode, NavigationSection, NavigationTree, Role};

use Role::{Agent, Financial, HumanResources, Manager, Owner};

const EVERYONE: &[Role] = &[Owner, Manager, Agent, Financial, HumanResources];
const SALES_TEAM: &[Role] = &[Owner, Manager, Agent];
const MANAGEMENT: &[Role] = &[Owner, Manager];
const FINANCE: &[Role] = &[Owner, Financial];
const PEOPLE: &[Role] = &[Owner, HumanResources];

fn item(label: &str, icon: &str, path: &str, roles: &[Role]) -> AppResult<NavigationNode> {
    NavigationNode::leaf(label, Some(icon.to_owned()), path, roles.iter().copied())
}

fn group(
    label: &str,
    icon: &str,
    path: &str,
    roles: &[Role],
    children: Vec<NavigationNode>,
) -> AppResult<NavigationNode> {
    NavigationNode::new(
        label,
        Some(icon.to_owned()),
        path,
        roles.iter().copied(),
        children,
    )
}

/// Builds the standard dashboard navigation tree.
pub fn standard_navigation() -> AppResult<NavigationTree> {
    let overview = NavigationSection::new(
        "Overview",
        vec![item("Dashboard", "layout-dashboard", "/dashboard", EVERYONE)?],
    )?;

    let sales = NavigationSection::new(
        "Sales",
        vec![
            item("Properties", "building", "/properties", SALES_TEAM)?,
            group(
                "Leads",
                "target",
                "/leads",
                SALES_TEAM,
                vec![
                    item("New leads", "sparkles", "/leads?status=new", SALES_TEAM)?,
                    item("Lost leads", "archive", "/leads?status=lost", MANAGEMENT)?,
                ],
            )?,
            group(
                "Deals",
                "handshake",
                "/deals",
                SALES_TEAM,
                vec![
                    item("Open deals", "folder", "/deals?status=open", SALES_TEAM)?,
                    item("Commissions", "percent", "/deals/commissions", FINANCE)?,
                ],
            )?,
            item("Visits", "calendar", "/visits", SALES_TEAM)?,
            item("Keys", "key", "/keys", SALES_TEAM)?,
        ],
    )?;

    let relationships = NavigationSection::new(
        "Relationships",
        vec![
            item(
                "Clients",
                "users",
                "/clients",
                &[Owner, Manager, Agent, Financial],
            )?,
            item(
                "Contacts",
                "contact",
                "/contacts",
                &[Owner, Manager, Agent, HumanResources],
            )?,
        ],
    )?;

    let back_office = NavigationSection::new(
        "Back office",
        vec![
            group(
                "Financial",
                "wallet",
                "/financial",
                FINANCE,
                vec![
                    item(
                        "Receivables",
                        "arrow-down",
                        "/financial?tab=receivables",
                        FINANCE,
                    )?,
                    item("Payables", "arrow-up", "/financial?tab=payables", FINANCE)?,
                ],
            )?,
            item(
                "Reports",
                "chart-bar",
                "/reports",
                &[Owner, Manager, Financial],
            )?,
            item("Documents", "file-text", "/documents", EVERYONE)?,
            item("Human resources", "id-card", "/human-resources", PEOPLE)?,
        ],
    )?;

    let administration = NavigationSection::new(
        "Administration",
        vec![
            item(
                "Users",
                "user-cog",
                "/users",
                &[Owner, Manager, HumanResources],
            )?,
            item("Settings", "settings", "/settings", &[Owner])?,
        ],
    )?;

    let sections = vec![overview, sales, relationships, back_office, administration];
    Ok(NavigationTree::new(sections))
}
