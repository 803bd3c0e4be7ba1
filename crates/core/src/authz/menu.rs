//! Navigation menu filtering.

use serde::{Deserialize, Serialize};

use super::service::has_any;
use super::types::{Permission, Role};

/// A navigation menu entry.
///
/// `children: None` marks a leaf; `Some` marks a submenu. A leaf is visible
/// when its permission list is empty or the role holds any listed permission.
/// A submenu is visible only while at least one child survives filtering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuItem {
    /// Route path or submenu key.
    pub index: String,
    /// Display title.
    pub title: String,
    /// Icon identifier.
    pub icon: String,
    /// Permissions gating this entry (ANY-of).
    #[serde(default)]
    pub permissions: Vec<Permission>,
    /// Child entries for submenus.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<MenuItem>>,
}

impl MenuItem {
    /// Creates a leaf entry.
    #[must_use]
    pub fn leaf(index: &str, title: &str, icon: &str, permissions: &[Permission]) -> Self {
        Self {
            index: index.to_string(),
            title: title.to_string(),
            icon: icon.to_string(),
            permissions: permissions.to_vec(),
            children: None,
        }
    }

    /// Creates a submenu entry.
    #[must_use]
    pub fn submenu(index: &str, title: &str, icon: &str, children: Vec<MenuItem>) -> Self {
        Self {
            index: index.to_string(),
            title: title.to_string(),
            icon: icon.to_string(),
            permissions: Vec::new(),
            children: Some(children),
        }
    }
}

/// Recursively prunes a menu tree down to what the role may see.
#[must_use]
pub fn filter_menu(items: &[MenuItem], role: Option<Role>) -> Vec<MenuItem> {
    items
        .iter()
        .filter_map(|item| {
            if !item.permissions.is_empty() && !has_any(role, &item.permissions) {
                return None;
            }
            match &item.children {
                Some(children) => {
                    let kept = filter_menu(children, role);
                    if kept.is_empty() {
                        // Hide submenus with no accessible children.
                        None
                    } else {
                        Some(MenuItem {
                            children: Some(kept),
                            ..item.clone()
                        })
                    }
                }
                None => Some(item.clone()),
            }
        })
        .collect()
}

/// Builds the application's standard navigation tree.
#[must_use]
pub fn default_menu() -> Vec<MenuItem> {
    vec![
        MenuItem::leaf("/", "Dashboard", "i-ep-house", &[]),
        MenuItem::leaf(
            "/medicines",
            "Medicines",
            "i-ep-medicine-box",
            &[Permission::ViewMedicines],
        ),
        MenuItem::leaf(
            "/medicines/add",
            "Add/Edit Medicine",
            "i-ep-plus",
            &[Permission::AddMedicines],
        ),
        MenuItem::leaf(
            "/drug-adjustments",
            "Drug Adjustments",
            "i-ep-edit",
            &[Permission::StockAdjustment],
        ),
        MenuItem::leaf(
            "/factors",
            "Factors",
            "i-ep-document",
            &[Permission::StockAdjustment],
        ),
        MenuItem::leaf(
            "/invoices",
            "Invoices",
            "i-ep-receipt",
            &[Permission::StockAdjustment],
        ),
        MenuItem::leaf("/sell", "Sell", "i-ep-shopping-cart", &[Permission::Sell]),
        MenuItem::leaf(
            "/ttac-drugs/upload",
            "TTAC Drugs Upload",
            "i-ep-upload",
            &[Permission::TtacDrugsUpload],
        ),
        MenuItem::leaf(
            "/reporting",
            "Reports",
            "i-ep-data-analysis",
            &[Permission::ViewReports],
        ),
        MenuItem::submenu(
            "settings",
            "Settings",
            "i-ep-setting",
            vec![
                MenuItem::leaf(
                    "/settings/financial",
                    "Financial Settings",
                    "i-ep-money",
                    &[Permission::FinancialSettings],
                ),
                MenuItem::leaf(
                    "/settings/management",
                    "Management Settings",
                    "i-ep-management",
                    &[Permission::ManagementSettings],
                ),
                MenuItem::leaf(
                    "/settings/users",
                    "User Settings",
                    "i-ep-user",
                    &[Permission::UserSettings],
                ),
            ],
        ),
    ]
}
