//! Role, permission, and route identifier types.
//!
//! All three are closed enums rather than opaque strings so that a typo in a
//! lookup table is a compile error instead of a silent default-allow or
//! default-deny at runtime.

use serde::{Deserialize, Serialize};

/// User role, derived from the user record and never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Full access to everything.
    Admin,
    /// Medicine management and reporting.
    Pharmacist,
    /// Basic access - view only.
    Staff,
}

impl Role {
    /// Returns the human-readable role name shown in the UI.
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Admin => "Administrator",
            Self::Pharmacist => "Pharmacist",
            Self::Staff => "Staff Member",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Admin => write!(f, "admin"),
            Self::Pharmacist => write!(f, "pharmacist"),
            Self::Staff => write!(f, "staff"),
        }
    }
}

impl std::str::FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "admin" => Ok(Self::Admin),
            "pharmacist" => Ok(Self::Pharmacist),
            "staff" => Ok(Self::Staff),
            _ => Err(format!("Unknown role: {s}")),
        }
    }
}

/// Atomic capability flag gating a UI action or route.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Permission {
    /// View the medicine list and details.
    ViewMedicines,
    /// Create new medicines.
    AddMedicines,
    /// Edit existing medicines.
    EditMedicines,
    /// Delete medicines.
    DeleteMedicines,
    /// Adjust stock levels (adjustments, factors, invoices).
    StockAdjustment,
    /// Upload TTAC drug reference data.
    TtacDrugsUpload,
    /// Sell medicines at the counter.
    Sell,
    /// View reports.
    ViewReports,
    /// Export reports.
    ExportReports,
    /// Manage financial settings.
    FinancialSettings,
    /// Manage management settings.
    ManagementSettings,
    /// Manage user settings.
    UserSettings,
    /// Administrator-level access.
    AdminAccess,
    /// Pharmacist-level access.
    PharmacistAccess,
}

impl Permission {
    /// Returns the wire identifier for this permission.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ViewMedicines => "view_medicines",
            Self::AddMedicines => "add_medicines",
            Self::EditMedicines => "edit_medicines",
            Self::DeleteMedicines => "delete_medicines",
            Self::StockAdjustment => "stock_adjustment",
            Self::TtacDrugsUpload => "ttac_drugs_upload",
            Self::Sell => "sell",
            Self::ViewReports => "view_reports",
            Self::ExportReports => "export_reports",
            Self::FinancialSettings => "financial_settings",
            Self::ManagementSettings => "management_settings",
            Self::UserSettings => "user_settings",
            Self::AdminAccess => "admin_access",
            Self::PharmacistAccess => "pharmacist_access",
        }
    }

    /// Returns the message shown when an action is blocked by this permission.
    #[must_use]
    pub const fn denial_message(self) -> &'static str {
        match self {
            Self::ViewMedicines => "You need permission to view medicines",
            Self::AddMedicines => "You need permission to add medicines",
            Self::EditMedicines => "You need permission to edit medicines",
            Self::DeleteMedicines => "You need permission to delete medicines",
            Self::StockAdjustment => "You need permission to adjust stock",
            Self::TtacDrugsUpload => "You need permission to upload TTAC drugs",
            Self::Sell => "You need permission to sell medicines",
            Self::ViewReports => "You need permission to view reports",
            Self::ExportReports => "You need permission to export reports",
            Self::FinancialSettings => "You need admin access to financial settings",
            Self::ManagementSettings => "You need admin access to management settings",
            Self::UserSettings => "You need admin access to user settings",
            Self::AdminAccess | Self::PharmacistAccess => {
                "You do not have permission for this action"
            }
        }
    }
}

impl std::fmt::Display for Permission {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Permission {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "view_medicines" => Ok(Self::ViewMedicines),
            "add_medicines" => Ok(Self::AddMedicines),
            "edit_medicines" => Ok(Self::EditMedicines),
            "delete_medicines" => Ok(Self::DeleteMedicines),
            "stock_adjustment" => Ok(Self::StockAdjustment),
            "ttac_drugs_upload" => Ok(Self::TtacDrugsUpload),
            "sell" => Ok(Self::Sell),
            "view_reports" => Ok(Self::ViewReports),
            "export_reports" => Ok(Self::ExportReports),
            "financial_settings" => Ok(Self::FinancialSettings),
            "management_settings" => Ok(Self::ManagementSettings),
            "user_settings" => Ok(Self::UserSettings),
            "admin_access" => Ok(Self::AdminAccess),
            "pharmacist_access" => Ok(Self::PharmacistAccess),
            _ => Err(format!("Unknown permission: {s}")),
        }
    }
}

/// Registered route identifiers.
///
/// The router passes route names as strings; `FromStr` accepts the exact
/// names it uses. Names that do not parse fall under the unknown-route
/// policy in [`crate::authz::RouteAccessPolicy`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Route {
    /// Medicine list view.
    MedicinesList,
    /// Add-medicine form.
    AddMedicine,
    /// Edit-medicine form.
    EditMedicine,
    /// Medicine detail view.
    MedicineDetail,
    /// Stock adjustment screen.
    StockAdjustment,
    /// Drug adjustments list.
    DrugAdjustments,
    /// Factors list.
    Factors,
    /// Invoices list.
    Invoices,
    /// Point-of-sale screen.
    Sell,
    /// TTAC drugs upload screen.
    TtacDrugsUpload,
    /// Reporting view.
    Reporting,
    /// Financial settings.
    FinancialSettings,
    /// Management settings.
    ManagementSettings,
    /// User settings.
    UserSettings,
    /// Dashboard, accessible to all authenticated users.
    Home,
    /// Application shell, accessible to all authenticated users.
    Layout,
}

impl std::str::FromStr for Route {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "MedicinesList" => Ok(Self::MedicinesList),
            "AddMedicine" => Ok(Self::AddMedicine),
            "EditMedicine" => Ok(Self::EditMedicine),
            "MedicineDetail" => Ok(Self::MedicineDetail),
            "StockAdjustment" => Ok(Self::StockAdjustment),
            "DrugAdjustments" => Ok(Self::DrugAdjustments),
            "Factors" => Ok(Self::Factors),
            "Invoices" => Ok(Self::Invoices),
            "Sell" => Ok(Self::Sell),
            "TtacDrugsUpload" => Ok(Self::TtacDrugsUpload),
            "Reporting" => Ok(Self::Reporting),
            "financial-settings" => Ok(Self::FinancialSettings),
            "management-settings" => Ok(Self::ManagementSettings),
            "user-settings" => Ok(Self::UserSettings),
            "Home" => Ok(Self::Home),
            "Layout" => Ok(Self::Layout),
            _ => Err(format!("Unknown route: {s}")),
        }
    }
}
