//! Role derivation and permission membership checks.

use darou_shared::UserAccount;

use super::types::{Permission, Role};

/// Permissions held by the admin role.
pub const ADMIN_PERMISSIONS: &[Permission] = &[
    Permission::ViewMedicines,
    Permission::AddMedicines,
    Permission::EditMedicines,
    Permission::DeleteMedicines,
    Permission::StockAdjustment,
    Permission::TtacDrugsUpload,
    Permission::Sell,
    Permission::ViewReports,
    Permission::ExportReports,
    Permission::FinancialSettings,
    Permission::ManagementSettings,
    Permission::UserSettings,
    Permission::AdminAccess,
    Permission::PharmacistAccess,
];

/// Permissions held by the pharmacist role.
pub const PHARMACIST_PERMISSIONS: &[Permission] = &[
    Permission::ViewMedicines,
    Permission::AddMedicines,
    Permission::EditMedicines,
    Permission::StockAdjustment,
    Permission::TtacDrugsUpload,
    Permission::Sell,
    Permission::ViewReports,
    Permission::ExportReports,
    Permission::PharmacistAccess,
];

/// Permissions held by the staff role.
pub const STAFF_PERMISSIONS: &[Permission] =
    &[Permission::ViewMedicines, Permission::ViewReports];

/// Derives the role for a user record.
///
/// `is_staff_member` takes precedence over `is_pharmacist`; a user with
/// neither flag is staff. An absent user has no role.
#[must_use]
pub fn derive_role(user: Option<&UserAccount>) -> Option<Role> {
    let user = user?;
    if user.is_staff_member {
        Some(Role::Admin)
    } else if user.is_pharmacist {
        Some(Role::Pharmacist)
    } else {
        Some(Role::Staff)
    }
}

/// Returns the fixed permission set for a role.
///
/// The tables are `'static` data, immutable for the process lifetime and safe
/// for unsynchronized concurrent reads. An absent role holds nothing.
#[must_use]
pub const fn permissions_for(role: Option<Role>) -> &'static [Permission] {
    match role {
        Some(Role::Admin) => ADMIN_PERMISSIONS,
        Some(Role::Pharmacist) => PHARMACIST_PERMISSIONS,
        Some(Role::Staff) => STAFF_PERMISSIONS,
        None => &[],
    }
}

/// Returns true if the role holds the given permission.
///
/// An absent role fails every check (fail-closed).
#[must_use]
pub fn has_permission(role: Option<Role>, permission: Permission) -> bool {
    permissions_for(role).contains(&permission)
}

/// Returns true if the role holds at least one of the given permissions.
///
/// An empty list is never satisfied.
#[must_use]
pub fn has_any(role: Option<Role>, permissions: &[Permission]) -> bool {
    permissions
        .iter()
        .any(|&permission| has_permission(role, permission))
}

/// Returns true if the role holds every one of the given permissions.
///
/// An empty list is vacuously satisfied, even by an absent role.
#[must_use]
pub fn has_all(role: Option<Role>, permissions: &[Permission]) -> bool {
    permissions
        .iter()
        .all(|&permission| has_permission(role, permission))
}

#[cfg(test)]
mod tests {
    use super::*;
    use darou_shared::types::UserId;

    fn user(is_staff_member: bool, is_pharmacist: bool) -> UserAccount {
        UserAccount {
            id: UserId::new(),
            username: "test".to_string(),
            email: "test@example.com".to_string(),
            first_name: String::new(),
            last_name: String::new(),
            is_staff_member,
            is_pharmacist,
            is_active: true,
        }
    }

    #[test]
    fn test_derive_role_absent_user() {
        assert_eq!(derive_role(None), None);
    }

    #[test]
    fn test_derive_role_staff_flag_wins() {
        // A staff member who is also a pharmacist is still admin.
        let user = user(true, true);
        assert_eq!(derive_role(Some(&user)), Some(Role::Admin));
    }

    #[test]
    fn test_derive_role_pharmacist() {
        let user = user(false, true);
        assert_eq!(derive_role(Some(&user)), Some(Role::Pharmacist));
    }

    #[test]
    fn test_derive_role_defaults_to_staff() {
        let user = user(false, false);
        assert_eq!(derive_role(Some(&user)), Some(Role::Staff));
    }

    #[test]
    fn test_permissions_for_none_is_empty() {
        assert!(permissions_for(None).is_empty());
    }

    #[test]
    fn test_has_permission_fail_closed() {
        assert!(!has_permission(None, Permission::ViewMedicines));
    }

    #[test]
    fn test_has_any_empty_list_is_false() {
        for role in [None, Some(Role::Admin), Some(Role::Pharmacist), Some(Role::Staff)] {
            assert!(!has_any(role, &[]));
        }
    }

    #[test]
    fn test_has_all_empty_list_is_true() {
        for role in [None, Some(Role::Admin), Some(Role::Pharmacist), Some(Role::Staff)] {
            assert!(has_all(role, &[]));
        }
    }

    #[test]
    fn test_has_any_is_logical_or() {
        assert!(has_any(
            Some(Role::Staff),
            &[Permission::DeleteMedicines, Permission::ViewReports]
        ));
        assert!(!has_any(
            Some(Role::Staff),
            &[Permission::DeleteMedicines, Permission::Sell]
        ));
    }

    #[test]
    fn test_has_all_is_logical_and() {
        assert!(has_all(
            Some(Role::Pharmacist),
            &[Permission::Sell, Permission::ViewReports]
        ));
        assert!(!has_all(
            Some(Role::Pharmacist),
            &[Permission::Sell, Permission::UserSettings]
        ));
    }
}
