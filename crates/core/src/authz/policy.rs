//! Route access rules.

use darou_shared::config::{AuthorizationConfig, UnknownRoutePolicy};

use super::service::has_any;
use super::types::{Permission, Role, Route};

/// Returns the permissions required to access a route.
///
/// An empty slice means the route is unrestricted for authenticated users.
/// Access is granted when the role holds ANY of the listed permissions.
#[must_use]
pub const fn required_permissions(route: Route) -> &'static [Permission] {
    match route {
        Route::MedicinesList | Route::MedicineDetail => &[Permission::ViewMedicines],
        Route::AddMedicine => &[Permission::AddMedicines],
        Route::EditMedicine => &[Permission::EditMedicines],
        Route::StockAdjustment | Route::DrugAdjustments | Route::Factors | Route::Invoices => {
            &[Permission::StockAdjustment]
        }
        Route::Sell => &[Permission::Sell],
        Route::TtacDrugsUpload => &[Permission::TtacDrugsUpload],
        Route::Reporting => &[Permission::ViewReports],
        Route::FinancialSettings => &[Permission::FinancialSettings],
        Route::ManagementSettings => &[Permission::ManagementSettings],
        Route::UserSettings => &[Permission::UserSettings],
        Route::Home | Route::Layout => &[],
    }
}

/// Evaluates route access for the navigation guard.
///
/// Registered routes always carry an explicit requirement through
/// [`required_permissions`]; the configurable part is only what happens to
/// route names that never registered a rule.
#[derive(Debug, Clone, Copy, Default)]
pub struct RouteAccessPolicy {
    unknown_route_policy: UnknownRoutePolicy,
}

impl RouteAccessPolicy {
    /// Creates a policy with the given unknown-route behavior.
    #[must_use]
    pub const fn new(unknown_route_policy: UnknownRoutePolicy) -> Self {
        Self {
            unknown_route_policy,
        }
    }

    /// Creates a policy from the loaded authorization configuration.
    #[must_use]
    pub const fn from_config(config: &AuthorizationConfig) -> Self {
        Self::new(config.unknown_route_policy)
    }

    /// Returns true if the role may access the route.
    ///
    /// Routes with an empty requirement are unconditionally granted;
    /// otherwise the role must hold any of the required permissions.
    #[must_use]
    pub fn can_access(self, role: Option<Role>, route: Route) -> bool {
        let required = required_permissions(route);
        if required.is_empty() {
            return true;
        }
        has_any(role, required)
    }

    /// Evaluates access for a route name as produced by the router.
    ///
    /// Names that do not parse to a registered [`Route`] fall back to the
    /// configured unknown-route policy.
    #[must_use]
    pub fn can_access_named(self, role: Option<Role>, route_name: &str) -> bool {
        match route_name.parse::<Route>() {
            Ok(route) => self.can_access(role, route),
            Err(_) => {
                tracing::warn!(
                    route = route_name,
                    policy = ?self.unknown_route_policy,
                    "route has no registered access rule"
                );
                self.unknown_route_policy == UnknownRoutePolicy::Allow
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unrestricted_routes_allow_everyone() {
        let policy = RouteAccessPolicy::default();
        assert!(policy.can_access(None, Route::Home));
        assert!(policy.can_access(Some(Role::Staff), Route::Layout));
    }

    #[test]
    fn test_restricted_route_fails_without_role() {
        let policy = RouteAccessPolicy::default();
        assert!(!policy.can_access(None, Route::MedicinesList));
    }

    #[test]
    fn test_unknown_route_default_allow() {
        let policy = RouteAccessPolicy::default();
        assert!(policy.can_access_named(Some(Role::Staff), "BrandNewScreen"));
    }

    #[test]
    fn test_unknown_route_deny() {
        let policy = RouteAccessPolicy::new(UnknownRoutePolicy::Deny);
        assert!(!policy.can_access_named(Some(Role::Admin), "BrandNewScreen"));
        // Registered routes are unaffected by the fallback.
        assert!(policy.can_access_named(Some(Role::Admin), "MedicinesList"));
    }
}
