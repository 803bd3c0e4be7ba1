//! Role-based authorization.
//!
//! This module implements the role-permission engine:
//! - Role derivation from the authenticated user record
//! - Fixed role-to-permission tables
//! - Route access evaluation
//! - Menu tree filtering
//!
//! Everything here is a pure function over immutable lookup tables assembled
//! at startup. The role is always passed explicitly; nothing reaches into
//! ambient session state, so every check is unit-testable in isolation.

pub mod menu;
pub mod policy;
pub mod service;
pub mod types;


pub use menu::{MenuItem, default_menu, filter_menu};
pub use policy::RouteAccessPolicy;
pub use service::{derive_role, has_all, has_any, has_permission, permissions_for};
pub use types::{Permission, Role, Route};
