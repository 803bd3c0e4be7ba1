//! Core business logic for Darou.
//!
//! This crate contains pure business logic with ZERO web or database dependencies.
//! All domain types, validation rules, and calculations live here.
//!
//! # Modules
//!
//! - `authz` - Role derivation, permission sets, route access, menu filtering
//! - `calendar` - Jalali (Persian) calendar conversion and validation

pub mod authz;
pub mod calendar;
