//! Shared types and configuration for Darou.
//!
//! This crate provides common types used across all other crates:
//! - Typed IDs for type-safe entity references
//! - The authenticated user record
//! - Configuration management

pub mod auth;
pub mod config;
pub mod types;

pub use auth::UserAccount;
pub use config::{AppConfig, AuthorizationConfig, UnknownRoutePolicy};
