//! Common types used across the application.

pub mod id;

pub use id::UserId;
