//! Dashboard component modules
//!
//! Contains all individual rendering components

pub mod activity;
pub mod assets;
pub mod footer;
pub mod goals;
pub mod header;
pub mod income;
pub mod insights;
pub mod overview;
