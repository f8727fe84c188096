//! API handlers

pub mod auth;
pub mod catalog;
pub mod files;
pub mod health;
