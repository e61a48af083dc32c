//! # Web Request Handlers
//!
//! HTTP request handlers organized by service.

pub mod health;
pub mod hello;
pub mod tasks;
