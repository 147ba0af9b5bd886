// src/server/mod.rs

//! HTTP layer root module.
//!
//! This module organizes the HTTP surface of the service, including:
//! - Application state shared by the handlers
//! - Routing
//! - The match publishing endpoint
//! - The health endpoint
//! - JSON error responses

pub mod state;
pub mod router;
pub mod send;
pub mod health;
pub mod http_error;
