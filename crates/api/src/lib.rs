//! HTTP layer: configuration, routing, request extraction, auth, upload
//! storage, and the uniform response envelope.

pub mod auth;
pub mod config;
pub mod error;
pub mod extract;
pub mod handlers;
pub mod middleware;
pub mod response;
pub mod router;
pub mod routes;
pub mod state;
pub mod uploads;
