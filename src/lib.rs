//! HTTP backend for the HPCL lead intelligence agent.
//!
//! Serves the auth, tender, website and lead API subtrees, a health check,
//! and in production the pre-built single-page frontend. Runs either as a
//! long-lived listener or inside a serverless function runtime.

pub mod config;
pub mod db;
pub mod error;
pub mod middleware;
pub mod routes;
pub mod server;
pub mod state;
