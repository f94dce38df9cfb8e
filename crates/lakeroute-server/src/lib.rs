//! Shared library surface for the route server and its tests.

pub mod api;
pub mod cache;
pub mod config;
pub mod route_service;
pub mod sources;
pub mod state;
