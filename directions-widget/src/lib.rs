//! Directions widget server.
//!
//! Keeps the origin/destination inputs and the turn-by-turn instructions of
//! a directions widget in sync with a shared state snapshot, and serves the
//! rendered panels and route lookups over HTTP.

pub mod config;
pub mod controls;
pub mod domain;
pub mod routing;
pub mod state;
pub mod view;
pub mod web;
