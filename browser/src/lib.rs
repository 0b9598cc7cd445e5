//! Job Listings Browser
//!
//! Loads the remote job listing document once at startup and serves a
//! master/detail page over it: a searchable list on the left, the selected
//! job or a per-company summary on the right.

pub mod config;
pub mod error;
pub mod routes;
pub mod state;
pub mod views;

pub use routes::router;
pub use state::{AppState, LoadState, Session};
