//! In-memory job board core.
//!
//! The crate is split along the boundaries the service exposes: the listing
//! catalog (jobs, companies, applications), the session manager (identity,
//! saved jobs), the pure filter engine, and the navigation gate. The HTTP
//! facade in [`board::router`] is the only surface the view layer talks to.

pub mod board;
pub mod config;
pub mod error;
pub mod telemetry;
