//! Job board state model: listing catalog, session management, filtering, and
//! the navigation gate, plus the HTTP router that exposes them.

pub mod domain;
pub mod listings;
pub mod router;
pub mod session;

pub use domain::{
    Application, ApplicationId, Company, CompanyId, Identity, Job, JobId, JobType, NewApplication,
    NewJob, Role,
};
pub use router::{board_router, BoardState};
