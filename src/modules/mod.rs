pub mod document;
pub mod functions;
pub mod media;
pub mod upload;

mod router;
pub use router::{get_router, health_check};
