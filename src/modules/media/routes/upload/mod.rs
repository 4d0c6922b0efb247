mod handler;
mod router;
mod service;

pub use router::get_router;
