mod profile;
mod routes;

pub use profile::Document;
pub use routes::get_router;
