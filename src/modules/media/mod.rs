mod profile;
mod routes;

pub use profile::Media;
pub use routes::get_router;
