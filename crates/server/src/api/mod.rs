pub mod handlers;
pub mod middleware;
pub mod redirect;
pub mod routes;

pub use routes::create_router;
