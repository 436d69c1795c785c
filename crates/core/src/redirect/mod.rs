//! Redirect construction and the invocation handler.

mod handler;
mod types;

pub use handler::RedirectHandler;
pub use types::*;
