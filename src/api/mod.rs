pub mod movies;
pub mod pages;
pub mod poster;
pub mod routes;

pub use routes::{create_router, protect, protected_router, public_router, AppState};
