pub mod doh;
pub mod dto;
pub mod errors;
pub mod handlers;
pub mod routes;
pub mod state;

pub use routes::{create_doh_routes, DOH_PATH};
pub use state::AppState;
