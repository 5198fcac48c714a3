mod env;
mod global_state;
mod response;
mod routes;
mod utils;

pub use routes::{banner_routes, gacha_routes, misc_routes};

pub use env::{ApiServerEnv, CatalogBackend};
pub use global_state::GlobalState;
pub use utils::setup_tracing;
pub use response::{AppError, AppSuccess};
