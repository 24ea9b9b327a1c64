pub mod cli;
pub mod error;
pub mod health;
pub mod logger;
pub mod routes;
pub mod shutdown;


pub use crate::cli::Cli;
pub use crate::routes::build_router;
