pub mod cli;
pub mod error;
pub mod logger;
pub mod routes;
pub mod server;


pub use crate::cli::Cli;
pub use crate::error::{Result as ServerErrorResult, ServerError};
pub use crate::routes::build_router;
pub use crate::server::Server;
