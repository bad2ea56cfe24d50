pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use config::cli::LocalStorage;
pub use core::{client::RestfulClient, dispatcher::RequestDispatcher};
pub use domain::model::{ApiResponse, Method, Outcome, OutputFormat, RequestDescriptor, BASE_URL};
pub use utils::error::{ClientError, Result};
