pub mod client;
pub mod dispatcher;
pub mod handler;
pub mod serializer;

pub use crate::domain::model::{ApiResponse, Method, Outcome, OutputFormat, RequestDescriptor};
pub use crate::domain::ports::{ConfigProvider, Dispatch, Storage};
pub use crate::utils::error::Result;
