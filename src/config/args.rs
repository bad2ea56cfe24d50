use crate::core::{ConfigProvider, Method, OutputFormat};
use crate::domain::model::BASE_URL;
use crate::utils::error::Result;
use crate::utils::validation::{validate_json_document, validate_path, validate_url, Validate};
use clap::Parser;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "restful")]
#[command(about = "Simple command-line REST client for JSONPlaceholder.")]
pub struct CliConfig {
    #[arg(value_enum, help = "Request method")]
    pub method: Method,

    #[arg(help = "Request endpoint URI fragment")]
    pub endpoint: String,

    #[arg(short, long, help = "Data to send with request")]
    pub data: Option<String>,

    #[arg(
        short,
        long,
        help = "Output to .json or .csv file (default: dump to stdout)"
    )]
    pub output: Option<String>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit log lines as JSON")]
    pub log_json: bool,
}

impl ConfigProvider for CliConfig {
    fn method(&self) -> Method {
        self.method
    }

    fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn data(&self) -> Option<&str> {
        self.data.as_deref()
    }

    fn output(&self) -> Option<&str> {
        self.output.as_deref()
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_url("endpoint", &self.request().url(BASE_URL))?;

        // 空字串視同沒有 payload
        if let Some(data) = self.data.as_deref().filter(|d| !d.is_empty()) {
            if self.method == Method::Get {
                tracing::warn!("--data is ignored for get requests");
            } else {
                validate_json_document(data)?;
            }
        }

        // 在發出請求前先確認輸出格式
        if let Some(output) = &self.output {
            validate_path("output", output)?;
            OutputFormat::from_path(Path::new(output))?;
        }

        Ok(())
    }
}
