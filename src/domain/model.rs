use crate::utils::error::{ClientError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Fixed origin every endpoint fragment is appended to.
pub const BASE_URL: &str = "https://jsonplaceholder.typicode.com";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum Method {
    Get,
    Post,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "get",
            Method::Post => "post",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Method {
    type Err = ClientError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "get" => Ok(Method::Get),
            "post" => Ok(Method::Post),
            _ => Err(ClientError::UnsupportedMethod {
                method: s.to_string(),
            }),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestDescriptor {
    pub method: Method,
    pub endpoint: String,
    pub data: Option<String>,
}

impl RequestDescriptor {
    pub fn new(method: Method, endpoint: impl Into<String>, data: Option<String>) -> Self {
        Self {
            method,
            endpoint: endpoint.into(),
            data,
        }
    }

    /// The fragment is appended verbatim, no slash normalisation.
    pub fn url(&self, base_url: &str) -> String {
        format!("{}{}", base_url, self.endpoint)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: String,
}

impl ApiResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        self.status / 100 == 2
    }

    pub fn json(&self) -> Result<serde_json::Value> {
        Ok(serde_json::from_str(&self.body)?)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Json,
    Csv,
}

impl OutputFormat {
    /// 依副檔名判斷輸出格式，僅支援 .json 與 .csv
    pub fn from_path(path: &Path) -> Result<Self> {
        let name = path.to_string_lossy();
        if name.ends_with(".json") {
            Ok(OutputFormat::Json)
        } else if name.ends_with(".csv") {
            Ok(OutputFormat::Csv)
        } else {
            Err(ClientError::UnsupportedOutputFormat {
                path: name.into_owned(),
            })
        }
    }
}

/// What a successful run ended with.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Printed(serde_json::Value),
    Saved { path: PathBuf, format: OutputFormat },
}
