use crate::core::serializer::Serializer;
use crate::core::{ApiResponse, Outcome, OutputFormat, Storage};
use crate::utils::error::{ClientError, Result};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Turns a completed response into stdout output, a saved file, or a `RemoteFailure`.
pub struct ResponseHandler<S: Storage> {
    serializer: Serializer<S>,
}

impl<S: Storage> ResponseHandler<S> {
    pub fn new(storage: S) -> Self {
        Self {
            serializer: Serializer::new(storage),
        }
    }

    pub async fn handle<W: Write>(
        &self,
        response: &ApiResponse,
        output: Option<&str>,
        out: &mut W,
    ) -> Result<Outcome> {
        writeln!(out, "HTTP Status Code: {}", response.status)?;

        if !response.is_success() {
            tracing::debug!("Non-2xx status {}, reporting raw body", response.status);
            writeln!(out, "Error: {}", response.body)?;
            return Err(ClientError::RemoteFailure {
                status: response.status,
                body: response.body.clone(),
            });
        }

        match output {
            Some(path) => {
                let format = OutputFormat::from_path(Path::new(path))?;
                let body = response.json()?;
                let saved = self.serializer.save(&body, path, format).await?;
                tracing::info!("Response saved to {} ({:?})", saved, format);
                Ok(Outcome::Saved {
                    path: PathBuf::from(saved),
                    format,
                })
            }
            None => {
                let body = response.json()?;
                writeln!(out, "{}", serde_json::to_string_pretty(&body)?)?;
                Ok(Outcome::Printed(body))
            }
        }
    }
}
