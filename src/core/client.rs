use crate::core::handler::ResponseHandler;
use crate::core::{Dispatch, Outcome, RequestDescriptor, Storage};
use crate::utils::error::Result;
use std::io::Write;

/// One request, one response, one outcome.
pub struct RestfulClient<D: Dispatch, S: Storage> {
    dispatcher: D,
    handler: ResponseHandler<S>,
}

impl<D: Dispatch, S: Storage> RestfulClient<D, S> {
    pub fn new(dispatcher: D, storage: S) -> Self {
        Self {
            dispatcher,
            handler: ResponseHandler::new(storage),
        }
    }

    pub async fn run<W: Write>(
        &self,
        request: &RequestDescriptor,
        output: Option<&str>,
        out: &mut W,
    ) -> Result<Outcome> {
        tracing::info!("Requesting {} {}", request.method, request.endpoint);

        let response = self.dispatcher.dispatch(request).await?;
        tracing::info!("Received HTTP {}", response.status);

        self.handler.handle(&response, output, out).await
    }
}
