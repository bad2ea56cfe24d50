use crate::domain::model::{ApiResponse, Method, RequestDescriptor};
use crate::utils::error::Result;
use async_trait::async_trait;

pub trait Storage: Send + Sync {
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<String>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn method(&self) -> Method;
    fn endpoint(&self) -> &str;
    fn data(&self) -> Option<&str>;
    fn output(&self) -> Option<&str>;

    fn request(&self) -> RequestDescriptor {
        RequestDescriptor::new(
            self.method(),
            self.endpoint(),
            self.data().filter(|d| !d.is_empty()).map(str::to_string),
        )
    }
}

#[async_trait]
pub trait Dispatch: Send + Sync {
    async fn dispatch(&self, request: &RequestDescriptor) -> Result<ApiResponse>;
}
