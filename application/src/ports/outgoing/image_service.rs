use std::sync::Arc;

use crate::error::AppResult;
use crate::ports::outgoing::progress::DynProgressSinkPort;
use domain::endpoint::HttpMethod;
use domain::result::ApiOutcome;

/// Binary file part of a multipart submission. Always re-read from disk at
/// submit time, independently of any preview.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilePart {
    pub field_name: String,
    pub file_name: String,
    pub mime: String,
    pub bytes: Vec<u8>,
}

/// One serialized request against the remote service: the endpoint path
/// segment, the HTTP method, and the multipart parts in form order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiRequest {
    pub endpoint: String,
    pub method: HttpMethod,
    pub text_parts: Vec<(String, String)>,
    pub file_part: Option<FilePart>,
}

#[async_trait::async_trait]
pub trait ImageServicePort: Send + Sync {
    /// Sends the request, driving `progress` while the body is transmitted.
    /// 2xx responses become an [`ApiOutcome`]; anything else is an error
    /// carrying whatever status text the server provided.
    async fn submit(
        &self,
        request: ApiRequest,
        progress: DynProgressSinkPort,
    ) -> AppResult<ApiOutcome>;
}

pub type DynImageServicePort = Arc<dyn ImageServicePort>;
