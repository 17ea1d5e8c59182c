use thiserror::Error;

/// Failure of a call to the shop API.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Network(String),
    #[error("server responded with status {0}")]
    Status(u16),
    #[error("failed to decode response: {0}")]
    Decode(String),
}

impl ApiError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, ApiError::Status(404))
    }
}

impl From<gloo_net::Error> for ApiError {
    fn from(err: gloo_net::Error) -> Self {
        match err {
            gloo_net::Error::SerdeError(e) => ApiError::Decode(e.to_string()),
            other => ApiError::Network(other.to_string()),
        }
    }
}

/// Why the detail page cannot show an agency.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DetailError {
    #[error("missing query parameter `{0}`")]
    MissingParameter(&'static str),
    #[error("no agency matches the requested conditions")]
    NotFound,
    #[error("failed to load agency detail")]
    Failed,
}

impl DetailError {
    pub fn user_message(&self) -> &'static str {
        match self {
            DetailError::NotFound => "조건에 맞는 대리점이 없습니다.",
            DetailError::MissingParameter(_) | DetailError::Failed => {
                "대리점 상세정보를 불러오는 중 오류가 발생했습니다."
            }
        }
    }
}

impl From<&ApiError> for DetailError {
    fn from(err: &ApiError) -> Self {
        if err.is_not_found() {
            DetailError::NotFound
        } else {
            DetailError::Failed
        }
    }
}
