use serde::Serialize;

/// Body of every response: `{success, message?, error?}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApiResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<&'static str>,
}

impl ApiResponse {
    pub fn success(message: &'static str) -> Self {
        Self {
            success: true,
            message: Some(message),
            error: None,
        }
    }

    pub fn error(error: &'static str) -> Self {
        Self {
            success: false,
            message: None,
            error: Some(error),
        }
    }
}
