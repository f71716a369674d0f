//! oms-errors - 统一错误处理

use thiserror::Error;

/// 应用错误类型
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn conflict(msg: impl Into<String>) -> Self {
        Self::Conflict(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }

    /// 转换为 HTTP 状态码
    pub fn status_code(&self) -> u16 {
        match self {
            Self::NotFound(_) => 404,
            Self::Validation(_) => 400,
            Self::Conflict(_) => 409,
            Self::Internal(_) => 500,
        }
    }

    /// 转换为 gRPC 状态码
    pub fn grpc_code(&self) -> tonic::Code {
        match self {
            Self::NotFound(_) => tonic::Code::NotFound,
            Self::Validation(_) => tonic::Code::InvalidArgument,
            Self::Conflict(_) => tonic::Code::AlreadyExists,
            Self::Internal(_) => tonic::Code::Internal,
        }
    }
}

impl From<AppError> for tonic::Status {
    fn from(err: AppError) -> Self {
        tonic::Status::new(err.grpc_code(), err.to_string())
    }
}

/// Result 类型别名
pub type AppResult<T> = Result<T, AppError>;
