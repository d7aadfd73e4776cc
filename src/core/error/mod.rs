//! 统一错误处理系统 for ChatDB
//!
//! ## 设计理念
//!
//! 1. **按层划分**：查询构建、存储执行、结果导出各有独立的错误枚举
//! 2. **分层转换**：各层错误通过 `#[from]` 汇总到 `ChatDBError`
//! 3. **统一接口**：`ChatDBResult<T>` 提供统一的返回类型，简化错误传播

use thiserror::Error;

pub mod export;
pub mod query;
pub mod storage;

pub use export::{ExportError, ExportResult};
pub use query::{QueryError, QueryResult};
pub use storage::{StorageError, StorageResult};

/// 统一的错误类型
#[derive(Error, Debug, Clone)]
pub enum ChatDBError {
    #[error("查询错误: {0}")]
    Query(#[from] QueryError),

    #[error("存储错误: {0}")]
    Storage(#[from] StorageError),

    #[error("导出错误: {0}")]
    Export(#[from] ExportError),

    #[error("无效输入: {0}")]
    InvalidInput(String),

    #[error("配置错误: {0}")]
    Config(String),

    #[error("IO错误: {0}")]
    Io(String),
}

/// 统一的结果类型
pub type ChatDBResult<T> = Result<T, ChatDBError>;

impl From<std::io::Error> for ChatDBError {
    fn from(err: std::io::Error) -> Self {
        ChatDBError::Io(err.to_string())
    }
}

impl From<toml::de::Error> for ChatDBError {
    fn from(err: toml::de::Error) -> Self {
        ChatDBError::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for ChatDBError {
    fn from(err: toml::ser::Error) -> Self {
        ChatDBError::Config(err.to_string())
    }
}
