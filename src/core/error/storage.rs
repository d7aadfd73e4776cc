//! 存储层错误类型
//!
//! 涵盖图存储句柄执行查询和解析返回记录时的错误

use thiserror::Error;

/// 存储层结果类型
pub type StorageResult<T> = Result<T, StorageError>;

/// 存储层错误类型
#[derive(Error, Debug, Clone, PartialEq)]
pub enum StorageError {
    #[error("连接错误: {0}")]
    ConnectionError(String),

    #[error("执行错误: {0}")]
    ExecutionError(String),

    #[error("记录格式错误: 期望 {expected} 个节点, 实际 {actual} 个 (第 {row} 行)")]
    MalformedRecord {
        row: usize,
        expected: usize,
        actual: usize,
    },

    #[error("非预期的返回值: {0}")]
    UnexpectedValue(String),
}

impl StorageError {
    /// 是否值得由调用方重试
    ///
    /// 核心层本身从不重试，重试策略属于存储句柄
    pub fn is_retryable(&self) -> bool {
        matches!(self, StorageError::ConnectionError(_))
    }
}

impl From<String> for StorageError {
    fn from(s: String) -> Self {
        StorageError::ExecutionError(s)
    }
}

impl From<&str> for StorageError {
    fn from(s: &str) -> Self {
        StorageError::ExecutionError(s.to_string())
    }
}
