//! 查询构建层错误类型
//!
//! 涵盖节点类型描述、路径链构建和谓词注册过程中的错误。
//! 这些错误都在构建时立即返回，不会延迟到查询渲染阶段。

use thiserror::Error;

/// 查询构建结果类型别名
pub type QueryResult<T> = Result<T, QueryError>;

/// 查询构建层错误类型
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum QueryError {
    #[error("路径链不能为空: 至少需要一个节点类型")]
    EmptyChain,

    #[error("无效的节点类型描述: {0}")]
    InvalidDescriptor(String),

    #[error("节点位置越界: {slot} (路径链长度 {chain_length})")]
    NodeSlotOutOfRange { slot: usize, chain_length: usize },

    #[error("参数名 `{0}` 被保留给自动生成的参数位置")]
    ReservedParameterName(String),
}

impl QueryError {
    pub fn invalid_descriptor(message: impl Into<String>) -> Self {
        QueryError::InvalidDescriptor(message.into())
    }
}
