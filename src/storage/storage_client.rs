use std::sync::Arc;

use crate::core::{Parameters, Record, StorageError};

/// 图存储句柄
///
/// 核心层只需要执行参数化查询并拿到有序记录。
/// 重试、连接池等策略都属于实现方，核心层原样传播错误。
pub trait GraphStore: Send + Sync + std::fmt::Debug {
    /// 执行查询，返回按结果顺序排列的记录
    ///
    /// # Arguments
    /// * `query` - Cypher 查询文本
    /// * `parameters` - 参数名到绑定值的映射
    fn run(&self, query: &str, parameters: &Parameters) -> Result<Vec<Record>, StorageError>;
}

impl<T: GraphStore + ?Sized> GraphStore for Arc<T> {
    fn run(&self, query: &str, parameters: &Parameters) -> Result<Vec<Record>, StorageError> {
        (**self).run(query, parameters)
    }
}

impl<T: GraphStore + ?Sized> GraphStore for &T {
    fn run(&self, query: &str, parameters: &Parameters) -> Result<Vec<Record>, StorageError> {
        (**self).run(query, parameters)
    }
}
