//! 进程内记录型存储
//!
//! 不解析 Cypher：按顺序返回预先排队的响应，并记录每次执行的查询和参数。
//! 用于测试以及在没有真实图数据库时预演查询。

use parking_lot::Mutex;
use std::collections::VecDeque;

use crate::core::{Parameters, Record, StorageError, StorageResult};
use crate::storage::GraphStore;

/// 一次已执行的查询
#[derive(Debug, Clone, PartialEq)]
pub struct ExecutedQuery {
    pub query: String,
    pub parameters: Parameters,
}

/// 记录型内存存储
#[derive(Debug, Default)]
pub struct RecordingGraphStore {
    responses: Mutex<VecDeque<StorageResult<Vec<Record>>>>,
    executed: Mutex<Vec<ExecutedQuery>>,
}

impl RecordingGraphStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// 排队一个成功响应
    pub fn push_records(&self, records: Vec<Record>) {
        self.responses.lock().push_back(Ok(records));
    }

    /// 排队一个失败响应
    pub fn push_error(&self, error: StorageError) {
        self.responses.lock().push_back(Err(error));
    }

    /// 已执行的查询，按执行顺序
    pub fn executed(&self) -> Vec<ExecutedQuery> {
        self.executed.lock().clone()
    }

    pub fn last_executed(&self) -> Option<ExecutedQuery> {
        self.executed.lock().last().cloned()
    }

    pub fn pending_responses(&self) -> usize {
        self.responses.lock().len()
    }
}

impl GraphStore for RecordingGraphStore {
    fn run(&self, query: &str, parameters: &Parameters) -> StorageResult<Vec<Record>> {
        self.executed.lock().push(ExecutedQuery {
            query: query.to_string(),
            parameters: parameters.clone(),
        });
        // 队列为空时返回空结果
        self.responses.lock().pop_front().unwrap_or_else(|| Ok(Vec::new()))
    }
}
