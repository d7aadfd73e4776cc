//! 集成测试共享工具模块
//!
//! 提供测试基础设施和辅助函数，供所有集成测试使用

#![allow(dead_code)]

pub mod assertions;
pub mod data_fixtures;

use std::sync::Arc;

use chatdb::core::schema::simple_tweet_status;
use chatdb::core::{NodeTypeDescriptor, Record};
use chatdb::query::PathMatcher;
use chatdb::storage::{GraphStore, RecordingGraphStore};

/// 测试上下文：记录型存储 + 基于它的匹配器
pub struct TestContext {
    pub store: Arc<RecordingGraphStore>,
    pub matcher: PathMatcher,
}

impl TestContext {
    pub fn new() -> Self {
        let store = Arc::new(RecordingGraphStore::new());
        let graph: Arc<dyn GraphStore> = store.clone();
        Self {
            store,
            matcher: PathMatcher::new(graph),
        }
    }

    /// 预置下一次查询的返回记录
    pub fn respond_with(&self, records: Vec<Record>) -> &Self {
        self.store.push_records(records);
        self
    }
}

/// `n` 个推文节点类型组成的路径链
pub fn tweet_chain(n: usize) -> Vec<NodeTypeDescriptor> {
    let descriptor = simple_tweet_status()
        .descriptor()
        .expect("推文模型描述符应有效");
    vec![descriptor; n]
}
