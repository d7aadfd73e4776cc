//! 路径匹配入口
//!
//! 按主键查找回复链是最常见的用法，`PathMatcher::match_path` 为此提供捷径：
//! 传入主键值时，构建器已经带上第一个节点的主键等值谓词。

use std::sync::Arc;

use crate::config::QueryConfig;
use crate::core::error::QueryResult;
use crate::core::{NodeTypeDescriptor, PrimaryKey, Value};
use crate::query::path_query::PathQueryBuilder;
use crate::query::predicate::Predicate;
use crate::storage::GraphStore;

/// 路径查询构建器工厂
#[derive(Debug, Clone)]
pub struct PathMatcher {
    graph: Arc<dyn GraphStore>,
    relationship: String,
}

impl PathMatcher {
    /// 使用默认的 `REPLY` 关系
    pub fn new(graph: Arc<dyn GraphStore>) -> Self {
        Self::with_config(graph, &QueryConfig::default())
    }

    pub fn with_config(graph: Arc<dyn GraphStore>, config: &QueryConfig) -> Self {
        Self {
            graph,
            relationship: config.reply_relationship.clone(),
        }
    }

    pub fn graph(&self) -> &Arc<dyn GraphStore> {
        &self.graph
    }

    /// 创建路径查询构建器
    ///
    /// # Arguments
    /// * `descriptors` - 路径链上各位置的节点类型，至少一个
    /// * `primary_value` - 第一个节点的主键值；内部标识主键按 `id(s0)` 匹配，
    ///   `Value::Null` 与 `None` 相同，不添加谓词
    pub fn match_path(
        &self,
        descriptors: Vec<NodeTypeDescriptor>,
        primary_value: Option<Value>,
    ) -> QueryResult<PathQueryBuilder> {
        let builder =
            PathQueryBuilder::new(self.graph.clone(), descriptors, self.relationship.clone())?;

        let Some(value) = primary_value.filter(|v| !v.is_null()) else {
            return Ok(builder);
        };

        let predicate = Predicate::equal_to(value);
        match builder.descriptors()[0].primary_key().clone() {
            PrimaryKey::Identity => builder.filter_identity(0, predicate),
            PrimaryKey::Property(key) => builder.filter_at(0, key, predicate),
        }
    }
}
