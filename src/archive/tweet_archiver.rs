//! 推文归档
//!
//! 写入一条消息，并把它连到所回复的消息上。
//! 被回复的消息不存在时，先创建只带主键的占位节点。

use std::sync::Arc;

use crate::config::QueryConfig;
use crate::core::error::{ChatDBError, ChatDBResult};
use crate::core::{ModelSchema, Node, Parameters, Value};
use crate::query::PathMatcher;
use crate::storage::GraphStore;
use crate::utils::{escape_identifier, flatten_object};

/// 回复所指向的属性
pub const IN_REPLY_TO: &str = "in_reply_to_status_id_str";

/// 父消息的连接方式
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParentLink {
    /// 不是回复
    None,
    /// 连接到已存在的节点（内部标识）
    Existing(i64),
    /// 父消息尚未归档，创建了占位节点
    Placeholder(String),
}

/// 推文归档器
#[derive(Debug, Clone)]
pub struct TweetArchiver {
    matcher: PathMatcher,
    schema: ModelSchema,
    relationship: String,
}

impl TweetArchiver {
    pub fn new(graph: Arc<dyn GraphStore>, schema: ModelSchema, config: &QueryConfig) -> Self {
        Self {
            matcher: PathMatcher::with_config(graph, config),
            schema,
            relationship: config.reply_relationship.clone(),
        }
    }

    pub fn schema(&self) -> &ModelSchema {
        &self.schema
    }

    /// 按主键查找已归档的消息
    pub fn find_status(&self, primary_value: impl Into<Value>) -> ChatDBResult<Option<Node>> {
        let builder = self
            .matcher
            .match_path(vec![self.schema.descriptor()?], Some(primary_value.into()))?;
        Ok(builder
            .first()?
            .and_then(|record| record.nodes().first().map(|node| (*node).clone())))
    }

    /// 归档一条消息
    ///
    /// `payload` 可以是嵌套对象，嵌套键以 `_` 连接后再按模型属性筛选
    pub fn add_status(&self, payload: &serde_json::Value) -> ChatDBResult<ParentLink> {
        let object = payload
            .as_object()
            .ok_or_else(|| ChatDBError::InvalidInput("消息必须是 JSON 对象".to_string()))?;
        let properties = self.schema.select_properties(&flatten_object(object, "_"));

        let key_name = self.schema.primary_key_name().ok_or_else(|| {
            ChatDBError::InvalidInput(format!(
                "模型 `{}` 没有属性主键, 无法归档",
                self.schema.label
            ))
        })?;
        let key = match properties.get(key_name) {
            Some(value) if !value.is_null() => value.clone(),
            _ => {
                return Err(ChatDBError::InvalidInput(format!(
                    "消息缺少主键 `{}`",
                    key_name
                )))
            }
        };

        let parent_key = properties
            .get(IN_REPLY_TO)
            .map(Value::to_text)
            .filter(|id| !id.is_empty());
        let parent = match &parent_key {
            Some(id) => self.find_status(id.as_str())?,
            None => None,
        };

        self.merge_status(key_name, &key, properties.clone())?;

        let link = match (parent_key, parent) {
            (None, _) => ParentLink::None,
            (Some(_), Some(node)) => {
                self.link_existing(key_name, &key, node.identity())?;
                ParentLink::Existing(node.identity())
            }
            (Some(id), None) => {
                self.link_placeholder(key_name, &key, &id)?;
                ParentLink::Placeholder(id)
            }
        };

        log::info!("归档消息 {} ({:?})", key.to_text(), link);
        Ok(link)
    }

    fn node_pattern(&self, alias: &str, key_name: &str, parameter: &str) -> String {
        format!(
            "({}:{} {{{}: ${}}})",
            alias,
            escape_identifier(&self.schema.label),
            escape_identifier(key_name),
            parameter
        )
    }

    fn merge_status(
        &self,
        key_name: &str,
        key: &Value,
        properties: Parameters,
    ) -> ChatDBResult<()> {
        let query = format!(
            "MERGE {} SET s += $properties",
            self.node_pattern("s", key_name, "key")
        );
        let mut parameters = Parameters::new();
        parameters.insert("key".to_string(), key.clone());
        parameters.insert("properties".to_string(), Value::Map(properties));
        self.matcher.graph().run(&query, &parameters)?;
        Ok(())
    }

    fn link_existing(&self, key_name: &str, key: &Value, parent_identity: i64) -> ChatDBResult<()> {
        let query = format!(
            "MATCH {}, (p) WHERE id(p) = $parent MERGE (s)-[:{}]->(p)",
            self.node_pattern("s", key_name, "key"),
            escape_identifier(&self.relationship)
        );
        let mut parameters = Parameters::new();
        parameters.insert("key".to_string(), key.clone());
        parameters.insert("parent".to_string(), Value::Int(parent_identity));
        self.matcher.graph().run(&query, &parameters)?;
        Ok(())
    }

    fn link_placeholder(&self, key_name: &str, key: &Value, parent_key: &str) -> ChatDBResult<()> {
        let query = format!(
            "MATCH {} MERGE {} MERGE (s)-[:{}]->(p)",
            self.node_pattern("s", key_name, "key"),
            self.node_pattern("p", key_name, "parent"),
            escape_identifier(&self.relationship)
        );
        let mut parameters = Parameters::new();
        parameters.insert("key".to_string(), key.clone());
        parameters.insert("parent".to_string(), Value::from(parent_key));
        self.matcher.graph().run(&query, &parameters)?;
        Ok(())
    }
}
