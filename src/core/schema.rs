//! 消息模型定义
//!
//! 每种消息类型显式注册自己的标签、主键、属性和关系，
//! 子类型通过 [`ModelSchema::extend`] 继承父类型的定义再追加或覆盖。

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::core::error::QueryResult;
use crate::core::types::{NodeTypeDescriptor, PrimaryKey};
use crate::core::value::Value;

/// 关系方向（相对于本类型节点）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Outgoing,
    Incoming,
}

/// 关系定义
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelationshipDef {
    pub name: String,
    pub rel_type: String,
    pub direction: Direction,
    pub target_label: String,
}

impl RelationshipDef {
    pub fn new(
        name: impl Into<String>,
        rel_type: impl Into<String>,
        direction: Direction,
        target_label: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            rel_type: rel_type.into(),
            direction,
            target_label: target_label.into(),
        }
    }
}

/// 消息类型的模型定义
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelSchema {
    pub label: String,
    pub primary_key: PrimaryKey,
    pub properties: Vec<String>,
    pub relationships: Vec<RelationshipDef>,
}

impl ModelSchema {
    /// 新建模型，主键默认为内部标识
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            primary_key: PrimaryKey::Identity,
            properties: Vec::new(),
            relationships: Vec::new(),
        }
    }

    /// 以父模型为基础派生子模型
    pub fn extend(parent: &ModelSchema) -> Self {
        parent.clone()
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    pub fn with_primary_key(mut self, primary_key: PrimaryKey) -> Self {
        self.primary_key = primary_key;
        self
    }

    /// 注册属性，重复注册会被忽略
    pub fn with_property(mut self, name: impl Into<String>) -> Self {
        let name = name.into();
        if !self.properties.contains(&name) {
            self.properties.push(name);
        }
        self
    }

    pub fn with_properties<I, S>(self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        names.into_iter().fold(self, |schema, name| schema.with_property(name))
    }

    /// 注册关系，同名关系会被覆盖
    pub fn with_relationship(mut self, relationship: RelationshipDef) -> Self {
        self.relationships.retain(|r| r.name != relationship.name);
        self.relationships.push(relationship);
        self
    }

    pub fn has_property(&self, name: &str) -> bool {
        self.properties.iter().any(|p| p == name)
    }

    pub fn relationship(&self, name: &str) -> Option<&RelationshipDef> {
        self.relationships.iter().find(|r| r.name == name)
    }

    /// 主键属性名，内部标识主键返回 `None`
    pub fn primary_key_name(&self) -> Option<&str> {
        match &self.primary_key {
            PrimaryKey::Property(name) => Some(name),
            PrimaryKey::Identity => None,
        }
    }

    /// 生成路径查询使用的节点类型描述符
    pub fn descriptor(&self) -> QueryResult<NodeTypeDescriptor> {
        NodeTypeDescriptor::new(self.label.clone(), self.primary_key.clone())
    }

    /// 只保留已注册的属性，未知键被丢弃
    pub fn select_properties(&self, properties: &BTreeMap<String, Value>) -> BTreeMap<String, Value> {
        properties
            .iter()
            .filter(|(key, _)| self.has_property(key))
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect()
    }
}

pub const REPLY: &str = "REPLY";

/// 所有消息类型的基础模型
pub fn status() -> ModelSchema {
    ModelSchema::new("Status")
        .with_property("text")
        .with_relationship(RelationshipDef::new(
            "in_reply_to_statuses",
            REPLY,
            Direction::Outgoing,
            "Status",
        ))
        .with_relationship(RelationshipDef::new(
            "in_reply_from_statuses",
            REPLY,
            Direction::Incoming,
            "Status",
        ))
}

/// 普通聊天消息
pub fn ordinary_status() -> ModelSchema {
    ModelSchema::extend(&status())
        .with_primary_key(PrimaryKey::property("status_id"))
        .with_properties(["status_id", "user_name", "date"])
}

/// 从 Twitter API 载荷扁平化而来的推文
pub fn simple_tweet_status() -> ModelSchema {
    ModelSchema::extend(&status())
        .with_label("TweetStatus")
        .with_primary_key(PrimaryKey::property("id_str"))
        .with_properties(["id_str", "in_reply_to_status_id_str", "created_at"])
}
