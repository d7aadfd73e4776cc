//! 节点类型描述
//!
//! 路径链中每个位置对应一个节点类型：标签加主键。
//! 主键可以是具名属性，也可以是存储内部的节点标识。

use serde::{Deserialize, Serialize};

use crate::core::error::{QueryError, QueryResult};

/// 节点主键
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PrimaryKey {
    /// 按具名属性匹配
    Property(String),
    /// 按存储内部标识匹配，渲染为 `id(sN)`
    Identity,
}

impl PrimaryKey {
    pub fn property(name: impl Into<String>) -> Self {
        PrimaryKey::Property(name.into())
    }

    pub fn is_identity(&self) -> bool {
        matches!(self, PrimaryKey::Identity)
    }
}

/// 节点类型描述符，只读
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NodeTypeDescriptor {
    label: String,
    primary_key: PrimaryKey,
}

impl NodeTypeDescriptor {
    /// 创建描述符
    ///
    /// 标签为空、属性主键名为空时立即失败
    pub fn new(label: impl Into<String>, primary_key: PrimaryKey) -> QueryResult<Self> {
        let label = label.into();
        if label.trim().is_empty() {
            return Err(QueryError::invalid_descriptor("标签不能为空"));
        }
        if let PrimaryKey::Property(name) = &primary_key {
            if name.trim().is_empty() {
                return Err(QueryError::invalid_descriptor(format!(
                    "标签 `{}` 的主键属性名不能为空",
                    label
                )));
            }
        }
        Ok(Self { label, primary_key })
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn primary_key(&self) -> &PrimaryKey {
        &self.primary_key
    }
}
