use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::core::node_path::{Node, Path, Relationship};

/// 表示可以绑定为查询参数、存储在节点属性中或出现在结果记录里的值
///
/// 序列化时不带标签，`Value::String("a")` 序列化为 `"a"`，
/// 便于直接作为参数映射交给图存储驱动
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    String(String),
    List(Vec<Value>),
    Node(Box<Node>),
    Relationship(Box<Relationship>),
    Path(Path),
    Map(BTreeMap<String, Value>),
}

/// 查询参数映射，按参数名排序保证渲染结果确定
pub type Parameters = BTreeMap<String, Value>;

/// Value类型定义枚举
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueTypeDef {
    Null,
    Bool,
    Int,
    Float,
    String,
    List,
    Node,
    Relationship,
    Path,
    Map,
}

impl Value {
    /// 获取值的类型
    pub fn get_type(&self) -> ValueTypeDef {
        match self {
            Value::Null => ValueTypeDef::Null,
            Value::Bool(_) => ValueTypeDef::Bool,
            Value::Int(_) => ValueTypeDef::Int,
            Value::Float(_) => ValueTypeDef::Float,
            Value::String(_) => ValueTypeDef::String,
            Value::List(_) => ValueTypeDef::List,
            Value::Node(_) => ValueTypeDef::Node,
            Value::Relationship(_) => ValueTypeDef::Relationship,
            Value::Path(_) => ValueTypeDef::Path,
            Value::Map(_) => ValueTypeDef::Map,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(i) => Some(*i),
            _ => None,
        }
    }

    pub fn as_node(&self) -> Option<&Node> {
        match self {
            Value::Node(node) => Some(node),
            _ => None,
        }
    }

    /// 以导出文本的形式渲染值
    ///
    /// 字符串不加引号，空值渲染为空字符串，其余与 `Display` 一致
    pub fn to_text(&self) -> String {
        match self {
            Value::Null => String::new(),
            Value::String(s) => s.clone(),
            other => other.to_string(),
        }
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Value::Null => write!(f, "NULL"),
            Value::Bool(b) => write!(f, "{}", b),
            Value::Int(i) => write!(f, "{}", i),
            Value::Float(fl) => write!(f, "{}", fl),
            Value::String(s) => write!(f, "\"{}\"", s),
            Value::Node(n) => write!(f, "Node({})", n.identity()),
            Value::Relationship(r) => write!(f, "Relationship({} -> {})", r.start, r.end),
            Value::Path(p) => write!(f, "Path(len={})", p.len()),
            Value::List(list) => {
                write!(f, "[")?;
                for (i, item) in list.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", item)?;
                }
                write!(f, "]")
            }
            Value::Map(map) => {
                write!(f, "{{")?;
                for (i, (k, v)) in map.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}: {}", k, v)?;
                }
                write!(f, "}}")
            }
        }
    }
}
