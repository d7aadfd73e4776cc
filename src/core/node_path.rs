use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::core::value::Value;

/// Represents a node returned by the graph store
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Node {
    pub identity: i64,      // Internal identity assigned by the store
    pub labels: Vec<String>,
    pub properties: BTreeMap<String, Value>,
}

impl Node {
    pub fn new(identity: i64, labels: Vec<String>) -> Self {
        Self {
            identity,
            labels,
            properties: BTreeMap::new(),
        }
    }

    pub fn new_with_properties(
        identity: i64,
        labels: Vec<String>,
        properties: BTreeMap<String, Value>,
    ) -> Self {
        Self {
            identity,
            labels,
            properties,
        }
    }

    /// Builder-style property setter, mostly for fixtures
    pub fn with_property(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.properties.insert(name.into(), value.into());
        self
    }

    /// Get node identity (store-internal id)
    pub fn identity(&self) -> i64 {
        self.identity
    }

    /// Check if node has a specific label
    pub fn has_label(&self, label: &str) -> bool {
        self.labels.iter().any(|l| l == label)
    }

    /// Get a property value by name
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.properties.get(name)
    }
}

/// Represents a relationship between two nodes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Relationship {
    pub identity: i64,
    pub rel_type: String,
    pub start: i64, // Identity of the start node
    pub end: i64,   // Identity of the end node
    pub properties: BTreeMap<String, Value>,
}

impl Relationship {
    pub fn new(identity: i64, rel_type: impl Into<String>, start: i64, end: i64) -> Self {
        Self {
            identity,
            rel_type: rel_type.into(),
            start,
            end,
            properties: BTreeMap::new(),
        }
    }
}

/// Represents a step in a path
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Step {
    pub relationship: Box<Relationship>,
    pub dst: Box<Node>,
}

/// Represents a path in the graph: a start node followed by zero or more steps
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Path {
    pub src: Box<Node>,
    pub steps: Vec<Step>,
}

impl Path {
    pub fn new(src: Node) -> Self {
        Self {
            src: Box::new(src),
            steps: Vec::new(),
        }
    }

    /// 追加一步，返回新路径
    pub fn step(mut self, relationship: Relationship, dst: Node) -> Self {
        self.steps.push(Step {
            relationship: Box::new(relationship),
            dst: Box::new(dst),
        });
        self
    }

    /// 按路径顺序获取所有节点（包括起点）
    pub fn nodes(&self) -> Vec<&Node> {
        std::iter::once(self.src.as_ref())
            .chain(self.steps.iter().map(|step| step.dst.as_ref()))
            .collect()
    }

    /// 获取路径中的关系
    pub fn relationships(&self) -> Vec<&Relationship> {
        self.steps.iter().map(|step| step.relationship.as_ref()).collect()
    }

    /// 获取路径长度（步骤数）
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// 检查路径是否为空（仅包含起点）
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}

/// 查询返回的一行记录
///
/// `keys` 与 `values` 按列一一对应
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Record {
    pub keys: Vec<String>,
    pub values: Vec<Value>,
}

impl Record {
    pub fn new(keys: Vec<String>, values: Vec<Value>) -> Self {
        Self { keys, values }
    }

    /// 单列记录的便捷构造
    pub fn single(key: impl Into<String>, value: impl Into<Value>) -> Self {
        Self {
            keys: vec![key.into()],
            values: vec![value.into()],
        }
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.keys
            .iter()
            .position(|k| k == key)
            .and_then(|i| self.values.get(i))
    }

    /// 按顺序展开记录中的所有节点
    ///
    /// 路径列贡献其全部节点，节点列贡献自身，其他列忽略
    pub fn nodes(&self) -> Vec<&Node> {
        let mut nodes = Vec::new();
        for value in &self.values {
            match value {
                Value::Path(path) => nodes.extend(path.nodes()),
                Value::Node(node) => nodes.push(node.as_ref()),
                _ => {}
            }
        }
        nodes
    }
}
