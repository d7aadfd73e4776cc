//! 回复链路径查询构建器
//!
//! `PathQueryBuilder` 是不可变值：每个细化方法都返回新的构建器，
//! 原构建器以及之前返回的构建器都保持有效，彼此之间没有共享的可变状态。
//!
//! 渲染出的查询子句顺序固定：
//! `MATCH` → `WHERE` → `RETURN` → `ORDER BY` → `SKIP` → `LIMIT`

use std::sync::Arc;

use crate::core::error::{ChatDBResult, QueryError, QueryResult, StorageError};
use crate::core::{NodeTypeDescriptor, Parameters, Record, Value};
use crate::query::predicate::{FilterTarget, Predicate, RawCondition};
use crate::storage::GraphStore;
use crate::utils::{escape_identifier, slot_alias};

/// 已登记的谓词，渲染时才编译
///
/// 参数位置由登记顺序决定（第 i 个谓词使用参数 `$i+1`），
/// 因此多次调用 `where_` 也不会产生重名参数
#[derive(Debug, Clone, PartialEq)]
enum PredicateEntry {
    Raw(RawCondition),
    Property {
        node_slot: usize,
        target: FilterTarget,
        predicate: Predicate,
    },
}

/// 回复链路径查询构建器
#[derive(Debug, Clone)]
pub struct PathQueryBuilder {
    graph: Arc<dyn GraphStore>,
    descriptors: Arc<[NodeTypeDescriptor]>,
    relationship: String,
    predicates: Vec<PredicateEntry>,
    order_by: Vec<String>,
    skip: Option<usize>,
    limit: Option<usize>,
}

impl PathQueryBuilder {
    /// 创建构建器
    ///
    /// 路径链为空或关系类型为空时立即失败
    pub fn new(
        graph: Arc<dyn GraphStore>,
        descriptors: Vec<NodeTypeDescriptor>,
        relationship: impl Into<String>,
    ) -> QueryResult<Self> {
        if descriptors.is_empty() {
            return Err(QueryError::EmptyChain);
        }
        let relationship = relationship.into();
        if relationship.trim().is_empty() {
            return Err(QueryError::invalid_descriptor("关系类型不能为空"));
        }
        Ok(Self {
            graph,
            descriptors: descriptors.into(),
            relationship,
            predicates: Vec::new(),
            order_by: Vec::new(),
            skip: None,
            limit: None,
        })
    }

    pub fn descriptors(&self) -> &[NodeTypeDescriptor] {
        &self.descriptors
    }

    /// 路径链长度 N
    pub fn chain_length(&self) -> usize {
        self.descriptors.len()
    }

    pub fn relationship(&self) -> &str {
        &self.relationship
    }

    pub fn graph(&self) -> &Arc<dyn GraphStore> {
        &self.graph
    }

    /// 追加过滤条件
    ///
    /// 原始条件原样追加，属性过滤作用于第一个节点（`s0`），
    /// 二者都排在已有谓词之后
    pub fn where_(&self, raw: Vec<RawCondition>, properties: Vec<(String, Predicate)>) -> Self {
        let mut predicates = self.predicates.clone();
        predicates.extend(raw.into_iter().map(PredicateEntry::Raw));
        predicates.extend(properties.into_iter().map(|(key, predicate)| {
            PredicateEntry::Property {
                node_slot: 0,
                target: FilterTarget::Property(key),
                predicate,
            }
        }));
        Self {
            predicates,
            ..self.clone()
        }
    }

    /// 在第一个节点的属性上过滤
    pub fn filter(&self, key: impl Into<String>, value: impl Into<Predicate>) -> Self {
        self.where_(Vec::new(), vec![(key.into(), Predicate::cast(value))])
    }

    /// 在指定位置节点的属性上过滤
    pub fn filter_at(
        &self,
        node_slot: usize,
        key: impl Into<String>,
        value: impl Into<Predicate>,
    ) -> QueryResult<Self> {
        self.push_entry(node_slot, FilterTarget::Property(key.into()), Predicate::cast(value))
    }

    /// 在指定位置节点的内部标识上过滤
    pub fn filter_identity(
        &self,
        node_slot: usize,
        value: impl Into<Predicate>,
    ) -> QueryResult<Self> {
        self.push_entry(node_slot, FilterTarget::Identity, Predicate::cast(value))
    }

    /// 追加一个原始条件
    pub fn filter_raw(&self, raw: impl Into<RawCondition>) -> Self {
        self.where_(vec![raw.into()], Vec::new())
    }

    fn push_entry(
        &self,
        node_slot: usize,
        target: FilterTarget,
        predicate: Predicate,
    ) -> QueryResult<Self> {
        if node_slot >= self.chain_length() {
            return Err(QueryError::NodeSlotOutOfRange {
                slot: node_slot,
                chain_length: self.chain_length(),
            });
        }
        let mut predicates = self.predicates.clone();
        predicates.push(PredicateEntry::Property {
            node_slot,
            target,
            predicate,
        });
        Ok(Self {
            predicates,
            ..self.clone()
        })
    }

    /// 整体替换排序字段
    pub fn order_by<I, S>(&self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            order_by: fields.into_iter().map(Into::into).collect(),
            ..self.clone()
        }
    }

    /// 替换跳过行数，`None` 清除
    pub fn skip(&self, amount: impl Into<Option<usize>>) -> Self {
        Self {
            skip: amount.into(),
            ..self.clone()
        }
    }

    /// 替换行数上限，`None` 清除
    pub fn limit(&self, amount: impl Into<Option<usize>>) -> Self {
        Self {
            limit: amount.into(),
            ..self.clone()
        }
    }

    /// 渲染查询文本和参数
    ///
    /// 结果只取决于构建器状态，重复调用得到相同输出。
    /// `count` 为真时只返回匹配的路径数，忽略排序和分页。
    pub fn query_and_parameters(&self, count: bool) -> (String, Parameters) {
        let mut clauses = vec![self.match_clause()];
        let mut parameters = Parameters::new();

        if !self.predicates.is_empty() {
            let mut conditions = Vec::with_capacity(self.predicates.len());
            for (index, entry) in self.predicates.iter().enumerate() {
                match entry {
                    PredicateEntry::Raw(raw) => {
                        conditions.push(raw.condition().to_string());
                        parameters.extend(
                            raw.parameters()
                                .iter()
                                .map(|(name, value)| (name.clone(), value.clone())),
                        );
                    }
                    PredicateEntry::Property {
                        node_slot,
                        target,
                        predicate,
                    } => {
                        let compiled = predicate.compile(target, index + 1, *node_slot);
                        conditions.push(compiled.condition);
                        parameters.extend(compiled.parameters);
                    }
                }
            }
            clauses.push(format!("WHERE {}", conditions.join(" AND ")));
        }

        if count {
            clauses.push("RETURN count(path)".to_string());
        } else {
            clauses.push("RETURN path".to_string());
            if !self.order_by.is_empty() {
                clauses.push(format!("ORDER BY {}", self.order_by.join(", ")));
            }
            // SKIP 0 不改变结果，按未设置处理
            if let Some(skip) = self.skip.filter(|&n| n > 0) {
                clauses.push(format!("SKIP {}", skip));
            }
            if let Some(limit) = self.limit {
                clauses.push(format!("LIMIT {}", limit));
            }
        }

        (clauses.join(" "), parameters)
    }

    /// `(s0:A)<-[:REPLY]-(s1:B)...`，第 i+1 个节点回复第 i 个节点
    fn match_clause(&self) -> String {
        let nodes: Vec<String> = self
            .descriptors
            .iter()
            .enumerate()
            .map(|(i, descriptor)| {
                format!("({}:{})", slot_alias(i), escape_identifier(descriptor.label()))
            })
            .collect();
        let edge = format!("<-[:{}]-", escape_identifier(&self.relationship));
        format!("MATCH path = {}", nodes.join(&edge))
    }

    /// 执行查询，返回全部匹配的路径记录
    pub fn all(&self) -> ChatDBResult<Vec<Record>> {
        let (query, parameters) = self.query_and_parameters(false);
        log::debug!("执行路径查询: {} 参数: {:?}", query, parameters);
        let records = self.graph.run(&query, &parameters)?;
        log::debug!("路径查询返回 {} 条记录", records.len());
        Ok(records)
    }

    /// 执行查询，只取第一条记录
    pub fn first(&self) -> ChatDBResult<Option<Record>> {
        Ok(self.limit(1).all()?.into_iter().next())
    }

    /// 统计匹配的路径数
    pub fn count(&self) -> ChatDBResult<usize> {
        let (query, parameters) = self.query_and_parameters(true);
        log::debug!("执行计数查询: {} 参数: {:?}", query, parameters);
        let records = self.graph.run(&query, &parameters)?;
        let Some(record) = records.first() else {
            return Ok(0);
        };
        match record.values.first() {
            Some(Value::Int(n)) if *n >= 0 => Ok(*n as usize),
            other => Err(StorageError::UnexpectedValue(format!(
                "计数查询应返回非负整数, 实际为 {:?}",
                other
            ))
            .into()),
        }
    }

    /// 是否存在至少一条匹配路径
    pub fn exists(&self) -> ChatDBResult<bool> {
        Ok(self.count()? > 0)
    }
}
