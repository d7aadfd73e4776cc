//! 过滤谓词
//!
//! 一个谓词描述单个属性（或节点标识）上的过滤条件，
//! 编译后得到条件片段和参数绑定。谓词构造后不可变。
//!
//! ## 转换规则
//!
//! | 输入 | 结果 |
//! |------|------|
//! | `None` / `Value::Null` | `IsNull` |
//! | `HashSet` / `BTreeSet` / 定长数组 | `In` |
//! | 其他值（包括 `Vec`，视为列表标量） | `EqualTo` |
//! | 已构造的 `Predicate` | 原样返回 |

use std::collections::{BTreeSet, HashSet};

use crate::core::error::{QueryError, QueryResult};
use crate::core::{Parameters, Value};
use crate::utils::{escape_identifier, slot_alias};

/// 过滤谓词
#[derive(Debug, Clone, PartialEq)]
pub enum Predicate {
    IsNull,
    EqualTo(Value),
    In(Vec<Value>),
}

/// 谓词作用的对象：节点的具名属性或节点内部标识
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum FilterTarget {
    Property(String),
    Identity,
}

impl FilterTarget {
    pub fn property(key: impl Into<String>) -> Self {
        FilterTarget::Property(key.into())
    }

    fn render(&self, node_slot: usize) -> String {
        match self {
            FilterTarget::Property(key) => {
                format!("{}.{}", slot_alias(node_slot), escape_identifier(key))
            }
            FilterTarget::Identity => format!("id({})", slot_alias(node_slot)),
        }
    }
}

/// 编译结果：条件片段 + 参数绑定
#[derive(Debug, Clone, PartialEq)]
pub struct CompiledPredicate {
    pub condition: String,
    pub parameters: Parameters,
}

impl Predicate {
    /// 按转换规则把任意输入转换为谓词
    pub fn cast(value: impl Into<Predicate>) -> Predicate {
        value.into()
    }

    pub fn equal_to(value: impl Into<Value>) -> Predicate {
        Predicate::EqualTo(value.into())
    }

    pub fn in_values<I, T>(values: I) -> Predicate
    where
        I: IntoIterator<Item = T>,
        T: Into<Value>,
    {
        Predicate::In(values.into_iter().map(Into::into).collect())
    }

    /// 编译谓词
    ///
    /// # Arguments
    /// * `target` - 过滤的属性或标识
    /// * `parameter_slot` - 参数位置，同时作为参数名
    /// * `node_slot` - 路径链中的节点位置
    pub fn compile(
        &self,
        target: &FilterTarget,
        parameter_slot: usize,
        node_slot: usize,
    ) -> CompiledPredicate {
        let subject = target.render(node_slot);
        let name = parameter_slot.to_string();
        let mut parameters = Parameters::new();

        let condition = match self {
            Predicate::IsNull => format!("{} IS NULL", subject),
            Predicate::EqualTo(value) => {
                parameters.insert(name.clone(), value.clone());
                format!("{} = ${}", subject, name)
            }
            Predicate::In(values) => {
                parameters.insert(name.clone(), Value::List(values.clone()));
                format!("{} IN ${}", subject, name)
            }
        };

        CompiledPredicate {
            condition,
            parameters,
        }
    }
}

impl From<Value> for Predicate {
    fn from(value: Value) -> Self {
        match value {
            Value::Null => Predicate::IsNull,
            other => Predicate::EqualTo(other),
        }
    }
}

impl<T: Into<Value>> From<Option<T>> for Predicate {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(v) => Predicate::from(v.into()),
            None => Predicate::IsNull,
        }
    }
}

macro_rules! equal_to_from {
    ($($ty:ty),+) => {
        $(
            impl From<$ty> for Predicate {
                fn from(value: $ty) -> Self {
                    Predicate::EqualTo(value.into())
                }
            }
        )+
    };
}

equal_to_from!(bool, i8, i16, i32, i64, u8, u16, u32, u64, usize, f32, f64, String, &str, &String);

impl<T: Into<Value>> From<Vec<T>> for Predicate {
    fn from(value: Vec<T>) -> Self {
        Predicate::EqualTo(value.into())
    }
}

impl<T: Into<Value>, const N: usize> From<[T; N]> for Predicate {
    fn from(value: [T; N]) -> Self {
        Predicate::in_values(value)
    }
}

impl<T: Into<Value>, S> From<HashSet<T, S>> for Predicate {
    fn from(value: HashSet<T, S>) -> Self {
        Predicate::in_values(value)
    }
}

impl<T: Into<Value>> From<BTreeSet<T>> for Predicate {
    fn from(value: BTreeSet<T>) -> Self {
        Predicate::in_values(value)
    }
}

/// 原始条件片段，可携带调用方命名的参数
///
/// 纯数字参数名保留给自动分配的参数位置
#[derive(Debug, Clone, PartialEq)]
pub struct RawCondition {
    condition: String,
    parameters: Parameters,
}

impl RawCondition {
    pub fn new(condition: impl Into<String>, parameters: Parameters) -> QueryResult<Self> {
        if let Some(name) = parameters
            .keys()
            .find(|name| !name.is_empty() && name.chars().all(|c| c.is_ascii_digit()))
        {
            return Err(QueryError::ReservedParameterName(name.clone()));
        }
        Ok(Self {
            condition: condition.into(),
            parameters,
        })
    }

    pub fn condition(&self) -> &str {
        &self.condition
    }

    pub fn parameters(&self) -> &Parameters {
        &self.parameters
    }
}

impl From<&str> for RawCondition {
    fn from(condition: &str) -> Self {
        Self {
            condition: condition.to_string(),
            parameters: Parameters::new(),
        }
    }
}

impl From<String> for RawCondition {
    fn from(condition: String) -> Self {
        Self {
            condition,
            parameters: Parameters::new(),
        }
    }
}
