//! 查询模块
//!
//! - 过滤谓词与参数编译 (`predicate.rs`)
//! - 不可变路径查询构建器 (`path_query.rs`)
//! - 主键查找入口 (`matcher.rs`)

pub mod matcher;
pub mod path_query;
pub mod predicate;

pub use matcher::PathMatcher;
pub use path_query::PathQueryBuilder;
pub use predicate::{CompiledPredicate, FilterTarget, Predicate, RawCondition};
