//! Value 模块 - 参数与结果的值类型系统
//!
//! - 核心类型定义 (`types.rs`)
//! - 类型转换 (`conversion.rs`)

pub mod conversion;
pub mod types;

pub use types::*;
