//! 核心类型模块

pub mod descriptor;

pub use descriptor::{NodeTypeDescriptor, PrimaryKey};
