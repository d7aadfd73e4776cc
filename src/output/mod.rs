//! 输出模块
//!
//! - 结果投影与 CSV 导出 (`projector.rs`)
//! - 表格帧导出 (`frame.rs`，需要 `frame` feature)

pub mod frame;
pub mod projector;

pub use frame::TabularFrame;
pub use projector::{transpose, ResultProjector, TextTable};
