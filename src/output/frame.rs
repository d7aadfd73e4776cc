//! 表格帧导出
//!
//! 依赖可选的 `tabled` crate（cargo feature `frame`）。
//! 未启用时返回 `ExportError::DependencyUnavailable`，而不是在深处失败。

use crate::core::error::{ExportError, ExportResult};

#[cfg(feature = "frame")]
pub type TabularFrame = tabled::Table;

/// 未启用 `frame` feature 时不存在任何表格帧
#[cfg(not(feature = "frame"))]
#[derive(Debug)]
pub enum TabularFrame {}

/// 检查表格帧依赖是否可用，在执行任何查询之前调用
#[cfg(feature = "frame")]
pub fn ensure_available() -> ExportResult<()> {
    Ok(())
}

#[cfg(not(feature = "frame"))]
pub fn ensure_available() -> ExportResult<()> {
    Err(ExportError::DependencyUnavailable {
        dependency: "tabled",
        feature: "frame",
    })
}

/// 由提取结果构建表格帧
///
/// `column_names` 存在时作为表头，数量必须等于路径链长度
#[cfg(feature = "frame")]
pub fn build_frame(
    table: &[Vec<String>],
    column_names: Option<&[String]>,
    width: usize,
) -> ExportResult<TabularFrame> {
    use tabled::builder::Builder;

    let mut builder = Builder::default();
    if let Some(names) = column_names {
        if names.len() != width {
            return Err(ExportError::ColumnCountMismatch {
                expected: width,
                actual: names.len(),
            });
        }
        builder.push_record(names.iter().cloned());
    }
    for row in table {
        builder.push_record(row.iter().cloned());
    }
    Ok(builder.build())
}

#[cfg(not(feature = "frame"))]
pub fn build_frame(
    _table: &[Vec<String>],
    _column_names: Option<&[String]>,
    _width: usize,
) -> ExportResult<TabularFrame> {
    Err(ExportError::DependencyUnavailable {
        dependency: "tabled",
        feature: "frame",
    })
}
