//! 导出层错误类型
//!
//! 涵盖 CSV 行/列导出以及表格帧构建过程中的错误

use std::path::PathBuf;
use thiserror::Error;

/// 导出操作结果类型别名
pub type ExportResult<T> = Result<T, ExportError>;

/// 导出层错误类型
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ExportError {
    #[error("目标数量不匹配: 路径链长度为 {expected}, 提供了 {actual} 个目标")]
    DestinationCountMismatch { expected: usize, actual: usize },

    #[error("列名数量不匹配: 期望 {expected} 个, 提供了 {actual} 个")]
    ColumnCountMismatch { expected: usize, actual: usize },

    #[error("写入目标 #{index}{} 失败: {reason}", display_path(.path))]
    Destination {
        index: usize,
        path: Option<PathBuf>,
        reason: String,
    },

    #[error("CSV错误: {0}")]
    Csv(String),

    #[error("依赖不可用: 需要 `{dependency}` (启用 cargo feature `{feature}`)")]
    DependencyUnavailable {
        dependency: &'static str,
        feature: &'static str,
    },
}

fn display_path(path: &Option<PathBuf>) -> String {
    match path {
        Some(path) => format!(" ({})", path.display()),
        None => String::new(),
    }
}

impl ExportError {
    pub fn destination(index: usize, path: Option<PathBuf>, reason: impl ToString) -> Self {
        ExportError::Destination {
            index,
            path,
            reason: reason.to_string(),
        }
    }
}

impl From<csv::Error> for ExportError {
    fn from(e: csv::Error) -> Self {
        ExportError::Csv(e.to_string())
    }
}
