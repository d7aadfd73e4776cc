//! 路径结果投影与导出
//!
//! 执行构建器的查询，把每条结果路径投影为字段值序列：
//! 行对应匹配到的回复链，列对应链上的位置。

use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::config::ExportConfig;
use crate::core::error::{ChatDBResult, ExportError, ExportResult, StorageError};
use crate::output::frame::{build_frame, ensure_available, TabularFrame};
use crate::query::PathQueryBuilder;

/// 提取出的文本表：`table[row][position]`
pub type TextTable = Vec<Vec<String>>;

/// 结果投影器
#[derive(Debug, Clone)]
pub struct ResultProjector {
    builder: PathQueryBuilder,
    field: String,
    delimiter: u8,
}

impl ResultProjector {
    /// 默认提取 `text` 字段，以 `,` 分隔
    pub fn new(builder: PathQueryBuilder) -> Self {
        Self {
            builder,
            field: ExportConfig::default().field,
            delimiter: b',',
        }
    }

    /// 按导出配置创建，分隔符不是 ASCII 字符时失败
    pub fn with_config(builder: PathQueryBuilder, config: &ExportConfig) -> ChatDBResult<Self> {
        Ok(Self {
            builder,
            field: config.field.clone(),
            delimiter: config.delimiter_byte()?,
        })
    }

    pub fn with_delimiter(self, delimiter: u8) -> Self {
        Self { delimiter, ..self }
    }

    /// 替换导出时提取的字段
    pub fn with_field(self, field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            ..self
        }
    }

    pub fn builder(&self) -> &PathQueryBuilder {
        &self.builder
    }

    pub fn field(&self) -> &str {
        &self.field
    }

    pub fn delimiter(&self) -> u8 {
        self.delimiter
    }

    /// 执行查询并提取指定字段
    ///
    /// 缺失或为空的属性提取为空字符串；
    /// 节点数与路径链长度不符的记录视为存储返回格式错误
    pub fn extract_field(&self, field: &str) -> ChatDBResult<TextTable> {
        let expected = self.builder.chain_length();
        let records = self.builder.all()?;
        let mut table = Vec::with_capacity(records.len());
        for (row, record) in records.iter().enumerate() {
            let nodes = record.nodes();
            if nodes.len() != expected {
                return Err(StorageError::MalformedRecord {
                    row,
                    expected,
                    actual: nodes.len(),
                }
                .into());
            }
            table.push(
                nodes
                    .iter()
                    .map(|node| node.get(field).map(|v| v.to_text()).unwrap_or_default())
                    .collect(),
            );
        }
        Ok(table)
    }

    /// 提取配置的字段
    pub fn extract(&self) -> ChatDBResult<TextTable> {
        self.extract_field(&self.field)
    }

    /// 以分隔行写出到流
    pub fn export_rows<W: Write>(&self, writer: W, delimiter: u8) -> ChatDBResult<()> {
        let table = self.extract()?;
        write_rows(&table, writer, delimiter, 0, None)?;
        log::info!("导出 {} 行 `{}` 字段", table.len(), self.field);
        Ok(())
    }

    /// 以分隔行写出到文件，文件在所有退出路径上都会被关闭
    pub fn export_rows_to_path<P: AsRef<Path>>(&self, path: P, delimiter: u8) -> ChatDBResult<()> {
        let path = path.as_ref();
        let table = self.extract()?;
        let file = File::create(path)
            .map_err(|e| ExportError::destination(0, Some(path.to_path_buf()), e))?;
        write_rows(&table, file, delimiter, 0, Some(path))?;
        log::info!("导出 {} 行到 {}", table.len(), path.display());
        Ok(())
    }

    /// 以配置的分隔符写出到流
    pub fn export_delimited<W: Write>(&self, writer: W) -> ChatDBResult<()> {
        self.export_rows(writer, self.delimiter)
    }

    /// 以配置的分隔符写出到文件
    pub fn export_delimited_to_path<P: AsRef<Path>>(&self, path: P) -> ChatDBResult<()> {
        self.export_rows_to_path(path, self.delimiter)
    }

    /// 按列写出：第 i 个目标接收路径链第 i 个位置的值，每行一个
    ///
    /// 目标数量必须等于路径链长度，不符时在写入任何内容之前失败
    pub fn export_columns<W: Write>(&self, writers: Vec<W>) -> ChatDBResult<()> {
        self.check_destination_count(writers.len())?;
        let columns = transpose(&self.extract()?, self.builder.chain_length());
        for (index, (column, writer)) in columns.iter().zip(writers).enumerate() {
            write_column(column, writer, index, None)?;
        }
        log::info!("按列导出 {} 列 `{}` 字段", columns.len(), self.field);
        Ok(())
    }

    /// 按列写出到文件
    ///
    /// 先创建全部文件再写入，任何一个目标无法创建时不会写出数据
    pub fn export_columns_to_paths<P: AsRef<Path>>(&self, paths: &[P]) -> ChatDBResult<()> {
        self.check_destination_count(paths.len())?;
        let columns = transpose(&self.extract()?, self.builder.chain_length());

        let mut files = Vec::with_capacity(paths.len());
        for (index, path) in paths.iter().enumerate() {
            let path = path.as_ref().to_path_buf();
            let file = File::create(&path)
                .map_err(|e| ExportError::destination(index, Some(path.clone()), e))?;
            files.push((path, file));
        }

        for (index, (column, (path, file))) in columns.iter().zip(files).enumerate() {
            write_column(column, file, index, Some(&path))?;
        }
        log::info!("按列导出到 {} 个文件", paths.len());
        Ok(())
    }

    /// 构建表格帧，需要启用 `frame` feature
    ///
    /// 依赖不可用或列名数量不符时，在执行查询之前失败
    pub fn to_tabular_frame(&self, column_names: Option<Vec<String>>) -> ChatDBResult<TabularFrame> {
        ensure_available()?;
        let width = self.builder.chain_length();
        if let Some(names) = &column_names {
            if names.len() != width {
                return Err(ExportError::ColumnCountMismatch {
                    expected: width,
                    actual: names.len(),
                }
                .into());
            }
        }
        let table = self.extract()?;
        Ok(build_frame(&table, column_names.as_deref(), width)?)
    }

    fn check_destination_count(&self, actual: usize) -> ExportResult<()> {
        let expected = self.builder.chain_length();
        if actual != expected {
            return Err(ExportError::DestinationCountMismatch { expected, actual });
        }
        Ok(())
    }
}

/// 转置文本表，`width` 为列数，短行以空字符串补齐
pub fn transpose(table: &[Vec<String>], width: usize) -> TextTable {
    (0..width)
        .map(|position| {
            table
                .iter()
                .map(|row| row.get(position).cloned().unwrap_or_default())
                .collect()
        })
        .collect()
}

fn csv_writer<W: Write>(writer: W, delimiter: u8) -> csv::Writer<W> {
    csv::WriterBuilder::new()
        .delimiter(delimiter)
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(writer)
}

/// 写出行并 flush；写入器在返回时被释放
fn write_rows<W: Write>(
    table: &[Vec<String>],
    writer: W,
    delimiter: u8,
    index: usize,
    path: Option<&Path>,
) -> ExportResult<()> {
    let to_error = |e: &dyn std::fmt::Display| {
        ExportError::destination(index, path.map(PathBuf::from), e.to_string())
    };
    let mut writer = csv_writer(writer, delimiter);
    for row in table {
        writer.write_record(row).map_err(|e| to_error(&e))?;
    }
    writer.flush().map_err(|e| to_error(&e))?;
    Ok(())
}

fn write_column<W: Write>(
    column: &[String],
    writer: W,
    index: usize,
    path: Option<&Path>,
) -> ExportResult<()> {
    let rows: Vec<Vec<String>> = column.iter().map(|value| vec![value.clone()]).collect();
    write_rows(&rows, writer, b',', index, path)
}
