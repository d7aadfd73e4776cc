use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::core::error::{ChatDBError, ChatDBResult};
use crate::core::schema::REPLY;

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
#[serde(default)]
pub struct Config {
    pub log: LogConfig,
    pub query: QueryConfig,
    pub export: ExportConfig,
}

/// 日志配置
#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(default)]
pub struct LogConfig {
    pub level: String,
    pub dir: String,
    pub file: String,
    pub max_file_size: u64,
    pub max_files: usize,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            dir: "logs".to_string(),
            file: "chatdb".to_string(),
            max_file_size: 100 * 1024 * 1024, // 100MB
            max_files: 5,
        }
    }
}

/// 路径查询配置
#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(default)]
pub struct QueryConfig {
    /// 连接回复链的关系类型
    pub reply_relationship: String,
}

impl Default for QueryConfig {
    fn default() -> Self {
        Self {
            reply_relationship: REPLY.to_string(),
        }
    }
}

/// 导出配置
#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(default)]
pub struct ExportConfig {
    pub delimiter: char,
    /// 从每个节点提取的属性
    pub field: String,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            delimiter: ',',
            field: "text".to_string(),
        }
    }
}

impl ExportConfig {
    /// CSV 写入器需要单字节分隔符
    pub fn delimiter_byte(&self) -> ChatDBResult<u8> {
        u8::try_from(self.delimiter)
            .ok()
            .filter(|b| b.is_ascii())
            .ok_or_else(|| {
                ChatDBError::Config(format!("分隔符必须是 ASCII 字符: {:?}", self.delimiter))
            })
    }
}

impl Config {
    pub fn load<P: AsRef<Path>>(path: P) -> ChatDBResult<Self> {
        let content = fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        config.export.delimiter_byte()?;
        Ok(config)
    }

    pub fn save<P: AsRef<Path>>(&self, path: P) -> ChatDBResult<()> {
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }
}
