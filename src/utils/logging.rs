// 日志工具模块
//
// 封装 flexi_logger 的初始化和关闭操作，确保异步日志正确 flush

use crate::config::LogConfig;
use crate::core::error::{ChatDBError, ChatDBResult};
use flexi_logger::{Cleanup, Criterion, FileSpec, Logger, LoggerHandle, Naming, WriteMode};
use std::sync::Mutex;

/// 全局日志句柄，用于程序退出时 flush
static LOGGER_HANDLE: Mutex<Option<LoggerHandle>> = Mutex::new(None);

/// 初始化日志系统
///
/// 已初始化时直接返回，保留原有的日志句柄
///
/// # Arguments
/// * `config` - 日志配置
///
/// # Examples
/// ```no_run
/// use chatdb::config::Config;
/// use chatdb::utils::logging;
///
/// # fn main() -> chatdb::core::ChatDBResult<()> {
/// let config = Config::load("chatdb.toml")?;
/// logging::init(&config.log)?;
/// // ...
/// logging::shutdown();
/// # Ok(())
/// # }
/// ```
pub fn init(config: &LogConfig) -> ChatDBResult<()> {
    let mut guard = LOGGER_HANDLE
        .lock()
        .map_err(|_| ChatDBError::Config("日志句柄锁已损坏".to_string()))?;
    if guard.is_some() {
        return Ok(());
    }

    let handle = Logger::try_with_str(&config.level)
        .map_err(|e| ChatDBError::Config(format!("无效的日志级别 `{}`: {}", config.level, e)))?
        .log_to_file(
            FileSpec::default()
                .basename(&config.file)
                .directory(&config.dir),
        )
        .rotate(
            Criterion::Size(config.max_file_size),
            Naming::Numbers,
            Cleanup::KeepLogFiles(config.max_files),
        )
        .write_mode(WriteMode::Async)
        .append()
        .start()
        .map_err(|e| ChatDBError::Config(format!("日志系统启动失败: {}", e)))?;
    *guard = Some(handle);

    log::info!("日志系统初始化完成: {}/{}", config.dir, config.file);
    Ok(())
}

/// 刷新并关闭日志系统
///
/// 阻塞直到异步日志线程写完当前内容
pub fn shutdown() {
    if let Ok(mut guard) = LOGGER_HANDLE.lock() {
        if let Some(handle) = guard.take() {
            handle.flush();
        }
    }
}

/// 检查日志系统是否已初始化
pub fn is_initialized() -> bool {
    LOGGER_HANDLE
        .lock()
        .map(|guard| guard.is_some())
        .unwrap_or(false)
}
