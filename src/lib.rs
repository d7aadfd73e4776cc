//! ChatDB - 把串联的聊天/推文消息存入属性图，并查询回复链
//!
//! 核心是不可变的路径查询构建器：按节点类型链拼出
//! `MATCH path = (s0:A)<-[:REPLY]-(s1:B)...` 形式的参数化查询，
//! 把类型化的过滤谓词编译为参数绑定，并渲染排序和分页子句。
//!
//! ```
//! use std::sync::Arc;
//! use chatdb::core::schema::simple_tweet_status;
//! use chatdb::core::Value;
//! use chatdb::query::PathMatcher;
//! use chatdb::storage::{GraphStore, RecordingGraphStore};
//!
//! let graph: Arc<dyn GraphStore> = Arc::new(RecordingGraphStore::new());
//! let tweet = simple_tweet_status().descriptor().unwrap();
//! let builder = PathMatcher::new(graph)
//!     .match_path(vec![tweet.clone(), tweet], Some(Value::from("42")))
//!     .unwrap()
//!     .limit(10);
//!
//! let (query, parameters) = builder.query_and_parameters(false);
//! assert_eq!(
//!     query,
//!     "MATCH path = (s0:`TweetStatus`)<-[:`REPLY`]-(s1:`TweetStatus`) \
//!      WHERE s0.`id_str` = $1 RETURN path LIMIT 10"
//! );
//! assert_eq!(parameters["1"], Value::from("42"));
//! ```
//!
//! 按配置文件初始化日志并导出回复链：
//!
//! ```no_run
//! use std::sync::Arc;
//! use chatdb::config::Config;
//! use chatdb::core::schema::ordinary_status;
//! use chatdb::output::ResultProjector;
//! use chatdb::query::PathMatcher;
//! use chatdb::storage::{GraphStore, RecordingGraphStore};
//! use chatdb::utils::logging;
//!
//! # fn main() -> chatdb::core::ChatDBResult<()> {
//! let config = Config::load("chatdb.toml")?;
//! logging::init(&config.log)?;
//!
//! let graph: Arc<dyn GraphStore> = Arc::new(RecordingGraphStore::new());
//! let status = ordinary_status().descriptor()?;
//! let builder = PathMatcher::with_config(graph, &config.query)
//!     .match_path(vec![status.clone(), status], None)?;
//! ResultProjector::with_config(builder, &config.export)?
//!     .export_delimited_to_path("conversations.csv")?;
//!
//! logging::shutdown();
//! # Ok(())
//! # }
//! ```

pub mod archive;
pub mod config;
pub mod core;
pub mod output;
pub mod query;
pub mod storage;
pub mod utils;
