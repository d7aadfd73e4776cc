pub mod error;
pub mod node_path;
pub mod schema;
pub mod types;
pub mod value;

// 错误和结果类型
pub use error::{
    ChatDBError, ChatDBResult, ExportError, ExportResult, QueryError, QueryResult, StorageError,
    StorageResult,
};

// 核心数据类型
pub use node_path::{Node, Path, Record, Relationship, Step};
pub use schema::{Direction, ModelSchema, RelationshipDef};
pub use types::{NodeTypeDescriptor, PrimaryKey};
pub use value::*;
