//! Server startup/runtime errors

use thiserror::Error;

use crate::db::DbError;
use crate::db::repository::RepoError;

#[derive(Debug, Error)]
pub enum ServerError {
    #[error("数据库错误: {0}")]
    Db(#[from] DbError),

    #[error("存储错误: {0}")]
    Repo(#[from] RepoError),

    #[error("IO 错误: {0}")]
    Io(#[from] std::io::Error),

    #[error("内部错误: {0}")]
    Internal(#[from] anyhow::Error),
}

/// Result 类型别名
pub type Result<T> = std::result::Result<T, ServerError>;
