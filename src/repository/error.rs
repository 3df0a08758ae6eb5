// ==========================================
// TKX 定价配置导出 - 仓储层错误类型
// ==========================================
// 工具: thiserror 派生宏
// ==========================================

use thiserror::Error;

/// 仓储层错误类型
#[derive(Error, Debug)]
pub enum RepositoryError {
    #[error("数据表不存在: {0}")]
    TableMissing(String),

    #[error("数据库被锁定: {0}")]
    DatabaseLocked(String),

    #[error("数据库查询失败: {0}")]
    DatabaseQueryError(String),
}

// 实现 From<rusqlite::Error>
impl From<rusqlite::Error> for RepositoryError {
    fn from(err: rusqlite::Error) -> Self {
        match err {
            rusqlite::Error::SqliteFailure(ffi_err, msg) => {
                let msg = msg.unwrap_or_else(|| ffi_err.to_string());
                if msg.contains("no such table") {
                    RepositoryError::TableMissing(msg)
                } else if matches!(
                    ffi_err.code,
                    rusqlite::ErrorCode::DatabaseBusy | rusqlite::ErrorCode::DatabaseLocked
                ) {
                    RepositoryError::DatabaseLocked(msg)
                } else {
                    RepositoryError::DatabaseQueryError(msg)
                }
            }
            _ => RepositoryError::DatabaseQueryError(err.to_string()),
        }
    }
}

/// Result 类型别名
pub type RepositoryResult<T> = Result<T, RepositoryError>;
