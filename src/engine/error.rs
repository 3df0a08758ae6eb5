// ==========================================
// TKX 定价配置导出 - 导出错误类型
// ==========================================
// 说明: 这里只包含致命错误；单个查询失败在引擎内部降级，不会出现在这里
// ==========================================

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ExportError {
    #[error("数据库连接失败 ({db_path}): {source}")]
    Connection {
        db_path: String,
        #[source]
        source: rusqlite::Error,
    },

    #[error("创建输出目录失败 ({path}): {source}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("写入输出文件失败 ({path}): {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("读取配置文件失败 ({path}): {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("JSON 序列化/解析失败: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result 类型别名
pub type ExportResult<T> = Result<T, ExportError>;
