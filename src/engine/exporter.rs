// ==========================================
// TKX 定价配置导出 - 导出器
// ==========================================
// 流程:
// 1. 解析输出路径并创建目录
// 2. 构造默认文档（确定 generated_at）
// 3. 打开连接 → 三个独立的降级查询 → 释放连接
// 4. 写入 JSON（2 空格缩进，非 ASCII 原样输出）
// 失败策略: 连接/文件系统错误致命；单个查询失败只影响对应部分
// ==========================================

use crate::config::{resolve_output_path, MUNICIPIO};
use crate::db::{open_sqlite_connection, table_exists};
use crate::domain::PricingConfigDocument;
use crate::engine::error::{ExportError, ExportResult};
use crate::engine::merge::{apply_dynamic_schedules, apply_pricing_row, apply_strategic_row};
use crate::repository::{PricingSourceRepository, RepositoryError, RepositoryResult};
use chrono::Utc;
use rusqlite::Connection;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

// ==========================================
// PricingConfigExporter
// ==========================================
pub struct PricingConfigExporter {
    db_path: String,
}

impl PricingConfigExporter {
    /// # 参数
    /// - db_path: SQLite 文件路径（由外部路径解析得到）
    pub fn new(db_path: impl Into<String>) -> Self {
        Self {
            db_path: db_path.into(),
        }
    }

    pub fn db_path(&self) -> &str {
        &self.db_path
    }

    /// 构造合并后的文档（不写文件）
    ///
    /// 连接在函数返回前释放，包括查询失败的情况
    pub fn build_document(&self) -> ExportResult<PricingConfigDocument> {
        let mut doc = PricingConfigDocument::with_defaults(&self.db_path, Utc::now());

        let conn = open_sqlite_connection(&self.db_path).map_err(|source| {
            ExportError::Connection {
                db_path: self.db_path.clone(),
                source,
            }
        })?;

        merge_from_connection(&conn, &mut doc);
        Ok(doc)
    }

    /// 导出 pricing_config.json
    ///
    /// # 参数
    /// - output_path: 输出路径；None 时使用 <project_root>/public/pricing_config.json
    ///
    /// # 返回
    /// - 实际写入的绝对路径
    pub fn export(&self, output_path: Option<&Path>) -> ExportResult<PathBuf> {
        let resolved = resolve_output_path(output_path);

        if let Some(parent) = resolved.parent() {
            std::fs::create_dir_all(parent).map_err(|source| ExportError::CreateDir {
                path: parent.to_path_buf(),
                source,
            })?;
        }

        let doc = self.build_document()?;
        write_document(&resolved, &doc)?;

        info!(
            output = %resolved.display(),
            db_path = %self.db_path,
            schedules = doc.dynamic_schedules.len(),
            "pricing_config.json 已生成"
        );
        Ok(resolved)
    }
}

/// 便捷函数: 以指定数据库导出
pub fn export_pricing_config(db_path: &str, output_path: Option<&Path>) -> ExportResult<PathBuf> {
    PricingConfigExporter::new(db_path).export(output_path)
}

/// 在已打开的连接上按固定顺序执行三步覆盖
pub fn merge_from_connection(conn: &Connection, doc: &mut PricingConfigDocument) {
    let repo = PricingSourceRepository::new(conn);

    let pricing_row = guarded(conn, "pricing_config", repo.latest_pricing_row(MUNICIPIO)).flatten();
    apply_pricing_row(doc, pricing_row.as_ref());

    let strategic_row = guarded(
        conn,
        "configuracoes_estrategicas",
        repo.latest_strategic_row(MUNICIPIO),
    )
    .flatten();
    apply_strategic_row(doc, strategic_row.as_ref());

    let schedule_rows =
        guarded(conn, "tarifas_dinamicas", repo.list_dynamic_schedules()).unwrap_or_default();
    if !apply_dynamic_schedules(doc, &schedule_rows) {
        debug!("tarifas_dinamicas 无数据，保留内置时段");
    }
}

/// 查询失败 → None（该部分沿用当前值）
fn guarded<T>(conn: &Connection, table: &str, result: RepositoryResult<T>) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(RepositoryError::TableMissing(msg)) => {
            debug!(table, %msg, "数据表不存在，使用默认值");
            None
        }
        Err(e) => {
            // 表存在但查询失败（列缺失/锁等）值得提示
            let exists = table_exists(conn, table).unwrap_or(false);
            warn!(table, table_exists = exists, error = %e, "查询失败，使用默认值");
            None
        }
    }
}

/// 写入文档（覆盖已有文件）
pub fn write_document(path: &Path, doc: &PricingConfigDocument) -> ExportResult<()> {
    let bytes = serde_json::to_vec_pretty(doc)?;
    std::fs::write(path, bytes).map_err(|source| ExportError::Write {
        path: path.to_path_buf(),
        source,
    })
}

/// 读回已导出的文档
pub fn read_document(path: &Path) -> ExportResult<PricingConfigDocument> {
    let raw = std::fs::read_to_string(path).map_err(|source| ExportError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(serde_json::from_str(&raw)?)
}
