// ==========================================
// TKX 定价配置导出 - 引擎层
// ==========================================
// 职责: 默认值 + 数据库覆盖 → 导出文档
// 红线: Engine 不拼 SQL
// ==========================================

pub mod coerce;
pub mod error;
pub mod exporter;
pub mod merge;

// 重导出核心引擎
pub use coerce::{coerce_f64, coerce_text};
pub use error::{ExportError, ExportResult};
pub use exporter::{
    export_pricing_config, merge_from_connection, read_document, write_document,
    PricingConfigExporter,
};
pub use merge::{apply_dynamic_schedules, apply_pricing_row, apply_strategic_row};
