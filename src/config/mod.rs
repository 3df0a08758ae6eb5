// ==========================================
// TKX 定价配置导出 - 配置层
// ==========================================
// 职责: 固定过滤条件、路径解析
// ==========================================

pub mod paths;

pub use paths::{default_output_path, get_default_db_path, project_root, resolve_output_path};

/// 城市过滤条件（pricing_config / configuracoes_estrategicas 两表共用）
pub const MUNICIPIO: &str = "Franca";
