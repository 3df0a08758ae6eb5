// ==========================================
// TKX 定价配置导出 - 核心库
// ==========================================
// 技术栈: Rust + SQLite
// 输出: public/pricing_config.json（供前端定价计算使用）
// ==========================================

// ==========================================
// 模块声明
// ==========================================

// 领域层 - 导出文档与默认值
pub mod domain;

// 数据仓储层 - 只读查询
pub mod repository;

// 引擎层 - 合并与导出
pub mod engine;

// 配置层 - 路径与固定参数
pub mod config;

// 数据库基础设施（连接初始化）
pub mod db;

// 日志系统
pub mod logging;

// ==========================================
// 重导出核心类型
// ==========================================

pub use domain::{
    Costs, DynamicSchedule, EventMultipliers, EventRange, HeatZone, PricingConfigDocument, Source,
    Tariff,
};
pub use engine::{export_pricing_config, ExportError, ExportResult, PricingConfigExporter};

// ==========================================
// 常量定义
// ==========================================

// 系统版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
