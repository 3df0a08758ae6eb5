// ==========================================
// TKX 定价配置导出 - 领域模型层
// ==========================================
// 职责: 定义导出文档的实体与默认值
// 红线: 不含数据访问逻辑,不含引擎逻辑
// ==========================================

pub mod pricing;

// 重导出核心类型
pub use pricing::{
    Costs, DynamicSchedule, EventMultipliers, EventRange, HeatZone, PricingConfigDocument, Source,
    Tariff,
};
