// ==========================================
// TKX 定价配置导出 - 数据仓储层
// ==========================================
// 职责: 三个只读查询，不含业务逻辑
// ==========================================

pub mod error;
pub mod pricing_source_repo;

pub use error::{RepositoryError, RepositoryResult};
pub use pricing_source_repo::{
    DynamicTariffRow, PricingConfigRow, PricingSourceRepository, StrategicConfigRow,
};
