// ==========================================
// TKX 定价配置导出 - 定价配置文档领域模型
// ==========================================
// 职责: 定义 pricing_config.json 的完整结构与内置默认值
// 红线: 不含数据访问逻辑,不含合并逻辑
// ==========================================

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ==========================================
// Tariff - 基础运价
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tariff {
    pub base_fare: f64,      // 起步价
    pub per_km: f64,         // 每公里单价
    pub min_fare: f64,       // 最低车费
    pub tech_fee_fixed: f64, // 固定技术服务费
    pub take_rate_pct: f64,  // 平台抽成 (%)
    pub included_km: f64,    // 起步价包含里程
}

impl Default for Tariff {
    fn default() -> Self {
        Self {
            base_fare: 4.00,
            per_km: 2.02,
            min_fare: 9.00,
            tech_fee_fixed: 0.70,
            take_rate_pct: 15.0,
            included_km: 0.0,
        }
    }
}

// ==========================================
// DynamicSchedule - 分时段动态倍率
// ==========================================
/// 字段名与 tarifas_dinamicas 表列名保持一致（前端直接消费）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DynamicSchedule {
    pub periodo: String,
    pub hora_inicio: String, // "HH:MM"
    pub hora_fim: String,    // "HH:MM"
    pub multiplicador: f64,
}

impl DynamicSchedule {
    pub fn new(periodo: &str, hora_inicio: &str, hora_fim: &str, multiplicador: f64) -> Self {
        Self {
            periodo: periodo.to_string(),
            hora_inicio: hora_inicio.to_string(),
            hora_fim: hora_fim.to_string(),
            multiplicador,
        }
    }

    /// 内置的 4 个时段（数据库无数据时使用）
    pub fn defaults() -> Vec<Self> {
        vec![
            Self::new("Madrugada", "00:00", "05:59", 1.2),
            Self::new("Normal", "06:00", "17:59", 1.0),
            Self::new("Pico", "18:00", "20:59", 1.1),
            Self::new("Noite", "21:00", "23:59", 1.2),
        ]
    }
}

// ==========================================
// HeatZone - 热区倍率（静态）
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeatZone {
    pub zone: String,
    pub multiplier: f64,
}

impl HeatZone {
    pub fn defaults() -> Vec<Self> {
        [
            ("Centro/Estação", 1.40),
            ("Leporace/Brasilândia", 1.20),
            ("City Petrópolis/Aeroporto", 1.10),
            ("Distrito Industrial", 1.00),
        ]
        .into_iter()
        .map(|(zone, multiplier)| Self {
            zone: zone.to_string(),
            multiplier,
        })
        .collect()
    }
}

// ==========================================
// EventRange - 事件溢价区间
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EventRange {
    pub min: f64,
    pub max: f64,
}

/// 各事件类型的溢价区间（字段顺序即输出顺序）
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EventMultipliers {
    pub evento: EventRange, // 大型活动
    pub chuva: EventRange,  // 降雨
}

impl Default for EventMultipliers {
    fn default() -> Self {
        Self {
            evento: EventRange { min: 1.80, max: 2.50 },
            chuva: EventRange { min: 1.80, max: 2.50 },
        }
    }
}

// ==========================================
// Costs - 运营成本系数
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Costs {
    pub gateway_fee_pct: f64,   // 支付网关费率 (%)
    pub insurance_fixed: f64,   // 单程保险
    pub maintenance_fixed: f64, // 单程 App 维护成本
}

impl Costs {
    pub const FALLBACK_GATEWAY_FEE_PCT: f64 = 2.5;
    pub const FALLBACK_INSURANCE_FIXED: f64 = 0.60;
    pub const FALLBACK_MAINTENANCE_FIXED: f64 = 0.40;

    /// 战略配置表无数据时使用的固定值
    pub fn fallback() -> Self {
        Self {
            gateway_fee_pct: Self::FALLBACK_GATEWAY_FEE_PCT,
            insurance_fixed: Self::FALLBACK_INSURANCE_FIXED,
            maintenance_fixed: Self::FALLBACK_MAINTENANCE_FIXED,
        }
    }
}

// ==========================================
// Source - 来源元数据
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Source {
    pub db_path: String,
    pub generated_at: String, // ISO-8601 UTC, 以 Z 结尾
}

/// 生成时间戳格式: 2026-10-19T08:15:30.123456Z
pub fn format_generated_at(at: DateTime<Utc>) -> String {
    at.format("%Y-%m-%dT%H:%M:%S%.6fZ").to_string()
}

// ==========================================
// PricingConfigDocument - 导出文档
// ==========================================
/// 字段顺序即 JSON 输出顺序（costs 在合并阶段写入，位于末尾）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricingConfigDocument {
    pub tariff: Tariff,
    pub dynamic_schedules: Vec<DynamicSchedule>,
    pub heat_zones: Vec<HeatZone>,
    pub event_multipliers: EventMultipliers,
    pub source: Source,
    pub costs: Costs,
}

impl PricingConfigDocument {
    /// 构造一份全新的默认文档
    ///
    /// # 参数
    /// - db_path: 数据源路径（写入 source.db_path）
    /// - generated_at: 生成时刻（只在此处确定，后续查询结果不会修改）
    pub fn with_defaults(db_path: &str, generated_at: DateTime<Utc>) -> Self {
        Self {
            tariff: Tariff::default(),
            dynamic_schedules: DynamicSchedule::defaults(),
            heat_zones: HeatZone::defaults(),
            event_multipliers: EventMultipliers::default(),
            source: Source {
                db_path: db_path.to_string(),
                generated_at: format_generated_at(generated_at),
            },
            costs: Costs::fallback(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_default_tariff_values() {
        let tariff = Tariff::default();
        assert_eq!(tariff.base_fare, 4.00);
        assert_eq!(tariff.per_km, 2.02);
        assert_eq!(tariff.min_fare, 9.00);
        assert_eq!(tariff.tech_fee_fixed, 0.70);
        assert_eq!(tariff.take_rate_pct, 15.0);
        assert_eq!(tariff.included_km, 0.0);
    }

    #[test]
    fn test_default_schedules_cover_the_day_in_order() {
        let schedules = DynamicSchedule::defaults();
        let periods: Vec<&str> = schedules.iter().map(|s| s.periodo.as_str()).collect();
        assert_eq!(periods, vec!["Madrugada", "Normal", "Pico", "Noite"]);
        assert_eq!(schedules[0].hora_inicio, "00:00");
        assert_eq!(schedules[3].hora_fim, "23:59");
    }

    #[test]
    fn test_generated_at_format() {
        let at = Utc.with_ymd_and_hms(2026, 10, 19, 8, 15, 30).unwrap();
        assert_eq!(format_generated_at(at), "2026-10-19T08:15:30.000000Z");
    }

    #[test]
    fn test_serialized_key_order() {
        let doc = PricingConfigDocument::with_defaults("/tmp/tkx.db", Utc::now());
        let json = serde_json::to_string(&doc).unwrap();

        let positions: Vec<usize> = [
            "\"tariff\"",
            "\"dynamic_schedules\"",
            "\"heat_zones\"",
            "\"event_multipliers\"",
            "\"source\"",
            "\"costs\"",
        ]
        .iter()
        .map(|key| json.find(key).unwrap())
        .collect();

        let mut sorted = positions.clone();
        sorted.sort();
        assert_eq!(positions, sorted);
    }

    #[test]
    fn test_event_multipliers_keep_declared_order() {
        let json = serde_json::to_string(&EventMultipliers::default()).unwrap();
        assert_eq!(
            json,
            r#"{"evento":{"min":1.8,"max":2.5},"chuva":{"min":1.8,"max":2.5}}"#
        );
    }

    #[test]
    fn test_each_default_document_is_independent() {
        let mut first = PricingConfigDocument::with_defaults("a.db", Utc::now());
        first.dynamic_schedules.clear();
        first.tariff.base_fare = 0.0;

        let second = PricingConfigDocument::with_defaults("a.db", Utc::now());
        assert_eq!(second.dynamic_schedules.len(), 4);
        assert_eq!(second.tariff.base_fare, 4.00);
    }
}
