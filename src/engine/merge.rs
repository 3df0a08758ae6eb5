// ==========================================
// TKX 定价配置导出 - 覆盖合并规则
// ==========================================
// 顺序固定:
// 1. pricing_config              逐字段覆盖 tariff
// 2. configuracoes_estrategicas  备用运价（仅 base_fare 为 0 时）+ 生成 costs
// 3. tarifas_dinamicas           非空时整体替换 dynamic_schedules
// ==========================================

use crate::domain::{Costs, DynamicSchedule, PricingConfigDocument};
use crate::engine::coerce::{coerce_f64, coerce_text};
use crate::repository::{DynamicTariffRow, PricingConfigRow, StrategicConfigRow};

/// 动态倍率缺失/非法时的默认值
pub const DEFAULT_MULTIPLICADOR: f64 = 1.0;

/// 步骤 1: 主运价表覆盖
///
/// 每个字段独立转换，非法值保留当前值
pub fn apply_pricing_row(doc: &mut PricingConfigDocument, row: Option<&PricingConfigRow>) {
    let Some(row) = row else {
        return;
    };

    let tariff = &mut doc.tariff;
    tariff.base_fare = coerce_f64(&row.tarifa_base, tariff.base_fare);
    tariff.per_km = coerce_f64(&row.valor_por_km, tariff.per_km);
    tariff.included_km = coerce_f64(&row.km_incluso, tariff.included_km);
    tariff.min_fare = coerce_f64(&row.tarifa_minima, tariff.min_fare);
    tariff.tech_fee_fixed = coerce_f64(&row.tech_fee_fixo, tariff.tech_fee_fixed);
    tariff.take_rate_pct = coerce_f64(&row.take_rate_pct, tariff.take_rate_pct);
}

/// 步骤 2: 战略配置表
///
/// - base_fare 为 0 时才用 tarifa_base_fixa / valor_por_km 回填运价
/// - costs 总是重建；无数据行时使用固定回退值
pub fn apply_strategic_row(doc: &mut PricingConfigDocument, row: Option<&StrategicConfigRow>) {
    let Some(row) = row else {
        doc.costs = Costs::fallback();
        return;
    };

    // 注意: 默认 base_fare = 4.00，此分支只有在主表给出 0 时才会生效
    if doc.tariff.base_fare == 0.0 {
        doc.tariff.base_fare = coerce_f64(&row.tarifa_base_fixa, doc.tariff.base_fare);
        doc.tariff.per_km = coerce_f64(&row.valor_por_km, doc.tariff.per_km);
    }

    doc.costs = Costs {
        gateway_fee_pct: coerce_f64(
            &row.custo_gateway_percentual,
            Costs::FALLBACK_GATEWAY_FEE_PCT,
        ),
        insurance_fixed: coerce_f64(&row.seguro_app_fixo, Costs::FALLBACK_INSURANCE_FIXED),
        maintenance_fixed: coerce_f64(
            &row.manutencao_app_fixo,
            Costs::FALLBACK_MAINTENANCE_FIXED,
        ),
    };
}

/// 步骤 3: 动态时段整体替换
///
/// # 返回
/// - true: 已替换
/// - false: 无数据，保留原列表
pub fn apply_dynamic_schedules(doc: &mut PricingConfigDocument, rows: &[DynamicTariffRow]) -> bool {
    if rows.is_empty() {
        return false;
    }

    doc.dynamic_schedules = rows
        .iter()
        .map(|r| DynamicSchedule {
            periodo: coerce_text(&r.periodo, ""),
            hora_inicio: coerce_text(&r.hora_inicio, ""),
            hora_fim: coerce_text(&r.hora_fim, ""),
            multiplicador: coerce_f64(&r.multiplicador, DEFAULT_MULTIPLICADOR),
        })
        .collect();
    true
}
