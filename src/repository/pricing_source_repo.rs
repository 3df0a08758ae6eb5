// ==========================================
// TKX 定价配置导出 - 定价数据源仓储
// ==========================================
// 数据源:
// - pricing_config              主运价表
// - configuracoes_estrategicas  战略配置表（备用运价 + 成本系数）
// - tarifas_dinamicas           分时段动态倍率表
// 红线: Repository 不含业务逻辑，原样返回单元格，类型转换由引擎负责
// ==========================================

use crate::repository::error::RepositoryResult;
use rusqlite::types::Value;
use rusqlite::{params, Connection, OptionalExtension, Row};

// ==========================================
// 行结构（原始单元格）
// ==========================================

/// pricing_config 最新一行
#[derive(Debug, Clone, PartialEq)]
pub struct PricingConfigRow {
    pub tarifa_base: Value,
    pub valor_por_km: Value,
    pub km_incluso: Value,
    pub tarifa_minima: Value,
    pub tech_fee_fixo: Value,
    pub take_rate_pct: Value,
}

/// configuracoes_estrategicas 最新一行
#[derive(Debug, Clone, PartialEq)]
pub struct StrategicConfigRow {
    pub tarifa_base_fixa: Value,
    pub valor_por_km: Value,
    pub custo_gateway_percentual: Value,
    pub seguro_app_fixo: Value,
    pub manutencao_app_fixo: Value,
}

/// tarifas_dinamicas 一行
#[derive(Debug, Clone, PartialEq)]
pub struct DynamicTariffRow {
    pub periodo: Value,
    pub hora_inicio: Value,
    pub hora_fim: Value,
    pub multiplicador: Value,
}

// ==========================================
// PricingSourceRepository
// ==========================================
/// 定价数据源仓储（只读）
///
/// 借用调用方独占的连接，连接生命周期由导出器管理
pub struct PricingSourceRepository<'a> {
    conn: &'a Connection,
}

impl<'a> PricingSourceRepository<'a> {
    pub fn new(conn: &'a Connection) -> Self {
        Self { conn }
    }

    /// 查询指定城市最新（id 最大）的主运价配置
    pub fn latest_pricing_row(&self, municipio: &str) -> RepositoryResult<Option<PricingConfigRow>> {
        let row = self
            .conn
            .query_row(
                r#"
                SELECT
                    tarifa_base,
                    valor_por_km,
                    km_incluso,
                    tarifa_minima,
                    tech_fee_fixo,
                    take_rate_pct
                FROM pricing_config
                WHERE municipio = ?1
                ORDER BY id DESC
                LIMIT 1
                "#,
                params![municipio],
                |row| {
                    Ok(PricingConfigRow {
                        tarifa_base: row.get(0)?,
                        valor_por_km: row.get(1)?,
                        km_incluso: row.get(2)?,
                        tarifa_minima: row.get(3)?,
                        tech_fee_fixo: row.get(4)?,
                        take_rate_pct: row.get(5)?,
                    })
                },
            )
            .optional()?;
        Ok(row)
    }

    /// 查询指定城市最新的战略配置
    pub fn latest_strategic_row(
        &self,
        municipio: &str,
    ) -> RepositoryResult<Option<StrategicConfigRow>> {
        let row = self
            .conn
            .query_row(
                r#"
                SELECT
                    tarifa_base_fixa,
                    valor_por_km,
                    custo_gateway_percentual,
                    seguro_app_fixo,
                    manutencao_app_fixo
                FROM configuracoes_estrategicas
                WHERE municipio = ?1
                ORDER BY id DESC
                LIMIT 1
                "#,
                params![municipio],
                |row| {
                    Ok(StrategicConfigRow {
                        tarifa_base_fixa: row.get(0)?,
                        valor_por_km: row.get(1)?,
                        custo_gateway_percentual: row.get(2)?,
                        seguro_app_fixo: row.get(3)?,
                        manutencao_app_fixo: row.get(4)?,
                    })
                },
            )
            .optional()?;
        Ok(row)
    }

    /// 查询全部动态时段（按开始时间排序）
    pub fn list_dynamic_schedules(&self) -> RepositoryResult<Vec<DynamicTariffRow>> {
        let mut stmt = self.conn.prepare(
            r#"
            SELECT periodo, hora_inicio, hora_fim, multiplicador
            FROM tarifas_dinamicas
            ORDER BY hora_inicio
            "#,
        )?;

        let rows = stmt
            .query_map([], map_dynamic_row)?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(rows)
    }
}

fn map_dynamic_row(row: &Row<'_>) -> rusqlite::Result<DynamicTariffRow> {
    Ok(DynamicTariffRow {
        periodo: row.get(0)?,
        hora_inicio: row.get(1)?,
        hora_fim: row.get(2)?,
        multiplicador: row.get(3)?,
    })
}
