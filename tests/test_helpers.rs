// ==========================================
// 测试辅助函数
// ==========================================
// 职责: 临时数据库创建、建表、测试数据插入
// ==========================================

#![allow(dead_code)]

use rusqlite::types::Value;
use rusqlite::{params, Connection};
use std::error::Error;
use tempfile::NamedTempFile;

/// 创建临时空数据库（不建任何表）
///
/// # 返回
/// - NamedTempFile: 临时数据库文件（需要保持存活）
/// - String: 数据库文件路径
pub fn create_empty_db() -> Result<(NamedTempFile, String), Box<dyn Error>> {
    let temp_file = NamedTempFile::new()?;
    let db_path = temp_file.path().to_str().unwrap().to_string();

    // 触发 SQLite 初始化文件
    let conn = Connection::open(&db_path)?;
    drop(conn);

    Ok((temp_file, db_path))
}

/// 创建临时数据库并初始化三张定价表（无数据）
pub fn create_test_db() -> Result<(NamedTempFile, String), Box<dyn Error>> {
    let (temp_file, db_path) = create_empty_db()?;
    let conn = Connection::open(&db_path)?;
    init_schema(&conn)?;
    Ok((temp_file, db_path))
}

/// 打开测试连接
pub fn open_test_connection(db_path: &str) -> Result<Connection, Box<dyn Error>> {
    Ok(Connection::open(db_path)?)
}

/// 初始化数据库 schema
pub fn init_schema(conn: &Connection) -> Result<(), Box<dyn Error>> {
    conn.execute(
        r#"
        CREATE TABLE IF NOT EXISTS pricing_config (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            municipio TEXT NOT NULL,
            tarifa_base REAL,
            valor_por_km REAL,
            km_incluso REAL,
            tarifa_minima REAL,
            tech_fee_fixo REAL,
            take_rate_pct REAL
        )
        "#,
        [],
    )?;

    conn.execute(
        r#"
        CREATE TABLE IF NOT EXISTS configuracoes_estrategicas (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            municipio TEXT NOT NULL,
            tarifa_base_fixa REAL,
            valor_por_km REAL,
            custo_gateway_percentual REAL,
            seguro_app_fixo REAL,
            manutencao_app_fixo REAL
        )
        "#,
        [],
    )?;

    conn.execute(
        r#"
        CREATE TABLE IF NOT EXISTS tarifas_dinamicas (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            periodo TEXT,
            hora_inicio TEXT,
            hora_fim TEXT,
            multiplicador REAL
        )
        "#,
        [],
    )?;

    Ok(())
}

/// 插入主运价行（municipio 可指定，便于测试过滤条件）
pub fn insert_pricing_row(
    conn: &Connection,
    municipio: &str,
    tarifa_base: Value,
    valor_por_km: Value,
) -> Result<(), Box<dyn Error>> {
    conn.execute(
        r#"
        INSERT INTO pricing_config (
            municipio, tarifa_base, valor_por_km, km_incluso, tarifa_minima, tech_fee_fixo, take_rate_pct
        ) VALUES (?1, ?2, ?3, NULL, NULL, NULL, NULL)
        "#,
        params![municipio, tarifa_base, valor_por_km],
    )?;
    Ok(())
}

/// 插入战略配置行
pub fn insert_strategic_row(
    conn: &Connection,
    tarifa_base_fixa: Value,
    valor_por_km: Value,
    custo_gateway_percentual: Value,
    seguro_app_fixo: Value,
    manutencao_app_fixo: Value,
) -> Result<(), Box<dyn Error>> {
    conn.execute(
        r#"
        INSERT INTO configuracoes_estrategicas (
            municipio, tarifa_base_fixa, valor_por_km,
            custo_gateway_percentual, seguro_app_fixo, manutencao_app_fixo
        ) VALUES ('Franca', ?1, ?2, ?3, ?4, ?5)
        "#,
        params![
            tarifa_base_fixa,
            valor_por_km,
            custo_gateway_percentual,
            seguro_app_fixo,
            manutencao_app_fixo
        ],
    )?;
    Ok(())
}

/// 插入动态时段行
pub fn insert_schedule_row(
    conn: &Connection,
    periodo: &str,
    hora_inicio: &str,
    hora_fim: &str,
    multiplicador: Value,
) -> Result<(), Box<dyn Error>> {
    conn.execute(
        r#"
        INSERT INTO tarifas_dinamicas (periodo, hora_inicio, hora_fim, multiplicador)
        VALUES (?1, ?2, ?3, ?4)
        "#,
        params![periodo, hora_inicio, hora_fim, multiplicador],
    )?;
    Ok(())
}
