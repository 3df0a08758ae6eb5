// ==========================================
// TKX 定价配置导出 - 单元格类型转换
// ==========================================
// 规则: 空值或无法解析为有限浮点数 → 回退值
// 红线: 永不报错、永不 panic
// ==========================================

use rusqlite::types::Value;

/// 将数据库单元格转换为 f64
///
/// - NULL → fallback
/// - INTEGER / REAL → 数值
/// - TEXT / BLOB → 去除首尾空白后解析
/// - NaN / ±inf → fallback（保证 JSON 输出合法）
pub fn coerce_f64(raw: &Value, fallback: f64) -> f64 {
    let parsed = match raw {
        Value::Null => None,
        Value::Integer(i) => Some(*i as f64),
        Value::Real(r) => Some(*r),
        Value::Text(s) => parse_f64(s),
        Value::Blob(bytes) => std::str::from_utf8(bytes).ok().and_then(parse_f64),
    };

    match parsed {
        Some(v) if v.is_finite() => v,
        _ => fallback,
    }
}

fn parse_f64(s: &str) -> Option<f64> {
    s.trim().parse::<f64>().ok()
}

/// 将数据库单元格转换为字符串（动态时段的 periodo / hora_inicio / hora_fim）
///
/// - TEXT → 原样
/// - INTEGER / REAL → Display
/// - NULL / 非 UTF-8 BLOB → fallback
pub fn coerce_text(raw: &Value, fallback: &str) -> String {
    match raw {
        Value::Text(s) => s.clone(),
        Value::Integer(i) => i.to_string(),
        Value::Real(r) => r.to_string(),
        Value::Blob(bytes) => match std::str::from_utf8(bytes) {
            Ok(s) => s.to_string(),
            Err(_) => fallback.to_string(),
        },
        Value::Null => fallback.to_string(),
    }
}
