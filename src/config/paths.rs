// ==========================================
// TKX 定价配置导出 - 路径解析
// ==========================================
// 职责: 解析数据库路径与输出路径
// 环境变量:
// - TKX_DB_PATH: 显式指定 SQLite 文件
// - TKX_PROJECT_ROOT: 覆盖项目根目录（默认为 crate 根目录）
// ==========================================

use std::path::{Path, PathBuf};

/// 数据库路径环境变量
pub const DB_PATH_ENV: &str = "TKX_DB_PATH";

/// 项目根目录环境变量
pub const PROJECT_ROOT_ENV: &str = "TKX_PROJECT_ROOT";

/// 默认数据库文件名（位于项目根目录）
pub const DEFAULT_DB_FILE: &str = "tkx.db";

/// 输出文件相对项目根目录的位置
pub const OUTPUT_DIR: &str = "public";
pub const OUTPUT_FILE: &str = "pricing_config.json";

/// 读取非空环境变量（去除首尾空白）
fn non_empty_env(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// 项目根目录
pub fn project_root() -> PathBuf {
    match non_empty_env(PROJECT_ROOT_ENV) {
        Some(root) => PathBuf::from(root),
        None => PathBuf::from(env!("CARGO_MANIFEST_DIR")),
    }
}

/// 获取默认数据库路径
///
/// 优先级: TKX_DB_PATH > <project_root>/tkx.db
pub fn get_default_db_path() -> String {
    if let Some(path) = non_empty_env(DB_PATH_ENV) {
        return path;
    }

    project_root()
        .join(DEFAULT_DB_FILE)
        .to_string_lossy()
        .into_owned()
}

/// 默认输出路径: <project_root>/public/pricing_config.json
pub fn default_output_path() -> PathBuf {
    project_root().join(OUTPUT_DIR).join(OUTPUT_FILE)
}

/// 解析最终输出路径（相对路径按当前工作目录补全为绝对路径）
///
/// 空路径视同未指定
pub fn resolve_output_path(output_path: Option<&Path>) -> PathBuf {
    let path = match output_path.filter(|p| !p.as_os_str().is_empty()) {
        Some(p) => p.to_path_buf(),
        None => default_output_path(),
    };

    if path.is_absolute() {
        return path;
    }

    match std::env::current_dir() {
        Ok(cwd) => cwd.join(path),
        Err(_) => path,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_output_path_layout() {
        let path = default_output_path();
        assert!(path.ends_with("public/pricing_config.json"));
    }

    #[test]
    fn test_resolve_output_path_keeps_absolute() {
        let abs = std::env::temp_dir().join("out").join("pricing.json");
        assert_eq!(resolve_output_path(Some(&abs)), abs);
    }

    #[test]
    fn test_resolve_output_path_makes_relative_absolute() {
        let resolved = resolve_output_path(Some(Path::new("build/pricing.json")));
        assert!(resolved.is_absolute());
        assert!(resolved.ends_with("build/pricing.json"));
    }

    #[test]
    fn test_resolve_output_path_empty_uses_default() {
        assert_eq!(resolve_output_path(Some(Path::new(""))), default_output_path());
        assert_eq!(resolve_output_path(None), default_output_path());
    }

    #[test]
    fn test_get_default_db_path_not_empty() {
        let path = get_default_db_path();
        assert!(!path.is_empty());
    }
}
