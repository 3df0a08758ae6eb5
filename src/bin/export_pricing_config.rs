// Export public/pricing_config.json from the local SQLite database.
//
// Usage:
//   cargo run --bin export-pricing-config -- [output_path] [--db <db_path>]
//
// Without --db the path comes from TKX_DB_PATH or <project_root>/tkx.db.

use anyhow::{bail, Context};
use std::path::PathBuf;
use tkx_pricing_export::config::get_default_db_path;
use tkx_pricing_export::{logging, PricingConfigExporter};

#[derive(Debug, Default, PartialEq)]
struct CliArgs {
    output_path: Option<PathBuf>,
    db_path: Option<String>,
}

fn parse_args<I>(args: I) -> anyhow::Result<CliArgs>
where
    I: IntoIterator<Item = String>,
{
    let mut parsed = CliArgs::default();

    let mut args = args.into_iter();
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--db" => {
                let value = args.next().context("--db requires a path")?;
                parsed.db_path = Some(value);
            }
            flag if flag.starts_with("--") => bail!("unknown option: {}", flag),
            _ if parsed.output_path.is_none() => parsed.output_path = Some(PathBuf::from(&arg)),
            _ => bail!("unexpected argument: {}", arg),
        }
    }

    Ok(parsed)
}

fn main() -> anyhow::Result<()> {
    logging::init();

    let args = parse_args(std::env::args().skip(1))?;

    let db_path = args
        .db_path
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .unwrap_or_else(get_default_db_path);
    tracing::info!("使用数据库: {}", db_path);

    let exporter = PricingConfigExporter::new(db_path);
    let out = exporter
        .export(args.output_path.as_deref())
        .context("pricing_config.json export failed")?;

    println!("pricing_config.json gerado em: {}", out.display());
    Ok(())
}
