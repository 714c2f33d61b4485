use std::env;
use std::fs;

use catalog::{AttributeId, energy};
use compute::{DashboardSession, ViewSyncEngine};
use formats::{RegionCollection, RegionOptions, TableOptions, TableReport, decode_table};
use scene::{Dataset, JoinReport, Record, RegionFeature, SelectionState};
use serde::Serialize;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    if let Err(e) = real_main() {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

fn real_main() -> Result<(), String> {
    let mut args: Vec<String> = env::args().collect();
    if args.len() < 2 {
        return Err(usage());
    }

    let cmd = args[1].clone();
    args.drain(0..2);

    match cmd.as_str() {
        "report" => cmd_report(args),
        "view" => cmd_view(args),
        _ => Err(usage()),
    }
}

#[derive(Debug, Serialize)]
struct ReportOutput {
    table: TableReport,
    feature_count: usize,
    join: JoinReport,
}

fn cmd_report(args: Vec<String>) -> Result<(), String> {
    // gridscope report <records.csv> <regions.geojson>
    if args.len() != 2 {
        return Err(usage());
    }

    let (records, table, features) = load_inputs(&args[0], &args[1])?;
    let feature_count = features.len();

    let (_, join) = Dataset::assemble(features, records, &energy::catalog());
    info!(
        matched = join.matched_features,
        unmatched_features = join.unmatched_features.len(),
        unmatched_records = join.unmatched_records.len(),
        "join finished"
    );

    let output = ReportOutput {
        table,
        feature_count,
        join,
    };
    let payload = serde_json::to_string_pretty(&output).map_err(|e| format!("json: {e}"))?;
    println!("{payload}");
    Ok(())
}

fn cmd_view(args: Vec<String>) -> Result<(), String> {
    // gridscope view <records.csv> <regions.geojson> [--x A] [--y A] [--color A] [--pretty]
    if args.len() < 2 {
        return Err(usage());
    }

    let records_path = args[0].clone();
    let regions_path = args[1].clone();

    let roles = energy::default_roles();
    let mut x = roles.x;
    let mut y = roles.y;
    let mut color = roles.color;
    let mut pretty = false;

    let mut i = 2;
    while i < args.len() {
        match args[i].as_str() {
            "--x" => {
                i += 1;
                if i >= args.len() {
                    return Err("--x requires an attribute id".to_string());
                }
                x = AttributeId::new(args[i].as_str());
            }
            "--y" => {
                i += 1;
                if i >= args.len() {
                    return Err("--y requires an attribute id".to_string());
                }
                y = AttributeId::new(args[i].as_str());
            }
            "--color" => {
                i += 1;
                if i >= args.len() {
                    return Err("--color requires an attribute id".to_string());
                }
                color = AttributeId::new(args[i].as_str());
            }
            "--pretty" => {
                pretty = true;
            }
            s if s.starts_with('-') => {
                return Err(format!("unknown arg: {s}\n\n{}", usage()));
            }
            _ => {
                return Err(format!("unexpected arg: {}\n\n{}", args[i], usage()));
            }
        }
        i += 1;
    }

    let catalog = energy::catalog();
    let selection =
        SelectionState::new(&catalog, x, y, color).map_err(|e| format!("selection: {e}"))?;

    let (records, table, features) = load_inputs(&records_path, &regions_path)?;
    if !table.is_clean() {
        warn!(
            absorbed_cells = table.absorbed_cells,
            skipped_rows = table.skipped_rows,
            missing_columns = table.missing_columns.len(),
            "table decoded with problems"
        );
    }

    let (mut session, report) = DashboardSession::load(
        catalog,
        features,
        records,
        selection,
        ViewSyncEngine::default(),
    );
    if !report.is_clean() {
        warn!(
            unmatched_features = report.unmatched_features.len(),
            unmatched_records = report.unmatched_records.len(),
            duplicate_record_keys = report.duplicate_record_keys.len(),
            "join left gaps; unmatched regions render neutral"
        );
    }

    let update = session.refresh().map_err(|e| format!("recompute: {e}"))?;
    info!(
        regions = update.choropleth.regions.len(),
        bubbles = update.bubbles.bubbles.len(),
        "view bundle ready"
    );

    let payload = if pretty {
        serde_json::to_string_pretty(&update).map_err(|e| format!("json: {e}"))?
    } else {
        serde_json::to_string(&update).map_err(|e| format!("json: {e}"))?
    };
    println!("{payload}");
    Ok(())
}

fn load_inputs(
    records_path: &str,
    regions_path: &str,
) -> Result<(Vec<Record>, TableReport, Vec<RegionFeature>), String> {
    let table_text =
        fs::read_to_string(records_path).map_err(|e| format!("read {records_path}: {e}"))?;
    let (records, table) = decode_table(&table_text, &energy::catalog(), &TableOptions::default())
        .map_err(|e| format!("decode table {records_path}: {e}"))?;
    info!(
        records = records.len(),
        absorbed_cells = table.absorbed_cells,
        "decoded records table"
    );

    let geojson_text =
        fs::read_to_string(regions_path).map_err(|e| format!("read {regions_path}: {e}"))?;
    let regions = RegionCollection::from_geojson_str(&geojson_text, &RegionOptions::default())
        .map_err(|e| format!("decode regions {regions_path}: {e}"))?;
    info!(features = regions.features.len(), "decoded region features");

    Ok((records, table, regions.features))
}

fn usage() -> String {
    let exe = env::args().next().unwrap_or_else(|| "gridscope".to_string());
    format!(
        "Usage:\n  {exe} report <records.csv> <regions.geojson>\n  {exe} view <records.csv> <regions.geojson> [--x ATTR] [--y ATTR] [--color ATTR] [--pretty]\n\nNotes:\n- ATTR names a catalog id: coal_twh, gas_twh, wind_twh, solar_twh, cents_kwh, tot_twh.\n- The table key column and the GeoJSON key property are both `state_abbr`.\n- `report` prints the decode and join reports; `view` prints the full view bundle.\n- Set RUST_LOG=info for progress logging.\n"
    )
}
