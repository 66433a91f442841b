//! report-runner: headless report generator for Kuliner Monitor.
//!
//! Usage:
//!   report-runner --data-dir ./data
//!   report-runner --page cac_monitor
//!   report-runner --snapshot report.json
//!   report-runner --ipc-mode

use anyhow::Result;
use kuliner_core::{
    analytics::{SliderOverrides, SortKey},
    command::{PageRequest, PageView},
    config::{DashboardConfig, SeedConfig},
    engine::ReportEngine,
};
use std::env;
use std::io::{self, BufRead, Write};
use std::path::Path;

#[derive(serde::Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum IpcCommand {
    Page { request: PageRequest },
    Snapshot,
    Quit,
}

fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let ipc_mode = args.iter().any(|a| a == "--ipc-mode");
    let data_dir = flag_value(&args, "--data-dir").unwrap_or("./data");
    let page = flag_value(&args, "--page");
    let snapshot_path = flag_value(&args, "--snapshot");

    let config = if Path::new(data_dir).is_dir() {
        DashboardConfig::load(data_dir)?
    } else {
        log::warn!("data dir {data_dir} not found, using built-in config");
        DashboardConfig::builtin()
    };
    let seeds = SeedConfig {
        series:   parse_arg(&args, "--series-seed", config.seeds.series),
        entities: parse_arg(&args, "--entity-seed", config.seeds.entities),
    };
    let engine = ReportEngine::new(config).with_seeds(seeds);

    if ipc_mode {
        return run_ipc_loop(&engine);
    }

    if let Some(path) = snapshot_path {
        let json = engine.snapshot()?.to_json_pretty()?;
        std::fs::write(path, json)?;
        println!("snapshot written to {path}");
        return Ok(());
    }

    if let Some(name) = page {
        let request = PageRequest::from_name(name)
            .ok_or_else(|| anyhow::anyhow!("Unknown page: {name}"))?;
        let view = engine.serve(&request)?;
        println!("{}", serde_json::to_string_pretty(&view)?);
        return Ok(());
    }

    println!("Kuliner Monitor — report-runner");
    println!("  data_dir:     {data_dir}");
    println!("  series seed:  {}", engine.config().seeds.series);
    println!("  entity seed:  {}", engine.config().seeds.entities);
    println!();
    print_summary(&engine)
}

fn run_ipc_loop(engine: &ReportEngine) -> Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut handle = stdin.lock();
    let mut buffer = String::new();

    loop {
        buffer.clear();
        let bytes_read = handle.read_line(&mut buffer)?;
        if bytes_read == 0 {
            break; // EOF
        }
        if buffer.trim().is_empty() {
            continue;
        }

        let cmd: IpcCommand = match serde_json::from_str(&buffer) {
            Ok(c) => c,
            Err(e) => {
                log::warn!("ipc: rejected input: {e}");
                write_error(&mut stdout, &e.to_string())?;
                continue;
            }
        };

        match cmd {
            IpcCommand::Quit => break,
            IpcCommand::Page { request } => match engine.serve(&request) {
                Ok(view) => writeln!(stdout, "{}", serde_json::to_string(&view)?)?,
                Err(e) => write_error(&mut stdout, &e.to_string())?,
            },
            IpcCommand::Snapshot => match engine.snapshot() {
                Ok(snapshot) => writeln!(stdout, "{}", snapshot.to_json()?)?,
                Err(e) => write_error(&mut stdout, &e.to_string())?,
            },
        }
        stdout.flush()?;
    }
    Ok(())
}

fn write_error(out: &mut impl Write, message: &str) -> Result<()> {
    let err_json = serde_json::json!({ "error": message });
    writeln!(out, "{}", err_json)?;
    out.flush()?;
    Ok(())
}

fn print_summary(engine: &ReportEngine) -> Result<()> {
    let dashboard = engine.serve(&PageRequest::Dashboard)?;
    if let PageView::Dashboard(d) = dashboard {
        println!("=== DASHBOARD ===");
        println!("  mean CAC:        Rp {:.0}", d.kpis.mean_cac.unwrap_or_default());
        println!("  mean CVR:        {:.2}%", d.kpis.mean_cvr.unwrap_or_default());
        println!("  new customers:   {}", d.kpis.new_customers);
        println!(
            "  collective ROAS: {:.1}x (target {:.1}x)",
            d.kpis.collective_roas.unwrap_or_default(),
            d.kpis.roas_target
        );
        println!(
            "  days above CAC target Rp {}: {}/{}",
            d.cac_trend.target_max,
            d.cac_trend.days_above_target,
            d.cac_trend.points.len()
        );
        for share in &d.tier_distribution {
            println!("  {}: {} vendors", share.tier.label(), share.count);
        }
        for p in &d.tier_profitability {
            println!("  {} CAC/CLV: {:.3}", p.tier.label(), p.ratio);
        }
    }

    println!();
    let cac = engine.serve(&PageRequest::CacMonitor {
        tiers:         None,
        cac_threshold: None,
        sort_by:       SortKey::Cac,
    })?;
    if let PageView::CacMonitor(m) = cac {
        println!("=== CAC MONITOR (threshold Rp {}) ===", m.query.cac_threshold);
        println!("  over threshold:  {}", m.over_threshold_count);
        println!("  profitable:      {}", m.profitable_count);
        for row in &m.leaderboard {
            println!("  #{:02} {} | Rp {} | {}", row.id, row.name, row.acquisition_cost, row.tier.label());
        }
    }

    println!();
    let cvr = engine.serve(&PageRequest::CvrOptimizer {
        entity_id: None,
        overrides: SliderOverrides::default(),
    })?;
    if let PageView::CvrOptimizer(o) = cvr {
        println!("=== CVR OPTIMIZER ({}) ===", o.entity_name);
        println!("  current:   {:.2}%", o.current_cvr);
        println!("  predicted: {:.2}%", o.predicted_cvr);
        if let Some(delta) = o.improvement_percent {
            println!("  change:    {delta:+.1}%");
        }
        for rec in &o.recommendations {
            println!("  - {}", rec.message());
        }
    }

    println!();
    println!("=== MULTI-TOUCH ATTRIBUTION ===");
    let report = engine.attribution()?;
    for (name, percent) in report.as_map() {
        println!("  {name:<12} {percent:>5.1}%");
    }
    if let Some(leader) = report.leading_channel() {
        println!("  leader: {}", leader.name);
    }
    Ok(())
}

fn flag_value<'a>(args: &'a [String], flag: &str) -> Option<&'a str> {
    args.windows(2)
        .find(|w| w[0] == flag)
        .map(|w| w[1].as_str())
}

fn parse_arg<T: std::str::FromStr + Copy>(args: &[String], flag: &str, default: T) -> T {
    args.windows(2)
        .find(|w| w[0] == flag)
        .and_then(|w| w[1].parse().ok())
        .unwrap_or(default)
}
