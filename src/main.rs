use anyhow::Result;
use clap::Parser;
use log::debug;
use ringlog::config::Config;
use ringlog::demo;
use ringlog::logging;
use ringlog::util::human::fmt_drain;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "ringlog", about = "Lossy latest-wins ring buffer demo", version = "0.1")]
struct Cli {
    /// Number of slots in the buffer (overrides config)
    #[arg(short, long, allow_negative_numbers = true)]
    capacity: Option<i64>,

    /// Number of records to insert (overrides config)
    #[arg(short = 'n', long)]
    records: Option<usize>,

    /// Value of the first record; later values count up from it
    #[arg(long)]
    start: Option<char>,

    /// Drain after every N inserts; 0 drains once at the end
    #[arg(long)]
    drain_every: Option<usize>,

    /// Print the run as JSON instead of text
    #[arg(long)]
    json: bool,

    /// Load this config file instead of the default location
    #[arg(long)]
    config: Option<PathBuf>,

    /// Print config file path and current values, then exit
    #[arg(long)]
    print_config: bool,

    /// Log spec, e.g. "debug" or "info, ringlog::util=trace"
    #[arg(long)]
    log_level: Option<String>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut cfg = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None       => Config::load()?,
    };
    if let Some(c) = cli.capacity    { cfg.buffer.capacity = c; }
    if let Some(n) = cli.records     { cfg.demo.records = n; }
    if let Some(s) = cli.start       { cfg.demo.start = s; }
    if let Some(d) = cli.drain_every { cfg.demo.drain_every = d; }

    let _logger = logging::init(&cfg.logging, cli.log_level.as_deref())?;
    debug!("resolved config: {:?}", cfg);

    if cli.print_config {
        return run_print_config(&cfg, cli.config.as_ref());
    }
    if cli.json {
        return run_json(&cfg);
    }
    run_text(&cfg)
}

fn run_text(cfg: &Config) -> Result<()> {
    let run = demo::run(&cfg.demo, cfg.buffer.capacity)?;
    print!("{}", fmt_drain("EMPTY TEST:", &run.empty));
    for (i, drain) in run.drains.iter().enumerate() {
        println!();
        print!("{}", fmt_drain(&format!("DRAIN {}:", i + 1), drain));
    }
    Ok(())
}

fn run_json(cfg: &Config) -> Result<()> {
    use serde_json::json;

    let run = demo::run(&cfg.demo, cfg.buffer.capacity)?;
    let out = json!({
        "capacity":  run.capacity,
        "empty":     run.empty,
        "drains":    run.drains,
        "timestamp": chrono::Local::now().to_rfc3339(),
    });
    println!("{}", serde_json::to_string_pretty(&out)?);
    Ok(())
}

fn run_print_config(cfg: &Config, explicit: Option<&PathBuf>) -> Result<()> {
    let path = explicit
        .cloned()
        .or_else(Config::config_path)
        .map(|p| p.to_string_lossy().into_owned())
        .unwrap_or_else(|| "(unknown)".to_string());
    println!("Config: {}", path);
    println!();
    println!("[buffer]");
    println!("  capacity    = {}", cfg.buffer.capacity);
    println!();
    println!("[demo]");
    println!("  records     = {}", cfg.demo.records);
    println!("  start       = {:?}", cfg.demo.start);
    println!("  drain_every = {}", cfg.demo.drain_every);
    println!();
    println!("[logging]");
    println!("  level       = {}", cfg.logging.level);
    match &cfg.logging.directory {
        Some(d) => println!("  directory   = {}", d.display()),
        None    => println!("  directory   = (stderr only)"),
    }
    Ok(())
}
