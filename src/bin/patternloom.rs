use std::io::Write as _;
use std::path::PathBuf;

use anyhow::Context as _;
use clap::{Parser, Subcommand};

use patternloom::{PatternRenderer, PatternSettings, Point, RecordingSink, generate};

#[derive(Parser, Debug)]
#[command(name = "patternloom", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run a headless tick sequence and print one JSON telemetry line per tick.
    Simulate(SimulateArgs),
    /// Generate one modulated line and print its samples as JSON.
    Path(PathArgs),
}

#[derive(Parser, Debug)]
struct SimulateArgs {
    /// Settings JSON. Defaults are used when omitted.
    #[arg(long)]
    settings: Option<PathBuf>,

    /// Number of host ticks to run.
    #[arg(long, default_value_t = 120)]
    ticks: u32,

    /// Host callback interval in milliseconds.
    #[arg(long, default_value_t = 1000.0 / 60.0)]
    interval_ms: f64,

    /// Tick index at which the host starts stalling.
    #[arg(long)]
    stall_at: Option<u32>,

    /// Interval used from `--stall-at` onwards.
    #[arg(long, default_value_t = 50.0)]
    stall_ms: f64,
}

#[derive(Parser, Debug)]
struct PathArgs {
    /// Settings JSON supplying the wave, taper and stroke sections.
    #[arg(long)]
    settings: Option<PathBuf>,

    #[arg(long)]
    x1: f64,
    #[arg(long)]
    y1: f64,
    #[arg(long)]
    x2: f64,
    #[arg(long)]
    y2: f64,

    /// Animation time; advances the wave phase by the configured phase speed.
    #[arg(long, default_value_t = 0.0)]
    time_ms: f64,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    match cli.cmd {
        Command::Simulate(args) => cmd_simulate(args),
        Command::Path(args) => cmd_path(args),
    }
}

fn load_settings(path: Option<&PathBuf>) -> anyhow::Result<PatternSettings> {
    let Some(path) = path else {
        return Ok(PatternSettings::default());
    };
    let settings = PatternSettings::from_path(path)
        .with_context(|| format!("load settings '{}'", path.display()))?;
    settings
        .validate()
        .with_context(|| format!("validate settings '{}'", path.display()))?;
    Ok(settings)
}

fn cmd_simulate(args: SimulateArgs) -> anyhow::Result<()> {
    anyhow::ensure!(
        args.interval_ms.is_finite() && args.interval_ms > 0.0,
        "--interval-ms must be finite and > 0"
    );
    let settings = load_settings(args.settings.as_ref())?;
    let mut renderer = PatternRenderer::new(settings)?;
    let mut sink = RecordingSink::last_only();

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    let mut now_ms = 0.0;
    let mut rendered = 0u32;
    for i in 0..args.ticks {
        let report = renderer
            .tick(now_ms, &mut sink)
            .with_context(|| format!("tick {i}"))?;
        if report.should_render {
            rendered += 1;
        }
        serde_json::to_writer(&mut out, &report).context("write telemetry")?;
        writeln!(out).context("write telemetry")?;

        now_ms += match args.stall_at {
            Some(at) if i >= at => args.stall_ms,
            _ => args.interval_ms,
        };
    }

    eprintln!(
        "{} ticks, {rendered} rendered, final tier {:?}",
        args.ticks,
        renderer.clock().tier()
    );
    Ok(())
}

fn cmd_path(args: PathArgs) -> anyhow::Result<()> {
    let settings = load_settings(args.settings.as_ref())?;
    let phase = settings.wave.phase + settings.motion.phase_speed * args.time_ms / 1000.0;
    let path = generate(
        Point::new(args.x1, args.y1),
        Point::new(args.x2, args.y2),
        settings.stroke.segments,
        &settings.wave.with_phase(phase),
        &settings.taper,
        settings.stroke.base_width,
    );

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    serde_json::to_writer_pretty(&mut out, &path).context("write path JSON")?;
    writeln!(out).context("write path JSON")?;
    Ok(())
}
