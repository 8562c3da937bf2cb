use std::{
    fs::File,
    io::{BufWriter, Write},
    path::{Path, PathBuf},
};

use anyhow::Context as _;
use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "orizuru", version)]
struct Cli {
    /// Log fold transitions to stderr (repeat for more detail).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Dump one named pose.
    Pose(PoseArgs),
    /// Script a drag, run playback and optional release, and dump the result.
    Simulate(SimulateArgs),
    /// Print the effective engine configuration.
    Config(ConfigArgs),
}

#[derive(Parser, Debug)]
struct PoseArgs {
    /// Pose name: flat, triangle, diamond, bird_base, crane.
    #[arg(long, default_value = "crane")]
    name: orizuru::PoseName,

    /// Output format.
    #[arg(long, value_enum, default_value_t = MeshFormat::Obj)]
    format: MeshFormat,

    /// Output path (stdout if omitted).
    #[arg(long)]
    out: Option<PathBuf>,
}

#[derive(Parser, Debug)]
struct SimulateArgs {
    /// Engine config JSON (defaults if omitted).
    #[arg(long)]
    config: Option<PathBuf>,

    /// Horizontal drag distance in pixels before pointer-up.
    #[arg(long, default_value_t = 200.0)]
    drag_px: f64,

    /// Number of render ticks after the drag.
    #[arg(long, default_value_t = 300)]
    ticks: u32,

    /// Ticks per second.
    #[arg(long, default_value_t = 60.0)]
    fps: f64,

    /// Raise the release flag at this tick.
    #[arg(long)]
    release_at_tick: Option<u32>,

    /// Raise the force-finish flag at this tick.
    #[arg(long)]
    force_finish_at_tick: Option<u32>,

    /// Palette id or CSS colour string.
    #[arg(long)]
    color: Option<String>,

    /// Output format: one JSON record per tick, or the final mesh as OBJ.
    #[arg(long, value_enum, default_value_t = SimFormat::Jsonl)]
    format: SimFormat,

    /// Output path (stdout if omitted).
    #[arg(long)]
    out: Option<PathBuf>,
}

#[derive(Parser, Debug)]
struct ConfigArgs {
    /// Engine config JSON (defaults if omitted).
    #[arg(long)]
    config: Option<PathBuf>,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum MeshFormat {
    Obj,
    Json,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum SimFormat {
    Jsonl,
    Obj,
}

#[derive(serde::Serialize)]
struct TickRecord<'a> {
    tick: u32,
    stage: orizuru::Stage,
    progress: f64,
    complete: bool,
    instruction: Option<&'a str>,
    position: [f32; 3],
    rotation: [f32; 3],
    scale: f32,
    releasing: bool,
    handoff_due: bool,
    settle_due: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    match cli.cmd {
        Command::Pose(args) => cmd_pose(args),
        Command::Simulate(args) => cmd_simulate(args),
        Command::Config(args) => cmd_config(args),
    }
}

fn init_tracing(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "orizuru=debug",
        _ => "orizuru=trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn load_config(path: Option<&Path>) -> anyhow::Result<orizuru::EngineConfig> {
    match path {
        Some(p) => Ok(orizuru::EngineConfig::from_path(p)?),
        None => Ok(orizuru::EngineConfig::default()),
    }
}

fn open_output(out: Option<&Path>) -> anyhow::Result<Box<dyn Write>> {
    match out {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("create output dir '{}'", parent.display()))?;
            }
            let f = File::create(path)
                .with_context(|| format!("create output '{}'", path.display()))?;
            Ok(Box::new(BufWriter::new(f)))
        }
        None => Ok(Box::new(std::io::stdout().lock())),
    }
}

fn cmd_pose(args: PoseArgs) -> anyhow::Result<()> {
    let pose = orizuru::library().get(args.name);
    let mesh = orizuru::FoldedMesh::from_positions(*pose.vertices());

    let mut w = open_output(args.out.as_deref())?;
    match args.format {
        MeshFormat::Obj => orizuru::write_obj(&mesh, pose.name().as_str(), &mut w)?,
        MeshFormat::Json => {
            serde_json::to_writer_pretty(&mut w, &mesh).with_context(|| "encode pose JSON")?;
            writeln!(w)?;
        }
    }
    w.flush()?;

    if let Some(out) = &args.out {
        eprintln!("wrote {}", out.display());
    }
    Ok(())
}

fn cmd_simulate(args: SimulateArgs) -> anyhow::Result<()> {
    if !(args.fps.is_finite() && args.fps > 0.0) {
        anyhow::bail!("--fps must be > 0");
    }
    let cfg = load_config(args.config.as_deref())?;

    let mut crane = orizuru::CraneInstance::with_observer(&cfg, orizuru::RecordingObserver::new())?;
    if let Some(color) = &args.color {
        let resolved = cfg
            .palette
            .by_id(color)
            .map_or_else(|| color.clone(), |c| c.color.clone());
        crane.set_color(resolved);
    }

    let mut host = orizuru::InMemoryHost::new();
    crane.attach(&mut host);

    // Scripted gesture: press at the origin, move right in 10px steps, release.
    let c = crane.controller_mut();
    c.dispatch(orizuru::PointerEvent::new(orizuru::InputChannel::MouseDown, 0.0, 0.0));
    let steps = (args.drag_px.abs() / 10.0).ceil().max(1.0) as u32;
    for i in 1..=steps {
        let x = args.drag_px * f64::from(i) / f64::from(steps);
        c.dispatch(orizuru::PointerEvent::new(orizuru::InputChannel::MouseMove, x, 0.0));
    }
    c.dispatch(orizuru::PointerEvent::new(orizuru::InputChannel::MouseUp, args.drag_px, 0.0));

    let dt = 1.0 / args.fps;
    let mut w = open_output(args.out.as_deref())?;
    let mut last = None;
    for tick in 0..args.ticks {
        if args.release_at_tick == Some(tick) {
            crane.set_releasing(true);
        }
        if args.force_finish_at_tick == Some(tick) {
            crane.set_force_finish(true);
        }

        let frame = crane.frame(dt);
        if let SimFormat::Jsonl = args.format {
            let record = TickRecord {
                tick,
                stage: frame.snapshot.stage,
                progress: frame.snapshot.progress,
                complete: frame.snapshot.complete,
                instruction: cfg.instructions.instruction_for(frame.snapshot),
                position: frame.transform.position.to_array(),
                rotation: frame.transform.rotation.to_array(),
                scale: frame.transform.scale,
                releasing: crane.flight().is_active(),
                handoff_due: crane.handoff_due(),
                settle_due: crane.settle_due(),
            };
            serde_json::to_writer(&mut w, &record).with_context(|| "encode tick record")?;
            writeln!(w)?;
        }
        last = Some(frame);
    }

    if let SimFormat::Obj = args.format {
        let mesh = match last {
            Some(frame) => frame.mesh,
            None => {
                let s = crane.controller().snapshot();
                orizuru::interpolate(s.stage, s.progress)
            }
        };
        orizuru::write_obj(&mesh, "crane", &mut w)?;
    }
    w.flush()?;

    crane.detach(&mut host);
    tracing::info!(
        completions = crane.controller().observer().completions(),
        state = ?crane.controller().state(),
        "simulation finished"
    );
    Ok(())
}

fn cmd_config(args: ConfigArgs) -> anyhow::Result<()> {
    let cfg = load_config(args.config.as_deref())?;
    println!("{}", cfg.to_json_pretty()?);
    Ok(())
}
