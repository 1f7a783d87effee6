use std::path::PathBuf;

use anyhow::Context as _;
use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "orbglow", version, about = "Render an animated glowing orb")]
struct Cli {
    /// Increase log verbosity (-v debug, -vv trace). `RUST_LOG` takes precedence.
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render a single frame as a PNG.
    Frame(FrameArgs),
    /// Render frames `0..N` as a numbered PNG sequence.
    Sequence(SequenceArgs),
    /// Print the draw calls of a single frame as JSON.
    Trace(TraceArgs),
}

#[derive(Args, Debug)]
struct SceneArgs {
    /// Scene JSON; when given, `--color`/`--width`/`--height`/`--background` are ignored.
    #[arg(long)]
    scene: Option<PathBuf>,

    /// Base color (`#RRGGBB`, `#RRGGBBAA`, or JSON color).
    #[arg(long, default_value = "#3399ff")]
    color: orbglow::Rgba,

    /// Canvas width in pixels.
    #[arg(long, default_value_t = 256)]
    width: u32,

    /// Canvas height in pixels.
    #[arg(long, default_value_t = 256)]
    height: u32,

    /// Optional background clear color.
    #[arg(long)]
    background: Option<orbglow::Rgba>,
}

impl SceneArgs {
    fn load(&self) -> anyhow::Result<orbglow::OrbScene> {
        if let Some(path) = &self.scene {
            return orbglow::OrbScene::from_path(path)
                .with_context(|| format!("load scene '{}'", path.display()));
        }
        let mut scene = orbglow::OrbScene::new(
            orbglow::Canvas {
                width: self.width,
                height: self.height,
            },
            self.color,
        );
        scene.background = self.background;
        scene.validate()?;
        Ok(scene)
    }
}

#[derive(Args, Debug)]
struct FrameArgs {
    #[command(flatten)]
    scene: SceneArgs,

    /// Frame index (0-based).
    #[arg(long, default_value_t = 0)]
    frame: u64,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,
}

#[derive(Args, Debug)]
struct SequenceArgs {
    #[command(flatten)]
    scene: SceneArgs,

    /// Number of frames to render.
    #[arg(long)]
    frames: u64,

    /// First frame index.
    #[arg(long, default_value_t = 0)]
    start: u64,

    /// Output directory for `frame_NNNNNN.png` files.
    #[arg(long)]
    out_dir: PathBuf,
}

#[derive(Args, Debug)]
struct TraceArgs {
    #[command(flatten)]
    scene: SceneArgs,

    /// Frame index (0-based).
    #[arg(long, default_value_t = 0)]
    frame: u64,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    match cli.cmd {
        Command::Frame(args) => cmd_frame(args),
        Command::Sequence(args) => cmd_sequence(args),
        Command::Trace(args) => cmd_trace(args),
    }
}

fn init_tracing(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    // Logs go to stderr so `trace` output stays clean JSON.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

fn cmd_frame(args: FrameArgs) -> anyhow::Result<()> {
    let scene = args.scene.load()?;
    let frame = orbglow::render_frame(&scene, orbglow::FrameIndex(args.frame))?;
    orbglow::save_png(&args.out, &frame)?;
    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn cmd_sequence(args: SequenceArgs) -> anyhow::Result<()> {
    let scene = args.scene.load()?;
    let end = args
        .start
        .checked_add(args.frames)
        .context("frame range overflows u64")?;
    let range = orbglow::FrameRange::new(orbglow::FrameIndex(args.start), orbglow::FrameIndex(end))?;

    let mut sink = orbglow::PngSequenceSink::new(&args.out_dir);
    let stats = orbglow::render_range(&scene, range, &mut sink)?;
    eprintln!(
        "wrote {} frames to {}",
        stats.frames,
        args.out_dir.display()
    );
    Ok(())
}

fn cmd_trace(args: TraceArgs) -> anyhow::Result<()> {
    let scene = args.scene.load()?;
    let commands = orbglow::trace_frame(&scene, orbglow::FrameIndex(args.frame))?;
    let json = serde_json::to_string_pretty(&commands).context("serialize draw trace")?;
    println!("{json}");
    Ok(())
}
