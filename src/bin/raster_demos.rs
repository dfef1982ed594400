//! raster-demos: Bresenham, midpoint circle and Liang-Barsky demos.
//!
//! Run a demo interactively in the terminal, or replay an event script and
//! write the final frame to PNG or stdout.
//!
//! ```text
//! raster-demos line --interactive
//! raster-demos clip --script moves.txt --output clip.png
//! raster-demos circles --terminal ascii
//! ```

#![cfg_attr(test, allow(clippy::unwrap_used))]

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};

use raster_demos::app::{run_interactive, Session};
use raster_demos::config::Config;
use raster_demos::demos::DemoKind;
use raster_demos::input::parse_script;
use raster_demos::output::{PngEncoder, TerminalEncoder, TerminalMode};

/// Integer rasterization and clipping demos
#[derive(Parser, Debug)]
#[command(name = "raster-demos")]
#[command(version)]
#[command(about = "Bresenham lines, midpoint circles and Liang-Barsky clipping", long_about = None)]
struct Cli {
    /// Config file path (YAML)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    demo: DemoCommand,
}

#[derive(Subcommand, Debug)]
enum DemoCommand {
    /// Bresenham line with optional disk-brush thickness
    Line(RunArgs),
    /// Concentric midpoint circles with an HSV gradient
    Circles(RunArgs),
    /// Liang-Barsky clipping against a movable rectangle
    Clip(RunArgs),
}

impl DemoCommand {
    fn split(&self) -> (DemoKind, &RunArgs) {
        match self {
            Self::Line(args) => (DemoKind::Line, args),
            Self::Circles(args) => (DemoKind::Circles, args),
            Self::Clip(args) => (DemoKind::Clip, args),
        }
    }
}

#[derive(Args, Debug)]
struct RunArgs {
    /// Event script to replay before output
    #[arg(short, long)]
    script: Option<PathBuf>,

    /// Write the final frame to this PNG file
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Print the final frame to stdout in this mode
    #[arg(short, long, value_enum)]
    terminal: Option<TerminalArg>,

    /// Run live in the terminal with mouse and key input
    #[arg(short, long)]
    interactive: bool,

    /// Surface width in pixels
    #[arg(long)]
    width: Option<u32>,

    /// Surface height in pixels
    #[arg(long)]
    height: Option<u32>,

    /// Seed for randomize actions
    #[arg(long)]
    seed: Option<u64>,
}

#[derive(ValueEnum, Clone, Copy, Debug, Default)]
enum TerminalArg {
    /// Grayscale ASCII ramp
    Ascii,
    /// Unicode half blocks with true color
    #[default]
    HalfBlock,
    /// True-color background cells
    Ansi,
}

impl From<TerminalArg> for TerminalMode {
    fn from(arg: TerminalArg) -> Self {
        match arg {
            TerminalArg::Ascii => Self::Ascii,
            TerminalArg::HalfBlock => Self::UnicodeHalfBlock,
            TerminalArg::Ansi => Self::AnsiTrueColor,
        }
    }
}

fn load_config(path: Option<&PathBuf>) -> Result<Config> {
    let config = match path {
        Some(path) => Config::load(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => Config::discover().context("loading default config")?,
    };
    Ok(config)
}

/// CLI flags override whatever the config file set.
fn apply_overrides(config: &mut Config, kind: DemoKind, args: &RunArgs) {
    let (width, height) = match kind {
        DemoKind::Line => (&mut config.line.width, &mut config.line.height),
        DemoKind::Circles => (&mut config.circles.width, &mut config.circles.height),
        DemoKind::Clip => (&mut config.clip.width, &mut config.clip.height),
    };
    if let Some(w) = args.width {
        *width = w;
    }
    if let Some(h) = args.height {
        *height = h;
    }
    if let Some(seed) = args.seed {
        config.line.seed = seed;
        config.clip.seed = Some(seed);
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let (kind, args) = cli.demo.split();

    let mut config = load_config(cli.config.as_ref())?;
    apply_overrides(&mut config, kind, args);
    config.validate().context("invalid settings")?;

    let mut session = Session::new(kind, &config)?;

    if let Some(script) = &args.script {
        let text = std::fs::read_to_string(script)
            .with_context(|| format!("reading script {}", script.display()))?;
        let events = parse_script(&text, session.input())
            .with_context(|| format!("parsing script {}", script.display()))?;
        session.replay(&events)?;
    }

    let mode = TerminalMode::from(args.terminal.unwrap_or_default());
    if args.interactive {
        run_interactive(&mut session, mode)?;
    }

    if let Some(output) = &args.output {
        PngEncoder::write_to_file(session.frame(), output)
            .with_context(|| format!("writing {}", output.display()))?;
    }

    let print = args.terminal.is_some() || (args.output.is_none() && !args.interactive);
    if print {
        TerminalEncoder::new().mode(mode).print(session.frame())?;
        println!("{}", session.status_line());
    }

    Ok(())
}
