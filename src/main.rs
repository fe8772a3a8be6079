// SPDX-License-Identifier: MPL-2.0
use iced::Size;
use iced_spotlight::config::{self, FocusPointEntry};
use iced_spotlight::error::Result;
use iced_spotlight::scheduler::TokioScheduler;
use iced_spotlight::ui::tour::{Effect, FocusTour, Message};
use std::path::PathBuf;
use std::process::ExitCode;

const HELP: &str = "\
iced_spotlight - run a focus point tour headlessly and log each zoom

USAGE:
  iced_spotlight [OPTIONS]

OPTIONS:
  --config PATH        Settings file (default: user config directory)
  --duration-ms N      Time spent on each focus point
  --width W            Container width in pixels [default: 800]
  --height H           Container height in pixels [default: 600]
  --cycles N           Completions before exiting [default: one full pass]
  --point X,Y          Focus point in percent; repeat for several points
  -h, --help           Print this help
";

struct Args {
    config: Option<PathBuf>,
    duration_ms: Option<u64>,
    width: f32,
    height: f32,
    cycles: Option<usize>,
    points: Vec<FocusPointEntry>,
}

fn parse_point(value: &str) -> std::result::Result<FocusPointEntry, String> {
    let (x, y) = value
        .split_once(',')
        .ok_or_else(|| format!("expected X,Y but got '{value}'"))?;
    let x = x.trim().parse::<f32>().map_err(|e| format!("invalid x '{x}': {e}"))?;
    let y = y.trim().parse::<f32>().map_err(|e| format!("invalid y '{y}': {e}"))?;
    Ok(FocusPointEntry { x, y })
}

fn parse_args() -> std::result::Result<Option<Args>, pico_args::Error> {
    let mut args = pico_args::Arguments::from_env();
    if args.contains(["-h", "--help"]) {
        return Ok(None);
    }

    let parsed = Args {
        config: args.opt_value_from_str("--config")?,
        duration_ms: args.opt_value_from_str("--duration-ms")?,
        width: args.opt_value_from_str("--width")?.unwrap_or(800.0),
        height: args.opt_value_from_str("--height")?.unwrap_or(600.0),
        cycles: args.opt_value_from_str("--cycles")?,
        points: args.values_from_fn("--point", parse_point)?,
    };

    let remaining = args.finish();
    if !remaining.is_empty() {
        eprintln!("Warning: unused arguments left: {remaining:?}");
    }
    Ok(Some(parsed))
}

async fn run(args: Args) -> Result<()> {
    let mut settings = match &args.config {
        Some(path) => config::load_from_path(path)?,
        None => config::load()?,
    };
    if let Some(duration_ms) = args.duration_ms {
        settings.duration_ms = Some(duration_ms);
    }
    if !args.points.is_empty() {
        settings.focus_points = Some(args.points);
    }

    let mut tour = FocusTour::from_config(&settings, TokioScheduler::current()?)?;
    tour.handle_message(Message::ContainerResized(Size::new(args.width, args.height)));

    if !settings.auto_start() {
        tracing::info!("Auto-start disabled in settings; nothing to run");
        report(&tour);
        return Ok(());
    }

    let cycles = args.cycles.unwrap_or_else(|| tour.selector().len());
    tracing::info!(
        points = tour.selector().len(),
        duration_ms = tour.timer().duration().as_millis(),
        cycles,
        "Starting focus tour"
    );

    tour.handle_message(Message::Start);
    report(&tour);

    for _ in 0..cycles {
        match tour.next_completion().await {
            Some(Effect::FocusChanged { .. }) => report(&tour),
            Some(_) => {}
            None => break,
        }
    }

    tour.handle_message(Message::Stop);
    Ok(())
}

fn report<S: iced_spotlight::scheduler::TickScheduler>(tour: &FocusTour<S>) {
    let info = tour.info();
    println!(
        "[{}/{}] focus ({:.1}%, {:.1}%) -> translate ({:.1}, {:.1}) scale {}",
        info.current_index + 1,
        info.total_count,
        info.focus_point.x(),
        info.focus_point.y(),
        info.zoom.translate_x,
        info.zoom.translate_y,
        info.zoom.scale,
    );
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = match parse_args() {
        Ok(Some(args)) => args,
        Ok(None) => {
            print!("{HELP}");
            return ExitCode::SUCCESS;
        }
        Err(err) => {
            eprintln!("Error: {err}");
            return ExitCode::FAILURE;
        }
    };

    match run(args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err}");
            ExitCode::FAILURE
        }
    }
}
