use std::{error::Error, thread, time::Duration};

use torolife::{LifeEngine, PositionEncoder, RunLengthEncoded};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

mod console;
mod options;
mod speed;
mod stats;

use console::{ConsoleCommand, ConsoleRender};
use speed::Speed;
use stats::{Dashboard, Recorder, SwitchRecorder};

/// How long a paused console waits between polls
const PAUSED_FRAME: Duration = Duration::from_millis(16);

fn init_logging(console: bool) {
    // the console owns the terminal, so only let problems through by default
    let default = if console { "warn" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Loads the input pattern at the requested origin
///
/// A pattern that can't be read is reported and otherwise ignored.
fn load_input(game: &mut LifeEngine, args: &options::Args) {
    let Some(file_name) = args.input_file() else {
        warn!("no input pattern to load");
        return;
    };
    if let Err(err) = torolife::load_pattern(game, &file_name, args.origin()) {
        warn!(%err, "pattern not loaded, continuing with the current state");
    }
}

fn seed_game(game: &mut LifeEngine, args: &options::Args) {
    if args.input_file().is_some() {
        load_input(game, args);
        return;
    }

    // setup the alive cells based on args
    let (width, height) = (game.grid().width(), game.grid().height());
    for cell in args.fill_mode().create_alive(width, height) {
        game.birth(cell);
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    let Some(args) = options::Args::from_env() else {
        return Ok(());
    };
    init_logging(args.console());

    let (width, height) = args.grid_size();
    let mut game = LifeEngine::new(width, height)?;
    seed_game(&mut game, &args);
    info!(width, height, alive = game.alive_count(), "simulation ready");

    let mut console = if args.console() {
        Some(ConsoleRender::new()?)
    } else {
        None
    };
    let mut speed = args.speed();
    let mut paused = false;
    let mut fast_forward = false;
    let mut stats = SwitchRecorder::new(game.alive_count(), args.stats_file().is_some());
    let mut report = String::new();

    let max_generations = args.generations();
    'generations: while game.generation() < max_generations {
        let mut single_step = false;

        // handle input and render the console if in console mode
        if let Some(ref mut console) = console {
            while let Some(cmd) = console.poll_events()? {
                match cmd {
                    ConsoleCommand::Exit => break 'generations,
                    ConsoleCommand::TogglePause => paused = !paused,
                    ConsoleCommand::Step => single_step = paused,
                    ConsoleCommand::Reset => {
                        game.reset();
                        stats.restart(0);
                    }
                    ConsoleCommand::LoadPattern => load_input(&mut game, &args),
                    ConsoleCommand::SpeedUp => speed = speed.map(Speed::faster),
                    ConsoleCommand::SlowDown => speed = speed.map(Speed::slower),
                    ConsoleCommand::ToggleFastForward => fast_forward = !fast_forward,
                    ConsoleCommand::Pan(_) | ConsoleCommand::Handled => {}
                }
            }
            console.set_dashboard(&Dashboard {
                speed: speed.map_or(Speed::MAX, Speed::value),
                paused,
                fast_forward,
                report: report.clone(),
            });
            console.render(&game)?;
        }

        // report metrics every 500ms
        if stats.has_report() {
            report = stats.report();
            if console.is_none() {
                println!("{}", report);
            }
        }

        // compute the next generation
        if !paused || single_step {
            game.step();
            stats.record(game.alive_count());
        }

        let delay = match speed {
            _ if paused => PAUSED_FRAME,
            _ if fast_forward => Duration::ZERO,
            Some(speed) => speed.delay(),
            None => Duration::ZERO,
        };
        if !delay.is_zero() {
            thread::sleep(delay);
        }
    }
    std::mem::drop(console);
    info!(
        generation = game.generation(),
        alive = game.alive_count(),
        "simulation finished"
    );

    if let Some(file_name) = args.stats_file() {
        stats.save(&file_name)?;
    }
    if let Some(file_name) = args.output_file() {
        let encoder = RunLengthEncoded::default().set_name("torolife generated pattern");
        let encoded_game = encoder.encode(&game.take());
        std::fs::write(&file_name, encoded_game)?;
        info!(file = %file_name, "pattern written");
    }

    Ok(())
}
