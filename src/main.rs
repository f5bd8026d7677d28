//! Countdown Timer - a terminal client for a singleton countdown resource
//! 
//! This is the main entry point for the countdown-timer application.

use std::{
    io::{self, Write},
    sync::Arc,
    time::Duration,
};
use tracing::{info, warn};

use countdown_timer::{
    api::{HttpTimerApi, TimerApi},
    config::{Command, Config},
    state::Mode,
    sync::{LoadOutcome, TimerController},
    tasks::{CountdownRenderer, Frame},
    utils::{shutdown_signal, Clock, SystemClock},
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::parse();

    // Logs go to stderr, the countdown owns stdout
    tracing_subscriber::fmt()
        .with_env_filter(format!("countdown_timer={},reqwest=warn", config.log_level()))
        .with_writer(io::stderr)
        .init();

    info!("Starting countdown-timer v{}", env!("CARGO_PKG_VERSION"));
    info!("Configuration: api_url={}, timeout={}s, tick={}ms",
          config.api_url, config.timeout, config.tick_ms);

    let clock: Arc<dyn Clock> = Arc::new(SystemClock);
    let api = HttpTimerApi::new(config.api_url.clone(), config.request_timeout())?;
    let controller = TimerController::new(api, Arc::clone(&clock));

    match controller.load().await {
        LoadOutcome::Found(timer) => info!("Editing timer '{}'", timer.name),
        LoadOutcome::Absent => info!("No timer configured yet"),
        LoadOutcome::Unreachable(e) => warn!("Backend unavailable, starting with no timer: {}", e),
    }

    match config.command() {
        Command::Watch => watch(&controller, clock, config.tick()).await?,
        Command::Set { name, at, no_watch } => {
            controller.set_name(name);
            controller.set_target_date(at);
            let saved = controller.save().await;
            print_status(&controller);
            saved?;

            if !no_watch {
                watch(&controller, clock, config.tick()).await?;
            }
        }
        Command::Reset => {
            let reset = controller.reset().await;
            print_status(&controller);
            reset?;
        }
        Command::Show => show(&controller, clock.as_ref()),
    }

    Ok(())
}

/// Render the countdown until a shutdown signal arrives
async fn watch<A: TimerApi>(
    controller: &TimerController<A>,
    clock: Arc<dyn Clock>,
    tick: Duration,
) -> anyhow::Result<()> {
    let renderer = CountdownRenderer::new(clock, tick).spawn(controller.subscribe());
    let mut frames = renderer.frames();
    draw(&frames.borrow_and_update())?;

    let shutdown = shutdown_signal();
    tokio::pin!(shutdown);

    loop {
        tokio::select! {
            changed = frames.changed() => {
                if changed.is_err() {
                    break;
                }
                let frame = frames.borrow_and_update().clone();
                draw(&frame)?;
            }
            result = &mut shutdown => {
                result?;
                info!("Shutdown signal received");
                break;
            }
        }
    }

    renderer.stop().await;
    println!();
    Ok(())
}

fn show<A: TimerApi>(controller: &TimerController<A>, clock: &dyn Clock) {
    let draft = controller.draft();
    match draft.mode {
        Mode::Editing => {
            println!("Update Countdown Timer");
            println!("  Counter Name:       {}", draft.name);
            println!("  Target Date & Time: {}", draft.target_date_local);
        }
        Mode::Creating => println!("Set Countdown Timer"),
    }

    let frame = Frame::compute(controller.current_timer().as_ref(), clock);
    if frame != Frame::Empty {
        println!("{}", frame);
    }
}

fn draw(frame: &Frame) -> io::Result<()> {
    let mut stdout = io::stdout().lock();
    match frame {
        Frame::Empty => write!(stdout, "\r\x1b[2KNo countdown configured.")?,
        frame => write!(stdout, "\r\x1b[2K{}", frame)?,
    }
    stdout.flush()
}

fn print_status<A: TimerApi>(controller: &TimerController<A>) {
    if let Some(status) = controller.status() {
        println!("{}", status);
    }
}
