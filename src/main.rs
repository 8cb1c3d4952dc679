//! Terminal runner (default binary).
//!
//! Owns everything the engine does not: the fall timer, key capture, drawing,
//! configuration and logging. The engine only sees commands.

use std::fs::File;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyEventKind};
use log::{error, info, warn};

use tetrogrid::config::{config_file_path, Config};
use tetrogrid::core::GameSession;
use tetrogrid::input::{should_quit, KeyMap};
use tetrogrid::term::{GameView, TerminalRenderer, Viewport};
use tetrogrid::types::GameAction;

fn main() -> Result<()> {
    let (config, config_err) = match Config::load() {
        Ok(config) => (config, None),
        Err(err) => (Config::default(), Some(err)),
    };
    init_logging(&config)?;

    // Continue with default configuration
    if let Some(err) = config_err {
        error!("failed to load {}: {}", config_file_path().display(), err);
    }

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &config);

    // Always try to restore terminal state.
    if let Err(err) = term.exit() {
        warn!("terminal restore failed: {:#}", err);
    }
    result
}

fn init_logging(config: &Config) -> Result<()> {
    let file = File::create(&config.log_file)
        .with_context(|| format!("creating log file {}", config.log_file.display()))?;
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(&config.log_level))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .format_timestamp(None)
        .format_module_path(false)
        .init();
    Ok(())
}

fn run(term: &mut TerminalRenderer, config: &Config) -> Result<()> {
    let seed = config.seed.unwrap_or_else(rand::random);
    info!("starting session with seed {}", seed);

    let mut session = GameSession::new(seed);
    let keys = KeyMap::new(config.pause_key).unwrap_or_default();
    let view = GameView::default().with_pause_key(keys.pause_key());

    let mut next_tick = Instant::now() + fall_interval(&session);
    let mut dirty = true;

    loop {
        if dirty {
            let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
            let fb = view.render(&session.snapshot(), Viewport::new(w, h));
            term.draw(&fb)?;
            dirty = false;
        }

        let timeout = next_tick.saturating_duration_since(Instant::now());
        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind != KeyEventKind::Release => {
                    if should_quit(key) {
                        info!("quit at score {}", session.score());
                        return Ok(());
                    }
                    if let Some(action) = keys.action_for(key) {
                        let was_paused = session.paused();
                        dirty |= session.apply_action(action);
                        if action == GameAction::Restart || (was_paused && !session.paused()) {
                            next_tick = Instant::now() + fall_interval(&session);
                        }
                    }
                }
                Event::Resize(_, _) => dirty = true,
                _ => {}
            }
        }

        if Instant::now() >= next_tick {
            dirty |= session.tick();
            next_tick = Instant::now() + fall_interval(&session);
        }

        if let Some(lock) = session.take_last_event() {
            if lock.interval_changed {
                info!(
                    "fall interval now {}ms ({})",
                    session.fall_interval_ms(),
                    session.level().label()
                );
                next_tick = Instant::now() + fall_interval(&session);
            }
            if lock.game_over {
                info!("game over at score {}", session.score());
            }
        }
    }
}

fn fall_interval<R: tetrogrid::core::PieceRng>(session: &GameSession<R>) -> Duration {
    Duration::from_millis(session.fall_interval_ms() as u64)
}
