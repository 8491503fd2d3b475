use std::io::{self, Write};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread;
use std::time::{Duration, Instant};

use anyhow::anyhow;
use clap::Args;
use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{self, EnterAlternateScreen, LeaveAlternateScreen},
};
use snake_core::{Direction, DirectionInbox, GameEngine, RoundOutcome};

use crate::config::RoundArgs;
use crate::render;

const INPUT_POLL: Duration = Duration::from_millis(25);

#[derive(Args, Debug)]
pub struct PlayArgs {
    #[command(flatten)]
    pub round: RoundArgs,
}

/// Raw mode and the alternate screen for as long as this lives.
struct TerminalGuard;

impl TerminalGuard {
    fn enter() -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        execute!(io::stdout(), EnterAlternateScreen, cursor::Hide)?;
        Ok(Self)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        if let Err(err) = execute!(io::stdout(), cursor::Show, LeaveAlternateScreen) {
            log::warn!("Could not leave alternate screen: {err}");
        }
        if let Err(err) = terminal::disable_raw_mode() {
            log::warn!("Could not disable raw mode: {err}");
        }
    }
}

/// Raises the quit flag when dropped, so the tick loop stops however the
/// input thread ends.
struct QuitOnDrop(Arc<AtomicBool>);

impl Drop for QuitOnDrop {
    fn drop(&mut self) {
        self.0.store(true, Ordering::Release);
    }
}

/// Raw mode swallows SIGINT, so Ctrl-C arrives as a key.
fn is_quit_key(key: &KeyEvent) -> bool {
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => true,
        KeyCode::Char('c') => key.modifiers.contains(KeyModifiers::CONTROL),
        _ => false,
    }
}

fn key_direction(code: KeyCode) -> Option<Direction> {
    match code {
        KeyCode::Left | KeyCode::Char('a') => Some(Direction::Left),
        KeyCode::Right | KeyCode::Char('d') => Some(Direction::Right),
        KeyCode::Up | KeyCode::Char('w') => Some(Direction::Up),
        KeyCode::Down | KeyCode::Char('s') => Some(Direction::Down),
        _ => None,
    }
}

/// Reads the keyboard until `quit` is set, posting directions into `inbox`.
fn read_input(inbox: &DirectionInbox, quit: &AtomicBool) -> io::Result<()> {
    while !quit.load(Ordering::Acquire) {
        if !event::poll(INPUT_POLL)? {
            continue;
        }
        let Event::Key(key) = event::read()? else {
            continue;
        };
        if key.kind != KeyEventKind::Press {
            continue;
        }
        if is_quit_key(&key) {
            quit.store(true, Ordering::Release);
        } else if let Some(direction) = key_direction(key.code) {
            log::trace!("Key {:?} requests {direction:?}", key.code);
            inbox.post(direction);
        }
    }
    Ok(())
}

pub fn run(args: &PlayArgs) -> anyhow::Result<()> {
    let config = args.round.game_config()?;
    let seed = args.round.seed();
    log::info!("Starting round with {config:?}, seed {seed}");

    let mut engine = GameEngine::with_seed(config, seed)?;
    let inbox = Arc::new(DirectionInbox::new());
    let quit = Arc::new(AtomicBool::new(false));
    let interval = Duration::from_millis(config.tick_interval_ms.into());

    let guard = TerminalGuard::enter()?;
    let input = thread::spawn({
        let inbox = Arc::clone(&inbox);
        let quit = Arc::clone(&quit);
        move || {
            let _stop_ticking = QuitOnDrop(Arc::clone(&quit));
            read_input(&inbox, &quit)
        }
    });

    let mut stdout = io::stdout();
    render::draw(&mut stdout, &engine.snapshot())?;

    let mut outcome = RoundOutcome::InProgress;
    let mut next_tick = Instant::now() + interval;
    while !quit.load(Ordering::Acquire) {
        if outcome.is_finished() {
            thread::sleep(INPUT_POLL);
            continue;
        }
        let now = Instant::now();
        if now < next_tick {
            thread::sleep((next_tick - now).min(INPUT_POLL));
            continue;
        }
        next_tick += interval;

        outcome = engine.tick(inbox.latest())?;
        render::draw(&mut stdout, &engine.snapshot())?;
    }

    // a quit before the round ended still lets the input thread finish
    quit.store(true, Ordering::Release);
    input
        .join()
        .map_err(|_| anyhow!("input thread panicked"))??;
    drop(guard);

    let snapshot = engine.snapshot();
    log::info!("Round finished {:?} with {} segments", snapshot.outcome, snapshot.len());
    writeln!(stdout, "{}", render::status_line(&snapshot))?;
    writeln!(stdout, "seed {seed}")?;
    Ok(())
}
