mod display;

use std::collections::HashMap;
use std::fs::File;
use std::io::{stdout, BufWriter, Write};
use std::sync::{mpsc, Mutex};
use std::thread;
use std::time::Instant;

use anyhow::{Context, Result};
use crossterm::{
    cursor,
    event::{
        self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, KeyboardEnhancementFlags,
        PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
    },
    terminal, ExecutableCommand,
};
use rand::thread_rng;
use tracing_subscriber::filter::EnvFilter;

use display::Screen;
use galaxy_shooter::compute::{finish_game, init_state, tick};
use galaxy_shooter::config::GameConfig;
use galaxy_shooter::entities::GameStatus;
use galaxy_shooter::highscores::{FileHighScoreStore, HighScoreStore};
use galaxy_shooter::input::{InputEvent, InputQueue};
use galaxy_shooter::snapshot::snapshot;

// ── Held-key constants ────────────────────────────────────────────────────────

/// Min frames between shots while Space is held.  Single presses always
/// fire; this only throttles auto-repeat.
const SHOOT_COOLDOWN: u32 = 6;

/// A key is considered "held" if its last press/repeat event arrived within
/// this many frames.  Covers terminals that don't emit key-release events.
const HOLD_WINDOW: u64 = 6;

/// Returns true if `key` was seen within the last `HOLD_WINDOW` frames.
fn is_held(key_frame: &HashMap<KeyCode, u64>, key: &KeyCode, frame: u64) -> bool {
    key_frame
        .get(key)
        .map(|&last| frame.saturating_sub(last) <= HOLD_WINDOW)
        .unwrap_or(false)
}

fn terminal_screen() -> std::io::Result<Screen> {
    let (width, height) = terminal::size()?;
    Ok(Screen { width, height })
}

// ── Title screen ──────────────────────────────────────────────────────────────

/// Blocks until the player starts (`true`) or quits (`false`).
fn show_title<W: Write>(
    out: &mut W,
    rx: &mpsc::Receiver<Event>,
    store: &mut FileHighScoreStore,
) -> std::io::Result<bool> {
    display::render_title(out, terminal_screen()?, &store.load_or_init())?;

    loop {
        if let Ok(Event::Key(KeyEvent { code, kind, .. })) = rx.recv() {
            if kind != KeyEventKind::Press {
                continue;
            }
            match code {
                KeyCode::Char(' ') | KeyCode::Enter => return Ok(true),
                KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => return Ok(false),
                _ => {}
            }
        }
    }
}

// ── Game loop ─────────────────────────────────────────────────────────────────

/// Runs until the player quits.
///
/// Terminal key events are folded into `InputEvent`s: a `key_frame` map
/// records the frame each key was last seen, and movement flips to "up" once
/// a key goes stale (or on an explicit release, where the terminal reports
/// one).  Simulated time is `frame * tick`, so the simulation never reads
/// the wall clock.
fn game_loop<W: Write>(
    out: &mut W,
    rx: &mpsc::Receiver<Event>,
    config: &GameConfig,
    store: &mut FileHighScoreStore,
) -> std::io::Result<()> {
    let mut rng = thread_rng();
    let tick_ms = config.tick.as_millis() as u64;

    let mut key_frame: HashMap<KeyCode, u64> = HashMap::new();
    let mut queue = InputQueue::new();
    let (mut left_held, mut right_held) = (false, false);
    let mut shoot_cooldown: u32 = 0;
    let mut frame: u64 = 0;

    let mut state = init_state(0);
    state.high_scores = store.load_or_init();

    loop {
        let frame_start = Instant::now();
        frame += 1;
        let now = frame * tick_ms;

        // ── Drain all pending input events (non-blocking) ─────────────────────
        while let Ok(Event::Key(KeyEvent { code, kind, modifiers, .. })) = rx.try_recv() {
            match kind {
                KeyEventKind::Press => {
                    key_frame.insert(code, frame);
                    match code {
                        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => return Ok(()),
                        KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => {
                            return Ok(());
                        }
                        KeyCode::Char(' ') => {
                            queue.push(InputEvent::Fire);
                            shoot_cooldown = SHOOT_COOLDOWN;
                        }
                        KeyCode::Enter | KeyCode::Char('r') | KeyCode::Char('R') => {
                            queue.push(InputEvent::Restart);
                        }
                        _ => {}
                    }
                }
                KeyEventKind::Repeat => {
                    key_frame.insert(code, frame);
                }
                KeyEventKind::Release => {
                    key_frame.remove(&code);
                }
            }
        }

        // ── Held keys → movement edges and auto-fire ──────────────────────────
        let left = [KeyCode::Left, KeyCode::Char('a'), KeyCode::Char('A')]
            .iter()
            .any(|k| is_held(&key_frame, k, frame));
        let right = [KeyCode::Right, KeyCode::Char('d'), KeyCode::Char('D')]
            .iter()
            .any(|k| is_held(&key_frame, k, frame));
        if left != left_held {
            queue.push(if left { InputEvent::MoveLeftDown } else { InputEvent::MoveLeftUp });
            left_held = left;
        }
        if right != right_held {
            queue.push(if right { InputEvent::MoveRightDown } else { InputEvent::MoveRightUp });
            right_held = right;
        }
        if shoot_cooldown == 0 && is_held(&key_frame, &KeyCode::Char(' '), frame) {
            queue.push(InputEvent::Fire);
            shoot_cooldown = SHOOT_COOLDOWN;
        }
        shoot_cooldown = shoot_cooldown.saturating_sub(1);

        // ── Simulation ────────────────────────────────────────────────────────
        let was_playing = state.status == GameStatus::Playing;
        state = tick(&state, &queue.drain(), now, &mut rng);
        if was_playing && state.status == GameStatus::GameOver {
            state = finish_game(&state, store, &config.player_name, now);
        }

        display::render(out, terminal_screen()?, &snapshot(&state))?;

        let elapsed = frame_start.elapsed();
        if elapsed < config.tick {
            thread::sleep(config.tick - elapsed);
        }
    }
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn init_logging(config: &GameConfig) -> Result<()> {
    // Logging goes to a file only; stderr would tear the alternate screen.
    let Some(path) = &config.log_path else {
        return Ok(());
    };
    let file = File::create(path)
        .with_context(|| format!("failed to create log file {}", path.display()))?;
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

fn main() -> Result<()> {
    let config = GameConfig::from_env();
    init_logging(&config)?;
    tracing::info!(
        high_scores = %config.high_score_path.display(),
        player = %config.player_name,
        tick_ms = config.tick.as_millis() as u64,
        "starting"
    );

    let mut store = FileHighScoreStore::new(&config.high_score_path);
    let mut out = BufWriter::new(stdout());

    terminal::enable_raw_mode().context("failed to enable raw mode")?;
    out.execute(terminal::EnterAlternateScreen)
        .context("failed to enter alternate screen")?;
    out.execute(cursor::Hide)?;

    // Request key-release (and key-repeat) events from the terminal.
    // Kitty-protocol terminals support this; others fall back gracefully.
    let keyboard_enhanced = out
        .execute(PushKeyboardEnhancementFlags(
            KeyboardEnhancementFlags::REPORT_EVENT_TYPES,
        ))
        .is_ok();

    // Dedicate a thread exclusively to blocking event reads, sending them
    // through a channel so the game loop never has to block on I/O.
    let (tx, rx) = mpsc::channel::<Event>();
    thread::spawn(move || {
        while let Ok(ev) = event::read() {
            if tx.send(ev).is_err() {
                break; // receiver dropped → program exiting
            }
        }
    });

    let result = match show_title(&mut out, &rx, &mut store) {
        Ok(true) => game_loop(&mut out, &rx, &config, &mut store),
        Ok(false) => Ok(()),
        Err(err) => Err(err),
    };

    // Always restore the terminal
    if keyboard_enhanced {
        let _ = out.execute(PopKeyboardEnhancementFlags);
    }
    let _ = out.execute(cursor::Show);
    let _ = out.execute(terminal::LeaveAlternateScreen);
    let _ = terminal::disable_raw_mode();

    result.context("terminal I/O failed")
}
