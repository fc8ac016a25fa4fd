/// Rendering layer.  All terminal I/O lives here.
///
/// Each function receives a mutable writer and an immutable snapshot of the
/// game.  No game logic is performed; this module only translates the
/// 800×600 play field into terminal cells.

use std::io::Write;

use crossterm::{
    cursor,
    style::{self, Color, Print},
    terminal,
    QueueableCommand,
};
use galaxy_shooter::constants::{FIELD_HEIGHT, FIELD_WIDTH};
use galaxy_shooter::entities::EnemyType;
use galaxy_shooter::geometry::Triangle;
use galaxy_shooter::highscores::HighScoreEntry;
use galaxy_shooter::snapshot::{EnemyView, FrameSnapshot};

// ── Colour palette ────────────────────────────────────────────────────────────

const C_BORDER: Color = Color::DarkBlue;
const C_HUD_SCORE: Color = Color::Yellow;
const C_HUD_WAVE: Color = Color::Cyan;
const C_HUD_LIVES: Color = Color::Red;
const C_PLAYER: Color = Color::White;
const C_PLAYER_FLASH: Color = Color::Red;
const C_ENEMY_SHOOTING: Color = Color::Red;
const C_ENEMY_SWOOPING: Color = Color::Green;
const C_BEAM: Color = Color::Cyan;
const C_LASER: Color = Color::Yellow;
const C_BULLET_ENEMY: Color = Color::Magenta;
const C_MESSAGE: Color = Color::White;
const C_HINT: Color = Color::DarkGrey;

/// Terminal size in cells.
#[derive(Clone, Copy, Debug)]
pub struct Screen {
    pub width: u16,
    pub height: u16,
}

impl Screen {
    /// Map a field coordinate to a cell inside the border (rows 2 .. h-3).
    fn cell(&self, x: i32, y: i32) -> (u16, u16) {
        let cols = self.width.saturating_sub(2).max(1) as i32;
        let rows = self.height.saturating_sub(4).max(1) as i32;
        let col = 1 + (x.clamp(0, FIELD_WIDTH - 1) * cols / FIELD_WIDTH);
        let row = 2 + (y.clamp(0, FIELD_HEIGHT - 1) * rows / FIELD_HEIGHT);
        (col as u16, row as u16)
    }

    fn in_play_area(&self, x: i32, y: i32) -> bool {
        (0..FIELD_WIDTH).contains(&x) && (0..FIELD_HEIGHT).contains(&y)
    }
}

// ── Public entry point ────────────────────────────────────────────────────────

/// Render one complete frame.
pub fn render<W: Write>(out: &mut W, screen: Screen, snap: &FrameSnapshot) -> std::io::Result<()> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;

    draw_border(out, screen)?;
    draw_hud(out, screen, snap)?;

    for enemy in &snap.enemies {
        if let Some(beam) = &enemy.beam {
            draw_beam(out, screen, beam)?;
        }
        draw_enemy(out, screen, enemy)?;
    }
    for &(x, y) in &snap.lasers {
        draw_projectile(out, screen, x, y, "║", C_LASER)?;
    }
    for &(x, y) in &snap.enemy_bullets {
        draw_projectile(out, screen, x, y, "↓", C_BULLET_ENEMY)?;
    }

    draw_player(out, screen, snap)?;
    draw_controls_hint(out, screen)?;

    if let Some(message) = &snap.message {
        draw_centered(out, screen, (screen.height / 2).saturating_sub(6), message, C_MESSAGE)?;
    }
    if snap.game_over {
        draw_game_over(out, screen, snap)?;
    }

    // Park cursor in a harmless spot and flush
    out.queue(style::ResetColor)?;
    out.queue(cursor::MoveTo(0, screen.height.saturating_sub(1)))?;
    out.flush()?;
    Ok(())
}

/// Title screen with the current high-score table.
pub fn render_title<W: Write>(
    out: &mut W,
    screen: Screen,
    high_scores: &[HighScoreEntry],
) -> std::io::Result<()> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;

    let cy = screen.height / 2;
    draw_centered(out, screen, cy.saturating_sub(6), "★  GALAXY  SHOOTER  ★", Color::Cyan)?;
    draw_centered(out, screen, cy.saturating_sub(4), "HIGH SCORES", Color::Yellow)?;
    draw_score_table(out, screen, cy.saturating_sub(3), high_scores)?;
    draw_centered(out, screen, cy + 1, "SPACE / ENTER : Start   Q : Quit", Color::White)?;
    draw_centered(
        out,
        screen,
        cy + 3,
        "← → / A D : Move   SPACE : Shoot",
        C_HINT,
    )?;

    out.queue(style::ResetColor)?;
    out.flush()?;
    Ok(())
}

// ── Border ────────────────────────────────────────────────────────────────────

fn draw_border<W: Write>(out: &mut W, screen: Screen) -> std::io::Result<()> {
    let w = screen.width as usize;
    let h = screen.height;

    out.queue(style::SetForegroundColor(C_BORDER))?;

    // Row 1: top bar
    out.queue(cursor::MoveTo(0, 1))?;
    out.queue(Print(format!("┌{}┐", "─".repeat(w.saturating_sub(2)))))?;

    // Row h-2: bottom bar
    out.queue(cursor::MoveTo(0, h.saturating_sub(2)))?;
    out.queue(Print(format!("└{}┘", "─".repeat(w.saturating_sub(2)))))?;

    // Side walls
    for row in 2..h.saturating_sub(2) {
        out.queue(cursor::MoveTo(0, row))?;
        out.queue(Print("│"))?;
        out.queue(cursor::MoveTo(screen.width.saturating_sub(1), row))?;
        out.queue(Print("│"))?;
    }

    Ok(())
}

// ── HUD (row 0) ───────────────────────────────────────────────────────────────

fn draw_hud<W: Write>(out: &mut W, screen: Screen, snap: &FrameSnapshot) -> std::io::Result<()> {
    // Score, left
    out.queue(cursor::MoveTo(1, 0))?;
    out.queue(style::SetForegroundColor(C_HUD_SCORE))?;
    out.queue(Print(format!("Score:{:>7}", snap.score)))?;

    // Wave, centre
    let wave_str = format!("[ WAVE {} ]", snap.wave);
    let wx = (screen.width / 2).saturating_sub(wave_str.len() as u16 / 2);
    out.queue(cursor::MoveTo(wx, 0))?;
    out.queue(style::SetForegroundColor(C_HUD_WAVE))?;
    out.queue(Print(&wave_str))?;

    // Lives, right
    let lives_str = format!("Lives:{}", "♥".repeat(snap.lives as usize));
    let rx = screen
        .width
        .saturating_sub(lives_str.chars().count() as u16 + 1);
    out.queue(cursor::MoveTo(rx, 0))?;
    out.queue(style::SetForegroundColor(C_HUD_LIVES))?;
    out.queue(Print(&lives_str))?;

    Ok(())
}

// ── Entities ──────────────────────────────────────────────────────────────────

fn draw_player<W: Write>(out: &mut W, screen: Screen, snap: &FrameSnapshot) -> std::io::Result<()> {
    let colour = if snap.hero_flashing {
        C_PLAYER_FLASH
    } else {
        C_PLAYER
    };
    let (col, row) = screen.cell(snap.hero_x, snap.hero_y);
    out.queue(style::SetForegroundColor(colour))?;
    out.queue(cursor::MoveTo(col, row))?;
    out.queue(Print("/▲\\"))?;
    Ok(())
}

/// Capturing enemies lose colour as they take damage.
fn capturing_colour(damage: u32) -> Color {
    let blue = 200u32.saturating_sub(damage * 40).max(50) as u8;
    Color::Rgb {
        r: 200,
        g: 150,
        b: blue,
    }
}

fn draw_enemy<W: Write>(out: &mut W, screen: Screen, enemy: &EnemyView) -> std::io::Result<()> {
    let (col, row) = screen.cell(enemy.x, enemy.y);
    let (sprite, colour) = match enemy.kind {
        EnemyType::Shooting if enemy.damage > 0 => ("«×»", Color::DarkRed),
        EnemyType::Shooting => ("«▼»", C_ENEMY_SHOOTING),
        EnemyType::Swooping => ("(◎)", C_ENEMY_SWOOPING),
        EnemyType::Capturing => ("<Ψ>", capturing_colour(enemy.damage)),
    };
    out.queue(style::SetForegroundColor(colour))?;
    out.queue(cursor::MoveTo(col, row))?;
    out.queue(Print(sprite))?;
    Ok(())
}

/// Fill the beam triangle row by row between its apex and base.
fn draw_beam<W: Write>(out: &mut W, screen: Screen, beam: &Triangle) -> std::io::Result<()> {
    let [(apex_x, apex_y), (left_x, base_y), (right_x, _)] = beam.points;
    let (_, top_row) = screen.cell(apex_x, apex_y);
    let (_, bottom_row) = screen.cell(apex_x, base_y);
    let span_rows = (bottom_row.saturating_sub(top_row)).max(1) as i32;

    out.queue(style::SetForegroundColor(C_BEAM))?;
    for (i, row) in (top_row..=bottom_row).enumerate() {
        let t = i as i32;
        let lx = apex_x + (left_x - apex_x) * t / span_rows;
        let rx = apex_x + (right_x - apex_x) * t / span_rows;
        let (lcol, _) = screen.cell(lx, apex_y);
        let (rcol, _) = screen.cell(rx, apex_y);
        out.queue(cursor::MoveTo(lcol, row))?;
        out.queue(Print("░".repeat((rcol - lcol + 1) as usize)))?;
    }
    Ok(())
}

fn draw_projectile<W: Write>(
    out: &mut W,
    screen: Screen,
    x: i32,
    y: i32,
    glyph: &str,
    colour: Color,
) -> std::io::Result<()> {
    if !screen.in_play_area(x, y) {
        return Ok(());
    }
    let (col, row) = screen.cell(x, y);
    out.queue(cursor::MoveTo(col, row))?;
    out.queue(style::SetForegroundColor(colour))?;
    out.queue(Print(glyph))?;
    Ok(())
}

// ── Text helpers ──────────────────────────────────────────────────────────────

fn draw_centered<W: Write>(
    out: &mut W,
    screen: Screen,
    row: u16,
    text: &str,
    colour: Color,
) -> std::io::Result<()> {
    let col = (screen.width / 2).saturating_sub(text.chars().count() as u16 / 2);
    out.queue(cursor::MoveTo(col, row))?;
    out.queue(style::SetForegroundColor(colour))?;
    out.queue(Print(text))?;
    Ok(())
}

fn draw_score_table<W: Write>(
    out: &mut W,
    screen: Screen,
    first_row: u16,
    table: &[HighScoreEntry],
) -> std::io::Result<()> {
    for (i, entry) in table.iter().enumerate() {
        let line = format!("{}. {}  {:>7}", i + 1, entry.name, entry.score);
        draw_centered(out, screen, first_row + i as u16, &line, Color::White)?;
    }
    Ok(())
}

// ── Controls hint (last row) ──────────────────────────────────────────────────

fn draw_controls_hint<W: Write>(out: &mut W, screen: Screen) -> std::io::Result<()> {
    out.queue(cursor::MoveTo(1, screen.height.saturating_sub(1)))?;
    out.queue(style::SetForegroundColor(C_HINT))?;
    out.queue(Print("← → / A D : Move   SPACE : Shoot   Q : Quit"))?;
    Ok(())
}

// ── Game-over overlay ─────────────────────────────────────────────────────────

fn draw_game_over<W: Write>(out: &mut W, screen: Screen, snap: &FrameSnapshot) -> std::io::Result<()> {
    let lines: &[(&str, Color)] = &[
        ("╔════════════════════╗", Color::Red),
        ("║    GAME  OVER      ║", Color::Red),
        ("╚════════════════════╝", Color::Red),
    ];
    let start_row = (screen.height / 2).saturating_sub(4);

    for (i, (msg, colour)) in lines.iter().enumerate() {
        draw_centered(out, screen, start_row + i as u16, msg, *colour)?;
    }

    let score_row = start_row + lines.len() as u16;
    let score_line = format!("Final Score: {:>7}", snap.score);
    draw_centered(out, screen, score_row, &score_line, Color::Yellow)?;
    draw_score_table(out, screen, score_row + 2, &snap.high_scores)?;

    let hint_row = score_row + 3 + snap.high_scores.len() as u16;
    draw_centered(out, screen, hint_row, "ENTER / R - Play Again  Q - Quit", Color::White)?;

    Ok(())
}
