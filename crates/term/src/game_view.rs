//! GameView: maps a `GameSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::GameSnapshot;
use crate::fb::{FrameBuffer, Rgb, Style};
use crate::types::{BOARD_HEIGHT, BOARD_WIDTH};

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

const BORDER: Style = Style::fg(Rgb::new(120, 120, 120));
const LABEL: Style = Style::fg(Rgb::new(150, 150, 150));
const VALUE: Style = Style::fg(Rgb::new(235, 235, 235)).bold();
const ALERT: Style = Style::fg(Rgb::new(240, 90, 90)).bold();
const EMPTY: Style = Style::fg(Rgb::new(55, 55, 55));

/// Side panel gap and width, in terminal columns
const PANEL_GAP: u16 = 2;
const PANEL_WIDTH: u16 = 30;

/// A lightweight terminal renderer for the game.
pub struct GameView {
    /// Board cell width in terminal columns.
    cell_w: u16,
    pause_key: char,
}

impl Default for GameView {
    fn default() -> Self {
        // Two columns per cell roughly squares the cells on common fonts.
        Self {
            cell_w: 2,
            pause_key: 'p',
        }
    }
}

impl GameView {
    pub fn with_pause_key(mut self, pause_key: char) -> Self {
        self.pause_key = pause_key;
        self
    }

    fn board_size(&self) -> (u16, u16) {
        (
            BOARD_WIDTH as u16 * self.cell_w + 2,
            BOARD_HEIGHT as u16 + 2,
        )
    }

    /// Total columns and rows the layout needs.
    pub fn required_size(&self) -> (u16, u16) {
        let (bw, bh) = self.board_size();
        (bw + PANEL_GAP + PANEL_WIDTH, bh)
    }

    /// Render a snapshot into a freshly sized framebuffer.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        let (need_w, need_h) = self.required_size();
        if viewport.width < need_w || viewport.height < need_h {
            fb.put_str(0, 0, "Terminal too small", ALERT);
            return fb;
        }

        let ox = (viewport.width - need_w) / 2;
        let oy = (viewport.height - need_h) / 2;
        self.draw_board(&mut fb, snap, ox, oy);

        let (bw, _) = self.board_size();
        self.draw_panel(&mut fb, snap, ox + bw + PANEL_GAP, oy);
        fb
    }

    fn draw_board(&self, fb: &mut FrameBuffer, snap: &GameSnapshot, ox: u16, oy: u16) {
        let (bw, bh) = self.board_size();

        for x in 1..bw - 1 {
            fb.put_char(ox + x, oy, '─', BORDER);
            fb.put_char(ox + x, oy + bh - 1, '─', BORDER);
        }
        for y in 1..bh - 1 {
            fb.put_char(ox, oy + y, '│', BORDER);
            fb.put_char(ox + bw - 1, oy + y, '│', BORDER);
        }
        fb.put_char(ox, oy, '┌', BORDER);
        fb.put_char(ox + bw - 1, oy, '┐', BORDER);
        fb.put_char(ox, oy + bh - 1, '└', BORDER);
        fb.put_char(ox + bw - 1, oy + bh - 1, '┘', BORDER);

        for (y, row) in snap.grid.iter().enumerate() {
            for (x, cell) in row.iter().enumerate() {
                let (ch, style) = match cell {
                    Some(color) => ('█', Style::fg(Rgb::from(*color))),
                    None => ('·', EMPTY),
                };
                let cx = ox + 1 + x as u16 * self.cell_w;
                let cy = oy + 1 + y as u16;
                for dx in 0..self.cell_w {
                    // Keep empty cells sparse: one dot per cell.
                    let glyph = if cell.is_none() && dx > 0 { ' ' } else { ch };
                    fb.put_char(cx + dx, cy, glyph, style);
                }
            }
        }

        let banner = if snap.playable() {
            None
        } else if snap.game_over {
            Some("GAME OVER")
        } else {
            Some("PAUSED")
        };
        if let Some(text) = banner {
            let x = ox + (bw.saturating_sub(text.len() as u16)) / 2;
            fb.put_str(x, oy + bh / 2, text, ALERT);
        }
    }

    fn draw_panel(&self, fb: &mut FrameBuffer, snap: &GameSnapshot, px: u16, py: u16) {
        fb.put_str(px, py + 1, "Score", LABEL);
        fb.put_str(px, py + 2, &snap.score.to_string(), VALUE);

        fb.put_str(px, py + 4, "Level", LABEL);
        fb.put_str(px, py + 5, snap.level.label(), VALUE);

        fb.put_str(px, py + 7, "Next shape", LABEL);
        let style = Style::fg(Rgb::from(snap.next.color));
        for &(dx, dy) in &snap.next.cells {
            let x = px + dx as u16 * self.cell_w;
            let y = py + 8 + dy as u16;
            for i in 0..self.cell_w {
                fb.put_char(x + i, y, '█', style);
            }
        }

        let pause = format!("{}    pause", self.pause_key);
        let help = [
            "←/→  move",
            "↓    soft drop",
            "↑    rotate",
            pause.as_str(),
            "r    restart",
            "q    quit",
        ];
        for (i, line) in help.iter().enumerate() {
            fb.put_str(px, py + 14 + i as u16, line, LABEL);
        }
    }
}
