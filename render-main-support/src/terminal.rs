use crate::error::RenderError;
use crate::palette::Palette;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::style::{Color, Print, ResetColor, SetForegroundColor};
use crossterm::{queue, terminal};
use log::{info, warn};
use ring_grid::{Cell, GlyphCell, Row, RowCell};
use std::io::{self, Write};
use std::thread;
use std::time::{Duration, Instant};

pub const BLOCK_GLYPH: char = '█';

const FALLBACK_WIDTH: usize = 80;

/// How a cell prints: a color and a character, or `None` for blank space.
pub trait TerminalGlyph {
    fn styled(&self, palette: &Palette) -> Option<([u8; 3], char)>;
}

impl TerminalGlyph for Cell {
    fn styled(&self, palette: &Palette) -> Option<([u8; 3], char)> {
        (!self.is_background()).then(|| (palette.cell_rgb(*self), BLOCK_GLYPH))
    }
}

impl TerminalGlyph for GlyphCell {
    fn styled(&self, _palette: &Palette) -> Option<([u8; 3], char)> {
        (!self.is_void()).then(|| (self.rgb, self.glyph_char()))
    }
}

pub fn terminal_width() -> usize {
    match terminal::size() {
        Ok((cols, _rows)) if cols > 0 => cols as usize,
        Ok(_) => FALLBACK_WIDTH,
        Err(err) => {
            warn!("terminal size unavailable, using {FALLBACK_WIDTH} columns: {err}");
            FALLBACK_WIDTH
        }
    }
}

pub fn write_row<C, W>(
    out: &mut W,
    row: &Row<C>,
    palette: &Palette,
    line_end: &str,
) -> io::Result<()>
where
    C: RowCell + TerminalGlyph,
    W: Write,
{
    for cell in row.cells_iter() {
        match cell.styled(palette) {
            Some(([r, g, b], glyph)) => {
                queue!(out, SetForegroundColor(Color::Rgb { r, g, b }), Print(glyph))?
            }
            None => queue!(out, Print(' '))?,
        }
    }
    queue!(out, ResetColor, Print(line_end))
}

/// Prints rows as they arrive, waiting `delay` between them. In a terminal,
/// `q`, `Esc` or `Ctrl-C` stops the stream at the next generation boundary.
/// Returns the number of rows printed.
pub fn stream<C, I>(rows: I, delay: Duration, palette: &Palette) -> Result<usize, RenderError>
where
    C: RowCell + TerminalGlyph,
    I: IntoIterator<Item = Row<C>>,
{
    let raw_mode = match terminal::enable_raw_mode() {
        Ok(()) => true,
        Err(err) => {
            warn!("raw mode unavailable, stop keys disabled: {err}");
            false
        }
    };
    let mut stdout = io::stdout().lock();
    let result = stream_rows(&mut stdout, rows, delay, palette, raw_mode);
    if raw_mode {
        terminal::disable_raw_mode()?;
    }
    result
}

fn stream_rows<C, I, W>(
    out: &mut W,
    rows: I,
    delay: Duration,
    palette: &Palette,
    raw_mode: bool,
) -> Result<usize, RenderError>
where
    C: RowCell + TerminalGlyph,
    I: IntoIterator<Item = Row<C>>,
    W: Write,
{
    // Raw mode does not translate "\n" into a carriage return.
    let line_end = if raw_mode { "\r\n" } else { "\n" };
    let mut printed = 0;
    for row in rows {
        write_row(out, &row, palette, line_end)?;
        out.flush()?;
        printed += 1;

        if raw_mode {
            if stop_requested(delay)? {
                info!("stopped after {printed} generations");
                break;
            }
        } else {
            thread::sleep(delay);
        }
    }
    Ok(printed)
}

fn stop_requested(timeout: Duration) -> io::Result<bool> {
    let deadline = Instant::now() + timeout;
    loop {
        let remaining = deadline.saturating_duration_since(Instant::now());
        if !event::poll(remaining)? {
            return Ok(false);
        }
        if let Event::Key(KeyEvent {
            code,
            modifiers,
            kind: KeyEventKind::Press,
            ..
        }) = event::read()?
        {
            match code {
                KeyCode::Char('q') | KeyCode::Esc => return Ok(true),
                KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => {
                    return Ok(true);
                }
                _ => (),
            }
        }
        if remaining.is_zero() {
            return Ok(false);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ring_grid::{Evolver, EvolverConfig, Random, Ruleset};

    // crossterm drops color codes when NO_COLOR is set.
    fn colors_enabled() -> bool {
        std::env::var_os("NO_COLOR").is_none_or(|value| value.is_empty())
    }

    fn printed<C: RowCell + TerminalGlyph>(row: &Row<C>, line_end: &str) -> String {
        let mut out = Vec::new();
        write_row(&mut out, row, &Palette::default(), line_end).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn palette_cells_print_colored_blocks() {
        let row = Row::from_values(&[0, 1, 4]).unwrap();
        let text = printed(&row, "\r\n");
        assert!(text.starts_with(' '));
        if colors_enabled() {
            assert!(text.contains("\x1b[38;2;217;83;79m█"));
            assert!(text.contains("\x1b[38;2;66;139;202m█"));
        }
        assert_eq!(text.matches(BLOCK_GLYPH).count(), 2);
        assert!(text.ends_with("\r\n"));
    }

    #[test]
    fn glyph_cells_print_their_own_color() {
        let lit = GlyphCell {
            rgb: [70, 80, 90],
            glyph: b'&',
        };
        let row = Row::new(vec![GlyphCell::VOID, lit]).unwrap();
        let text = printed(&row, "\n");
        assert!(text.starts_with(' '));
        assert!(text.contains('&'));
        if colors_enabled() {
            assert!(text.contains("\x1b[38;2;70;80;90m&"));
        }
        assert!(text.ends_with('\n'));
    }

    #[test]
    fn streams_bounded_rows() {
        let evolver = Evolver::<Cell>::new(EvolverConfig {
            width: 10,
            start_cells: 1,
            rule: Ruleset::Sum,
        })
        .unwrap();
        let rows = evolver.generations(&mut Random::from_seed(2)).take(4);
        let mut out = Vec::new();
        let count =
            stream_rows(&mut out, rows, Duration::ZERO, &Palette::default(), false).unwrap();
        assert_eq!(count, 4);
        let text = String::from_utf8(out).unwrap();
        assert_eq!(text.lines().count(), 4);
    }

    #[test]
    fn styled_skips_blank_cells() {
        let palette = Palette::default();
        assert_eq!(Cell::BACKGROUND.styled(&palette), None);
        assert_eq!(GlyphCell::VOID.styled(&palette), None);
        assert_eq!(
            Cell::new(3).unwrap().styled(&palette),
            Some(([92, 184, 92], BLOCK_GLYPH))
        );
    }
}
