use std::io::{stderr, Stderr};

use anyhow::{Context, Result};
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Terminal,
};

use crate::game::{GameConfig, GridPoint, CELL};

use super::renderer::{Renderer, Rgb, Sprite};

const BACKGROUND: Color = Color::Rgb(0, 106, 0);

/// Characters per cell; cells are drawn two columns wide to look square
const CELL_CHARS: usize = 2;

/// Frame under construction: everything drawn since the last background wipe
#[derive(Debug, Default)]
struct Scene {
    sprites: Vec<(GridPoint, Sprite)>,
    texts: Vec<(GridPoint, String, Rgb)>,
}

/// Ratatui frontend
///
/// Owns the terminal for the lifetime of the game: raw mode and the
/// alternate screen are entered on construction and left again in
/// `shutdown`.
pub struct TerminalRenderer {
    terminal: Terminal<CrosstermBackend<Stderr>>,
    cols: i32,
    rows: i32,
    scene: Scene,
}

impl TerminalRenderer {
    pub fn new(config: &GameConfig) -> Result<Self> {
        enable_raw_mode().context("Failed to enable raw mode")?;
        let mut stderr = stderr();
        execute!(stderr, EnterAlternateScreen).context("Failed to enter alternate screen")?;
        let backend = CrosstermBackend::new(stderr);
        let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;
        terminal.hide_cursor().context("Failed to hide cursor")?;
        terminal.clear().context("Failed to clear terminal")?;

        Ok(Self {
            terminal,
            // The far edges are reachable cells, hence the extra column and row
            cols: config.width / CELL + 1,
            rows: config.height / CELL + 1,
            scene: Scene::default(),
        })
    }
}

impl Renderer for TerminalRenderer {
    fn draw_background(&mut self) {
        self.scene = Scene::default();
    }

    fn draw_sprite(&mut self, at: GridPoint, sprite: Sprite) {
        self.scene.sprites.push((at, sprite));
    }

    fn draw_text(&mut self, at: GridPoint, text: &str, color: Rgb) {
        self.scene.texts.push((at, text.to_string(), color));
    }

    fn present(&mut self) -> Result<()> {
        let lines = compose(&self.scene, self.cols, self.rows);
        self.terminal
            .draw(move |frame| {
                let board = Paragraph::new(lines)
                    .style(Style::default().bg(BACKGROUND))
                    .block(
                        Block::default()
                            .borders(Borders::ALL)
                            .border_type(BorderType::Double)
                            .border_style(Style::default().fg(Color::White))
                            .title(" Snakes and Apples "),
                    );
                frame.render_widget(board, frame.area());
            })
            .context("Failed to draw frame")?;
        Ok(())
    }

    fn shutdown(&mut self) -> Result<()> {
        disable_raw_mode().context("Failed to disable raw mode")?;
        execute!(self.terminal.backend_mut(), LeaveAlternateScreen)
            .context("Failed to leave alternate screen")?;
        self.terminal.show_cursor().context("Failed to show cursor")?;
        Ok(())
    }
}

fn base_style() -> Style {
    Style::default().bg(BACKGROUND)
}

fn sprite_glyph(sprite: Sprite) -> (&'static str, Style) {
    match sprite {
        Sprite::Block => ("■ ", base_style().fg(Color::Black)),
        Sprite::Apple => (
            "O ",
            base_style().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
    }
}

fn text_style(color: Rgb) -> Style {
    let Rgb(r, g, b) = color;
    base_style().fg(Color::Rgb(r, g, b))
}

/// Points with a negative component sit outside the playfield (the growth
/// sentinel) and are never painted
fn on_grid(at: GridPoint) -> bool {
    at.x >= 0 && at.y >= 0
}

fn compose(scene: &Scene, cols: i32, rows: i32) -> Vec<Line<'static>> {
    (0..rows).map(|row| compose_row(scene, cols, row)).collect()
}

/// Build one row: a cell layer first, then text spliced over it
///
/// Text may run past the grid's right edge; the row is extended as needed.
fn compose_row(scene: &Scene, cols: i32, row: i32) -> Line<'static> {
    let mut chars: Vec<(char, Style)> = Vec::with_capacity(cols as usize * CELL_CHARS);

    for col in 0..cols {
        let sprite = scene
            .sprites
            .iter()
            .rev()
            .find(|(at, _)| on_grid(*at) && at.col() == col && at.row() == row)
            .map(|&(_, sprite)| sprite);

        let (glyph, style) = match sprite {
            Some(sprite) => sprite_glyph(sprite),
            None => ("  ", base_style()),
        };
        for ch in glyph.chars() {
            chars.push((ch, style));
        }
    }

    for (at, text, color) in &scene.texts {
        if !on_grid(*at) || at.row() != row {
            continue;
        }
        let start = at.col() as usize * CELL_CHARS;
        let end = start + text.chars().count();
        if chars.len() < end {
            chars.resize(end, (' ', base_style()));
        }
        for (i, ch) in text.chars().enumerate() {
            chars[start + i] = (ch, text_style(*color));
        }
    }

    merge_spans(chars)
}

/// Collapse equal-styled runs of characters into spans
fn merge_spans(chars: Vec<(char, Style)>) -> Line<'static> {
    let mut spans: Vec<Span<'static>> = Vec::new();
    let mut run = String::new();
    let mut run_style = Style::default();

    for (ch, style) in chars {
        if style != run_style && !run.is_empty() {
            spans.push(Span::styled(std::mem::take(&mut run), run_style));
        }
        run_style = style;
        run.push(ch);
    }
    if !run.is_empty() {
        spans.push(Span::styled(run, run_style));
    }

    Line::from(spans)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text_of(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn test_empty_scene_is_blank() {
        let lines = compose(&Scene::default(), 4, 3);
        assert_eq!(lines.len(), 3);
        for line in &lines {
            assert_eq!(text_of(line), "        ");
        }
    }

    #[test]
    fn test_sprite_lands_on_its_cell() {
        let scene = Scene {
            sprites: vec![(GridPoint::new(80, 40), Sprite::Block)],
            texts: vec![],
        };
        let lines = compose(&scene, 4, 3);
        assert_eq!(text_of(&lines[0]), "        ");
        assert_eq!(text_of(&lines[1]), "    ■   ");
    }

    #[test]
    fn test_apple_glyph() {
        let scene = Scene {
            sprites: vec![(GridPoint::new(0, 0), Sprite::Apple)],
            texts: vec![],
        };
        let lines = compose(&scene, 4, 1);
        assert_eq!(text_of(&lines[0]), "O       ");
    }

    #[test]
    fn test_off_grid_sprite_is_skipped() {
        let scene = Scene {
            sprites: vec![(GridPoint::OFF_GRID, Sprite::Block)],
            texts: vec![],
        };
        let lines = compose(&scene, 4, 3);
        for line in &lines {
            assert_eq!(text_of(line), "        ");
        }
    }

    #[test]
    fn test_later_sprite_wins_the_cell() {
        let scene = Scene {
            sprites: vec![
                (GridPoint::new(0, 0), Sprite::Block),
                (GridPoint::new(0, 0), Sprite::Apple),
            ],
            texts: vec![],
        };
        let lines = compose(&scene, 2, 1);
        assert_eq!(text_of(&lines[0]), "O   ");
    }

    #[test]
    fn test_text_splices_and_extends_the_row() {
        let scene = Scene {
            sprites: vec![],
            texts: vec![(GridPoint::new(120, 0), "Score: 1".to_string(), Rgb(200, 200, 200))],
        };
        let lines = compose(&scene, 4, 1);
        // Column 3 starts at character 6; the row grows past the grid edge
        assert_eq!(text_of(&lines[0]), "      Score: 1");
    }

    #[test]
    fn test_text_overwrites_sprites() {
        let scene = Scene {
            sprites: vec![(GridPoint::new(0, 0), Sprite::Block)],
            texts: vec![(GridPoint::new(0, 0), "XY".to_string(), Rgb(255, 255, 255))],
        };
        let lines = compose(&scene, 2, 1);
        assert_eq!(text_of(&lines[0]), "XY  ");
    }

    #[test]
    fn test_classic_layout_dimensions() {
        let config = GameConfig::default();
        assert_eq!(config.width / CELL + 1, 21);
        assert_eq!(config.height / CELL + 1, 13);
    }
}
