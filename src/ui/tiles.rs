//! Sector tile renderer
//!
//! Draws the 20x20 sector inside a one-cell frame at the top-left of the
//! display surface. Every call redraws the whole 22x22 playfield.

use crate::models::constants::{Color, SectorContent, PLAYFIELD_SIZE};
use crate::models::errors::GameResult;
use crate::models::position::SectorPosition;
use crate::models::sector_map::SectorMap;
use crate::ui::surface::DisplaySurface;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BorderPart {
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
    Top,
    Bottom,
    Left,
    Right,
}

/// Glyph set for tiles and the frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum Tileset {
    /// Card-suit and box-drawing glyphs.
    #[default]
    Graphics,
    /// Plain letters with a `%` frame.
    Text,
}

impl Tileset {
    pub fn glyph(&self, content: SectorContent) -> char {
        match (self, content) {
            (_, SectorContent::Empty) => ' ',
            (_, SectorContent::Debris) => '.',
            (_, SectorContent::Star) => '*',
            (Tileset::Graphics, SectorContent::Planet) => '●',
            (Tileset::Graphics, SectorContent::Base) => '♣',
            (Tileset::Graphics, SectorContent::Klingon) => '╳',
            (Tileset::Graphics, SectorContent::Player) => '♠',
            (Tileset::Text, SectorContent::Planet) => 'w',
            (Tileset::Text, SectorContent::Base) => 'A',
            (Tileset::Text, SectorContent::Klingon) => 'k',
            (Tileset::Text, SectorContent::Player) => 'e',
        }
    }

    pub fn border(&self, part: BorderPart) -> char {
        match self {
            Tileset::Text => '%',
            Tileset::Graphics => match part {
                BorderPart::TopLeft => '┌',
                BorderPart::TopRight => '┐',
                BorderPart::BottomLeft => '└',
                BorderPart::BottomRight => '┘',
                BorderPart::Top | BorderPart::Bottom => '─',
                BorderPart::Left | BorderPart::Right => '│',
            },
        }
    }
}

/// Color for a tile at sector row/column.
/// Planets alternate by the parity of `row * col`.
pub fn tile_color(content: SectorContent, row: usize, col: usize) -> Color {
    match content {
        SectorContent::Planet if (row * col) % 2 == 1 => Color::LightBlue,
        SectorContent::Planet => Color::LightGreen,
        SectorContent::Klingon => Color::LightRed,
        SectorContent::Star => Color::Yellow,
        SectorContent::Base => Color::LightGrey,
        _ => Color::White,
    }
}

/// Which frame piece, if any, sits at a playfield cell.
pub fn border_part(row: usize, col: usize) -> Option<BorderPart> {
    let last = PLAYFIELD_SIZE - 1;
    match (row, col) {
        (0, 0) => Some(BorderPart::TopLeft),
        (0, c) if c == last => Some(BorderPart::TopRight),
        (r, 0) if r == last => Some(BorderPart::BottomLeft),
        (r, c) if r == last && c == last => Some(BorderPart::BottomRight),
        (0, c) if c < last => Some(BorderPart::Top),
        (r, c) if r == last && c < last => Some(BorderPart::Bottom),
        (r, 0) if r < last => Some(BorderPart::Left),
        (r, c) if c == last && r < last => Some(BorderPart::Right),
        _ => None,
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct TileRenderer {
    pub tileset: Tileset,
    /// Write every tile in the default color.
    pub monochrome: bool,
}

impl TileRenderer {
    pub fn new(tileset: Tileset, monochrome: bool) -> Self {
        TileRenderer { tileset, monochrome }
    }

    /// Draw the frame and every sector cell at (y + 1, x + 1).
    pub fn render(&self, sector: &SectorMap, surface: &mut dyn DisplaySurface) -> GameResult<()> {
        self.render_border(surface)?;
        for (SectorPosition { x, y }, content) in sector.cells() {
            let color = if self.monochrome {
                Color::default()
            } else {
                tile_color(content, y, x)
            };
            surface.write(y + 1, x + 1, self.tileset.glyph(content), color)?;
        }
        Ok(())
    }

    fn render_border(&self, surface: &mut dyn DisplaySurface) -> GameResult<()> {
        for row in 0..PLAYFIELD_SIZE {
            for col in 0..PLAYFIELD_SIZE {
                if let Some(part) = border_part(row, col) {
                    surface.write(row, col, self.tileset.border(part), Color::default())?;
                }
            }
        }
        Ok(())
    }
}
