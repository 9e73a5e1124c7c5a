//! Status column overlay
//!
//! Fixed-position text right of the playfield. Drawn after the sector so
//! the redraw cannot clobber it.

use crate::models::constants::{Color, HUD_COLUMN, LRS_CELL_WIDTH, LRS_COLUMN};
use crate::models::errors::GameResult;
use crate::models::player::Player;
use crate::models::star_system::StarSystem;
use crate::services::scan::LongRangeScan;
use crate::ui::surface::DisplaySurface;

pub const TITLE: &str = "space battle game";
pub const UNKNOWN_READOUT: &str = "?:?:?";

const TITLE_ROW: usize = 1;
const POWER_ROW: usize = 3;
const SHIELDS_ROW: usize = 4;
const DAMAGE_ROW: usize = 5;
const LOCATION_ROW: usize = 7;
const LRS_TITLE_ROW: usize = 10;
const LRS_FIRST_ROW: usize = 12;

/// Draw the title, vitals, location and the long range scan block.
pub fn render_hud(
    player: &Player,
    scan: &LongRangeScan,
    surface: &mut dyn DisplaySurface,
) -> GameResult<()> {
    surface.write_str(TITLE_ROW, HUD_COLUMN, TITLE, Color::White)?;
    write_stat(surface, POWER_ROW, "power", player.power as usize)?;
    write_stat(surface, SHIELDS_ROW, "shields", player.shields as usize)?;
    write_stat(surface, DAMAGE_ROW, "damage", player.damage as usize)?;
    write_stat(surface, LOCATION_ROW, "location", player.current_system)?;
    render_long_range(scan, surface)
}

fn write_stat(
    surface: &mut dyn DisplaySurface,
    row: usize,
    label: &str,
    value: usize,
) -> GameResult<()> {
    surface.write_str(row, HUD_COLUMN, label, Color::LightBlue)?;
    let value = format!(": {}", value);
    surface.write_str(row, HUD_COLUMN + label.len(), &value, Color::White)
}

fn render_long_range(scan: &LongRangeScan, surface: &mut dyn DisplaySurface) -> GameResult<()> {
    surface.write_str(LRS_TITLE_ROW, HUD_COLUMN, "long range scan", Color::Green)?;
    for (r, row) in scan.cells.iter().enumerate() {
        for (c, cell) in row.iter().enumerate() {
            let color = if (r, c) == (1, 1) { Color::White } else { Color::Cyan };
            surface.write_str(
                LRS_FIRST_ROW + r * 2,
                LRS_COLUMN + c * LRS_CELL_WIDTH,
                &readout(cell),
                color,
            )?;
        }
    }
    Ok(())
}

/// `klingons:bases:stars`, or `?:?:?` when the sensors have no data.
pub fn readout(cell: &Option<StarSystem>) -> String {
    cell.map_or_else(|| UNKNOWN_READOUT.to_string(), |s| s.readout())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::surface::Screen;

    fn scan_with(cells: [[Option<StarSystem>; 3]; 3]) -> LongRangeScan {
        LongRangeScan { cells }
    }

    #[test]
    fn vitals_are_drawn_on_their_rows() {
        let mut screen = Screen::new();
        let player = Player::new();
        render_hud(&player, &scan_with([[None; 3]; 3]), &mut screen).unwrap();
        assert!(screen.row_text(1).contains("space battle game"));
        assert!(screen.row_text(3).contains("power: 100"));
        assert!(screen.row_text(4).contains("shields: 0"));
        assert!(screen.row_text(5).contains("damage: 0"));
        assert!(screen.row_text(7).contains("location: 36"));
        assert_eq!(screen.color_at(3, HUD_COLUMN), Some(Color::LightBlue));
    }

    #[test]
    fn long_range_block_matches_galaxy_layout() {
        let k = |n| Some(StarSystem { klingons: n, ..StarSystem::default() });
        let cells = [[k(0), k(1), k(2)], [None, k(1), None], [k(2), k(0), k(1)]];
        let mut screen = Screen::new();
        render_hud(&Player::new(), &scan_with(cells), &mut screen).unwrap();
        assert!(screen.row_text(12).ends_with("0:0:0 1:0:0 2:0:0 "));
        assert!(screen.row_text(14).ends_with("?:?:? 1:0:0 ?:?:? "));
        assert!(screen.row_text(16).ends_with("2:0:0 0:0:0 1:0:0 "));
        assert_eq!(screen.color_at(14, LRS_COLUMN + LRS_CELL_WIDTH), Some(Color::White));
    }

    #[test]
    fn hud_stays_right_of_playfield() {
        let mut screen = Screen::new();
        render_hud(&Player::new(), &scan_with([[None; 3]; 3]), &mut screen).unwrap();
        for row in 0..screen.height() {
            for col in 0..LRS_COLUMN {
                assert_eq!(screen.glyph_at(row, col), Some(' '));
            }
        }
    }

    #[test]
    fn readout_marks_missing_data() {
        assert_eq!(readout(&None), "?:?:?");
        let s = StarSystem { planets: 4, bases: 1, stars: 1, klingons: 2 };
        assert_eq!(readout(&Some(s)), "2:1:1");
    }
}
