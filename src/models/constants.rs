pub const GALAXY_WIDTH: usize = 9;
pub const GALAXY_SYSTEMS: usize = GALAXY_WIDTH * GALAXY_WIDTH;
pub const SECTOR_SIZE: usize = 20;

/// Exclusive upper bounds for generated resource counts.
pub const MAX_PLANETS: u8 = 9;
pub const MAX_BASES: u8 = 2;
pub const MAX_STARS: u8 = 2;
pub const MAX_KLINGONS: u8 = 3;

/// One cell in this many is seeded with debris.
pub const DEBRIS_ODDS: u32 = 20;

pub const INITIAL_POWER: u8 = 100;
pub const INITIAL_SHIELDS: u8 = 0;
pub const INITIAL_DAMAGE: u8 = 0;
pub const STARTING_SYSTEM: usize = 36;
pub const STARTING_X: usize = 10;
pub const STARTING_Y: usize = 10;

pub const SCREEN_WIDTH: usize = 40;
pub const SCREEN_HEIGHT: usize = 25;
/// Framed playfield: the sector plus a one-cell border.
pub const PLAYFIELD_SIZE: usize = SECTOR_SIZE + 2;
pub const HUD_COLUMN: usize = 23;
pub const LRS_COLUMN: usize = 22;
pub const LRS_CELL_WIDTH: usize = 6;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SectorContent {
    #[default]
    Empty,
    Debris,
    Planet,
    Base,
    Star,
    Klingon,
    Player,
}

impl SectorContent {
    /// True for anything placed from the star system's resource counts.
    pub fn is_entity(&self) -> bool {
        matches!(
            self,
            SectorContent::Planet | SectorContent::Base | SectorContent::Star | SectorContent::Klingon
        )
    }
}

/// The 16-entry palette of the reference hardware, by color register index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Color {
    Black = 0,
    #[default]
    White = 1,
    Red = 2,
    Cyan = 3,
    Purple = 4,
    Green = 5,
    Blue = 6,
    Yellow = 7,
    Orange = 8,
    Brown = 9,
    LightRed = 10,
    DarkGrey = 11,
    Grey = 12,
    LightGreen = 13,
    LightBlue = 14,
    LightGrey = 15,
}

impl Color {
    pub fn rgb(&self) -> (u8, u8, u8) {
        match self {
            Color::Black => (0x00, 0x00, 0x00),
            Color::White => (0xff, 0xff, 0xff),
            Color::Red => (0x88, 0x00, 0x00),
            Color::Cyan => (0xaa, 0xff, 0xee),
            Color::Purple => (0xcc, 0x44, 0xcc),
            Color::Green => (0x00, 0xcc, 0x55),
            Color::Blue => (0x00, 0x00, 0xaa),
            Color::Yellow => (0xee, 0xee, 0x77),
            Color::Orange => (0xdd, 0x88, 0x55),
            Color::Brown => (0x66, 0x44, 0x00),
            Color::LightRed => (0xff, 0x77, 0x77),
            Color::DarkGrey => (0x33, 0x33, 0x33),
            Color::Grey => (0x77, 0x77, 0x77),
            Color::LightGreen => (0xaa, 0xff, 0x66),
            Color::LightBlue => (0x00, 0x88, 0xff),
            Color::LightGrey => (0xbb, 0xbb, 0xbb),
        }
    }
}
