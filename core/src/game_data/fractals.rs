//! Fractals of the Mists zone data
//!
//! Map IDs were collected by entering each fractal with the game's link
//! reporting `map_id`. Scale assignments from
//! https://wiki.guildwars2.com/wiki/Fractals_of_the_Mists

use phf::phf_map;

use super::{StageNumber, ZoneId};

/// Number of scales in a full fractal marathon (1-100 plus two challenge motes)
pub const STAGE_COUNT: usize = 102;

/// First scale that is a challenge mote variant
pub const FIRST_CHALLENGE_STAGE: StageNumber = 101;

/// Static fractal info
#[derive(Debug, Clone, Copy)]
pub struct FractalInfo {
    pub name: &'static str,
    /// Scales hosted by this map, ascending
    pub stages: &'static [StageNumber],
}

impl FractalInfo {
    const fn new(name: &'static str, stages: &'static [StageNumber]) -> Self {
        Self { name, stages }
    }
}

/// Fractal info indexed by map ID
pub static FRACTAL_ZONES: phf::Map<ZoneId, FractalInfo> = phf_map! {
    956u32 => FractalInfo::new("Aetherblade", &[14, 46, 65, 71, 96]),
    951u32 => FractalInfo::new("Aquatic Ruins", &[7, 26, 61, 76]),
    960u32 => FractalInfo::new("Captain Mai Trin Boss", &[18, 42, 73, 95]),
    1164u32 => FractalInfo::new("Chaos", &[13, 30, 38, 54, 63, 88, 98]),
    952u32 => FractalInfo::new("Cliffside", &[6, 22, 33, 47, 69, 82, 94]),
    959u32 => FractalInfo::new("Molten Boss", &[10, 40, 70, 90]),
    955u32 => FractalInfo::new("Molten Furnace", &[9, 23, 39, 58, 83]),
    1177u32 => FractalInfo::new("Nightmare", &[24, 49, 74, 99, 101]),
    1205u32 => FractalInfo::new("Shattered Observatory", &[25, 50, 75, 100, 102]),
    948u32 => FractalInfo::new("Snowblind", &[3, 27, 37, 51, 68, 86, 93]),
    958u32 => FractalInfo::new("Solid Ocean", &[20, 35, 45, 60, 80]),
    949u32 => FractalInfo::new("Swampland", &[5, 21, 32, 56, 67, 77, 89]),
    957u32 => FractalInfo::new("Thaumanova Reactor", &[15, 34, 48, 55, 64, 84, 97]),
    1267u32 => FractalInfo::new("Twilight Oasis", &[16, 41, 59, 87]),
    947u32 => FractalInfo::new("Uncategorized", &[2, 12, 36, 44, 62, 79, 91]),
    953u32 => FractalInfo::new("Underground Facility", &[8, 17, 29, 43, 53, 81]),
    950u32 => FractalInfo::new("Urban Battleground", &[4, 11, 31, 57, 66, 78, 85]),
    954u32 => FractalInfo::new("Volcanic", &[1, 19, 28, 52, 72, 92]),
};

/// Get fractal info for a map ID
pub fn get_fractal_info(zone: ZoneId) -> Option<&'static FractalInfo> {
    FRACTAL_ZONES.get(&zone)
}
