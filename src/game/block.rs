// src/game/block.rs
/// Extended block identifier as stored by the host.
pub type BlockId = u16;

pub const AIR: BlockId = 0;
/// Ids at or above this are extended (custom) blocks.
pub const EXTENDED: BlockId = 256;

const NAMES: [&str; 66] = [
    "Air", "Stone", "Grass", "Dirt", "Cobblestone", "Wood", "Sapling", "Bedrock",
    "Active_Water", "Water", "Active_Lava", "Lava", "Sand", "Gravel", "Gold_Ore",
    "Iron_Ore", "Coal", "Log", "Leaves", "Sponge", "Glass", "Red", "Orange", "Yellow",
    "Lime", "Green", "Teal", "Aqua", "Cyan", "Blue", "Indigo", "Violet", "Magenta",
    "Pink", "Black", "Gray", "White", "Dandelion", "Rose", "Brown_Shroom", "Red_Shroom",
    "Gold", "Iron", "DoubleSlab", "Slab", "Brick", "TNT", "BookShelf", "MossyRocks",
    "Obsidian", "CobblestoneSlab", "Rope", "Sandstone", "Snow", "Fire", "LightPink",
    "ForestGreen", "Brown", "DeepBlue", "Turquoise", "Ice", "CeramicTile", "MagmaBlock",
    "Pillar", "Crate", "StoneBrick",
];

/// Folds an extended id into the single byte used on the wire.
pub fn to_raw(block: BlockId) -> u8 {
    let raw = if block < EXTENDED { block } else { block - EXTENDED };
    raw as u8
}

/// Classic and CPE block names; anything else is rendered as its number.
pub fn default_name(block: BlockId) -> String {
    match NAMES.get(block as usize) {
        Some(name) => name.to_string(),
        None => block.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn raw_folds_extended_ids() {
        assert_eq!(to_raw(AIR), 0);
        assert_eq!(to_raw(49), 49);
        assert_eq!(to_raw(EXTENDED + 70), 70);
    }

    #[test]
    fn names_cover_classic_and_cpe() {
        assert_eq!(default_name(1), "Stone");
        assert_eq!(default_name(49), "Obsidian");
        assert_eq!(default_name(65), "StoneBrick");
        assert_eq!(default_name(300), "300");
    }
}
