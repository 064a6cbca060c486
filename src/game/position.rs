// src/game/position.rs
use serde::Serialize;

/// Units per block edge.
pub const BLOCK_UNITS: i32 = 32;
/// Offset between a player's feet and the position the client reports.
pub const CHARACTER_HEIGHT: i32 = 51;

/// Entity position in sub-block units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct Position {
    pub x: i32,
    pub y: i32,
    pub z: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct BlockCoords {
    pub x: i32,
    pub y: i32,
    pub z: i32,
}

impl Position {
    pub fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }

    /// Centre of the given block, standing on its floor.
    pub fn from_feet_block_coords(x: i32, y: i32, z: i32) -> Self {
        Self {
            x: x * BLOCK_UNITS + BLOCK_UNITS / 2,
            y: y * BLOCK_UNITS + CHARACTER_HEIGHT,
            z: z * BLOCK_UNITS + BLOCK_UNITS / 2,
        }
    }

    pub fn feet_block_coords(&self) -> BlockCoords {
        BlockCoords {
            x: self.x >> 5,
            y: (self.y - CHARACTER_HEIGHT) >> 5,
            z: self.z >> 5,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn feet_coords_invert_spawn_placement() {
        let pos = Position::from_feet_block_coords(10, 33, 7);
        assert_eq!(pos, Position::new(336, 1107, 240));
        assert_eq!(pos.feet_block_coords(), BlockCoords { x: 10, y: 33, z: 7 });
    }

    #[test]
    fn feet_coords_floor_below_zero() {
        let pos = Position::new(-1, 0, 31);
        assert_eq!(pos.feet_block_coords(), BlockCoords { x: -1, y: -2, z: 0 });
    }
}
