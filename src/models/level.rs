// src/models/level.rs
use serde::Serialize;

use super::player::PlayerView;
use crate::game::{BlockCoords, Level, Position};

/// A position in both block and unit coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct PositionView {
    pub block: BlockCoords,
    pub unit: Position,
}

impl From<Position> for PositionView {
    fn from(pos: Position) -> Self {
        Self {
            block: pos.feet_block_coords(),
            unit: pos,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct BoundsView {
    pub width: u16,
    pub length: u16,
    pub height: u16,
}

impl BoundsView {
    pub fn of(level: &dyn Level) -> Self {
        Self {
            width: level.width(),
            length: level.length(),
            height: level.height(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct MapView {
    pub name: String,
    pub players: Vec<PlayerView>,
    pub bounds: BoundsView,
    pub spawn_pos: PositionView,
}

/// Highest non-air block of every (x, z) column, row-major with x fastest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TopBlockGrid {
    pub width: u16,
    pub length: u16,
    pub blocks: Vec<u8>,
}

impl TopBlockGrid {
    pub fn get(&self, x: u16, z: u16) -> Option<u8> {
        if x >= self.width || z >= self.length {
            return None;
        }
        self.blocks
            .get(x as usize + self.width as usize * z as usize)
            .copied()
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.blocks
    }
}
