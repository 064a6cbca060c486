// src/storage/memory.rs
use dashmap::DashMap;
use parking_lot::RwLock;
use std::sync::Arc;
use std::time::SystemTime;
use crate::game::{BlockId, GameServer, Level, PlayerRecord, Position, AIR};

const GRASS: BlockId = 2;
const DIRT: BlockId = 3;

pub struct MemoryLevel {
    name: String,
    width: u16,
    height: u16,
    length: u16,
    spawn: Position,
    blocks: RwLock<Vec<BlockId>>,
}

impl MemoryLevel {
    /// An all-air level with the spawn on the floor at its centre.
    pub fn new(name: &str, width: u16, height: u16, length: u16) -> Self {
        let volume = width as usize * height as usize * length as usize;
        Self {
            name: name.to_string(),
            width,
            height,
            length,
            spawn: Position::from_feet_block_coords(width as i32 / 2, 0, length as i32 / 2),
            blocks: RwLock::new(vec![AIR; volume]),
        }
    }

    /// Dirt up to half height with a grass surface; spawn stands on the grass.
    pub fn flat(name: &str, width: u16, height: u16, length: u16) -> Self {
        let level = Self::new(name, width, height, length);
        let surface = height / 2;
        {
            let mut blocks = level.blocks.write();
            for y in 0..surface {
                let block = if y + 1 == surface { GRASS } else { DIRT };
                for z in 0..length {
                    for x in 0..width {
                        blocks[level.index(x, y, z)] = block;
                    }
                }
            }
        }
        level.with_spawn(Position::from_feet_block_coords(
            width as i32 / 2,
            surface as i32,
            length as i32 / 2,
        ))
    }

    pub fn with_spawn(mut self, spawn: Position) -> Self {
        self.spawn = spawn;
        self
    }

    pub fn set_block(&self, x: u16, y: u16, z: u16, block: BlockId) {
        if self.contains(x, y, z) {
            let index = self.index(x, y, z);
            self.blocks.write()[index] = block;
        }
    }

    fn contains(&self, x: u16, y: u16, z: u16) -> bool {
        x < self.width && y < self.height && z < self.length
    }

    fn index(&self, x: u16, y: u16, z: u16) -> usize {
        (y as usize * self.length as usize + z as usize) * self.width as usize + x as usize
    }
}

impl Level for MemoryLevel {
    fn name(&self) -> &str {
        &self.name
    }

    fn width(&self) -> u16 {
        self.width
    }

    fn height(&self) -> u16 {
        self.height
    }

    fn length(&self) -> u16 {
        self.length
    }

    fn spawn(&self) -> Position {
        self.spawn
    }

    fn block(&self, x: u16, y: u16, z: u16) -> BlockId {
        if !self.contains(x, y, z) {
            return AIR;
        }
        self.blocks.read()[self.index(x, y, z)]
    }
}

/// Stand-in game server keeping everything in memory.
pub struct MemoryServer {
    software: String,
    started: SystemTime,
    main: RwLock<String>,
    levels: DashMap<String, Arc<MemoryLevel>>,
    players: RwLock<Vec<PlayerRecord>>,
}

impl MemoryServer {
    pub fn new(software: &str, started: SystemTime, main: MemoryLevel) -> Self {
        let levels = DashMap::new();
        let main_name = main.name.clone();
        levels.insert(main_name.clone(), Arc::new(main));
        Self {
            software: software.to_string(),
            started,
            main: RwLock::new(main_name),
            levels,
            players: RwLock::new(Vec::new()),
        }
    }

    pub fn add_level(&self, level: MemoryLevel) -> Arc<MemoryLevel> {
        let level = Arc::new(level);
        self.levels.insert(level.name.clone(), level.clone());
        level
    }

    /// Makes an already added level the main one. Returns false for unknown names.
    pub fn set_main_level(&self, name: &str) -> bool {
        if !self.levels.contains_key(name) {
            return false;
        }
        *self.main.write() = name.to_string();
        true
    }

    pub fn level(&self, name: &str) -> Option<Arc<MemoryLevel>> {
        self.levels.get(name).map(|r| r.value().clone())
    }

    /// Adds a player, replacing any session with the same name.
    pub fn join(&self, player: PlayerRecord) {
        let mut players = self.players.write();
        players.retain(|p| p.name != player.name);
        players.push(player);
    }

    pub fn leave(&self, name: &str) -> Option<PlayerRecord> {
        let mut players = self.players.write();
        let index = players.iter().position(|p| p.name == name)?;
        Some(players.remove(index))
    }

    pub fn update_player(&self, name: &str, update: impl FnOnce(&mut PlayerRecord)) -> bool {
        match self.players.write().iter_mut().find(|p| p.name == name) {
            Some(player) => {
                update(player);
                true
            }
            None => false,
        }
    }
}

impl GameServer for MemoryServer {
    fn online_players(&self) -> Vec<PlayerRecord> {
        self.players.read().clone()
    }

    fn start_time(&self) -> SystemTime {
        self.started
    }

    fn software_version(&self) -> String {
        self.software.clone()
    }

    fn main_level(&self) -> Arc<dyn Level> {
        let name = self.main.read().clone();
        match self.levels.get(&name) {
            Some(level) => level.value().clone(),
            // set_main_level only accepts known names and levels are never removed
            None => Arc::new(MemoryLevel::new(&name, 0, 0, 0)),
        }
    }

    fn find_level(&self, name: &str) -> Option<Arc<dyn Level>> {
        self.level(name).map(|level| level as Arc<dyn Level>)
    }
}
