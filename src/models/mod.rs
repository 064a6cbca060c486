// src/models/mod.rs
pub mod level;
pub mod player;
pub mod snapshot;

pub use level::{BoundsView, MapView, PositionView, TopBlockGrid};
pub use player::{HeldBlockView, NameView, PlayerView};
pub use snapshot::ServerSnapshot;
