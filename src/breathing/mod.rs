pub mod player;
pub mod selector;
pub mod technique;
