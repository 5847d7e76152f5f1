pub mod demo_player;
pub mod icons;
