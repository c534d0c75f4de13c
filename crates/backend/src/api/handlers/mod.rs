// Dashboard handlers
pub mod d402_control_tower;
