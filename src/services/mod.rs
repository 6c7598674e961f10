pub mod export;
pub mod generation;
pub mod studio_state;
