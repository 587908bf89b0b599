// Module exports for models

pub mod event;
pub mod grid;
pub mod settings;
