// Service module exports

pub mod drag;
pub mod event;
pub mod scheduler;
pub mod settings;
