pub mod command_handler;
pub mod commands;
pub mod config;
pub mod context;
pub mod engine;
pub mod events;
pub mod frame_service;
pub mod layer_service;
pub mod selection_service;
pub mod state;
pub mod tool_manager;

pub use engine::Engine;
