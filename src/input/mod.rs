//! Input processing module
//! Handles file detection, text extraction, position loading and input management

pub mod file_detector;
pub mod text_extractor;
pub mod manager;
pub mod position;

pub use manager::InputManager;
pub use position::Position;
