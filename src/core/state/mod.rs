// State management and watermark tracking

pub mod manager;
pub mod watermark;

pub use manager::StateManager;
pub use watermark::Watermark;
