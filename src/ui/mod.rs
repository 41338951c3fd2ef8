pub mod draw;
pub mod events;

pub use draw::render;
pub use events::EventHandler;
