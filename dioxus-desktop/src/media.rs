pub mod controller;
pub mod element;
pub mod player;
pub mod retry;
pub mod session;
pub mod visualizer;

pub use controller::MediaController;
pub use session::MediaSession;
