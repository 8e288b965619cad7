pub mod config;
pub mod content;
pub mod desktop;
pub mod desktop_window;
pub mod interop;
pub mod media;
pub mod viewers;

pub use config::SiteConfig;
pub use content::ContentCatalog;
pub use desktop::*;
pub use desktop_window::*;
pub use viewers::*;
