pub mod embed;
pub mod file;
pub mod image;

pub use embed::*;
pub use file::*;
pub use image::*;
