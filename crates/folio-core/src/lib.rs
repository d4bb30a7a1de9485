pub mod audio;
pub mod background;
pub mod chrome;
pub mod constants;
pub mod cursor;
pub mod error;
pub mod typewriter;

pub use audio::*;
pub use background::{checked_point_count, point_count, Background, BackgroundStyle, Point, Rgba, Surface};
pub use chrome::*;
pub use cursor::*;
pub use error::FolioError;
pub use typewriter::*;
