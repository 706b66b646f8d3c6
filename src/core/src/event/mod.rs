pub mod event;
pub mod fight;
pub mod news;

pub use event::*;
pub use fight::*;
pub use news::*;
