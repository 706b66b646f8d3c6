pub mod config;
pub mod fight;
pub mod finish;

pub use config::*;
pub use fight::*;
pub use finish::*;
