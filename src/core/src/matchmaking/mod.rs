pub mod pairs;
pub mod scoring;

pub use pairs::*;
pub use scoring::*;
