mod error;
pub mod generators;
pub mod loaders;
mod root;
mod store;

pub use error::*;
pub use generators::*;
pub use root::*;
pub use store::*;
