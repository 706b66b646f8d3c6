pub mod fighter;
pub mod world;

pub use fighter::*;
pub use world::*;
