pub mod ranking;

pub use ranking::*;
