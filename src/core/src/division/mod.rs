pub mod division;

pub use division::*;
