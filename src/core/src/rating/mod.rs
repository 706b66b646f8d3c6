pub mod formulas;

pub use formulas::*;
