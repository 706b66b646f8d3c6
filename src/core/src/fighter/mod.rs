mod builder;
pub mod fighter;
pub mod history;
pub mod rank;

pub use builder::*;
pub use fighter::*;
pub use history::*;
pub use rank::*;
