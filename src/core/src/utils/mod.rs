pub mod dates;
pub mod time;

pub use dates::*;
pub use time::*;
