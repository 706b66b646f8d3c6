pub mod booking;
pub mod card;
pub mod context;
pub mod featured;
pub mod planner;
pub mod runner;
pub mod withdrawals;

pub use booking::*;
pub use card::*;
pub use context::*;
pub use planner::*;
pub use runner::*;
pub use withdrawals::*;
