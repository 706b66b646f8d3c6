pub mod save;
pub mod state;
pub mod store;

pub use save::*;
pub use state::*;
pub use store::*;
