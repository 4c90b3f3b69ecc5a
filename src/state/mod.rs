//! Application state module

mod entry;
mod forms;
mod products;

pub use entry::*;
pub use forms::*;
pub use products::*;
