pub mod pattern;
pub mod timespec;

pub use pattern::*;
pub use timespec::*;
