pub mod data;
pub mod file;

pub use data::*;
pub use file::*;
