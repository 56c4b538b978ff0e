pub mod api;
pub mod catalog;
pub mod common;
pub mod endpoint;
pub mod selection;
pub mod view;

pub use api::*;
pub use catalog::*;
pub use common::*;
pub use endpoint::*;
pub use selection::*;
pub use view::*;
