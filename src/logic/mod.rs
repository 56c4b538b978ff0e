pub mod category_index;
pub mod projection;
pub mod selection;

pub use category_index::*;
pub use projection::*;
