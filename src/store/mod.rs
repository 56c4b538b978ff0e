pub mod memory;
pub mod session_registry;
pub mod traits;

pub use memory::*;
pub use session_registry::*;
pub use traits::*;
