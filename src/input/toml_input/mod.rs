mod entry;
pub use entry::*;
mod general;
pub use general::*;
mod sheet;
pub use sheet::*;
