mod hours;
pub use hours::*;
mod money;
pub use money::*;
mod schedule;
pub use schedule::*;
mod summary;
pub use summary::*;
mod week;
pub use week::*;
