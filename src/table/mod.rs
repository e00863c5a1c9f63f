pub mod diagnostics;
pub mod record;
pub mod reducer;
pub mod table;
pub mod wager;

pub use diagnostics::*;
pub use record::*;
pub use reducer::*;
pub use table::*;
pub use wager::*;
