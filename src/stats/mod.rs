pub mod profile;
pub mod regression;
pub mod summary;

pub use profile::*;
pub use regression::*;
pub use summary::*;
