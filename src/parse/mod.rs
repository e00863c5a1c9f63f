pub mod action;
pub mod blind;
pub mod event;
pub mod outcome;
pub mod pattern;
pub mod round;

pub use action::*;
pub use blind::*;
pub use event::*;
pub use outcome::*;
pub use round::*;
