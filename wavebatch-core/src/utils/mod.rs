//! A collection of various utility helpers.

mod collections;
pub use self::collections::*;

mod environment;
pub use self::environment::*;

mod error;
pub use self::error::*;

mod parallel;
pub use self::parallel::*;

mod timing;
pub use self::timing::Timer;
