//! Solution domain models: waves and batches.

mod batch;
pub use self::batch::*;

mod wave;
pub use self::wave::*;
