//! Problem domain models: articles and orders.

mod article;
pub use self::article::*;

mod order;
pub use self::order::*;
