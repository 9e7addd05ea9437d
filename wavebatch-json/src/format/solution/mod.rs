//! Specifies logic to create a solution, write it into json format and read it back.

mod model;
pub use self::model::*;

mod reader;
pub use self::reader::read_solution;

mod writer;
pub use self::writer::{JsonSolution, create_solution};
