pub mod errors;
pub mod grid;
pub mod bracket;
pub mod linear;

pub use bracket::{Bracket, RangePolicy};
