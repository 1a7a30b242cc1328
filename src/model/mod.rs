//! Pure data structures for the order-assembly domain.

pub mod ingredient;
pub mod order;
pub mod taco;

pub use ingredient::*;
pub use order::*;
pub use taco::*;
