//! Password generation.

pub mod charset;
mod entropy;
mod generate;

pub use charset::{CharClass, ClassSet};
pub use entropy::{entropy_bits, strength};
pub use generate::{generate, generate_batch};
