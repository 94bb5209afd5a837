pub mod price;
pub mod random;

pub use price::*;
pub use random::*;
