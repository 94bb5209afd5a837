pub mod lottery;
pub mod price_feed;

pub use lottery::*;
pub use price_feed::*;
