pub mod enter_lottery;
pub mod initialize;
pub mod pick_winner;
pub mod price_feed;
pub mod views;

pub use enter_lottery::*;
pub use initialize::*;
pub use pick_winner::*;
pub use price_feed::*;
pub use views::*;
