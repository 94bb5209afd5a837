use anchor_lang::prelude::*;

/// A price reading: `price` scaled by `10^decimals`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct OraclePrice {
    pub price: i64,
    pub decimals: u8,
}

/// Read side of a base/quote price source.
///
/// The lottery never writes to the oracle and takes whatever it reports as
/// authoritative; no staleness window is applied.
pub trait PriceOracle {
    fn latest_price(&self) -> Result<OraclePrice>;
}
