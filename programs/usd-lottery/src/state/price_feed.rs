use crate::{
    error::LotteryError,
    oracle::{OraclePrice, PriceOracle},
};
use anchor_lang::prelude::*;

/// Aggregator-style price account: one answer at a fixed precision.
#[account]
#[derive(InitSpace)]
pub struct PriceFeed {
    /// The only key allowed to push new answers.
    pub authority: Pubkey,

    /// Number of decimals `answer` is scaled by.
    pub decimals: u8,

    /// Latest base/quote price.
    pub answer: i64,

    /// Incremented on every answer, starting at 1 for the initial one.
    pub round_id: u64,

    /// UNIX timestamp of the latest answer.
    pub updated_at: i64,

    pub bump: u8,
}

impl PriceFeed {
    pub fn update(&mut self, signer: &Pubkey, answer: i64, now: i64) -> Result<()> {
        require_keys_eq!(*signer, self.authority, LotteryError::NotFeedAuthority);

        self.answer = answer;
        self.round_id = self
            .round_id
            .checked_add(1)
            .ok_or(LotteryError::MathOverflow)?;
        self.updated_at = now;

        Ok(())
    }
}

impl PriceOracle for PriceFeed {
    fn latest_price(&self) -> Result<OraclePrice> {
        Ok(OraclePrice {
            price: self.answer,
            decimals: self.decimals,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anchor_lang::error::Error;

    fn feed(authority: Pubkey) -> PriceFeed {
        PriceFeed {
            authority,
            decimals: 8,
            answer: 2_000_00000000,
            round_id: 1,
            updated_at: 100,
            bump: 255,
        }
    }

    #[test]
    fn test_latest_price() {
        let feed = feed(Pubkey::new_unique());
        assert_eq!(
            feed.latest_price().unwrap(),
            OraclePrice {
                price: 2_000_00000000,
                decimals: 8
            }
        );
    }

    #[test]
    fn test_authority_updates_answer() {
        let authority = Pubkey::new_unique();
        let mut feed = feed(authority);

        feed.update(&authority, 2_500_00000000, 200).unwrap();

        assert_eq!(feed.answer, 2_500_00000000);
        assert_eq!(feed.round_id, 2);
        assert_eq!(feed.updated_at, 200);
        assert_eq!(feed.latest_price().unwrap().price, 2_500_00000000);
    }

    #[test]
    fn test_other_signer_cannot_update() {
        let mut feed = feed(Pubkey::new_unique());

        assert_eq!(
            feed.update(&Pubkey::new_unique(), 1, 200).unwrap_err(),
            Error::from(LotteryError::NotFeedAuthority)
        );
        assert_eq!(feed.answer, 2_000_00000000);
        assert_eq!(feed.round_id, 1);
    }
}
