use crate::{error::LotteryError, oracle::OraclePrice};
use anchor_lang::prelude::*;

/// Native amount worth `entry_fee_usd` at `oracle` price:
/// `entry_fee_usd * 10^decimals / price`, truncated toward zero.
///
/// The result carries the same fixed-point precision as `entry_fee_usd`.
pub fn entrance_fee(entry_fee_usd: u128, oracle: OraclePrice) -> Result<u128> {
    require!(oracle.price > 0, LotteryError::InvalidOraclePrice);

    let scale = 10u128
        .checked_pow(oracle.decimals as u32)
        .ok_or(LotteryError::MathOverflow)?;

    let fee = entry_fee_usd
        .checked_mul(scale)
        .ok_or(LotteryError::MathOverflow)?
        .checked_div(oracle.price as u128)
        .ok_or(LotteryError::MathOverflow)?;

    Ok(fee)
}

/// `entrance_fee` narrowed to lamports.
pub fn entrance_fee_lamports(entry_fee_usd: u128, oracle: OraclePrice) -> Result<u64> {
    let fee = entrance_fee(entry_fee_usd, oracle)?;
    u64::try_from(fee).map_err(|_| LotteryError::MathOverflow.into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::DEFAULT_ENTRY_FEE_USD;
    use anchor_lang::error::Error;

    fn usd_price(whole: i64, decimals: u8) -> OraclePrice {
        OraclePrice {
            price: whole * 10i64.pow(decimals as u32),
            decimals,
        }
    }

    #[test]
    fn test_fee_for_ten_usd_at_two_thousand() {
        // 10 USD (18 decimals) at 2000 USD/unit (8 decimals)
        // 10e18 * 1e8 / 2000e8 = 5e15
        let fee_usd = 10 * 10u128.pow(18);
        let fee = entrance_fee(fee_usd, usd_price(2_000, 8)).unwrap();
        assert_eq!(fee, 5 * 10u128.pow(15));
    }

    #[test]
    fn test_default_fee_in_lamports() {
        // 10 USD at 2000 USD/SOL = 0.005 SOL
        let fee = entrance_fee_lamports(DEFAULT_ENTRY_FEE_USD, usd_price(2_000, 8)).unwrap();
        assert_eq!(fee, 5_000_000);
    }

    #[test]
    fn test_fee_truncates() {
        // 10 * 1e8 / 3e8 = 3.33.. -> 3
        let fee = entrance_fee(10, usd_price(3, 8)).unwrap();
        assert_eq!(fee, 3);

        let fee = entrance_fee(1, usd_price(2, 0)).unwrap();
        assert_eq!(fee, 0);
    }

    #[test]
    fn test_fee_matches_formula_across_prices() {
        let fee_usd = 10 * 10u128.pow(18);
        for (price, decimals) in [(1i64, 0u8), (1_999_99, 2), (2_000_00000000, 8), (i64::MAX, 18)] {
            let oracle = OraclePrice { price, decimals };
            let expected = fee_usd * 10u128.pow(decimals as u32) / price as u128;
            assert_eq!(entrance_fee(fee_usd, oracle).unwrap(), expected);
        }
    }

    #[test]
    fn test_non_positive_price_rejected() {
        let zero = OraclePrice { price: 0, decimals: 8 };
        assert_eq!(
            entrance_fee(DEFAULT_ENTRY_FEE_USD, zero).unwrap_err(),
            Error::from(LotteryError::InvalidOraclePrice)
        );

        let negative = OraclePrice { price: -1, decimals: 8 };
        assert_eq!(
            entrance_fee(DEFAULT_ENTRY_FEE_USD, negative).unwrap_err(),
            Error::from(LotteryError::InvalidOraclePrice)
        );
    }

    #[test]
    fn test_overflow_reported() {
        let oracle = OraclePrice { price: 1, decimals: 30 };
        assert_eq!(
            entrance_fee(u128::MAX, oracle).unwrap_err(),
            Error::from(LotteryError::MathOverflow)
        );

        // Fits u128 but not lamports.
        let fee_usd = 100 * 10u128.pow(18);
        assert_eq!(
            entrance_fee_lamports(fee_usd, usd_price(1, 8)).unwrap_err(),
            Error::from(LotteryError::MathOverflow)
        );
    }
}
