use anchor_lang::prelude::*;

/// PDA Seeds
#[constant]
pub const LOTTERY_SEED: &str = "lottery";
#[constant]
pub const PRICE_FEED_SEED: &str = "price_feed";

/// Account discriminator prepended by Anchor to every `#[account]`.
pub const DISCRIMINATOR_SIZE: usize = 8;

/// Upper bound on entrants per round. `get_participants` must fit a full
/// round in return data (4 + 32 * 31 <= 1024 bytes), and every entrant must be
/// passable as a remaining account when the winner is paid out.
#[constant]
pub const MAX_PARTICIPANTS: u32 = 31;

/// Keys a `pick_winner` transaction carries besides the entrants:
/// owner, lottery, SlotHashes sysvar, program id.
pub const PICK_WINNER_FIXED_ACCOUNTS: usize = 4;

/// Runtime limit on accounts locked by a single transaction.
pub const MAX_TX_ACCOUNT_LOCKS: usize = 64;

const _: () =
    assert!(MAX_PARTICIPANTS as usize + PICK_WINNER_FIXED_ACCOUNTS <= MAX_TX_ACCOUNT_LOCKS);

pub const SECONDS_PER_MINUTE: i64 = 60;

/// Decimals of the native currency (lamports per SOL).
pub const NATIVE_DECIMALS: u32 = 9;

/// 10 USD, fixed point with `NATIVE_DECIMALS`, so the fee formula yields lamports.
#[constant]
pub const DEFAULT_ENTRY_FEE_USD: u128 = 10 * 10u128.pow(NATIVE_DECIMALS);
