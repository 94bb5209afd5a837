use anchor_lang::prelude::*;

#[event]
pub struct PriceFeedUpdated {
    pub price_feed: Pubkey,
    pub answer: i64,
    pub decimals: u8,
    pub round_id: u64,
    pub updated_at: i64,
}

#[event]
pub struct LotteryInitialized {
    pub lottery: Pubkey,
    pub owner: Pubkey,
    pub price_feed: Pubkey,
    pub entry_fee_usd: u128,
    pub end_time: i64,
    pub pot_amount: u64,
}

#[event]
pub struct LotteryEntered {
    pub lottery: Pubkey,
    pub entrant: Pubkey,
    pub payment: u64,
    pub entrance_fee: u64,
    pub participants: u32,
}

#[event]
pub struct WinnerPicked {
    pub lottery: Pubkey,
    pub round: u64,
    pub winner: Pubkey,
    pub amount: u64,
    pub next_end_time: i64,
}

#[event]
pub struct RoundReset {
    pub lottery: Pubkey,
    pub round: u64,
    pub reason: ResetReason,
    pub next_end_time: i64,
}

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum ResetReason {
    NoParticipants,
}
