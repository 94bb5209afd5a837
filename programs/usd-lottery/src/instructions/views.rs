use crate::{constants::*, state::*};
use anchor_lang::prelude::*;

#[derive(Accounts)]
pub struct GetEntranceFee<'info> {
    #[account(
        seeds = [LOTTERY_SEED.as_bytes(), lottery.owner.as_ref()],
        bump = lottery.bump,
        has_one = price_feed,
    )]
    pub lottery: Account<'info, Lottery>,

    pub price_feed: Account<'info, PriceFeed>,
}

#[derive(Accounts)]
pub struct GetParticipants<'info> {
    #[account(
        seeds = [LOTTERY_SEED.as_bytes(), lottery.owner.as_ref()],
        bump = lottery.bump,
    )]
    pub lottery: Account<'info, Lottery>,
}

/// Lamports needed to enter at the feed's current price.
pub fn process_get_entrance_fee(ctx: Context<GetEntranceFee>) -> Result<u64> {
    ctx.accounts.lottery.entrance_fee(&*ctx.accounts.price_feed)
}

pub fn process_get_participants(ctx: Context<GetParticipants>) -> Result<Vec<Pubkey>> {
    Ok(ctx.accounts.lottery.participants.clone())
}
