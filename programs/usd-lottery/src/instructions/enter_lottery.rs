use crate::{constants::*, events::LotteryEntered, state::*};
use anchor_lang::prelude::*;
use anchor_lang::system_program;

/// Accounts required to enter the current round.
#[derive(Accounts)]
pub struct EnterLottery<'info> {
    /// The entrant, paying the entrance fee.
    #[account(mut)]
    pub payer: Signer<'info>,

    /// Lottery state account, also holding the pot.
    #[account(
        mut,
        seeds = [LOTTERY_SEED.as_bytes(), lottery.owner.as_ref()],
        bump = lottery.bump,
        has_one = price_feed,
    )]
    pub lottery: Account<'info, Lottery>,

    /// Price source the lottery was created with.
    pub price_feed: Account<'info, PriceFeed>,

    /// System program for the payment transfer.
    pub system_program: Program<'info, System>,
}

/// Enters the caller into the current round.
///
/// Steps performed:
/// 1. Validate the entrant and price the entry through the feed.
/// 2. Record the entrant and grow the pot.
/// 3. Transfer the whole payment to the lottery account. Excess is not refunded.
///
/// # Arguments
/// * `ctx` - Context containing EnterLottery accounts
/// * `payment` - Lamports paid, at least the current entrance fee
pub fn process_enter_lottery(ctx: Context<EnterLottery>, payment: u64) -> Result<()> {
    let clock = Clock::get()?;
    let entrant = ctx.accounts.payer.key();

    let entrance_fee = ctx.accounts.lottery.enter(
        entrant,
        payment,
        clock.unix_timestamp,
        &*ctx.accounts.price_feed,
    )?;

    msg!("Entrance fee: {}", entrance_fee);
    msg!("Payment: {}", payment);

    system_program::transfer(
        CpiContext::new(
            ctx.accounts.system_program.to_account_info(),
            system_program::Transfer {
                from: ctx.accounts.payer.to_account_info(),
                to: ctx.accounts.lottery.to_account_info(),
            },
        ),
        payment,
    )?;

    emit!(LotteryEntered {
        lottery: ctx.accounts.lottery.key(),
        entrant,
        payment,
        entrance_fee,
        participants: ctx.accounts.lottery.participants.len() as u32,
    });

    Ok(())
}
