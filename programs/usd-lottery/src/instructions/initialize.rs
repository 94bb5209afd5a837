use crate::{constants::*, events::LotteryInitialized, state::*};
use anchor_lang::prelude::*;
use anchor_lang::system_program;

/// Accounts required to create a lottery.
/// The signer becomes its owner and pays for the account.
#[derive(Accounts)]
pub struct Initialize<'info> {
    /// The account paying for account creation and becoming the owner.
    #[account(mut)]
    pub payer: Signer<'info>,

    /// The Lottery state account, one per owner.
    #[account(
        init,
        payer = payer,
        space = DISCRIMINATOR_SIZE + Lottery::INIT_SPACE,
        seeds = [LOTTERY_SEED.as_bytes(), payer.key().as_ref()],
        bump
    )]
    pub lottery: Box<Account<'info, Lottery>>,

    /// Price source used to convert the USD entry fee.
    pub price_feed: Account<'info, PriceFeed>,

    /// System program to create accounts.
    pub system_program: Program<'info, System>,
}

/// Opens the first round and optionally seeds the pot.
///
/// # Arguments
/// * `ctx` - Context holding the Initialize accounts
/// * `duration_minutes` - Length of every round
/// * `entry_fee_usd` - Entry fee in USD, fixed point with `NATIVE_DECIMALS`
/// * `seed_amount` - Lamports moved from the owner into the pot
pub fn process_initialize(
    ctx: Context<Initialize>,
    duration_minutes: u64,
    entry_fee_usd: u128,
    seed_amount: u64,
) -> Result<()> {
    let clock = Clock::get()?;
    let owner = ctx.accounts.payer.key();
    let price_feed = ctx.accounts.price_feed.key();

    ctx.accounts.lottery.open(
        owner,
        price_feed,
        duration_minutes,
        entry_fee_usd,
        clock.unix_timestamp,
        ctx.bumps.lottery,
    )?;

    if seed_amount > 0 {
        system_program::transfer(
            CpiContext::new(
                ctx.accounts.system_program.to_account_info(),
                system_program::Transfer {
                    from: ctx.accounts.payer.to_account_info(),
                    to: ctx.accounts.lottery.to_account_info(),
                },
            ),
            seed_amount,
        )?;
        ctx.accounts.lottery.add_to_pot(seed_amount)?;
    }

    msg!("Lottery ends at: {}", ctx.accounts.lottery.end_time);

    emit!(LotteryInitialized {
        lottery: ctx.accounts.lottery.key(),
        owner,
        price_feed,
        entry_fee_usd,
        end_time: ctx.accounts.lottery.end_time,
        pot_amount: ctx.accounts.lottery.pot_amount,
    });

    Ok(())
}
