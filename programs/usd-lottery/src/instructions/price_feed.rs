use crate::{constants::*, events::PriceFeedUpdated, state::*};
use anchor_lang::prelude::*;

#[derive(Accounts)]
pub struct InitializePriceFeed<'info> {
    /// Pays for the feed and becomes its authority.
    #[account(mut)]
    pub authority: Signer<'info>,

    #[account(
        init,
        payer = authority,
        space = DISCRIMINATOR_SIZE + PriceFeed::INIT_SPACE,
        seeds = [PRICE_FEED_SEED.as_bytes(), authority.key().as_ref()],
        bump
    )]
    pub price_feed: Account<'info, PriceFeed>,

    pub system_program: Program<'info, System>,
}

#[derive(Accounts)]
pub struct UpdatePriceFeed<'info> {
    pub authority: Signer<'info>,

    #[account(
        mut,
        seeds = [PRICE_FEED_SEED.as_bytes(), price_feed.authority.as_ref()],
        bump = price_feed.bump,
    )]
    pub price_feed: Account<'info, PriceFeed>,
}

pub fn process_initialize_price_feed(
    ctx: Context<InitializePriceFeed>,
    decimals: u8,
    initial_answer: i64,
) -> Result<()> {
    let clock = Clock::get()?;
    let price_feed = &mut ctx.accounts.price_feed;

    price_feed.authority = ctx.accounts.authority.key();
    price_feed.decimals = decimals;
    price_feed.answer = initial_answer;
    price_feed.round_id = 1;
    price_feed.updated_at = clock.unix_timestamp;
    price_feed.bump = ctx.bumps.price_feed;

    emit!(PriceFeedUpdated {
        price_feed: price_feed.key(),
        answer: price_feed.answer,
        decimals,
        round_id: price_feed.round_id,
        updated_at: price_feed.updated_at,
    });

    Ok(())
}

pub fn process_update_price_feed(ctx: Context<UpdatePriceFeed>, answer: i64) -> Result<()> {
    let clock = Clock::get()?;
    let authority = ctx.accounts.authority.key();
    let price_feed = &mut ctx.accounts.price_feed;

    price_feed.update(&authority, answer, clock.unix_timestamp)?;

    emit!(PriceFeedUpdated {
        price_feed: price_feed.key(),
        answer,
        decimals: price_feed.decimals,
        round_id: price_feed.round_id,
        updated_at: price_feed.updated_at,
    });

    Ok(())
}
