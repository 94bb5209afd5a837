#![allow(unexpected_cfgs)]

pub mod constants;
pub mod error;
pub mod events;
pub mod instructions;
pub mod oracle;
pub mod state;
pub mod utils;

use anchor_lang::prelude::*;

pub use instructions::*;

declare_id!("4b1AoauP7gMnqLa64HiJsdCVRYDUqRgUqAvZP48tKQsJ");

#[program]
pub mod usd_lottery {
    use super::*;

    pub fn initialize_price_feed(
        ctx: Context<InitializePriceFeed>,
        decimals: u8,
        initial_answer: i64,
    ) -> Result<()> {
        process_initialize_price_feed(ctx, decimals, initial_answer)
    }

    pub fn update_price_feed(ctx: Context<UpdatePriceFeed>, answer: i64) -> Result<()> {
        process_update_price_feed(ctx, answer)
    }

    pub fn initialize(
        ctx: Context<Initialize>,
        duration_minutes: u64,
        entry_fee_usd: u128,
        seed_amount: u64,
    ) -> Result<()> {
        process_initialize(ctx, duration_minutes, entry_fee_usd, seed_amount)
    }

    pub fn get_entrance_fee(ctx: Context<GetEntranceFee>) -> Result<u64> {
        process_get_entrance_fee(ctx)
    }

    pub fn get_participants(ctx: Context<GetParticipants>) -> Result<Vec<Pubkey>> {
        process_get_participants(ctx)
    }

    pub fn enter_lottery(ctx: Context<EnterLottery>, payment: u64) -> Result<()> {
        process_enter_lottery(ctx, payment)
    }

    pub fn pick_winner<'info>(
        ctx: Context<'_, '_, '_, 'info, PickWinner<'info>>,
        expected_end_time: i64,
    ) -> Result<()> {
        process_pick_winner(ctx, expected_end_time)
    }
}
