use crate::{
    constants::*,
    error::LotteryError,
    events::{ResetReason, RoundReset, WinnerPicked},
    state::*,
    utils::{most_recent_slot_hash, DrawContext},
};
use anchor_lang::prelude::*;
use solana_program::sysvar::slot_hashes;

/// Accounts required to draw the winner of a closed round.
///
/// The winner's account must be among the remaining accounts, writable;
/// clients pass every participant since the draw is not known in advance.
#[derive(Accounts)]
pub struct PickWinner<'info> {
    /// Must be the lottery owner.
    pub payer: Signer<'info>,

    /// Lottery state account holding the pot.
    #[account(
        mut,
        seeds = [LOTTERY_SEED.as_bytes(), lottery.owner.as_ref()],
        bump = lottery.bump,
    )]
    pub lottery: Account<'info, Lottery>,

    /// CHECK: Address is pinned to the SlotHashes sysvar; the data is parsed in the handler.
    #[account(address = slot_hashes::ID)]
    pub slot_hashes: UncheckedAccount<'info>,
}

/// What a draw commits once the engine has run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DrawOutcome {
    Paid(Payout),
    Reset,
}

/// Maps the engine result to the committed outcome.
///
/// `NoParticipants` becomes `Reset` so the reset the engine already applied
/// persists; every other error aborts the instruction.
pub fn settle_draw(result: Result<Payout>) -> Result<DrawOutcome> {
    match result {
        Ok(payout) => Ok(DrawOutcome::Paid(payout)),
        Err(error) if error == Error::from(LotteryError::NoParticipants) => Ok(DrawOutcome::Reset),
        Err(error) => Err(error),
    }
}

/// Moves `payout.amount` lamports from the lottery to the winner's account,
/// looked up by key in `candidates`.
pub fn pay_winner(lottery: &AccountInfo, candidates: &[AccountInfo], payout: &Payout) -> Result<()> {
    let winner = candidates
        .iter()
        .find(|account| *account.key == payout.winner)
        .ok_or(LotteryError::WinnerAccountMissing)?;

    **lottery.try_borrow_mut_lamports()? -= payout.amount;
    **winner.try_borrow_mut_lamports()? += payout.amount;

    Ok(())
}

pub fn process_pick_winner<'info>(
    ctx: Context<'_, '_, '_, 'info, PickWinner<'info>>,
    expected_end_time: i64,
) -> Result<()> {
    let clock = Clock::get()?;
    let caller = ctx.accounts.payer.key();
    let lottery_key = ctx.accounts.lottery.key();

    let recent_slot_hash = most_recent_slot_hash(&ctx.accounts.slot_hashes.try_borrow_data()?)?;
    let draw = DrawContext {
        slot: clock.slot,
        unix_timestamp: clock.unix_timestamp,
        recent_slot_hash,
    };

    let lottery = &mut ctx.accounts.lottery;
    let payout = match settle_draw(lottery.pick_winner(caller, expected_end_time, &draw))? {
        DrawOutcome::Paid(payout) => payout,
        DrawOutcome::Reset => {
            msg!("{}", LotteryError::NoParticipants);
            msg!("Next end time: {}", lottery.end_time);

            emit!(RoundReset {
                lottery: lottery_key,
                round: lottery.round,
                reason: ResetReason::NoParticipants,
                next_end_time: lottery.end_time,
            });
            return Ok(());
        }
    };

    msg!("Winning index: {}", payout.index);
    msg!("Winner: {}", payout.winner);

    pay_winner(&lottery.to_account_info(), ctx.remaining_accounts, &payout)?;

    emit!(WinnerPicked {
        lottery: lottery_key,
        round: lottery.round,
        winner: payout.winner,
        amount: payout.amount,
        next_end_time: lottery.end_time,
    });

    Ok(())
}
