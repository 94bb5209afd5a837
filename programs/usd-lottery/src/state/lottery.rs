use crate::{
    constants::*,
    error::LotteryError,
    oracle::PriceOracle,
    utils::{draw_seed, entrance_fee_lamports, winner_index, DrawContext},
};
use anchor_lang::prelude::*;

#[account]
#[derive(InitSpace)]
pub struct Lottery {
    /// The authority that created the lottery and alone may draw a winner.
    /// Never allowed to enter.
    pub owner: Pubkey,

    /// The `PriceFeed` account used to price entries.
    pub price_feed: Pubkey,

    /// Entry fee in USD, fixed point with `NATIVE_DECIMALS`.
    pub entry_fee_usd: u128,

    /// Length of every round in minutes.
    pub duration_minutes: u64,

    /// UNIX timestamp at which the current round stops accepting entries.
    pub end_time: i64,

    /// Entrants of the current round in entry order. Doubles as the
    /// has-entered set since an entrant can appear only once.
    #[max_len(MAX_PARTICIPANTS)]
    pub participants: Vec<Pubkey>,

    /// Winner of the most recently resolved round.
    pub last_winner: Option<Pubkey>,

    /// Lamports pooled for the prize, on top of the account's rent reserve.
    pub pot_amount: u64,

    /// Number of rounds closed so far, by payout or by reset.
    pub round: u64,

    pub bump: u8,
}

/// Outcome of a successful draw.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Payout {
    pub winner: Pubkey,
    pub index: u32,
    pub amount: u64,
}

impl Lottery {
    pub fn open(
        &mut self,
        owner: Pubkey,
        price_feed: Pubkey,
        duration_minutes: u64,
        entry_fee_usd: u128,
        now: i64,
        bump: u8,
    ) -> Result<()> {
        require!(duration_minutes > 0, LotteryError::InvalidDuration);
        require!(entry_fee_usd > 0, LotteryError::InvalidEntryFee);

        self.owner = owner;
        self.price_feed = price_feed;
        self.entry_fee_usd = entry_fee_usd;
        self.duration_minutes = duration_minutes;
        self.participants = Vec::new();
        self.last_winner = None;
        self.pot_amount = 0;
        self.round = 0;
        self.bump = bump;
        self.end_time = self.next_end_time(now)?;

        Ok(())
    }

    pub fn round_length_secs(&self) -> Result<i64> {
        i64::try_from(self.duration_minutes)
            .ok()
            .and_then(|minutes| minutes.checked_mul(SECONDS_PER_MINUTE))
            .ok_or_else(|| LotteryError::MathOverflow.into())
    }

    fn next_end_time(&self, now: i64) -> Result<i64> {
        now.checked_add(self.round_length_secs()?)
            .ok_or_else(|| LotteryError::MathOverflow.into())
    }

    pub fn is_open(&self, now: i64) -> bool {
        now < self.end_time
    }

    pub fn has_entered(&self, entrant: &Pubkey) -> bool {
        self.participants.contains(entrant)
    }

    /// Lamports an entrant must pay at the oracle's current price.
    pub fn entrance_fee<O: PriceOracle>(&self, oracle: &O) -> Result<u64> {
        entrance_fee_lamports(self.entry_fee_usd, oracle.latest_price()?)
    }

    /// Records `entrant` for the current round and pools `payment`, returning
    /// the entrance fee it was checked against.
    ///
    /// Checks run in a fixed order and the first failing one is reported:
    /// owner, round end, duplicate entry, payment, capacity.
    pub fn enter<O: PriceOracle>(
        &mut self,
        entrant: Pubkey,
        payment: u64,
        now: i64,
        oracle: &O,
    ) -> Result<u64> {
        require_keys_neq!(entrant, self.owner, LotteryError::OwnerNotAllowed);
        require!(self.is_open(now), LotteryError::RoundEnded);
        require!(!self.has_entered(&entrant), LotteryError::AlreadyEntered);

        let fee = self.entrance_fee(oracle)?;
        require!(payment >= fee, LotteryError::InsufficientPayment);

        require!(
            self.participants.len() < MAX_PARTICIPANTS as usize,
            LotteryError::RoundFull
        );

        self.add_to_pot(payment)?;
        self.participants.push(entrant);

        Ok(fee)
    }

    pub fn add_to_pot(&mut self, amount: u64) -> Result<()> {
        self.pot_amount = self
            .pot_amount
            .checked_add(amount)
            .ok_or(LotteryError::MathOverflow)?;
        Ok(())
    }

    /// Draws the winner of a closed round and starts the next one.
    ///
    /// With no entrants the round is still reset before `NoParticipants` is
    /// returned; callers that persist state must keep that reset.
    pub fn pick_winner(
        &mut self,
        caller: Pubkey,
        expected_end_time: i64,
        draw: &DrawContext,
    ) -> Result<Payout> {
        let now = draw.unix_timestamp;

        require_keys_eq!(caller, self.owner, LotteryError::NotOwner);
        require!(!self.is_open(now), LotteryError::RoundOngoing);

        if self.participants.is_empty() {
            self.reset_round(now)?;
            return err!(LotteryError::NoParticipants);
        }

        let seed = draw_seed(expected_end_time, &caller, draw);
        let index = winner_index(&seed, self.participants.len())?;
        let winner = self.participants[index];
        let amount = self.pot_amount;

        self.last_winner = Some(winner);
        self.pot_amount = 0;
        self.reset_round(now)?;

        Ok(Payout {
            winner,
            index: index as u32,
            amount,
        })
    }

    pub fn reset_round(&mut self, now: i64) -> Result<()> {
        self.end_time = self.next_end_time(now)?;
        self.participants.clear();
        self.round = self.round.checked_add(1).ok_or(LotteryError::MathOverflow)?;
        Ok(())
    }
}
