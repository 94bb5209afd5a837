use anchor_lang::prelude::*;

#[error_code]
pub enum LotteryError {
    // Entry Errors (0x1000 - 0x1999)
    #[msg("Owner cannot participate in the lottery")]
    OwnerNotAllowed = 0x1000,

    #[msg("Lottery has ended")]
    RoundEnded = 0x1001,

    #[msg("You can only participate once")]
    AlreadyEntered = 0x1002,

    #[msg("Not enough lamports to enter")]
    InsufficientPayment = 0x1003,

    #[msg("Round has reached the maximum number of participants")]
    RoundFull = 0x1004,

    // Draw Errors (0x2000 - 0x2999)
    #[msg("Only the owner can pick a winner")]
    NotOwner = 0x2000,

    #[msg("Lottery is still ongoing")]
    RoundOngoing = 0x2001,

    #[msg("No participants in the lottery. Lottery has been reset")]
    NoParticipants = 0x2002,

    #[msg("Winner account was not passed in remaining accounts")]
    WinnerAccountMissing = 0x2003,

    #[msg("Slot hashes sysvar data is malformed")]
    InvalidSlotHashes = 0x2004,

    // Configuration Errors (0x3000 - 0x3999)
    #[msg("Round duration must be greater than 0")]
    InvalidDuration = 0x3000,

    #[msg("Entry fee must be greater than 0")]
    InvalidEntryFee = 0x3001,

    // Oracle Errors (0x4000 - 0x4999)
    #[msg("Oracle price must be greater than 0")]
    InvalidOraclePrice = 0x4000,

    #[msg("Only the feed authority can update the price")]
    NotFeedAuthority = 0x4001,

    // Math Errors (0x5000 - 0x5999)
    #[msg("Arithmetic overflow")]
    MathOverflow = 0x5000,
}
