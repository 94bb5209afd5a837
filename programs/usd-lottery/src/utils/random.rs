use crate::error::LotteryError;
use anchor_lang::prelude::*;
use solana_program::keccak;

/// Chain context mixed into the draw seed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DrawContext {
    pub slot: u64,
    pub unix_timestamp: i64,
    /// Most recent entry of the `SlotHashes` sysvar.
    pub recent_slot_hash: [u8; 32],
}

/// Seed for the draw: keccak256 over the caller-supplied end time, the caller
/// and the chain context.
///
/// NOTE: the slot leader can predict or grind every input here; this is not a VRF.
pub fn draw_seed(expected_end_time: i64, caller: &Pubkey, ctx: &DrawContext) -> [u8; 32] {
    keccak::hashv(&[
        &expected_end_time.to_le_bytes(),
        caller.as_ref(),
        &ctx.slot.to_le_bytes(),
        &ctx.unix_timestamp.to_le_bytes(),
        &ctx.recent_slot_hash,
    ])
    .to_bytes()
}

/// Reduces `seed` to an index in `0..len`.
pub fn winner_index(seed: &[u8; 32], len: usize) -> Result<usize> {
    require!(len > 0, LotteryError::NoParticipants);

    let mut head = [0u8; 8];
    head.copy_from_slice(&seed[..8]);
    let index = u64::from_le_bytes(head) % len as u64;

    Ok(index as usize)
}

/// Reads the newest hash out of raw `SlotHashes` sysvar data.
///
/// Layout: `u64` entry count, then `(u64 slot, [u8; 32] hash)` entries, newest first.
pub fn most_recent_slot_hash(data: &[u8]) -> Result<[u8; 32]> {
    let entry = data.get(16..48).ok_or(LotteryError::InvalidSlotHashes)?;

    let mut hash = [0u8; 32];
    hash.copy_from_slice(entry);

    Ok(hash)
}

#[cfg(test)]
mod tests {
    use super::*;
    use anchor_lang::error::Error;

    #[test]
    fn test_seed_depends_on_every_input() {
        let caller = Pubkey::new_unique();
        let ctx = DrawContext {
            slot: 42,
            unix_timestamp: 1_700_000_000,
            recent_slot_hash: [7u8; 32],
        };
        let base = draw_seed(600, &caller, &ctx);

        assert_eq!(base, draw_seed(600, &caller, &ctx));
        assert_ne!(base, draw_seed(601, &caller, &ctx));
        assert_ne!(base, draw_seed(600, &Pubkey::new_unique(), &ctx));
        assert_ne!(base, draw_seed(600, &caller, &DrawContext { slot: 43, ..ctx }));
        assert_ne!(
            base,
            draw_seed(600, &caller, &DrawContext { unix_timestamp: 1_700_000_001, ..ctx })
        );
        assert_ne!(
            base,
            draw_seed(600, &caller, &DrawContext { recent_slot_hash: [8u8; 32], ..ctx })
        );
    }

    #[test]
    fn test_winner_index_in_range() {
        let mut seed = [0u8; 32];
        seed[..8].copy_from_slice(&17u64.to_le_bytes());

        assert_eq!(winner_index(&seed, 1).unwrap(), 0);
        assert_eq!(winner_index(&seed, 5).unwrap(), 2);
        assert_eq!(winner_index(&seed, 17).unwrap(), 0);
        assert_eq!(winner_index(&seed, 64).unwrap(), 17);

        let seed = [0xffu8; 32];
        assert_eq!(winner_index(&seed, 10).unwrap(), (u64::MAX % 10) as usize);
    }

    #[test]
    fn test_winner_index_empty() {
        assert_eq!(
            winner_index(&[0u8; 32], 0).unwrap_err(),
            Error::from(LotteryError::NoParticipants)
        );
    }

    #[test]
    fn test_most_recent_slot_hash() {
        let mut data = vec![0u8; 8 + 2 * 40];
        data[..8].copy_from_slice(&2u64.to_le_bytes());
        data[8..16].copy_from_slice(&99u64.to_le_bytes());
        data[16..48].copy_from_slice(&[3u8; 32]);
        data[48..56].copy_from_slice(&98u64.to_le_bytes());
        data[56..88].copy_from_slice(&[4u8; 32]);

        assert_eq!(most_recent_slot_hash(&data).unwrap(), [3u8; 32]);
    }

    #[test]
    fn test_most_recent_slot_hash_truncated() {
        assert_eq!(
            most_recent_slot_hash(&[0u8; 20]).unwrap_err(),
            Error::from(LotteryError::InvalidSlotHashes)
        );
    }
}
