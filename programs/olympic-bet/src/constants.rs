use solana_program::native_token::LAMPORTS_PER_SOL;

// PDA seeds
pub const PROGRAM_STATE_SEED: &[u8] = b"program_state";
pub const EVENT_SEED: &[u8] = b"event";
pub const USER_BALANCE_SEED: &[u8] = b"user";
pub const BET_SEED: &[u8] = b"bet";

/// Minimum stake a participant must deposit before placing any bet
/// (10 whole native units, in the smallest denomination).
pub const ENTRY_FEE: u64 = 10 * LAMPORTS_PER_SOL;

/// Maximum length for an event question
pub const MAX_QUESTION_LEN: usize = 200;

/// Maximum number of country options per event
pub const MAX_COUNTRIES: usize = 16;

/// Maximum length for a single country option string
pub const MAX_COUNTRY_LEN: usize = 32;

/// Maximum number of participants per event; bounds the space reserved
/// for the participant and winner lists at event creation
pub const MAX_PARTICIPANTS: usize = 64;
