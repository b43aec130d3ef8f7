// PDA SEEDS

/// Seed for the reward token mint PDA
pub const TOKEN_MINT_SEED: &[u8] = b"token_mint";
/// Seed for the mint authority PDA
pub const MINT_AUTHORITY_SEED: &[u8] = b"token_auth";
/// Second seed of the reply counter PDA, after the introduction address
pub const REPLY_COUNTER_SEED: &[u8] = b"reply";

// DISCRIMINATORS

/// Tag stored at the front of every introduction account
pub const INTRO_DISCRIMINATOR: &str = "intro";
/// Tag stored at the front of every reply counter account
pub const COUNTER_DISCRIMINATOR: &str = "counter";
/// Tag stored at the front of every reply account
pub const REPLY_DISCRIMINATOR: &str = "reply";

// INSTRUCTION VARIANTS

pub const CREATE_INTRODUCTION_VARIANT: u8 = 0;
pub const UPDATE_INTRODUCTION_VARIANT: u8 = 1;
pub const ADD_REPLY_VARIANT: u8 = 2;

// SIZES

/// Width of the u32 length prefix in front of every string
pub const STRING_PREFIX_LEN: usize = 4;
/// Space the ledger program allocates for an introduction account
pub const MAX_INTRO_ACCOUNT_LEN: usize = 1000;
/// Upper bound for an encoded instruction payload
pub const MAX_INSTRUCTION_DATA_LEN: usize = 1000;

// REWARDS

/// Whole tokens credited for an accepted introduction
pub const INTRO_REWARD: u64 = 10;
/// Whole tokens credited for an accepted reply
pub const REPLY_REWARD: u64 = 5;
/// Number of decimals for the reward token, same as SOL
pub const REWARD_TOKEN_DECIMALS: u8 = 9;
