use anchor_lang::prelude::Pubkey;
use anchor_lang::solana_program::pubkey::{MAX_SEEDS, MAX_SEED_LEN};
use anchor_spl::associated_token::get_associated_token_address;

use crate::{
    constants::{MINT_AUTHORITY_SEED, REPLY_COUNTER_SEED, TOKEN_MINT_SEED},
    errors::{IntroError, Result},
};

/// Derive the program address for an ordered list of seeds.
/// The bump is searched from 255 downward until the hash of
/// `seeds || bump || program_id || "ProgramDerivedAddress"` lands off the
/// ed25519 curve, so no private key can ever sign for the result.
/// # Arguments
/// * `program_id` - The program that owns the derived address
/// * `seeds` - The seeds in order; order is significant
/// # Returns
/// * `Result<(Pubkey, u8)>` - The derived address and its bump seed
pub fn derive_address(program_id: &Pubkey, seeds: &[&[u8]]) -> Result<(Pubkey, u8)> {
    // one slot is reserved for the bump
    if seeds.len() >= MAX_SEEDS {
        return Err(IntroError::InvalidSeeds {
            reason: format!("{} seeds given, at most {} allowed", seeds.len(), MAX_SEEDS - 1),
        });
    }
    if let Some(seed) = seeds.iter().find(|seed| seed.len() > MAX_SEED_LEN) {
        return Err(IntroError::InvalidSeeds {
            reason: format!("seed of {} bytes exceeds {} bytes", seed.len(), MAX_SEED_LEN),
        });
    }

    Pubkey::try_find_program_address(seeds, program_id)
        .ok_or(IntroError::AddressDerivationExhausted)
}

/// Introduction PDA
/// # PDA Seeds
/// - The author's address
/// - The introduction name as UTF-8 bytes
pub fn introduction_address(program_id: &Pubkey, author: &Pubkey, name: &str) -> Result<Pubkey> {
    derive_address(program_id, &[author.as_ref(), name.as_bytes()]).map(|(address, _)| address)
}

/// Reply counter PDA
/// # PDA Seeds
/// - The introduction address
/// - `REPLY_COUNTER_SEED`
pub fn reply_counter_address(program_id: &Pubkey, introduction: &Pubkey) -> Result<Pubkey> {
    derive_address(program_id, &[introduction.as_ref(), REPLY_COUNTER_SEED])
        .map(|(address, _)| address)
}

/// Reply PDA
/// # PDA Seeds
/// - The introduction address
/// - The reply index as 8 big-endian bytes
pub fn reply_address(program_id: &Pubkey, introduction: &Pubkey, reply_index: u64) -> Result<Pubkey> {
    derive_address(
        program_id,
        &[introduction.as_ref(), reply_index.to_be_bytes().as_ref()],
    )
    .map(|(address, _)| address)
}

pub fn token_mint_address(program_id: &Pubkey) -> Result<Pubkey> {
    derive_address(program_id, &[TOKEN_MINT_SEED]).map(|(address, _)| address)
}

pub fn mint_authority_address(program_id: &Pubkey) -> Result<Pubkey> {
    derive_address(program_id, &[MINT_AUTHORITY_SEED]).map(|(address, _)| address)
}

/// The user's associated token account for the program's reward mint.
pub fn reward_account_address(program_id: &Pubkey, user: &Pubkey) -> Result<Pubkey> {
    let mint = token_mint_address(program_id)?;
    Ok(get_associated_token_address(user, &mint))
}
