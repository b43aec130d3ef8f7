use anchor_lang::prelude::*;
use anchor_lang::solana_program::instruction::Instruction;
use anchor_spl::associated_token::spl_associated_token_account::instruction::create_associated_token_account;

use crate::{errors::Result, utils::token_mint_address};

/// Build the instruction creating `owner`'s reward account so the program can
/// credit it. Must land before the owner's first introduction or reply.
/// # Arguments
/// * `program_id` - The ledger program, whose mint the account will hold
/// * `payer` - Funds the new account
/// * `owner` - The user the reward account belongs to
pub fn create_reward_account(
    program_id: &Pubkey,
    payer: &Pubkey,
    owner: &Pubkey,
) -> Result<Instruction> {
    let mint = token_mint_address(program_id)?;
    Ok(create_associated_token_account(
        payer,
        owner,
        &mint,
        &anchor_spl::token::ID,
    ))
}
