use anchor_lang::prelude::*;
use anchor_lang::solana_program::instruction::Instruction;
use solana_sdk_ids::system_program;

use crate::{
    errors::Result,
    instructions::{check_introduction_size, IntroInstruction},
    utils::{
        introduction_address, mint_authority_address, reply_counter_address,
        reward_account_address, token_mint_address,
    },
};

/// Accounts for posting a new introduction, in the order the program reads them.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CreateIntroductionAccounts {
    /// Author of the introduction, pays for account creation and earns the reward
    pub payer: Pubkey,

    /// The introduction account to be created
    /// # PDA Seeds
    /// - The payer's address
    /// - The introduction name
    pub introduction: Pubkey,

    /// The reply counter created alongside the introduction
    /// # PDA Seeds
    /// - The introduction address
    /// - `REPLY_COUNTER_SEED`
    pub reply_counter: Pubkey,

    /// The reward token mint
    /// # PDA Seeds
    /// - `TOKEN_MINT_SEED`
    pub token_mint: Pubkey,

    /// The mint authority
    /// # PDA Seeds
    /// - `MINT_AUTHORITY_SEED`
    pub mint_authority: Pubkey,

    /// The payer's associated token account for the reward mint
    pub reward_account: Pubkey,

    /// The system program
    pub system_program: Pubkey,

    /// The SPL token program
    pub token_program: Pubkey,
}

impl CreateIntroductionAccounts {
    pub fn derive(program_id: &Pubkey, payer: &Pubkey, name: &str) -> Result<Self> {
        let introduction = introduction_address(program_id, payer, name)?;
        Ok(Self {
            payer: *payer,
            introduction,
            reply_counter: reply_counter_address(program_id, &introduction)?,
            token_mint: token_mint_address(program_id)?,
            mint_authority: mint_authority_address(program_id)?,
            reward_account: reward_account_address(program_id, payer)?,
            system_program: system_program::ID,
            token_program: anchor_spl::token::ID,
        })
    }
}

impl ToAccountMetas for CreateIntroductionAccounts {
    fn to_account_metas(&self, _is_signer: Option<bool>) -> Vec<AccountMeta> {
        vec![
            AccountMeta::new(self.payer, true),
            AccountMeta::new(self.introduction, false),
            AccountMeta::new(self.reply_counter, false),
            AccountMeta::new(self.token_mint, false),
            AccountMeta::new(self.mint_authority, false),
            AccountMeta::new(self.reward_account, false),
            AccountMeta::new_readonly(self.system_program, false),
            AccountMeta::new_readonly(self.token_program, false),
        ]
    }
}

/// Build the instruction posting an introduction for `payer`.
/// # Arguments
/// * `program_id` - The ledger program
/// * `payer` - The author, who signs and receives the reward
/// * `name` - Per-author unique key, at most 32 bytes
/// * `message` - The introduction text
/// # Returns
/// * `Result<Instruction>` - The instruction, ready for a transport to sign and send
pub fn create_introduction(
    program_id: &Pubkey,
    payer: &Pubkey,
    name: &str,
    message: &str,
) -> Result<Instruction> {
    check_introduction_size(name, message)?;
    let accounts = CreateIntroductionAccounts::derive(program_id, payer, name)?;
    let data = IntroInstruction::CreateIntroduction {
        name: name.to_string(),
        message: message.to_string(),
    }
    .pack()?;

    Ok(Instruction {
        program_id: *program_id,
        accounts: accounts.to_account_metas(None),
        data,
    })
}
