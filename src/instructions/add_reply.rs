use anchor_lang::prelude::*;
use anchor_lang::solana_program::instruction::Instruction;
use solana_sdk_ids::system_program;

use crate::{
    errors::Result,
    instructions::IntroInstruction,
    utils::{
        mint_authority_address, reply_address, reply_counter_address, reward_account_address,
        token_mint_address,
    },
};

/// Accounts for replying to an introduction, in the order the program reads them.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AddReplyAccounts {
    /// The replier, pays for the reply account and earns the reward
    pub payer: Pubkey,

    /// The introduction being replied to, read only
    pub introduction: Pubkey,

    /// The introduction's reply counter, incremented by the program
    /// # PDA Seeds
    /// - The introduction address
    /// - `REPLY_COUNTER_SEED`
    pub reply_counter: Pubkey,

    /// The reply account to be created
    /// # PDA Seeds
    /// - The introduction address
    /// - The current counter value as 8 big-endian bytes
    pub reply: Pubkey,

    /// The reward token mint
    pub token_mint: Pubkey,

    /// The mint authority, read only here
    pub mint_authority: Pubkey,

    /// The payer's associated token account for the reward mint
    pub reward_account: Pubkey,

    /// The system program
    pub system_program: Pubkey,

    /// The SPL token program
    pub token_program: Pubkey,
}

impl AddReplyAccounts {
    /// `reply_index` must be the counter value read from the ledger just
    /// before building; the program rejects any other reply address.
    pub fn derive(
        program_id: &Pubkey,
        payer: &Pubkey,
        introduction: &Pubkey,
        reply_index: u64,
    ) -> Result<Self> {
        Ok(Self {
            payer: *payer,
            introduction: *introduction,
            reply_counter: reply_counter_address(program_id, introduction)?,
            reply: reply_address(program_id, introduction, reply_index)?,
            token_mint: token_mint_address(program_id)?,
            mint_authority: mint_authority_address(program_id)?,
            reward_account: reward_account_address(program_id, payer)?,
            system_program: system_program::ID,
            token_program: anchor_spl::token::ID,
        })
    }
}

impl ToAccountMetas for AddReplyAccounts {
    fn to_account_metas(&self, _is_signer: Option<bool>) -> Vec<AccountMeta> {
        vec![
            AccountMeta::new(self.payer, true),
            AccountMeta::new_readonly(self.introduction, false),
            AccountMeta::new(self.reply_counter, false),
            AccountMeta::new(self.reply, false),
            AccountMeta::new(self.token_mint, false),
            AccountMeta::new_readonly(self.mint_authority, false),
            AccountMeta::new(self.reward_account, false),
            AccountMeta::new_readonly(self.system_program, false),
            AccountMeta::new_readonly(self.token_program, false),
        ]
    }
}

/// Build the instruction adding a reply to `introduction` at `reply_index`.
/// # Arguments
/// * `program_id` - The ledger program
/// * `payer` - The replier
/// * `introduction` - Address of the introduction being replied to
/// * `reply_index` - Current value of the introduction's reply counter
/// * `message` - The reply text
/// # Returns
/// * `Result<Instruction>` - The instruction, ready for a transport to sign and send
pub fn add_reply(
    program_id: &Pubkey,
    payer: &Pubkey,
    introduction: &Pubkey,
    reply_index: u64,
    message: &str,
) -> Result<Instruction> {
    let accounts = AddReplyAccounts::derive(program_id, payer, introduction, reply_index)?;
    let data = IntroInstruction::AddReply {
        message: message.to_string(),
    }
    .pack()?;

    Ok(Instruction {
        program_id: *program_id,
        accounts: accounts.to_account_metas(None),
        data,
    })
}
