use anchor_lang::prelude::*;
use anchor_lang::solana_program::instruction::Instruction;

use crate::{
    errors::Result,
    instructions::{check_introduction_size, IntroInstruction},
    utils::introduction_address,
};

/// Accounts for replacing the message of an existing introduction.
/// Updates never mint rewards and never touch the reply counter.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UpdateIntroductionAccounts {
    /// The introduction's author
    pub payer: Pubkey,

    /// The introduction being updated
    /// # PDA Seeds
    /// - The payer's address
    /// - The introduction name
    pub introduction: Pubkey,
}

impl UpdateIntroductionAccounts {
    pub fn derive(program_id: &Pubkey, payer: &Pubkey, name: &str) -> Result<Self> {
        Ok(Self {
            payer: *payer,
            introduction: introduction_address(program_id, payer, name)?,
        })
    }
}

impl ToAccountMetas for UpdateIntroductionAccounts {
    fn to_account_metas(&self, _is_signer: Option<bool>) -> Vec<AccountMeta> {
        vec![
            AccountMeta::new(self.payer, true),
            AccountMeta::new(self.introduction, false),
        ]
    }
}

/// Build the instruction replacing the message of `payer`'s introduction
/// called `name`. The name itself is immutable: it is part of the address.
pub fn update_introduction(
    program_id: &Pubkey,
    payer: &Pubkey,
    name: &str,
    message: &str,
) -> Result<Instruction> {
    check_introduction_size(name, message)?;
    let accounts = UpdateIntroductionAccounts::derive(program_id, payer, name)?;
    let data = IntroInstruction::UpdateIntroduction {
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
