pub mod add_reply;
pub mod create_introduction;
pub mod create_reward_account;
pub mod update_introduction;

pub use add_reply::*;
pub use create_introduction::*;
pub use create_reward_account::*;
pub use update_introduction::*;

use anchor_lang::prelude::*;

use crate::{
    constants::{
        ADD_REPLY_VARIANT, CREATE_INTRODUCTION_VARIANT, MAX_INSTRUCTION_DATA_LEN,
        MAX_INTRO_ACCOUNT_LEN, UPDATE_INTRODUCTION_VARIANT,
    },
    errors::{IntroError, Result},
    state::Introduction,
    utils::encode_bounded,
};

/// Instruction payloads understood by the ledger program.
/// The borsh variant index is the leading wire byte, so declaration order
/// must not change.
#[derive(Clone, Debug, PartialEq, Eq, AnchorSerialize, AnchorDeserialize)]
pub enum IntroInstruction {
    CreateIntroduction { name: String, message: String },
    UpdateIntroduction { name: String, message: String },
    AddReply { message: String },
}

impl IntroInstruction {
    pub fn variant(&self) -> u8 {
        match self {
            Self::CreateIntroduction { .. } => CREATE_INTRODUCTION_VARIANT,
            Self::UpdateIntroduction { .. } => UPDATE_INTRODUCTION_VARIANT,
            Self::AddReply { .. } => ADD_REPLY_VARIANT,
        }
    }

    /// Encode the payload: variant byte, then each string as a u32 LE length
    /// followed by its UTF-8 bytes.
    pub fn pack(&self) -> Result<Vec<u8>> {
        encode_bounded(self, MAX_INSTRUCTION_DATA_LEN)
    }

    /// Parse a payload. Unknown variants and trailing bytes are rejected.
    pub fn unpack(data: &[u8]) -> Result<Self> {
        Self::try_from_slice(data).map_err(|_| IntroError::InvalidInstructionData)
    }
}

/// Reject introductions that would not fit the account the program allocates.
pub(crate) fn check_introduction_size(name: &str, message: &str) -> Result<()> {
    let size = Introduction::account_size(name, message);
    if size > MAX_INTRO_ACCOUNT_LEN {
        return Err(IntroError::IntroTooLarge {
            size,
            max: MAX_INTRO_ACCOUNT_LEN,
        });
    }
    Ok(())
}
