use anchor_lang::prelude::*;

use crate::{
    constants::{INTRO_DISCRIMINATOR, STRING_PREFIX_LEN},
    utils::TaggedAccount,
};

/// Introduction account - one user's self-introduction, keyed by author and name
#[derive(Clone, Debug, PartialEq, Eq, AnchorSerialize, AnchorDeserialize)]
pub struct Introduction {
    // "intro" once the ledger program has written the account
    pub discriminator: String,

    pub is_initialized: bool,

    // The user who posted the introduction, first PDA seed
    pub author: Pubkey,

    // Second PDA seed, immutable after creation
    pub name: String,

    // Replaced in place by update
    pub message: String,
}

impl Introduction {
    pub fn new(author: Pubkey, name: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            discriminator: INTRO_DISCRIMINATOR.to_string(),
            is_initialized: true,
            author,
            name: name.into(),
            message: message.into(),
        }
    }

    /// Bytes needed to store an introduction with this name and message.
    pub const fn account_size(name: &str, message: &str) -> usize {
        (STRING_PREFIX_LEN + INTRO_DISCRIMINATOR.len())
            + 1
            + 32
            + (STRING_PREFIX_LEN + name.len())
            + (STRING_PREFIX_LEN + message.len())
    }
}

impl TaggedAccount for Introduction {
    const TAG: &'static str = INTRO_DISCRIMINATOR;
    const MIN_LEN: usize = Self::account_size("", "");

    fn discriminator(&self) -> &str {
        &self.discriminator
    }

    fn is_initialized(&self) -> bool {
        self.is_initialized
    }

    fn encoded_len(&self) -> usize {
        (STRING_PREFIX_LEN + self.discriminator.len())
            + 1
            + 32
            + (STRING_PREFIX_LEN + self.name.len())
            + (STRING_PREFIX_LEN + self.message.len())
    }
}
