use anchor_lang::prelude::*;

use crate::{
    constants::{REPLY_DISCRIMINATOR, STRING_PREFIX_LEN},
    utils::TaggedAccount,
};

/// Reply account - one reply to an introduction, immutable once written.
/// Fields are declared in the order the ledger program stores them.
#[derive(Clone, Debug, PartialEq, Eq, AnchorSerialize, AnchorDeserialize)]
pub struct Reply {
    // "reply" once the ledger program has written the account
    pub discriminator: String,

    pub is_initialized: bool,

    // The introduction this reply belongs to
    pub parent_intro: Pubkey,

    // The user who posted the reply
    pub author: Pubkey,

    pub message: String,

    // Counter value the reply address was derived from: 0, 1, 2, ...
    pub reply_index: u64,
}

impl Reply {
    pub fn new(
        parent_intro: Pubkey,
        author: Pubkey,
        message: impl Into<String>,
        reply_index: u64,
    ) -> Self {
        Self {
            discriminator: REPLY_DISCRIMINATOR.to_string(),
            is_initialized: true,
            parent_intro,
            author,
            message: message.into(),
            reply_index,
        }
    }

    /// Bytes needed to store a reply with this message.
    pub const fn account_size(message: &str) -> usize {
        (STRING_PREFIX_LEN + REPLY_DISCRIMINATOR.len())
            + 1
            + 32
            + 32
            + (STRING_PREFIX_LEN + message.len())
            + 8
    }
}

impl TaggedAccount for Reply {
    const TAG: &'static str = REPLY_DISCRIMINATOR;
    const MIN_LEN: usize = Self::account_size("");

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
            + 32
            + (STRING_PREFIX_LEN + self.message.len())
            + 8
    }
}
