use anchor_lang::prelude::*;

use crate::{
    constants::{COUNTER_DISCRIMINATOR, STRING_PREFIX_LEN},
    utils::TaggedAccount,
};

/// Reply counter account - number of replies posted to one introduction.
/// The current count is the seed of the next reply's address.
#[derive(Clone, Debug, PartialEq, Eq, AnchorSerialize, AnchorDeserialize)]
pub struct ReplyCounter {
    // "counter" once the ledger program has written the account
    pub discriminator: String,

    pub is_initialized: bool,

    // Starts at 0, bumped by exactly 1 per accepted reply
    pub count: u64,
}

impl ReplyCounter {
    pub const SIZE: usize = (STRING_PREFIX_LEN + COUNTER_DISCRIMINATOR.len()) + 1 + 8;

    pub fn new(count: u64) -> Self {
        Self {
            discriminator: COUNTER_DISCRIMINATOR.to_string(),
            is_initialized: true,
            count,
        }
    }
}

impl TaggedAccount for ReplyCounter {
    const TAG: &'static str = COUNTER_DISCRIMINATOR;
    const MIN_LEN: usize = Self::SIZE;

    fn discriminator(&self) -> &str {
        &self.discriminator
    }

    fn is_initialized(&self) -> bool {
        self.is_initialized
    }

    fn encoded_len(&self) -> usize {
        (STRING_PREFIX_LEN + self.discriminator.len()) + 1 + 8
    }
}
