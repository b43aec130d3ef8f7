pub mod introduction;
pub mod reply;
pub mod reply_counter;

pub use introduction::*;
pub use reply::*;
pub use reply_counter::*;

use crate::{
    constants::{COUNTER_DISCRIMINATOR, INTRO_DISCRIMINATOR, REPLY_DISCRIMINATOR},
    utils::{read_tag, TaggedAccount},
};

/// A raw program account sorted into one of the record kinds sharing the
/// program's namespace.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ProtocolAccount {
    Introduction(Introduction),
    Reply(Reply),
    ReplyCounter(ReplyCounter),
    /// Unrecognized prefix, malformed body or uninitialized record
    Unknown,
}

impl ProtocolAccount {
    /// Classify raw account bytes by their discriminator prefix, trying
    /// introduction, reply and counter in that order. Never fails: anything
    /// that does not decode to an initialized record is `Unknown`.
    pub fn classify(data: &[u8]) -> Self {
        let classified = match read_tag(data) {
            Some(INTRO_DISCRIMINATOR) => decode_initialized(data).map(Self::Introduction),
            Some(REPLY_DISCRIMINATOR) => decode_initialized(data).map(Self::Reply),
            Some(COUNTER_DISCRIMINATOR) => decode_initialized(data).map(Self::ReplyCounter),
            _ => None,
        };
        classified.unwrap_or(Self::Unknown)
    }

    pub fn as_introduction(&self) -> Option<&Introduction> {
        match self {
            Self::Introduction(intro) => Some(intro),
            _ => None,
        }
    }

    pub fn as_reply(&self) -> Option<&Reply> {
        match self {
            Self::Reply(reply) => Some(reply),
            _ => None,
        }
    }

    pub fn as_reply_counter(&self) -> Option<&ReplyCounter> {
        match self {
            Self::ReplyCounter(counter) => Some(counter),
            _ => None,
        }
    }
}

fn decode_initialized<T: TaggedAccount>(data: &[u8]) -> Option<T> {
    T::try_decode(data).filter(|account| account.is_initialized())
}
