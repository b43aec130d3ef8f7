use anchor_lang::prelude::*;

use crate::{
    constants::STRING_PREFIX_LEN,
    errors::{IntroError, Result},
};

/// A stored record that starts with a string discriminator followed by an
/// `is_initialized` flag.
pub trait TaggedAccount: AnchorSerialize + AnchorDeserialize {
    /// Discriminator written by the ledger program
    const TAG: &'static str;
    /// Smallest buffer that can hold the record with empty strings
    const MIN_LEN: usize;

    fn discriminator(&self) -> &str;

    fn is_initialized(&self) -> bool;

    /// Exact number of bytes `to_bytes` produces for this record
    fn encoded_len(&self) -> usize;

    fn to_bytes(&self) -> Result<Vec<u8>> {
        encode_bounded(self, self.encoded_len())
    }

    fn from_bytes(data: &[u8]) -> Result<Self> {
        decode_account(data)
    }

    /// Like `from_bytes` but for scans, where a bad record is skipped.
    fn try_decode(data: &[u8]) -> Option<Self> {
        decode_account(data).ok()
    }
}

/// Serialize `value` into a buffer of `max_len` bytes and truncate it to the
/// span actually written.
/// # Arguments
/// * `value` - The value to encode
/// * `max_len` - The largest encoding accepted
/// # Returns
/// * `Result<Vec<u8>>` - The encoded bytes, at most `max_len` long
pub fn encode_bounded<T: AnchorSerialize>(value: &T, max_len: usize) -> Result<Vec<u8>> {
    let mut buffer = vec![0u8; max_len];
    let remaining = {
        let mut cursor: &mut [u8] = &mut buffer;
        value
            .serialize(&mut cursor)
            .map_err(|_| IntroError::PayloadTooLarge { max: max_len })?;
        cursor.len()
    };
    buffer.truncate(max_len - remaining);
    Ok(buffer)
}

/// Read the discriminator at the front of a stored record without decoding
/// the rest of it. Returns `None` when the prefix is truncated or not UTF-8.
pub fn read_tag(data: &[u8]) -> Option<&str> {
    let prefix: [u8; STRING_PREFIX_LEN] = data.get(..STRING_PREFIX_LEN)?.try_into().ok()?;
    let len = u32::from_le_bytes(prefix) as usize;
    let end = STRING_PREFIX_LEN.checked_add(len)?;
    std::str::from_utf8(data.get(STRING_PREFIX_LEN..end)?).ok()
}

/// Decode a stored record of type `T`.
/// Trailing bytes past the record are ignored since accounts may be
/// over-allocated. A zeroed buffer decodes to an uninitialized record.
/// # Errors
/// * `MalformedAccount` - The buffer is shorter than `T::MIN_LEN`, the body
///   does not parse, or an initialized record carries another tag
pub fn decode_account<T: TaggedAccount>(data: &[u8]) -> Result<T> {
    if data.len() < T::MIN_LEN {
        return Err(IntroError::MalformedAccount {
            reason: format!(
                "{} bytes is shorter than the {} byte minimum for a {} record",
                data.len(),
                T::MIN_LEN,
                T::TAG
            ),
        });
    }

    let mut slice = data;
    let account = T::deserialize(&mut slice).map_err(|err| IntroError::MalformedAccount {
        reason: format!("{} record: {}", T::TAG, err),
    })?;

    let zeroed = account.discriminator().is_empty() && !account.is_initialized();
    if account.discriminator() != T::TAG && !zeroed {
        return Err(IntroError::MalformedAccount {
            reason: format!(
                "expected {} discriminator, found {:?}",
                T::TAG,
                account.discriminator()
            ),
        });
    }

    Ok(account)
}
