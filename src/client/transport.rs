use anchor_lang::prelude::Pubkey;
use anchor_lang::solana_program::instruction::Instruction;

use crate::errors::TransportError;

/// Raw account as returned by a program account scan.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RawAccount {
    pub address: Pubkey,
    pub data: Vec<u8>,
}

/// The narrow ledger surface the client depends on.
///
/// Implementations own signing, fee payment and confirmation. `submit` must
/// only return once the outcome is known, with no partial effects visible on
/// failure.
pub trait LedgerTransport {
    /// Sign and submit a single instruction.
    fn submit(&self, instruction: Instruction) -> Result<(), TransportError>;

    /// Raw bytes stored at `address`, or `None` if no account exists there.
    fn fetch_account(&self, address: &Pubkey) -> Result<Option<Vec<u8>>, TransportError>;

    /// Every account owned by `program_id`, with no server-side filtering.
    fn fetch_program_accounts(&self, program_id: &Pubkey)
        -> Result<Vec<RawAccount>, TransportError>;
}

impl<T: LedgerTransport + ?Sized> LedgerTransport for &T {
    fn submit(&self, instruction: Instruction) -> Result<(), TransportError> {
        (**self).submit(instruction)
    }

    fn fetch_account(&self, address: &Pubkey) -> Result<Option<Vec<u8>>, TransportError> {
        (**self).fetch_account(address)
    }

    fn fetch_program_accounts(
        &self,
        program_id: &Pubkey,
    ) -> Result<Vec<RawAccount>, TransportError> {
        (**self).fetch_program_accounts(program_id)
    }
}
