use anchor_lang::prelude::Pubkey;

/// Errors raised by the client while addressing, encoding, decoding or
/// submitting protocol operations.
#[derive(Debug, thiserror::Error)]
pub enum IntroError {
    #[error("Malformed account: {reason}")]
    MalformedAccount { reason: String },
    #[error("Account {0} not found")]
    AccountNotFound(Pubkey),
    #[error("Account {0} is not initialized")]
    UninitializedAccount(Pubkey),
    #[error("Reply counter for introduction {introduction} not found")]
    CounterNotFound { introduction: Pubkey },
    #[error("No off-curve address found for the given seeds")]
    AddressDerivationExhausted,
    #[error("Invalid seeds: {reason}")]
    InvalidSeeds { reason: String },
    #[error("Introduction record of {size} bytes exceeds the {max} byte account")]
    IntroTooLarge { size: usize, max: usize },
    #[error("Encoded payload exceeds {max} bytes")]
    PayloadTooLarge { max: usize },
    #[error("Invalid instruction data")]
    InvalidInstructionData,
    #[error("Submission failed: {0}")]
    SubmissionFailed(#[source] TransportError),
    #[error("Reply address {address} already taken, the reply counter was stale")]
    ReplyAddressCollision {
        address: Pubkey,
        #[source]
        source: TransportError,
    },
    #[error("Fetch failed: {0}")]
    FetchFailed(#[source] TransportError),
    #[error("Invalid configuration: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, IntroError>;

/// Failures reported by a [`crate::client::LedgerTransport`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TransportError {
    #[error("Account {0} already in use")]
    AccountInUse(Pubkey),
    #[error("Program error: {0}")]
    Program(LedgerErrorCode),
    #[error("Transaction rejected: {0}")]
    Rejected(String),
    #[error("Ledger unavailable: {0}")]
    Unavailable(String),
}

/// Custom error codes emitted by the ledger program.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[repr(u32)]
pub enum LedgerErrorCode {
    #[error("PDA account passed in not initialized")]
    UninitializedAccount = 0,
    #[error("Length of data passed exceeds max length")]
    InvalidDataLength = 1,
    #[error("PDA account passed does not match the derived PDA")]
    InvalidPda = 2,
    #[error("Passed name and stored name don't match")]
    NameMismatch = 3,
    #[error("At least one of the accounts passed is incorrect")]
    IncorrectAccountPassed = 4,
}

impl LedgerErrorCode {
    /// Map a raw `Custom(code)` value back to a known program error.
    pub fn from_code(code: u32) -> Option<Self> {
        match code {
            0 => Some(Self::UninitializedAccount),
            1 => Some(Self::InvalidDataLength),
            2 => Some(Self::InvalidPda),
            3 => Some(Self::NameMismatch),
            4 => Some(Self::IncorrectAccountPassed),
            _ => None,
        }
    }

    pub fn code(self) -> u32 {
        self as u32
    }
}
