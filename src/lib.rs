//! Client-side protocol layer for the student introduction program.
//!
//! The ledger program stores three record kinds (introductions, reply
//! counters and replies) in one untyped account namespace and credits reward
//! tokens for every accepted post. This crate derives the account addresses,
//! encodes the instructions and decodes stored records back into typed
//! entities. Networking is left to a [`client::LedgerTransport`]
//! implementation supplied by the caller.

#![allow(deprecated)]

use anchor_lang::prelude::*;

pub mod client;
pub mod constants;
pub mod errors;
pub mod instructions;
pub mod state;
pub mod utils;

pub use client::{ClientConfig, IntroClient, LedgerTransport, RewardSchedule};
pub use errors::{IntroError, LedgerErrorCode, TransportError};
pub use instructions::IntroInstruction;
pub use state::{Introduction, ProtocolAccount, Reply, ReplyCounter};

declare_id!("9nKhQhLdUq5z37SjiqmsNGGEXDUmLsoryek1gvWxUKsg");
