//! In-memory ledger applying the program's state transitions, so the client
//! can be driven end to end without a validator.

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::Mutex;

use anchor_lang::prelude::Pubkey;
use anchor_lang::solana_program::instruction::Instruction;
use anchor_spl::token::spl_token::{
    self,
    solana_program::program_pack::Pack,
    state::{Account as TokenState, AccountState},
};
use intro_reply_client::{
    client::RawAccount,
    constants::MAX_INTRO_ACCOUNT_LEN,
    utils::{reply_address, reward_account_address, token_mint_address, TaggedAccount},
    ClientConfig, IntroInstruction, Introduction, LedgerErrorCode, LedgerTransport, Reply,
    ReplyCounter, TransportError,
};

#[derive(Default)]
struct LedgerState {
    /// Accounts owned by the program
    program_accounts: HashMap<Pubkey, Vec<u8>>,
    /// Accounts owned by the token program
    token_accounts: HashMap<Pubkey, Vec<u8>>,
    /// Counter bytes served to readers instead of the stored ones
    pinned_reads: HashMap<Pubkey, Vec<u8>>,
    submitted: usize,
}

pub struct MemoryLedger {
    program_id: Pubkey,
    rewards: intro_reply_client::RewardSchedule,
    state: Mutex<LedgerState>,
}

impl MemoryLedger {
    pub fn new(config: &ClientConfig) -> Self {
        Self {
            program_id: config.program_id,
            rewards: config.rewards,
            state: Mutex::new(LedgerState::default()),
        }
    }

    /// Store arbitrary bytes under the program, as a foreign or corrupt
    /// account would appear in a scan.
    pub fn insert_raw(&self, address: Pubkey, data: Vec<u8>) {
        self.lock().program_accounts.insert(address, data);
    }

    pub fn remove(&self, address: &Pubkey) {
        self.lock().program_accounts.remove(address);
    }

    /// Serve `counter` for reads of `address` while the stored value keeps
    /// moving, as a reader racing another replier would observe.
    pub fn pin_read(&self, address: Pubkey, counter: &ReplyCounter) {
        let bytes = counter.to_bytes().expect("counter encodes");
        self.lock().pinned_reads.insert(address, bytes);
    }

    pub fn submitted(&self) -> usize {
        self.lock().submitted
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, LedgerState> {
        self.state.lock().expect("ledger lock poisoned")
    }

    fn apply_program(
        &self,
        state: &mut LedgerState,
        ix: &Instruction,
    ) -> Result<(), TransportError> {
        let payload = IntroInstruction::unpack(&ix.data)
            .map_err(|err| TransportError::Rejected(err.to_string()))?;
        let payer = ix.accounts[0].pubkey;

        match payload {
            IntroInstruction::CreateIntroduction { name, message } => {
                let introduction = ix.accounts[1].pubkey;
                let counter = ix.accounts[2].pubkey;
                if state.program_accounts.contains_key(&introduction) {
                    return Err(TransportError::AccountInUse(introduction));
                }
                let reward_account = self.check_reward_account(state, &payer, &ix.accounts[5].pubkey)?;

                let mut intro_bytes = Introduction::new(payer, name, message)
                    .to_bytes()
                    .map_err(|_| TransportError::Program(LedgerErrorCode::InvalidDataLength))?;
                intro_bytes.resize(MAX_INTRO_ACCOUNT_LEN, 0);
                let counter_bytes = ReplyCounter::new(0).to_bytes().expect("counter encodes");

                state.program_accounts.insert(introduction, intro_bytes);
                state.program_accounts.insert(counter, counter_bytes);
                credit(state, &reward_account, self.rewards.intro_reward_units());
                Ok(())
            }
            IntroInstruction::UpdateIntroduction { name, message } => {
                let introduction = ix.accounts[1].pubkey;
                let stored = state
                    .program_accounts
                    .get(&introduction)
                    .ok_or(TransportError::Program(LedgerErrorCode::UninitializedAccount))?;
                let mut intro = Introduction::from_bytes(stored)
                    .map_err(|_| TransportError::Program(LedgerErrorCode::UninitializedAccount))?;
                if !intro.is_initialized {
                    return Err(TransportError::Program(LedgerErrorCode::UninitializedAccount));
                }
                if intro.name != name {
                    return Err(TransportError::Program(LedgerErrorCode::NameMismatch));
                }
                intro.message = message;

                let mut bytes = intro.to_bytes().expect("introduction encodes");
                bytes.resize(MAX_INTRO_ACCOUNT_LEN, 0);
                state.program_accounts.insert(introduction, bytes);
                Ok(())
            }
            IntroInstruction::AddReply { message } => {
                let introduction = ix.accounts[1].pubkey;
                let counter_address = ix.accounts[2].pubkey;
                let reply = ix.accounts[3].pubkey;
                if state.program_accounts.contains_key(&reply) {
                    return Err(TransportError::AccountInUse(reply));
                }

                let counter = state
                    .program_accounts
                    .get(&counter_address)
                    .and_then(|bytes| ReplyCounter::from_bytes(bytes).ok())
                    .filter(|counter| counter.is_initialized)
                    .ok_or(TransportError::Program(LedgerErrorCode::UninitializedAccount))?;
                let expected = reply_address(&self.program_id, &introduction, counter.count)
                    .map_err(|err| TransportError::Rejected(err.to_string()))?;
                if expected != reply {
                    return Err(TransportError::Program(LedgerErrorCode::InvalidPda));
                }
                let reward_account = self.check_reward_account(state, &payer, &ix.accounts[6].pubkey)?;

                let reply_bytes = Reply::new(introduction, payer, message, counter.count)
                    .to_bytes()
                    .map_err(|_| TransportError::Program(LedgerErrorCode::InvalidDataLength))?;
                let counter_bytes = ReplyCounter::new(counter.count + 1)
                    .to_bytes()
                    .expect("counter encodes");

                state.program_accounts.insert(reply, reply_bytes);
                state.program_accounts.insert(counter_address, counter_bytes);
                credit(state, &reward_account, self.rewards.reply_reward_units());
                Ok(())
            }
        }
    }

    fn check_reward_account(
        &self,
        state: &LedgerState,
        payer: &Pubkey,
        passed: &Pubkey,
    ) -> Result<Pubkey, TransportError> {
        let expected = reward_account_address(&self.program_id, payer)
            .map_err(|err| TransportError::Rejected(err.to_string()))?;
        if *passed != expected {
            return Err(TransportError::Program(LedgerErrorCode::IncorrectAccountPassed));
        }
        if !state.token_accounts.contains_key(&expected) {
            return Err(TransportError::Rejected(format!(
                "reward account {expected} does not exist"
            )));
        }
        Ok(expected)
    }

    fn create_token_account(
        &self,
        state: &mut LedgerState,
        ix: &Instruction,
    ) -> Result<(), TransportError> {
        let address = ix.accounts[1].pubkey;
        let owner = ix.accounts[2].pubkey;
        let mint = ix.accounts[3].pubkey;
        if state.token_accounts.contains_key(&address) {
            return Err(TransportError::AccountInUse(address));
        }
        let expected_mint = token_mint_address(&self.program_id)
            .map_err(|err| TransportError::Rejected(err.to_string()))?;
        if mint != expected_mint {
            return Err(TransportError::Rejected(format!("unknown mint {mint}")));
        }
        state.token_accounts.insert(address, pack_token_account(mint, owner, 0));
        Ok(())
    }
}

impl LedgerTransport for MemoryLedger {
    fn submit(&self, instruction: Instruction) -> Result<(), TransportError> {
        let mut state = self.lock();
        if instruction.program_id == self.program_id {
            self.apply_program(&mut state, &instruction)?;
        } else if instruction.program_id == anchor_spl::associated_token::ID {
            self.create_token_account(&mut state, &instruction)?;
        } else {
            return Err(TransportError::Rejected(format!(
                "unknown program {}",
                instruction.program_id
            )));
        }
        state.submitted += 1;
        Ok(())
    }

    fn fetch_account(&self, address: &Pubkey) -> Result<Option<Vec<u8>>, TransportError> {
        let state = self.lock();
        if let Some(bytes) = state.pinned_reads.get(address) {
            return Ok(Some(bytes.clone()));
        }
        Ok(state
            .program_accounts
            .get(address)
            .or_else(|| state.token_accounts.get(address))
            .cloned())
    }

    fn fetch_program_accounts(
        &self,
        program_id: &Pubkey,
    ) -> Result<Vec<RawAccount>, TransportError> {
        if *program_id != self.program_id {
            return Ok(Vec::new());
        }
        let state = self.lock();
        let mut accounts: Vec<RawAccount> = state
            .program_accounts
            .iter()
            .map(|(address, data)| RawAccount {
                address: *address,
                data: data.clone(),
            })
            .collect();
        // scans come back in no particular order; sort for reproducible runs
        accounts.sort_by_key(|account| account.address);
        Ok(accounts)
    }
}

fn credit(state: &mut LedgerState, reward_account: &Pubkey, amount: u64) {
    if let Some(bytes) = state.token_accounts.get_mut(reward_account) {
        let mut account = TokenState::unpack(bytes).expect("stored token account unpacks");
        account.amount += amount;
        TokenState::pack(account, bytes).expect("token account packs");
    }
}

pub fn pack_token_account(mint: Pubkey, owner: Pubkey, amount: u64) -> Vec<u8> {
    let account = TokenState {
        mint,
        owner,
        amount,
        state: AccountState::Initialized,
        ..TokenState::default()
    };
    let mut bytes = vec![0u8; spl_token::state::Account::LEN];
    TokenState::pack(account, &mut bytes).expect("token account packs");
    bytes
}

/// Route client logs to the test output once per binary.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("debug")),
        )
        .with_test_writer()
        .try_init();
}
