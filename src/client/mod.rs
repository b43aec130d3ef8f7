pub mod config;
pub mod transport;

pub use config::*;
pub use transport::*;

use anchor_lang::prelude::*;
use anchor_lang::solana_program::instruction::Instruction;
use anchor_spl::token::TokenAccount;
use tracing::{debug, info};

use crate::{
    errors::{IntroError, LedgerErrorCode, Result, TransportError},
    instructions,
    state::{Introduction, ProtocolAccount, Reply, ReplyCounter},
    utils::{introduction_address, reply_address, reply_counter_address, reward_account_address, TaggedAccount},
};

/// Performs protocol operations for one payer over a [`LedgerTransport`].
pub struct IntroClient<T> {
    transport: T,
    payer: Pubkey,
    config: ClientConfig,
}

impl<T: LedgerTransport> IntroClient<T> {
    pub fn new(transport: T, payer: Pubkey, config: ClientConfig) -> Self {
        Self {
            transport,
            payer,
            config,
        }
    }

    pub fn payer(&self) -> &Pubkey {
        &self.payer
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    fn program_id(&self) -> &Pubkey {
        &self.config.program_id
    }

    /// Post an introduction and return its address.
    /// The program also creates the introduction's reply counter and credits
    /// `rewards.intro_reward` tokens to the payer's reward account.
    pub fn create_introduction(&self, name: &str, message: &str) -> Result<Pubkey> {
        let ix = instructions::create_introduction(self.program_id(), &self.payer, name, message)?;
        let introduction = ix.accounts[1].pubkey;
        debug!(%introduction, intro_name = name, "derived introduction address");

        self.submit(ix)?;
        info!(
            %introduction,
            reward = self.config.rewards.intro_reward,
            "introduction created"
        );
        Ok(introduction)
    }

    /// Replace the message of the payer's introduction called `name`.
    pub fn update_introduction(&self, name: &str, message: &str) -> Result<Pubkey> {
        let ix = instructions::update_introduction(self.program_id(), &self.payer, name, message)?;
        let introduction = ix.accounts[1].pubkey;

        self.submit(ix)?;
        info!(%introduction, "introduction updated");
        Ok(introduction)
    }

    /// Reply to `introduction` and return the new reply's address.
    ///
    /// The reply counter is read first and the reply address derived from
    /// that exact value. If another reply lands in between, the program
    /// rejects this one and the call fails with `ReplyAddressCollision`;
    /// it is never retried here since a retry would earn a second reward.
    pub fn add_reply(&self, introduction: &Pubkey, message: &str) -> Result<Pubkey> {
        let counter = self.fetch_reply_counter(introduction)?;
        let reply = reply_address(self.program_id(), introduction, counter.count)?;
        debug!(%introduction, %reply, reply_index = counter.count, "derived reply address");

        let ix = instructions::add_reply(
            self.program_id(),
            &self.payer,
            introduction,
            counter.count,
            message,
        )?;
        match self.transport.submit(ix) {
            Ok(()) => {}
            Err(err) if is_stale_reply(&err, &reply) => {
                return Err(IntroError::ReplyAddressCollision {
                    address: reply,
                    source: err,
                })
            }
            Err(err) => return Err(IntroError::SubmissionFailed(err)),
        }

        info!(
            %introduction,
            %reply,
            reply_index = counter.count,
            reward = self.config.rewards.reply_reward,
            "reply added"
        );
        Ok(reply)
    }

    /// Create the payer's reward account. Needed once per user, before the
    /// first reward-earning operation.
    pub fn create_reward_account(&self) -> Result<Pubkey> {
        let ix = instructions::create_reward_account(self.program_id(), &self.payer, &self.payer)?;
        let reward_account = ix.accounts[1].pubkey;
        self.submit(ix)?;
        info!(%reward_account, "reward account created");
        Ok(reward_account)
    }

    /// Decode the introduction stored at `address`.
    pub fn fetch_introduction(&self, address: &Pubkey) -> Result<Introduction> {
        self.fetch_initialized(address)
    }

    /// Look up an introduction by author and name.
    pub fn find_introduction(&self, author: &Pubkey, name: &str) -> Result<(Pubkey, Introduction)> {
        let address = introduction_address(self.program_id(), author, name)?;
        let intro = self.fetch_introduction(&address)?;
        Ok((address, intro))
    }

    /// Current reply counter of `introduction`.
    /// Fails with `CounterNotFound` when the counter account is missing or
    /// not yet initialized; the count is never assumed to be zero.
    pub fn fetch_reply_counter(&self, introduction: &Pubkey) -> Result<ReplyCounter> {
        let address = reply_counter_address(self.program_id(), introduction)?;
        let counter_not_found = || IntroError::CounterNotFound {
            introduction: *introduction,
        };

        let data = self
            .transport
            .fetch_account(&address)
            .map_err(IntroError::FetchFailed)?
            .ok_or_else(counter_not_found)?;
        let counter = ReplyCounter::from_bytes(&data)?;
        if !counter.is_initialized() {
            return Err(counter_not_found());
        }
        Ok(counter)
    }

    /// Decode the reply stored at `address`.
    pub fn fetch_reply(&self, address: &Pubkey) -> Result<Reply> {
        self.fetch_initialized(address)
    }

    /// Every program account, classified by discriminator.
    pub fn scan(&self) -> Result<Vec<(Pubkey, ProtocolAccount)>> {
        let accounts = self
            .transport
            .fetch_program_accounts(self.program_id())
            .map_err(IntroError::FetchFailed)?;
        let total = accounts.len();

        let classified: Vec<(Pubkey, ProtocolAccount)> = accounts
            .into_iter()
            .map(|account| (account.address, ProtocolAccount::classify(&account.data)))
            .collect();
        let unknown = classified
            .iter()
            .filter(|(_, account)| *account == ProtocolAccount::Unknown)
            .count();
        debug!(total, unknown, "scanned program accounts");
        Ok(classified)
    }

    /// All initialized introductions, in scan order.
    pub fn list_introductions(&self) -> Result<Vec<(Pubkey, Introduction)>> {
        Ok(self
            .scan()?
            .into_iter()
            .filter_map(|(address, account)| match account {
                ProtocolAccount::Introduction(intro) => Some((address, intro)),
                _ => None,
            })
            .collect())
    }

    /// Replies whose parent is exactly `introduction`, ordered by reply index.
    pub fn list_replies(&self, introduction: &Pubkey) -> Result<Vec<(Pubkey, Reply)>> {
        let mut replies: Vec<(Pubkey, Reply)> = self
            .scan()?
            .into_iter()
            .filter_map(|(address, account)| match account {
                ProtocolAccount::Reply(reply) if reply.parent_intro == *introduction => {
                    Some((address, reply))
                }
                _ => None,
            })
            .collect();
        replies.sort_by_key(|(_, reply)| reply.reply_index);
        Ok(replies)
    }

    /// Reward token balance of `user` in base units. A user without a reward
    /// account has earned nothing.
    pub fn reward_balance(&self, user: &Pubkey) -> Result<u64> {
        let address = reward_account_address(self.program_id(), user)?;
        let Some(data) = self
            .transport
            .fetch_account(&address)
            .map_err(IntroError::FetchFailed)?
        else {
            return Ok(0);
        };

        let account = TokenAccount::try_deserialize(&mut data.as_slice()).map_err(|err| {
            IntroError::MalformedAccount {
                reason: format!("reward account {address}: {err}"),
            }
        })?;
        Ok(account.amount)
    }

    fn submit(&self, ix: Instruction) -> Result<()> {
        self.transport
            .submit(ix)
            .map_err(IntroError::SubmissionFailed)
    }

    fn fetch_initialized<A: TaggedAccount>(&self, address: &Pubkey) -> Result<A> {
        let data = self
            .transport
            .fetch_account(address)
            .map_err(IntroError::FetchFailed)?
            .ok_or(IntroError::AccountNotFound(*address))?;
        let account = A::from_bytes(&data)?;
        if !account.is_initialized() {
            return Err(IntroError::UninitializedAccount(*address));
        }
        Ok(account)
    }
}

/// A reply built from a stale counter is rejected either because its account
/// already exists or because the program derived a different reply address.
fn is_stale_reply(err: &TransportError, reply: &Pubkey) -> bool {
    match err {
        TransportError::AccountInUse(address) => address == reply,
        TransportError::Program(code) => *code == LedgerErrorCode::InvalidPda,
        _ => false,
    }
}
