use std::{path::Path, str::FromStr};

use anchor_lang::prelude::Pubkey;
use serde::{Deserialize, Serialize};

use crate::{
    constants::{INTRO_REWARD, REPLY_REWARD, REWARD_TOKEN_DECIMALS},
    errors::{IntroError, Result},
};

/// Client configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// The ledger program all addresses are derived under.
    pub program_id: Pubkey,
    /// Rewards the program is expected to credit.
    pub rewards: RewardSchedule,
}

/// Reward tokens credited by the ledger program per accepted operation.
/// The client never mints; these describe the expected side effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RewardSchedule {
    /// Whole tokens per introduction.
    #[serde(default = "default_intro_reward")]
    pub intro_reward: u64,
    /// Whole tokens per reply.
    #[serde(default = "default_reply_reward")]
    pub reply_reward: u64,
    /// Decimals of the reward mint.
    #[serde(default = "default_token_decimals")]
    pub token_decimals: u8,
}

/// On-disk form, with the program id as a base58 string.
#[derive(Debug, Default, Serialize, Deserialize)]
struct RawConfig {
    #[serde(default)]
    program_id: Option<String>,
    #[serde(default)]
    rewards: RewardSchedule,
}

impl RewardSchedule {
    /// Base units credited for an introduction.
    pub fn intro_reward_units(&self) -> u64 {
        self.to_units(self.intro_reward)
    }

    /// Base units credited for a reply.
    pub fn reply_reward_units(&self) -> u64 {
        self.to_units(self.reply_reward)
    }

    /// Reject schedules whose rewards do not fit a u64 amount in base units.
    pub fn validate(&self) -> Result<()> {
        for (field, tokens) in [
            ("intro_reward", self.intro_reward),
            ("reply_reward", self.reply_reward),
        ] {
            if self.checked_units(tokens).is_none() {
                return Err(IntroError::Config(format!(
                    "{field} of {tokens} tokens with {} decimals overflows a u64 amount",
                    self.token_decimals
                )));
            }
        }
        Ok(())
    }

    // saturates; validated schedules never reach the bound
    fn to_units(&self, tokens: u64) -> u64 {
        self.checked_units(tokens).unwrap_or(u64::MAX)
    }

    fn checked_units(&self, tokens: u64) -> Option<u64> {
        10u64
            .checked_pow(self.token_decimals as u32)
            .and_then(|scale| tokens.checked_mul(scale))
    }
}

impl Default for RewardSchedule {
    fn default() -> Self {
        Self {
            intro_reward: INTRO_REWARD,
            reply_reward: REPLY_REWARD,
            token_decimals: REWARD_TOKEN_DECIMALS,
        }
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            program_id: crate::ID,
            rewards: RewardSchedule::default(),
        }
    }
}

impl ClientConfig {
    pub fn new(program_id: Pubkey) -> Self {
        Self {
            program_id,
            ..Self::default()
        }
    }

    /// Parse a TOML document. Missing keys fall back to the defaults.
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        let raw: RawConfig =
            toml::from_str(contents).map_err(|err| IntroError::Config(err.to_string()))?;
        let program_id = match raw.program_id {
            Some(id) => Pubkey::from_str(&id)
                .map_err(|err| IntroError::Config(format!("program_id {id:?}: {err}")))?,
            None => crate::ID,
        };
        raw.rewards.validate()?;
        Ok(Self {
            program_id,
            rewards: raw.rewards,
        })
    }

    /// Load configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)
            .map_err(|err| IntroError::Config(format!("{}: {err}", path.display())))?;
        Self::from_toml_str(&contents)
    }
}

fn default_intro_reward() -> u64 {
    INTRO_REWARD
}

fn default_reply_reward() -> u64 {
    REPLY_REWARD
}

fn default_token_decimals() -> u8 {
    REWARD_TOKEN_DECIMALS
}
