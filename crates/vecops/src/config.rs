use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::Result;

/// Environment variable read by [`OpsConfig::from_env`].
pub const POLICY_ENV_VAR: &str = "VECOPS_ON_VIOLATION";

/// What to do when an operation reports a precondition violation.
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum ViolationPolicy {
    /// Hand the error back to the caller.
    #[default]
    Error,
    /// Log the error and panic, treating the violation as fatal.
    Panic,
}

impl FromStr for ViolationPolicy {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "error" => Ok(ViolationPolicy::Error),
            "panic" => Ok(ViolationPolicy::Panic),
            _ => Err(format!(
                "Unknown violation policy: {}. Expected `error` or `panic`",
                s
            )),
        }
    }
}

/// Caller-side configuration for vector operations.
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct OpsConfig {
    #[serde(default)]
    pub policy: ViolationPolicy,
}

impl OpsConfig {
    pub fn new(policy: ViolationPolicy) -> Self {
        Self { policy }
    }

    /// Parse a JSON document such as `{"policy": "panic"}`.
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    /// Read the policy from [`POLICY_ENV_VAR`], falling back to the default
    /// when it is unset or unparseable.
    pub fn from_env() -> Self {
        match std::env::var(POLICY_ENV_VAR) {
            Ok(value) => match value.parse() {
                Ok(policy) => Self::new(policy),
                Err(msg) => {
                    log::warn!("{}; using default policy", msg);
                    Self::default()
                }
            },
            Err(_) => Self::default(),
        }
    }

    /// Apply the configured policy to the result of an operation.
    ///
    /// Under [`ViolationPolicy::Panic`] an `Err` never reaches the caller.
    #[track_caller]
    pub fn enforce<T>(&self, result: Result<T>) -> Result<T> {
        match (self.policy, result) {
            (ViolationPolicy::Panic, Err(err)) => {
                log::error!("{}", err);
                panic!("{}", err);
            }
            (_, result) => result,
        }
    }
}
