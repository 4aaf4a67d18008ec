// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use crate::constants::DEFAULT_ERROR_REQUEUE_SECS;
use anyhow::{Context, Result};
use std::env;
use std::time::Duration;

/// Operator configuration loaded from environment variables
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Only watch SSAPractice resources in this namespace; all namespaces when unset
    pub watch_namespace: Option<String>,
    /// How long to wait before retrying a failed reconciliation
    pub error_requeue: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            watch_namespace: None,
            error_requeue: Duration::from_secs(DEFAULT_ERROR_REQUEUE_SECS),
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let watch_namespace = lookup("WATCH_NAMESPACE").filter(|ns| !ns.is_empty());

        let error_requeue_secs = match lookup("ERROR_REQUEUE_SECS") {
            Some(value) => value
                .parse::<u64>()
                .with_context(|| format!("ERROR_REQUEUE_SECS is not a number: {}", value))?,
            None => DEFAULT_ERROR_REQUEUE_SECS,
        };

        Ok(Config {
            watch_namespace,
            error_requeue: Duration::from_secs(error_requeue_secs),
        })
    }
}
