// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! CRD availability checking utilities

use crate::constants::crd::{POLL_INTERVAL_SECS, POLL_MAX_INTERVAL_SECS};
use crate::error::Result;
use crate::types::SSAPractice;
use kube::{discovery::Discovery, Client, Resource};
use std::time::Duration;
use tokio::time::sleep;
use tracing::{info, warn};

/// Wait for the SSAPractice CRD to be served by the API server.
/// This uses exponential backoff starting at POLL_INTERVAL_SECS seconds.
pub async fn wait_for_practice_crd(client: &Client) -> Result<()> {
    let api_version = SSAPractice::api_version(&());
    let mut interval = POLL_INTERVAL_SECS;

    loop {
        match check_practice_crd_exists(client).await {
            Ok(true) => {
                info!("SSAPractice CRD ({}) is available", api_version);
                return Ok(());
            }
            Ok(false) => {
                info!(
                    "SSAPractice CRD ({}) not yet available, waiting {} seconds...",
                    api_version, interval
                );
            }
            Err(e) => {
                warn!(
                    "Error checking for SSAPractice CRD: {}, retrying in {} seconds...",
                    e, interval
                );
            }
        }

        sleep(Duration::from_secs(interval)).await;

        interval = next_interval(interval);
    }
}

fn next_interval(interval: u64) -> u64 {
    (interval * 2).min(POLL_MAX_INTERVAL_SECS)
}

/// Check if the SSAPractice CRD exists by attempting to discover it.
async fn check_practice_crd_exists(client: &Client) -> Result<bool> {
    let group_name = SSAPractice::group(&());
    let discovery = Discovery::new(client.clone())
        .filter(&[group_name.as_ref()])
        .run()
        .await?;

    let found = discovery
        .groups()
        .filter(|group| group.name() == group_name)
        .flat_map(|group| group.recommended_resources())
        .any(|(ar, _)| ar.kind == SSAPractice::kind(&()) && ar.version == SSAPractice::version(&()));

    Ok(found)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::MockService;

    #[test]
    fn test_backoff_is_capped() {
        assert_eq!(next_interval(10), 20);
        assert_eq!(next_interval(40), 60);
        assert_eq!(next_interval(60), 60);
    }

    #[tokio::test]
    async fn test_crd_found_via_discovery() {
        let group = serde_json::json!({
            "kind": "APIGroup",
            "apiVersion": "v1",
            "name": "ssapractice.jnytnai0613.github.io",
            "versions": [{ "groupVersion": "ssapractice.jnytnai0613.github.io/v1", "version": "v1" }],
            "preferredVersion": { "groupVersion": "ssapractice.jnytnai0613.github.io/v1", "version": "v1" }
        });
        let groups = serde_json::json!({
            "kind": "APIGroupList",
            "apiVersion": "v1",
            "groups": [group]
        });
        let resources = serde_json::json!({
            "kind": "APIResourceList",
            "apiVersion": "v1",
            "groupVersion": "ssapractice.jnytnai0613.github.io/v1",
            "resources": [{
                "name": "ssapractices",
                "singularName": "ssapractice",
                "namespaced": true,
                "kind": "SSAPractice",
                "verbs": ["get", "list", "watch", "create", "update", "patch", "delete"]
            }]
        });
        let client = MockService::new()
            .on_get("/apis/ssapractice.jnytnai0613.github.io/v1", 200, &resources.to_string())
            .on_get("/apis", 200, &groups.to_string())
            .on_get(
                "/api",
                200,
                r#"{"kind":"APIVersions","versions":["v1"],"serverAddressByClientCIDRs":[]}"#,
            )
            .into_client();

        assert!(check_practice_crd_exists(&client).await.unwrap());
    }

    #[tokio::test]
    async fn test_crd_missing_from_discovery() {
        let groups = serde_json::json!({
            "kind": "APIGroupList",
            "apiVersion": "v1",
            "groups": []
        });
        let client = MockService::new()
            .on_get("/apis", 200, &groups.to_string())
            .on_get(
                "/api",
                200,
                r#"{"kind":"APIVersions","versions":["v1"],"serverAddressByClientCIDRs":[]}"#,
            )
            .into_client();

        assert!(!check_practice_crd_exists(&client).await.unwrap());
    }
}
