// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use std::sync::Arc;

use anyhow::Result;
use kube::{Api, Client};
use tracing::{info, warn};

use ssapractice_operator::config::Config;
use ssapractice_operator::kubernetes::{wait_for_practice_crd, KubeClusterClient};
use ssapractice_operator::reconcilers::SSAPracticeReconciler;
use ssapractice_operator::types::SSAPractice;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    info!("Starting SSAPractice operator");

    let config = Config::from_env()?;
    info!(
        "Configuration loaded: watch_namespace={}, error_requeue={:?}",
        config.watch_namespace.as_deref().unwrap_or("<all>"),
        config.error_requeue
    );

    let client = Client::try_default().await?;
    info!("Connected to Kubernetes cluster");

    info!("Waiting for SSAPractice CRD to become available...");
    wait_for_practice_crd(&client).await?;

    let practices: Api<SSAPractice> = match config.watch_namespace.as_deref() {
        Some(namespace) => Api::namespaced(client.clone(), namespace),
        None => Api::all(client.clone()),
    };

    let cluster_client = Arc::new(KubeClusterClient::new(client));
    let reconciler = SSAPracticeReconciler::new(cluster_client, config);

    info!("Starting reconciler...");
    reconciler.run(practices).await?;

    // This should never be reached as the reconciler runs forever
    warn!("Reconciler stopped unexpectedly");
    Ok(())
}
