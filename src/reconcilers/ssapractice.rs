// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! SSAPractice reconciler - renders each SSAPractice into the managed Deployment
//! and server-side applies it.

use crate::config::Config;
use crate::constants::FIELD_MANAGER;
use crate::deployment::build_deployment;
use crate::error::{Result, SSAPracticeError};
use crate::kubernetes::{controller_owner_reference, ClusterClient};
use crate::types::SSAPractice;
use futures::StreamExt;
use kube::{
    api::PatchParams,
    runtime::{controller::Action, Controller},
    Api, ResourceExt,
};
use kube_runtime::watcher::Config as WatcherConfig;
use std::sync::Arc;
use tracing::{debug, error, info, instrument, warn};

/// What a single reconciliation ended with
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReconcileOutcome {
    /// The SSAPractice was deleted before it could be fetched
    NotFound,
    /// The Deployment was applied
    Applied { name: String },
}

pub struct SSAPracticeReconciler {
    client: Arc<dyn ClusterClient>,
    config: Config,
}

impl SSAPracticeReconciler {
    pub fn new(client: Arc<dyn ClusterClient>, config: Config) -> Self {
        Self { client, config }
    }

    /// Watch SSAPractice resources through `practices` until the stream ends
    pub async fn run(self, practices: Api<SSAPractice>) -> anyhow::Result<()> {
        let context = Arc::new(self);

        Controller::new(practices, WatcherConfig::default())
            .run(reconcile, error_policy, context)
            .for_each(|res| async move {
                match res {
                    Ok(o) => debug!("Reconciled ssapractice: {:?}", o),
                    Err(e) => warn!("Reconciliation error: {:?}", e),
                }
            })
            .await;

        Ok(())
    }

    /// Run one reconciliation for the SSAPractice `namespace/name`.
    ///
    /// Fetch, translate, own and apply, in that order. Any failure aborts the
    /// remaining steps and is returned for the caller to retry.
    #[instrument(skip(self), fields(ssapractice = %format!("{}/{}", namespace, name)))]
    pub async fn reconcile_practice(&self, namespace: &str, name: &str) -> Result<ReconcileOutcome> {
        let practice = match self.client.get_practice(namespace, name).await {
            Ok(Some(practice)) => practice,
            Ok(None) => {
                // Deleted, the Deployment is garbage collected through its owner reference
                debug!("SSAPractice not found, nothing to do");
                return Ok(ReconcileOutcome::NotFound);
            }
            Err(e) => {
                error!("Unable to fetch SSAPractice: {}", e);
                return Err(e);
            }
        };

        let mut deployment = build_deployment(&practice.spec)?;

        let owner = controller_owner_reference(&practice, &()).inspect_err(|e| {
            error!("Unable to create OwnerReference: {}", e);
        })?;
        deployment.metadata.owner_references = Some(vec![owner]);

        let applied = self
            .client
            .apply_deployment(&deployment, &apply_params())
            .await
            .inspect_err(|e| error!("Unable to apply: {}", e))?;

        let applied_name = applied.name_any();
        info!("Applied: {}", applied_name);

        Ok(ReconcileOutcome::Applied { name: applied_name })
    }
}

/// Server-side apply parameters: our field manager always wins conflicts
pub fn apply_params() -> PatchParams {
    PatchParams::apply(FIELD_MANAGER).force()
}

async fn reconcile(practice: Arc<SSAPractice>, ctx: Arc<SSAPracticeReconciler>) -> Result<Action> {
    let namespace = practice.namespace().unwrap_or_default();
    let name = practice.name_any();

    match ctx.reconcile_practice(&namespace, &name).await? {
        ReconcileOutcome::NotFound => debug!("SSAPractice {}/{} is gone, skipped", namespace, name),
        ReconcileOutcome::Applied { name: deployment } => debug!(
            "SSAPractice {}/{} reconciled into Deployment {}",
            namespace, name, deployment
        ),
    }

    Ok(Action::await_change())
}

// Validation errors are requeued like any other failure, the resource may be fixed in the meantime.
fn error_policy(
    practice: Arc<SSAPractice>,
    error: &SSAPracticeError,
    ctx: Arc<SSAPracticeReconciler>,
) -> Action {
    match error {
        SSAPracticeError::MissingTemplate(_) => warn!(
            "SSAPractice {}/{} is invalid: {}",
            practice.namespace().unwrap_or_default(),
            practice.name_any(),
            error
        ),
        _ => error!("Reconciliation error: {}", error),
    }
    Action::requeue(ctx.config.error_requeue)
}
