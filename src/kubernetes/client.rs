// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Cluster access used by the reconciler: fetching SSAPractice resources
//! and server-side applying the generated Deployment.

use crate::error::Result;
use crate::types::SSAPractice;
use async_trait::async_trait;
use k8s_openapi::api::apps::v1::Deployment;
use kube::{
    api::{Patch, PatchParams},
    Api, Client, ResourceExt,
};
use tracing::{debug, instrument};

#[cfg(test)]
use mockall::automock;

/// Operations the reconciler performs against the cluster.
///
/// Implemented on top of `kube::Client` in production and mocked in tests.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait ClusterClient: Send + Sync {
    /// Fetch an SSAPractice, `None` when it does not exist (anymore)
    async fn get_practice(&self, namespace: &str, name: &str) -> Result<Option<SSAPractice>>;

    /// Server-side apply a Deployment, returning the object as stored by the API server
    async fn apply_deployment(&self, deployment: &Deployment, params: &PatchParams)
        -> Result<Deployment>;
}

/// `ClusterClient` backed by a Kubernetes API client
#[derive(Clone)]
pub struct KubeClusterClient {
    client: Client,
}

impl KubeClusterClient {
    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ClusterClient for KubeClusterClient {
    #[instrument(skip(self))]
    async fn get_practice(&self, namespace: &str, name: &str) -> Result<Option<SSAPractice>> {
        let practices: Api<SSAPractice> = Api::namespaced(self.client.clone(), namespace);
        Ok(practices.get_opt(name).await?)
    }

    #[instrument(
        skip(self, deployment, params),
        fields(deployment = %format!("{}/{}", deployment.namespace().unwrap_or_default(), deployment.name_any()))
    )]
    async fn apply_deployment(
        &self,
        deployment: &Deployment,
        params: &PatchParams,
    ) -> Result<Deployment> {
        let namespace = deployment.namespace().unwrap_or_default();
        let name = deployment.name_any();
        let deployments: Api<Deployment> = Api::namespaced(self.client.clone(), &namespace);

        debug!("Applying deployment {}/{}", namespace, name);
        Ok(deployments
            .patch(&name, params, &Patch::Apply(deployment))
            .await?)
    }
}
