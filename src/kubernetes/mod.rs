// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Kubernetes utilities for cluster access, owner references and CRD discovery.

pub mod client;
pub mod crd;
pub mod owner;

pub use client::{ClusterClient, KubeClusterClient};
pub use crd::wait_for_practice_crd;
pub use owner::controller_owner_reference;
