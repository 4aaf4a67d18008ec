// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SSAPracticeError {
    #[error("Kubernetes API error: {0}")]
    KubeError(#[from] kube::Error),

    #[error("Invalid SSAPractice: {0}")]
    MissingTemplate(String),

    #[error("Unable to create OwnerReference: {0}")]
    OwnerReference(String),
}

pub type Result<T> = std::result::Result<T, SSAPracticeError>;
