// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Custom resource types served by this operator.

pub mod ssapractice;

pub use ssapractice::{
    ContainerTemplate, DepSpec, PodSpecTemplate, PodTemplate, SSAPractice, SSAPracticeSpec,
    SSAPracticeStatus, TemplateMetadata,
};
