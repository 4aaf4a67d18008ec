// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Rendering of SSAPractice resources into the managed Deployment.

pub mod defaults;
pub mod translate;

pub use defaults::{default_container, default_template};
pub use translate::{build_deployment, selector_labels};
