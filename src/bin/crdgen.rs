// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Prints the SSAPractice CustomResourceDefinition as YAML.

use anyhow::{Context, Result};
use kube::CustomResourceExt;
use ssapractice_operator::types::SSAPractice;

fn main() -> Result<()> {
    let crd = serde_yaml::to_string(&SSAPractice::crd()).context("Failed to serialize CRD")?;
    print!("{}", crd);
    Ok(())
}
