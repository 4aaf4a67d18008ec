// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Owner references linking generated objects to their source resource

use crate::error::{Result, SSAPracticeError};
use k8s_openapi::apimachinery::pkg::apis::meta::v1::OwnerReference;
use kube::Resource;

/// Build a controller owner reference pointing at `obj`.
///
/// `dt` resolves the group, version and kind of `K`; it is `()` for
/// statically typed resources. Fails when the kind cannot be resolved or
/// when `obj` has no name or uid yet.
pub fn controller_owner_reference<K: Resource>(
    obj: &K,
    dt: &K::DynamicType,
) -> Result<OwnerReference> {
    let kind = K::kind(dt);
    if kind.is_empty() {
        return Err(SSAPracticeError::OwnerReference(
            "unable to resolve kind of owner".to_string(),
        ));
    }

    let meta = obj.meta();
    let Some(name) = meta.name.clone() else {
        return Err(SSAPracticeError::OwnerReference(format!(
            "{} has no name",
            kind
        )));
    };
    let Some(uid) = meta.uid.clone() else {
        return Err(SSAPracticeError::OwnerReference(format!(
            "{} {} has no uid",
            kind, name
        )));
    };

    Ok(OwnerReference {
        api_version: K::api_version(dt).into_owned(),
        kind: kind.into_owned(),
        name,
        uid,
        block_owner_deletion: Some(true),
        controller: Some(true),
    })
}
