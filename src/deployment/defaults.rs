// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Defaulting of under-specified containers in a pod template

use crate::constants::DEFAULT_IMAGE;
use crate::types::{ContainerTemplate, PodSpecTemplate, PodTemplate};

/// Return a copy of the template with every container defaulted.
/// The input template is left untouched.
pub fn default_template(template: &PodTemplate) -> PodTemplate {
    PodTemplate {
        metadata: template.metadata.clone(),
        spec: template.spec.as_ref().map(|spec| PodSpecTemplate {
            containers: spec.containers.iter().map(default_container).collect(),
            ..spec.clone()
        }),
    }
}

/// Fill in a missing image with `nginx` and a missing name from the image
pub fn default_container(container: &ContainerTemplate) -> ContainerTemplate {
    let image = container
        .image
        .clone()
        .unwrap_or_else(|| DEFAULT_IMAGE.to_string());
    let name = container
        .name
        .clone()
        .unwrap_or_else(|| name_from_image(&image).to_string());

    ContainerTemplate {
        name: Some(name),
        image: Some(image),
        ..container.clone()
    }
}

/// Everything before the first `:`, or the whole image when there is none
pub fn name_from_image(image: &str) -> &str {
    image.split_once(':').map_or(image, |(name, _)| name)
}
