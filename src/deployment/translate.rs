// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Translation of an SSAPractice spec into the Deployment we apply

use crate::constants::{labels, target};
use crate::deployment::defaults::default_template;
use crate::error::{Result, SSAPracticeError};
use crate::types::{ContainerTemplate, PodSpecTemplate, PodTemplate, SSAPracticeSpec};
use k8s_openapi::api::apps::v1::{Deployment, DeploymentSpec};
use k8s_openapi::api::core::v1::{Container, PodSpec, PodTemplateSpec};
use k8s_openapi::apimachinery::pkg::apis::meta::v1::LabelSelector;
use kube::api::ObjectMeta;
use std::collections::BTreeMap;

/// The fixed label set shared by the selector and the pod template
pub fn selector_labels() -> BTreeMap<String, String> {
    BTreeMap::from([(
        labels::SELECTOR_KEY.to_string(),
        labels::SELECTOR_VALUE.to_string(),
    )])
}

/// Build the Deployment apply configuration for a spec.
///
/// Fails when no pod template is given, the rest of `depSpec` is optional
/// and only forwarded when set.
pub fn build_deployment(spec: &SSAPracticeSpec) -> Result<Deployment> {
    let dep_spec = spec.dep_spec.as_ref();
    let template = dep_spec
        .and_then(|d| d.template.as_ref())
        .ok_or_else(|| {
            SSAPracticeError::MissingTemplate(
                "spec.depSpec.template is required, containers are defined in spec.depSpec.template.spec.containers[]"
                    .to_string(),
            )
        })?;

    let selector = selector_labels();
    let template = pod_template_spec(default_template(template), &selector);

    Ok(Deployment {
        metadata: ObjectMeta {
            name: Some(target::DEPLOYMENT_NAME.to_string()),
            namespace: Some(target::NAMESPACE.to_string()),
            ..Default::default()
        },
        spec: Some(DeploymentSpec {
            selector: LabelSelector {
                match_labels: Some(selector),
                ..Default::default()
            },
            replicas: dep_spec.and_then(|d| d.replicas),
            strategy: dep_spec.and_then(|d| d.strategy.clone()),
            template,
            ..Default::default()
        }),
        ..Default::default()
    })
}

fn pod_template_spec(template: PodTemplate, selector: &BTreeMap<String, String>) -> PodTemplateSpec {
    let metadata = template.metadata.unwrap_or_default();

    let mut pod_labels = metadata.labels.unwrap_or_default();
    pod_labels.extend(selector.clone());

    PodTemplateSpec {
        metadata: Some(ObjectMeta {
            labels: Some(pod_labels),
            annotations: metadata.annotations,
            ..Default::default()
        }),
        spec: Some(into_pod_spec(template.spec.unwrap_or_default())),
    }
}

// Destructured field by field so a field added to the template types cannot be left behind.
fn into_pod_spec(spec: PodSpecTemplate) -> PodSpec {
    let PodSpecTemplate {
        containers,
        init_containers,
        ephemeral_containers,
        volumes,
        active_deadline_seconds,
        affinity,
        automount_service_account_token,
        dns_config,
        dns_policy,
        enable_service_links,
        host_aliases,
        host_ipc,
        host_network,
        host_pid,
        host_users,
        hostname,
        image_pull_secrets,
        node_name,
        node_selector,
        os,
        overhead,
        preemption_policy,
        priority,
        priority_class_name,
        readiness_gates,
        resource_claims,
        restart_policy,
        runtime_class_name,
        scheduler_name,
        scheduling_gates,
        security_context,
        service_account,
        service_account_name,
        set_hostname_as_fqdn,
        share_process_namespace,
        subdomain,
        termination_grace_period_seconds,
        tolerations,
        topology_spread_constraints,
    } = spec;

    PodSpec {
        containers: containers.into_iter().map(into_container).collect(),
        init_containers,
        ephemeral_containers,
        volumes,
        active_deadline_seconds,
        affinity,
        automount_service_account_token,
        dns_config,
        dns_policy,
        enable_service_links,
        host_aliases,
        host_ipc,
        host_network,
        host_pid,
        host_users,
        hostname,
        image_pull_secrets,
        node_name,
        node_selector,
        os,
        overhead,
        preemption_policy,
        priority,
        priority_class_name,
        readiness_gates,
        resource_claims,
        restart_policy,
        runtime_class_name,
        scheduler_name,
        scheduling_gates,
        security_context,
        service_account,
        service_account_name,
        set_hostname_as_fqdn,
        share_process_namespace,
        subdomain,
        termination_grace_period_seconds,
        tolerations,
        topology_spread_constraints,
    }
}

fn into_container(container: ContainerTemplate) -> Container {
    let ContainerTemplate {
        name,
        image,
        command,
        args,
        env,
        env_from,
        image_pull_policy,
        lifecycle,
        liveness_probe,
        readiness_probe,
        startup_probe,
        ports,
        resize_policy,
        resources,
        restart_policy,
        security_context,
        stdin,
        stdin_once,
        termination_message_path,
        termination_message_policy,
        tty,
        volume_devices,
        volume_mounts,
        working_dir,
    } = container;

    Container {
        name: name.unwrap_or_default(),
        image,
        command,
        args,
        env,
        env_from,
        image_pull_policy,
        lifecycle,
        liveness_probe,
        readiness_probe,
        startup_probe,
        ports,
        resize_policy,
        resources,
        restart_policy,
        security_context,
        stdin,
        stdin_once,
        termination_message_path,
        termination_message_policy,
        tty,
        volume_devices,
        volume_mounts,
        working_dir,
    }
}
