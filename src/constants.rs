// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

/// Identity of the Deployment every SSAPractice is rendered into
pub mod target {
    /// Namespace the controller itself is deployed to
    pub const NAMESPACE: &str = "ssa-practice-controller-system";
    pub const DEPLOYMENT_NAME: &str = "ssapractice-nginx";
}

/// Label pair used both as the Deployment selector and on the pod template
pub mod labels {
    pub const SELECTOR_KEY: &str = "apps";
    pub const SELECTOR_VALUE: &str = "ssapractice-nginx";
}

/// The field manager used for server-side apply
pub const FIELD_MANAGER: &str = "ssapractice-fieldmanager";

/// Image used for containers that do not declare one
pub const DEFAULT_IMAGE: &str = "nginx";

/// CRD polling configuration
pub mod crd {
    /// Initial polling interval in seconds when waiting for CRD
    pub const POLL_INTERVAL_SECS: u64 = 10;
    /// Maximum polling interval in seconds (exponential backoff cap)
    pub const POLL_MAX_INTERVAL_SECS: u64 = 60;
}

/// Default delay before a failed reconciliation is retried
pub const DEFAULT_ERROR_REQUEUE_SECS: u64 = 60;
