//! Host-bundle and capability models for browser and native composition.

use std::rc::Rc;

use crate::{
    ClipboardService, DigestService, MemoryClipboardService, NoopClipboardService,
    SoftwareDigestService,
};

/// Host availability state for one optional capability domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CapabilityStatus {
    /// Capability is available.
    Available,
    /// Capability is not implemented or not supported on the active host.
    Unavailable,
    /// Capability exists but the host may refuse it until the user grants permission.
    RequiresPermission,
}

impl CapabilityStatus {
    /// Returns whether the capability can be attempted at all.
    pub const fn is_usable(self) -> bool {
        !matches!(self, Self::Unavailable)
    }
}

/// Host capability snapshot exposed to widget wiring.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HostCapabilities {
    /// Clipboard write availability.
    pub clipboard: CapabilityStatus,
    /// Whether digests are computed by the host rather than the native fallback.
    pub host_digest: CapabilityStatus,
}

impl HostCapabilities {
    /// Browser capability posture: clipboard writes may prompt, `SubtleCrypto` is present.
    pub const fn browser() -> Self {
        Self {
            clipboard: CapabilityStatus::RequiresPermission,
            host_digest: CapabilityStatus::Available,
        }
    }

    /// Native posture without a windowing host.
    pub const fn native() -> Self {
        Self {
            clipboard: CapabilityStatus::Unavailable,
            host_digest: CapabilityStatus::Unavailable,
        }
    }
}

/// Runtime-selected host service bundle handed to the widget.
#[derive(Clone)]
pub struct HostServices {
    /// Clipboard write service.
    pub clipboard: Rc<dyn ClipboardService>,
    /// Message digest provider.
    pub digests: Rc<dyn DigestService>,
    /// Availability snapshot for the services above.
    pub capabilities: HostCapabilities,
}

impl HostServices {
    /// Native bundle: no clipboard, software digests.
    pub fn native() -> Self {
        Self {
            clipboard: Rc::new(NoopClipboardService),
            digests: Rc::new(SoftwareDigestService),
            capabilities: HostCapabilities::native(),
        }
    }

    /// Test bundle around an in-memory clipboard, returned alongside a handle to inspect it.
    pub fn memory() -> (Self, MemoryClipboardService) {
        let clipboard = MemoryClipboardService::default();
        let services = Self {
            clipboard: Rc::new(clipboard.clone()),
            digests: Rc::new(SoftwareDigestService),
            capabilities: HostCapabilities {
                clipboard: CapabilityStatus::Available,
                host_digest: CapabilityStatus::Unavailable,
            },
        };
        (services, clipboard)
    }
}

impl std::fmt::Debug for HostServices {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HostServices")
            .field("capabilities", &self.capabilities)
            .finish_non_exhaustive()
    }
}
