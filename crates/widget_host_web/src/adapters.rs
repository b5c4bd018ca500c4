use std::rc::Rc;

use widget_host::{HostCapabilities, HostServices};

use crate::{WebClipboardService, WebDigestService};

/// Returns the clipboard adapter for the active build.
pub const fn clipboard_service() -> WebClipboardService {
    WebClipboardService
}

/// Returns the digest adapter for the active build.
pub const fn digest_service() -> WebDigestService {
    WebDigestService
}

/// Returns the capability posture for the active build target.
pub const fn host_capabilities() -> HostCapabilities {
    if cfg!(target_arch = "wasm32") {
        HostCapabilities::browser()
    } else {
        HostCapabilities::native()
    }
}

/// Builds the host service bundle handed to the widget.
pub fn build_host_services() -> HostServices {
    let capabilities = host_capabilities();
    tracing::debug!(?capabilities, "building widget host services");
    HostServices {
        clipboard: Rc::new(clipboard_service()),
        digests: Rc::new(digest_service()),
        capabilities,
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use futures::executor::block_on;
    use widget_host::{clipboard_copy_with, digest_message_with, CapabilityStatus};

    use super::*;

    #[test]
    fn native_bundle_matches_native_capabilities() {
        let services = build_host_services();
        assert_eq!(services.capabilities, HostCapabilities::native());
        assert_eq!(
            services.capabilities.clipboard,
            CapabilityStatus::Unavailable
        );
    }

    #[test]
    fn bundle_services_are_usable_through_trait_objects() {
        let services = build_host_services();
        assert!(block_on(clipboard_copy_with(services.clipboard.as_ref(), "x")).is_err());
        assert_eq!(
            block_on(digest_message_with(services.digests.as_ref(), "abc", None))
                .expect("digest")
                .len(),
            40
        );
    }
}
