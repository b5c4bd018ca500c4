//! Typed host-capability contracts and pure helpers used by the comment widget front-end.
//!
//! This crate is the target-independent half of the widget host layer. It exposes theme
//! resolution, URL/anchor sanitization, small predicates and formatters, digest helpers, and the
//! object-safe service traits (clipboard, digest, textarea) that browser adapters in
//! `widget_host_web` implement.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod anchor;
pub mod clipboard;
pub mod config;
pub mod digest;
pub mod error;
pub mod host;
pub mod origin;
pub mod predicate;
pub mod repo;
pub mod textarea;
pub mod theme;

pub use anchor::clean_anchor;
pub use clipboard::{
    clipboard_copy_with, ClipboardFuture, ClipboardService, MemoryClipboardService,
    NoopClipboardService,
};
pub use config::{ConfigError, WidgetConfig};
pub use digest::{
    digest_message, digest_message_with, DigestAlgorithm, DigestFuture, DigestService,
    SoftwareDigestService, DEFAULT_DIGEST_ALGORITHM,
};
pub use error::HostError;
pub use host::{CapabilityStatus, HostCapabilities, HostServices};
pub use origin::{clean_session_param, get_origin_host, OriginHost, SESSION_PARAM};
pub use predicate::{is_empty, MaybeEmpty};
pub use repo::{parse_repo_with_owner, RepoWithOwner};
pub use textarea::{resize_text_area, MemoryTextArea, TextAreaElement, TEXTAREA_MAX_HEIGHT};
pub use theme::{
    get_theme_url, is_available_theme, resolve_theme, AVAILABLE_THEMES, CUSTOM_THEME,
    DEFAULT_THEME,
};
