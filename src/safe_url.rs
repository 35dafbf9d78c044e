//! Safe URL Module
//!
//! Marks resource URLs as vetted for embedding in a rendering sink.

use std::fmt;

use serde::Serialize;

// == Public Constants ==
/// Viewer configuration appended to every cached document URL
pub const VIEWER_FRAGMENT: &str = "#toolbar=0&navpanes=0";

// == Safe URL ==
/// A URL that has passed through a [`Sanitizer`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct SafeUrl(String);

impl SafeUrl {
    /// Marks a URL as trusted without inspecting it.
    ///
    /// Intended for [`Sanitizer`] implementations.
    pub fn trust(url: impl Into<String>) -> Self {
        Self(url.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for SafeUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// == Sanitizer ==
/// Turns a raw URL into one that may be rendered.
pub trait Sanitizer {
    fn wrap_for_rendering(&self, url: String) -> SafeUrl;
}

/// Tags every URL as safe. Cached URLs always point at blobs this process
/// minted itself.
#[derive(Debug, Clone, Copy, Default)]
pub struct PassThroughSanitizer;

impl Sanitizer for PassThroughSanitizer {
    fn wrap_for_rendering(&self, url: String) -> SafeUrl {
        SafeUrl::trust(url)
    }
}
