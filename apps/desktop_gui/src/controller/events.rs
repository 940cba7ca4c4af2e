//! Events flowing from the backend worker to the UI thread.

use client_core::GeneratedPortrait;

pub enum UiEvent {
    BackendReady {
        homepage: String,
    },
    BackendStartupFailed {
        reason: String,
    },
    NamesGenerated {
        names: Vec<String>,
        suggestions: Vec<String>,
    },
    /// Diagnostics are logged by the worker; the UI only clears in-flight.
    NamesFailed,
    PortraitGenerated {
        portrait: GeneratedPortrait,
        preview: Option<PreviewImage>,
    },
    PortraitFailed,
}

/// Decoded RGBA pixels shipped across the channel; the UI thread uploads the
/// texture because egui textures are not Send.
pub struct PreviewImage {
    pub width: usize,
    pub height: usize,
    pub rgba: Vec<u8>,
}
