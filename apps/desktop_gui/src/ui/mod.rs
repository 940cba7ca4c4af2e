//! UI layer for the desktop app: shell, panels, and portrait rendering.

pub mod app;
