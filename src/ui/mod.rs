//! Presentation settings shared by the renderers: named color themes.

pub mod theme;
