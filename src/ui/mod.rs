//! UI components: the editing surface and the theme.

pub mod editor;
pub mod theme;
