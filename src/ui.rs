//! UI module for the dash spinner demo
//!
//! # Architecture
//!
//! - **Spinner** (`spinner`): the dash spinner widget itself (state
//!   machine, style surface, canvas renderer)
//! - **Widgets** (`widgets`): composable UI patterns without business logic
//! - **Theme** (`theme`): palettes, styles, and color utilities

pub mod spinner;
pub mod theme;
pub mod widgets;
