//! Reusable UI widgets - composable components without business logic
//!
//! Widgets must not depend on application messages; the demo app maps
//! its own state onto them.

mod toast;

pub use toast::{Toast, ToastStyle, view_toast};
