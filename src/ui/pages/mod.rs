//! Page bodies, one module per route kind.
//!
//! Each render function draws into the main area between header and
//! footer. The gallery draws over the whole screen.

pub mod detail;
pub mod fallback;
pub mod gallery;
pub mod home;
pub mod info;
pub mod packages;
