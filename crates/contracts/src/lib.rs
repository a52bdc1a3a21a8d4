//! Shared data contracts between the host application and the KNX panel.
//!
//! Everything here is plain serde data: the host hands these values over as JS
//! objects, the panel decodes them and never mutates host-owned state.

pub mod domain;
pub mod system;
