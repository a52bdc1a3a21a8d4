//! Route ownership for the panel.
//!
//! - `route_sync` - the single authoritative route and its update entry point
//! - `location_channel` - upward channel routed descendants use to request a route
//! - `browser` - host navigation through the History API

pub mod browser;
pub mod location_channel;
pub mod route_sync;

pub use browser::BrowserNavigator;
pub use location_channel::LocationChannel;
pub use route_sync::{Navigator, RouteSynchronizer, SharedNavigator};
