pub mod api_utils;
pub mod error;
pub mod icons;
pub mod localize;
pub mod navigation;
pub mod settings;
pub mod state;
pub mod theme;
