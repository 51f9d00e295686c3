//! Permalinks for map elements.
//!
//! A permalink is `{host}/?id={element id}`. When the map view mounts, [PermalinkHandler] reads the `id`
//! query parameter of the page, resolves it with a [waymark_features::FeatureIndex] and dispatches the
//! camera / display / toast actions to the ui store.
//!
//! Nothing in here touches global browser state. The page url, host and clipboard are all passed in.

mod clipboard;
mod handler;
mod i18n;
mod navigator;
mod permalink;
mod store;

pub use clipboard::*;
pub use handler::*;
pub use i18n::*;
pub use navigator::*;
pub use permalink::*;
pub use store::*;
