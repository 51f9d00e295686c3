use std::cell::RefCell;

use waymark_core::config::WaymarkConfig;
use waymark_core::prelude::*;
use waymark_features::FeatureIndex;

use crate::{
    copy_permalink, generate_permalink, Action, Clipboard, Dispatch, Localize,
    Navigation, Navigator, NavigatorHooks, QueryParams, PERMALINK_ID_PARAM,
};

/// The page the map is shown on. This is everything we would otherwise read from the browser window.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageContext {
    /// host (and port) of the site, used to build permalinks
    pub host: String,
    /// full location of the current page, including the query
    pub location: String,
}

impl PageContext {
    pub fn new(host: impl Into<String>, location: impl Into<String>) -> Self {
        Self {
            host: host.into(),
            location: location.into(),
        }
    }
    pub fn query_params(&self) -> QueryParams {
        QueryParams::from_location(&self.location)
    }
    pub fn permalink(&self, id: &str) -> String {
        generate_permalink(&self.host, id)
    }
    pub fn copy_permalink(&self, clipboard: &mut dyn Clipboard, id: &str) -> String {
        copy_permalink(clipboard, &self.host, id)
    }
}

/// How navigation results are presented by the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToastSettings {
    pub auto_hide: bool,
    pub duration_ms: u64,
}

impl Default for ToastSettings {
    fn default() -> Self {
        Self {
            auto_hide: true,
            duration_ms: WaymarkConfig::TOAST_DURATION_MS,
        }
    }
}

/// Jumps to the element of the page's `id` parameter when the map view mounts.
///
/// It only ever acts on the first mount. Later mounts of the same handler are ignored, even if the page changed.
#[derive(Debug, Default)]
pub struct PermalinkHandler {
    navigator: Navigator,
    toast: ToastSettings,
    mounted: bool,
}

impl PermalinkHandler {
    pub fn new(navigator: Navigator, toast: ToastSettings) -> Self {
        Self {
            navigator,
            toast,
            mounted: false,
        }
    }
    pub fn from_config(config: &WaymarkConfig) -> Self {
        Self::new(
            Navigator::new(config.highlight_zoom),
            ToastSettings {
                auto_hide: config.toast_auto_hide,
                duration_ms: config.toast_duration_ms,
            },
        )
    }
    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    /// Returns `None` when nothing was attempted: either this isn't the first mount, or the page has no `id`.
    pub fn on_mount(
        &mut self,
        page: &PageContext,
        index: &dyn FeatureIndex,
        localizer: &dyn Localize,
        store: &mut dyn Dispatch,
    ) -> Option<Navigation> {
        if std::mem::replace(&mut self.mounted, true) {
            debug!("permalink handler already ran");
            return None;
        }
        let params = page.query_params();
        // End early if no ID was specified.
        let Some(id) = params.first(PERMALINK_ID_PARAM) else {
            debug!(location = %page.location, "no permalink id in location");
            return None;
        };

        let ToastSettings {
            auto_hide,
            duration_ms,
        } = self.toast;
        let store = RefCell::new(store);
        let store = &store;
        let mut hooks = NavigatorHooks::new(move |position, zoom| {
            store
                .borrow_mut()
                .dispatch(Action::SetPositionAndZoom { position, zoom })
        })
        .with_toast(move |message| {
            store.borrow_mut().dispatch(Action::SetToast {
                message,
                icon: None,
                auto_hide,
                duration_ms,
            })
        })
        .with_display_feature(move |key| {
            store.borrow_mut().dispatch(Action::SetFeatureDisplayed {
                key: key.to_owned(),
                displayed: true,
            })
        })
        .with_display_route(move |key| {
            store.borrow_mut().dispatch(Action::SetRouteDisplayed {
                key: key.to_owned(),
                displayed: true,
            })
        });
        Some(self.navigator.navigate(id, index, localizer, &mut hooks))
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{keys, Localization, MemoryClipboard, UiState};
    use rstest::*;
    use similar_asserts::assert_eq;
    use waymark_features::{LatLng, MemoryFeatureIndex};

    #[fixture]
    #[once]
    fn test_index() -> MemoryFeatureIndex {
        let mut index = MemoryFeatureIndex::default();
        index
            .insert_feature("mondstadt-anemoculus", "abc123", [12.5, -40.0])
            .expect("failed to insert feature");
        index
            .insert_route("MainTrail", "42", vec![[1.0, 2.0], [3.0, 4.0]])
            .expect("failed to insert route");
        index
    }

    fn toast(message: &str) -> Action {
        Action::SetToast {
            message: message.to_owned(),
            icon: None,
            auto_hide: true,
            duration_ms: 6000,
        }
    }

    #[rstest]
    fn route_link_dispatches_camera_display_and_toast(test_index: &MemoryFeatureIndex) {
        let l10n = Localization::default();
        let page = PageContext::new("example.com", "https://example.com/?id=42");
        let mut actions: Vec<Action> = vec![];
        let mut handler = PermalinkHandler::default();
        let nav = handler.on_mount(&page, test_index, &l10n, &mut actions);
        assert!(matches!(nav, Some(Navigation::Route { .. })));
        assert_eq!(
            actions,
            vec![
                Action::SetPositionAndZoom {
                    position: LatLng { lat: 1.0, lng: 2.0 },
                    zoom: 9
                },
                Action::SetRouteDisplayed {
                    key: "MainTrail".to_owned(),
                    displayed: true
                },
                toast(&l10n.translate(keys::PERMALINK_ROUTE)),
            ]
        );
    }

    #[rstest]
    fn feature_link_updates_ui_state(test_index: &MemoryFeatureIndex) {
        let l10n = Localization::default();
        let page = PageContext::new("example.com", "example.com/?id=abc123");
        let mut state = UiState::default();
        let mut handler = PermalinkHandler::default();
        handler.on_mount(&page, test_index, &l10n, &mut state);
        assert_eq!(
            state.position,
            Some(LatLng {
                lat: 12.5,
                lng: -40.0
            })
        );
        assert_eq!(state.zoom, Some(9));
        assert!(state.displayed_features.contains("mondstadt-anemoculus"));
        assert!(state.displayed_routes.is_empty());
        assert_eq!(
            state.toast.map(|t| t.message),
            Some(l10n.translate(keys::PERMALINK_FEATURE))
        );
    }

    #[rstest]
    fn unknown_link_only_toasts(test_index: &MemoryFeatureIndex) {
        let l10n = Localization::default();
        let page = PageContext::new("example.com", "https://example.com/?id=nope");
        let mut actions: Vec<Action> = vec![];
        let nav = PermalinkHandler::default().on_mount(&page, test_index, &l10n, &mut actions);
        assert_eq!(nav, Some(Navigation::NotFound));
        assert_eq!(
            actions,
            vec![toast(&l10n.translate(keys::PERMALINK_FAIL_ID))]
        );
    }

    #[rstest]
    #[case("https://example.com/")]
    #[case("https://example.com/?lang=en")]
    fn page_without_id_does_nothing(test_index: &MemoryFeatureIndex, #[case] location: &str) {
        let l10n = Localization::default();
        let page = PageContext::new("example.com", location);
        let mut actions: Vec<Action> = vec![];
        let mut handler = PermalinkHandler::default();
        assert_eq!(handler.on_mount(&page, test_index, &l10n, &mut actions), None);
        assert!(actions.is_empty());
        assert!(handler.is_mounted());
    }

    #[rstest]
    fn only_first_mount_navigates(test_index: &MemoryFeatureIndex) {
        let l10n = Localization::default();
        let page = PageContext::new("example.com", "https://example.com/?id=42");
        let mut actions: Vec<Action> = vec![];
        let mut handler = PermalinkHandler::default();
        assert!(handler
            .on_mount(&page, test_index, &l10n, &mut actions)
            .is_some());
        let dispatched = actions.len();
        assert_eq!(
            handler.on_mount(&page, test_index, &l10n, &mut actions),
            None
        );
        assert_eq!(actions.len(), dispatched);
    }

    #[rstest]
    fn config_controls_zoom_and_toast(test_index: &MemoryFeatureIndex) {
        let config = WaymarkConfig {
            highlight_zoom: 12,
            toast_duration_ms: 1500,
            toast_auto_hide: false,
            ..Default::default()
        };
        let l10n = Localization::default();
        let page = PageContext::new("example.com", "https://example.com/?id=abc123");
        let mut actions: Vec<Action> = vec![];
        PermalinkHandler::from_config(&config).on_mount(&page, test_index, &l10n, &mut actions);
        assert_eq!(
            actions.first(),
            Some(&Action::SetPositionAndZoom {
                position: LatLng {
                    lat: 12.5,
                    lng: -40.0
                },
                zoom: 12
            })
        );
        assert_eq!(
            actions.last(),
            Some(&Action::SetToast {
                message: l10n.translate(keys::PERMALINK_FEATURE),
                icon: None,
                auto_hide: false,
                duration_ms: 1500
            })
        );
    }

    #[test]
    fn page_permalinks_round_trip() {
        let page = PageContext::new("example.com", "https://example.com/");
        let mut clipboard = MemoryClipboard::default();
        let permalink = page.copy_permalink(&mut clipboard, "abc123");
        assert_eq!(permalink, page.permalink("abc123"));
        assert_eq!(clipboard.text(), Some("example.com/?id=abc123"));
        let linked = PageContext::new("example.com", permalink);
        assert_eq!(
            linked.query_params().first(PERMALINK_ID_PARAM),
            Some("abc123")
        );
    }
}
