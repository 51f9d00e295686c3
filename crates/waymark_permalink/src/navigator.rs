use tracing::{error, info};
use waymark_features::{Element, ElementPath, FeatureIndex, LatLng};

use crate::{keys, Localize};

/// zoom level the camera uses when jumping to a linked element
pub const HIGHLIGHT_ZOOM_LEVEL: u8 = 9;

/// The capabilities navigation may use. Only moving the camera is required.
/// The optional ones are decided once, when the hooks are built, and skipped silently when absent.
pub struct NavigatorHooks<'a> {
    move_camera: Box<dyn FnMut(LatLng, u8) + 'a>,
    show_toast: Option<Box<dyn FnMut(String) + 'a>>,
    display_feature: Option<Box<dyn FnMut(&str) + 'a>>,
    display_route: Option<Box<dyn FnMut(&str) + 'a>>,
}

impl<'a> NavigatorHooks<'a> {
    pub fn new(move_camera: impl FnMut(LatLng, u8) + 'a) -> Self {
        Self {
            move_camera: Box::new(move_camera),
            show_toast: None,
            display_feature: None,
            display_route: None,
        }
    }
    pub fn with_toast(mut self, show_toast: impl FnMut(String) + 'a) -> Self {
        self.show_toast = Some(Box::new(show_toast));
        self
    }
    pub fn with_display_feature(mut self, display_feature: impl FnMut(&str) + 'a) -> Self {
        self.display_feature = Some(Box::new(display_feature));
        self
    }
    pub fn with_display_route(mut self, display_route: impl FnMut(&str) + 'a) -> Self {
        self.display_route = Some(Box::new(display_route));
        self
    }

    fn toast(&mut self, message: impl FnOnce() -> String) {
        if let Some(show_toast) = self.show_toast.as_mut() {
            show_toast(message());
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraTarget {
    pub position: LatLng,
    pub zoom: u8,
}

/// What a navigation call ended up doing.
#[derive(Debug, Clone, PartialEq)]
pub enum Navigation {
    Route { name: String, target: CameraTarget },
    Feature { name: String, target: CameraTarget },
    /// the id couldn't be resolved to an element with a position. nothing moved.
    NotFound,
}

/// Moves the camera to elements by their permalink id.
#[derive(Debug, Clone, Copy)]
pub struct Navigator {
    pub zoom: u8,
}

impl Default for Navigator {
    fn default() -> Self {
        Self {
            zoom: HIGHLIGHT_ZOOM_LEVEL,
        }
    }
}

impl Navigator {
    pub fn new(zoom: u8) -> Self {
        Self { zoom }
    }

    /// Resolves `id` and points the camera at the element.
    ///
    /// Routes focus on their first node and get marked as displayed with `display_route`.
    /// Every other element type focuses on its coordinates and uses `display_feature`.
    /// An id that doesn't resolve is logged and reported with a single toast, without touching the camera.
    pub fn navigate(
        &self,
        id: &str,
        index: &dyn FeatureIndex,
        localizer: &dyn Localize,
        hooks: &mut NavigatorHooks<'_>,
    ) -> Navigation {
        // Find which group has the ID.
        let Some(path) = index.path_for_id(id) else {
            error!(id, "path not found for id");
            hooks.toast(|| localizer.translate(keys::PERMALINK_FAIL_ID));
            return Navigation::NotFound;
        };
        // Parse the path into its type and name.
        let path: ElementPath = match path.parse() {
            Ok(path) => path,
            Err(e) => {
                error!(%path, %e, "invalid element path");
                hooks.toast(|| localizer.translate(keys::PERMALINK_FAIL_ID));
                return Navigation::NotFound;
            }
        };
        let Some(element) = index.element_for_path(&path) else {
            error!(%path, "element not found for path");
            hooks.toast(|| localizer.translate(keys::PERMALINK_FAIL_ID));
            return Navigation::NotFound;
        };
        let Some(position) = focus_position(&path, element) else {
            error!(%path, "element has no position to focus on");
            hooks.toast(|| localizer.translate(keys::PERMALINK_FAIL_ID));
            return Navigation::NotFound;
        };
        let target = CameraTarget {
            position,
            zoom: self.zoom,
        };
        (hooks.move_camera)(target.position, target.zoom);

        let name = path.name;
        if path.element_type == ElementPath::ROUTE_TYPE {
            // show the route if it isn't already visible
            if let Some(display_route) = hooks.display_route.as_mut() {
                display_route(&name);
            }
            hooks.toast(|| localizer.translate(keys::PERMALINK_ROUTE));
            info!(id, %name, ?target, "navigated to route");
            Navigation::Route { name, target }
        } else {
            if let Some(display_feature) = hooks.display_feature.as_mut() {
                display_feature(&name);
            }
            hooks.toast(|| localizer.translate(keys::PERMALINK_FEATURE));
            info!(id, %name, ?target, "navigated to feature");
            Navigation::Feature { name, target }
        }
    }
}

/// The element has to agree with the type in its path. A route path that points at a point feature has nothing to focus on.
fn focus_position(path: &ElementPath, element: &Element) -> Option<LatLng> {
    match (path.is_route(), element) {
        (true, Element::Route(_)) | (false, Element::Feature(_)) => element.focus_position(),
        _ => None,
    }
}

/// [Navigator::navigate] at [HIGHLIGHT_ZOOM_LEVEL]
pub fn navigate_to_marker_by_id(
    id: &str,
    index: &dyn FeatureIndex,
    localizer: &dyn Localize,
    hooks: &mut NavigatorHooks<'_>,
) -> Navigation {
    Navigator::default().navigate(id, index, localizer, hooks)
}
