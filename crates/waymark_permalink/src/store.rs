use std::{collections::BTreeSet, time::Duration};

use serde::Serialize;
use tracing::trace;
use waymark_features::LatLng;

/// Changes the permalink handler asks the ui store to make.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Action {
    SetPositionAndZoom {
        position: LatLng,
        zoom: u8,
    },
    SetToast {
        message: String,
        icon: Option<String>,
        auto_hide: bool,
        duration_ms: u64,
    },
    SetFeatureDisplayed {
        key: String,
        displayed: bool,
    },
    SetRouteDisplayed {
        key: String,
        displayed: bool,
    },
}

pub trait Dispatch {
    fn dispatch(&mut self, action: Action);
}

/// records actions in order instead of applying them
impl Dispatch for Vec<Action> {
    fn dispatch(&mut self, action: Action) {
        self.push(action);
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Toast {
    pub message: String,
    pub icon: Option<String>,
    pub auto_hide: bool,
    /// only counts down when `auto_hide` is set
    pub time_to_live: Duration,
}

/// The part of the ui state that permalinks touch.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct UiState {
    pub position: Option<LatLng>,
    pub zoom: Option<u8>,
    pub toast: Option<Toast>,
    pub displayed_features: BTreeSet<String>,
    pub displayed_routes: BTreeSet<String>,
}

impl UiState {
    /// Counts down the toast and removes it once its time is up.
    pub fn tick(&mut self, dt: Duration) {
        if let Some(toast) = self.toast.as_mut() {
            if !toast.auto_hide {
                return;
            }
            toast.time_to_live = toast.time_to_live.saturating_sub(dt);
            if toast.time_to_live.is_zero() {
                self.toast = None;
            }
        }
    }
    pub fn dismiss_toast(&mut self) {
        self.toast = None;
    }
}

impl Dispatch for UiState {
    fn dispatch(&mut self, action: Action) {
        trace!(?action, "ui state dispatch");
        match action {
            Action::SetPositionAndZoom { position, zoom } => {
                self.position = Some(position);
                self.zoom = Some(zoom);
            }
            Action::SetToast {
                message,
                icon,
                auto_hide,
                duration_ms,
            } => {
                // a new toast replaces the old one
                self.toast = Some(Toast {
                    message,
                    icon,
                    auto_hide,
                    time_to_live: Duration::from_millis(duration_ms),
                });
            }
            Action::SetFeatureDisplayed { key, displayed } => {
                if displayed {
                    self.displayed_features.insert(key);
                } else {
                    self.displayed_features.remove(&key);
                }
            }
            Action::SetRouteDisplayed { key, displayed } => {
                if displayed {
                    self.displayed_routes.insert(key);
                } else {
                    self.displayed_routes.remove(&key);
                }
            }
        }
    }
}
