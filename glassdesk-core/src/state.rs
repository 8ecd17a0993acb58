//! Everything the shell knows, plus the queue of changes not yet rendered.
use crate::config::Config;
use crate::models::{
    Desktop, DragGesture, NotificationCenter, Placement, Size, SystemStatus, WidgetCascade,
    WindowRegistry,
};
use crate::snap::SnapSettings;
use crate::ShellAction;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::collections::VecDeque;

#[derive(Debug)]
pub struct State {
    pub windows: WindowRegistry,
    pub desktop: Desktop,
    pub notifications: NotificationCenter,
    pub drag: DragGesture,
    pub viewport: Size,
    pub status: SystemStatus,
    /// Shut down, but coming back up once the shutdown screen has shown.
    pub rebooting: bool,
    pub snap: SnapSettings,
    pub placement: Placement,
    pub widget_cascade: WidgetCascade,
    pub toast_duration: chrono::Duration,
    pub actions: VecDeque<ShellAction>,
    pub(crate) rng: StdRng,
}

impl State {
    pub(crate) fn new(config: &impl Config) -> Self {
        let toast_duration = chrono::Duration::from_std(config.toast_duration())
            .unwrap_or_else(|_| chrono::Duration::seconds(5));
        Self {
            windows: WindowRegistry::default(),
            desktop: Desktop::default(),
            notifications: NotificationCenter::default(),
            drag: DragGesture::default(),
            viewport: config.initial_viewport(),
            status: SystemStatus::default(),
            rebooting: false,
            snap: config.snap_settings(),
            placement: config.placement(),
            widget_cascade: config.widget_cascade(),
            toast_duration,
            actions: VecDeque::default(),
            rng: StdRng::from_os_rng(),
        }
    }

    /// Replace the random source used for window placement.
    pub fn reseed(&mut self, seed: u64) {
        self.rng = StdRng::seed_from_u64(seed);
    }
}
