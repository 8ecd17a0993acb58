use crate::models::{AppId, Placement, Position, Size, WidgetCascade};
use crate::snap::SnapSettings;
use std::time::Duration;

pub trait Config {
    fn taskbar_height(&self) -> f64;
    fn padding(&self) -> f64;
    fn grid_unit(&self) -> f64;
    fn snap_threshold(&self) -> f64;

    /// Base point of the launch cascade for undocked windows.
    fn cascade_origin(&self) -> Position;
    fn cascade_jitter(&self) -> f64;
    /// Application placed in the bottom right corner on launch.
    fn docked_app(&self) -> Option<AppId>;
    fn docked_margin(&self) -> f64;

    fn widget_cascade(&self) -> WidgetCascade;

    /// Viewport assumed until the surface reports its real size.
    fn initial_viewport(&self) -> Size;

    /// How long a notification toast stays on screen.
    fn toast_duration(&self) -> Duration;
    fn boot_delay(&self) -> Duration;
    /// How long the shutdown screen shows before a reboot boots again.
    fn shutdown_delay(&self) -> Duration;

    fn snap_settings(&self) -> SnapSettings {
        SnapSettings {
            taskbar_height: self.taskbar_height(),
            padding: self.padding(),
            grid_unit: self.grid_unit(),
            snap_threshold: self.snap_threshold(),
        }
    }

    fn placement(&self) -> Placement {
        Placement {
            cascade_origin: self.cascade_origin(),
            cascade_jitter: self.cascade_jitter(),
            docked_app: self.docked_app(),
            docked_margin: self.docked_margin(),
            taskbar_height: self.taskbar_height(),
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    #[allow(clippy::module_name_repetitions)]
    pub struct TestConfig {
        pub viewport: Size,
        pub docked_app: Option<AppId>,
        pub boot_delay: Duration,
    }

    impl Default for TestConfig {
        fn default() -> Self {
            Self {
                viewport: Size::new(1280.0, 800.0),
                docked_app: Some(AppId::Chatbot),
                boot_delay: Duration::from_millis(2500),
            }
        }
    }

    impl Config for TestConfig {
        fn taskbar_height(&self) -> f64 {
            48.0
        }
        fn padding(&self) -> f64 {
            12.0
        }
        fn grid_unit(&self) -> f64 {
            24.0
        }
        fn snap_threshold(&self) -> f64 {
            16.0
        }
        fn cascade_origin(&self) -> Position {
            Position::new(100.0, 80.0)
        }
        fn cascade_jitter(&self) -> f64 {
            40.0
        }
        fn docked_app(&self) -> Option<AppId> {
            self.docked_app
        }
        fn docked_margin(&self) -> f64 {
            16.0
        }
        fn widget_cascade(&self) -> WidgetCascade {
            WidgetCascade::default()
        }
        fn initial_viewport(&self) -> Size {
            self.viewport
        }
        fn toast_duration(&self) -> Duration {
            Duration::from_secs(5)
        }
        fn boot_delay(&self) -> Duration {
            self.boot_delay
        }
        fn shutdown_delay(&self) -> Duration {
            Duration::from_millis(1500)
        }
    }

    #[test]
    fn settings_are_gathered_from_the_config() {
        let config = TestConfig::default();
        assert_eq!(config.snap_settings(), SnapSettings::default());
        assert_eq!(config.placement(), Placement::default());
    }
}
