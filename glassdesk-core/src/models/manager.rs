use super::SystemStatus;
use crate::config::Config;
use crate::renderer::Renderer;
use crate::state::State;
use crate::store::KeyValueStore;
use crate::ShellAction;

/// Maintains current program state.
pub struct Manager<C, R> {
    pub state: State,
    pub config: C,
    pub renderer: R,
    store: Option<Box<dyn KeyValueStore>>,
}

impl<C, R> Manager<C, R>
where
    C: Config,
    R: Renderer,
{
    pub fn new(config: C) -> Self {
        let renderer = R::new(&config);

        Self {
            state: State::new(&config),
            config,
            renderer,
            store: None,
        }
    }

    /// Use `store` for the wallpaper and widgets.
    #[must_use]
    pub fn with_store(mut self, store: impl KeyValueStore + 'static) -> Self {
        self.store = Some(Box::new(store));
        self
    }

    pub fn store(&self) -> Option<&dyn KeyValueStore> {
        self.store.as_deref()
    }

    /// Restore the desktop from the store and tell the renderer about it.
    pub fn load_desktop(&mut self) {
        let desktop = &mut self.state.desktop;
        desktop.load(self.store.as_deref());
        tracing::info!(
            "Loaded {} widgets, wallpaper {:?}",
            desktop.widgets().len(),
            desktop.wallpaper()
        );
        let wallpaper = desktop.wallpaper().map(str::to_owned);
        let widgets = desktop.widgets().all().to_vec();
        self.state
            .actions
            .push_back(ShellAction::WallpaperChanged(wallpaper));
        self.state
            .actions
            .extend(widgets.into_iter().map(ShellAction::WidgetAdded));
    }

    /// Write dirty desktop slots, then hand every queued action to the renderer.
    pub fn flush_actions(&mut self) {
        if self.state.desktop.needs_persist() {
            if let Some(store) = self.store.as_deref_mut() {
                self.state.desktop.persist(store);
            }
        }
        while let Some(act) = self.state.actions.pop_front() {
            self.renderer.execute_action(act);
        }
        self.renderer.flush();
    }

    /// Shut down for good. A reboot in progress does not count.
    pub fn is_shut_down(&self) -> bool {
        self.state.status == SystemStatus::Shutdown && !self.state.rebooting
    }
}

#[cfg(test)]
impl Manager<crate::config::tests::TestConfig, crate::renderer::MockRenderer> {
    pub fn new_test() -> Self {
        let mut manager = Self::new(crate::config::tests::TestConfig::default());
        manager.state.reseed(7);
        manager
    }
}
