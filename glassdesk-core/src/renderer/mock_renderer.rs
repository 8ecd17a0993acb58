use super::Config;
use super::Renderer;
use super::ShellAction;

#[derive(Clone, Debug, Default)]
pub struct MockRenderer {
    pub actions: Vec<ShellAction>,
    pub flushes: usize,
}

impl Renderer for MockRenderer {
    fn new(_: &impl Config) -> Self {
        Self::default()
    }

    fn execute_action(&mut self, act: ShellAction) {
        self.actions.push(act);
    }

    fn flush(&mut self) {
        self.flushes += 1;
    }
}
