#[cfg(test)]
mod mock_renderer;

use crate::config::Config;
use crate::shell_action::ShellAction;

#[cfg(test)]
pub use self::mock_renderer::MockRenderer;

/// Observer of the shell state. Receives every change in the order it was made.
pub trait Renderer {
    fn new(config: &impl Config) -> Self;

    fn execute_action(&mut self, act: ShellAction);

    /// Called once per loop iteration after the queued actions were handed over.
    fn flush(&mut self) {}
}
