pub mod command_handler;
mod input_handler;
mod system_handler;
mod widget_handler;
mod window_handler;

use super::command::Command;
use super::config::Config;
use super::models::{AppId, Manager, Position, Size, WidgetId};
use super::renderer::Renderer;
use super::shell_action::ShellAction;
use super::state::State;
use super::InputEvent;
