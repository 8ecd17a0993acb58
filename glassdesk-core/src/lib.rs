//! Window and widget spatial management for the glassdesk shell.
// We warn on clippy pedantic lints, primarily to keep code as correct as possible.
#![warn(clippy::pedantic)]
// Each of these lints are globally allowed because they otherwise make a lot
// of noise. Pixel math moves between f64 and i32 on purpose.
#![allow(
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::must_use_candidate,
    clippy::module_name_repetitions
)]
mod command;
pub mod config;
pub mod errors;
mod event_loop;
mod handlers;
mod input_event;
pub mod models;
pub mod renderer;
mod shell_action;
pub mod snap;
pub mod state;
pub mod store;
pub mod utils;

pub use command::Command;
pub use config::Config;
pub use input_event::{InputEvent, PointerButton, PointerRegion};
pub use models::Manager;
pub use renderer::Renderer;
pub use shell_action::ShellAction;
pub use state::State;
pub use store::{KeyValueStore, MemoryStore};
pub use utils::command_pipe::CommandPipe;
