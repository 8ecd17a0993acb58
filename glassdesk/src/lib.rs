pub mod config;
mod renderer;
mod store;
pub mod utils;

pub use config::Config;
pub use renderer::JsonLinesRenderer;
pub use store::FileStore;
