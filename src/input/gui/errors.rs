use thiserror::Error;

use crate::config::ConfigError;
use crate::controllers::interactive::errors::rules_engine::RulesEngineError;
use crate::core::actions::render_board::render_board::RenderBoardError;

#[derive(Debug, Error)]
pub enum GuiError {
    #[error("configuration: {0}")]
    Config(#[from] ConfigError),
    #[error("rules engine: {0}")]
    Engine(#[from] RulesEngineError),
    #[error("rendering: {0}")]
    Render(#[from] RenderBoardError),
    #[error("event loop: {0}")]
    EventLoop(#[from] winit::error::EventLoopError),
    #[error("window: {0}")]
    Window(#[from] winit::error::OsError),
    #[error("pixels surface: {0}")]
    Pixels(#[from] pixels::Error),
}
