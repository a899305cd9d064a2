use std::io;
use thiserror::Error;

use crate::config::ConfigError;
use crate::controllers::interactive::errors::rules_engine::RulesEngineError;
use crate::controllers::session::script::ScriptError;
use crate::core::actions::render_board::render_board::RenderBoardError;

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("configuration: {0}")]
    Config(#[from] ConfigError),
    #[error("rules engine: {0}")]
    Engine(#[from] RulesEngineError),
    #[error("script: {0}")]
    Script(#[from] ScriptError),
    #[error("rendering: {0}")]
    Render(#[from] RenderBoardError),
    #[error(transparent)]
    Io(#[from] io::Error),
}
