pub mod config;
pub mod controllers;
pub mod core;
pub mod engines;
#[cfg(feature = "gui")]
pub mod input;
pub mod logging;
pub mod presenters;

pub use config::{ConfigError, ViewerConfig};
pub use controllers::interactive::{InputEvent, InteractionController, InteractionOutcome, RulesEnginePort};
pub use controllers::ports::file_presenter::FilePresenterPort;
pub use controllers::session::{ScriptedSession, SessionError, SessionSummary};
pub use crate::core::actions::render_board::palette::BoardPalette;
pub use crate::core::actions::render_board::render_board::render_board;
pub use engines::owlchess::OwlchessEngine;
pub use presenters::file::ppm::PpmFilePresenter;

#[cfg(feature = "gui")]
pub use input::gui::{GuiError, RunGuiCommand};
#[cfg(feature = "gui")]
pub use presenters::pixels::factory::PixelsPresenterFactory;
