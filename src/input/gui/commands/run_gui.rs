use std::marker::PhantomData;

use tracing::{error, info};
use winit::{
    dpi::PhysicalSize,
    event::{Event, WindowEvent},
    event_loop::EventLoop,
    window::{Window, WindowBuilder},
};

use crate::config::ViewerConfig;
use crate::controllers::interactive::{InteractionController, InteractionOutcome};
use crate::input::gui::app::gui_app::GuiApp;
use crate::input::gui::app::ports::presenter::GuiPresenterPort;
use crate::input::gui::commands::ports::presenter_factory::GuiPresenterFactoryPort;
use crate::input::gui::errors::GuiError;

pub struct RunGuiCommand<F, P>
where
    P: GuiPresenterPort,
    F: GuiPresenterFactoryPort<P>,
{
    presenter_factory: F,
    config: ViewerConfig,
    _phantom: PhantomData<fn() -> P>,
}

impl<F, P> RunGuiCommand<F, P>
where
    P: GuiPresenterPort,
    F: GuiPresenterFactoryPort<P>,
{
    pub fn new(presenter_factory: F, config: ViewerConfig) -> Self {
        Self {
            presenter_factory,
            config,
            _phantom: PhantomData,
        }
    }

    /// Opens the board window and blocks until it is closed.
    pub fn execute(&self) -> Result<(), GuiError> {
        self.config.validate()?;
        let engine = self.config.build_engine()?;
        let controller = InteractionController::new(engine, self.config.geometry());

        let event_loop = EventLoop::new()?;
        let board_size = self.config.board_size;

        let window: &'static Window = Box::leak(Box::new(
            WindowBuilder::new()
                .with_title("Chessboard")
                .with_inner_size(PhysicalSize::new(board_size, board_size))
                .with_resizable(false)
                .build(&event_loop)?,
        ));

        let presenter: P = self.presenter_factory.build(window, board_size)?;
        let mut app = GuiApp::new(window, &event_loop, presenter, controller, self.config.undo_key);
        let mut redraw_pending = true;

        info!(board_size, "window open");

        event_loop.run(|event, elwt| match event {
            Event::WindowEvent { ref event, window_id } if window_id == window.id() => {
                let (egui_consumed, egui_repaint) = app.handle_window_event(window, event);
                if egui_repaint {
                    redraw_pending = true;
                }

                match app.handle_board_input(event, egui_consumed) {
                    Some(InteractionOutcome::Quit) => {
                        elwt.exit();
                        return;
                    }
                    Some(InteractionOutcome::Ignored) | None => {}
                    Some(_) => redraw_pending = true,
                }

                if let WindowEvent::RedrawRequested = event {
                    redraw_pending = false;

                    if let Err(err) = app.refresh_board() {
                        error!(%err, "board render failed");
                        elwt.exit();
                        return;
                    }

                    let egui_output = app.update_ui(window);
                    app.egui_state
                        .handle_platform_output(window, egui_output.platform_output.clone());

                    if egui_output.viewport_output.values().any(|v| v.repaint_delay.is_zero()) {
                        redraw_pending = true;
                    }

                    if let Err(err) = app.render(egui_output) {
                        error!(%err, "present failed");
                        elwt.exit();
                    }
                }
            }
            Event::AboutToWait => {
                if redraw_pending {
                    window.request_redraw();
                }
            }
            _ => {}
        })?;

        Ok(())
    }
}
