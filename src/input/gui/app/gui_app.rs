use egui::Context;
use egui_winit::State as EguiWinitState;
use tracing::{debug, trace};
use winit::event::WindowEvent;
use winit::event_loop::EventLoop;
use winit::window::Window;

use crate::controllers::interactive::{InputEvent, InteractionController, InteractionOutcome, RulesEnginePort};
use crate::core::actions::render_board::palette::BoardPalette;
use crate::core::actions::render_board::render_board::{RenderBoardError, render_board};
use crate::input::gui::app::board_input::BoardInputState;
use crate::input::gui::app::ports::presenter::GuiPresenterPort;
use crate::input::gui::app::status::status_lines;

pub struct GuiApp<T: GuiPresenterPort, E: RulesEnginePort> {
    presenter: T,
    controller: InteractionController<E>,
    input: BoardInputState,
    palette: BoardPalette,
    last_outcome: Option<InteractionOutcome>,
    board_dirty: bool,
    pub egui_ctx: Context,
    pub egui_state: EguiWinitState,
}

impl<T: GuiPresenterPort, E: RulesEnginePort> GuiApp<T, E> {
    pub fn new(
        window: &'static Window,
        event_loop: &EventLoop<()>,
        presenter: T,
        controller: InteractionController<E>,
        undo_key: char,
    ) -> Self {
        let egui_ctx = Context::default();

        let egui_state = EguiWinitState::new(
            egui_ctx.clone(),
            egui_ctx.viewport_id(),
            event_loop,
            Some(window.scale_factor() as f32),
            None,
        );

        Self {
            presenter,
            controller,
            input: BoardInputState::new(undo_key),
            palette: BoardPalette::default(),
            last_outcome: None,
            board_dirty: true,
            egui_ctx,
            egui_state,
        }
    }

    /// Forwards the event to egui. Returns `(consumed, repaint)`.
    pub fn handle_window_event(&mut self, window: &Window, event: &WindowEvent) -> (bool, bool) {
        let response = self.egui_state.on_window_event(window, event);
        (response.consumed, response.repaint)
    }

    /// Feeds board input to the controller. Mouse presses egui already consumed never reach it.
    pub fn handle_board_input(&mut self, event: &WindowEvent, egui_consumed: bool) -> Option<InteractionOutcome> {
        let input_event = match event {
            WindowEvent::CursorMoved { position, .. } => {
                let point = self.presenter.window_to_board(position.x, position.y);
                self.input.cursor_moved(point);
                None
            }
            WindowEvent::CursorLeft { .. } => {
                self.input.cursor_left();
                None
            }
            WindowEvent::MouseInput { state, button, .. } if !egui_consumed => {
                self.input.mouse_input(*state, *button)
            }
            WindowEvent::KeyboardInput { event, .. } if !egui_consumed => {
                self.input.key_input(&event.logical_key, event.state, event.repeat)
            }
            WindowEvent::CloseRequested => Some(InputEvent::Quit),
            _ => None,
        }?;

        trace!(?input_event, "board input");
        let outcome = self.controller.process(input_event);

        if outcome != InteractionOutcome::Ignored {
            self.last_outcome = Some(outcome);
            self.board_dirty = true;
        }

        Some(outcome)
    }

    /// Re-rasterises the board if the selection or position changed since the last call.
    pub fn refresh_board(&mut self) -> Result<bool, RenderBoardError> {
        if !self.board_dirty {
            return Ok(false);
        }

        let buffer = render_board(&self.controller.view(), self.controller.geometry(), &self.palette)?;
        self.presenter.present_board(&buffer);
        self.board_dirty = false;
        debug!("board redrawn");

        Ok(true)
    }

    pub fn update_ui(&mut self, window: &Window) -> egui::FullOutput {
        let raw_input = self.egui_state.take_egui_input(window);
        let lines = status_lines(
            &self.controller.view(),
            self.controller.valid_moves().len(),
            self.last_outcome,
        );

        self.egui_ctx.run(raw_input, |ctx| {
            egui::Window::new("Status")
                .default_pos([8.0, 8.0])
                .default_open(false)
                .resizable(false)
                .show(ctx, |ui| {
                    for line in &lines {
                        ui.label(line);
                    }
                });
        })
    }

    pub fn render(&mut self, egui_output: egui::FullOutput) -> Result<(), pixels::Error> {
        self.presenter.render(egui_output, &self.egui_ctx)
    }
}
