use eframe::egui;
use std::cell::RefCell;
use std::rc::Rc;

use text_editor_core::editor::APP_TITLE;
use text_editor_core::file_writer::with_default_extension;
use text_editor_core::{
    CommandId, CommandTable, EditorState, MenuItem, Outcome, Prompt, Span, ThemeMode, WidgetId,
    MENU_BAR,
};

use crate::style;

/// Slot for a save error; once set the window closes and `main` returns it.
pub type FatalError = Rc<RefCell<Option<anyhow::Error>>>;

const SHORTCUTS: [(egui::Key, CommandId); 3] = [
    (egui::Key::S, CommandId::Save),
    (egui::Key::F, CommandId::Find),
    (egui::Key::R, CommandId::Replace),
];

struct ActivePrompt {
    prompt: Prompt,
    input: String,
    focus: bool,
}

pub struct EditorApp {
    state: EditorState,
    commands: CommandTable,

    // Modal text prompt; the rest of the window is disabled while set
    prompt: Option<ActivePrompt>,

    // Text area selection as of the last frame, painted by the layouter
    selection: Option<Span>,

    shown_title: String,
    fatal: FatalError,
}

impl EditorApp {
    pub fn new(mode: ThemeMode, fatal: FatalError) -> Self {
        Self::with_state(EditorState::new(mode), fatal)
    }

    pub fn with_state(state: EditorState, fatal: FatalError) -> Self {
        Self {
            state,
            commands: CommandTable::new(),
            prompt: None,
            selection: None,
            shown_title: APP_TITLE.to_string(),
            fatal,
        }
    }

    pub fn state(&self) -> &EditorState {
        &self.state
    }

    pub fn prompt(&self) -> Option<&Prompt> {
        self.prompt.as_ref().map(|active| &active.prompt)
    }

    pub fn run_command(&mut self, ctx: &egui::Context, id: CommandId) {
        let outcome = self.commands.dispatch(id, &mut self.state);
        self.handle_outcome(ctx, outcome);
    }

    fn handle_outcome(&mut self, ctx: &egui::Context, outcome: Outcome) {
        match outcome {
            Outcome::Done => {}
            Outcome::Prompt(prompt) => {
                self.prompt = Some(ActivePrompt {
                    prompt,
                    input: String::new(),
                    focus: true,
                });
            }
            Outcome::ChooseSavePath => self.save_file(ctx),
            Outcome::ShowInfo { title, message } => {
                rfd::MessageDialog::new()
                    .set_level(rfd::MessageLevel::Info)
                    .set_title(title)
                    .set_description(message)
                    .set_buttons(rfd::MessageButtons::Ok)
                    .show();
            }
            Outcome::Quit => ctx.send_viewport_cmd(egui::ViewportCommand::Close),
        }
    }

    fn save_file(&mut self, ctx: &egui::Context) {
        let Some(path) = rfd::FileDialog::new()
            .add_filter("Text files", &["txt"])
            .save_file()
        else {
            tracing::debug!("save dialog cancelled");
            return;
        };

        let path = with_default_extension(path);
        if let Err(err) = self.state.save_to(&path) {
            tracing::error!("save failed: {err:#}");
            *self.fatal.borrow_mut() = Some(err);
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
        }
    }

    /// Closes the active prompt, passing the typed text on when accepted.
    pub fn finish_prompt(&mut self, ctx: &egui::Context, accepted: bool) {
        let Some(active) = self.prompt.take() else {
            return;
        };
        let answer = accepted.then_some(active.input);
        let outcome = self.state.answer(active.prompt.pending, answer);
        self.handle_outcome(ctx, outcome);
    }

    fn handle_shortcuts(&mut self, ctx: &egui::Context) {
        if self.prompt.is_some() {
            return;
        }
        for (key, id) in SHORTCUTS {
            if ctx.input_mut(|i| i.consume_key(egui::Modifiers::CTRL, key)) {
                self.run_command(ctx, id);
            }
        }
    }

    fn render_menu_bar(&mut self, ctx: &egui::Context) {
        let menu_style = self.state.theme().style(WidgetId::MenuBar);
        let enabled = self.prompt.is_none();
        let mut clicked = None;

        egui::TopBottomPanel::top("menu_bar")
            .frame(style::panel_frame(&menu_style))
            .show(ctx, |ui| {
                style::apply_menu_style(ui.visuals_mut(), &menu_style);
                ui.add_enabled_ui(enabled, |ui| {
                    egui::menu::bar(ui, |ui| {
                        for menu in MENU_BAR {
                            ui.menu_button(menu.label, |ui| {
                                for item in menu.items {
                                    match item {
                                        MenuItem::Separator => {
                                            ui.separator();
                                        }
                                        MenuItem::Command(id) => {
                                            let mut button = egui::Button::new(id.label());
                                            if let Some(shortcut) = id.shortcut() {
                                                button = button.shortcut_text(shortcut);
                                            }
                                            if ui.add(button).clicked() {
                                                clicked = Some(*id);
                                                ui.close_menu();
                                            }
                                        }
                                    }
                                }
                            });
                        }
                    });
                });
            });

        if let Some(id) = clicked {
            self.run_command(ctx, id);
        }
    }

    fn render_status_bar(&self, ctx: &egui::Context) {
        let status_style = self.state.theme().style(WidgetId::StatusBar);
        egui::TopBottomPanel::bottom("status_bar")
            .frame(style::panel_frame(&status_style))
            .show(ctx, |ui| {
                ui.label(
                    egui::RichText::new(self.state.status())
                        .color(style::color(status_style.foreground))
                        .size(status_style.font_size),
                );
            });
    }

    fn render_text_area(&mut self, ctx: &egui::Context) {
        let text_style = self.state.theme().style(WidgetId::TextArea);
        let buffer = self.state.buffer();
        let highlights: Vec<_> = self
            .state
            .highlights()
            .iter()
            .map(|span| buffer.byte_range(*span))
            .collect();
        let selection = self.selection.map(|span| buffer.byte_range(span));
        // Needed to move the highlights if the widget edits the text
        let before = (!highlights.is_empty()).then(|| buffer.as_str().to_string());
        let enabled = self.prompt.is_none();

        egui::CentralPanel::default()
            .frame(style::panel_frame(&text_style))
            .show(ctx, |ui| {
                style::apply_text_area_style(ui.visuals_mut(), &text_style);
                ui.add_enabled_ui(enabled, |ui| {
                    egui::ScrollArea::vertical()
                        .auto_shrink([false, false])
                        .show(ui, |ui| {
                            let mut layouter = |ui: &egui::Ui, text: &str, wrap_width: f32| {
                                let job = style::text_area_job(
                                    text,
                                    &highlights,
                                    selection.clone(),
                                    &text_style,
                                    wrap_width,
                                );
                                ui.fonts(|fonts| fonts.layout_job(job))
                            };

                            let output = egui::TextEdit::multiline(self.state.text_mut())
                                .frame(false)
                                .lock_focus(true)
                                .desired_width(f32::INFINITY)
                                .min_size(ui.available_size())
                                .layouter(&mut layouter)
                                .show(ui);

                            if output.response.changed() {
                                self.state.text_changed(before.as_deref());
                            }
                            self.selection = output.cursor_range.and_then(|range| {
                                let primary = range.primary.ccursor.index;
                                let secondary = range.secondary.ccursor.index;
                                (primary != secondary)
                                    .then(|| Span::new(primary.min(secondary), primary.max(secondary)))
                            });
                            if let Some(range) = output.cursor_range {
                                self.state.set_caret(range.primary.ccursor.index);
                            }

                            let key_released = output.response.has_focus()
                                && ui.input(|i| {
                                    i.events.iter().any(|event| {
                                        matches!(event, egui::Event::Key { pressed: false, .. })
                                    })
                                });
                            if key_released {
                                self.state.update_status();
                            }
                        });
                });
            });
    }

    fn render_prompt(&mut self, ctx: &egui::Context) {
        let Some(active) = self.prompt.as_mut() else {
            return;
        };

        let mut decision = None;
        egui::Window::new(active.prompt.title)
            .id(egui::Id::new("prompt_dialog"))
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| {
                ui.label(active.prompt.label);
                let response = ui.text_edit_singleline(&mut active.input);
                if active.focus {
                    response.request_focus();
                    active.focus = false;
                }
                if response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
                    decision = Some(true);
                }

                ui.horizontal(|ui| {
                    if ui.button("OK").clicked() {
                        decision = Some(true);
                    }
                    if ui.button("Cancel").clicked() {
                        decision = Some(false);
                    }
                });
            });

        if ctx.input(|i| i.key_pressed(egui::Key::Escape)) {
            decision = Some(false);
        }
        if let Some(accepted) = decision {
            self.finish_prompt(ctx, accepted);
        }
    }

    fn sync_title(&mut self, ctx: &egui::Context) {
        if self.shown_title != self.state.title() {
            self.shown_title = self.state.title().to_string();
            ctx.send_viewport_cmd(egui::ViewportCommand::Title(self.shown_title.clone()));
        }
    }

    /// Draws one frame.
    pub fn ui(&mut self, ctx: &egui::Context) {
        ctx.set_visuals(style::visuals(self.state.theme()));

        self.handle_shortcuts(ctx);

        self.render_menu_bar(ctx);
        self.render_status_bar(ctx);
        self.render_text_area(ctx);
        self.render_prompt(ctx);

        self.sync_title(ctx);
    }
}

impl eframe::App for EditorApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.ui(ctx);
    }
}
