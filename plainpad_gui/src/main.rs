mod frontend;
mod logging;

use eframe::{egui, App, Frame, NativeOptions};
use egui::text::LayoutJob;
use egui::{vec2, Align2, Color32, FontId, Key, Modifiers, RichText, ViewportCommand};
use frontend::{EditorSurface, EguiFrontend};
use plainpad_core::{
    shortcuts, CloseChoice, Command, MenuEntry, Prompt, Workbench, WrapMode, MENU_LAYOUT,
};
use plainpad_settings::Preferences;

const ABOUT_WINDOW_SIZE: [f32; 2] = [215.0, 150.0];

enum PromptAnswer {
    Close(CloseChoice),
    Clear(bool),
}

struct PlainpadApp {
    preferences: Preferences,
    workbench: Workbench,
    surface: EditorSurface,
}

impl PlainpadApp {
    fn new(preferences: Preferences) -> Self {
        let wrap = preferences.editor.wrap;
        Self {
            preferences,
            workbench: Workbench::new(wrap),
            surface: EditorSurface::new(wrap),
        }
    }

    fn dispatch(&mut self, ctx: &egui::Context, command: Command) {
        let mut frontend = EguiFrontend::new(ctx, &mut self.surface, &self.preferences.dialogs);
        self.workbench.dispatch(command, &mut frontend);
    }

    fn is_interactive(&self) -> bool {
        self.workbench.pending_prompt().is_none() && self.surface.notice.is_none()
    }

    /// Routes the window-close signal through the unsaved-changes check.
    fn handle_close_request(&mut self, ctx: &egui::Context) {
        if !ctx.input(|input| input.viewport().close_requested()) || self.surface.closing {
            return;
        }
        ctx.send_viewport_cmd(ViewportCommand::CancelClose);
        let mut frontend = EguiFrontend::new(ctx, &mut self.surface, &self.preferences.dialogs);
        self.workbench.request_close(&mut frontend);
    }

    fn handle_shortcuts(&mut self, ctx: &egui::Context) {
        let text_focused = ctx.memory(|mem| mem.has_focus(self.surface.editor_id));
        for shortcut in shortcuts() {
            let Some(key) = egui_key(shortcut.key) else {
                continue;
            };
            let Some(command) = Command::from_shortcut(shortcut.key, text_focused) else {
                continue;
            };
            if ctx.input_mut(|input| input.consume_key(Modifiers::COMMAND, key)) {
                self.dispatch(ctx, command);
            }
        }
    }

    fn show_menu_bar(&mut self, ctx: &egui::Context, enabled: bool) -> Option<Command> {
        let mut chosen = None;
        let wrap = self.workbench.wrap();
        egui::TopBottomPanel::top("menu_bar")
            .resizable(false)
            .show(ctx, |ui| {
                ui.add_enabled_ui(enabled, |ui| {
                    egui::menu::bar(ui, |ui| {
                        for section in MENU_LAYOUT.iter() {
                            ui.menu_button(section.title, |ui| {
                                for entry in &section.entries {
                                    match entry {
                                        MenuEntry::Item {
                                            label,
                                            command,
                                            accelerator,
                                        } => {
                                            let mut button = egui::Button::new(*label);
                                            if let Some(accelerator) = accelerator {
                                                button = button.shortcut_text(*accelerator);
                                            }
                                            if ui.add(button).clicked() {
                                                chosen = Some(*command);
                                                ui.close_menu();
                                            }
                                        }
                                        MenuEntry::WrapChoices { label } => {
                                            ui.menu_button(*label, |ui| {
                                                for mode in WrapMode::ALL {
                                                    if ui.radio(wrap == mode, mode.label()).clicked()
                                                    {
                                                        chosen = Some(Command::SetWrap(mode));
                                                        ui.close_menu();
                                                    }
                                                }
                                            });
                                        }
                                        MenuEntry::Separator => {
                                            ui.separator();
                                        }
                                    }
                                }
                            });
                        }
                    });
                });
            });
        chosen
    }

    fn show_editor_area(&mut self, ctx: &egui::Context, enabled: bool) {
        let font = FontId::proportional(self.preferences.editor.font_size);
        let wrap = self.surface.wrap;
        let editor_id = self.surface.editor_id;
        let text = &mut self.surface.text;

        egui::CentralPanel::default().show(ctx, |ui| {
            let viewport = ui.available_size();
            ui.add_enabled_ui(enabled, |ui| {
                egui::ScrollArea::new([wrap == WrapMode::None, true])
                    .auto_shrink([false, false])
                    .show(ui, |ui| {
                        let mut layouter = |ui: &egui::Ui, text: &str, wrap_width: f32| {
                            let color = ui.visuals().text_color();
                            let mut job =
                                LayoutJob::simple(text.to_owned(), font.clone(), color, wrap_width);
                            match wrap {
                                WrapMode::None => job.wrap.max_width = f32::INFINITY,
                                WrapMode::Character => job.wrap.break_anywhere = true,
                                WrapMode::Word => {}
                            }
                            ui.fonts(|fonts| fonts.layout_job(job))
                        };
                        ui.add(
                            egui::TextEdit::multiline(text)
                                .id(editor_id)
                                .font(font.clone())
                                .frame(false)
                                .desired_width(viewport.x)
                                .min_size(vec2(viewport.x, viewport.y))
                                .layouter(&mut layouter),
                        );
                    });
            });
        });
    }

    fn render_prompt(&mut self, ctx: &egui::Context) {
        let Some(prompt) = self.workbench.pending_prompt() else {
            return;
        };
        let mut answer = None;
        modal_window(prompt.title()).show(ctx, |ui| {
            ui.label(prompt.question());
            ui.add_space(8.0);
            ui.horizontal(|ui| match prompt {
                Prompt::SaveBeforeClose => {
                    if ui.button("Yes").clicked() {
                        answer = Some(PromptAnswer::Close(CloseChoice::Save));
                    }
                    if ui.button("No").clicked() {
                        answer = Some(PromptAnswer::Close(CloseChoice::Discard));
                    }
                    if ui.button("Cancel").clicked() {
                        answer = Some(PromptAnswer::Close(CloseChoice::Cancel));
                    }
                }
                Prompt::ConfirmClear => {
                    if ui.button("Yes").clicked() {
                        answer = Some(PromptAnswer::Clear(true));
                    }
                    if ui.button("No").clicked() {
                        answer = Some(PromptAnswer::Clear(false));
                    }
                }
            });
        });

        let Some(answer) = answer else {
            return;
        };
        let mut frontend = EguiFrontend::new(ctx, &mut self.surface, &self.preferences.dialogs);
        match answer {
            PromptAnswer::Close(choice) => self.workbench.answer_close(choice, &mut frontend),
            PromptAnswer::Clear(confirmed) => self.workbench.answer_clear(confirmed, &mut frontend),
        }
    }

    fn render_notice(&mut self, ctx: &egui::Context) {
        let Some(notice) = &self.surface.notice else {
            return;
        };
        let mut dismissed = false;
        modal_window(notice.title).show(ctx, |ui| {
            ui.label(RichText::new(notice.message).strong());
            ui.label(RichText::new(&notice.detail).small().weak());
            ui.add_space(8.0);
            if ui.button("OK").clicked() {
                dismissed = true;
            }
        });
        if dismissed {
            self.surface.notice = None;
        }
    }

    fn render_about(&mut self, ctx: &egui::Context) {
        if !self.surface.show_about {
            return;
        }
        let about = &self.preferences.about;
        let mut open = true;
        egui::Window::new(about.window_title.as_str())
            .open(&mut open)
            .collapsible(false)
            .resizable(false)
            .fixed_size(ABOUT_WINDOW_SIZE)
            .show(ctx, |ui| {
                ui.vertical_centered(|ui| {
                    ui.heading(&about.heading);
                    ui.add_space(5.0);
                    ui.label(RichText::new(&about.body).color(Color32::GRAY));
                });
            });
        self.surface.show_about = open;
    }
}

impl App for PlainpadApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut Frame) {
        self.handle_close_request(ctx);

        let interactive = self.is_interactive();
        if interactive {
            self.handle_shortcuts(ctx);
        }
        if let Some(command) = self.show_menu_bar(ctx, interactive) {
            self.dispatch(ctx, command);
        }
        self.show_editor_area(ctx, interactive);

        self.render_prompt(ctx);
        self.render_notice(ctx);
        self.render_about(ctx);
    }
}

fn modal_window(title: &str) -> egui::Window<'static> {
    egui::Window::new(title.to_owned())
        .collapsible(false)
        .resizable(false)
        .anchor(Align2::CENTER_CENTER, [0.0, 0.0])
}

fn egui_key(key: char) -> Option<Key> {
    match key.to_ascii_lowercase() {
        'a' => Some(Key::A),
        'n' => Some(Key::N),
        'o' => Some(Key::O),
        'q' => Some(Key::Q),
        's' => Some(Key::S),
        _ => None,
    }
}

fn main() -> eframe::Result<()> {
    logging::init();

    let preferences = Preferences::default();
    let title = preferences.window.title.clone();
    let options = NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([preferences.window.width, preferences.window.height])
            .with_title(title.clone()),
        ..Default::default()
    };
    eframe::run_native(
        &title,
        options,
        Box::new(move |_cc| Box::new(PlainpadApp::new(preferences))),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_application_shortcut_has_an_egui_key() {
        for shortcut in shortcuts() {
            assert!(
                egui_key(shortcut.key).is_some(),
                "no key mapping for {:?}",
                shortcut.command
            );
        }
    }

    #[test]
    fn new_app_starts_untitled_with_preferred_wrap() {
        let mut preferences = Preferences::default();
        preferences.editor.wrap = WrapMode::Character;
        let app = PlainpadApp::new(preferences);
        assert_eq!(app.workbench.wrap(), WrapMode::Character);
        assert_eq!(app.surface.wrap, WrapMode::Character);
        assert!(app.surface.text.is_empty());
        assert!(app.workbench.session().path().is_none());
        assert!(app.is_interactive());
    }
}
