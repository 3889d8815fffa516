//! The editing surface.
//!
//! Owns the text buffer. It is read-only until the shell delivers a
//! document, and reports a [`ContentUpdate`] for every frame in which the
//! user changed the text.

use crate::core::messages::{ContentUpdate, ShellEvent};
use crate::ui::theme;
use crate::utils::{clipboard, file_helper};
use egui::{Event, Id, Key, Modifiers};
use std::path::{Path, PathBuf};

const APP_NAME: &str = "Txtpad";

/// Built-in editing commands, handled by the text control itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditAction {
    Undo,
    Redo,
    Cut,
    Copy,
    Paste,
    Delete,
    SelectAll,
}

impl EditAction {
    pub const ALL: [EditAction; 7] = [
        EditAction::Undo,
        EditAction::Redo,
        EditAction::Cut,
        EditAction::Copy,
        EditAction::Paste,
        EditAction::Delete,
        EditAction::SelectAll,
    ];

    pub fn label(self) -> &'static str {
        match self {
            EditAction::Undo => "Undo",
            EditAction::Redo => "Redo",
            EditAction::Cut => "Cut",
            EditAction::Copy => "Copy",
            EditAction::Paste => "Paste",
            EditAction::Delete => "Delete",
            EditAction::SelectAll => "Select All",
        }
    }

    /// The input events the text control would receive from the matching
    /// keyboard shortcut. Paste needs the clipboard text.
    pub fn events(self, clipboard_text: Option<String>) -> Vec<Event> {
        match self {
            EditAction::Undo => vec![key(Key::Z, Modifiers::COMMAND)],
            EditAction::Redo => vec![key(Key::Z, Modifiers::COMMAND | Modifiers::SHIFT)],
            EditAction::Cut => vec![Event::Cut],
            EditAction::Copy => vec![Event::Copy],
            EditAction::Paste => clipboard_text.map(Event::Paste).into_iter().collect(),
            EditAction::Delete => vec![key(Key::Delete, Modifiers::NONE)],
            EditAction::SelectAll => vec![key(Key::A, Modifiers::COMMAND)],
        }
    }
}

fn key(key: Key, modifiers: Modifiers) -> Event {
    Event::Key {
        key,
        physical_key: None,
        pressed: true,
        repeat: false,
        modifiers,
    }
}

#[derive(Debug, Default)]
pub struct EditorSurface {
    text: String,
    file_path: Option<PathBuf>,
    pending_action: Option<EditAction>,
    focus_requested: bool,
}

impl EditorSurface {
    pub fn id() -> Id {
        Id::new("txtpad_editor")
    }

    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn file_path(&self) -> Option<&Path> {
        self.file_path.as_deref()
    }

    pub fn has_document(&self) -> bool {
        self.file_path.is_some()
    }

    /// Replace the buffer with a document delivered by the shell.
    pub fn apply(&mut self, event: ShellEvent) {
        match event {
            ShellEvent::DocumentOpened { file_path, content } => {
                self.text = content;
                self.file_path = Some(file_path);
            }
            ShellEvent::DocumentCreated { file_path } => {
                self.text.clear();
                self.file_path = Some(file_path);
            }
        }
        self.focus_requested = true;
    }

    /// Run `action` against the text control on the next frame.
    pub fn queue_action(&mut self, action: EditAction) {
        self.pending_action = Some(action);
    }

    #[cfg(test)]
    pub fn request_focus(&mut self) {
        self.focus_requested = true;
    }

    pub fn window_title(&self) -> String {
        match &self.file_path {
            Some(path) => format!("{} - {}", file_helper::display_name(path), APP_NAME),
            None => APP_NAME.to_string(),
        }
    }

    /// Draw the surface. Returns the full text when the user changed it.
    pub fn show(&mut self, ui: &mut egui::Ui) -> Option<ContentUpdate> {
        if !self.has_document() {
            ui.centered_and_justified(|ui| {
                ui.colored_label(
                    theme::dim_text_color(),
                    "Use File > Add New File or File > Create New File to start.",
                );
            });
            return None;
        }

        if let Some(action) = self.pending_action.take() {
            let clipboard_text = match action {
                EditAction::Paste => clipboard::read_from_clipboard(),
                _ => None,
            };
            let events = action.events(clipboard_text);
            ui.ctx().input_mut(|i| i.events.extend(events));
            self.focus_requested = true;
        }

        if std::mem::take(&mut self.focus_requested) {
            ui.memory_mut(|m| m.request_focus(Self::id()));
        }

        let response = egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                ui.add_sized(
                    ui.available_size(),
                    egui::TextEdit::multiline(&mut self.text)
                        .id(Self::id())
                        .font(egui::TextStyle::Monospace)
                        .frame(false)
                        .lock_focus(true),
                )
            })
            .inner;

        if !response.changed() {
            return None;
        }
        self.file_path
            .clone()
            .map(|file_path| ContentUpdate::new(file_path, self.text.clone()))
    }
}
