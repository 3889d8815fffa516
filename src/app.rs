//! Window/shell controller and eframe integration.
//!
//! Builds the menu, turns menu clicks and host open requests into file
//! bridge calls on the tokio runtime, and feeds bridge results back to the
//! editing surface through a channel polled every frame.

use crate::config::{Config, ConfigManager};
use crate::core::bridge::FileBridge;
use crate::core::error::BridgeError;
use crate::core::messages::{Command, ShellEvent};
use crate::core::persist_queue::PersistQueue;
use crate::platform::{AlertNotifier, RecentStore, RfdDialogs};
use crate::ui::editor::{EditAction, EditorSurface};
use crate::ui::theme;
use crate::utils::file_helper;
use eframe::egui;
use std::path::PathBuf;
use std::sync::mpsc::{channel, Receiver, Sender};
use std::sync::Arc;
use tokio::runtime::Runtime;

/// Results delivered from bridge tasks to the UI thread.
enum BridgeMessage {
    Shell(ShellEvent),
    Saved(PathBuf),
    Failed(BridgeError),
}

/// Main application state.
pub struct TxtpadApp {
    bridge: Arc<FileBridge>,
    recent: Arc<RecentStore>,
    persist_queue: Option<PersistQueue>,
    tokio_runtime: Runtime,

    editor: EditorSurface,

    // Communication
    sender: Sender<BridgeMessage>,
    receiver: Receiver<BridgeMessage>,

    config_manager: ConfigManager,
    config: Config,
    show_diagnostics: bool,
    status: String,
}

impl TxtpadApp {
    /// Bring the shell up. eframe calls this exactly once, when the native
    /// window is ready. `host_paths` are files the OS asked us to open.
    pub fn start(
        cc: &eframe::CreationContext<'_>,
        tokio_runtime: Runtime,
        config_manager: ConfigManager,
        config: Config,
        host_paths: Vec<PathBuf>,
    ) -> Self {
        theme::apply_theme(&cc.egui_ctx);

        let recent = Arc::new(RecentStore::load(
            config_manager.recent_documents_path(),
            config.recent_limit,
        ));
        let bridge = Arc::new(FileBridge::new(
            Box::new(RfdDialogs::with_parent(cc)),
            Box::new(AlertNotifier::new(tokio_runtime.handle().clone())),
            recent.clone(),
        ));

        let (sender, receiver) = channel();

        let persist_queue = {
            let sender = sender.clone();
            let ctx = cc.egui_ctx.clone();
            PersistQueue::spawn(tokio_runtime.handle(), bridge.clone(), move |result| {
                let message = match result {
                    Ok(path) => BridgeMessage::Saved(path),
                    Err(e) => BridgeMessage::Failed(e),
                };
                let _ = sender.send(message);
                ctx.request_repaint();
            })
        };

        let show_diagnostics = config.dev_mode;
        let mut app = Self {
            bridge,
            recent,
            persist_queue: Some(persist_queue),
            tokio_runtime,
            editor: EditorSurface::new(),
            sender,
            receiver,
            config_manager,
            config,
            show_diagnostics,
            status: "Ready".to_string(),
        };

        for path in host_paths {
            app.open_from_host(&cc.egui_ctx, path);
        }

        tracing::info!("Window ready");
        app
    }

    /// Forward a menu command to the bridge without blocking the frame.
    fn dispatch(&self, ctx: &egui::Context, command: Command) {
        let bridge = self.bridge.clone();
        let sender = self.sender.clone();
        let ctx = ctx.clone();

        self.tokio_runtime.spawn(async move {
            let message = match bridge.dispatch(command).await {
                Ok(Some(event)) => BridgeMessage::Shell(event),
                Ok(None) => return,
                Err(e) => BridgeMessage::Failed(e),
            };
            let _ = sender.send(message);
            ctx.request_repaint();
        });
    }

    fn open_from_host(&self, ctx: &egui::Context, path: PathBuf) {
        tracing::debug!("Host open request for {}", path.display());
        let bridge = self.bridge.clone();
        let sender = self.sender.clone();
        let ctx = ctx.clone();

        self.tokio_runtime.spawn(async move {
            let message = match bridge.open_from_host(path).await {
                Ok(event) => BridgeMessage::Shell(event),
                Err(e) => BridgeMessage::Failed(e),
            };
            let _ = sender.send(message);
            ctx.request_repaint();
        });
    }

    /// Drain bridge results (polled every frame).
    fn poll_bridge(&mut self, ctx: &egui::Context) {
        while let Ok(message) = self.receiver.try_recv() {
            match message {
                BridgeMessage::Shell(event) => {
                    // the session decides which document the editor shows
                    if !self.bridge.is_current(&event) {
                        tracing::debug!(
                            "Dropping {} for superseded {}",
                            event.channel(),
                            event.file_path().display()
                        );
                        continue;
                    }
                    tracing::debug!(channel = event.channel(), "Delivering to editor");
                    let name = file_helper::display_name(event.file_path());
                    self.status = match &event {
                        ShellEvent::DocumentOpened { .. } => format!("Opened {}", name),
                        ShellEvent::DocumentCreated { .. } => format!("Created {}", name),
                    };
                    self.editor.apply(event);
                    ctx.send_viewport_cmd(egui::ViewportCommand::Title(self.editor.window_title()));
                }
                BridgeMessage::Saved(path) => {
                    self.status = format!(
                        "Saved {} at {}",
                        file_helper::display_name(&path),
                        chrono::Local::now().format("%H:%M:%S")
                    );
                }
                BridgeMessage::Failed(BridgeError::Superseded { path }) => {
                    tracing::debug!("Edit for {} not saved, document replaced", path.display());
                }
                BridgeMessage::Failed(e) => {
                    self.status = if e.is_io_failure() {
                        "Something went wrong".to_string()
                    } else {
                        tracing::error!("{}", e);
                        "No document open".to_string()
                    };
                }
            }
        }
    }

    fn handle_dropped_files(&self, ctx: &egui::Context) {
        let dropped: Vec<PathBuf> = ctx.input(|i| {
            i.raw
                .dropped_files
                .iter()
                .filter_map(|file| file.path.clone())
                .collect()
        });
        for path in dropped {
            self.open_from_host(ctx, path);
        }
    }

    fn menu_bar(&mut self, ctx: &egui::Context, ui: &mut egui::Ui) {
        egui::menu::bar(ui, |ui| {
            ui.menu_button("File", |ui| {
                if ui.button("Add New File").clicked() {
                    ui.close_menu();
                    self.dispatch(ctx, Command::OpenFile);
                }
                if ui.button("Create New File").clicked() {
                    ui.close_menu();
                    self.dispatch(ctx, Command::CreateFile);
                }

                ui.separator();

                ui.menu_button("Open Recent", |ui| {
                    let entries = self.recent.entries();
                    if entries.is_empty() {
                        ui.add_enabled(false, egui::Button::new("No recent files"));
                    }
                    for path in entries {
                        let label = file_helper::display_name(&path);
                        let hover = path.display().to_string();
                        if ui.button(label).on_hover_text(hover).clicked() {
                            ui.close_menu();
                            self.open_from_host(ctx, path);
                        }
                    }
                    ui.separator();
                    if ui.button("Clear Recent").clicked() {
                        ui.close_menu();
                        self.recent.clear();
                    }
                });

                if ui.button("Quit").clicked() {
                    ui.close_menu();
                    ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                }
            });

            ui.menu_button("Edit", |ui| {
                let enabled = self.editor.has_document();
                for action in EditAction::ALL {
                    if matches!(action, EditAction::Cut | EditAction::Delete) {
                        ui.separator();
                    }
                    if ui.add_enabled(enabled, egui::Button::new(action.label())).clicked() {
                        ui.close_menu();
                        self.editor.queue_action(action);
                    }
                }
            });

            if self.config.dev_mode {
                ui.menu_button("Debug", |ui| {
                    ui.checkbox(&mut self.show_diagnostics, "Diagnostics");
                });
            }
        });
    }
}

impl eframe::App for TxtpadApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.poll_bridge(ctx);
        self.handle_dropped_files(ctx);

        egui::TopBottomPanel::top("menu").show(ctx, |ui| {
            self.menu_bar(ctx, ui);
        });

        egui::TopBottomPanel::bottom("statusbar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.colored_label(theme::dim_text_color(), &self.status);
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if let Some(path) = self.editor.file_path() {
                        let chars = self.editor.text().chars().count();
                        ui.colored_label(theme::dim_text_color(), format!("{} chars", chars));
                        ui.separator();
                        ui.colored_label(theme::dim_text_color(), path.display().to_string());
                    }
                });
            });
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            if let Some(update) = self.editor.show(ui) {
                if let Some(queue) = &self.persist_queue {
                    queue.push(update);
                }
            }
        });

        if self.show_diagnostics {
            egui::Window::new("Diagnostics")
                .open(&mut self.show_diagnostics)
                .vscroll(true)
                .show(ctx, |ui| {
                    ctx.inspection_ui(ui);
                });
        }

        if let Some(rect) = ctx.input(|i| i.viewport().inner_rect) {
            self.config.window_width = rect.width();
            self.config.window_height = rect.height();
        }
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        // Writes already issued are not abandoned
        if let Some(queue) = self.persist_queue.take() {
            self.tokio_runtime.block_on(queue.close());
        }
        if let Err(e) = self.config_manager.save(&self.config) {
            tracing::warn!("Failed to save config: {}", e);
        }
    }
}
