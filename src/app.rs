use egui::Color32;

use crate::brush::{BrushWidth, Step};
use crate::command::Command;
use crate::config::CanvasConfig;
use crate::document::Document;
use crate::error::{CanvasError, CanvasResult};
use crate::file_handler::{self, ExportJob};
use crate::input::{self, InputHandler, Shortcut};
use crate::panels::{self, Notification, ResizeDialog};
use crate::renderer::Renderer;

/// Tool settings restored on the next start.
///
/// We derive Deserialize/Serialize so we can persist them on shutdown.
#[derive(serde::Deserialize, serde::Serialize, Debug, Clone, PartialEq)]
#[serde(default)] // if we add new fields, give them default values when deserializing old state
pub struct ToolSettings {
    pub color: [u8; 3],
    pub brush_width: BrushWidth,
}

impl Default for ToolSettings {
    fn default() -> Self {
        Self {
            color: [0, 0, 0],
            brush_width: BrushWidth::default(),
        }
    }
}

pub struct PaintApp {
    document: Document,
    renderer: Renderer,
    input: InputHandler,
    exports: Vec<ExportJob>,
    /// Color being edited while the chooser is open
    pub(crate) color_dialog: Option<Color32>,
    pub(crate) resize_dialog: Option<ResizeDialog>,
    pub(crate) notification: Option<Notification>,
}

impl PaintApp {
    /// Called once before the first frame.
    pub fn new(cc: &eframe::CreationContext<'_>, config: CanvasConfig) -> CanvasResult<Self> {
        let mut app = Self::with_config(&config)?;

        if let Some(settings) = cc
            .storage
            .and_then(|storage| eframe::get_value::<ToolSettings>(storage, eframe::APP_KEY))
        {
            log::info!("Restoring tool settings: {:?}", settings);
            app.apply_settings(&settings);
        }

        Ok(app)
    }

    /// Build the app state without a window
    pub fn with_config(config: &CanvasConfig) -> CanvasResult<Self> {
        Ok(Self {
            document: Document::from_config(config)?,
            renderer: Renderer::new(),
            input: InputHandler::new(),
            exports: Vec::new(),
            color_dialog: None,
            resize_dialog: None,
            notification: None,
        })
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn renderer(&self) -> &Renderer {
        &self.renderer
    }

    pub fn notification(&self) -> Option<&Notification> {
        self.notification.as_ref()
    }

    pub fn is_exporting(&self) -> bool {
        !self.exports.is_empty()
    }

    pub fn settings(&self) -> ToolSettings {
        let engine = self.document.engine();
        let color = engine.color();
        ToolSettings {
            color: [color.r(), color.g(), color.b()],
            brush_width: engine.brush_width(),
        }
    }

    fn apply_settings(&mut self, settings: &ToolSettings) {
        let [r, g, b] = settings.color;
        self.document.set_color(Color32::from_rgb(r, g, b));
        self.document.set_brush(settings.brush_width);
    }

    /// Run a command, turning a failure into an error notification
    pub fn execute(&mut self, command: Command) {
        if let Err(err) = command.execute(&mut self.document) {
            self.report_error(command.label(), &err);
        }
    }

    fn report_error(&mut self, action: &str, err: &CanvasError) {
        log::warn!("{} failed: {}", action, err);
        self.notification = Some(Notification::Error(format!("{} failed: {}", action, err)));
    }

    pub fn open_color_dialog(&mut self) {
        self.color_dialog = Some(self.document.engine().color());
    }

    pub fn open_resize_dialog(&mut self) {
        self.resize_dialog = Some(ResizeDialog::new(
            self.document.width(),
            self.document.height(),
        ));
    }

    /// Ask for a path and write the canvas there in the background
    pub fn request_save(&mut self) {
        match file_handler::pick_save_path() {
            Some(path) => self.start_export(path),
            None => log::debug!("Save cancelled"),
        }
    }

    pub fn start_export(&mut self, path: impl Into<std::path::PathBuf>) {
        let path = file_handler::ensure_png_extension(path);
        let job = self.document.begin_export(path);
        log::debug!(
            "Queued export {} ({} already running)",
            job.id(),
            self.exports.len()
        );
        self.exports.push(job);
    }

    /// Collect finished exports and tell the user how they went
    pub fn poll_exports(&mut self) {
        let mut finished = Vec::new();
        self.exports.retain(|job| match job.poll() {
            Some(result) => {
                finished.push((job.path().to_path_buf(), result));
                false
            }
            None => true,
        });

        for (target, result) in finished {
            match result {
                Ok(path) => {
                    self.notification = Some(Notification::Info(format!(
                        "Image saved successfully to {}",
                        path.display()
                    )));
                }
                Err(err) => {
                    let action = format!("Save to {}", target.display());
                    self.report_error(&action, &err);
                }
            }
        }
    }

    pub fn handle_shortcut(&mut self, shortcut: Shortcut) {
        log::debug!("Shortcut {:?}", shortcut);
        match shortcut {
            Shortcut::Save => self.request_save(),
            Shortcut::ChooseColor => self.open_color_dialog(),
            Shortcut::ToggleEraser => self.execute(Command::ToggleEraser),
            Shortcut::Clear => self.execute(Command::Clear),
            Shortcut::DecreaseBrush => self.execute(Command::StepBrushWidth(Step::Decrease)),
            Shortcut::IncreaseBrush => self.execute(Command::StepBrushWidth(Step::Increase)),
        }
    }

    /// Feed this frame's pointer input to the document
    pub fn handle_input(&mut self, ctx: &egui::Context, canvas_rect: egui::Rect) {
        self.input.set_canvas_rect(canvas_rect);

        // Dialogs are modal for the canvas
        if self.color_dialog.is_some() || self.resize_dialog.is_some() {
            return;
        }

        for event in self.input.process_input(ctx) {
            if let Err(err) = input::route_event(&event, &mut self.document) {
                self.report_error("Pick Color", &err);
            }
        }
    }
}

impl eframe::App for PaintApp {
    /// Called by the frame work to save state before shutdown.
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        eframe::set_value(storage, eframe::APP_KEY, &self.settings());
    }

    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.poll_exports();
        if self.is_exporting() {
            ctx.request_repaint_after(std::time::Duration::from_millis(50));
        }

        if self.color_dialog.is_none() && self.resize_dialog.is_none() {
            for shortcut in self.input.process_shortcuts(ctx) {
                self.handle_shortcut(shortcut);
            }
        }

        panels::tools_panel(self, ctx);
        panels::central_panel(self, ctx);

        panels::dialogs::color_dialog(self, ctx);
        panels::dialogs::resize_dialog(self, ctx);
        panels::dialogs::notification_window(self, ctx);
    }
}
