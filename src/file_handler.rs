use std::path::{Path, PathBuf};
use std::sync::mpsc::{self, Receiver, TryRecvError};

use image::RgbImage;
use uuid::Uuid;

use crate::error::{CanvasError, CanvasResult};
use crate::surface;

/// Append `.png` unless the path already ends with it (case-insensitive)
pub fn ensure_png_extension(path: impl Into<PathBuf>) -> PathBuf {
    let path = path.into();
    let has_png = path
        .extension()
        .map(|ext| ext.eq_ignore_ascii_case("png"))
        .unwrap_or(false);
    if has_png {
        return path;
    }
    let mut name = path.into_os_string();
    name.push(".png");
    PathBuf::from(name)
}

/// Ask the user where to save. Returns `None` if the dialog was cancelled.
pub fn pick_save_path() -> Option<PathBuf> {
    rfd::FileDialog::new()
        .add_filter("PNG files", &["png"])
        .set_file_name("drawing.png")
        .save_file()
        .map(ensure_png_extension)
}

/// A PNG write running on a background thread.
///
/// The job owns a copy of the pixels taken when it was started, so the canvas
/// can keep changing while the file is written.
pub struct ExportJob {
    id: Uuid,
    path: PathBuf,
    receiver: Receiver<CanvasResult<PathBuf>>,
}

impl std::fmt::Debug for ExportJob {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ExportJob")
            .field("id", &self.id)
            .field("path", &self.path)
            .finish()
    }
}

impl ExportJob {
    pub fn spawn(snapshot: RgbImage, path: PathBuf) -> Self {
        let id = Uuid::new_v4();
        let (tx, rx) = mpsc::channel();
        let target = path.clone();

        log::info!(
            "Export {} started: {}x{} -> {}",
            id,
            snapshot.width(),
            snapshot.height(),
            path.display()
        );

        std::thread::spawn(move || {
            let result = surface::write_png(&snapshot, &target).map(|()| target);
            // The receiver may be gone if the app closed; nothing to report then.
            let _ = tx.send(result);
        });

        Self {
            id,
            path,
            receiver: rx,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Non-blocking check for completion
    pub fn poll(&self) -> Option<CanvasResult<PathBuf>> {
        match self.receiver.try_recv() {
            Ok(result) => {
                self.log_result(&result);
                Some(result)
            }
            Err(TryRecvError::Empty) => None,
            Err(TryRecvError::Disconnected) => Some(Err(self.worker_vanished())),
        }
    }

    /// Block until the write has finished
    pub fn wait(self) -> CanvasResult<PathBuf> {
        let result = self
            .receiver
            .recv()
            .unwrap_or_else(|_| Err(self.worker_vanished()));
        self.log_result(&result);
        result
    }

    fn worker_vanished(&self) -> CanvasError {
        log::error!("Export {} worker exited without reporting", self.id);
        CanvasError::Io(std::io::Error::other("export worker exited unexpectedly"))
    }

    fn log_result(&self, result: &CanvasResult<PathBuf>) {
        match result {
            Ok(path) => log::info!("Export {} finished: {}", self.id, path.display()),
            Err(err) => log::warn!("Export {} failed: {}", self.id, err),
        }
    }
}
