use std::path::PathBuf;

/// Native file selection. Returns `None` when the user cancels the dialog.
pub trait FilePicker: Send + Sync {
    fn pick_image(&self) -> Option<PathBuf>;
}
