use crate::file_picker::interface::FilePicker;
use std::path::PathBuf;
use std::sync::Mutex;

/// Scripted picks, consumed front to back. An exhausted script behaves like
/// a cancelled dialog.
#[allow(dead_code)]
pub struct FilePickerFake {
    picks: Mutex<Vec<Option<PathBuf>>>,
}

impl FilePickerFake {
    #[allow(dead_code)]
    pub fn new(picks: Vec<Option<PathBuf>>) -> Self {
        Self {
            picks: Mutex::new(picks),
        }
    }
}

impl FilePicker for FilePickerFake {
    fn pick_image(&self) -> Option<PathBuf> {
        let mut picks = self.picks.lock().unwrap();
        if picks.is_empty() {
            None
        } else {
            picks.remove(0)
        }
    }
}
