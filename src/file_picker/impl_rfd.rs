use crate::file_picker::interface::FilePicker;
use std::path::PathBuf;

pub struct FilePickerRfd {}

impl FilePickerRfd {
    pub fn new() -> Self {
        Self {}
    }
}

impl FilePicker for FilePickerRfd {
    fn pick_image(&self) -> Option<PathBuf> {
        rfd::FileDialog::new()
            .add_filter(
                "images",
                &["png", "jpg", "jpeg", "gif", "bmp", "webp", "tif", "tiff"],
            )
            .pick_file()
    }
}
