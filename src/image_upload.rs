use crate::error::PredictError;
use std::fmt;
use std::path::{Path, PathBuf};

/// The user-chosen image, held in memory until it is replaced or cleared.
#[derive(Clone, PartialEq)]
pub struct SelectedImage {
    pub path: PathBuf,
    pub name: String,
    pub mime: String,
    pub bytes: Vec<u8>,
}

impl fmt::Debug for SelectedImage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SelectedImage")
            .field("name", &self.name)
            .field("mime", &self.mime)
            .field("bytes", &self.bytes.len())
            .finish()
    }
}

/// Decoded RGBA pixels for local display. Lifecycle is tied 1:1 to the
/// selection that produced it.
#[derive(Clone, PartialEq)]
pub struct Preview {
    pub width: u32,
    pub height: u32,
    pub rgba: Vec<u8>,
}

impl fmt::Debug for Preview {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Preview({}x{})", self.width, self.height)
    }
}

pub fn guess_mime(path: &Path) -> Option<&'static str> {
    let ext = path.extension()?.to_str()?.to_ascii_lowercase();
    let mime = match ext.as_str() {
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "gif" => "image/gif",
        "bmp" => "image/bmp",
        "webp" => "image/webp",
        "tif" | "tiff" => "image/tiff",
        "txt" => "text/plain",
        "json" => "application/json",
        "pdf" => "application/pdf",
        _ => return None,
    };
    Some(mime)
}

/// Read and validate a picked file. Rejects anything whose MIME type does
/// not begin with `image/`, and anything the decoder cannot open.
pub fn load_selected(path: &Path) -> Result<(SelectedImage, Preview), PredictError> {
    let mime = guess_mime(path)
        .filter(|mime| mime.starts_with("image/"))
        .ok_or(PredictError::NotAnImage)?;

    let bytes = std::fs::read(path).map_err(|err| PredictError::FileRead(err.to_string()))?;

    let decoded = image::load_from_memory(&bytes).map_err(|_| PredictError::NotAnImage)?;
    let rgba = decoded.to_rgba8();
    let preview = Preview {
        width: rgba.width(),
        height: rgba.height(),
        rgba: rgba.into_raw(),
    };

    let name = path
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or("image")
        .to_string();

    Ok((
        SelectedImage {
            path: path.to_path_buf(),
            name,
            mime: mime.to_string(),
            bytes,
        },
        preview,
    ))
}
