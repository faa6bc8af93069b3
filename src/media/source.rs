//! Image source descriptions accepted by the loader.

use std::fmt;
use std::path::{Path, PathBuf};

use ndarray::ArrayD;
use url::Url;

/// Where an image comes from.
#[derive(Debug, Clone)]
pub enum ImageSource {
    /// An encoded image file on disk.
    Path(PathBuf),
    /// An encoded image held in memory.
    Bytes(Vec<u8>),
    /// An encoded image fetched over HTTP(S).
    Url(Url),
    /// Pixels that are already decoded, in BGR(A) channel order.
    Array(ArrayD<u8>),
}

impl ImageSource {
    /// Whether loading this source needs the network.
    pub fn is_remote(&self) -> bool {
        matches!(self, ImageSource::Url(_))
    }
}

impl fmt::Display for ImageSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ImageSource::Path(path) => write!(f, "{}", path.display()),
            ImageSource::Bytes(bytes) => write!(f, "<{} bytes>", bytes.len()),
            ImageSource::Url(url) => write!(f, "{}", url),
            ImageSource::Array(array) => write!(f, "<array {:?}>", array.shape()),
        }
    }
}

/// Parse `s` as an HTTP(S) URL, or treat it as a filesystem path.
impl From<&str> for ImageSource {
    fn from(s: &str) -> Self {
        match Url::parse(s) {
            Ok(url) if matches!(url.scheme(), "http" | "https") => ImageSource::Url(url),
            Ok(url) if url.scheme() == "file" => url
                .to_file_path()
                .map(ImageSource::Path)
                .unwrap_or_else(|_| ImageSource::Path(PathBuf::from(s))),
            _ => ImageSource::Path(PathBuf::from(s)),
        }
    }
}

impl From<String> for ImageSource {
    fn from(s: String) -> Self {
        ImageSource::from(s.as_str())
    }
}

impl From<&Path> for ImageSource {
    fn from(path: &Path) -> Self {
        ImageSource::Path(path.to_path_buf())
    }
}

impl From<PathBuf> for ImageSource {
    fn from(path: PathBuf) -> Self {
        ImageSource::Path(path)
    }
}

impl From<&PathBuf> for ImageSource {
    fn from(path: &PathBuf) -> Self {
        ImageSource::Path(path.clone())
    }
}

impl From<Vec<u8>> for ImageSource {
    fn from(bytes: Vec<u8>) -> Self {
        ImageSource::Bytes(bytes)
    }
}

impl From<&[u8]> for ImageSource {
    fn from(bytes: &[u8]) -> Self {
        ImageSource::Bytes(bytes.to_vec())
    }
}

impl From<Url> for ImageSource {
    fn from(url: Url) -> Self {
        ImageSource::Url(url)
    }
}

impl From<ArrayD<u8>> for ImageSource {
    fn from(array: ArrayD<u8>) -> Self {
        ImageSource::Array(array)
    }
}
