use std::error::Error;
use std::path::Path;

/// Error of a [Downloader]
pub type DownloadError = Box<dyn Error + Send + Sync>;

/// Fetches and unpacks the dataset archive below a root directory
///
/// Called once, before the dataset root is searched for, when downloading is requested.
pub trait Downloader {
    fn download(&self, root: &Path) -> Result<(), DownloadError>;
}

impl<F> Downloader for F
where
    F: Fn(&Path) -> Result<(), DownloadError>,
{
    fn download(&self, root: &Path) -> Result<(), DownloadError> {
        self(root)
    }
}
