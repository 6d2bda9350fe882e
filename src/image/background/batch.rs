use std::path::{Path, PathBuf};

use crate::image::background::error::ProcessError;
use crate::image::background::process::{Removal, remove_background};

/// Result of processing one target file.
#[derive(Debug)]
pub struct FileReport {
    pub path: PathBuf,
    pub result: Result<Removal, ProcessError>,
}

impl FileReport {
    #[inline]
    pub const fn is_ok(&self) -> bool {
        self.result.is_ok()
    }

    /// One console line describing the outcome.
    pub fn summary(&self) -> String {
        match &self.result {
            Ok(_) => format!("Processed {}", self.path.display()),
            Err(e) => format!("Error processing {}: {}", self.path.display(), e),
        }
    }
}

/// Remove background from each path in order.
///
/// Files are independent: a failure is recorded in its report and the
/// next path is still processed.
pub fn process_all<P: AsRef<Path>>(paths: &[P]) -> Vec<FileReport> {
    paths
        .iter()
        .map(|path| {
            let path = path.as_ref();
            FileReport {
                path: path.to_path_buf(),
                result: remove_background(path),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use image::{Rgba, RgbaImage};
    use tempfile::TempDir;

    use super::process_all;

    #[test]
    fn failure_does_not_stop_later_files() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("nutcracker_idle.png");
        let present = dir.path().join("nutcracker_cracking.png");
        RgbaImage::from_pixel(2, 2, Rgba([0, 0, 255, 255]))
            .save(&present)
            .unwrap();

        let reports = process_all(&[&missing, &present]);

        assert_eq!(reports.len(), 2);
        assert!(!reports[0].is_ok());
        assert!(reports[1].is_ok());
        assert_eq!(reports[1].result.as_ref().unwrap().cleared, 4);
    }

    #[test]
    fn summary_names_the_path() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("missing.png");
        let present = dir.path().join("present.png");
        RgbaImage::from_pixel(1, 1, Rgba([9, 9, 9, 255]))
            .save(&present)
            .unwrap();

        let reports = process_all(&[&missing, &present]);

        let error = reports[0].summary();
        assert!(error.starts_with("Error processing "));
        assert!(error.contains(&missing.display().to_string()));
        assert_eq!(
            reports[1].summary(),
            format!("Processed {}", present.display())
        );
    }

    #[test]
    fn empty_batch() {
        let reports = process_all::<&str>(&[]);
        assert!(reports.is_empty());
    }
}
