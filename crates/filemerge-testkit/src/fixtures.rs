//! Template and CSV fixtures for merge tests

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

use crate::temp_dir_in_workspace;

/// A temporary directory holding one template and one CSV file
///
/// ```rust
/// use filemerge_testkit::Fixture;
///
/// let fixture = Fixture::new("Name: {{ Name }}\n", "Name\nAlice\n");
/// assert!(fixture.template().exists());
/// assert!(fixture.csv().exists());
/// ```
pub struct Fixture {
    dir: TempDir,
    template: PathBuf,
    csv: PathBuf,
}

impl Fixture {
    /// Write `template` to `template.txt` and `csv` to `data.csv`
    pub fn new(template: &str, csv: &str) -> Self {
        let dir = temp_dir_in_workspace();
        let template_path = dir.path().join("template.txt");
        let csv_path = dir.path().join("data.csv");
        fs::write(&template_path, template).expect("Failed to write template fixture");
        fs::write(&csv_path, csv).expect("Failed to write CSV fixture");

        Self {
            dir,
            template: template_path,
            csv: csv_path,
        }
    }

    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    pub fn template(&self) -> &Path {
        &self.template
    }

    pub fn csv(&self) -> &Path {
        &self.csv
    }

    /// Default output directory, `<root>/output` (not created)
    pub fn output_dir(&self) -> PathBuf {
        self.dir.path().join("output")
    }

    /// Write an extra file relative to the fixture root
    pub fn write(&self, relative: &str, content: impl AsRef<[u8]>) -> PathBuf {
        let path = self.dir.path().join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create fixture directory");
        }
        fs::write(&path, content).expect("Failed to write fixture file");
        path
    }

    /// Sorted file names directly inside `dir`
    pub fn list_files(dir: &Path) -> Vec<String> {
        let mut names: Vec<String> = fs::read_dir(dir)
            .expect("Failed to read directory")
            .filter_map(|entry| entry.ok())
            .filter(|entry| entry.path().is_file())
            .map(|entry| entry.file_name().to_string_lossy().into_owned())
            .collect();
        names.sort();
        names
    }

    /// Read a file as UTF-8
    pub fn read(path: &Path) -> String {
        fs::read_to_string(path).expect("Failed to read output file")
    }
}
