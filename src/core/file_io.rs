use std::path::{Path, PathBuf};

use serde::Serialize;

pub fn extract_base_name(path: &str) -> &str {
    Path::new(path)
        .file_stem() // Get the base name component of the path
        .and_then(|name| name.to_str())
        .unwrap_or("params")
}

/// Builds (and creates) `out/<project>/<params base name>[/<date time>]`.
pub fn build_output_path_with_date_time(
    params_path: &str,
    project: &str,
    datetime: &Option<String>,
) -> std::io::Result<PathBuf> {
    let mut dirs = vec!["out", project, extract_base_name(params_path)];
    if let Some(inner_datetime_str) = datetime {
        dirs.push(inner_datetime_str);
    }

    let directory_path: PathBuf = dirs.iter().collect();
    std::fs::create_dir_all(&directory_path)?;
    Ok(directory_path)
}

pub fn date_time_string() -> String {
    use chrono::{Datelike, Local, Timelike};
    let local_time = Local::now();
    format!(
        "{:04}{:02}{:02}_{:02}{:02}{:02}",
        local_time.year(),
        local_time.month(),
        local_time.day(),
        local_time.hour(),
        local_time.minute(),
        local_time.second()
    )
}

pub fn maybe_date_time_string(enable: bool) -> Option<String> {
    if enable {
        Some(date_time_string())
    } else {
        None
    }
}

/**
 * Store a path and prefix together, making it easily to quickly generate
 * a collection of files with the same prefix, but separate suffixes.
 */
#[derive(Clone, Debug)]
pub struct FilePrefix {
    pub directory_path: PathBuf,
    pub file_base: String,
}

impl FilePrefix {
    pub fn full_path_with_suffix(&self, suffix: &str) -> PathBuf {
        self.directory_path.join(self.file_base.clone() + suffix)
    }

    pub fn create_file_with_suffix(
        &self,
        suffix: &str,
    ) -> std::io::Result<std::io::BufWriter<std::fs::File>> {
        let file = std::fs::File::create(self.full_path_with_suffix(suffix))?;
        Ok(std::io::BufWriter::new(file))
    }

    /// Creates `<directory_path>/<name>` and returns its path.
    pub fn create_sub_directory(&self, name: &str) -> std::io::Result<PathBuf> {
        let path = self.directory_path.join(name);
        std::fs::create_dir_all(&path)?;
        Ok(path)
    }
}

pub fn serialize_to_json<T: Serialize>(
    path: impl AsRef<Path>,
    value: &T,
) -> Result<(), Box<dyn std::error::Error>> {
    let file = std::fs::File::create(path.as_ref())?;
    serde_json::to_writer_pretty(std::io::BufWriter::new(file), value)?;
    log::info!("Wrote parameter file to: {}", path.as_ref().display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_base_name() {
        assert_eq!(extract_base_name("demos/spiral/params.json"), "params");
        assert_eq!(extract_base_name("wobble.json"), "wobble");
    }

    #[test]
    fn test_file_prefix_suffix() {
        let prefix = FilePrefix {
            directory_path: PathBuf::from("out/julia"),
            file_base: "frame".to_owned(),
        };
        assert_eq!(
            prefix.full_path_with_suffix("_diagnostics.txt"),
            PathBuf::from("out/julia/frame_diagnostics.txt")
        );
    }

    #[test]
    fn test_date_time_string_format() {
        let text = date_time_string();
        assert_eq!(text.len(), 15);
        assert_eq!(&text[8..9], "_");
        assert!(maybe_date_time_string(false).is_none());
    }
}
