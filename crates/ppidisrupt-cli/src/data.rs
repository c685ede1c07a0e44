use crate::error::{CliError, Result};
use directories::ProjectDirs;
use std::fs::{self};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

const NETWORK_FILE: &str = "networks/consensus_network.txt.gz";
const ANNOTATION_FILE: &str = "annotations/mutations.tsv.gz";
const MATRIX_DIR: &str = "matrices";

/// Locates the bundled data files (consensus network, annotation table, matrices).
#[derive(Debug)]
pub struct DataManager {
    base_path: PathBuf,
}

impl DataManager {
    pub fn new() -> Result<Self> {
        let path = Self::determine_data_path()?;
        debug!("DataManager initialized with path: {:?}", &path);
        Ok(Self { base_path: path })
    }

    pub fn with_custom_path(base_path: PathBuf) -> Self {
        Self { base_path }
    }

    pub fn get_data_path(&self) -> &Path {
        &self.base_path
    }

    pub fn network_path(&self) -> PathBuf {
        self.base_path.join(NETWORK_FILE)
    }

    pub fn annotation_path(&self) -> PathBuf {
        self.base_path.join(ANNOTATION_FILE)
    }

    pub fn matrix_dir(&self) -> PathBuf {
        self.base_path.join(MATRIX_DIR)
    }

    pub fn set_custom_path(path: &Path) -> Result<()> {
        if !path.is_absolute() {
            return Err(CliError::Argument(format!(
                "Data path must be absolute: {}",
                path.display()
            )));
        }
        let config_path = Self::get_path_config_file()?;
        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(config_path, path.to_string_lossy().as_bytes()).map_err(CliError::from)
    }

    pub fn reset_path() -> Result<()> {
        if let Ok(config_path) = Self::get_path_config_file() {
            if config_path.exists() {
                fs::remove_file(config_path)?;
            }
        }
        Ok(())
    }

    fn determine_data_path() -> Result<PathBuf> {
        match Self::get_path_config_file() {
            Ok(config_path) if config_path.exists() => {
                let custom_path_str = fs::read_to_string(&config_path)?.trim().to_string();
                if custom_path_str.is_empty() {
                    warn!("Custom path config file is empty, falling back to default path.");
                    Self::get_default_data_path()
                } else {
                    Ok(PathBuf::from(custom_path_str))
                }
            }
            _ => Self::get_default_data_path(),
        }
    }

    fn project_dirs() -> Option<ProjectDirs> {
        ProjectDirs::from("org", "ppidisrupt", "ppidisrupt")
    }

    fn get_path_config_file() -> Result<PathBuf> {
        Self::project_dirs()
            .map(|dirs| dirs.config_dir().join("path.conf"))
            .ok_or_else(|| CliError::Data("Could not determine config directory path.".to_string()))
    }

    fn get_default_data_path() -> Result<PathBuf> {
        Self::project_dirs()
            .map(|dirs| dirs.data_dir().to_path_buf())
            .ok_or_else(|| {
                CliError::Data("Could not determine default data directory path.".to_string())
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn bundled_files_are_resolved_under_the_data_path() {
        let temp_dir = tempdir().unwrap();
        let base_path = temp_dir.path();
        let manager = DataManager::with_custom_path(base_path.to_path_buf());

        assert_eq!(manager.get_data_path(), base_path);
        assert_eq!(
            manager.network_path(),
            base_path.join("networks/consensus_network.txt.gz")
        );
        assert_eq!(
            manager.annotation_path(),
            base_path.join("annotations/mutations.tsv.gz")
        );
        assert_eq!(manager.matrix_dir(), base_path.join("matrices"));
    }

    #[test]
    fn resolving_paths_does_not_require_the_files_to_exist() {
        let temp_dir = tempdir().unwrap();
        let manager = DataManager::with_custom_path(temp_dir.path().to_path_buf());

        let network = manager.network_path();
        assert!(!network.exists());
        assert!(network.to_string_lossy().contains("consensus_network"));
    }

    #[test]
    fn relative_custom_paths_are_rejected() {
        let result = DataManager::set_custom_path(Path::new("relative/data"));
        assert!(matches!(result, Err(CliError::Argument(_))));
    }
}
