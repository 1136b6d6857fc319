use std::{
    path::{
        Path,
        PathBuf,
    },
    sync::Arc,
};

use color_eyre::eyre::{
    Context,
    OptionExt,
};
use directories::ProjectDirs;
use serde::{
    Serialize,
    de::DeserializeOwned,
};

use crate::Error;

#[derive(Clone, Debug)]
pub struct AppFiles {
    project_dirs: Arc<ProjectDirs>,
}

impl AppFiles {
    pub fn new(project_dirs: ProjectDirs) -> Self {
        Self {
            project_dirs: Arc::new(project_dirs),
        }
    }

    pub fn open() -> Result<Self, Error> {
        let project_dirs = ProjectDirs::from("", "", std::env!("CARGO_PKG_NAME"))
            .ok_or_eyre("Could not determine the home directory")?;
        let app_files = Self::new(project_dirs);
        std::fs::create_dir_all(app_files.config_dir())?;
        Ok(app_files)
    }

    pub fn config_dir(&self) -> &Path {
        self.project_dirs.config_local_dir()
    }

    pub fn config_path(&self) -> PathBuf {
        self.config_dir().join("config.toml")
    }

    /// Read config file, or create one if it doesn't exist yet.
    pub fn read_config_or_create<T>(&self) -> Result<T, Error>
    where
        T: Serialize + DeserializeOwned + Default,
    {
        read_or_create(&self.config_path())
    }
}

fn read_or_create<T>(path: &Path) -> Result<T, Error>
where
    T: Serialize + DeserializeOwned + Default,
{
    let config = if !path.exists() {
        tracing::info!(path = %path.display(), "Creating config file");
        let config = T::default();
        let toml = toml::to_string_pretty(&config)?;
        std::fs::write(path, &toml)
            .with_context(|| format!("Could not write config file: {}", path.display()))?;
        config
    }
    else {
        tracing::info!(path = %path.display(), "Reading config file");
        let toml = std::fs::read(path)
            .with_context(|| format!("Could not read config file: {}", path.display()))?;

        toml::from_slice(&toml)
            .with_context(|| format!("Invalid config file: {}", path.display()))?
    };

    Ok(config)
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use crate::{
        config::AppConfig,
        files::read_or_create,
    };

    fn scratch_path(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!(
            "{}-test-{}-{name}",
            std::env!("CARGO_PKG_NAME"),
            std::process::id()
        ));
        std::fs::create_dir_all(&dir).unwrap();
        dir.join("config.toml")
    }

    #[test]
    fn it_creates_missing_config() {
        let path = scratch_path("create");
        let _ = std::fs::remove_file(&path);

        let config: AppConfig = read_or_create(&path).unwrap();
        assert_eq!(config, AppConfig::default());
        assert!(path.exists());

        let again: AppConfig = read_or_create(&path).unwrap();
        assert_eq!(again, config);
    }

    #[test]
    fn it_rejects_invalid_config() {
        let path = scratch_path("invalid");
        std::fs::write(&path, "grid = 5").unwrap();

        let error = read_or_create::<AppConfig>(&path).unwrap_err();
        assert!(format!("{error:#}").contains("Invalid config file"));
    }
}
