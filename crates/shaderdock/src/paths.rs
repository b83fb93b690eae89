use std::env;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Result};
use directories_next::ProjectDirs;
use tracing::debug;

pub const ENV_CONFIG_DIR: &str = "SHADERDOCK_CONFIG_DIR";

const QUALIFIER: &str = "org";
const ORGANISATION: &str = "ShaderDock";
const APPLICATION: &str = "shaderdock";

const CONFIG_FILE_NAME: &str = "shader-dock.toml";

#[derive(Debug, Clone)]
pub struct AppPaths {
    config_dir: PathBuf,
}

impl AppPaths {
    pub fn discover() -> Result<Self> {
        if let Some(value) = env::var_os(ENV_CONFIG_DIR) {
            let config_dir = PathBuf::from(value);
            debug!(dir = %config_dir.display(), "config dir overridden via {ENV_CONFIG_DIR}");
            return Ok(Self { config_dir });
        }

        let project_dirs = ProjectDirs::from(QUALIFIER, ORGANISATION, APPLICATION)
            .ok_or_else(|| anyhow!("failed to determine user directories"))?;
        Ok(Self {
            config_dir: project_dirs.config_dir().to_path_buf(),
        })
    }

    pub fn config_dir(&self) -> &Path {
        &self.config_dir
    }

    pub fn config_file(&self) -> PathBuf {
        self.config_dir.join(CONFIG_FILE_NAME)
    }
}
