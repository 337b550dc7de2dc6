use std::{
    env,
    fs::File,
    path::{
        Path,
        PathBuf,
    },
};

use anyhow::{
    Context,
    Error,
    Result,
};
use pokedex_client::HttpPokeApiClient;
use pokedex_local_data::LocalStorage;
use serde::{
    Deserialize,
    Serialize,
};

/// Environment variable that overrides the default data directory.
pub const DATA_DIR_ENV: &str = "POKEDEX_DATA_DIR";

fn default_api_url() -> String {
    HttpPokeApiClient::DEFAULT_BASE_URL.to_owned()
}

/// Options for configuring the application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PokedexOptions {
    /// Base URL of the catalog API.
    #[serde(default = "default_api_url")]
    pub api_url: String,

    /// Directory captured Pokemon are stored in.
    ///
    /// If unset, [`DATA_DIR_ENV`] is used, followed by the platform data directory.
    #[serde(default)]
    pub data_dir: Option<PathBuf>,
}

impl Default for PokedexOptions {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            data_dir: None,
        }
    }
}

impl PokedexOptions {
    /// Reads options from a JSON file.
    pub fn from_file(path: &Path) -> Result<Self> {
        serde_json::from_reader(
            File::open(path).context(format!("failed to open {}", path.display()))?,
        )
        .context(format!("failed to parse {}", path.display()))
    }

    /// Reads options from the given file, if any, or uses defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None => Ok(Self::default()),
        }
    }

    /// Opens the storage for captured Pokemon.
    pub fn open_storage(&self) -> Result<LocalStorage> {
        if let Some(data_dir) = &self.data_dir {
            return LocalStorage::new(data_dir);
        }
        if env::var_os(DATA_DIR_ENV).is_some() {
            return LocalStorage::new_from_env(DATA_DIR_ENV);
        }
        LocalStorage::new(Self::default_data_dir()?)
    }

    /// Creates the catalog client.
    pub fn client(&self) -> Result<HttpPokeApiClient> {
        HttpPokeApiClient::new(self.api_url.as_str())
    }

    fn default_data_dir() -> Result<PathBuf> {
        dirs::data_dir()
            .map(|dir| dir.join("pokedex"))
            .ok_or_else(|| {
                Error::msg(format!(
                    "no data directory available; set {DATA_DIR_ENV} or pass --data-dir"
                ))
            })
    }
}
