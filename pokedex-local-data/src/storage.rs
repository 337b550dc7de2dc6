use std::{
    env,
    fs,
    io::{
        self,
        Write,
    },
    path::{
        Path,
        PathBuf,
    },
};

use ahash::HashMap;
use anyhow::{
    Context,
    Error,
    Result,
};
use tempfile::NamedTempFile;

/// Durable key/value storage for string values.
///
/// Writes are synchronous: once [`KeyValueStorage::set`] returns successfully, the value is
/// visible to every later read, including reads from a new instance over the same backing store.
pub trait KeyValueStorage {
    /// Reads the value at the given key, if it exists.
    fn get(&self, key: &str) -> Result<Option<String>>;
    /// Overwrites the value at the given key.
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
}

/// An implementation of [`KeyValueStorage`] that keeps every value in memory.
#[derive(Debug, Default, Clone)]
pub struct MemoryStorage {
    values: HashMap<String, String>,
}

impl MemoryStorage {
    /// Creates a new, empty storage.
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStorage for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.values.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.values.insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}

/// An implementation of [`KeyValueStorage`] that stores each key as a JSON file in a directory on
/// disk.
#[derive(Debug, Clone)]
pub struct LocalStorage {
    root: PathBuf,
}

impl LocalStorage {
    /// File extension for every stored key.
    pub const FILE_EXTENSION: &str = "json";

    /// Creates a new instance of [`LocalStorage`] rooted at the given directory.
    ///
    /// The directory is created if it does not exist. Fails if the path exists but is not a
    /// directory.
    pub fn new<P>(root: P) -> Result<Self>
    where
        P: Into<PathBuf>,
    {
        let root = root.into();
        if root.exists() && !root.is_dir() {
            return Err(Error::msg(format!(
                "root for LocalStorage ({}) is not a directory",
                root.display()
            )));
        }
        fs::create_dir_all(&root)
            .with_context(|| format!("failed to create {}", root.display()))?;
        Ok(Self { root })
    }

    /// Creates a new instance of [`LocalStorage`] rooted at the directory in the given environment
    /// variable.
    pub fn new_from_env(env_var: &str) -> Result<Self> {
        Self::new(env::var(env_var).context(format!("{env_var} not defined"))?)
    }

    /// The root directory.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// The file backing the given key.
    pub fn path_for(&self, key: &str) -> Result<PathBuf> {
        if key.is_empty() || key.contains(['/', '\\']) || key.starts_with('.') {
            return Err(Error::msg(format!("invalid storage key: {key:?}")));
        }
        Ok(self.root.join(format!("{key}.{}", Self::FILE_EXTENSION)))
    }

    /// Replaces the file at `path` with the contents produced by `write`.
    ///
    /// Contents are written to a temporary file in the root directory and renamed over `path`, so
    /// a failed write leaves the previous file intact.
    fn replace_file<F>(&self, path: &Path, write: F) -> Result<()>
    where
        F: FnOnce(&mut NamedTempFile) -> io::Result<()>,
    {
        let mut file = NamedTempFile::new_in(&self.root).with_context(|| {
            format!("failed to create temporary file in {}", self.root.display())
        })?;
        write(&mut file)
            .and_then(|()| file.as_file().sync_all())
            .with_context(|| format!("failed to write {}", path.display()))?;
        file.persist(path)
            .map_err(|err| err.error)
            .with_context(|| format!("failed to replace {}", path.display()))?;
        Ok(())
    }
}

impl KeyValueStorage for LocalStorage {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let path = self.path_for(key)?;
        match fs::read_to_string(&path) {
            Ok(value) => Ok(Some(value)),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(Error::new(err).context(format!("failed to read {}", path.display()))),
        }
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let path = self.path_for(key)?;
        self.replace_file(&path, |file| file.write_all(value.as_bytes()))
    }
}
