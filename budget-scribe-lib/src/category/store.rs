use std::{
    collections::BTreeMap,
    fs::{self, File},
    io::{BufWriter, Read, Write},
    path::{Path, PathBuf},
};

use super::{resolve_categories, Account, Category, Error};

/// Source of the category taxonomy for an account
pub trait CategoryStore {
    /// List the categories of an account in display order
    fn list(&self, account: &Account) -> Result<Vec<Category>, Error>;
}

/// Category lists keyed by account id
pub type CategoriesByAccount = BTreeMap<String, Vec<Category>>;

/// Category store backed by a single yaml file mapping account ids to category lists
///
/// A missing file or an account without stored categories resolves to the defaults for the
/// account kind.
#[derive(Debug, Clone)]
pub struct YamlCategoryStore {
    path: PathBuf,
}

impl YamlCategoryStore {
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read every stored category list
    pub fn load(&self) -> Result<CategoriesByAccount, Error> {
        if !self.path.exists() {
            return Ok(CategoriesByAccount::new());
        }
        Self::from_reader(File::open(&self.path)?)
    }

    /// Parse stored category lists from a reader
    pub fn from_reader<R: Read>(mut reader: R) -> Result<CategoriesByAccount, Error> {
        let mut buffer = String::new();
        reader.read_to_string(&mut buffer)?;
        if buffer.trim().is_empty() {
            return Ok(CategoriesByAccount::new());
        }
        Ok(serde_yaml::from_str(&buffer)?)
    }

    /// Replace the whole category list of an account
    pub fn save(&self, account: &Account, categories: &[Category]) -> Result<(), Error> {
        let mut stored = self.load()?;
        stored.insert(account.id.clone(), categories.to_vec());
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        let mut writer = BufWriter::new(File::create(&self.path)?);
        serde_yaml::to_writer(&mut writer, &stored)?;
        writer.flush()?;
        Ok(())
    }
}

impl CategoryStore for YamlCategoryStore {
    fn list(&self, account: &Account) -> Result<Vec<Category>, Error> {
        let stored = self.load()?.remove(&account.id).unwrap_or_default();
        Ok(resolve_categories(stored, account.kind))
    }
}

impl CategoryStore for CategoriesByAccount {
    fn list(&self, account: &Account) -> Result<Vec<Category>, Error> {
        let stored = self.get(&account.id).cloned().unwrap_or_default();
        Ok(resolve_categories(stored, account.kind))
    }
}
