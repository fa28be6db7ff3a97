//! In-memory template store with built-in templates.

use std::{
    collections::{BTreeMap, HashMap},
    path::Path,
    sync::{Arc, RwLock},
};

use tracing::{debug, info};

use duckgen_core::{
    application::{ApplicationError, ports::TemplateStore},
    domain::{DomainError, Kit, Template},
    error::DuckResult,
};

use crate::{builtin_templates, template_loader::DirectoryTemplateLoader};

type Shelf = BTreeMap<String, Template>;

/// Thread-safe in-memory template store, one shelf per kit.
///
/// Shelves are ordered by template name so wildcard lookups are stable.
#[derive(Clone, Default)]
pub struct InMemoryStore {
    inner: Arc<RwLock<HashMap<Kit, Shelf>>>,
}

impl InMemoryStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store with built-in templates loaded.
    pub fn with_builtin() -> DuckResult<Self> {
        let store = Self::new();
        store.load_builtin()?;
        Ok(store)
    }

    /// Load the bundled templates of every kit.
    pub fn load_builtin(&self) -> DuckResult<()> {
        for kit in Kit::ALL {
            for template in builtin_templates::templates_for(kit) {
                self.insert(kit, template)?;
            }
        }
        Ok(())
    }

    /// Replace templates with the ones found under `dir`.
    ///
    /// Returns how many templates were overridden across all kits.
    pub fn overlay_dir(&self, dir: &Path) -> DuckResult<usize> {
        let loader = DirectoryTemplateLoader::new(dir);
        let mut count = 0;

        for kit in Kit::ALL {
            for template in loader.load(kit)? {
                debug!(%kit, template = %template, "overriding template");
                self.insert(kit, template)?;
                count += 1;
            }
        }

        info!(dir = %loader.templates_dir().display(), count, "template overrides applied");
        Ok(count)
    }

    /// Insert or replace a template of `kit`.
    pub fn insert(&self, kit: Kit, template: Template) -> DuckResult<()> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| ApplicationError::LockPoisoned { what: "template store" })?;

        inner
            .entry(kit)
            .or_default()
            .insert(template.name().to_string(), template);
        Ok(())
    }

    /// Number of templates held for `kit`.
    pub fn len(&self, kit: Kit) -> usize {
        self.inner
            .read()
            .map(|inner| inner.get(&kit).map_or(0, BTreeMap::len))
            .unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        Kit::ALL.iter().all(|kit| self.len(*kit) == 0)
    }
}

impl TemplateStore for InMemoryStore {
    fn get(&self, kit: Kit, name: &str) -> DuckResult<Template> {
        let inner = self
            .inner
            .read()
            .map_err(|_| ApplicationError::LockPoisoned { what: "template store" })?;

        inner
            .get(&kit)
            .and_then(|shelf| shelf.values().find(|t| t.matches(name)))
            .cloned()
            .ok_or_else(|| DomainError::TemplateNotFound(name.to_string()).into())
    }

    fn list(&self, kit: Kit) -> DuckResult<Vec<Template>> {
        let inner = self
            .inner
            .read()
            .map_err(|_| ApplicationError::LockPoisoned { what: "template store" })?;

        Ok(inner
            .get(&kit)
            .map(|shelf| shelf.values().cloned().collect())
            .unwrap_or_default())
    }
}
