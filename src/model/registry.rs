//! Model registry: named models loaded from disk or registered in code.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use super::errors::{ModelError, ModelResult};
use super::types::Model;
use crate::validator::RequestValidator;

/// In-memory store of named request models.
///
/// Typically one model per resource, registered at startup and reused for
/// the lifetime of the process. Registered models are immutable: a name
/// can be bound once.
#[derive(Debug, Default)]
pub struct ModelRegistry {
    models: HashMap<String, Model>,
}

impl ModelRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a model under a resource name.
    ///
    /// The model's structure is checked first; parameters that could never
    /// pass are rejected here instead of failing every request later.
    pub fn register(&mut self, name: impl Into<String>, model: Model) -> ModelResult<()> {
        let name = name.into();

        model
            .validate_structure()
            .map_err(|reason| ModelError::Invalid {
                name: name.clone(),
                reason,
            })?;

        if self.models.contains_key(&name) {
            return Err(ModelError::AlreadyRegistered(name));
        }

        log::info!("registered model '{}' ({} fields)", name, model.len());
        self.models.insert(name, model);
        Ok(())
    }

    /// Loads every `*.json` file in a directory as one model named after
    /// the file stem. Other files are skipped.
    pub fn load_dir(&mut self, dir: &Path) -> ModelResult<()> {
        let entries = fs::read_dir(dir).map_err(|source| ModelError::Io {
            path: dir.display().to_string(),
            source,
        })?;

        for entry in entries {
            let entry = entry.map_err(|source| ModelError::Io {
                path: dir.display().to_string(),
                source,
            })?;
            let path = entry.path();

            if path.extension().map_or(true, |ext| ext != "json") {
                continue;
            }

            self.load_file(&path)?;
        }

        Ok(())
    }

    /// Loads a single model file.
    pub fn load_file(&mut self, path: &Path) -> ModelResult<()> {
        let content = fs::read_to_string(path).map_err(|source| ModelError::Io {
            path: path.display().to_string(),
            source,
        })?;

        let model: Model = serde_json::from_str(&content).map_err(|e| ModelError::Malformed {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;

        let name = path
            .file_stem()
            .and_then(|stem| stem.to_str())
            .ok_or_else(|| ModelError::Malformed {
                path: path.display().to_string(),
                reason: "file name is not valid UTF-8".into(),
            })?;

        self.register(name, model)
    }

    /// Gets a registered model.
    pub fn get(&self, name: &str) -> Option<&Model> {
        self.models.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.models.contains_key(name)
    }

    /// Number of registered models.
    pub fn len(&self) -> usize {
        self.models.len()
    }

    pub fn is_empty(&self) -> bool {
        self.models.is_empty()
    }

    /// Builds a validator for a registered model.
    pub fn validator(&self, name: &str) -> ModelResult<RequestValidator> {
        self.models
            .get(name)
            .cloned()
            .map(RequestValidator::new)
            .ok_or_else(|| ModelError::NotFound(name.to_string()))
    }
}
