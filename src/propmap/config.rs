//! # Configuration
//!
//! Settings are loaded with [`confique`] from TOML files and environment
//! variables.
//!
//! ## Storage Hierarchy
//!
//! Resolved in priority order:
//! 1. **Environment variables**: `PROPMAP_SERVICE_NAME`, `PROPMAP_ENUM_NAMES`.
//! 2. **Explicit file**: the path given with `--config`. It must exist.
//! 3. **User config**: `propmap.toml` in the OS config directory (via
//!    `directories`), if present.
//! 4. **Compiled defaults**: `#[config(default = ...)]`.
//!
//! ## Available Settings
//!
//! | Key | Default | Description |
//! |-----|---------|-------------|
//! | `service_name` | `propmap` | Name attached to mapper errors |
//! | `enum_names` | `strict` | `strict` or `ordinal`, see [`EnumNamePolicy`] |
//! | `disabled_types` | none | Classification types not to register |

use std::path::{Path, PathBuf};

use confique::Config;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::enums::EnumNamePolicy;
use crate::error::{MapperError, Result};
use crate::mapper::{MapperContext, DEFAULT_SERVICE_NAME};
use crate::registry::MapperRegistry;

pub const CONFIG_FILE_NAME: &str = "propmap.toml";

/// Configuration for propmap, stored in `propmap.toml`.
#[derive(Config, Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct PropmapConfig {
    /// Service name reported in mapper errors.
    #[config(default = "propmap", env = "PROPMAP_SERVICE_NAME")]
    pub service_name: String,

    /// How to treat a stored enum whose symbolic name disagrees with its
    /// ordinal: "strict" rejects it, "ordinal" trusts the ordinal.
    #[config(default = "strict", env = "PROPMAP_ENUM_NAMES")]
    pub enum_names: EnumNamePolicy,

    /// Classification type names to leave out of the registry.
    pub disabled_types: Option<Vec<String>>,
}

impl Default for PropmapConfig {
    fn default() -> Self {
        Self {
            service_name: DEFAULT_SERVICE_NAME.to_string(),
            enum_names: EnumNamePolicy::Strict,
            disabled_types: None,
        }
    }
}

/// Path of the per-user config file, when the platform has a config dir.
pub fn user_config_path() -> Option<PathBuf> {
    ProjectDirs::from("", "", "propmap").map(|dirs| dirs.config_dir().join(CONFIG_FILE_NAME))
}

impl PropmapConfig {
    /// Load from the environment, `explicit` and the user config file.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        Self::load_from(explicit, user_config_path().as_deref())
    }

    pub(crate) fn load_from(explicit: Option<&Path>, user: Option<&Path>) -> Result<Self> {
        let mut builder = Self::builder().env();
        if let Some(path) = explicit {
            if !path.is_file() {
                return Err(MapperError::Io(std::io::Error::new(
                    std::io::ErrorKind::NotFound,
                    format!("config file not found: {}", path.display()),
                )));
            }
            builder = builder.file(path);
        }
        if let Some(path) = user {
            builder = builder.file(path);
        }
        Ok(builder.load()?)
    }

    pub fn context(&self) -> MapperContext {
        MapperContext::new(self.service_name.clone()).with_enum_names(self.enum_names)
    }

    /// The catalog registry, minus `disabled_types`.
    pub fn registry(&self) -> MapperRegistry {
        let mut registry = MapperRegistry::with_catalog(self.context());
        for type_name in self.disabled_types.iter().flatten() {
            registry.unregister(type_name);
        }
        registry
    }

    /// A commented TOML file listing every setting.
    pub fn template() -> String {
        confique::toml::template::<Self>(confique::toml::FormatOptions::default())
    }
}
