//! Builder for creating and configuring Dashboard instances.

use std::{
    path::{Path, PathBuf},
    time::Duration,
};

use jiff::Zoned;
use tokio::task;

use super::{Dashboard, DashboardConfig};
use crate::{
    db::Database,
    error::{Result, WanderlustError},
    plan_store::PlanStore,
    selection::CityPolicy,
};

/// Default upper bound for a single data source call.
pub const DEFAULT_COLLABORATOR_TIMEOUT: Duration = Duration::from_secs(10);

/// Where saved plans live.
#[derive(Debug, Clone)]
enum Storage {
    /// Explicit path, or the XDG default when `None`
    File(Option<PathBuf>),
    Memory,
}

/// Builder for creating and configuring Dashboard instances.
#[derive(Debug, Clone)]
pub struct DashboardBuilder {
    storage: Storage,
    year: Option<String>,
    collaborator_timeout: Duration,
    city_policy: CityPolicy,
}

impl DashboardBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self {
            storage: Storage::File(None),
            year: None,
            collaborator_timeout: DEFAULT_COLLABORATOR_TIMEOUT,
            city_policy: CityPolicy::default(),
        }
    }

    /// Sets a custom database file path.
    ///
    /// If not specified, uses XDG Base Directory specification:
    /// `$XDG_DATA_HOME/wanderlust/wanderlust.db` or
    /// `~/.local/share/wanderlust/wanderlust.db`
    pub fn with_database_path<P: AsRef<Path>>(mut self, path: Option<P>) -> Self {
        if let Some(path) = path {
            self.storage = Storage::File(Some(path.as_ref().to_path_buf()));
        }
        self
    }

    /// Keep saved plans in memory only; nothing survives the session.
    pub fn in_memory(mut self) -> Self {
        self.storage = Storage::Memory;
        self
    }

    /// Year selected at startup. Defaults to the current calendar year.
    pub fn with_year(mut self, year: Option<impl Into<String>>) -> Self {
        if let Some(year) = year {
            self.year = Some(year.into());
        }
        self
    }

    pub fn with_collaborator_timeout(mut self, timeout: Duration) -> Self {
        self.collaborator_timeout = timeout;
        self
    }

    pub fn with_city_policy(mut self, policy: CityPolicy) -> Self {
        self.city_policy = policy;
        self
    }

    /// Builds the configured dashboard instance.
    ///
    /// # Errors
    ///
    /// Returns `WanderlustError::Configuration` for a zero timeout
    /// Returns `WanderlustError::FileSystem` if the database path is invalid
    /// Returns `WanderlustError::Database` if database initialization fails
    pub async fn build(self) -> Result<Dashboard> {
        if self.collaborator_timeout.is_zero() {
            return Err(WanderlustError::Configuration {
                message: "Collaborator timeout must be greater than zero".to_string(),
            });
        }

        let database_path = match self.storage {
            Storage::File(Some(path)) => Some(path),
            Storage::File(None) => Some(Self::default_database_path()?),
            Storage::Memory => None,
        };

        if let Some(parent) = database_path.as_deref().and_then(Path::parent) {
            std::fs::create_dir_all(parent).map_err(|e| WanderlustError::FileSystem {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }

        let path = database_path.clone();
        let plans = task::spawn_blocking(move || {
            let db = match path {
                Some(path) => Database::new(&path)?,
                None => Database::open_in_memory()?,
            };
            PlanStore::open(db)
        })
        .await
        .map_err(|e| WanderlustError::Configuration {
            message: format!("Task join error: {e}"),
        })??;

        let default_year = self
            .year
            .unwrap_or_else(|| Zoned::now().year().to_string());
        log::debug!(
            "Dashboard ready (year {default_year}, {} saved plans)",
            plans.len()
        );

        let config = DashboardConfig {
            collaborator_timeout: self.collaborator_timeout,
            city_policy: self.city_policy,
            default_year,
            database_path,
        };
        Ok(Dashboard::new(config, plans))
    }

    /// Returns the default database path following XDG Base Directory
    /// specification.
    fn default_database_path() -> Result<PathBuf> {
        xdg::BaseDirectories::with_prefix("wanderlust")
            .place_data_file("wanderlust.db")
            .map_err(|e| WanderlustError::XdgDirectory(e.to_string()))
    }
}

impl Default for DashboardBuilder {
    fn default() -> Self {
        Self::new()
    }
}
