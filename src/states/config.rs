//! Widget Configuration
//!
//! Persisted defaults for the components: locale, week start, pagination
//! shape and popover placement. Stored as TOML in the config directory.

use crate::components::composite::{DatePicker, Pagination};
use crate::constants::{
    CONFIG_FILE_NAME, DEFAULT_BOUNDARY_COUNT, DEFAULT_PAGE_SIZE, DEFAULT_SIBLING_COUNT,
};
use crate::domain::{PlacementOptions, SelectionMode, YearMonth};
use crate::error::{Error, Result};
use crate::helpers::get_or_create_config_dir;
use crate::i18n::Locale;
use chrono::Weekday;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{error, info};

fn get_config_path() -> Result<PathBuf> {
    let config_dir = get_or_create_config_dir()?;
    Ok(config_dir.join(CONFIG_FILE_NAME))
}

/// Pagination defaults
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PaginationConfig {
    pub sibling_count: usize,
    pub boundary_count: usize,
    pub page_size: usize,
}

impl Default for PaginationConfig {
    fn default() -> Self {
        Self {
            sibling_count: DEFAULT_SIBLING_COUNT,
            boundary_count: DEFAULT_BOUNDARY_COUNT,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

/// Persisted widget configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WidgetConfig {
    locale: Option<String>,
    first_day_of_week: Option<Weekday>,
    pagination: PaginationConfig,
    popover: PlacementOptions,
}

impl WidgetConfig {
    /// Load from the config directory; a missing or empty file gives defaults
    pub fn try_load() -> Result<Self> {
        let path = get_config_path()?;
        let mut config = Self::load_from(&path)?;

        // Detect system locale if not set
        if config.locale.as_ref().is_none_or(|l| l.is_empty()) {
            let current = locale_config::Locale::current().to_string();
            if let Some(lang) = current.split(['-', ',']).next().filter(|l| !l.is_empty()) {
                config.locale = Some(lang.to_string());
            }
        }

        Ok(config)
    }

    /// Load from an explicit path
    pub fn load_from(path: &Path) -> Result<Self> {
        info!(path = ?path, "Loading config file");
        if !path.exists() {
            return Ok(Self::default());
        }

        let value = std::fs::read_to_string(path)?;
        Self::from_toml_str(&value).map_err(|e| {
            error!(error = %e, path = ?path, "Failed to parse config file");
            e
        })
    }

    /// Parse and validate TOML text
    pub fn from_toml_str(value: &str) -> Result<Self> {
        if value.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: Self = toml::from_str(value)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values the widgets cannot work with
    pub fn validate(&self) -> Result<()> {
        if self.pagination.page_size == 0 {
            return Err(Error::Config {
                field: "pagination.page_size",
                message: "must be at least 1".to_string(),
            });
        }
        let inset = self.popover.viewport_inset;
        if !inset.is_finite() || inset < 0.0 {
            return Err(Error::Config {
                field: "popover.viewport_inset",
                message: format!("must be a non-negative number, got {inset}"),
            });
        }
        if !self.popover.offset.is_finite() {
            return Err(Error::Config {
                field: "popover.offset",
                message: format!("must be a number, got {}", self.popover.offset),
            });
        }
        Ok(())
    }

    /// Save to the config directory
    pub fn save(&self) -> Result<()> {
        self.save_to(&get_config_path()?)
    }

    /// Save to an explicit path
    pub fn save_to(&self, path: &Path) -> Result<()> {
        self.validate()?;
        let value = toml::to_string(self)?;
        std::fs::write(path, value)?;
        info!(path = ?path, "Config saved");
        Ok(())
    }

    // ==================== Getters ====================

    pub fn locale(&self) -> Locale {
        Locale::from_tag(self.locale.as_deref().unwrap_or("en"))
    }

    pub fn first_day_of_week(&self) -> Weekday {
        self.first_day_of_week.unwrap_or(Weekday::Sun)
    }

    pub fn pagination(&self) -> PaginationConfig {
        self.pagination
    }

    pub fn placement_options(&self) -> PlacementOptions {
        self.popover
    }

    // ==================== Setters ====================

    pub fn set_locale(&mut self, locale: Locale) {
        self.locale = Some(locale.code().to_string());
    }

    pub fn set_first_day_of_week(&mut self, weekday: Weekday) {
        self.first_day_of_week = Some(weekday);
    }

    pub fn set_pagination(&mut self, pagination: PaginationConfig) {
        self.pagination = pagination;
    }

    // ==================== Factories ====================

    /// A pagination over `total_items` using the configured shape
    pub fn new_pagination(&self, total_items: usize) -> Pagination {
        Pagination::for_items(total_items, self.pagination.page_size)
            .sibling_count(self.pagination.sibling_count)
            .boundary_count(self.pagination.boundary_count)
    }

    /// A date picker using the configured locale, week start and placement
    pub fn new_date_picker(&self, mode: SelectionMode, view: YearMonth) -> DatePicker {
        DatePicker::new(mode, view)
            .locale(self.locale())
            .first_day_of_week(self.first_day_of_week())
            .placement_options(self.popover)
    }
}
