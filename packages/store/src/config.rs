//! # Admin configuration — `admin.toml`
//!
//! Settings for the admin panel, read from a TOML file whose keys all have
//! defaults, so a missing or empty file is the default configuration.
//!
//! ```toml
//! [api]
//! base_url = "https://jsonplaceholder.typicode.com"
//!
//! [pagination]
//! default_page_size = 5
//! page_size_options = [5, 10]
//! ```
//!
//! | Struct | Purpose |
//! |--------|---------|
//! | [`AdminConfig`] | Top-level config with TOML (de)serialisation and builder helpers. |
//! | [`ApiConfig`] | Base URL of the remote service. |
//! | [`PaginationConfig`] | Initial page size and the sizes offered by the page-size selector. |

use serde::{Deserialize, Serialize};

use crate::view::DEFAULT_PAGE_SIZE;

/// Top-level configuration stored in `admin.toml`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct AdminConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub pagination: PaginationConfig,
}

/// Remote service settings.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL without trailing slash; collections live at `{base_url}/users`
    /// and `{base_url}/posts`.
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

fn default_base_url() -> String {
    "https://jsonplaceholder.typicode.com".to_string()
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

/// Pagination settings.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PaginationConfig {
    #[serde(default = "default_page_size")]
    pub default_page_size: usize,
    #[serde(default = "default_page_size_options")]
    pub page_size_options: Vec<usize>,
}

fn default_page_size() -> usize {
    DEFAULT_PAGE_SIZE
}

fn default_page_size_options() -> Vec<usize> {
    vec![5, 10]
}

impl Default for PaginationConfig {
    fn default() -> Self {
        Self {
            default_page_size: default_page_size(),
            page_size_options: default_page_size_options(),
        }
    }
}

impl PaginationConfig {
    /// Selector options, always including the default size, sorted and without
    /// zeros or duplicates.
    pub fn options(&self) -> Vec<usize> {
        let mut options: Vec<usize> = self
            .page_size_options
            .iter()
            .copied()
            .chain(std::iter::once(self.default_page_size))
            .filter(|size| *size > 0)
            .collect();
        options.sort_unstable();
        options.dedup();
        options
    }
}

impl AdminConfig {
    /// Create a config pointing at the given service.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            api: ApiConfig {
                base_url: base_url.into().trim_end_matches('/').to_string(),
            },
            pagination: PaginationConfig::default(),
        }
    }

    /// Builder method to set the initial page size.
    pub fn with_page_size(mut self, size: usize) -> Self {
        self.pagination.default_page_size = size.max(1);
        self
    }

    /// Parse from TOML string.
    pub fn from_toml(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }

    /// Serialize to TOML string.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}
