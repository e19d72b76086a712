mod home;
pub use home::Home;

mod users;
pub use users::Users;

mod posts;
pub use posts::Posts;

use api::RestClient;
use store::AdminConfig;

const ADMIN_TOML: &str = include_str!("../../admin.toml");

/// Configuration bundled from `admin.toml`. `ADMIN_API_URL` set at build time
/// overrides the service base URL.
pub(crate) fn admin_config() -> AdminConfig {
    load_config(ADMIN_TOML, option_env!("ADMIN_API_URL"))
}

fn load_config(toml: &str, api_url: Option<&str>) -> AdminConfig {
    let mut config = AdminConfig::from_toml(toml).unwrap_or_else(|e| {
        tracing::error!("Invalid admin.toml, using defaults: {}", e);
        AdminConfig::default()
    });
    if let Some(url) = api_url.filter(|url| !url.trim().is_empty()) {
        config.api = AdminConfig::new(url).api;
    }
    config
}

pub(crate) fn make_client(config: &AdminConfig) -> RestClient {
    RestClient::new(&config.api)
}
