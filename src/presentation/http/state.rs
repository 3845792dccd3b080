// src/presentation/http/state.rs
use crate::application::services::ApplicationServices;
use crate::config::AppConfig;
use std::{path::PathBuf, sync::Arc, time::Duration};

#[derive(Clone)]
pub struct HttpState {
    pub services: Arc<ApplicationServices>,
}

/// Router-level settings taken from `AppConfig`.
#[derive(Clone, Debug)]
pub struct HttpSettings {
    pub session_ttl: Duration,
    pub secure_cookies: bool,
    pub static_dir: PathBuf,
    pub allowed_origins: Vec<String>,
}

impl HttpSettings {
    pub fn from_config(config: &AppConfig) -> Self {
        Self {
            session_ttl: config.session_ttl(),
            secure_cookies: config.secure_cookies(),
            static_dir: config.static_dir().clone(),
            allowed_origins: config.allowed_origins().to_vec(),
        }
    }
}

impl Default for HttpSettings {
    fn default() -> Self {
        Self {
            session_ttl: Duration::from_secs(3600),
            secure_cookies: false,
            static_dir: PathBuf::from("static"),
            allowed_origins: vec!["http://localhost:3000".into()],
        }
    }
}
