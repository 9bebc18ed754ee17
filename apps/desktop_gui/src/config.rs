//! Startup settings: delivery strategy, service credentials, content source.
//!
//! Defaults first, then `folio.toml` (or an explicit `--config` path), then
//! `FOLIO_*` environment variables. Placeholder credentials keep the app on
//! the simulated backend so a fresh checkout never posts anywhere.

use std::{
    collections::HashMap,
    fs,
    path::{Path, PathBuf},
};

use mailer::{MailerConfig, EMAILJS_API_BASE};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeliveryMode {
    Simulated,
    EmailJs,
}

impl DeliveryMode {
    pub fn parse(token: &str) -> Option<Self> {
        match token.trim().to_ascii_lowercase().as_str() {
            "simulated" => Some(Self::Simulated),
            "emailjs" => Some(Self::EmailJs),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Simulated => "simulated",
            Self::EmailJs => "emailjs",
        }
    }
}

#[derive(Debug, Clone)]
pub struct Settings {
    pub delivery: DeliveryMode,
    pub emailjs_service_id: String,
    pub emailjs_template_id: String,
    pub emailjs_public_key: String,
    pub emailjs_api_base: String,
    pub content_path: Option<PathBuf>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            delivery: DeliveryMode::Simulated,
            emailjs_service_id: "YOUR_SERVICE_ID".into(),
            emailjs_template_id: "YOUR_TEMPLATE_ID".into(),
            emailjs_public_key: "YOUR_PUBLIC_KEY".into(),
            emailjs_api_base: EMAILJS_API_BASE.into(),
            content_path: None,
        }
    }
}

impl Settings {
    pub fn mailer_config(&self) -> MailerConfig {
        MailerConfig {
            service_id: self.emailjs_service_id.clone(),
            template_id: self.emailjs_template_id.clone(),
            public_key: self.emailjs_public_key.clone(),
            api_base: self.emailjs_api_base.clone(),
        }
    }

    /// Whether real delivery is actually configured, as opposed to still
    /// carrying the placeholder credentials.
    pub fn delivery_ready(&self) -> bool {
        let configured = |value: &str| !value.is_empty() && !value.starts_with("YOUR_");
        configured(&self.emailjs_service_id)
            && configured(&self.emailjs_template_id)
            && configured(&self.emailjs_public_key)
    }
}

pub fn load_settings(config_path: Option<&Path>) -> Settings {
    let mut settings = Settings::default();

    let path = config_path.unwrap_or_else(|| Path::new("folio.toml"));
    if let Ok(raw) = fs::read_to_string(path) {
        if let Ok(file_cfg) = toml::from_str::<HashMap<String, String>>(&raw) {
            if let Some(v) = file_cfg.get("delivery") {
                if let Some(mode) = DeliveryMode::parse(v) {
                    settings.delivery = mode;
                }
            }
            if let Some(v) = file_cfg.get("emailjs_service_id") {
                settings.emailjs_service_id = v.clone();
            }
            if let Some(v) = file_cfg.get("emailjs_template_id") {
                settings.emailjs_template_id = v.clone();
            }
            if let Some(v) = file_cfg.get("emailjs_public_key") {
                settings.emailjs_public_key = v.clone();
            }
            if let Some(v) = file_cfg.get("emailjs_api_base") {
                settings.emailjs_api_base = v.clone();
            }
            if let Some(v) = file_cfg.get("content") {
                settings.content_path = Some(PathBuf::from(v));
            }
        }
    }

    if let Ok(v) = std::env::var("FOLIO_DELIVERY") {
        if let Some(mode) = DeliveryMode::parse(&v) {
            settings.delivery = mode;
        }
    }
    if let Ok(v) = std::env::var("FOLIO_EMAILJS_SERVICE_ID") {
        settings.emailjs_service_id = v;
    }
    if let Ok(v) = std::env::var("FOLIO_EMAILJS_TEMPLATE_ID") {
        settings.emailjs_template_id = v;
    }
    if let Ok(v) = std::env::var("FOLIO_EMAILJS_PUBLIC_KEY") {
        settings.emailjs_public_key = v;
    }
    if let Ok(v) = std::env::var("FOLIO_EMAILJS_API_BASE") {
        settings.emailjs_api_base = v;
    }
    if let Ok(v) = std::env::var("FOLIO_CONTENT") {
        settings.content_path = Some(PathBuf::from(v));
    }

    settings
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn defaults_keep_delivery_simulated_with_placeholder_credentials() {
        let settings = Settings::default();
        assert_eq!(settings.delivery, DeliveryMode::Simulated);
        assert!(!settings.delivery_ready());
    }

    #[test]
    fn parse_accepts_known_modes_only() {
        assert_eq!(DeliveryMode::parse("emailjs"), Some(DeliveryMode::EmailJs));
        assert_eq!(DeliveryMode::parse(" Simulated "), Some(DeliveryMode::Simulated));
        assert_eq!(DeliveryMode::parse("smtp"), None);
    }

    #[test]
    fn config_file_overrides_defaults() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("folio.toml");
        let mut file = fs::File::create(&path).expect("create");
        writeln!(
            file,
            "delivery = \"emailjs\"\nemailjs_service_id = \"service_abc\"\nemailjs_template_id = \"template_xyz\"\nemailjs_public_key = \"pk_live\"\n"
        )
        .expect("write");

        let settings = load_settings(Some(&path));
        assert_eq!(settings.delivery, DeliveryMode::EmailJs);
        assert_eq!(settings.emailjs_service_id, "service_abc");
        assert!(settings.delivery_ready());
    }

    #[test]
    fn missing_config_file_falls_back_to_defaults() {
        let settings = load_settings(Some(Path::new("/nonexistent/folio.toml")));
        assert_eq!(settings.delivery, DeliveryMode::Simulated);
        assert_eq!(settings.emailjs_api_base, EMAILJS_API_BASE);
    }
}
