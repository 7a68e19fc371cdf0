use anyhow::Context;
use std::env;
use std::net::SocketAddr;

/// Runtime settings, read once at startup.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub addr: SocketAddr,
    pub max_workers: usize,
    pub whatsapp_phone: String,
    pub whatsapp_message: String,
    /// Simulated "typing" time before a canned chat reply appears.
    pub reply_delay_ms: u64,
    /// Extra wait before the WhatsApp hand-off bubble.
    pub followup_delay_ms: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            addr: SocketAddr::from(([127, 0, 0, 1], 3000)),
            max_workers: 8,
            whatsapp_phone: "56912345678".to_string(),
            whatsapp_message: "Hola CleanerClub, necesito ayuda".to_string(),
            reply_delay_ms: 1500,
            followup_delay_ms: 500,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds a config from any key lookup; unset keys keep their defaults.
    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let addr = match lookup("CLEANERCLUB_ADDR") {
            Some(v) => v
                .parse()
                .with_context(|| format!("invalid CLEANERCLUB_ADDR: {v}"))?,
            None => defaults.addr,
        };
        let max_workers = match lookup("CLEANERCLUB_WORKERS") {
            Some(v) => v
                .parse()
                .with_context(|| format!("invalid CLEANERCLUB_WORKERS: {v}"))?,
            None => defaults.max_workers,
        };
        let reply_delay_ms = match lookup("CLEANERCLUB_REPLY_DELAY_MS") {
            Some(v) => v
                .parse()
                .with_context(|| format!("invalid CLEANERCLUB_REPLY_DELAY_MS: {v}"))?,
            None => defaults.reply_delay_ms,
        };
        let followup_delay_ms = match lookup("CLEANERCLUB_FOLLOWUP_DELAY_MS") {
            Some(v) => v
                .parse()
                .with_context(|| format!("invalid CLEANERCLUB_FOLLOWUP_DELAY_MS: {v}"))?,
            None => defaults.followup_delay_ms,
        };

        anyhow::ensure!(max_workers > 0, "CLEANERCLUB_WORKERS must be at least 1");

        Ok(Self {
            addr,
            max_workers,
            whatsapp_phone: lookup("CLEANERCLUB_WHATSAPP_PHONE").unwrap_or(defaults.whatsapp_phone),
            whatsapp_message: lookup("CLEANERCLUB_WHATSAPP_MESSAGE")
                .unwrap_or(defaults.whatsapp_message),
            reply_delay_ms,
            followup_delay_ms,
        })
    }
}
