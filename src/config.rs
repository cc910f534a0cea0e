//! Configuration du serveur (flags + variables d'environnement).

use crate::rotation::{ValidationError, EPOCH};
use anyhow::Context;
use chrono::NaiveDate;
use clap::Parser;
use std::net::SocketAddr;

/// Ancre par défaut appliquée quand une requête omet `start` / `start_item`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RotationDefaults {
    pub start_date: NaiveDate,
    pub start_item: u32,
}

impl Default for RotationDefaults {
    fn default() -> Self {
        Self {
            start_date: EPOCH,
            start_item: 1,
        }
    }
}

/// Serveur web de rotation quotidienne
#[derive(Parser, Debug, Clone)]
#[command(author, version, about)]
pub struct ServerConfig {
    /// Adresse d'écoute
    #[arg(long, env = "HOST", default_value = "0.0.0.0")]
    pub host: String,

    /// Port d'écoute
    #[arg(long, env = "PORT", default_value_t = 8080)]
    pub port: u16,

    /// Jour 0 par défaut (YYYY-MM-DD)
    #[arg(long, env = "ROTATION_START_DATE", default_value = "1970-01-01")]
    pub start_date: String,

    /// Élément actif au jour 0 par défaut
    #[arg(long, env = "ROTATION_START_ITEM", default_value_t = 1)]
    pub start_item: u32,

    /// Filtre de logs (syntaxe `EnvFilter`)
    #[arg(long, env = "RUST_LOG", default_value = "info")]
    pub log_filter: String,
}

impl ServerConfig {
    pub fn socket_addr(&self) -> anyhow::Result<SocketAddr> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .with_context(|| format!("invalid bind address {}:{}", self.host, self.port))
    }

    pub fn defaults(&self) -> Result<RotationDefaults, ValidationError> {
        let start_date = NaiveDate::parse_from_str(self.start_date.trim(), "%Y-%m-%d")
            .map_err(|_| ValidationError::InvalidStartDate(self.start_date.clone()))?;
        if self.start_item < 1 {
            return Err(ValidationError::InvalidStartItem(self.start_item.to_string()));
        }
        Ok(RotationDefaults {
            start_date,
            start_item: self.start_item,
        })
    }
}
