use serde::{Deserialize, Serialize};

use minibank_store::StoreKind;
use minibank_types::{LedgerError, Result};

/// Configuration for a ledger
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LedgerConfig {
    /// Display name of the ledger
    pub name: String,

    /// Backing store, fixed for the ledger's lifetime
    pub store: StoreKind,
}

impl LedgerConfig {
    pub fn new(name: impl Into<String>, store: StoreKind) -> Self {
        LedgerConfig {
            name: name.into(),
            store,
        }
    }

    /// Parse a configuration from JSON; missing fields take their defaults
    pub fn from_json(json: &str) -> Result<Self> {
        let config: LedgerConfig =
            serde_json::from_str(json).map_err(|e| LedgerError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(LedgerError::Config("ledger name must not be empty".to_string()));
        }
        if let StoreKind::Array { capacity: 0 } = self.store {
            return Err(LedgerError::Config(
                "array store capacity must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for LedgerConfig {
    fn default() -> Self {
        Self {
            name: "ledger".to_string(),
            store: StoreKind::default(),
        }
    }
}
