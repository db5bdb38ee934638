//! Optional catalog overrides from the platform config directory.
//!
//! A deployment can drop a `shop.toml` next to the app's other config to
//! change prices, flavors, or batch sizes. A missing file is the normal
//! case; a malformed one is logged and ignored so the app always starts.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::Deserialize;
use tracing::{debug, warn};

use crate::catalog::{Catalog, QuantityOption};

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct ShopConfig {
    unit_price_cents: Option<u32>,
    same_day_surcharge_cents: Option<u32>,
    pickup_days: Option<usize>,
    flavors: Option<Vec<String>>,
    quantities: Option<Vec<QuantityEntry>>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct QuantityEntry {
    label: String,
    count: u32,
}

/// The catalog the app should run with: built-in defaults, overridden by
/// `shop.toml` where present.
pub fn load_catalog() -> Catalog {
    let defaults = Catalog::default();
    let Some(path) = config_path() else {
        debug!("no config directory available, using built-in catalog");
        return defaults;
    };

    if !path.exists() {
        debug!("no shop config at {}, using built-in catalog", path.display());
        return defaults;
    }

    match read_config(&path) {
        Ok(config) => apply(config, defaults),
        Err(error) => {
            warn!(
                "ignoring shop config at {}: {:#}",
                path.display(),
                error
            );
            Catalog::default()
        }
    }
}

fn config_path() -> Option<PathBuf> {
    ProjectDirs::from("com", "cupcakeshop", "cupcake-shop")
        .map(|dirs| dirs.config_dir().join("shop.toml"))
}

fn read_config(path: &Path) -> Result<ShopConfig> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    toml::from_str(&raw).with_context(|| format!("failed to parse {}", path.display()))
}

fn apply(config: ShopConfig, mut catalog: Catalog) -> Catalog {
    if let Some(unit_price) = config.unit_price_cents {
        catalog.unit_price_cents = unit_price;
    }
    if let Some(surcharge) = config.same_day_surcharge_cents {
        catalog.same_day_surcharge_cents = surcharge;
    }
    if let Some(days) = config.pickup_days {
        if days > 0 {
            catalog.pickup_days = days;
        } else {
            warn!("shop config requests zero pickup days, keeping default");
        }
    }
    if let Some(flavors) = config.flavors {
        if flavors.is_empty() {
            warn!("shop config lists no flavors, keeping defaults");
        } else {
            catalog.flavors = flavors;
        }
    }
    if let Some(quantities) = config.quantities {
        if quantities.is_empty() {
            warn!("shop config lists no quantities, keeping defaults");
        } else {
            catalog.quantity_options = quantities
                .into_iter()
                .map(|entry| QuantityOption::new(entry.label, entry.count))
                .collect();
        }
    }
    catalog
}
