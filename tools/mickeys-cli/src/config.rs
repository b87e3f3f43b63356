//! CLI configuration.

use std::collections::BTreeMap;

use anyhow::{bail, Context, Result};
use mickeys_commerce::pricing::{PricingEngine, PromoRegistry, TaxRate};
use mickeys_commerce::Currency;
use mickeys_data::{DEFAULT_GALLERY_URL, DEFAULT_SCRIPT_URL};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// CLI configuration file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ShopConfig {
    /// Shop identity.
    #[serde(default)]
    pub shop: ShopSection,

    /// Tax and promo codes.
    #[serde(default)]
    pub pricing: PricingConfig,

    /// Outbound endpoints.
    #[serde(default)]
    pub endpoints: EndpointsConfig,

    /// Cart session storage.
    #[serde(default)]
    pub session: SessionConfig,
}

impl ShopConfig {
    /// Load config from a file.
    pub fn load(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path))?;

        if path.ends_with(".json") {
            serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse JSON config: {}", path))
        } else {
            toml::from_str(&content)
                .with_context(|| format!("Failed to parse TOML config: {}", path))
        }
    }

    /// Collect problems with the config. Errors block use; warnings don't.
    pub fn check(&self) -> ConfigReport {
        let mut report = ConfigReport::default();

        if self.shop.name.trim().is_empty() {
            report.errors.push("shop.name is required".to_string());
        }

        match Currency::from_code(&self.shop.currency) {
            None => report
                .errors
                .push(format!("shop.currency '{}' is not supported", self.shop.currency)),
            Some(Currency::USD) => {}
            Some(other) => report.warnings.push(format!(
                "shop.currency is {}; menu prices are listed in USD amounts",
                other
            )),
        }

        if let Err(e) = TaxRate::new(self.pricing.tax_rate) {
            report.errors.push(format!("pricing.tax_rate: {}", e));
        }

        if let Err(e) = self.promo_registry().validate() {
            report.errors.push(format!("pricing.promo_codes: {}", e));
        }

        for (name, url) in [
            ("endpoints.script_url", &self.endpoints.script_url),
            ("endpoints.gallery_url", &self.endpoints.gallery_url),
        ] {
            if !url.starts_with("https://") && !url.starts_with("http://") {
                report.errors.push(format!("{} must be an http(s) URL", name));
            } else if url.starts_with("http://") {
                report.warnings.push(format!("{} is not using https", name));
            }
        }

        report
    }

    /// Fail on the first config error.
    pub fn validate(&self) -> Result<()> {
        let report = self.check();
        if let Some(first) = report.errors.first() {
            bail!("Invalid configuration: {}", first);
        }
        Ok(())
    }

    /// Promo codes as a registry, keyed exactly as written.
    pub fn promo_registry(&self) -> PromoRegistry {
        self.pricing
            .promo_codes
            .iter()
            .fold(PromoRegistry::new(), |registry, (code, percent)| {
                registry.with_code(code.clone(), *percent)
            })
    }

    /// Build the pricing engine this config describes.
    pub fn to_engine(&self) -> Result<PricingEngine> {
        self.validate()?;
        let currency = Currency::from_code(&self.shop.currency)
            .with_context(|| format!("Unsupported currency: {}", self.shop.currency))?;
        let tax_rate = TaxRate::new(self.pricing.tax_rate)?;
        let engine = PricingEngine::new(currency, tax_rate, self.promo_registry());
        engine.validate()?;
        Ok(engine)
    }
}

/// Outcome of [`ShopConfig::check`].
#[derive(Debug, Default)]
pub struct ConfigReport {
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
}

/// Shop identity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShopSection {
    /// Display name.
    #[serde(default = "default_shop_name")]
    pub name: String,

    /// ISO 4217 code for cart amounts.
    #[serde(default = "default_currency")]
    pub currency: String,
}

fn default_shop_name() -> String {
    "Mickey's".to_string()
}

fn default_currency() -> String {
    "USD".to_string()
}

impl Default for ShopSection {
    fn default() -> Self {
        Self {
            name: default_shop_name(),
            currency: default_currency(),
        }
    }
}

/// Pricing configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PricingConfig {
    /// Flat tax rate as a fraction, written as a string ("0.10").
    #[serde(default = "default_tax_rate")]
    pub tax_rate: Decimal,

    /// Promo code to percent off.
    #[serde(default = "default_promo_codes")]
    pub promo_codes: BTreeMap<String, u8>,
}

fn default_tax_rate() -> Decimal {
    TaxRate::default().rate()
}

fn default_promo_codes() -> BTreeMap<String, u8> {
    PromoRegistry::standard()
        .iter()
        .map(|(code, percent)| (code.to_string(), percent))
        .collect()
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            tax_rate: default_tax_rate(),
            promo_codes: default_promo_codes(),
        }
    }
}

/// Endpoint configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EndpointsConfig {
    /// Form-processing script.
    #[serde(default = "default_script_url")]
    pub script_url: String,

    /// Gallery backend.
    #[serde(default = "default_gallery_url")]
    pub gallery_url: String,
}

fn default_script_url() -> String {
    DEFAULT_SCRIPT_URL.to_string()
}

fn default_gallery_url() -> String {
    DEFAULT_GALLERY_URL.to_string()
}

impl Default for EndpointsConfig {
    fn default() -> Self {
        Self {
            script_url: default_script_url(),
            gallery_url: default_gallery_url(),
        }
    }
}

/// Session configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Fixed session id. Generated and remembered when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Directory for session files, relative to the config's directory.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub store_dir: Option<String>,
}

/// Generate a default mickeys.toml config file.
pub fn generate_default_config(name: &str) -> String {
    format!(
        r#"# Mickey's CLI configuration

[shop]
name = "{name}"
currency = "USD"

[pricing]
# Flat tax applied to the subtotal, as a fraction.
tax_rate = "0.10"

[pricing.promo_codes]
SAVE10 = 10
WELCOME20 = 20

[endpoints]
script_url = "{script_url}"
gallery_url = "{gallery_url}"

[session]
# id = "sess_..."
# store_dir = ".mickeys/sessions"
"#,
        name = name,
        script_url = DEFAULT_SCRIPT_URL,
        gallery_url = DEFAULT_GALLERY_URL,
    )
}
