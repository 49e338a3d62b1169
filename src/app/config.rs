use anyhow::{Context as _, Result, bail};
use lotto_combora::ticket::{MAX_PANELS, MIN_PANELS};

const ENV_PANELS: &str = "LOTTO_PANELS";
const ENV_MANUAL: &str = "LOTTO_MANUAL";
const ENV_SEED: &str = "LOTTO_SEED";
const ENV_JSON: &str = "LOTTO_JSON";

/// Settings for one draw
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LottoConfig {
    /// Panels on the ticket
    pub panels: usize,
    /// Ask for numbers on stdin instead of quick picking every panel
    pub manual: bool,
    /// Fixed seed for a reproducible draw
    pub seed: Option<u64>,
    /// Print the report as JSON
    pub json: bool,
}

impl Default for LottoConfig {
    fn default() -> Self {
        Self {
            panels: MIN_PANELS,
            manual: false,
            seed: None,
            json: false,
        }
    }
}

/// Values given on the command line, each one replaces its `LOTTO_*` variable
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigOverrides {
    pub panels: Option<usize>,
    pub manual: Option<bool>,
    pub seed: Option<u64>,
    pub json: Option<bool>,
}

impl LottoConfig {
    /// Read `LOTTO_*` variables from the process environment.
    ///
    /// A `.env` file, if present, is loaded first.
    pub fn from_env(overrides: &ConfigOverrides) -> Result<Self> {
        if let Ok(path) = dotenvy::dotenv() {
            log::debug!("Loaded environment from {}", path.display());
        }
        Self::from_lookup(|key| std::env::var(key).ok(), overrides)
    }

    /// Build a config from any key lookup.
    ///
    /// An overridden key is never looked up, so a malformed variable cannot
    /// fail a setting the command line already gave. Unset keys keep their
    /// default.
    pub fn from_lookup(
        lookup: impl Fn(&str) -> Option<String>,
        overrides: &ConfigOverrides,
    ) -> Result<Self> {
        let defaults = Self::default();

        let panels = match overrides.panels {
            Some(panels) => panels,
            None => lookup(ENV_PANELS)
                .map(|value| parse_number(ENV_PANELS, &value))
                .transpose()?
                .unwrap_or(defaults.panels),
        };
        let manual = match overrides.manual {
            Some(manual) => manual,
            None => lookup(ENV_MANUAL)
                .map(|value| parse_flag(ENV_MANUAL, &value))
                .transpose()?
                .unwrap_or(defaults.manual),
        };
        let seed = match overrides.seed {
            Some(seed) => Some(seed),
            None => lookup(ENV_SEED)
                .map(|value| parse_number(ENV_SEED, &value))
                .transpose()?,
        };
        let json = match overrides.json {
            Some(json) => json,
            None => lookup(ENV_JSON)
                .map(|value| parse_flag(ENV_JSON, &value))
                .transpose()?
                .unwrap_or(defaults.json),
        };

        Ok(Self {
            panels,
            manual,
            seed,
            json,
        })
    }

    pub fn check(&self) -> Result<()> {
        if !(MIN_PANELS..=MAX_PANELS).contains(&self.panels) {
            bail!(
                "A ticket holds {MIN_PANELS}-{MAX_PANELS} panels, got {}",
                self.panels
            );
        }
        Ok(())
    }
}

fn parse_number<T: std::str::FromStr>(key: &str, value: &str) -> Result<T>
where
    T::Err: std::error::Error + Send + Sync + 'static,
{
    value
        .trim()
        .parse()
        .with_context(|| format!("{key} is not a number: {value}"))
}

fn parse_flag(key: &str, value: &str) -> Result<bool> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" | "" => Ok(false),
        other => bail!("{key} is not a boolean: {other}"),
    }
}
