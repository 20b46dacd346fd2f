use std::env;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("Invalid value for {0}: {1:?}")]
    InvalidValue(&'static str, String),
}

pub struct FoodieSettings {
    pub log_level: String,
    pub location_granted: bool,
    pub refresh_on_start: bool,
    pub batch_size: usize,
    pub fixture: Option<PathBuf>,
    pub locale_dir: String,
    pub idle_timeout: Duration,
}

impl Default for FoodieSettings {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            location_granted: true,
            refresh_on_start: false,
            batch_size: 10,
            fixture: None,
            locale_dir: "/usr/share/locale".to_string(),
            idle_timeout: Duration::from_millis(500),
        }
    }
}

impl FoodieSettings {
    // Values from a .env file, if any, do not override the actual environment
    pub fn from_env() -> Result<Self, SettingsError> {
        dotenvy::dotenv().ok();
        Self::from_vars(|key| env::var(key).ok())
    }

    fn from_vars<F>(var: F) -> Result<Self, SettingsError>
    where
        F: Fn(&'static str) -> Option<String>,
    {
        let defaults = Self::default();

        let batch_size = parse_var(&var, "FOODIE_BATCH_SIZE")?.unwrap_or(defaults.batch_size);
        if batch_size == 0 {
            return Err(SettingsError::InvalidValue(
                "FOODIE_BATCH_SIZE",
                batch_size.to_string(),
            ));
        }

        Ok(Self {
            log_level: var("FOODIE_LOG_LEVEL").unwrap_or(defaults.log_level),
            location_granted: parse_flag(&var, "FOODIE_LOCATION_GRANTED")?
                .unwrap_or(defaults.location_granted),
            refresh_on_start: parse_flag(&var, "FOODIE_REFRESH_ON_START")?
                .unwrap_or(defaults.refresh_on_start),
            batch_size,
            fixture: var("FOODIE_FIXTURE").map(PathBuf::from),
            locale_dir: var("FOODIE_LOCALE_DIR").unwrap_or(defaults.locale_dir),
            idle_timeout: parse_var(&var, "FOODIE_IDLE_TIMEOUT_MS")?
                .map(Duration::from_millis)
                .unwrap_or(defaults.idle_timeout),
        })
    }
}

fn parse_var<T, F>(var: &F, key: &'static str) -> Result<Option<T>, SettingsError>
where
    T: FromStr,
    F: Fn(&'static str) -> Option<String>,
{
    var(key)
        .map(|value| {
            value
                .trim()
                .parse::<T>()
                .map_err(|_| SettingsError::InvalidValue(key, value))
        })
        .transpose()
}

fn parse_flag<F>(var: &F, key: &'static str) -> Result<Option<bool>, SettingsError>
where
    F: Fn(&'static str) -> Option<String>,
{
    var(key)
        .map(|value| match value.trim().to_lowercase().as_str() {
            "1" | "true" | "yes" => Ok(true),
            "0" | "false" | "no" => Ok(false),
            _ => Err(SettingsError::InvalidValue(key, value)),
        })
        .transpose()
}

#[cfg(test)]
mod tests {

    use super::*;
    use std::collections::HashMap;

    fn settings_from(vars: &[(&'static str, &str)]) -> Result<FoodieSettings, SettingsError> {
        let vars: HashMap<&'static str, String> =
            vars.iter().map(|(k, v)| (*k, v.to_string())).collect();
        FoodieSettings::from_vars(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let settings = settings_from(&[]).unwrap();

        assert_eq!(settings.log_level, "info");
        assert!(settings.location_granted);
        assert!(!settings.refresh_on_start);
        assert_eq!(settings.batch_size, 10);
        assert!(settings.fixture.is_none());
        assert_eq!(settings.idle_timeout, Duration::from_millis(500));
    }

    #[test]
    fn test_overrides() {
        let settings = settings_from(&[
            ("FOODIE_LOCATION_GRANTED", "no"),
            ("FOODIE_REFRESH_ON_START", "1"),
            ("FOODIE_BATCH_SIZE", " 3 "),
            ("FOODIE_FIXTURE", "/tmp/restaurants.json"),
            ("FOODIE_IDLE_TIMEOUT_MS", "50"),
        ])
        .unwrap();

        assert!(!settings.location_granted);
        assert!(settings.refresh_on_start);
        assert_eq!(settings.batch_size, 3);
        assert_eq!(settings.fixture, Some(PathBuf::from("/tmp/restaurants.json")));
        assert_eq!(settings.idle_timeout, Duration::from_millis(50));
    }

    #[test]
    fn test_invalid_values() {
        assert!(matches!(
            settings_from(&[("FOODIE_BATCH_SIZE", "0")]),
            Err(SettingsError::InvalidValue("FOODIE_BATCH_SIZE", _))
        ));
        assert!(matches!(
            settings_from(&[("FOODIE_BATCH_SIZE", "many")]),
            Err(SettingsError::InvalidValue("FOODIE_BATCH_SIZE", _))
        ));
        assert!(matches!(
            settings_from(&[("FOODIE_LOCATION_GRANTED", "maybe")]),
            Err(SettingsError::InvalidValue("FOODIE_LOCATION_GRANTED", _))
        ));
    }
}
