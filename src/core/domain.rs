use std::env;
use serde::{Deserialize, Serialize};

pub const BRANCH_ENV: &str = "LIBRARY_BRANCH_ID";
pub const DEV_MODE_ENV: &str = "LIBRARY_DEV_MODE";

// Configuration abstracts config options for the library catalog
#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct Configuration {
    pub branch_id: String,
    // dev mode logs human readable lines instead of json
    pub dev_mode: bool,
}

impl Configuration {
    pub fn new(branch_id: &str) -> Self {
        Configuration {
            branch_id: branch_id.to_string(),
            dev_mode: true,
        }
    }

    pub fn from_env() -> Self {
        let branch_id = env::var(BRANCH_ENV)
            .ok()
            .filter(|b| !b.trim().is_empty())
            .unwrap_or_else(|| "main".to_string());
        let dev_mode = env::var(DEV_MODE_ENV)
            .map(|v| parse_flag(v.as_str()))
            .unwrap_or(true);
        Configuration {
            branch_id: branch_id.trim().to_string(),
            dev_mode,
        }
    }
}

fn parse_flag(value: &str) -> bool {
    !matches!(value.trim().to_lowercase().as_str(), "0" | "false" | "no" | "off")
}

#[cfg(test)]
mod tests {
    use crate::core::domain::{parse_flag, Configuration};

    #[test]
    fn test_should_build_config() {
        let config = Configuration::new("test");
        assert_eq!("test", config.branch_id.as_str());
        assert!(config.dev_mode);
    }

    #[test]
    fn test_should_parse_flags() {
        assert!(parse_flag("1"));
        assert!(parse_flag("true"));
        assert!(!parse_flag("false"));
        assert!(!parse_flag(" OFF "));
        assert!(!parse_flag("0"));
    }
}
