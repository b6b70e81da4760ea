use crate::error::{IoError, Result};
use garden_core::RulesConfig;
use std::path::Path;

/// Loads the rules configuration.
///
/// A missing file yields the defaults; a present but invalid file is an error.
pub fn load_rules<P: AsRef<Path>>(path: P) -> Result<RulesConfig> {
    let path = path.as_ref();
    let content = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            tracing::warn!(path = %path.display(), "Rules config not found, using defaults");
            return Ok(RulesConfig::default());
        }
        Err(e) => return Err(e.into()),
    };
    let context = || format!("loading {}", path.display());
    let rules: RulesConfig =
        toml::from_str(&content).map_err(|e| IoError::from(e).with_context(context()))?;
    rules
        .validate()
        .map_err(|e| IoError::validation(e.to_string()).with_context(context()))?;
    Ok(rules)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_missing_rules_use_defaults() {
        let rules = load_rules("/no/such/garden.toml").unwrap();
        assert_eq!(rules, RulesConfig::default());
    }

    #[test]
    fn test_rules_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "preemptive_pesticide_chance = 0.0\nseed = 11").unwrap();
        let rules = load_rules(file.path()).unwrap();
        assert_eq!(rules.preemptive_pesticide_chance, 0.0);
        assert_eq!(rules.seed, Some(11));
    }

    #[test]
    fn test_invalid_rules_are_an_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "pest_kill_chance = 2.0").unwrap();
        let err = load_rules(file.path()).unwrap_err();
        assert!(matches!(err, IoError::Context { ref source, .. } if matches!(**source, IoError::Validation(_))));
    }

    #[test]
    fn test_malformed_toml_is_a_toml_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "seed = [not toml").unwrap();
        let err = load_rules(file.path()).unwrap_err();
        assert!(matches!(err, IoError::Context { ref source, .. } if matches!(**source, IoError::Toml(_))));
        assert!(!err.is_not_found());
    }
}
