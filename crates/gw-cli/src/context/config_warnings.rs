use gw_config::{ENV_PREFIX, GroundworkConfig};

/// Emit warnings for likely mistyped env var keys that silently fell back to defaults.
pub fn warn_unconfigured(config: &GroundworkConfig) {
    for warning in collect_unconfigured_warnings(config, std::env::vars()) {
        tracing::warn!("{warning}");
    }
}

fn collect_unconfigured_warnings<I>(config: &GroundworkConfig, env: I) -> Vec<String>
where
    I: IntoIterator<Item = (String, String)>,
{
    let env_keys = env
        .into_iter()
        .map(|(key, _)| key)
        .filter(|key| key.starts_with(ENV_PREFIX))
        .collect::<Vec<_>>();

    let defaults = GroundworkConfig::default();
    let sections = [
        ("FIXTURE", config.fixture == defaults.fixture, "GROUNDWORK_FIXTURE__PATH"),
        (
            "DISPLAY",
            config.display == defaults.display,
            "GROUNDWORK_DISPLAY__DASHBOARD_ACTIVITY_LIMIT",
        ),
        ("PORTAL", config.portal == defaults.portal, "GROUNDWORK_PORTAL__PROJECT_ID"),
    ];

    sections
        .into_iter()
        .filter(|(section, is_default, _)| {
            *is_default && has_single_underscore_key(&env_keys, section)
        })
        .map(|(section, _, example)| {
            format!(
                "{} config appears default while {ENV_PREFIX}{section}_* env vars exist. Use double underscores (example: {example}).",
                section.to_lowercase()
            )
        })
        .collect()
}

/// `GROUNDWORK_FIXTURE_PATH` instead of `GROUNDWORK_FIXTURE__PATH`.
fn has_single_underscore_key(keys: &[String], section: &str) -> bool {
    let prefix = format!("{ENV_PREFIX}{section}_");
    let nested = format!("{ENV_PREFIX}{section}__");
    keys.iter()
        .any(|key| key.starts_with(&prefix) && !key.starts_with(&nested))
}

#[cfg(test)]
mod tests {
    use gw_config::GroundworkConfig;

    use super::collect_unconfigured_warnings;

    fn env(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
        pairs
            .iter()
            .map(|(key, value)| ((*key).to_string(), (*value).to_string()))
            .collect()
    }

    #[test]
    fn warns_for_single_underscore_keys() {
        let warnings = collect_unconfigured_warnings(
            &GroundworkConfig::default(),
            env(&[
                ("GROUNDWORK_FIXTURE_PATH", "/tmp/data.json"),
                ("GROUNDWORK_PORTAL_PROJECT_ID", "bloemhof"),
            ]),
        );

        assert_eq!(warnings.len(), 2);
        assert!(warnings[0].contains("GROUNDWORK_FIXTURE__PATH"));
        assert!(warnings[1].starts_with("portal config"));
    }

    #[test]
    fn nested_keys_and_log_filter_do_not_warn() {
        let warnings = collect_unconfigured_warnings(
            &GroundworkConfig::default(),
            env(&[
                ("GROUNDWORK_DISPLAY__DASHBOARD_ACTIVITY_LIMIT", "3"),
                ("GROUNDWORK_LOG", "debug"),
                ("HOME", "/root"),
            ]),
        );

        assert!(warnings.is_empty());
    }

    #[test]
    fn configured_sections_do_not_warn() {
        let mut config = GroundworkConfig::default();
        config.fixture.path = "/tmp/data.json".to_string();

        let warnings =
            collect_unconfigured_warnings(&config, env(&[("GROUNDWORK_FIXTURE_PATH", "x")]));
        assert!(warnings.is_empty());
    }
}
