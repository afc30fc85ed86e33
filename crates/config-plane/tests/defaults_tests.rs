use std::collections::HashMap;

use config_plane::{type_of, ConfigKey, DefaultProvider, TypeTag};
use serde_json::{json, Value};

fn provider(pairs: &[(&str, &str)]) -> DefaultProvider {
    let env: HashMap<String, String> = pairs
        .iter()
        .map(|(name, value)| (name.to_string(), value.to_string()))
        .collect();
    DefaultProvider::from_lookup(&move |name| env.get(name).cloned())
}

#[test]
fn literal_fallbacks_apply_without_environment() {
    let defaults = provider(&[]);
    assert_eq!(
        defaults.default_value_of(ConfigKey::RunnerDockerImage),
        Some(&Value::String("zooz/predator-runner:latest".to_string()))
    );
    assert_eq!(
        defaults.default_value_of(ConfigKey::RunnerCpu),
        Some(&Value::String("1".to_string()))
    );
    assert_eq!(
        defaults.default_value_of(ConfigKey::RunnerMemory),
        Some(&Value::String("256".to_string()))
    );
    assert_eq!(
        defaults.default_value_of(ConfigKey::AllowInsecureTls),
        Some(&Value::String("false".to_string()))
    );
    assert_eq!(
        defaults.default_value_of(ConfigKey::DelayRunnerMs),
        Some(&Value::String("0".to_string()))
    );
    assert_eq!(
        defaults.default_value_of(ConfigKey::MinimumWaitForDelayedReportStatusUpdateInMs),
        Some(&Value::String("30000".to_string()))
    );
}

#[test]
fn keys_without_fallback_are_absent() {
    let defaults = provider(&[]);
    assert!(defaults.default_value_of(ConfigKey::GrafanaUrl).is_none());
    assert!(defaults.default_value_of(ConfigKey::InternalAddress).is_none());
    assert!(defaults.default_value_of(ConfigKey::JobPlatform).is_none());
    assert!(defaults.default_value_of(ConfigKey::MetricsPluginName).is_none());
    assert!(defaults.default_value_of(ConfigKey::PrometheusMetrics).is_none());
    assert!(defaults.default_value_of(ConfigKey::InfluxMetrics).is_none());
    assert!(defaults.default_value_of(ConfigKey::DefaultEmailAddress).is_none());
    assert!(defaults.default_value_of(ConfigKey::DefaultWebhookUrl).is_none());
}

#[test]
fn environment_overrides_fallback() {
    let defaults = provider(&[
        ("GRAFANA_URL", "http://grafana:3000"),
        ("RUNNER_DOCKER_IMAGE", "local/runner:dev"),
        ("RUNNER_CPU", "0.5"),
    ]);
    assert_eq!(
        defaults.default_value_of(ConfigKey::GrafanaUrl),
        Some(&Value::String("http://grafana:3000".to_string()))
    );
    assert_eq!(
        defaults.default_value_of(ConfigKey::RunnerDockerImage),
        Some(&Value::String("local/runner:dev".to_string()))
    );
    assert_eq!(
        defaults.default_value_of(ConfigKey::RunnerCpu),
        Some(&Value::String("0.5".to_string()))
    );
}

#[test]
fn metrics_export_config_feeds_both_plugins() {
    let defaults = provider(&[("METRICS_EXPORT_CONFIG", r#"{"host":"influx"}"#)]);
    assert_eq!(
        defaults.default_value_of(ConfigKey::PrometheusMetrics),
        Some(&Value::String(r#"{"host":"influx"}"#.to_string()))
    );
    assert_eq!(
        defaults.default_value_of(ConfigKey::InfluxMetrics),
        Some(&Value::String(r#"{"host":"influx"}"#.to_string()))
    );
}

#[test]
fn smtp_default_is_composed_from_environment() {
    let defaults = provider(&[
        ("SMTP_FROM", "loadtest@example.com"),
        ("SMTP_HOST", "smtp.example.com"),
        ("SMTP_PORT", "587"),
    ]);
    let smtp = defaults
        .default_value_of(ConfigKey::SmtpServer)
        .expect("smtp default");
    assert_eq!(
        smtp,
        &json!({
            "from": "loadtest@example.com",
            "host": "smtp.example.com",
            "port": "587",
            "timeout": 200,
            "secure": false,
            "rejectUnauthCerts": false
        })
    );
}

#[test]
fn smtp_default_exists_without_environment() {
    let defaults = provider(&[]);
    let smtp = defaults
        .default_value_of(ConfigKey::SmtpServer)
        .expect("smtp default");
    assert_eq!(
        smtp,
        &json!({ "timeout": 200, "secure": false, "rejectUnauthCerts": false })
    );
}

#[test]
fn declared_types_match_the_table() {
    assert_eq!(type_of(ConfigKey::RunnerCpu), Some(TypeTag::Float));
    assert_eq!(type_of(ConfigKey::RunnerMemory), Some(TypeTag::Int));
    assert_eq!(type_of(ConfigKey::DelayRunnerMs), Some(TypeTag::Int));
    assert_eq!(type_of(ConfigKey::AllowInsecureTls), Some(TypeTag::Boolean));
    assert_eq!(type_of(ConfigKey::MetricsPluginName), Some(TypeTag::String));
    assert_eq!(type_of(ConfigKey::PrometheusMetrics), Some(TypeTag::Json));
    assert_eq!(type_of(ConfigKey::InfluxMetrics), Some(TypeTag::Json));
    assert_eq!(type_of(ConfigKey::SmtpServer), Some(TypeTag::Json));
    assert_eq!(type_of(ConfigKey::GrafanaUrl), None);
    assert_eq!(type_of(ConfigKey::DefaultEmailAddress), None);
}

#[test]
fn unknown_keys_parse_to_none() {
    assert_eq!(ConfigKey::parse("not_real_key"), None);
    assert_eq!(ConfigKey::parse("grafana_url"), Some(ConfigKey::GrafanaUrl));
}
