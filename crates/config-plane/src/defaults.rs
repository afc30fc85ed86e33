use std::collections::HashMap;

use serde_json::{Map, Value};

use crate::keys::{ConfigKey, TypeTag};

#[derive(Clone, Debug)]
pub struct DefaultEntry {
    pub key: ConfigKey,
    pub env: Option<&'static str>,
    pub fallback: Option<&'static str>,
    pub type_tag: Option<TypeTag>,
}

pub static DEFAULT_TABLE: &[DefaultEntry] = &[
    DefaultEntry {
        key: ConfigKey::GrafanaUrl,
        env: Some("GRAFANA_URL"),
        fallback: None,
        type_tag: None,
    },
    DefaultEntry {
        key: ConfigKey::DelayRunnerMs,
        env: Some("DELAY_RUNNER_MS"),
        fallback: Some("0"),
        type_tag: Some(TypeTag::Int),
    },
    DefaultEntry {
        key: ConfigKey::InternalAddress,
        env: Some("INTERNAL_ADDRESS"),
        fallback: None,
        type_tag: None,
    },
    DefaultEntry {
        key: ConfigKey::RunnerDockerImage,
        env: Some("RUNNER_DOCKER_IMAGE"),
        fallback: Some("zooz/predator-runner:latest"),
        type_tag: None,
    },
    DefaultEntry {
        key: ConfigKey::JobPlatform,
        env: Some("JOB_PLATFORM"),
        fallback: None,
        type_tag: None,
    },
    DefaultEntry {
        key: ConfigKey::RunnerCpu,
        env: Some("RUNNER_CPU"),
        fallback: Some("1"),
        type_tag: Some(TypeTag::Float),
    },
    DefaultEntry {
        key: ConfigKey::RunnerMemory,
        env: Some("RUNNER_MEMORY"),
        fallback: Some("256"),
        type_tag: Some(TypeTag::Int),
    },
    DefaultEntry {
        key: ConfigKey::AllowInsecureTls,
        env: Some("ALLOW_INSECURE_TLS"),
        fallback: Some("false"),
        type_tag: Some(TypeTag::Boolean),
    },
    DefaultEntry {
        key: ConfigKey::MinimumWaitForDelayedReportStatusUpdateInMs,
        env: Some("MINIMUM_WAIT_FOR_DELAYED_REPORT_STATUS_UPDATE_IN_MS"),
        fallback: Some("30000"),
        type_tag: Some(TypeTag::Int),
    },
    DefaultEntry {
        key: ConfigKey::MetricsPluginName,
        env: Some("METRICS_PLUGIN_NAME"),
        fallback: None,
        type_tag: Some(TypeTag::String),
    },
    DefaultEntry {
        key: ConfigKey::PrometheusMetrics,
        env: Some("METRICS_EXPORT_CONFIG"),
        fallback: None,
        type_tag: Some(TypeTag::Json),
    },
    DefaultEntry {
        key: ConfigKey::InfluxMetrics,
        env: Some("METRICS_EXPORT_CONFIG"),
        fallback: None,
        type_tag: Some(TypeTag::Json),
    },
    DefaultEntry {
        key: ConfigKey::SmtpServer,
        env: None,
        fallback: None,
        type_tag: Some(TypeTag::Json),
    },
];

pub fn type_of(key: ConfigKey) -> Option<TypeTag> {
    DEFAULT_TABLE
        .iter()
        .find(|entry| entry.key == key)
        .and_then(|entry| entry.type_tag)
}

pub struct DefaultProvider {
    values: HashMap<ConfigKey, Value>,
}

impl DefaultProvider {
    pub fn from_env() -> Self {
        Self::from_lookup(&|name| std::env::var(name).ok())
    }

    pub fn from_lookup(lookup: &dyn Fn(&str) -> Option<String>) -> Self {
        let mut values = HashMap::new();
        for entry in DEFAULT_TABLE {
            if entry.key == ConfigKey::SmtpServer {
                values.insert(entry.key, smtp_default(lookup));
                continue;
            }
            let resolved = entry
                .env
                .and_then(lookup)
                .or_else(|| entry.fallback.map(str::to_string));
            if let Some(value) = resolved {
                values.insert(entry.key, Value::String(value));
            }
        }
        Self { values }
    }

    pub fn default_value_of(&self, key: ConfigKey) -> Option<&Value> {
        self.values.get(&key)
    }
}

fn smtp_default(lookup: &dyn Fn(&str) -> Option<String>) -> Value {
    let mut smtp = Map::new();
    let fields = [
        ("from", "SMTP_FROM"),
        ("host", "SMTP_HOST"),
        ("port", "SMTP_PORT"),
        ("username", "SMTP_USERNAME"),
        ("password", "SMTP_PASSWORD"),
    ];
    for (field, env) in fields {
        if let Some(value) = lookup(env) {
            smtp.insert(field.to_string(), Value::String(value));
        }
    }
    smtp.insert(
        "timeout".to_string(),
        lookup("SMTP_TIMEOUT")
            .map(Value::String)
            .unwrap_or_else(|| Value::from(200)),
    );
    smtp.insert(
        "secure".to_string(),
        lookup("SMTP_SECURE")
            .map(Value::String)
            .unwrap_or(Value::Bool(false)),
    );
    smtp.insert(
        "rejectUnauthCerts".to_string(),
        lookup("SMTP_REJECT_UNAUTH_CERTS")
            .map(Value::String)
            .unwrap_or(Value::Bool(false)),
    );
    Value::Object(smtp)
}
