use serde_json::{Map, Value};

use crate::keys::ConfigKey;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldType {
    String,
    Number,
    Integer,
    Boolean,
    Object,
}

impl FieldType {
    fn name(self) -> &'static str {
        match self {
            FieldType::String => "string",
            FieldType::Number => "number",
            FieldType::Integer => "integer",
            FieldType::Boolean => "boolean",
            FieldType::Object => "object",
        }
    }

    fn matches(self, value: &Value) -> bool {
        match self {
            FieldType::String => value.is_string(),
            FieldType::Number => value.is_number(),
            FieldType::Integer => value.is_i64() || value.is_u64(),
            FieldType::Boolean => value.is_boolean(),
            FieldType::Object => value.is_object(),
        }
    }
}

#[derive(Clone, Debug)]
pub struct FieldRule {
    pub field: ConfigKey,
    pub field_type: FieldType,
    pub minimum: Option<i64>,
    pub allowed: &'static [&'static str],
    pub required: &'static [&'static str],
}

pub static UPDATE_RULES: &[FieldRule] = &[
    FieldRule {
        field: ConfigKey::GrafanaUrl,
        field_type: FieldType::String,
        minimum: None,
        allowed: &[],
        required: &[],
    },
    FieldRule {
        field: ConfigKey::InternalAddress,
        field_type: FieldType::String,
        minimum: None,
        allowed: &[],
        required: &[],
    },
    FieldRule {
        field: ConfigKey::RunnerDockerImage,
        field_type: FieldType::String,
        minimum: None,
        allowed: &[],
        required: &[],
    },
    FieldRule {
        field: ConfigKey::JobPlatform,
        field_type: FieldType::String,
        minimum: None,
        allowed: &[],
        required: &[],
    },
    FieldRule {
        field: ConfigKey::RunnerCpu,
        field_type: FieldType::Number,
        minimum: Some(0),
        allowed: &[],
        required: &[],
    },
    FieldRule {
        field: ConfigKey::RunnerMemory,
        field_type: FieldType::Integer,
        minimum: Some(128),
        allowed: &[],
        required: &[],
    },
    FieldRule {
        field: ConfigKey::MinimumWaitForDelayedReportStatusUpdateInMs,
        field_type: FieldType::Integer,
        minimum: Some(0),
        allowed: &[],
        required: &[],
    },
    FieldRule {
        field: ConfigKey::DelayRunnerMs,
        field_type: FieldType::Integer,
        minimum: Some(0),
        allowed: &[],
        required: &[],
    },
    FieldRule {
        field: ConfigKey::AllowInsecureTls,
        field_type: FieldType::Boolean,
        minimum: None,
        allowed: &[],
        required: &[],
    },
    FieldRule {
        field: ConfigKey::MetricsPluginName,
        field_type: FieldType::String,
        minimum: None,
        allowed: &["prometheus", "influx"],
        required: &[],
    },
    FieldRule {
        field: ConfigKey::PrometheusMetrics,
        field_type: FieldType::Object,
        minimum: None,
        allowed: &[],
        required: &["push_gateway_url", "buckets_sizes"],
    },
    FieldRule {
        field: ConfigKey::InfluxMetrics,
        field_type: FieldType::Object,
        minimum: None,
        allowed: &[],
        required: &["host", "username", "password", "database"],
    },
    FieldRule {
        field: ConfigKey::SmtpServer,
        field_type: FieldType::Object,
        minimum: None,
        allowed: &[],
        required: &["from", "host", "port", "username", "password", "timeout"],
    },
    FieldRule {
        field: ConfigKey::DefaultEmailAddress,
        field_type: FieldType::String,
        minimum: None,
        allowed: &[],
        required: &[],
    },
    FieldRule {
        field: ConfigKey::DefaultWebhookUrl,
        field_type: FieldType::String,
        minimum: None,
        allowed: &[],
        required: &[],
    },
];

pub fn validate_update(body: &Map<String, Value>) -> Vec<String> {
    let mut violations = Vec::new();

    for field in body.keys() {
        if ConfigKey::parse(field).is_none() {
            violations.push(format!("body should not have additional property '{field}'"));
        }
    }

    for rule in UPDATE_RULES {
        let field = rule.field.as_str();
        let Some(value) = body.get(field) else {
            continue;
        };
        if !rule.field_type.matches(value) {
            violations.push(format!("body/{field} should be {}", rule.field_type.name()));
            continue;
        }
        if let Some(minimum) = rule.minimum {
            if value.as_f64().is_some_and(|number| number < minimum as f64) {
                violations.push(format!("body/{field} should be >= {minimum}"));
            }
        }
        if !rule.allowed.is_empty() {
            let member = value
                .as_str()
                .is_some_and(|text| rule.allowed.contains(&text));
            if !member {
                violations.push(format!(
                    "body/{field} should be equal to one of the allowed values"
                ));
            }
        }
        if !rule.required.is_empty() {
            if let Some(object) = value.as_object() {
                for property in rule.required {
                    if !object.contains_key(*property) {
                        violations.push(format!(
                            "body/{field} should have required property '{property}'"
                        ));
                    }
                }
            }
        }
    }

    violations
}
