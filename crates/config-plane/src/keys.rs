#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ConfigKey {
    GrafanaUrl,
    InternalAddress,
    RunnerDockerImage,
    JobPlatform,
    RunnerCpu,
    RunnerMemory,
    AllowInsecureTls,
    DelayRunnerMs,
    MinimumWaitForDelayedReportStatusUpdateInMs,
    MetricsPluginName,
    PrometheusMetrics,
    InfluxMetrics,
    SmtpServer,
    DefaultEmailAddress,
    DefaultWebhookUrl,
}

impl ConfigKey {
    pub const ALL: &'static [ConfigKey] = &[
        ConfigKey::GrafanaUrl,
        ConfigKey::InternalAddress,
        ConfigKey::RunnerDockerImage,
        ConfigKey::JobPlatform,
        ConfigKey::RunnerCpu,
        ConfigKey::RunnerMemory,
        ConfigKey::AllowInsecureTls,
        ConfigKey::DelayRunnerMs,
        ConfigKey::MinimumWaitForDelayedReportStatusUpdateInMs,
        ConfigKey::MetricsPluginName,
        ConfigKey::PrometheusMetrics,
        ConfigKey::InfluxMetrics,
        ConfigKey::SmtpServer,
        ConfigKey::DefaultEmailAddress,
        ConfigKey::DefaultWebhookUrl,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            ConfigKey::GrafanaUrl => "grafana_url",
            ConfigKey::InternalAddress => "internal_address",
            ConfigKey::RunnerDockerImage => "runner_docker_image",
            ConfigKey::JobPlatform => "job_platform",
            ConfigKey::RunnerCpu => "runner_cpu",
            ConfigKey::RunnerMemory => "runner_memory",
            ConfigKey::AllowInsecureTls => "allow_insecure_tls",
            ConfigKey::DelayRunnerMs => "delay_runner_ms",
            ConfigKey::MinimumWaitForDelayedReportStatusUpdateInMs => {
                "minimum_wait_for_delayed_report_status_update_in_ms"
            }
            ConfigKey::MetricsPluginName => "metrics_plugin_name",
            ConfigKey::PrometheusMetrics => "prometheus_metrics",
            ConfigKey::InfluxMetrics => "influx_metrics",
            ConfigKey::SmtpServer => "smtp_server",
            ConfigKey::DefaultEmailAddress => "default_email_address",
            ConfigKey::DefaultWebhookUrl => "default_webhook_url",
        }
    }

    pub fn parse(input: &str) -> Option<ConfigKey> {
        ConfigKey::ALL.iter().copied().find(|key| key.as_str() == input)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TypeTag {
    String,
    Int,
    Float,
    Boolean,
    Json,
}
