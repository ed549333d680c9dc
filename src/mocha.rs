use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Options forwarded to the mocha test runner, most importantly which
/// reporter renders test results.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MochaConfig {
    /// Reporter identifier, e.g. `"spec"` or `"eth-gas-reporter"`.
    #[serde(default = "default_reporter")]
    pub reporter: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reporter_options: Option<ReporterOptions>,
}

impl MochaConfig {
    pub fn new(reporter: impl Into<String>) -> Self {
        Self { reporter: reporter.into(), reporter_options: None }
    }
}

impl Default for MochaConfig {
    fn default() -> Self {
        Self::new(default_reporter())
    }
}

fn default_reporter() -> String {
    "spec".to_string()
}

/// Reporter-specific options.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReporterOptions {
    /// File the reporter writes its output to instead of stdout.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output_file: Option<PathBuf>,
    /// Suppress ANSI colors in the report, for file or CI output.
    #[serde(default)]
    pub no_colors: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reporter_defaults_to_spec() {
        let mocha: MochaConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(mocha.reporter, "spec");
        assert!(mocha.reporter_options.is_none());
    }

    #[test]
    fn reporter_options_use_camel_case_keys() {
        let mocha: MochaConfig = serde_json::from_str(
            r#"{
                "reporter": "eth-gas-reporter",
                "reporterOptions": { "outputFile": "gas-usage.txt", "noColors": true }
            }"#,
        )
        .unwrap();
        assert_eq!(mocha.reporter, "eth-gas-reporter");
        let options = mocha.reporter_options.unwrap();
        assert_eq!(options.output_file.as_deref(), Some("gas-usage.txt".as_ref()));
        assert!(options.no_colors);
    }
}
