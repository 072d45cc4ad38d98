use crate::stack::*;

use serde::{Deserialize, Serialize};
use serde_json::Value as JSValue;

#[derive(Eq, PartialEq, Debug, Clone, Serialize, Deserialize)]
pub struct OutputSettings {
    #[serde(rename = "stackName")]
    pub stack_name: String,
    #[serde(rename = "outputDirectory")]
    pub output_directory: Option<String>,
}

/// The part of the configuration that is repeated in the summary.
#[derive(Eq, PartialEq, Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    pub stack: String,
    #[serde(rename = "identifierColumn")]
    pub identifier_column: String,
    pub people: usize,
}

#[derive(Eq, PartialEq, Debug, Clone, Serialize, Deserialize)]
pub struct SurveySource {
    pub provider: String,
    #[serde(rename = "filePath")]
    pub file_path: String,
    #[serde(rename = "identifierColumn")]
    pub identifier_column: Option<String>,
    #[serde(rename = "timestampColumn")]
    pub timestamp_column: Option<String>,
    #[serde(rename = "excelWorksheetName")]
    pub excel_worksheet_name: Option<String>,
}

impl SurveySource {
    pub fn rules(&self) -> SurveyRules {
        SurveyRules::new(
            self.identifier_column
                .as_deref()
                .unwrap_or(SurveyRules::DEFAULT_IDENTIFIER_FIELD),
            self.timestamp_column
                .as_deref()
                .unwrap_or(SurveyRules::DEFAULT_TIMESTAMP_FIELD),
        )
    }

    pub fn input_type(&self) -> StackResult<InputType> {
        match self.provider.as_str() {
            "csv" => Ok(InputType::Csv),
            "xlsx" => Ok(InputType::Xlsx),
            x => UnknownProviderSnafu { provider: x }.fail(),
        }
    }
}

#[derive(Eq, PartialEq, Debug, Clone, Copy)]
pub enum InputType {
    Csv,
    Xlsx,
}

#[derive(Eq, PartialEq, Debug, Clone, Serialize, Deserialize)]
pub struct StackConfig {
    #[serde(rename = "outputSettings")]
    pub output_settings: OutputSettings,
    #[serde(rename = "surveySources")]
    pub survey_sources: Vec<SurveySource>,
}

impl StackConfig {
    /// The rules shared by all the sources.
    pub fn rules(&self) -> StackResult<SurveyRules> {
        let mut all_rules = self.survey_sources.iter().map(|s| s.rules());
        let first = all_rules.next().context(MissingSourcesSnafu {})?;
        for r in all_rules {
            ensure!(
                r == first,
                InconsistentColumnsSnafu {
                    expected: format!("{:?}", first),
                    found: format!("{:?}", r),
                }
            );
        }
        Ok(first)
    }
}

pub fn read_config(path: &str) -> StackResult<StackConfig> {
    let contents = fs::read_to_string(path).context(OpeningJsonSnafu { path })?;
    let config: StackConfig =
        serde_json::from_str(contents.as_str()).context(ParsingJsonSnafu { path })?;
    Ok(config)
}

pub fn read_summary(path: &str) -> StackResult<JSValue> {
    let contents = fs::read_to_string(path).context(OpeningJsonSnafu { path })?;
    let js: JSValue = serde_json::from_str(contents.as_str()).context(ParsingJsonSnafu { path })?;
    Ok(js)
}
