use log::{debug, info, warn};

use skill_profile::*;
use snafu::{prelude::*, Snafu};

use std::fs;
use std::path::{Path, PathBuf};

use serde_json::Value as JSValue;
use text_diff::print_diff;

use crate::args::Args;
use crate::stack::config_reader::*;

pub mod config_reader;
mod io_common;
mod io_csv;
mod io_xlsx;
pub mod render;

#[derive(Debug, Snafu)]
#[snafu(visibility(pub(crate)))]
pub enum StackError {
    #[snafu(display("Error opening file {path}"))]
    OpeningJson {
        source: std::io::Error,
        path: String,
    },
    #[snafu(display("Error parsing the JSON file {path}"))]
    ParsingJson {
        source: serde_json::Error,
        path: String,
    },
    #[snafu(display("Error serializing the summary"))]
    SerializingJson { source: serde_json::Error },
    #[snafu(display("Error writing the summary to {path}"))]
    WritingOutput {
        source: std::io::Error,
        path: String,
    },
    #[snafu(display("Error opening CSV file {path}"))]
    CsvOpen {
        source: std::io::Error,
        path: String,
    },
    #[snafu(display("Error reading line {lineno} of CSV file {path}"))]
    CsvLineParse {
        source: csv::Error,
        path: String,
        lineno: u64,
    },
    #[snafu(display("Error opening Excel file {path}"))]
    OpeningExcel {
        source: calamine::XlsxError,
        path: String,
    },
    #[snafu(display("The Excel file {path} has no worksheet or no header row"))]
    EmptyExcel { path: String },
    #[snafu(display("Cannot find worksheet {name:?} in {path}"))]
    MissingWorksheet { path: String, name: String },
    #[snafu(display(
        "The Excel file {path} has several worksheets ({names}), the worksheet name must be provided"
    ))]
    TooManyWorksheets { path: String, names: String },
    #[snafu(display("Unexpected cell content on line {lineno}: {content}"))]
    ExcelWrongCellType { lineno: usize, content: String },
    #[snafu(display("Unknown input type {provider:?}, expected csv or xlsx"))]
    UnknownProvider { provider: String },
    #[snafu(display("No survey source: use --input or a configuration file with surveySources"))]
    MissingSources {},
    #[snafu(display("The survey sources disagree on the reserved columns: {expected} vs {found}"))]
    InconsistentColumns { expected: String, found: String },
    #[snafu(display("Cannot find the directory of the configuration file"))]
    MissingParentDir {},
    #[snafu(display("Cannot build the profiles: {source}"))]
    Aggregation { source: ProfileError },
    #[snafu(display("No profile for {person:?}"))]
    UnknownPerson { person: String },
    #[snafu(display("Difference detected between the computed summary and the reference {path}"))]
    ReferenceMismatch { path: String },
}

pub type StackResult<T> = Result<T, StackError>;

/// Reads the rows of one source, with paths relative to `root_path`.
fn read_survey_data(root_path: &Path, src: &SurveySource) -> StackResult<Vec<Row>> {
    let p: PathBuf = root_path.join(&src.file_path);
    let p2 = p.as_path().display().to_string();
    info!("Attempting to read survey file {:?}", p2);
    match src.input_type()? {
        InputType::Csv => io_csv::read_csv_rows(&p2),
        InputType::Xlsx => io_xlsx::read_xlsx_rows(&p2, src.excel_worksheet_name.as_deref()),
    }
}

// Builds the configuration from the command line, or merges the command line
// into the configuration file. Returns the configuration and the directory the
// sources are relative to.
fn resolve_config(args: &Args) -> StackResult<(StackConfig, PathBuf)> {
    let (mut config, root_p) = match &args.config {
        Some(config_path) => {
            let config = read_config(config_path)?;
            let root_p = Path::new(config_path.as_str())
                .parent()
                .context(MissingParentDirSnafu {})?
                .to_path_buf();
            (config, root_p)
        }
        None => {
            let config = StackConfig {
                output_settings: OutputSettings {
                    stack_name: "Team Stack".to_string(),
                    output_directory: None,
                },
                survey_sources: Vec::new(),
            };
            (config, PathBuf::new())
        }
    };

    if let Some(input) = &args.input {
        // The input is given relative to the current directory. It keeps the
        // column names of the configured sources, unless the flags set them.
        let (identifier_column, timestamp_column) = match config.survey_sources.first() {
            Some(src) => (src.identifier_column.clone(), src.timestamp_column.clone()),
            None => (None, None),
        };
        config.survey_sources = vec![SurveySource {
            provider: args.input_type.clone().unwrap_or_else(|| "csv".to_string()),
            file_path: input.clone(),
            identifier_column,
            timestamp_column,
            excel_worksheet_name: args.excel_worksheet_name.clone(),
        }];
        return Ok((apply_column_flags(config, args), PathBuf::new()));
    }
    Ok((apply_column_flags(config, args), root_p))
}

fn apply_column_flags(mut config: StackConfig, args: &Args) -> StackConfig {
    for src in config.survey_sources.iter_mut() {
        if args.identifier_column.is_some() {
            src.identifier_column = args.identifier_column.clone();
        }
        if args.timestamp_column.is_some() {
            src.timestamp_column = args.timestamp_column.clone();
        }
        if let (Some(_), "xlsx") = (&args.excel_worksheet_name, src.provider.as_str()) {
            src.excel_worksheet_name = args.excel_worksheet_name.clone();
        }
    }
    config
}

/// Reads all the sources and builds the profiles.
pub fn build_profiles(config: &StackConfig, root_p: &Path) -> StackResult<ProfileSet> {
    let rules = config.rules()?;
    debug!("build_profiles: rules: {:?}", rules);

    let mut data: Vec<Row> = Vec::new();
    for src in config.survey_sources.iter() {
        let mut file_data = read_survey_data(root_p, src)?;
        data.append(&mut file_data);
    }
    info!("build_profiles: {} rows", data.len());

    aggregate(&data, &rules).context(AggregationSnafu {})
}

// Where to write the summary, if anywhere.
fn output_path(args: &Args, config: &StackConfig, root_p: &Path) -> Option<String> {
    match (&args.out, &config.output_settings.output_directory) {
        (Some(out), _) => Some(out.clone()),
        (None, Some(dir)) => {
            let p: PathBuf = root_p.join(dir).join("summary.json");
            Some(p.display().to_string())
        }
        (None, None) => None,
    }
}

fn check_reference(summary_p: &str, pretty_js_stats: &str) -> StackResult<()> {
    let summary_ref = read_summary(summary_p)?;
    let pretty_js_summary_ref =
        serde_json::to_string_pretty(&summary_ref).context(SerializingJsonSnafu {})?;
    if pretty_js_summary_ref != pretty_js_stats {
        warn!("Found differences with the reference summary");
        print_diff(pretty_js_summary_ref.as_str(), pretty_js_stats, "\n");
        return ReferenceMismatchSnafu { path: summary_p }.fail();
    }
    info!("The summary matches the reference {:?}", summary_p);
    Ok(())
}

pub fn run(args: &Args) -> StackResult<()> {
    let (config, root_p) = resolve_config(args)?;
    info!("config: {:?}", config);

    let profiles = build_profiles(&config, &root_p)?;

    let person = args.person.as_deref().unwrap_or(TEAM_STACK_AVERAGE);
    let profile = profiles
        .get(person)
        .context(UnknownPersonSnafu { person })?;
    render::log_profile(person, profile);

    // Assemble the final json
    let result_js: JSValue = render::build_summary_js(&config, &profiles)?;
    let pretty_js_stats = serde_json::to_string_pretty(&result_js).context(SerializingJsonSnafu {})?;

    match output_path(args, &config, &root_p) {
        Some(out) if out == "stdout" => {
            println!("{}", pretty_js_stats);
        }
        Some(out) => {
            info!("Writing summary to {:?}", out);
            fs::write(&out, &pretty_js_stats).context(WritingOutputSnafu { path: out.clone() })?;
        }
        None => {}
    }

    // The reference summary, if provided for comparison
    if let Some(summary_p) = &args.reference {
        check_reference(summary_p, &pretty_js_stats)?;
    }

    Ok(())
}
