use clap::Parser;

/// This program builds the skill stack of a team from a survey export.
#[derive(Parser, Debug, Clone)]
#[clap(author, version, about, long_about = None)]
pub struct Args {
    /// (file path, optional) A JSON file describing the survey sources and the output.
    /// For more information about the file format, read the manual of the skill_profile crate.
    #[clap(short, long, value_parser)]
    pub config: Option<String>,
    /// (file path) A reference file containing the expected summary in JSON format. If provided,
    /// skillstack will check that the computed summary matches the reference.
    #[clap(short, long, value_parser)]
    pub reference: Option<String>,

    /// (file path, 'stdout' or empty) If specified, the summary of the profiles will be written in JSON
    /// format to the given location. Setting this option overrides the output directory that may be
    /// specified with the --config option.
    #[clap(short, long, value_parser)]
    pub out: Option<String>,

    /// (file path or empty) The survey export to read. Setting this option overrides the sources
    /// that may be specified with the --config option.
    #[clap(short, long, value_parser)]
    pub input: Option<String>,

    /// (default csv) The type of the input: csv or xlsx.
    #[clap(long, value_parser)]
    pub input_type: Option<String>,

    /// (default Username) The name of the column that identifies each person.
    #[clap(long, value_parser)]
    pub identifier_column: Option<String>,

    /// (default Timestamp) The name of the timestamp column. It is ignored.
    #[clap(long, value_parser)]
    pub timestamp_column: Option<String>,

    /// When using an Excel file, indicates the name of the worksheet to use.
    #[clap(long, value_parser)]
    pub excel_worksheet_name: Option<String>,

    /// (default: the team average) The person whose stack is displayed.
    #[clap(short, long, value_parser)]
    pub person: Option<String>,

    // Other arguments
    /// If passed as an argument, will turn on verbose logging to the standard output.
    #[clap(long, takes_value = false)]
    pub verbose: bool,
}
