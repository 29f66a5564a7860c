use std::io::Write;

use wordtable::{
    JsonSnapshot,
    vectors::io::{DuplicatePolicy, VectorReadOptions, VectorTextFormat, vectors_from_reader},
};

use crate::{
    input_output::{InputArgs, OutputArgs},
    logging::LogArgs,
};

/// Args for the vectors command.
#[derive(clap::Args, Debug)]
pub struct VectorsArgs {
    #[command(flatten)]
    input: InputArgs,

    #[command(flatten)]
    output: OutputArgs,

    #[clap(flatten)]
    pub logging: LogArgs,

    /// Line layout: "csv" (token,num num) or "whitespace" (token num num).
    #[arg(long, default_value = "csv")]
    format: VectorTextFormat,

    /// Skip a leading "count dim" header line.
    #[arg(long)]
    skip_header: bool,

    /// Keep the first vector for repeated tokens instead of failing.
    #[arg(long)]
    keep_first: bool,
}

impl VectorsArgs {
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        self.logging.setup_logging(2)?;

        let options = VectorReadOptions::default()
            .with_format(self.format)
            .with_skip_header(self.skip_header)
            .with_duplicates(if self.keep_first {
                DuplicatePolicy::KeepFirst
            } else {
                DuplicatePolicy::Error
            });

        log::info!("reading vectors: {}", self.input.describe());
        let table = vectors_from_reader(self.input.open_reader()?, &options, None)?;

        log::info!(
            "{} vectors of width {}; writing {}",
            table.len(),
            table.dim(),
            self.output.describe()
        );
        let mut writer = self.output.open_writer()?;
        table.save_json(&mut writer)?;
        writer.flush()?;

        Ok(())
    }
}
