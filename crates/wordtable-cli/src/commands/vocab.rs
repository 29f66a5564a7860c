use std::io::Write;

use wordtable::{
    JsonSnapshot,
    vocab::{DEFAULT_UNK_TOKEN, VocabOptions, io::read_token_lines},
};

use crate::{
    input_output::{InputArgs, OutputArgs},
    logging::LogArgs,
};

/// Args for the vocab command.
#[derive(clap::Args, Debug)]
pub struct VocabArgs {
    #[command(flatten)]
    input: InputArgs,

    #[command(flatten)]
    output: OutputArgs,

    #[clap(flatten)]
    pub logging: LogArgs,

    /// Minimum token frequency.
    #[arg(long, default_value = "1")]
    min_freq: usize,

    /// Fallback token for unknown lookups.
    #[arg(long, default_value = DEFAULT_UNK_TOKEN)]
    unk: String,

    /// Reserved token; may be repeated, order is kept.
    #[arg(long = "special")]
    specials: Vec<String>,

    /// Place the specials after the counted tokens.
    #[arg(long)]
    specials_last: bool,

    /// Order tokens by descending frequency instead of first appearance.
    #[arg(long)]
    by_frequency: bool,
}

impl VocabArgs {
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        self.logging.setup_logging(2)?;

        log::info!("reading tokens: {}", self.input.describe());
        let counter = read_token_lines(self.input.open_reader()?)?;
        let ordered = if self.by_frequency {
            counter.into_ordered_by_frequency()
        } else {
            counter.into_ordered_by_first_seen()
        };

        let build = VocabOptions::default()
            .with_min_freq(self.min_freq)
            .with_unk_token(self.unk.as_str())
            .with_specials(self.specials.iter().cloned())
            .with_specials_first(!self.specials_last)
            .build(ordered)?;
        build.report();

        log::info!(
            "vocabulary size: {}; writing {}",
            build.vocab.len(),
            self.output.describe()
        );
        let mut writer = self.output.open_writer()?;
        build.vocab.save_json(&mut writer)?;
        writer.flush()?;

        Ok(())
    }
}
