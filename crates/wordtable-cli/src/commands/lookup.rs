use std::io::Write;

use wordtable::{JsonSnapshot, Vocabulary};

use crate::logging::LogArgs;

/// Args for the lookup command.
#[derive(clap::Args, Debug)]
pub struct LookupArgs {
    /// Vocabulary snapshot file.
    #[arg(long)]
    vocab: String,

    #[clap(flatten)]
    pub logging: LogArgs,

    /// Tokens to look up.
    tokens: Vec<String>,
}

impl LookupArgs {
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        self.logging.setup_logging(1)?;

        let vocab = Vocabulary::load_json_path(&self.vocab)?;
        log::debug!("loaded {} tokens from {}", vocab.len(), self.vocab);

        let mut out = std::io::stdout().lock();
        for (token, index) in self.tokens.iter().zip(vocab.lookup_indices(&self.tokens)) {
            let marker = if vocab.contains(token) { "" } else { "\t(unk)" };
            writeln!(out, "{token}\t{index}{marker}")?;
        }

        Ok(())
    }
}
