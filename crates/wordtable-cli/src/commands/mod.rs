mod lookup;
mod vectors;
mod vocab;

/// Subcommands for wtable
#[derive(clap::Subcommand, Debug)]
pub enum Commands {
    /// Build a vocabulary snapshot from a token-per-line file.
    Vocab(vocab::VocabArgs),

    /// Build a vector table snapshot from a local vector text file.
    Vectors(vectors::VectorsArgs),

    /// Look up token indices in a vocabulary snapshot.
    Lookup(lookup::LookupArgs),
}

impl Commands {
    /// Run the subcommand.
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        match self {
            Commands::Vocab(cmd) => cmd.run(),
            Commands::Vectors(cmd) => cmd.run(),
            Commands::Lookup(cmd) => cmd.run(),
        }
    }
}
