use std::{
    fs::File,
    io::{BufRead, BufReader, BufWriter, Write},
};

/// `None` and `-` both mean the standard stream.
fn file_path(path: &Option<String>) -> Option<&str> {
    path.as_deref().filter(|p| *p != "-")
}

/// Input argument group.
#[derive(clap::Args, Debug)]
pub struct InputArgs {
    /// Input text file; "-" or absent reads stdin.
    #[clap(long, default_value = None)]
    pub input: Option<String>,
}

impl InputArgs {
    /// Name the input for log messages.
    pub fn describe(&self) -> &str {
        file_path(&self.input).unwrap_or("<stdin>")
    }

    /// Open a line reader for the input.
    pub fn open_reader(&self) -> Result<Box<dyn BufRead>, Box<dyn std::error::Error>> {
        Ok(match file_path(&self.input) {
            None => Box::new(BufReader::new(std::io::stdin().lock())),
            Some(p) => Box::new(BufReader::new(File::open(p)?)),
        })
    }
}

/// Output argument group.
#[derive(clap::Args, Debug)]
pub struct OutputArgs {
    /// Snapshot output file; "-" or absent writes stdout.
    #[clap(long, default_value = None)]
    pub output: Option<String>,
}

impl OutputArgs {
    /// Name the output for log messages.
    pub fn describe(&self) -> &str {
        file_path(&self.output).unwrap_or("<stdout>")
    }

    /// Open a writer for the output.
    pub fn open_writer(&self) -> Result<Box<dyn Write>, Box<dyn std::error::Error>> {
        Ok(match file_path(&self.output) {
            Some(p) => Box::new(BufWriter::new(File::create(p)?)),
            None => Box::new(BufWriter::new(std::io::stdout().lock())),
        })
    }
}
