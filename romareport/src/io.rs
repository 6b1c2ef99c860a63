use clap::Args;
use roma_analysis::synthetic::{SyntheticConfig, SyntheticSource};
use serde::Serialize;
use std::{
    fs::File,
    io::{BufWriter, Write, stdout},
    path::PathBuf,
    str::FromStr,
};

// Every subcommand writes a single JSON document.
#[derive(Args)]
pub struct OutputArgs {
    /// The output file ("-" implies stdout)
    #[arg(short, long, default_value = "-", value_parser = clap::value_parser!(PathOrStd))]
    output: PathOrStd,
}

impl OutputArgs {
    /// Write `value` as pretty JSON and flush the destination.
    pub fn write_json<T: Serialize + ?Sized>(&self, value: &T) -> anyhow::Result<()> {
        let mut writer = self.write()?;
        serde_json::to_writer_pretty(&mut writer, value)?;
        writer.flush()?;
        Ok(())
    }

    fn write(&self) -> anyhow::Result<Box<dyn Write>> {
        match &self.output {
            PathOrStd::Path(path) => Ok(Box::new(BufWriter::new(File::create(path)?))),
            PathOrStd::Std => Ok(Box::new(stdout().lock())),
        }
    }
}

// Every subcommand regenerates the synthetic table.
#[derive(Args)]
pub struct DataArgs {
    /// Seed for the synthetic market data
    #[arg(long, default_value_t = SyntheticConfig::default().seed)]
    seed: u64,
}

impl DataArgs {
    pub fn source(&self) -> SyntheticSource {
        SyntheticSource::new(SyntheticConfig {
            seed: self.seed,
            ..Default::default()
        })
    }
}

#[derive(Clone)]
enum PathOrStd {
    Path(PathBuf),
    Std,
}

impl FromStr for PathOrStd {
    type Err = <PathBuf as FromStr>::Err;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "-" {
            Ok(Self::Std)
        } else {
            Ok(Self::Path(s.parse()?))
        }
    }
}
