use std::path::PathBuf;

use anyhow::{Context, Result};
use brightness_curves::logarithmic::DEFAULT_LOG_GAMMA;
use brightness_curves::pwm::DEFAULT_LUT_SIZE;
use chrono::NaiveDateTime;
use clap::Parser;

use crate::emitter::{HEADER_FILE, HEADER_GAMMA, TIME_FORMAT};

/// Generates brightness correction lookup tables for the LED driver firmware
#[derive(Parser, Debug)]
#[command(name = "lutgen")]
#[command(version)]
pub struct Args {
    /// Number of brightness levels per table
    #[arg(short, long, default_value_t = DEFAULT_LUT_SIZE)]
    pub size: usize,

    /// Header file to write
    #[arg(short, long, default_value = HEADER_FILE)]
    pub output: PathBuf,

    /// Print the header to stdout instead of writing a file
    #[arg(long, conflicts_with_all = ["output", "preview"])]
    pub stdout: bool,

    /// Exponent of the logarithmic curve
    #[arg(long, default_value_t = DEFAULT_LOG_GAMMA)]
    pub log_gamma: f64,

    /// Exponent of the gamma curve
    #[arg(long, default_value_t = HEADER_GAMMA)]
    pub gamma: f64,

    /// Stamp this time ("YYYY-MM-DD HH:MM:SS") into the header instead of the current time
    #[arg(long)]
    pub generated_at: Option<String>,

    /// Draw the generated curves in the terminal
    #[arg(long)]
    pub preview: bool,

    /// Brightness levels sampled per curve in the preview
    #[arg(long, default_value_t = 11)]
    pub preview_samples: usize,

    /// Log level, overridden by RUST_LOG
    #[arg(long, default_value = "info")]
    pub log_level: String,
}

#[derive(Clone, Debug, PartialEq)]
pub enum Output {
    Stdout,
    File(PathBuf),
}

#[derive(Clone, Debug, PartialEq)]
pub struct EmitterConfig {
    pub size: usize,
    pub output: Output,
    pub log_gamma: f64,
    pub gamma: f64,
    pub generated_at: Option<NaiveDateTime>,
    /// Number of sampled levels, `None` if no preview was requested
    pub preview: Option<usize>,
}

impl TryFrom<&Args> for EmitterConfig {
    type Error = anyhow::Error;

    fn try_from(args: &Args) -> Result<Self> {
        let generated_at = args
            .generated_at
            .as_deref()
            .map(|time| {
                NaiveDateTime::parse_from_str(time, TIME_FORMAT)
                    .with_context(|| format!("invalid --generated-at {:?}", time))
            })
            .transpose()?;
        Ok(EmitterConfig {
            size: args.size,
            output: if args.stdout {
                Output::Stdout
            } else {
                Output::File(args.output.clone())
            },
            log_gamma: args.log_gamma,
            gamma: args.gamma,
            generated_at,
            preview: if args.preview {
                Some(args.preview_samples)
            } else {
                None
            },
        })
    }
}

#[cfg(test)]
mod test {
    use std::path::PathBuf;

    use chrono::NaiveDate;
    use clap::Parser;

    use crate::config::{Args, EmitterConfig, Output};

    fn config(args: &[&str]) -> EmitterConfig {
        let args = Args::try_parse_from(args).unwrap();
        EmitterConfig::try_from(&args).unwrap()
    }

    #[test]
    fn defaults_match_firmware() {
        let config = config(&["lutgen"]);
        assert_eq!(config.size, 4096);
        assert_eq!(config.output, Output::File(PathBuf::from("brightness_lut.h")));
        assert_eq!(config.log_gamma, 2.2);
        assert_eq!(config.gamma, 2.2);
        assert_eq!(config.generated_at, None);
        assert_eq!(config.preview, None);
    }

    #[test]
    fn flags_override_defaults() {
        let config = config(&[
            "lutgen",
            "--size",
            "256",
            "-o",
            "out/lut.h",
            "--gamma",
            "2.6",
            "--log-gamma",
            "1.8",
            "--preview",
            "--preview-samples",
            "5",
        ]);
        assert_eq!(config.size, 256);
        assert_eq!(config.output, Output::File(PathBuf::from("out/lut.h")));
        assert_eq!(config.gamma, 2.6);
        assert_eq!(config.log_gamma, 1.8);
        assert_eq!(config.preview, Some(5));
    }

    #[test]
    fn generation_time_can_be_pinned() {
        let config = config(&["lutgen", "--generated-at", "2024-05-06 07:08:09"]);
        let expected = NaiveDate::from_ymd_opt(2024, 5, 6)
            .and_then(|date| date.and_hms_opt(7, 8, 9))
            .unwrap();
        assert_eq!(config.generated_at, Some(expected));
    }

    #[test]
    fn malformed_generation_time_is_rejected() {
        let args = Args::try_parse_from(["lutgen", "--generated-at", "yesterday"]).unwrap();
        assert!(EmitterConfig::try_from(&args).is_err());
    }

    #[test]
    fn stdout_conflicts_with_output_file() {
        assert!(Args::try_parse_from(["lutgen", "--stdout", "-o", "lut.h"]).is_err());
        assert!(Args::try_parse_from(["lutgen", "--stdout", "--preview"]).is_err());
        assert_eq!(config(&["lutgen", "--stdout"]).output, Output::Stdout);
    }

    #[test]
    fn size_must_be_a_number() {
        assert!(Args::try_parse_from(["lutgen", "--size", "many"]).is_err());
    }
}
