use std::{path::PathBuf, time::Duration};

use clap::Parser;
use lineform_rs::Scheme;

/// Animate how a bit stream is put on the line by common line codes.
#[derive(Parser, Debug, Clone)]
#[command(name = "lineform", version)]
pub struct Config {
    /// Bit stream shown in the input field at start-up
    #[arg(long, default_value = "01001110")]
    pub bits: String,

    /// Initially selected scheme (nrz-l, nrz-i, bipolar-ami, pseudoternary,
    /// manchester, differential-manchester)
    #[arg(long, default_value = "nrz-l", value_parser = parse_scheme)]
    pub scheme: Scheme,

    /// Delay between two animation frames, in milliseconds
    #[arg(long, default_value_t = 300, value_parser = clap::value_parser!(u64).range(1..))]
    pub frame_interval_ms: u64,

    /// Pause before the animation starts over, in milliseconds
    #[arg(long, default_value_t = 2000)]
    pub loop_pause_ms: u64,

    /// Terminal columns used by one bit period (even, at least 2)
    #[arg(long, default_value_t = 8, value_parser = parse_bit_width)]
    pub bit_width: u16,

    /// Terminal rows between the zero line and a full level
    #[arg(long, default_value_t = 2, value_parser = clap::value_parser!(u16).range(1..=8))]
    pub amplitude: u16,

    /// Write logs to this file
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

impl Config {
    pub fn frame_interval(&self) -> Duration {
        Duration::from_millis(self.frame_interval_ms)
    }

    pub fn loop_pause(&self) -> Duration {
        Duration::from_millis(self.loop_pause_ms)
    }
}

impl Default for Config {
    fn default() -> Self {
        Config::parse_from(["lineform"])
    }
}

fn parse_scheme(value: &str) -> Result<Scheme, String> {
    value.parse::<Scheme>().map_err(|e| e.to_string())
}

fn parse_bit_width(value: &str) -> Result<u16, String> {
    let width: u16 = value.parse().map_err(|e| format!("{e}"))?;
    if width < 2 || width % 2 != 0 {
        return Err(format!("{width} is not an even number of columns >= 2"));
    }
    Ok(width)
}
