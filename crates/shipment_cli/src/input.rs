//! Reading newline-separated driver and destination lists.

use std::fs;
use std::path::Path;

use anyhow::{bail, Context, Result};

/// One entry per non-blank line, trimmed.
pub fn read_lines(path: &Path) -> Result<Vec<String>> {
    let contents =
        fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    Ok(parse_lines(&contents))
}

pub fn parse_lines(contents: &str) -> Vec<String> {
    contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

/// Parse `--test-data` as `"<drivers>,<destinations>"`.
pub fn parse_test_data(value: &str) -> Result<(usize, usize)> {
    let Some((drivers, destinations)) = value.split_once(',') else {
        bail!("test data must look like <drivers>,<destinations>, got {value:?}");
    };
    let drivers = drivers
        .trim()
        .parse()
        .with_context(|| format!("invalid driver count {drivers:?}"))?;
    let destinations = destinations
        .trim()
        .parse()
        .with_context(|| format!("invalid destination count {destinations:?}"))?;
    Ok((drivers, destinations))
}
