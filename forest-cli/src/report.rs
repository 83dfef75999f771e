use std::fmt::Display;

use anyhow::{Context, Result};
use serde::Serialize;

/// Prints `report` to stdout, either as its text rendering or as JSON.
pub fn emit<R>(report: &R, json: bool) -> Result<()>
where
    R: Serialize + Display,
{
    if json {
        let body = serde_json::to_string_pretty(report).context("Failed to encode report")?;
        println!("{}", body);
    } else {
        println!("{}", report);
    }
    Ok(())
}
