//! JSON rendering shared by the subcommands.

use anyhow::{Context, Result};
use serde::Serialize;

use e8_core::BigComplex;

/// A complex value as decimal strings, so no digits are lost to `f64`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ComplexValue {
    pub re: String,
    pub im: String,
}

impl From<&BigComplex> for ComplexValue {
    fn from(z: &BigComplex) -> Self {
        Self {
            re: z.re.to_string(),
            im: z.im.to_string(),
        }
    }
}

/// Pretty-print `value` as JSON on stdout.
///
/// # Errors
///
/// Fails only if serialization fails.
pub fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let rendered = serde_json::to_string_pretty(value).context("serializing output")?;
    println!("{rendered}");
    Ok(())
}
