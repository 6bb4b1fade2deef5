//! Synthetic dataset export

use std::io::Write;

use domain_claims::SyntheticGenerator;

use crate::error::CliError;

/// Writes `count` synthetic claims as JSON lines; returns the number written
pub fn write_dataset<W: Write>(out: &mut W, count: usize, seed: u64) -> Result<usize, CliError> {
    let mut generator = SyntheticGenerator::new(seed);
    for claim in generator.generate(count) {
        serde_json::to_writer(&mut *out, &claim)?;
        writeln!(out)?;
    }
    out.flush()?;
    Ok(count)
}
