use crate::config::OutputFormat;
use rollcall::RecordId;
use std::io::Write;

/// Writes `ids` to `out` in the requested format and flushes.
pub fn write_ids<W: Write>(
    mut out: W,
    ids: &[RecordId],
    format: OutputFormat,
) -> anyhow::Result<()> {
    match format {
        OutputFormat::Plain => {
            for id in ids {
                writeln!(out, "{id}")?;
            }
        }
        OutputFormat::Padded => {
            for id in ids {
                writeln!(out, "{}", id.padded())?;
            }
        }
        OutputFormat::Json => {
            serde_json::to_writer(&mut out, ids)?;
            writeln!(out)?;
        }
    }
    out.flush()?;
    Ok(())
}
