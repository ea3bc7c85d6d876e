use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::error::Result;

/// Write a reconstructed signal as a two-column CSV table.
///
/// Header is `Index,Value`, one row per sample in reconstruction order,
/// values as signed 16-bit integers. This is the byte-level contract the
/// reporting side consumes; anything fancier belongs there, not here.
pub fn write_signal_csv<W: Write>(samples: &[i16], out: W) -> Result<()> {
    let mut writer = csv::Writer::from_writer(out);
    writer.write_record(["Index", "Value"])?;
    for (index, value) in samples.iter().enumerate() {
        writer.write_record([index.to_string(), value.to_string()])?;
    }
    writer.flush()?;
    Ok(())
}

/// Write the signal CSV to a path, creating parent directories as needed.
pub fn save_signal_csv(samples: &[i16], path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    let file = File::create(path)?;
    write_signal_csv(samples, file)
}
