use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

pub fn write_fasta(path: &Path, records: &[(&str, &str)]) -> Result<()> {
    let mut out = String::new();
    for (id, seq) in records {
        out.push_str(&format!(">{id}\n{seq}\n"));
    }
    fs::write(path, out).with_context(|| format!("failed to write {}", path.display()))?;
    Ok(())
}

pub fn read_bytes(path: &Path) -> Result<Vec<u8>> {
    fs::read(path).with_context(|| format!("failed to read {}", path.display()))
}
