use anyhow::{Context, Result};
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

pub const RECORD_MARKER: u8 = b'>';

#[derive(Clone, Copy, Debug, Default)]
pub struct AnnotateStats {
    pub total_lines: u64,
    pub header_lines: u64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LineKind {
    Header,
    Sequence,
}

#[inline]
pub fn classify_line(line: &[u8]) -> LineKind {
    match line.first() {
        Some(&RECORD_MARKER) => LineKind::Header,
        _ => LineKind::Sequence,
    }
}

fn trim_line_end(line: &[u8]) -> &[u8] {
    let end = line
        .iter()
        .rposition(|&b| !matches!(b, b' ' | b'\t' | b'\n' | b'\r' | b'\x0b' | b'\x0c'))
        .map_or(0, |last| last + 1);
    &line[..end]
}

pub fn annotate_lines<R: BufRead, W: Write>(mut reader: R, mut writer: W) -> Result<AnnotateStats> {
    let mut stats = AnnotateStats::default();
    let mut line: Vec<u8> = Vec::with_capacity(256);

    loop {
        line.clear();
        if reader.read_until(b'\n', &mut line)? == 0 {
            break;
        }
        stats.total_lines += 1;

        match classify_line(&line) {
            LineKind::Header => {
                stats.header_lines += 1;
                writer.write_all(trim_line_end(&line))?;
                write!(writer, "_{}", stats.header_lines)?;
                writer.write_all(b"\n")?;
            }
            LineKind::Sequence => writer.write_all(&line)?,
        }
    }

    Ok(stats)
}

pub fn annotate_file(input: &Path, output: &Path) -> Result<AnnotateStats> {
    let file = File::open(input)
        .with_context(|| format!("failed to open input file {}", input.display()))?;
    let reader = BufReader::new(file);

    let file = File::create(output)
        .with_context(|| format!("failed to create {}", output.display()))?;
    let mut writer = BufWriter::new(file);

    let stats = annotate_lines(reader, &mut writer)?;
    writer.flush()?;
    Ok(stats)
}
