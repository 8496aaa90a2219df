use anyhow::Result;
use std::io::BufRead;

/// Read a FASTA reference: header lines (starting with '>') are discarded and
/// every other non-empty line is appended verbatim. Only line terminators are
/// stripped; bases are not normalized or case-folded because the mapper
/// compares raw bytes.
pub fn read_reference<R: BufRead>(mut reader: R) -> Result<Vec<u8>> {
    let mut genome: Vec<u8> = Vec::new();
    let mut buf = String::new();
    loop {
        buf.clear();
        let n = reader.read_line(&mut buf)?;
        if n == 0 {
            break;
        }
        let line = buf.trim_end_matches(|c| c == '\n' || c == '\r');
        if line.is_empty() || line.starts_with('>') {
            continue;
        }
        genome.extend_from_slice(line.as_bytes());
    }
    Ok(genome)
}

pub fn load_reference(path: &str) -> Result<Vec<u8>> {
    let fh = std::fs::File::open(path)
        .map_err(|e| anyhow::anyhow!("cannot open reference FASTA '{}': {}", path, e))?;
    read_reference(std::io::BufReader::new(fh))
}
