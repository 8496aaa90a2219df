use anyhow::Result;
use std::io::BufRead;

#[derive(Debug, Clone)]
pub struct FastqRecord {
    pub id: String,
    pub desc: Option<String>,
    pub seq: Vec<u8>,
    pub qual: Vec<u8>,
}

/// 逐条读取 4 行一组的 FASTQ 记录。
/// 文件尾部的不完整记录视为流结束而不是错误，已读出的记录不受影响。
pub struct FastqReader<R: BufRead> {
    reader: R,
    buf: String,
    done: bool,
}

impl<R: BufRead> FastqReader<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            buf: String::new(),
            done: false,
        }
    }

    pub fn next_record(&mut self) -> Result<Option<FastqRecord>> {
        if self.done {
            return Ok(None);
        }

        // header line, '@' stripped when present
        self.buf.clear();
        if self.reader.read_line(&mut self.buf)? == 0 {
            self.done = true;
            return Ok(None);
        }
        let header = self.buf.trim_end();
        let header = header.strip_prefix('@').unwrap_or(header);
        let mut parts = header.splitn(2, char::is_whitespace);
        let id = parts.next().unwrap_or("").to_string();
        let desc = parts
            .next()
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty());

        // sequence line
        self.buf.clear();
        if self.reader.read_line(&mut self.buf)? == 0 {
            self.done = true;
            return Ok(None);
        }
        let seq = self.buf.trim_end().as_bytes().to_vec();

        // '+' separator line, content ignored
        self.buf.clear();
        if self.reader.read_line(&mut self.buf)? == 0 {
            self.done = true;
            return Ok(None);
        }

        // quality line
        self.buf.clear();
        if self.reader.read_line(&mut self.buf)? == 0 {
            self.done = true;
            return Ok(None);
        }
        let qual = self.buf.trim_end().as_bytes().to_vec();

        Ok(Some(FastqRecord {
            id,
            desc,
            seq,
            qual,
        }))
    }
}
