use anyhow::{anyhow, Result};
use std::io::BufRead;

use super::SeqRecord;

pub struct FastqReader<R: BufRead> {
    reader: R,
    buf: String,
    done: bool,
    peek_header: Option<String>,
}

impl<R: BufRead> FastqReader<R> {
    pub fn new(reader: R) -> Self {
        Self { reader, buf: String::new(), done: false, peek_header: None }
    }

    /// `header` is the first '@' line, already read by the caller.
    pub(crate) fn with_header(reader: R, header: String) -> Self {
        Self { reader, buf: String::new(), done: false, peek_header: Some(header) }
    }

    pub fn next_record(&mut self) -> Result<Option<SeqRecord>> {
        if self.done { return Ok(None); }

        // header line starting with '@', blank lines between records tolerated
        let header = match self.peek_header.take() {
            Some(h) => h,
            None => loop {
                self.buf.clear();
                let n = self.reader.read_line(&mut self.buf)?;
                if n == 0 { self.done = true; return Ok(None); }
                if !self.buf.trim().is_empty() { break self.buf.clone(); }
            },
        };
        let header = header
            .strip_prefix('@')
            .ok_or_else(|| anyhow!("FASTQ header not starting with '@'"))?
            .trim_end()
            .to_string();
        let (id, desc) = super::split_header(&header);

        // sequence line
        self.buf.clear();
        let mut n = self.reader.read_line(&mut self.buf)?;
        if n == 0 { return Err(anyhow!("unexpected EOF after header of '{}'", id)); }
        let seq = self.buf.trim_end().to_string();

        // plus line
        self.buf.clear();
        n = self.reader.read_line(&mut self.buf)?;
        if n == 0 || !self.buf.starts_with('+') { return Err(anyhow!("missing '+' line in record '{}'", id)); }

        // quality line
        self.buf.clear();
        n = self.reader.read_line(&mut self.buf)?;
        if n == 0 { return Err(anyhow!("missing quality line in record '{}'", id)); }
        let qual_len = self.buf.trim_end().chars().count();

        // line-wrapped FASTQ is not supported
        if qual_len != seq.chars().count() {
            return Err(anyhow!("seq/qual length mismatch in record '{}'", id));
        }

        Ok(Some(SeqRecord { id, desc, seq }))
    }
}

impl<R: BufRead> Iterator for FastqReader<R> {
    type Item = Result<SeqRecord>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_record().transpose()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn parse_two_records() {
        let data = b"@r1 lane1\nACgt\n+\nIIII\n@r2\nGGG\n+r2\n###\n";
        let mut r = FastqReader::new(Cursor::new(&data[..]));

        let r1 = r.next_record().unwrap().unwrap();
        assert_eq!(r1.id, "r1");
        assert_eq!(r1.desc.as_deref(), Some("lane1"));
        assert_eq!(r1.seq, "ACgt");

        let r2 = r.next_record().unwrap().unwrap();
        assert_eq!(r2.id, "r2");
        assert_eq!(r2.seq, "GGG");

        assert!(r.next_record().unwrap().is_none());
    }

    #[test]
    fn rejects_bad_header() {
        let data = b">r1\nACGT\n+\nIIII\n";
        let mut r = FastqReader::new(Cursor::new(&data[..]));
        assert!(r.next_record().is_err());
    }

    #[test]
    fn rejects_missing_plus_line() {
        let data = b"@r1\nACGT\nIIII\n";
        let mut r = FastqReader::new(Cursor::new(&data[..]));
        assert!(r.next_record().is_err());
    }

    #[test]
    fn rejects_length_mismatch() {
        let data = b"@r1\nACGT\n+\nIII\n";
        let mut r = FastqReader::new(Cursor::new(&data[..]));
        let err = r.next_record().unwrap_err();
        assert!(err.to_string().contains("length mismatch"));
    }
}
