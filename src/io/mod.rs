//! 序列输入：FASTA、FASTQ 以及每行一条序列的纯文本。

pub mod fasta;
pub mod fastq;

use anyhow::{Context, Result};
use std::io::BufRead;

/// 一条待打分的序列。`seq` 保留原始大小写，已去除空白。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeqRecord {
    pub id: String,
    pub desc: Option<String>,
    pub seq: String,
}

impl SeqRecord {
    pub fn new(id: impl Into<String>, seq: impl Into<String>) -> Self {
        Self { id: id.into(), desc: None, seq: seq.into() }
    }
}

/// Split a header (without its leading marker) into id and description.
pub(crate) fn split_header(header: &str) -> (String, Option<String>) {
    let mut parts = header.splitn(2, char::is_whitespace);
    let id = parts.next().unwrap_or("").to_string();
    let desc = parts
        .next()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty());
    (id, desc)
}

/// Open `path` for buffered reading; `-` is stdin.
pub fn open_input(path: &str) -> Result<Box<dyn BufRead>> {
    if path == "-" {
        return Ok(Box::new(std::io::BufReader::new(std::io::stdin())));
    }
    let fh = std::fs::File::open(path).with_context(|| format!("cannot open input '{}'", path))?;
    Ok(Box::new(std::io::BufReader::new(fh)))
}

/// 读取全部记录。根据第一行非空内容判断格式：
/// `>` 为 FASTA，`@` 为 FASTQ，否则每个非空行是一条序列（id 为 `seq1`、`seq2`…）。
pub fn read_records<R: BufRead>(mut reader: R) -> Result<Vec<SeqRecord>> {
    let mut line = String::new();
    loop {
        line.clear();
        if reader.read_line(&mut line)? == 0 {
            return Ok(Vec::new());
        }
        if !line.trim().is_empty() {
            break;
        }
    }

    if let Some(rest) = line.strip_prefix('>') {
        log::debug!("input detected as FASTA");
        return fasta::FastaReader::with_header(reader, rest.trim().to_string()).collect();
    }
    if line.starts_with('@') {
        log::debug!("input detected as FASTQ");
        return fastq::FastqReader::with_header(reader, line).collect();
    }

    log::debug!("input detected as plain text");
    let mut records = vec![SeqRecord::new("seq1", strip_whitespace(&line))];
    for l in reader.lines() {
        let seq = strip_whitespace(&l?);
        if seq.is_empty() {
            continue;
        }
        records.push(SeqRecord::new(format!("seq{}", records.len() + 1), seq));
    }
    Ok(records)
}

fn strip_whitespace(line: &str) -> String {
    line.chars().filter(|c| !c.is_whitespace()).collect()
}

/// Read and concatenate the records of several inputs, in order.
pub fn read_inputs(paths: &[String]) -> Result<Vec<SeqRecord>> {
    let mut all = Vec::new();
    for p in paths {
        let recs = read_records(open_input(p)?).with_context(|| format!("cannot parse input '{}'", p))?;
        log::info!("{}: {} sequences", p, recs.len());
        all.extend(recs);
    }
    Ok(all)
}
