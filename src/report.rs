//! 结果输出：TSV 或 JSON。

use anyhow::Result;
use serde::Serialize;
use std::io::Write;

use crate::batch::RecordScore;
use crate::score::Method;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Tsv,
    Json,
}

#[derive(Debug, Serialize)]
pub struct ReportMeta {
    pub tool: &'static str,
    pub version: &'static str,
    pub method: Method,
    /// RFC 3339 timestamp
    pub generated: String,
}

impl ReportMeta {
    pub fn new(method: Method) -> Self {
        Self {
            tool: env!("CARGO_PKG_NAME"),
            version: env!("CARGO_PKG_VERSION"),
            method,
            generated: chrono::Utc::now().to_rfc3339(),
        }
    }
}

#[derive(Serialize)]
struct Report<'a> {
    meta: ReportMeta,
    records: &'a [RecordScore],
}

pub fn write_report<W: Write>(out: &mut W, results: &[RecordScore], method: Method, format: OutputFormat) -> Result<()> {
    let meta = ReportMeta::new(method);
    match format {
        OutputFormat::Tsv => write_tsv(out, results, &meta),
        OutputFormat::Json => write_json(out, results, meta),
    }
}

/// 有逐单元结果时每个单元一行，否则每条序列一行。
/// 没有任何单元的序列（空序列、密码子模式下不足 3 个字符）输出一行 `id - - score`，不会从报告中消失。
pub fn write_tsv<W: Write>(out: &mut W, results: &[RecordScore], meta: &ReportMeta) -> Result<()> {
    writeln!(out, "#{}\tversion:{}\tmethod:{}\tgenerated:{}", meta.tool, meta.version, meta.method, meta.generated)?;

    let per_unit = results.iter().any(|r| r.units.is_some());
    if per_unit {
        writeln!(out, "id\tindex\tunit\tscore")?;
        for r in results {
            let units = r.units.as_deref().unwrap_or_default();
            if units.is_empty() {
                writeln!(out, "{}\t-\t-\t{}", r.id, r.score)?;
            }
            for (i, u) in units.iter().enumerate() {
                writeln!(out, "{}\t{}\t{}\t{}", r.id, i, u.unit, u.score)?;
            }
        }
    } else {
        writeln!(out, "id\tlength\tscore")?;
        for r in results {
            writeln!(out, "{}\t{}\t{}", r.id, r.length, r.score)?;
        }
    }
    Ok(())
}

pub fn write_json<W: Write>(out: &mut W, results: &[RecordScore], meta: ReportMeta) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, &Report { meta, records: results })?;
    writeln!(out)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::batch::{score_records, ScoreOpt};
    use crate::io::SeqRecord;

    fn run(opt: ScoreOpt, format: OutputFormat) -> String {
        let recs = vec![SeqRecord::new("a", "GTAC"), SeqRecord::new("b", "aaaa")];
        let results = score_records(&recs, &opt).unwrap();
        let mut buf = Vec::new();
        write_report(&mut buf, &results, opt.method, format).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn tsv_summary_rows() {
        let text = run(ScoreOpt::default(), OutputFormat::Tsv);
        let lines: Vec<&str> = text.lines().collect();
        assert!(lines[0].starts_with("#flounder\t"));
        assert!(lines[0].contains("method:plain"));
        assert_eq!(lines[1], "id\tlength\tscore");
        assert_eq!(lines[2], "a\t4\t7");
        assert_eq!(lines[3], "b\t4\t4");
        assert_eq!(lines.len(), 4);
    }

    #[test]
    fn tsv_per_unit_rows() {
        let opt = ScoreOpt { method: Method::Codon, per_unit: true, threads: 1 };
        let text = run(opt, OutputFormat::Tsv);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[1], "id\tindex\tunit\tscore");
        // GTAC -> GTA (V=4); aaaa -> aaa (K=5)
        assert_eq!(lines[2], "a\t0\tGTA\t4");
        assert_eq!(lines[3], "b\t0\taaa\t5");
        assert_eq!(lines.len(), 4);
    }

    #[test]
    fn tsv_per_unit_keeps_records_without_units() {
        let recs = vec![SeqRecord::new("short", "ac"), SeqRecord::new("empty", ""), SeqRecord::new("full", "AAA")];
        let opt = ScoreOpt { method: Method::Codon, per_unit: true, threads: 1 };
        let results = score_records(&recs, &opt).unwrap();
        let mut buf = Vec::new();
        write_report(&mut buf, &results, opt.method, OutputFormat::Tsv).unwrap();
        let text = String::from_utf8(buf).unwrap();
        let lines: Vec<&str> = text.lines().skip(2).collect();
        assert_eq!(lines, vec!["short\t-\t-\t0", "empty\t-\t-\t0", "full\t0\tAAA\t5"]);
    }

    #[test]
    fn json_shape() {
        let opt = ScoreOpt { method: Method::ToTheMax, ..ScoreOpt::default() };
        let text = run(opt, OutputFormat::Json);
        let v: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(v["meta"]["tool"], "flounder");
        assert_eq!(v["meta"]["method"], "max");
        assert_eq!(v["records"][0]["id"], "a");
        assert_eq!(v["records"][0]["score"], 86);
        assert!(v["records"][0].get("units").is_none());
    }

    #[test]
    fn json_includes_units_when_present() {
        let opt = ScoreOpt { per_unit: true, ..ScoreOpt::default() };
        let text = run(opt, OutputFormat::Json);
        let v: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(v["records"][1]["units"][0]["unit"], "a");
        assert_eq!(v["records"][1]["units"][0]["score"], 1);
    }
}
