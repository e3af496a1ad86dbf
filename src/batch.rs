//! 批量打分：在 rayon 线程池上并行处理多条序列，结果保持输入顺序。

use anyhow::{anyhow, Result};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::io::SeqRecord;
use crate::score::{Method, UnitScore};

#[derive(Clone, Copy, Debug)]
pub struct ScoreOpt {
    pub method: Method,
    /// Also report per-base (or per-codon) scores.
    pub per_unit: bool,
    /// Worker threads; 0 lets rayon decide.
    pub threads: usize,
}

impl Default for ScoreOpt {
    fn default() -> Self {
        Self { method: Method::Plain, per_unit: false, threads: 1 }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordScore {
    pub id: String,
    /// Sequence length in characters.
    pub length: usize,
    pub method: Method,
    pub score: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub units: Option<Vec<UnitScore>>,
}

pub fn score_one(rec: &SeqRecord, opt: &ScoreOpt) -> RecordScore {
    RecordScore {
        id: rec.id.clone(),
        length: rec.seq.chars().count(),
        method: opt.method,
        score: opt.method.score(&rec.seq),
        units: opt.per_unit.then(|| opt.method.units(&rec.seq)),
    }
}

pub fn score_records(records: &[SeqRecord], opt: &ScoreOpt) -> Result<Vec<RecordScore>> {
    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(opt.threads)
        .build()
        .map_err(|e| anyhow!("failed to configure thread pool: {}", e))?;

    log::info!(
        "scoring {} sequences (method={}, threads={})",
        records.len(),
        opt.method,
        pool.current_num_threads()
    );
    let out: Vec<RecordScore> = pool.install(|| records.par_iter().map(|r| score_one(r, opt)).collect());
    Ok(out)
}
