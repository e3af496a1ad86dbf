//! Flounder 打分。
//!
//! 三种打分方式共用 [`tables`] 中的静态表：
//! - 普通打分：逐字符累加权重
//! - to-the-max：再加上每个碱基所有 IUPAC 简并码的权重
//! - 密码子打分：按三联体翻译成氨基酸后累加氨基酸字母的权重
//!
//! 所有函数对任意输入都有定义，不认识的字符记 0 分，从不报错。

pub mod tables;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

pub use tables::{ambiguity_codes, translate, weight};

/// Case-insensitive weight of one character.
#[inline]
fn base_score(c: char) -> u64 {
    weight(c.to_ascii_uppercase())
}

#[inline]
fn max_score(c: char) -> u64 {
    let up = c.to_ascii_uppercase();
    weight(up) + ambiguity_codes(up).chars().map(weight).sum::<u64>()
}

pub fn score(sequence: &str) -> u64 {
    sequence.chars().map(base_score).sum()
}

/// 每个字符一项，保留原始大小写。
pub fn scores(sequence: &str) -> Vec<(char, u64)> {
    sequence.chars().map(|c| (c, base_score(c))).collect()
}

/// 普通得分加上每个碱基全部 IUPAC 简并码的得分。
pub fn score_to_the_max(sequence: &str) -> u64 {
    sequence.chars().map(max_score).sum()
}

pub fn scores_to_the_max(sequence: &str) -> Vec<(char, u64)> {
    sequence.chars().map(|c| (c, max_score(c))).collect()
}

/// 按字符（不是字节）切分的非重叠三联体，末尾不足 3 个字符的部分丢弃。
/// 返回的切片保留原始大小写。
pub fn codons(sequence: &str) -> impl Iterator<Item = &str> + '_ {
    let mut start = 0;
    sequence.char_indices().enumerate().filter_map(move |(n, (i, c))| {
        if n % 3 != 2 {
            return None;
        }
        let s = start;
        start = i + c.len_utf8();
        Some(&sequence[s..start])
    })
}

#[inline]
fn codon_weight(codon: &str) -> u64 {
    translate(codon).map_or(0, weight)
}

/// 密码子得分。终止密码子和无法翻译的三联体贡献 0，打分继续往后进行。
pub fn codon_score(sequence: &str) -> u64 {
    codons(sequence).map(codon_weight).sum()
}

/// 每个完整密码子一项。键是原始子串（保留大小写），分值与大小写无关。
pub fn codon_scores(sequence: &str) -> Vec<(&str, u64)> {
    codons(sequence).map(|c| (c, codon_weight(c))).collect()
}

/// One entry of a per-unit breakdown: a character, or a codon in codon mode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnitScore {
    pub unit: String,
    pub score: u64,
}

/// 打分方式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Method {
    #[default]
    Plain,
    #[value(name = "max", alias = "to-the-max")]
    #[serde(rename = "max")]
    ToTheMax,
    Codon,
}

impl Method {
    pub fn name(self) -> &'static str {
        match self {
            Method::Plain => "plain",
            Method::ToTheMax => "max",
            Method::Codon => "codon",
        }
    }

    pub fn score(self, sequence: &str) -> u64 {
        match self {
            Method::Plain => score(sequence),
            Method::ToTheMax => score_to_the_max(sequence),
            Method::Codon => codon_score(sequence),
        }
    }

    pub fn units(self, sequence: &str) -> Vec<UnitScore> {
        match self {
            Method::Plain => char_units(scores(sequence)),
            Method::ToTheMax => char_units(scores_to_the_max(sequence)),
            Method::Codon => codon_scores(sequence)
                .into_iter()
                .map(|(unit, score)| UnitScore { unit: unit.to_string(), score })
                .collect(),
        }
    }
}

fn char_units(pairs: Vec<(char, u64)>) -> Vec<UnitScore> {
    pairs
        .into_iter()
        .map(|(c, score)| UnitScore { unit: c.to_string(), score })
        .collect()
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Method {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "plain" => Ok(Method::Plain),
            "max" | "to-the-max" => Ok(Method::ToTheMax),
            "codon" => Ok(Method::Codon),
            other => Err(anyhow::anyhow!("unknown scoring method '{}'", other)),
        }
    }
}
