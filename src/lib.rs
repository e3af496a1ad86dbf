//! # flounder
//!
//! 计算 DNA/RNA 序列的 Flounder 得分。
//!
//! 得分由固定权重表逐字符累加得到，提供三种方式：
//!
//! - **普通打分**：每个字母按权重表计分，大小写无关，未知字符记 0
//! - **to-the-max**：在普通得分之上，再加上每个碱基所有 IUPAC 简并码的得分
//! - **密码子打分**：按三联体翻译为氨基酸，累加氨基酸字母的权重；
//!   末尾不足三个碱基的部分丢弃，终止密码子记 0
//!
//! 每种方式都有返回逐单元（碱基或密码子）得分的配套函数。
//!
//! ## 快速示例
//!
//! ```rust
//! use flounder::score;
//!
//! assert_eq!(score::score("GTAC"), 7);
//! assert_eq!(score::score_to_the_max("gtac"), 86);
//! assert_eq!(score::codon_score("AAAA"), 5);
//! assert_eq!(score::codon_scores("aaaA"), vec![("aaa", 5)]);
//! ```
//!
//! ## 模块说明
//!
//! - [`score`] — 权重表与打分函数
//! - [`io`] — FASTA / FASTQ / 纯文本输入
//! - [`batch`] — 基于 rayon 的批量并行打分
//! - [`report`] — TSV / JSON 输出

pub mod score;
pub mod io;
pub mod batch;
pub mod report;
pub mod logging;

pub use score::{codon_score, codon_scores, score, score_to_the_max, scores, scores_to_the_max, Method};
