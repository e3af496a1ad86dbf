//! 静态查找表：碱基权重、IUPAC 简并码、密码子翻译。
//!
//! 三张表都是编译期 `match`，无需初始化，可在任意线程并发只读访问。

/// 字母权重。只识别大写 ASCII 字母，其余字符（数字、标点、非 ASCII）权重为 0。
#[inline]
pub fn weight(c: char) -> u64 {
    match c {
        'A' => 1,
        'B' => 3,
        'C' => 3,
        'D' => 2,
        'E' => 1,
        'F' => 4,
        'G' => 2,
        'H' => 4,
        'I' => 1,
        'J' => 8,
        'K' => 5,
        'L' => 1,
        'M' => 3,
        'N' => 1,
        'O' => 1,
        'P' => 3,
        'Q' => 10,
        'R' => 1,
        'S' => 1,
        'T' => 1,
        'U' => 1,
        'V' => 4,
        'W' => 4,
        'X' => 8,
        'Y' => 4,
        'Z' => 10,
        _ => 0,
    }
}

/// 碱基对应的全部 IUPAC 简并码（不含碱基本身）。
/// 未收录的字符返回空串。
#[inline]
pub fn ambiguity_codes(base: char) -> &'static str {
    match base {
        'G' => "RSKBDVN",
        'T' | 'U' => "YWKBDHN",
        'A' => "RWMDHVN",
        'C' => "YSMBHVN",
        _ => "",
    }
}

/// 标准遗传密码（NCBI table 1），外加翻译结果唯一的 IUPAC 通配密码子。
/// 终止密码子翻译为 `*`，其权重为 0。键必须已是大写 DNA。
pub fn translate_codon(codon: &[u8; 3]) -> Option<char> {
    let aa = match codon {
        b"TTT" | b"TTC" | b"TTY" => 'F',
        b"TTA" | b"TTG" | b"TTR" => 'L',
        b"CTT" | b"CTC" | b"CTA" | b"CTG" | b"CTN" | b"YTR" => 'L',
        b"ATT" | b"ATC" | b"ATA" | b"ATH" => 'I',
        b"ATG" => 'M',
        b"GTT" | b"GTC" | b"GTA" | b"GTG" | b"GTN" => 'V',
        b"TCT" | b"TCC" | b"TCA" | b"TCG" | b"TCN" => 'S',
        b"AGT" | b"AGC" | b"AGY" => 'S',
        b"CCT" | b"CCC" | b"CCA" | b"CCG" | b"CCN" => 'P',
        b"ACT" | b"ACC" | b"ACA" | b"ACG" | b"ACN" => 'T',
        b"GCT" | b"GCC" | b"GCA" | b"GCG" | b"GCN" => 'A',
        b"TAT" | b"TAC" | b"TAY" => 'Y',
        b"TAA" | b"TAG" | b"TGA" | b"TAR" | b"TRA" => '*',
        b"CAT" | b"CAC" | b"CAY" => 'H',
        b"CAA" | b"CAG" | b"CAR" => 'Q',
        b"AAT" | b"AAC" | b"AAY" => 'N',
        b"AAA" | b"AAG" | b"AAR" => 'K',
        b"GAT" | b"GAC" | b"GAY" => 'D',
        b"GAA" | b"GAG" | b"GAR" => 'E',
        b"TGT" | b"TGC" | b"TGY" => 'C',
        b"TGG" => 'W',
        b"CGT" | b"CGC" | b"CGA" | b"CGG" | b"CGN" => 'R',
        b"AGA" | b"AGG" | b"AGR" | b"MGR" => 'R',
        b"GGT" | b"GGC" | b"GGA" | b"GGG" | b"GGN" => 'G',
        _ => return None,
    };
    Some(aa)
}

/// Case-insensitive wrapper over [`translate_codon`] for a codon given as text.
/// Anything that is not exactly three ASCII characters is unknown.
pub fn translate(codon: &str) -> Option<char> {
    let bytes = codon.as_bytes();
    if bytes.len() != 3 {
        return None;
    }
    let key = [
        bytes[0].to_ascii_uppercase(),
        bytes[1].to_ascii_uppercase(),
        bytes[2].to_ascii_uppercase(),
    ];
    translate_codon(&key)
}
