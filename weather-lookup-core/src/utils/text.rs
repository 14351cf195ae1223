//! 查询文本处理

/// 可提交查询的最少字符数（去除首尾空白后按字符计）
pub const MIN_QUERY_CHARS: usize = 2;

/// 去除首尾空白
pub fn normalize_query(text: &str) -> &str {
    text.trim()
}

/// 规范化后的查询是否达到最小长度
pub fn is_submittable(text: &str) -> bool {
    normalize_query(text).chars().count() >= MIN_QUERY_CHARS
}

/// 每个单词首字母大写，其余字符保持原样
///
/// 按单个空格切分，连续空格会原样保留。
pub fn capitalize_words(text: &str) -> String {
    text.split(' ')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
