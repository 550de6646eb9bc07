//! 拼音派生属性
//!
//! 数据库中的 `pinyin` 字段以 `/` 分隔多种写法，每种写法由单个空格分隔的音节组成，
//! 例如 `"Zhang San / Zhang3 San1"`。这里的函数都是纯函数，每次调用重新计算。

use crate::errors::{Result, RosterError};

/// 拆分出全部拼音写法，顺序与原字符串一致，至少返回一个元素
pub fn pinyin_full(raw: &str) -> Vec<String> {
    raw.split('/').map(|variant| variant.trim().to_string()).collect()
}

/// 计算每种写法的首字母缩写，与 [`pinyin_full`] 一一对应
///
/// 出现空音节（连续空格、空写法等）时返回 `InvalidPinyinFormat`，不做跳过处理。
pub fn pinyin_first(raw: &str) -> Result<Vec<String>> {
    pinyin_full(raw)
        .iter()
        .map(|variant| initials_of(variant))
        .collect()
}

fn initials_of(variant: &str) -> Result<String> {
    variant
        .split(' ')
        .map(|syllable| {
            syllable.trim().chars().next().ok_or_else(|| {
                RosterError::invalid_pinyin_format(format!(
                    "empty syllable in pinyin variant \"{variant}\""
                ))
            })
        })
        .collect()
}
