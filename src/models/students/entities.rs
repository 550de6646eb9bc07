use serde::{Deserialize, Serialize};

use crate::errors::Result;
use crate::utils::pinyin;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Student {
    // 学号
    pub id: String,
    // 年级ID（独立于班级所属年级，写入时不做一致性校验）
    pub grade_id: String,
    // 班级ID
    pub class_id: String,
    // 姓名
    pub name: String,
    // 拼音原始字符串
    pub pinyin: String,
    // 性别
    pub gender: String,
    // 生日，形如 YYYY-MM-DD
    pub birthday: Option<String>,
    // 教育ID
    pub eduid: Option<String>,
}

impl Student {
    /// 全部拼音写法
    pub fn pinyin_full(&self) -> Vec<String> {
        pinyin::pinyin_full(&self.pinyin)
    }

    /// 每种拼音写法的首字母缩写
    pub fn pinyin_first(&self) -> Result<Vec<String>> {
        pinyin::pinyin_first(&self.pinyin)
    }
}
