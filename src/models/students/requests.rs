use serde::{Deserialize, Deserializer};

// 创建学生请求
#[derive(Debug, Clone, Deserialize)]
pub struct CreateStudentRequest {
    pub id: String,
    pub grade_id: String,
    pub class_id: String,
    pub name: String,
    pub pinyin: String,
    pub gender: String,
    pub birthday: Option<String>,
    pub eduid: Option<String>,
}

// 更新学生请求，未填写的字段保持不变
//
// birthday / eduid 使用双层 Option：外层 None 表示不修改，Some(None) 表示清空。
// JSON 中缺省字段为 None，显式的 null 为 Some(None)。
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateStudentRequest {
    pub grade_id: Option<String>,
    pub class_id: Option<String>,
    pub name: Option<String>,
    pub pinyin: Option<String>,
    pub gender: Option<String>,
    #[serde(default, deserialize_with = "double_option")]
    pub birthday: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option")]
    pub eduid: Option<Option<String>>,
}

impl UpdateStudentRequest {
    pub fn is_empty(&self) -> bool {
        self.grade_id.is_none()
            && self.class_id.is_none()
            && self.name.is_none()
            && self.pinyin.is_none()
            && self.gender.is_none()
            && self.birthday.is_none()
            && self.eduid.is_none()
    }
}

/// 字段出现即为 Some，值为 null 时得到 Some(None)
fn double_option<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}
