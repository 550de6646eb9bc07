use serde::Deserialize;

// 创建班级请求
#[derive(Debug, Clone, Deserialize)]
pub struct CreateClassRequest {
    pub id: String,
    pub grade_id: String,
}

// 更新班级请求
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateClassRequest {
    pub grade_id: Option<String>,
}
