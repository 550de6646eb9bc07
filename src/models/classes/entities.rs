use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Class {
    // 班级ID
    pub id: String,
    // 所属年级ID
    pub grade_id: String,
}
