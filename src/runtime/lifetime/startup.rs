use crate::errors::Result;
use crate::storage::Storage;
use std::sync::Arc;
use tracing::{debug, warn};

pub struct StartupContext {
    pub storage: Arc<dyn Storage>,
}

/// 检查学生的 grade_id 与所在班级的年级是否一致
///
/// 写入时不做该校验，这里只记录日志，不阻止启动。
async fn audit_grade_consistency(storage: &Arc<dyn Storage>) {
    match storage.list_grade_mismatched_students().await {
        Ok(students) if students.is_empty() => {
            debug!("All students agree with their class grade");
        }
        Ok(students) => {
            for student in &students {
                warn!(
                    "Student {} has grade_id {} but class {} belongs to another grade",
                    student.id, student.grade_id, student.class_id
                );
            }
            warn!("{} student(s) with inconsistent grade_id", students.len());
        }
        Err(e) => {
            warn!("Failed to audit student grades: {}", e);
        }
    }
}

/// 准备启动上下文
/// 打开存储并确保表结构存在，失败时直接返回错误以中止启动
pub async fn prepare_startup() -> Result<StartupContext> {
    let storage = crate::storage::create_storage().await?;
    warn!("Storage backend initialized and tables verified");

    audit_grade_consistency(&storage).await;

    Ok(StartupContext { storage })
}
