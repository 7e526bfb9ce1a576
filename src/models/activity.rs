use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// 操作日志动作类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityAction {
    Validate,
}

impl ActivityAction {
    pub fn as_str(self) -> &'static str {
        match self {
            ActivityAction::Validate => "validate",
        }
    }
}

/// 一条审计日志
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivityEntry {
    pub actor_id: Option<Uuid>,
    pub store_id: Uuid,
    pub action: ActivityAction,
    pub target_type: String,
    pub target_id: Uuid,
    pub description: String,
}
