use crate::networks::reactome::DIRECTION;
use crate::networks::regulation::{TYPE, UP_DOWN};

/// One (network, label column) combination to test; `section` names its
/// block in the nested result and the `interaction_database` column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelTask {
    pub section: String,
    pub network: String,
    pub label_column: String,
}

impl LabelTask {
    pub fn new(section: &str, network: &str, label_column: &str) -> Self {
        Self {
            section: section.to_string(),
            network: network.to_string(),
            label_column: label_column.to_string(),
        }
    }
}

pub fn default_tasks() -> Vec<LabelTask> {
    vec![
        LabelTask::new("reactome", "reactome", DIRECTION),
        LabelTask::new("tf_up_down", "tf", UP_DOWN),
        LabelTask::new("tf_type", "tf", TYPE),
    ]
}
