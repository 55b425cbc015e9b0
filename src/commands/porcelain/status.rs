use crate::areas::repository::Repository;
use crate::artifacts::branch::branch_name::BranchName;
use crate::artifacts::status::status_info::StatusInfo;
use crate::errors::Result;

/// Everything `status` reports
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusReport {
    pub active_branch: BranchName,
    /// All branch names, sorted
    pub branches: Vec<BranchName>,
    pub info: StatusInfo,
}

impl Repository {
    pub fn status(&self) -> Result<StatusReport> {
        Ok(StatusReport {
            active_branch: self.graph.active_name().clone(),
            branches: self
                .graph
                .branches()
                .map(|branch| branch.name().clone())
                .collect(),
            info: self.status_info()?,
        })
    }
}
