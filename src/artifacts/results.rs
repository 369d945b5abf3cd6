use chrono::{DateTime, Utc};
use derive_new::new;
use std::collections::BTreeMap;
use std::path::PathBuf;

/// The abstract operations of the provider.
///
/// Every backend variant supplies exactly one executable command per kind;
/// every command outcome names the kind it belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperationKind {
    Add,
    Blame,
    Branch,
    ChangeLog,
    CheckIn,
    CheckOut,
    Diff,
    Export,
    Info,
    List,
    Mkdir,
    Remove,
    Status,
    Tag,
    Untag,
    Update,
}

impl std::fmt::Display for OperationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            OperationKind::Add => "add",
            OperationKind::Blame => "blame",
            OperationKind::Branch => "branch",
            OperationKind::ChangeLog => "changelog",
            OperationKind::CheckIn => "checkin",
            OperationKind::CheckOut => "checkout",
            OperationKind::Diff => "diff",
            OperationKind::Export => "export",
            OperationKind::Info => "info",
            OperationKind::List => "list",
            OperationKind::Mkdir => "mkdir",
            OperationKind::Remove => "remove",
            OperationKind::Status => "status",
            OperationKind::Tag => "tag",
            OperationKind::Untag => "untag",
            OperationKind::Update => "update",
        };
        write!(f, "{}", name)
    }
}

/// Base result every operation carries: whether the backend command
/// succeeded, and its raw textual output.
#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct ScmResult {
    pub success: bool,
    pub command_output: String,
}

/// Per-file status as reported by backend commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileStatus {
    Added,
    CheckedIn,
    CheckedOut,
    Conflict,
    Deleted,
    Modified,
    Patched,
    Tagged,
    Updated,
    Unknown,
}

impl From<&FileStatus> for &str {
    fn from(status: &FileStatus) -> Self {
        match status {
            FileStatus::Added => "added",
            FileStatus::CheckedIn => "checked-in",
            FileStatus::CheckedOut => "checked-out",
            FileStatus::Conflict => "conflict",
            FileStatus::Deleted => "deleted",
            FileStatus::Modified => "modified",
            FileStatus::Patched => "patched",
            FileStatus::Tagged => "tagged",
            FileStatus::Updated => "updated",
            FileStatus::Unknown => "unknown",
        }
    }
}

impl std::fmt::Display for FileStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let status_str: &str = self.into();
        write!(f, "{}", status_str)
    }
}

/// A file touched by an operation, with the status the backend reported.
#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct ScmFile {
    pub path: PathBuf,
    pub status: FileStatus,
}

/// One line of blame annotation.
#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct BlameLine {
    pub revision: String,
    pub author: String,
    pub date: DateTime<Utc>,
}

/// One change-log entry.
#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct ChangeSet {
    pub revision: String,
    pub author: String,
    pub date: DateTime<Utc>,
    pub comment: String,
    pub files: Vec<ScmFile>,
}

/// A structured field block reported by an `info` probe of a repository or
/// working copy. The `url` field feeds the factory's working-copy
/// cross-check.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct InfoItem {
    pub path: Option<String>,
    pub url: Option<String>,
    pub repository_root: Option<String>,
    pub repository_uuid: Option<String>,
    pub revision: Option<String>,
    pub last_changed_author: Option<String>,
    pub last_changed_revision: Option<String>,
    pub last_changed_date: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct AddOutcome {
    pub result: ScmResult,
    pub added_files: Vec<ScmFile>,
}

#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct BlameOutcome {
    pub result: ScmResult,
    pub lines: Vec<BlameLine>,
}

#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct BranchOutcome {
    pub result: ScmResult,
    pub branched_files: Vec<ScmFile>,
}

#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct ChangeLogOutcome {
    pub result: ScmResult,
    pub change_sets: Vec<ChangeSet>,
}

#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct CheckInOutcome {
    pub result: ScmResult,
    pub checked_in_files: Vec<ScmFile>,
    pub revision: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct CheckOutOutcome {
    pub result: ScmResult,
    pub checked_out_files: Vec<ScmFile>,
    pub revision: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct DiffOutcome {
    pub result: ScmResult,
    pub changed_files: Vec<ScmFile>,
    pub differences: BTreeMap<PathBuf, String>,
    pub patch: String,
}

#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct ExportOutcome {
    pub result: ScmResult,
    pub exported_files: Vec<ScmFile>,
}

#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct InfoOutcome {
    pub result: ScmResult,
    pub items: Vec<InfoItem>,
}

#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct ListOutcome {
    pub result: ScmResult,
    pub files: Vec<ScmFile>,
}

#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct MkdirOutcome {
    pub result: ScmResult,
    pub created_directories: Vec<ScmFile>,
    pub revision: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct RemoveOutcome {
    pub result: ScmResult,
    pub removed_files: Vec<ScmFile>,
}

#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct StatusOutcome {
    pub result: ScmResult,
    pub changed_files: Vec<ScmFile>,
}

#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct TagOutcome {
    pub result: ScmResult,
    pub tagged_files: Vec<ScmFile>,
}

#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct UntagOutcome {
    pub result: ScmResult,
}

#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct UpdateOutcome {
    pub result: ScmResult,
    pub updated_files: Vec<ScmFile>,
    pub revision: Option<String>,
}

/// Tagged union over every operation's result.
///
/// A backend command returns the variant matching its operation kind; the
/// public operations narrow it back to the payload type by pattern
/// matching, so a mismatching variant is detectable instead of being an
/// unchecked cast.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandOutcome {
    Add(AddOutcome),
    Blame(BlameOutcome),
    Branch(BranchOutcome),
    ChangeLog(ChangeLogOutcome),
    CheckIn(CheckInOutcome),
    CheckOut(CheckOutOutcome),
    Diff(DiffOutcome),
    Export(ExportOutcome),
    Info(InfoOutcome),
    List(ListOutcome),
    Mkdir(MkdirOutcome),
    Remove(RemoveOutcome),
    Status(StatusOutcome),
    Tag(TagOutcome),
    Untag(UntagOutcome),
    Update(UpdateOutcome),
}

impl CommandOutcome {
    /// The operation kind this outcome belongs to.
    pub fn kind(&self) -> OperationKind {
        match self {
            CommandOutcome::Add(_) => OperationKind::Add,
            CommandOutcome::Blame(_) => OperationKind::Blame,
            CommandOutcome::Branch(_) => OperationKind::Branch,
            CommandOutcome::ChangeLog(_) => OperationKind::ChangeLog,
            CommandOutcome::CheckIn(_) => OperationKind::CheckIn,
            CommandOutcome::CheckOut(_) => OperationKind::CheckOut,
            CommandOutcome::Diff(_) => OperationKind::Diff,
            CommandOutcome::Export(_) => OperationKind::Export,
            CommandOutcome::Info(_) => OperationKind::Info,
            CommandOutcome::List(_) => OperationKind::List,
            CommandOutcome::Mkdir(_) => OperationKind::Mkdir,
            CommandOutcome::Remove(_) => OperationKind::Remove,
            CommandOutcome::Status(_) => OperationKind::Status,
            CommandOutcome::Tag(_) => OperationKind::Tag,
            CommandOutcome::Untag(_) => OperationKind::Untag,
            CommandOutcome::Update(_) => OperationKind::Update,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outcome_kind_matches_its_variant() {
        let result = ScmResult::new(true, String::new());

        let outcome = CommandOutcome::Add(AddOutcome::new(result.clone(), Vec::new()));
        assert_eq!(outcome.kind(), OperationKind::Add);

        let outcome = CommandOutcome::Untag(UntagOutcome::new(result));
        assert_eq!(outcome.kind(), OperationKind::Untag);
    }

    #[test]
    fn test_operation_kind_display_is_lowercase() {
        assert_eq!(OperationKind::ChangeLog.to_string(), "changelog");
        assert_eq!(OperationKind::CheckOut.to_string(), "checkout");
        assert_eq!(OperationKind::Mkdir.to_string(), "mkdir");
    }

    #[test]
    fn test_file_status_display() {
        assert_eq!(FileStatus::CheckedIn.to_string(), "checked-in");
        assert_eq!(FileStatus::Unknown.to_string(), "unknown");
    }
}
