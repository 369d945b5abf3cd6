use crate::artifacts::fileset::FileSet;
use crate::artifacts::parameters::CommandParameters;
use crate::artifacts::repository::SvnRepository;
use crate::artifacts::results::{CommandOutcome, OperationKind};

/// An executable backend command.
///
/// Implementations wrap one invocation of the backend tool: they build the
/// command line for their operation, run it against the working set, and
/// parse the output into the outcome variant of their kind. How the binary
/// is located, how credentials are supplied and how output is parsed are
/// entirely theirs; the dispatch core only calls `execute` and passes the
/// outcome through.
pub trait SvnCommand {
    fn execute(
        &self,
        repository: &SvnRepository,
        file_set: &FileSet,
        parameters: &CommandParameters,
    ) -> anyhow::Result<CommandOutcome>;
}

/// One executable command per operation kind for a backend variant.
///
/// Construction is a struct literal, so leaving out a kind is a compile
/// error rather than a runtime lookup failure. The original design spread
/// these over sixteen abstract getter methods; composing them into one
/// value keeps the variant swappable without inheritance.
pub struct CommandRegistry {
    pub add: Box<dyn SvnCommand>,
    pub blame: Box<dyn SvnCommand>,
    pub branch: Box<dyn SvnCommand>,
    pub changelog: Box<dyn SvnCommand>,
    pub checkin: Box<dyn SvnCommand>,
    pub checkout: Box<dyn SvnCommand>,
    pub diff: Box<dyn SvnCommand>,
    pub export: Box<dyn SvnCommand>,
    pub info: Box<dyn SvnCommand>,
    pub list: Box<dyn SvnCommand>,
    pub mkdir: Box<dyn SvnCommand>,
    pub remove: Box<dyn SvnCommand>,
    pub status: Box<dyn SvnCommand>,
    pub tag: Box<dyn SvnCommand>,
    pub untag: Box<dyn SvnCommand>,
    pub update: Box<dyn SvnCommand>,
}

impl CommandRegistry {
    /// The command implementing `operation` for this backend variant.
    pub fn resolve(&self, operation: OperationKind) -> &dyn SvnCommand {
        match operation {
            OperationKind::Add => self.add.as_ref(),
            OperationKind::Blame => self.blame.as_ref(),
            OperationKind::Branch => self.branch.as_ref(),
            OperationKind::ChangeLog => self.changelog.as_ref(),
            OperationKind::CheckIn => self.checkin.as_ref(),
            OperationKind::CheckOut => self.checkout.as_ref(),
            OperationKind::Diff => self.diff.as_ref(),
            OperationKind::Export => self.export.as_ref(),
            OperationKind::Info => self.info.as_ref(),
            OperationKind::List => self.list.as_ref(),
            OperationKind::Mkdir => self.mkdir.as_ref(),
            OperationKind::Remove => self.remove.as_ref(),
            OperationKind::Status => self.status.as_ref(),
            OperationKind::Tag => self.tag.as_ref(),
            OperationKind::Untag => self.untag.as_ref(),
            OperationKind::Update => self.update.as_ref(),
        }
    }
}
