use crate::artifacts::fileset::FileSet;
use crate::artifacts::parameters::CommandParameters;
use crate::artifacts::repository::SvnRepository;
use crate::artifacts::results::{ChangeLogOutcome, CommandOutcome, OperationKind};
use crate::provider::SvnProvider;
use crate::provider::error::ScmError;

impl SvnProvider {
    pub fn changelog(
        &self,
        repository: &SvnRepository,
        file_set: &FileSet,
        parameters: &CommandParameters,
    ) -> Result<ChangeLogOutcome, ScmError> {
        let command = self.registry().resolve(OperationKind::ChangeLog);

        match self.execute(command, repository, file_set, parameters)? {
            CommandOutcome::ChangeLog(outcome) => Ok(outcome),
            other => Err(ScmError::UnexpectedOutcome {
                operation: OperationKind::ChangeLog,
                actual: other.kind(),
            }),
        }
    }
}
