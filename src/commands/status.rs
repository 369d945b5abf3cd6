use crate::artifacts::fileset::FileSet;
use crate::artifacts::parameters::CommandParameters;
use crate::artifacts::repository::SvnRepository;
use crate::artifacts::results::{CommandOutcome, OperationKind, StatusOutcome};
use crate::provider::SvnProvider;
use crate::provider::error::ScmError;

impl SvnProvider {
    pub fn status(
        &self,
        repository: &SvnRepository,
        file_set: &FileSet,
        parameters: &CommandParameters,
    ) -> Result<StatusOutcome, ScmError> {
        let command = self.registry().resolve(OperationKind::Status);

        match self.execute(command, repository, file_set, parameters)? {
            CommandOutcome::Status(outcome) => Ok(outcome),
            other => Err(ScmError::UnexpectedOutcome {
                operation: OperationKind::Status,
                actual: other.kind(),
            }),
        }
    }
}
