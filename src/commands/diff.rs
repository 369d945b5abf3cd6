use crate::artifacts::fileset::FileSet;
use crate::artifacts::parameters::CommandParameters;
use crate::artifacts::repository::SvnRepository;
use crate::artifacts::results::{CommandOutcome, DiffOutcome, OperationKind};
use crate::provider::SvnProvider;
use crate::provider::error::ScmError;

impl SvnProvider {
    pub fn diff(
        &self,
        repository: &SvnRepository,
        file_set: &FileSet,
        parameters: &CommandParameters,
    ) -> Result<DiffOutcome, ScmError> {
        let command = self.registry().resolve(OperationKind::Diff);

        match self.execute(command, repository, file_set, parameters)? {
            CommandOutcome::Diff(outcome) => Ok(outcome),
            other => Err(ScmError::UnexpectedOutcome {
                operation: OperationKind::Diff,
                actual: other.kind(),
            }),
        }
    }
}
