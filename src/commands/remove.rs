use crate::artifacts::fileset::FileSet;
use crate::artifacts::parameters::CommandParameters;
use crate::artifacts::repository::SvnRepository;
use crate::artifacts::results::{CommandOutcome, OperationKind, RemoveOutcome};
use crate::provider::SvnProvider;
use crate::provider::error::ScmError;

impl SvnProvider {
    pub fn remove(
        &self,
        repository: &SvnRepository,
        file_set: &FileSet,
        parameters: &CommandParameters,
    ) -> Result<RemoveOutcome, ScmError> {
        let command = self.registry().resolve(OperationKind::Remove);

        match self.execute(command, repository, file_set, parameters)? {
            CommandOutcome::Remove(outcome) => Ok(outcome),
            other => Err(ScmError::UnexpectedOutcome {
                operation: OperationKind::Remove,
                actual: other.kind(),
            }),
        }
    }
}
