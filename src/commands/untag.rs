use crate::artifacts::fileset::FileSet;
use crate::artifacts::parameters::CommandParameters;
use crate::artifacts::repository::RepositoryHandle;
use crate::artifacts::results::{CommandOutcome, OperationKind, UntagOutcome};
use crate::provider::SvnProvider;
use crate::provider::error::ScmError;

impl SvnProvider {
    /// Label removal is invoked with the higher-level repository handle;
    /// only the provider repository inside it reaches the command.
    pub fn untag(
        &self,
        repository: &RepositoryHandle,
        file_set: &FileSet,
        parameters: &CommandParameters,
    ) -> Result<UntagOutcome, ScmError> {
        let repository = repository.repository();
        let command = self.registry().resolve(OperationKind::Untag);

        match self.execute(command, repository, file_set, parameters)? {
            CommandOutcome::Untag(outcome) => Ok(outcome),
            other => Err(ScmError::UnexpectedOutcome {
                operation: OperationKind::Untag,
                actual: other.kind(),
            }),
        }
    }
}
