use crate::artifacts::fileset::FileSet;
use crate::artifacts::parameters::CommandParameters;
use crate::artifacts::repository::SvnRepository;
use crate::artifacts::results::{CommandOutcome, InfoOutcome, OperationKind};
use crate::provider::SvnProvider;
use crate::provider::error::ScmError;

impl SvnProvider {
    /// Structured `info` probe of a repository or working copy. Also used
    /// internally by the factory's working-copy url cross-check.
    pub fn info(
        &self,
        repository: &SvnRepository,
        file_set: &FileSet,
        parameters: &CommandParameters,
    ) -> Result<InfoOutcome, ScmError> {
        let command = self.registry().resolve(OperationKind::Info);

        match self.execute(command, repository, file_set, parameters)? {
            CommandOutcome::Info(outcome) => Ok(outcome),
            other => Err(ScmError::UnexpectedOutcome {
                operation: OperationKind::Info,
                actual: other.kind(),
            }),
        }
    }
}
