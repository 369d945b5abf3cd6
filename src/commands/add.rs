use crate::artifacts::fileset::FileSet;
use crate::artifacts::parameters::CommandParameters;
use crate::artifacts::repository::SvnRepository;
use crate::artifacts::results::{AddOutcome, CommandOutcome, OperationKind};
use crate::provider::SvnProvider;
use crate::provider::error::ScmError;

impl SvnProvider {
    pub fn add(
        &self,
        repository: &SvnRepository,
        file_set: &FileSet,
        parameters: &CommandParameters,
    ) -> Result<AddOutcome, ScmError> {
        let command = self.registry().resolve(OperationKind::Add);

        match self.execute(command, repository, file_set, parameters)? {
            CommandOutcome::Add(outcome) => Ok(outcome),
            other => Err(ScmError::UnexpectedOutcome {
                operation: OperationKind::Add,
                actual: other.kind(),
            }),
        }
    }
}
