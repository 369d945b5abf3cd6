use crate::artifacts::fileset::FileSet;
use crate::artifacts::parameters::CommandParameters;
use crate::artifacts::repository::SvnRepository;
use crate::artifacts::results::{BlameOutcome, CommandOutcome, OperationKind};
use crate::provider::SvnProvider;
use crate::provider::error::ScmError;

impl SvnProvider {
    pub fn blame(
        &self,
        repository: &SvnRepository,
        file_set: &FileSet,
        parameters: &CommandParameters,
    ) -> Result<BlameOutcome, ScmError> {
        let command = self.registry().resolve(OperationKind::Blame);

        match self.execute(command, repository, file_set, parameters)? {
            CommandOutcome::Blame(outcome) => Ok(outcome),
            other => Err(ScmError::UnexpectedOutcome {
                operation: OperationKind::Blame,
                actual: other.kind(),
            }),
        }
    }
}
