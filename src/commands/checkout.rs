use crate::artifacts::fileset::FileSet;
use crate::artifacts::parameters::CommandParameters;
use crate::artifacts::repository::SvnRepository;
use crate::artifacts::results::{CheckOutOutcome, CommandOutcome, OperationKind};
use crate::provider::SvnProvider;
use crate::provider::error::ScmError;

impl SvnProvider {
    pub fn checkout(
        &self,
        repository: &SvnRepository,
        file_set: &FileSet,
        parameters: &CommandParameters,
    ) -> Result<CheckOutOutcome, ScmError> {
        let command = self.registry().resolve(OperationKind::CheckOut);

        match self.execute(command, repository, file_set, parameters)? {
            CommandOutcome::CheckOut(outcome) => Ok(outcome),
            other => Err(ScmError::UnexpectedOutcome {
                operation: OperationKind::CheckOut,
                actual: other.kind(),
            }),
        }
    }
}
