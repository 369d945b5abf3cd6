use crate::artifacts::fileset::FileSet;
use crate::artifacts::parameters::CommandParameters;
use crate::artifacts::repository::SvnRepository;
use crate::artifacts::results::{CheckInOutcome, CommandOutcome, OperationKind};
use crate::provider::SvnProvider;
use crate::provider::error::ScmError;

impl SvnProvider {
    pub fn checkin(
        &self,
        repository: &SvnRepository,
        file_set: &FileSet,
        parameters: &CommandParameters,
    ) -> Result<CheckInOutcome, ScmError> {
        let command = self.registry().resolve(OperationKind::CheckIn);

        match self.execute(command, repository, file_set, parameters)? {
            CommandOutcome::CheckIn(outcome) => Ok(outcome),
            other => Err(ScmError::UnexpectedOutcome {
                operation: OperationKind::CheckIn,
                actual: other.kind(),
            }),
        }
    }
}
