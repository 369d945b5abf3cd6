use crate::artifacts::fileset::FileSet;
use crate::artifacts::parameters::CommandParameters;
use crate::artifacts::repository::SvnRepository;
use crate::artifacts::results::{CommandOutcome, MkdirOutcome, OperationKind};
use crate::provider::SvnProvider;
use crate::provider::error::ScmError;

impl SvnProvider {
    pub fn mkdir(
        &self,
        repository: &SvnRepository,
        file_set: &FileSet,
        parameters: &CommandParameters,
    ) -> Result<MkdirOutcome, ScmError> {
        let command = self.registry().resolve(OperationKind::Mkdir);

        match self.execute(command, repository, file_set, parameters)? {
            CommandOutcome::Mkdir(outcome) => Ok(outcome),
            other => Err(ScmError::UnexpectedOutcome {
                operation: OperationKind::Mkdir,
                actual: other.kind(),
            }),
        }
    }
}
