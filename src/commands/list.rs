use crate::artifacts::fileset::FileSet;
use crate::artifacts::parameters::CommandParameters;
use crate::artifacts::repository::SvnRepository;
use crate::artifacts::results::{CommandOutcome, ListOutcome, OperationKind};
use crate::provider::SvnProvider;
use crate::provider::error::ScmError;

impl SvnProvider {
    pub fn list(
        &self,
        repository: &SvnRepository,
        file_set: &FileSet,
        parameters: &CommandParameters,
    ) -> Result<ListOutcome, ScmError> {
        let command = self.registry().resolve(OperationKind::List);

        match self.execute(command, repository, file_set, parameters)? {
            CommandOutcome::List(outcome) => Ok(outcome),
            other => Err(ScmError::UnexpectedOutcome {
                operation: OperationKind::List,
                actual: other.kind(),
            }),
        }
    }
}
