use crate::artifacts::fileset::FileSet;
use crate::artifacts::parameters::CommandParameters;
use crate::artifacts::repository::SvnRepository;
use crate::artifacts::results::{BranchOutcome, CommandOutcome, OperationKind};
use crate::provider::SvnProvider;
use crate::provider::error::ScmError;

impl SvnProvider {
    pub fn branch(
        &self,
        repository: &SvnRepository,
        file_set: &FileSet,
        parameters: &CommandParameters,
    ) -> Result<BranchOutcome, ScmError> {
        let command = self.registry().resolve(OperationKind::Branch);

        match self.execute(command, repository, file_set, parameters)? {
            CommandOutcome::Branch(outcome) => Ok(outcome),
            other => Err(ScmError::UnexpectedOutcome {
                operation: OperationKind::Branch,
                actual: other.kind(),
            }),
        }
    }
}
