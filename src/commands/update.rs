use crate::artifacts::fileset::FileSet;
use crate::artifacts::parameters::CommandParameters;
use crate::artifacts::repository::SvnRepository;
use crate::artifacts::results::{CommandOutcome, OperationKind, UpdateOutcome};
use crate::provider::SvnProvider;
use crate::provider::error::ScmError;

impl SvnProvider {
    pub fn update(
        &self,
        repository: &SvnRepository,
        file_set: &FileSet,
        parameters: &CommandParameters,
    ) -> Result<UpdateOutcome, ScmError> {
        let command = self.registry().resolve(OperationKind::Update);

        match self.execute(command, repository, file_set, parameters)? {
            CommandOutcome::Update(outcome) => Ok(outcome),
            other => Err(ScmError::UnexpectedOutcome {
                operation: OperationKind::Update,
                actual: other.kind(),
            }),
        }
    }
}
