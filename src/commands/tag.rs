use crate::artifacts::fileset::FileSet;
use crate::artifacts::parameters::CommandParameters;
use crate::artifacts::repository::SvnRepository;
use crate::artifacts::results::{CommandOutcome, OperationKind, TagOutcome};
use crate::provider::SvnProvider;
use crate::provider::error::ScmError;

impl SvnProvider {
    pub fn tag(
        &self,
        repository: &SvnRepository,
        file_set: &FileSet,
        parameters: &CommandParameters,
    ) -> Result<TagOutcome, ScmError> {
        let command = self.registry().resolve(OperationKind::Tag);

        match self.execute(command, repository, file_set, parameters)? {
            CommandOutcome::Tag(outcome) => Ok(outcome),
            other => Err(ScmError::UnexpectedOutcome {
                operation: OperationKind::Tag,
                actual: other.kind(),
            }),
        }
    }
}
