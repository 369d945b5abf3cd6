use crate::artifacts::parameters::CommandParameters;
use crate::artifacts::repository::SvnRepository;
use crate::provider::SvnProvider;
use crate::provider::error::ScmError;

impl SvnProvider {
    /// Whether the repository's remote location exists. There is no
    /// generic outcome for this; the backend variant answers directly
    /// through its probe collaborator.
    pub fn remote_url_exist(
        &self,
        repository: &SvnRepository,
        parameters: &CommandParameters,
    ) -> Result<bool, ScmError> {
        self.remote_probe()
            .remote_url_exist(repository, parameters)
            .map_err(|error| ScmError::CommandExecutionFailed(error.into()))
    }
}
