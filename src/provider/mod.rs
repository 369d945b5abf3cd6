//! The Subversion provider core
//!
//! A [`SvnProvider`] turns location strings and working directories into
//! immutable repository references, and dispatches the abstract operation
//! set through a [`registry::CommandRegistry`] of backend commands. The
//! actual `svn` invocation lives behind the [`registry::SvnCommand`],
//! [`WorkingCopyUrlResolver`] and [`RemoteUrlProbe`] collaborator traits;
//! the core never spawns a process itself.
//!
//! Every call is synchronous and blocking. The provider holds no mutable
//! state, so sharing it across callers is safe as long as the commands
//! themselves are; overlapping operations against the same working tree
//! need external serialization.

pub mod error;
pub mod registry;

use crate::artifacts::fileset::FileSet;
use crate::artifacts::parameters::CommandParameters;
use crate::artifacts::repository::SvnRepository;
use crate::artifacts::results::{CommandOutcome, InfoOutcome};
use crate::artifacts::settings::SvnSettings;
use crate::artifacts::url;
use self::error::ScmError;
use self::registry::{CommandRegistry, SvnCommand};
use std::path::Path;

/// Scm type identifier of this provider.
pub const SCM_TYPE: &str = "svn";

/// Directory entry marking a working copy checkout.
pub const SCM_DIRECTORY: &str = ".svn";

/// Reads the repository url recorded in a working copy, e.g. by probing the
/// checkout metadata. Backend-specific.
pub trait WorkingCopyUrlResolver {
    fn resolve_url(&self, path: &Path) -> anyhow::Result<String>;
}

/// Probes whether a remote repository location exists, typically through an
/// info-style query against the remote. Backend-specific.
pub trait RemoteUrlProbe {
    fn remote_url_exist(
        &self,
        repository: &SvnRepository,
        parameters: &CommandParameters,
    ) -> anyhow::Result<bool>;
}

pub struct SvnProvider {
    registry: CommandRegistry,
    settings: SvnSettings,
    url_resolver: Box<dyn WorkingCopyUrlResolver>,
    remote_probe: Box<dyn RemoteUrlProbe>,
}

impl SvnProvider {
    pub fn new(
        registry: CommandRegistry,
        settings: SvnSettings,
        url_resolver: Box<dyn WorkingCopyUrlResolver>,
        remote_probe: Box<dyn RemoteUrlProbe>,
    ) -> Self {
        SvnProvider {
            registry,
            settings,
            url_resolver,
            remote_probe,
        }
    }

    pub fn settings(&self) -> &SvnSettings {
        &self.settings
    }

    pub(crate) fn registry(&self) -> &CommandRegistry {
        &self.registry
    }

    pub(crate) fn remote_probe(&self) -> &dyn RemoteUrlProbe {
        self.remote_probe.as_ref()
    }

    /// Builds a repository reference from a location string.
    ///
    /// When `working_directory` is given and the url is well formed, the
    /// `info` operation is additionally run against that directory and the
    /// first url it reports is compared with the input; a difference is a
    /// validation failure. This guards against stale manually-supplied
    /// urls.
    pub fn repository_from_url(
        &self,
        url: &str,
        working_directory: Option<&Path>,
    ) -> Result<SvnRepository, ScmError> {
        let (mut messages, repository) = url::parse_url(url, &self.settings).into_parts();

        if let (Some(repository), Some(working_directory)) = (repository.as_ref(), working_directory)
        {
            tracing::debug!(
                "checking that the svn info url field matches {}",
                working_directory.display()
            );

            let info = self.info(
                repository,
                &FileSet::new(working_directory.to_path_buf()),
                &CommandParameters::default(),
            )?;

            if let Some(info_url) = find_url_info_item(&info) {
                tracing::debug!("comparing: '{}' vs. '{}'", info_url, url);
                if info_url != url {
                    messages.push(format!(
                        "Scm url does not match the value returned by svn info ('{}' vs. '{}')",
                        info_url, url
                    ));
                }
            }
        }

        match repository {
            Some(repository) if messages.is_empty() => Ok(repository),
            _ => Err(ScmError::InvalidRepositoryUrl { messages }),
        }
    }

    /// Builds a repository reference from a directory already under version
    /// control, reading the url out of the checkout itself.
    pub fn repository_from_working_directory(
        &self,
        path: &Path,
    ) -> Result<SvnRepository, ScmError> {
        if !path.is_dir() {
            return Err(ScmError::NotADirectory {
                path: path.to_path_buf(),
            });
        }

        if !path.join(SCM_DIRECTORY).exists() {
            return Err(ScmError::NotACheckout {
                path: path.to_path_buf(),
            });
        }

        let url = self
            .url_resolver
            .resolve_url(path)
            .map_err(|source| ScmError::RepositoryResolutionFailed {
                path: path.to_path_buf(),
                source: source.into(),
            })?;

        self.repository_from_url(&url, None)
    }

    /// Non-throwing validation: the messages for `url`, empty when valid.
    pub fn validate_url(&self, url: &str, working_directory: Option<&Path>) -> Vec<String> {
        match self.repository_from_url(url, working_directory) {
            Ok(_) => Vec::new(),
            Err(ScmError::InvalidRepositoryUrl { messages }) => messages,
            Err(other) => vec![other.to_string()],
        }
    }

    /// Dispatches a resolved command against the working set.
    ///
    /// Pure delegation: the command's outcome is returned unmodified, its
    /// failure wrapped as [`ScmError::CommandExecutionFailed`].
    pub fn execute(
        &self,
        command: &dyn SvnCommand,
        repository: &SvnRepository,
        file_set: &FileSet,
        parameters: &CommandParameters,
    ) -> Result<CommandOutcome, ScmError> {
        command
            .execute(repository, file_set, parameters)
            .map_err(|error| ScmError::CommandExecutionFailed(error.into()))
    }
}

fn find_url_info_item(info: &InfoOutcome) -> Option<&str> {
    for item in &info.items {
        if let Some(url) = item.url.as_deref() {
            tracing::debug!("url found: {}", url);
            return Some(url);
        }
    }

    tracing::debug!(
        "url not found (command output={})",
        info.result.command_output
    );
    None
}
