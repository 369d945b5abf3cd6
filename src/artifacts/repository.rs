use crate::artifacts::url::UrlScheme;
use derive_new::new;

/// An immutable reference to a Subversion repository.
///
/// Wraps the location string exactly as it was supplied (no normalization)
/// together with the scheme the validator classified it under. Values are
/// created only by url parsing or the provider factory methods and never
/// mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SvnRepository {
    url: String,
    scheme: UrlScheme,
}

impl SvnRepository {
    pub(crate) fn new(url: String, scheme: UrlScheme) -> Self {
        SvnRepository { url, scheme }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn scheme(&self) -> &UrlScheme {
        &self.scheme
    }
}

impl std::fmt::Display for SvnRepository {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.url)
    }
}

/// Higher-level repository handle pairing a scm type with the provider
/// repository. Label removal is invoked with this richer handle; the
/// provider unwraps the inner repository before dispatching.
#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct RepositoryHandle {
    scm_type: String,
    repository: SvnRepository,
}

impl RepositoryHandle {
    pub fn scm_type(&self) -> &str {
        &self.scm_type
    }

    pub fn repository(&self) -> &SvnRepository {
        &self.repository
    }
}
