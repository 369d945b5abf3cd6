use crate::artifacts::repository::SvnRepository;
use crate::artifacts::settings::SvnSettings;

const TUNNEL_PREFIX: &str = "svn+";
const SCHEME_SEPARATOR: &str = "://";

/// Transport scheme of a Subversion repository location.
///
/// Classification happens in [`parse_url`]; a scheme value only ever exists
/// on a repository that passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UrlScheme {
    File,
    Http,
    Https,
    Svn,
    /// A `svn+<name>` tunnel, e.g. `svn+ssh`. Tunnels other than `ssh` must
    /// be configured under the `tunnels` section of the client config file.
    Tunnel(String),
}

impl std::fmt::Display for UrlScheme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UrlScheme::File => write!(f, "file"),
            UrlScheme::Http => write!(f, "http"),
            UrlScheme::Https => write!(f, "https"),
            UrlScheme::Svn => write!(f, "svn"),
            UrlScheme::Tunnel(name) => write!(f, "svn+{}", name),
        }
    }
}

/// Outcome of classifying a repository location string.
///
/// Either the message list is empty and a repository value is present, or
/// the messages say why the string was rejected. The pairing is fixed at
/// construction; there is no way to obtain a repository together with
/// messages.
#[derive(Debug)]
pub struct ValidationOutcome {
    messages: Vec<String>,
    repository: Option<SvnRepository>,
}

impl ValidationOutcome {
    fn valid(repository: SvnRepository) -> Self {
        ValidationOutcome {
            messages: Vec::new(),
            repository: Some(repository),
        }
    }

    fn invalid(message: String) -> Self {
        ValidationOutcome {
            messages: vec![message],
            repository: None,
        }
    }

    pub fn is_valid(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    pub fn repository(&self) -> Option<&SvnRepository> {
        self.repository.as_ref()
    }

    pub fn into_parts(self) -> (Vec<String>, Option<SvnRepository>) {
        (self.messages, self.repository)
    }
}

/// Classifies a Subversion repository url by scheme.
///
/// The rules are evaluated in order and the first matching prefix decides,
/// so a url beginning with `svn+ssh://` is handled by the tunnel rule and
/// never falls through to the plain `svn://` rule:
///
/// 1. `file` must continue with `file://`
/// 2. `https` must continue with `https://`
/// 3. `http` (not `https`) must continue with `http://`
/// 4. `svn+<tunnel>` must contain `://`; the `ssh` tunnel is built in, any
///    other tunnel name must carry a non-empty value under the `tunnels`
///    section of `settings`
/// 5. `svn` (not `svn+`) must continue with `svn://`
/// 6. anything else is not a svn url at all
///
/// A well-formed url is wrapped verbatim; no normalization is performed.
/// At most one message is produced per call.
pub fn parse_url(url: &str, settings: &SvnSettings) -> ValidationOutcome {
    match classify(url, settings) {
        Ok(scheme) => ValidationOutcome::valid(SvnRepository::new(url.to_string(), scheme)),
        Err(message) => ValidationOutcome::invalid(message),
    }
}

fn classify(url: &str, settings: &SvnSettings) -> Result<UrlScheme, String> {
    if url.starts_with("file") {
        if !url.starts_with("file://") {
            return Err("A svn 'file' url must be on the form 'file://[hostname]/'.".to_string());
        }

        Ok(UrlScheme::File)
    } else if url.starts_with("https") {
        if !url.starts_with("https://") {
            return Err("A svn 'http' url must be on the form 'https://'.".to_string());
        }

        Ok(UrlScheme::Https)
    } else if url.starts_with("http") {
        if !url.starts_with("http://") {
            return Err("A svn 'http' url must be on the form 'http://'.".to_string());
        }

        Ok(UrlScheme::Http)
    } else if url.starts_with(TUNNEL_PREFIX) {
        let Some(separator) = url.find(SCHEME_SEPARATOR) else {
            return Err("A svn 'svn+xxx' url must be on the form 'svn+xxx://'.".to_string());
        };

        let tunnel = &url[TUNNEL_PREFIX.len()..separator];

        // ssh is always an allowed tunnel
        if tunnel == "ssh" {
            return Ok(UrlScheme::Tunnel(tunnel.to_string()));
        }

        match settings.tunnel(tunnel) {
            Some(value) if !value.is_empty() => Ok(UrlScheme::Tunnel(tunnel.to_string())),
            _ => Err(format!(
                "The tunnel '{}' isn't defined in your subversion configuration file.",
                tunnel
            )),
        }
    } else if url.starts_with("svn") {
        if !url.starts_with("svn://") {
            return Err("A svn 'svn' url must be on the form 'svn://'.".to_string());
        }

        Ok(UrlScheme::Svn)
    } else {
        Err(format!("{} url isn't a valid svn URL.", url))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_fs::fixture::FileWriteStr;
    use assert_fs::prelude::PathChild;
    use proptest::prelude::*;
    use rstest::rstest;
    use std::path::PathBuf;

    fn empty_settings() -> SvnSettings {
        SvnSettings::new(Some(PathBuf::from("/path/that/does/not/exist")))
    }

    fn settings_with_tunnel(name: &str, value: &str) -> (assert_fs::TempDir, SvnSettings) {
        let dir = assert_fs::TempDir::new().expect("failed to create temp directory");
        dir.child("config")
            .write_str(&format!("[tunnels]\n{} = {}\n", name, value))
            .expect("failed to write config file");
        let settings = SvnSettings::new(Some(dir.path().to_path_buf()));
        (dir, settings)
    }

    #[test]
    fn test_file_url_is_valid_and_kept_verbatim() {
        let outcome = parse_url("file:///repo", &empty_settings());
        assert!(outcome.is_valid());

        let repository = outcome.repository().unwrap();
        assert_eq!(repository.url(), "file:///repo");
        assert_eq!(repository.scheme(), &UrlScheme::File);
    }

    #[test]
    fn test_http_and_https_urls_are_valid() {
        let outcome = parse_url("http://host/repo", &empty_settings());
        assert_eq!(outcome.repository().unwrap().scheme(), &UrlScheme::Http);

        let outcome = parse_url("https://host/repo", &empty_settings());
        assert_eq!(outcome.repository().unwrap().scheme(), &UrlScheme::Https);
    }

    #[test]
    fn test_svn_url_is_valid() {
        let outcome = parse_url("svn://host/repo", &empty_settings());
        assert_eq!(outcome.repository().unwrap().scheme(), &UrlScheme::Svn);
    }

    #[test]
    fn test_ssh_tunnel_needs_no_configuration() {
        let outcome = parse_url("svn+ssh://host/repo", &empty_settings());
        assert!(outcome.is_valid());
        assert_eq!(
            outcome.repository().unwrap().scheme(),
            &UrlScheme::Tunnel("ssh".to_string())
        );
    }

    #[rstest]
    #[case("file:/repo", "A svn 'file' url must be on the form 'file://[hostname]/'.")]
    #[case("file", "A svn 'file' url must be on the form 'file://[hostname]/'.")]
    #[case("https:/host/repo", "A svn 'http' url must be on the form 'https://'.")]
    #[case("http:/host/repo", "A svn 'http' url must be on the form 'http://'.")]
    #[case("svn:/host/repo", "A svn 'svn' url must be on the form 'svn://'.")]
    #[case("svn", "A svn 'svn' url must be on the form 'svn://'.")]
    #[case("svn+foo", "A svn 'svn+xxx' url must be on the form 'svn+xxx://'.")]
    #[case("svn+ssh", "A svn 'svn+xxx' url must be on the form 'svn+xxx://'.")]
    fn test_malformed_urls_yield_exactly_one_message(
        #[case] url: &str,
        #[case] expected: &str,
    ) {
        let outcome = parse_url(url, &empty_settings());
        assert!(!outcome.is_valid());
        assert_eq!(outcome.messages(), [expected.to_string()]);
        assert!(outcome.repository().is_none());
    }

    #[test]
    fn test_unknown_tunnel_is_rejected_without_configuration() {
        let outcome = parse_url("svn+foo://host/repo", &empty_settings());
        assert_eq!(
            outcome.messages(),
            ["The tunnel 'foo' isn't defined in your subversion configuration file.".to_string()]
        );
    }

    #[test]
    fn test_configured_tunnel_is_accepted() {
        let (_dir, settings) = settings_with_tunnel("foo", "ssh -q");
        let outcome = parse_url("svn+foo://host/repo", &settings);
        assert!(outcome.is_valid());
        assert_eq!(
            outcome.repository().unwrap().scheme(),
            &UrlScheme::Tunnel("foo".to_string())
        );
    }

    #[test]
    fn test_tunnel_with_empty_value_is_rejected() {
        let (_dir, settings) = settings_with_tunnel("foo", "");
        let outcome = parse_url("svn+foo://host/repo", &settings);
        assert_eq!(
            outcome.messages(),
            ["The tunnel 'foo' isn't defined in your subversion configuration file.".to_string()]
        );
    }

    #[test]
    fn test_empty_tunnel_name_is_rejected() {
        let outcome = parse_url("svn+://host/repo", &empty_settings());
        assert_eq!(
            outcome.messages(),
            ["The tunnel '' isn't defined in your subversion configuration file.".to_string()]
        );
    }

    #[test]
    fn test_unrecognized_scheme_is_rejected() {
        let outcome = parse_url("bzr://host/repo", &empty_settings());
        assert_eq!(
            outcome.messages(),
            ["bzr://host/repo url isn't a valid svn URL.".to_string()]
        );
    }

    #[test]
    fn test_empty_url_is_rejected() {
        let outcome = parse_url("", &empty_settings());
        assert_eq!(outcome.messages(), [" url isn't a valid svn URL.".to_string()]);
    }

    // Strategy for urls that don't begin with any recognized scheme prefix
    fn unrecognized_url_strategy() -> impl Strategy<Value = String> {
        prop::string::string_regex("[a-z0-9]{1,12}(://[a-z0-9./-]{0,20})?")
            .unwrap()
            .prop_filter("must not start with a recognized scheme prefix", |url| {
                !url.starts_with("file") && !url.starts_with("http") && !url.starts_with("svn")
            })
    }

    // Strategy for well-formed urls of every scheme
    fn valid_url_strategy() -> impl Strategy<Value = String> {
        prop::string::string_regex("(file|http|https|svn|svn\\+ssh)://[a-z0-9./-]{1,20}").unwrap()
    }

    proptest! {
        #[test]
        fn prop_unrecognized_urls_yield_one_trailing_message(url in unrecognized_url_strategy()) {
            let outcome = parse_url(&url, &empty_settings());
            prop_assert_eq!(outcome.messages().len(), 1);
            prop_assert!(outcome.messages()[0].ends_with("isn't a valid svn URL."));
            prop_assert!(outcome.repository().is_none());
        }

        #[test]
        fn prop_valid_urls_round_trip_unmodified(url in valid_url_strategy()) {
            let outcome = parse_url(&url, &empty_settings());
            prop_assert!(outcome.is_valid());
            prop_assert_eq!(outcome.repository().unwrap().url(), url.as_str());
        }

        #[test]
        fn prop_repository_is_present_iff_no_messages(url in ".{0,30}") {
            let outcome = parse_url(&url, &empty_settings());
            prop_assert_eq!(outcome.messages().is_empty(), outcome.repository().is_some());
        }
    }
}
