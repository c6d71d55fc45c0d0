//! Submission service
//!
//! Provides unified business logic for the submit flow, shared between
//! the TUI and CLI interfaces: validate the raw input, check it against
//! the session list, then hand the prepared URL to the shortener backend.

use chrono::Utc;
use tracing::info;
use uuid::Uuid;

use super::shortener::ShortenerProvider;
use crate::errors::{LinksnipError, Result};
use crate::session::{SessionList, ShortenedLink};
use crate::utils::alias::normalize_alias;
use crate::utils::url_validator::normalize_url;

// ============ Request DTOs ============

/// Raw submit input, exactly as typed
#[derive(Debug, Clone, Default)]
pub struct SubmissionRequest {
    /// URL field content
    pub url: String,
    /// Alias field content (empty = no alias)
    pub alias: String,
}

/// Validated submission, ready to hand to a backend
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreparedSubmission {
    /// Normalized, scheme-qualified original URL
    pub original_url: String,
    /// Validated alias, if one was provided
    pub alias: Option<String>,
}

// ============ SubmissionService Implementation ============

/// Service for the submit flow
///
/// Validation is synchronous and touches no I/O; only the actual
/// shortening call awaits.
#[derive(Clone)]
pub struct SubmissionService {
    provider: ShortenerProvider,
}

impl SubmissionService {
    /// Create a new SubmissionService instance
    pub fn new(provider: ShortenerProvider) -> Self {
        Self { provider }
    }

    /// Name of the backend behind this service
    pub fn backend_name(&self) -> &'static str {
        self.provider.backend_name()
    }

    /// Whether the backend accepts a custom alias
    pub fn supports_alias(&self) -> bool {
        self.provider.supports_alias()
    }

    /// Whether the backend produces demo links that cannot be visited
    pub fn is_demo(&self) -> bool {
        self.provider.is_demo()
    }

    /// Validate raw input against the current session list
    ///
    /// Checks run in a fixed order: URL normalization, alias format and
    /// length, alias availability, then the duplicate-URL check. The
    /// first failure wins and no shortening call is made.
    pub fn prepare(
        &self,
        request: &SubmissionRequest,
        list: &SessionList,
    ) -> Result<PreparedSubmission> {
        let original_url = normalize_url(&request.url)?;

        let alias = normalize_alias(&request.alias)?;
        if let Some(ref alias) = alias
            && list.is_code_taken(alias)
        {
            return Err(LinksnipError::alias_taken(alias.clone()));
        }

        if list.contains_original_url(&original_url) {
            return Err(LinksnipError::duplicate_submission(original_url));
        }

        Ok(PreparedSubmission {
            original_url,
            alias,
        })
    }

    /// Shorten a prepared submission into a session record
    pub async fn shorten(&self, prepared: PreparedSubmission) -> Result<ShortenedLink> {
        let result = self
            .provider
            .shorten(&prepared.original_url, prepared.alias.as_deref())
            .await?;

        let link = ShortenedLink {
            id: Uuid::new_v4(),
            original_url: prepared.original_url,
            short_url: result.short_url,
            short_code: result.short_code,
            created_at: Utc::now(),
            clicks: result.clicks,
        };

        info!(
            "Submission: shortened '{}' -> '{}'",
            link.original_url, link.short_url
        );
        Ok(link)
    }
}

// ============ Submission state machine ============

/// Lifecycle of one submit attempt
///
/// `Succeeded` and `Failed` are momentary: the event handler applies
/// their side effects, then `settle()` returns the flow to `Idle`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmissionState {
    #[default]
    Idle,
    Validating,
    Submitting,
    Succeeded,
    Failed,
}

/// Tracks the submit lifecycle and the last displayed error
///
/// Owned by a single event loop; transitions never race.
#[derive(Debug, Default)]
pub struct SubmissionFlow {
    state: SubmissionState,
    last_error: Option<LinksnipError>,
}

impl SubmissionFlow {
    pub fn new() -> Self {
        Self::default()
    }

    /// Begin a submit attempt
    ///
    /// Returns false while a submission is already in flight; the
    /// trigger is ignored, not queued.
    pub fn trigger(&mut self) -> bool {
        if self.state == SubmissionState::Submitting {
            return false;
        }
        self.state = SubmissionState::Validating;
        true
    }

    /// Validation failed; no shortening call was made
    pub fn validation_failed(&mut self, err: LinksnipError) {
        self.state = SubmissionState::Failed;
        self.last_error = Some(err);
    }

    /// Validation passed; the shortening call is now in flight
    pub fn submit_started(&mut self) {
        self.state = SubmissionState::Submitting;
    }

    /// The shortening call produced a record
    pub fn submit_succeeded(&mut self) {
        self.state = SubmissionState::Succeeded;
        self.last_error = None;
    }

    /// The shortening call failed; input stays intact for a retry
    pub fn submit_failed(&mut self, err: LinksnipError) {
        self.state = SubmissionState::Failed;
        self.last_error = Some(err);
    }

    /// Return to Idle after a terminal state's side effects ran
    ///
    /// The displayed error survives settling; it is cleared by the next
    /// URL keystroke.
    pub fn settle(&mut self) {
        if matches!(
            self.state,
            SubmissionState::Succeeded | SubmissionState::Failed
        ) {
            self.state = SubmissionState::Idle;
        }
    }

    /// A URL keystroke clears any displayed error
    pub fn input_edited(&mut self) {
        self.last_error = None;
    }

    pub fn state(&self) -> SubmissionState {
        self.state
    }

    pub fn is_submitting(&self) -> bool {
        self.state == SubmissionState::Submitting
    }

    pub fn last_error(&self) -> Option<&LinksnipError> {
        self.last_error.as_ref()
    }

    /// Human-readable message for the last error, if any
    pub fn error_message(&self) -> Option<&'static str> {
        self.last_error.as_ref().map(|e| e.user_message())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use async_trait::async_trait;

    use super::*;
    use crate::services::shortener::{ShortenResult, Shortener};

    /// Backend stub with a canned reply
    struct FixedBackend {
        reply: Result<ShortenResult>,
    }

    impl FixedBackend {
        fn ok(short_url: &str) -> Self {
            Self {
                reply: Ok(ShortenResult {
                    short_url: short_url.to_string(),
                    short_code: None,
                    clicks: None,
                }),
            }
        }

        fn failing() -> Self {
            Self {
                reply: Err(LinksnipError::all_providers_unavailable("stub")),
            }
        }
    }

    #[async_trait]
    impl Shortener for FixedBackend {
        async fn shorten(&self, _long_url: &str, alias: Option<&str>) -> Result<ShortenResult> {
            match &self.reply {
                Ok(result) => {
                    let mut result = result.clone();
                    if let Some(alias) = alias {
                        result.short_code = Some(alias.to_string());
                    }
                    Ok(result)
                }
                Err(_) => Err(LinksnipError::all_providers_unavailable("stub")),
            }
        }

        fn name(&self) -> &'static str {
            "Fixed"
        }

        fn supports_alias(&self) -> bool {
            true
        }

        fn is_demo(&self) -> bool {
            true
        }
    }

    fn service_with(backend: FixedBackend) -> SubmissionService {
        SubmissionService::new(ShortenerProvider::with_backend(Arc::new(backend)))
    }

    fn request(url: &str, alias: &str) -> SubmissionRequest {
        SubmissionRequest {
            url: url.to_string(),
            alias: alias.to_string(),
        }
    }

    fn link_with(original_url: &str, code: Option<&str>) -> ShortenedLink {
        ShortenedLink {
            id: Uuid::new_v4(),
            original_url: original_url.to_string(),
            short_url: "https://sho.rt/abc".to_string(),
            short_code: code.map(String::from),
            created_at: Utc::now(),
            clicks: None,
        }
    }

    // ============ prepare ============

    #[test]
    fn test_prepare_normalizes_bare_domain() {
        let service = service_with(FixedBackend::ok("https://sho.rt/a"));
        let list = SessionList::new();

        let prepared = service.prepare(&request("example.com", ""), &list).unwrap();

        assert_eq!(prepared.original_url, "https://example.com");
        assert_eq!(prepared.alias, None);
    }

    #[test]
    fn test_prepare_rejects_empty_input() {
        let service = service_with(FixedBackend::ok("https://sho.rt/a"));
        let list = SessionList::new();

        let err = service.prepare(&request("   ", ""), &list).unwrap_err();
        assert!(matches!(err, LinksnipError::EmptyInput(_)));
    }

    #[test]
    fn test_prepare_rejects_bad_scheme() {
        let service = service_with(FixedBackend::ok("https://sho.rt/a"));
        let list = SessionList::new();

        let err = service.prepare(&request("ftp://x", ""), &list).unwrap_err();
        assert!(matches!(err, LinksnipError::InvalidUrl(_)));
    }

    #[test]
    fn test_prepare_validates_alias() {
        let service = service_with(FixedBackend::ok("https://sho.rt/a"));
        let list = SessionList::new();

        let err = service
            .prepare(&request("https://example.com", "ab"), &list)
            .unwrap_err();
        assert!(matches!(err, LinksnipError::AliasTooShort(_)));

        let err = service
            .prepare(&request("https://example.com", "ab$"), &list)
            .unwrap_err();
        assert!(matches!(err, LinksnipError::InvalidAliasFormat(_)));
    }

    #[test]
    fn test_prepare_rejects_taken_alias() {
        let service = service_with(FixedBackend::ok("https://sho.rt/a"));
        let mut list = SessionList::new();
        list.prepend(link_with("https://other.com", Some("mylink")));

        let err = service
            .prepare(&request("https://example.com", "mylink"), &list)
            .unwrap_err();
        assert!(matches!(err, LinksnipError::AliasTaken(_)));
    }

    #[test]
    fn test_prepare_rejects_duplicate_original_url() {
        let service = service_with(FixedBackend::ok("https://sho.rt/a"));
        let mut list = SessionList::new();
        list.prepend(link_with("https://example.com", None));

        // Normalization happens before the duplicate check, so the bare
        // domain collides with the stored qualified URL.
        let err = service.prepare(&request("example.com", ""), &list).unwrap_err();
        assert!(matches!(err, LinksnipError::DuplicateSubmission(_)));
    }

    #[test]
    fn test_prepare_whitespace_alias_means_no_alias() {
        let service = service_with(FixedBackend::ok("https://sho.rt/a"));
        let list = SessionList::new();

        let prepared = service
            .prepare(&request("https://example.com", "   "), &list)
            .unwrap();
        assert_eq!(prepared.alias, None);
    }

    // ============ shorten ============

    #[tokio::test]
    async fn test_shorten_builds_record_from_backend_result() {
        let service = service_with(FixedBackend::ok("https://sho.rt/abc123"));
        let prepared = PreparedSubmission {
            original_url: "https://example.com".to_string(),
            alias: None,
        };

        let link = service.shorten(prepared).await.unwrap();

        assert_eq!(link.original_url, "https://example.com");
        assert_eq!(link.short_url, "https://sho.rt/abc123");
        assert!(link.clicks.is_none());
    }

    #[tokio::test]
    async fn test_shorten_passes_alias_to_backend() {
        let service = service_with(FixedBackend::ok("https://sho.rt/mylink"));
        let prepared = PreparedSubmission {
            original_url: "https://example.com".to_string(),
            alias: Some("mylink".to_string()),
        };

        let link = service.shorten(prepared).await.unwrap();
        assert_eq!(link.short_code.as_deref(), Some("mylink"));
    }

    #[tokio::test]
    async fn test_shorten_surfaces_backend_failure() {
        let service = service_with(FixedBackend::failing());
        let prepared = PreparedSubmission {
            original_url: "https://example.com".to_string(),
            alias: None,
        };

        let err = service.shorten(prepared).await.unwrap_err();
        assert!(matches!(err, LinksnipError::AllProvidersUnavailable(_)));
    }

    #[tokio::test]
    async fn test_shorten_assigns_fresh_ids() {
        let service = service_with(FixedBackend::ok("https://sho.rt/abc"));

        let a = service
            .shorten(PreparedSubmission {
                original_url: "https://one.example".to_string(),
                alias: None,
            })
            .await
            .unwrap();
        let b = service
            .shorten(PreparedSubmission {
                original_url: "https://two.example".to_string(),
                alias: None,
            })
            .await
            .unwrap();

        assert_ne!(a.id, b.id);
    }

    // ============ SubmissionFlow ============

    #[test]
    fn test_flow_trigger_ignored_while_submitting() {
        let mut flow = SubmissionFlow::new();

        assert!(flow.trigger());
        flow.submit_started();
        assert!(flow.is_submitting());

        // Second trigger is dropped, state unchanged
        assert!(!flow.trigger());
        assert_eq!(flow.state(), SubmissionState::Submitting);
    }

    #[test]
    fn test_flow_validation_failure_settles_to_idle_with_error() {
        let mut flow = SubmissionFlow::new();

        flow.trigger();
        flow.validation_failed(LinksnipError::empty_input());
        assert_eq!(flow.state(), SubmissionState::Failed);

        flow.settle();
        assert_eq!(flow.state(), SubmissionState::Idle);
        assert!(flow.error_message().is_some());
    }

    #[test]
    fn test_flow_success_clears_error() {
        let mut flow = SubmissionFlow::new();
        flow.trigger();
        flow.validation_failed(LinksnipError::empty_input());
        flow.settle();

        flow.trigger();
        flow.submit_started();
        flow.submit_succeeded();
        assert_eq!(flow.state(), SubmissionState::Succeeded);
        assert!(flow.error_message().is_none());

        flow.settle();
        assert_eq!(flow.state(), SubmissionState::Idle);
    }

    #[test]
    fn test_flow_keystroke_clears_displayed_error() {
        let mut flow = SubmissionFlow::new();
        flow.trigger();
        flow.validation_failed(LinksnipError::invalid_url("nope"));
        flow.settle();
        assert!(flow.error_message().is_some());

        flow.input_edited();
        assert!(flow.error_message().is_none());
    }

    #[test]
    fn test_flow_settle_is_noop_outside_terminal_states() {
        let mut flow = SubmissionFlow::new();
        flow.trigger();
        flow.submit_started();

        flow.settle();
        assert_eq!(flow.state(), SubmissionState::Submitting);
    }
}
