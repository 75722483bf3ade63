use time::OffsetDateTime;

use crate::form::FormValues;

/// One attempt to invoke a remote endpoint with the values captured from the
/// form. Lifecycle is create, send, discard; submissions are never persisted
/// or retried automatically.
#[derive(Debug, Clone, PartialEq)]
pub struct Submission {
    pub endpoint: String,
    pub values: FormValues,
    pub submitted_at: OffsetDateTime,
}

impl Submission {
    /// Stamps the submission with the creation time; the timestamp is
    /// carried into the submit span for log correlation.
    #[must_use]
    pub fn new(endpoint: &str, values: FormValues) -> Self {
        Self {
            endpoint: endpoint.to_string(),
            values,
            submitted_at: OffsetDateTime::now_utc(),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::panic, clippy::indexing_slicing)]
mod tests {
    use super::*;

    #[test]
    fn submissions_are_stamped_on_creation() {
        let before = OffsetDateTime::now_utc();
        let submission = Submission::new("resize", FormValues::new());
        assert_eq!(submission.endpoint, "resize");
        assert!(submission.values.is_empty());
        assert!(submission.submitted_at >= before);
    }
}
