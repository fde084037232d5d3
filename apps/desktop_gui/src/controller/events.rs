//! Events flowing from the controller runtime back to the UI thread.

use shared::domain::SubmissionStatus;

pub enum UiEvent {
    Status(SubmissionStatus),
    BackendGone,
}

/// User-facing notices. Failure detail never leaves the diagnostic log;
/// the UI only ever shows these generic strings.
pub fn status_notice(status: SubmissionStatus) -> Option<&'static str> {
    match status {
        SubmissionStatus::Done => Some("Thank you — we received your enquiry."),
        SubmissionStatus::Error => Some("Something went wrong. Please try again later."),
        SubmissionStatus::Idle | SubmissionStatus::Sending => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_settled_statuses_have_a_notice() {
        assert!(status_notice(SubmissionStatus::Idle).is_none());
        assert!(status_notice(SubmissionStatus::Sending).is_none());
        assert!(status_notice(SubmissionStatus::Done).is_some());
        assert!(status_notice(SubmissionStatus::Error).is_some());
    }

    #[test]
    fn error_notice_is_generic() {
        let notice = status_notice(SubmissionStatus::Error).unwrap();
        assert!(!notice.contains("duplicate"));
        assert!(!notice.contains("http"));
    }
}
