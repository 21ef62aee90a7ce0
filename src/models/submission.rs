use std::fmt;

/// The two kinds of public submission, used to pick the form to return to
/// and the confirmation page to show.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmissionKind {
    Donation,
    Feedback,
}

impl SubmissionKind {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "donation" => Some(SubmissionKind::Donation),
            "feedback" => Some(SubmissionKind::Feedback),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SubmissionKind::Donation => "donation",
            SubmissionKind::Feedback => "feedback",
        }
    }

    pub fn form_path(self) -> &'static str {
        match self {
            SubmissionKind::Donation => "/donate",
            SubmissionKind::Feedback => "/feedback",
        }
    }

    pub fn thank_you_path(self) -> String {
        format!("/thank-you/{}", self.as_str())
    }

    pub fn success_message(self) -> &'static str {
        match self {
            SubmissionKind::Donation => {
                "Thank you for your generous donation! We will contact you soon."
            }
            SubmissionKind::Feedback => "Thank you for your feedback!",
        }
    }
}

impl fmt::Display for SubmissionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
