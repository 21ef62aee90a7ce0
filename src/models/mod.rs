pub mod donation;
pub mod feedback;
pub mod notice;
pub mod submission;

pub use donation::{Donation, DonationForm};
pub use feedback::{Feedback, FeedbackForm};
pub use notice::{Notice, NoticeLevel};
pub use submission::SubmissionKind;
