mod change_password;
mod password_update;
mod submission_status;

pub use change_password::{ChangePasswordForm, Field, ValidationError};
pub use password_update::PasswordUpdate;
pub use submission_status::SubmissionStatus;
