use secrecy::{ExposeSecret, Secret};

use super::PasswordUpdate;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    OldPassword,
    NewPassword,
    ConfirmNewPassword,
}

impl Field {
    pub const ALL: [Field; 3] = [
        Field::OldPassword,
        Field::NewPassword,
        Field::ConfirmNewPassword,
    ];

    /// Element id used by the rendered form.
    pub fn id(self) -> &'static str {
        match self {
            Field::OldPassword => "oldPassword",
            Field::NewPassword => "newPassword",
            Field::ConfirmNewPassword => "confirmNewPassword",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Field::OldPassword => "Current password",
            Field::NewPassword => "New password",
            Field::ConfirmNewPassword => "Confirm new password",
        }
    }
}

#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    #[error("all fields required")]
    MissingFields,

    #[error("new password and confirmation do not match")]
    ConfirmationMismatch,
}

#[derive(Debug)]
pub struct ChangePasswordForm {
    pub old_password: Secret<String>,
    pub new_password: Secret<String>,
    pub confirm_new_password: Secret<String>,
}

impl Default for ChangePasswordForm {
    fn default() -> Self {
        Self {
            old_password: empty_secret(),
            new_password: empty_secret(),
            confirm_new_password: empty_secret(),
        }
    }
}

impl Clone for ChangePasswordForm {
    fn clone(&self) -> Self {
        Self {
            old_password: copy_secret(&self.old_password),
            new_password: copy_secret(&self.new_password),
            confirm_new_password: copy_secret(&self.confirm_new_password),
        }
    }
}

impl ChangePasswordForm {
    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        *self.slot_mut(field) = Secret::new(value.into());
    }

    pub fn is_empty(&self, field: Field) -> bool {
        self.slot(field).expose_secret().is_empty()
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Local checks, first failure wins: every field must be filled in, then
    /// the confirmation must repeat the new password exactly.
    pub fn validate(&self) -> Result<PasswordUpdate, ValidationError> {
        if Field::ALL.iter().any(|field| self.is_empty(*field)) {
            return Err(ValidationError::MissingFields);
        }
        if self.new_password.expose_secret() != self.confirm_new_password.expose_secret() {
            return Err(ValidationError::ConfirmationMismatch);
        }
        Ok(PasswordUpdate {
            old_password: copy_secret(&self.old_password),
            new_password: copy_secret(&self.new_password),
        })
    }

    fn slot(&self, field: Field) -> &Secret<String> {
        match field {
            Field::OldPassword => &self.old_password,
            Field::NewPassword => &self.new_password,
            Field::ConfirmNewPassword => &self.confirm_new_password,
        }
    }

    fn slot_mut(&mut self, field: Field) -> &mut Secret<String> {
        match field {
            Field::OldPassword => &mut self.old_password,
            Field::NewPassword => &mut self.new_password,
            Field::ConfirmNewPassword => &mut self.confirm_new_password,
        }
    }
}

fn empty_secret() -> Secret<String> {
    Secret::new(String::new())
}

fn copy_secret(secret: &Secret<String>) -> Secret<String> {
    Secret::new(secret.expose_secret().clone())
}
