use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::{
    domain::{ChangePasswordForm, Field, SubmissionStatus},
    errors::SubmitError,
    password_client::{PasswordClient, PasswordEndpoint},
    view::FormView,
};

pub const SUCCESS_FALLBACK: &str = "Password updated successfully.";

#[derive(Debug, Default)]
struct FormState {
    fields: ChangePasswordForm,
    status: SubmissionStatus,
}

/// The state lock is never held across the network call.
pub struct PasswordChangeForm<E = PasswordClient> {
    endpoint: E,
    state: Mutex<FormState>,
}

impl<E> PasswordChangeForm<E>
where
    E: PasswordEndpoint,
{
    pub fn new(endpoint: E) -> Self {
        Self {
            endpoint,
            state: Mutex::new(FormState::default()),
        }
    }

    pub fn endpoint(&self) -> &E {
        &self.endpoint
    }

    pub fn set_field(&self, field: Field, value: impl Into<String>) {
        self.lock().fields.set(field, value);
    }

    pub fn fields(&self) -> ChangePasswordForm {
        self.lock().fields.clone()
    }

    pub fn status(&self) -> SubmissionStatus {
        self.lock().status.clone()
    }

    pub fn is_submitting(&self) -> bool {
        self.lock().status.is_submitting()
    }

    pub fn error_message(&self) -> Option<String> {
        self.lock().status.error_message().map(str::to_string)
    }

    pub fn success_message(&self) -> Option<String> {
        self.lock().status.success_message().map(str::to_string)
    }

    pub fn view(&self) -> FormView {
        FormView::from_status(&self.lock().status)
    }

    /// `None` when another submission is still in flight.
    #[tracing::instrument(name = "Submitting password change", skip(self))]
    pub async fn submit(&self) -> Option<Result<String, SubmitError>> {
        let update = {
            let mut state = self.lock();
            if state.status.is_submitting() {
                tracing::debug!("Password change already in flight");
                return None;
            }
            state.status = SubmissionStatus::Idle;
            match state.fields.validate() {
                Ok(update) => {
                    state.status = SubmissionStatus::Submitting;
                    update
                }
                Err(e) => {
                    tracing::info!(error.message = %e, "Password change rejected locally");
                    state.status = SubmissionStatus::Failed(e.to_string());
                    return Some(Err(e.into()));
                }
            }
        };

        let mut in_flight = InFlight {
            state: &self.state,
            settled: false,
        };
        let result = self.endpoint.update_password(&update).await;
        in_flight.settled = true;

        let mut state = self.lock();
        match result {
            Ok(reply) => {
                let message = reply
                    .message
                    .unwrap_or_else(|| SUCCESS_FALLBACK.to_string());
                state.fields.clear();
                state.status = SubmissionStatus::Succeeded(message.clone());
                tracing::info!("Password changed");
                Some(Ok(message))
            }
            Err(e) => {
                tracing::warn!(
                    error.cause_chain = ?e,
                    error.message = %e,
                    "Failed to change password",
                );
                state.status = SubmissionStatus::Failed(e.user_message());
                Some(Err(e))
            }
        }
    }

    fn lock(&self) -> MutexGuard<'_, FormState> {
        lock(&self.state)
    }
}

fn lock(state: &Mutex<FormState>) -> MutexGuard<'_, FormState> {
    state.lock().unwrap_or_else(PoisonError::into_inner)
}

// resets the status when a submission future is dropped mid-flight
struct InFlight<'a> {
    state: &'a Mutex<FormState>,
    settled: bool,
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        if !self.settled {
            tracing::debug!("Password change abandoned while in flight");
            lock(self.state).status = SubmissionStatus::Idle;
        }
    }
}
