use std::fmt;

use serde::Serialize;

use crate::{
    domain::{Field, SubmissionStatus},
    view_engine::TeraView,
    Result,
};

const SUBMIT_LABEL: &str = "Change password";
const SUBMITTING_LABEL: &str = "Saving...";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertKind {
    Error,
    Success,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Alert {
    pub kind: AlertKind,
    pub title: &'static str,
    pub message: String,
}

impl fmt::Display for Alert {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.title, self.message)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldView {
    pub id: &'static str,
    pub label: &'static str,
}

/// What the form shows for a given status. Field values are deliberately
/// absent: password inputs are always rendered blank.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormView {
    pub alert: Option<Alert>,
    pub fields: Vec<FieldView>,
    pub submitting: bool,
    pub button_label: &'static str,
    pub button_disabled: bool,
}

impl FormView {
    pub fn from_status(status: &SubmissionStatus) -> Self {
        let alert = match status {
            SubmissionStatus::Failed(message) => Some(Alert {
                kind: AlertKind::Error,
                title: "Error!",
                message: message.clone(),
            }),
            SubmissionStatus::Succeeded(message) => Some(Alert {
                kind: AlertKind::Success,
                title: "Success!",
                message: message.clone(),
            }),
            SubmissionStatus::Idle | SubmissionStatus::Submitting => None,
        };
        let submitting = status.is_submitting();

        Self {
            alert,
            fields: Field::ALL
                .iter()
                .map(|field| FieldView {
                    id: field.id(),
                    label: field.label(),
                })
                .collect(),
            submitting,
            button_label: if submitting {
                SUBMITTING_LABEL
            } else {
                SUBMIT_LABEL
            },
            button_disabled: submitting,
        }
    }

    pub fn render(&self, views: &TeraView) -> Result<String> {
        views.render_form(self)
    }
}
