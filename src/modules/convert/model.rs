use super::interface::{FormSurface, INTERVAL_FIELD_ID, REQUIRED_ELEMENTS, URL_FIELD_ID};

/// Argument-backed form: every element is present, values are fixed text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvertForm {
    pub url: String,
    pub interval: String,
}

impl ConvertForm {
    pub fn new(url: impl Into<String>, interval: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            interval: interval.into(),
        }
    }
}

impl FormSurface for ConvertForm {
    fn has_element(&self, id: &str) -> bool {
        REQUIRED_ELEMENTS.contains(&id)
    }

    fn field_value(&self, id: &str) -> Option<String> {
        match id {
            URL_FIELD_ID => Some(self.url.clone()),
            INTERVAL_FIELD_ID => Some(self.interval.clone()),
            _ => None,
        }
    }
}

/// Style classification of the status display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusClass {
    #[default]
    Neutral,
    Success,
    Error,
}

impl StatusClass {
    /// Class attribute as rendered on the `statusMessage` element.
    pub fn class_list(&self) -> &'static str {
        match self {
            Self::Neutral => "status-message",
            Self::Success => "status-message status-success",
            Self::Error => "status-message status-error",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatusMessage {
    pub text: String,
    pub class: StatusClass,
}

impl StatusMessage {
    pub fn reset(&mut self) {
        self.text.clear();
        self.class = StatusClass::Neutral;
    }

    pub fn set(&mut self, text: impl Into<String>, class: StatusClass) {
        self.text = text.into();
        self.class = class;
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubmitButton {
    pub disabled: bool,
    pub loading: bool,
}

impl SubmitButton {
    pub fn class_list(&self) -> &'static str {
        if self.loading {
            "loading"
        } else {
            ""
        }
    }

    /// Disable the control and mark it in progress until the guard drops.
    pub fn begin(&mut self) -> BusyGuard<'_> {
        self.disabled = true;
        self.loading = true;
        BusyGuard { button: self }
    }
}

/// Re-enables the submit control on every exit path, unwinding and
/// cancellation of the submit future included.
#[derive(Debug)]
pub struct BusyGuard<'a> {
    button: &'a mut SubmitButton,
}

impl Drop for BusyGuard<'_> {
    fn drop(&mut self) {
        self.button.disabled = false;
        self.button.loading = false;
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmissionPhase {
    Idle,
    Submitting,
    Succeeded,
    Failed,
}

/// Everything the controller shows on the page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UiState {
    pub status: StatusMessage,
    pub button: SubmitButton,
}

impl UiState {
    // The phase is derived from the widgets rather than stored next to them.
    pub fn phase(&self) -> SubmissionPhase {
        if self.button.disabled {
            return SubmissionPhase::Submitting;
        }

        match self.status.class {
            StatusClass::Neutral => SubmissionPhase::Idle,
            StatusClass::Success => SubmissionPhase::Succeeded,
            StatusClass::Error => SubmissionPhase::Failed,
        }
    }
}
