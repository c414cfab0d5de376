use std::rc::Rc;

use yew::Reducible;

use crate::forms::submit::SubmitError;
use crate::forms::validation::{validate, ErrorMap, FieldValues, FormField};

#[derive(Clone, Debug, Default, PartialEq)]
pub enum SubmitPhase {
    #[default]
    Editing,
    Submitting,
    Succeeded,
    Failed(String),
}

/// What a submit click should do with the current snapshot.
#[derive(Debug, PartialEq)]
pub enum SubmitCheck<F: FormField> {
    Busy,
    Invalid(ErrorMap<F>),
    Ready(FieldValues<F>),
}

#[derive(Clone, Debug, PartialEq)]
pub struct FormState<F: FormField> {
    pub values: FieldValues<F>,
    pub errors: ErrorMap<F>,
    pub phase: SubmitPhase,
}

impl<F: FormField> Default for FormState<F> {
    fn default() -> Self {
        Self {
            values: FieldValues::new(),
            errors: ErrorMap::new(),
            phase: SubmitPhase::Editing,
        }
    }
}

impl<F: FormField> FormState<F> {
    pub fn value(&self, field: F) -> String {
        self.values.get(&field).cloned().unwrap_or_default()
    }

    pub fn error(&self, field: F) -> Option<&str> {
        self.errors.get(&field).map(String::as_str)
    }

    pub fn is_busy(&self) -> bool {
        self.phase == SubmitPhase::Submitting
    }

    pub fn check(&self) -> SubmitCheck<F> {
        if self.is_busy() {
            return SubmitCheck::Busy;
        }
        let errors = validate(&self.values);
        if errors.is_empty() {
            SubmitCheck::Ready(self.values.clone())
        } else {
            SubmitCheck::Invalid(errors)
        }
    }

    /// Pure transition shared by every form on the site.
    pub fn apply(&self, action: FormAction<F>) -> Self {
        let mut next = self.clone();
        match action {
            FormAction::Edit(field, value) => {
                next.values.insert(field, value);
                // Only cleared here; re-validated on the next submit.
                next.errors.remove(&field);
                if matches!(next.phase, SubmitPhase::Failed(_)) {
                    next.phase = SubmitPhase::Editing;
                }
            }
            FormAction::ShowErrors(errors) => {
                next.errors = errors;
            }
            FormAction::Started => {
                if !self.is_busy() {
                    next.errors.clear();
                    next.phase = SubmitPhase::Submitting;
                }
            }
            FormAction::Finished(Ok(())) => {
                next.phase = SubmitPhase::Succeeded;
            }
            FormAction::Finished(Err(err)) => {
                next.phase = SubmitPhase::Failed(err.to_string());
            }
            FormAction::Clear => {
                next = Self::default();
            }
        }
        next
    }
}

pub enum FormAction<F: FormField> {
    Edit(F, String),
    ShowErrors(ErrorMap<F>),
    Started,
    Finished(Result<(), SubmitError>),
    Clear,
}

impl<F: FormField> Reducible for FormState<F> {
    type Action = FormAction<F>;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        Rc::new(self.apply(action))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::forms::validation::CheckoutField;

    fn filled() -> FormState<CheckoutField> {
        let mut state = FormState::default();
        for (field, value) in [
            (CheckoutField::Name, "Grace"),
            (CheckoutField::Email, "grace@navy.mil"),
            (CheckoutField::Address, "1 Harbor Rd"),
            (CheckoutField::City, "Arlington"),
            (CheckoutField::ZipCode, "22201"),
            (CheckoutField::Country, "USA"),
        ] {
            state = state.apply(FormAction::Edit(field, value.to_string()));
        }
        state
    }

    #[test]
    fn editing_a_field_clears_only_its_error() {
        let state = FormState::<CheckoutField>::default();
        let errors = match state.check() {
            SubmitCheck::Invalid(errors) => errors,
            other => panic!("expected errors, got {:?}", other),
        };
        let state = state.apply(FormAction::ShowErrors(errors));
        assert_eq!(state.errors.len(), 6);

        let state = state.apply(FormAction::Edit(CheckoutField::Email, "x".to_string()));
        assert_eq!(state.errors.len(), 5);
        assert_eq!(state.error(CheckoutField::Email), None);
        assert_eq!(state.error(CheckoutField::City), Some("City is required"));
    }

    #[test]
    fn complete_form_is_ready() {
        let state = filled();
        match state.check() {
            SubmitCheck::Ready(values) => assert_eq!(values[&CheckoutField::City], "Arlington"),
            other => panic!("expected ready, got {:?}", other),
        }
    }

    #[test]
    fn submitting_blocks_another_submit() {
        let state = filled().apply(FormAction::Started);
        assert!(state.is_busy());
        assert_eq!(state.check(), SubmitCheck::Busy);
    }

    #[test]
    fn failure_keeps_the_data_for_a_retry() {
        let before = filled();
        let state = before
            .apply(FormAction::Started)
            .apply(FormAction::Finished(Err(SubmitError::Timeout)));
        assert_eq!(state.values, before.values);
        assert!(matches!(state.phase, SubmitPhase::Failed(_)));
        assert!(matches!(state.check(), SubmitCheck::Ready(_)));
    }

    #[test]
    fn success_then_clear_starts_over() {
        let state = filled()
            .apply(FormAction::Started)
            .apply(FormAction::Finished(Ok(())));
        assert_eq!(state.phase, SubmitPhase::Succeeded);
        let state = state.apply(FormAction::Clear);
        assert!(state.values.is_empty());
        assert_eq!(state.phase, SubmitPhase::Editing);
    }
}
