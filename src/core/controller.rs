//! Stateful wrapper around [`compute_form_state`] for hosts that report
//! every text change back, including the ones the controller wrote itself.

use super::form::{ChangeDisplay, Field, FormFields, FormState, compute_form_state};
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormEvent {
    Init,
    Input { field: Field, text: String },
    SetMixedMode(bool),
}

/// Tracks derived writes whose echo notification has not arrived yet.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum UpdateState {
    #[default]
    Idle,
    ApplyingDerivedUpdate { pending: Vec<Field> },
}

impl UpdateState {
    /// Consumes the pending tag for `field`, if any.
    fn take_pending(&mut self, field: Field) -> bool {
        let UpdateState::ApplyingDerivedUpdate { pending } = self else {
            return false;
        };
        let Some(pos) = pending.iter().position(|f| *f == field) else {
            return false;
        };
        pending.remove(pos);
        if pending.is_empty() {
            *self = UpdateState::Idle;
        }
        true
    }

    fn mark_pending(&mut self, fields: &[Field]) {
        if fields.is_empty() {
            return;
        }
        match self {
            UpdateState::Idle => {
                *self = UpdateState::ApplyingDerivedUpdate {
                    pending: fields.to_vec(),
                }
            }
            UpdateState::ApplyingDerivedUpdate { pending } => pending.extend_from_slice(fields),
        }
    }
}

#[derive(Debug, Clone)]
pub struct FormController {
    fields: FormFields,
    mixed_mode: bool,
    change: ChangeDisplay,
    state: UpdateState,
}

impl FormController {
    pub fn new(mixed_mode: bool) -> Self {
        let initial = compute_form_state(&FormFields::default(), mixed_mode, None);
        Self {
            fields: initial.fields,
            mixed_mode,
            change: initial.change,
            state: UpdateState::Idle,
        }
    }

    pub fn fields(&self) -> &FormFields {
        &self.fields
    }

    pub fn mixed_mode(&self) -> bool {
        self.mixed_mode
    }

    pub fn change(&self) -> &ChangeDisplay {
        &self.change
    }

    pub fn update_state(&self) -> &UpdateState {
        &self.state
    }

    /// Processes one event to completion. Returns `None` when the event was
    /// the echo of a write this controller made and was therefore ignored.
    pub fn handle(&mut self, event: FormEvent) -> Option<FormState> {
        let edited = match event {
            FormEvent::Init => None,
            FormEvent::Input { field, text } => {
                if self.state.take_pending(field) {
                    debug!(%field, "Ignoring echo of derived update");
                    return None;
                }
                self.fields.set(field, text);
                Some(field)
            }
            FormEvent::SetMixedMode(mixed_mode) => {
                self.mixed_mode = mixed_mode;
                None
            }
        };

        let result = compute_form_state(&self.fields, self.mixed_mode, edited);
        self.state.mark_pending(&result.derived);
        self.fields = result.fields.clone();
        self.change = result.change.clone();
        debug!(?edited, state = ?self.state, "Handled form event");
        Some(result)
    }
}

impl Default for FormController {
    fn default() -> Self {
        Self::new(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(field: Field, text: &str) -> FormEvent {
        FormEvent::Input {
            field,
            text: text.to_string(),
        }
    }

    #[test]
    fn test_initial_state_shows_placeholders() {
        let mut controller = FormController::default();
        let state = controller.handle(FormEvent::Init).unwrap();
        assert_eq!(state.change.eur, "—");
        assert_eq!(state.change.bgn, "—");
        assert_eq!(controller.update_state(), &UpdateState::Idle);
    }

    #[test]
    fn test_echo_of_derived_write_is_ignored_once() {
        let mut controller = FormController::default();
        let state = controller.handle(input(Field::PriceEur, "10")).unwrap();
        assert_eq!(state.fields.price_bgn, "19.56");
        assert_eq!(
            controller.update_state(),
            &UpdateState::ApplyingDerivedUpdate {
                pending: vec![Field::PriceBgn]
            }
        );

        // Host echoes the programmatic write
        assert!(controller.handle(input(Field::PriceBgn, "19.56")).is_none());
        assert_eq!(controller.update_state(), &UpdateState::Idle);
        assert_eq!(controller.fields().price_eur, "10");

        // A real edit of the same field goes through again
        let state = controller.handle(input(Field::PriceBgn, "39.12")).unwrap();
        assert_eq!(state.fields.price_eur, "20.00");
    }

    #[test]
    fn test_full_purchase_flow() {
        let mut controller = FormController::default();
        controller.handle(input(Field::PriceEur, "10"));
        controller.handle(input(Field::PriceBgn, "19.56"));
        let state = controller.handle(input(Field::PaidEur, "15")).unwrap();
        assert_eq!(state.change.eur, "5.00 €");
        assert_eq!(state.change.bgn, "9.78 лв.");
        assert_eq!(controller.change(), &state.change);
    }

    #[test]
    fn test_toggle_mixed_mode_recomputes_without_edit() {
        let mut controller = FormController::default();
        controller.handle(input(Field::PriceEur, "10"));
        controller.handle(input(Field::PriceBgn, "19.56"));
        controller.handle(input(Field::PaidEur, "4"));
        assert!(controller.handle(input(Field::PaidBgn, "7.82")).is_none());
        assert_eq!(controller.change().eur, "-6.00 €");

        let state = controller.handle(FormEvent::SetMixedMode(true)).unwrap();
        assert!(state.derived.is_empty());
        assert_eq!(state.change.eur, "-2.00 €");

        let state = controller.handle(input(Field::PaidEur, "4")).unwrap();
        assert!(state.derived.is_empty());
        assert_eq!(state.fields.paid_bgn, "7.82");

        let state = controller.handle(FormEvent::SetMixedMode(false)).unwrap();
        assert_eq!(controller.update_state(), &UpdateState::Idle);
        assert_eq!(state.change.eur, "-6.00 €");
    }

    #[test]
    fn test_each_derived_write_suppresses_one_echo() {
        let mut controller = FormController::default();
        controller.handle(input(Field::PriceEur, "1"));
        controller.handle(input(Field::PriceEur, "12"));
        assert!(controller.handle(input(Field::PriceBgn, "1.96")).is_none());
        assert!(controller.handle(input(Field::PriceBgn, "23.47")).is_none());
        assert_eq!(controller.fields().price_bgn, "23.47");
        assert!(controller.handle(input(Field::PriceBgn, "23.47")).is_some());
    }
}
