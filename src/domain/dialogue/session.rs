//! Live conversation state owned by one controller.

use crate::domain::foundation::{ConversationId, StateMachine, ValidationError};
use crate::domain::form::{CollectedValues, Field, FormKind};

use super::DialogueState;

/// Outcome of storing one form answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormProgress {
    /// More questions remain; ask for this field next.
    Next(Field),
    /// Every field is answered; the raw answers are handed over.
    Complete {
        kind: FormKind,
        answers: CollectedValues,
    },
}

/// The mutable part of one conversation.
///
/// Never shared; mutated only through these methods so the state,
/// step index and answers stay consistent with each other.
#[derive(Debug, Clone)]
pub struct Session {
    id: ConversationId,
    state: DialogueState,
    step_index: usize,
    collected: CollectedValues,
    selected_department: Option<i64>,
}

impl Session {
    pub fn new() -> Self {
        Self {
            id: ConversationId::new(),
            state: DialogueState::MainMenu,
            step_index: 0,
            collected: CollectedValues::new(),
            selected_department: None,
        }
    }

    pub fn id(&self) -> ConversationId {
        self.id
    }

    pub fn state(&self) -> DialogueState {
        self.state
    }

    /// Position within the active form; 0 outside forms.
    pub fn step_index(&self) -> usize {
        self.step_index
    }

    pub fn collected(&self) -> &CollectedValues {
        &self.collected
    }

    /// 1-based number of the department being browsed.
    pub fn selected_department(&self) -> Option<i64> {
        self.selected_department
    }

    /// Starts `kind` from its first question, discarding earlier answers.
    pub fn begin_form(&mut self, kind: FormKind) -> Result<Field, ValidationError> {
        self.state = self.state.transition_to(DialogueState::for_form(kind))?;
        self.step_index = 0;
        self.collected.clear();
        kind.field_at(0)
            .ok_or_else(|| ValidationError::empty_field(kind.display_name()))
    }

    /// Stores `value` for the current question and advances.
    ///
    /// On the last answer the session returns to the main menu and the
    /// answers are moved out.
    pub fn record_answer(&mut self, value: &str) -> Result<FormProgress, ValidationError> {
        let kind = self.state.form().ok_or_else(|| {
            ValidationError::invalid_format(
                "state",
                format!("{:?} is not collecting answers", self.state),
            )
        })?;
        let field = kind.field_at(self.step_index).ok_or_else(|| {
            ValidationError::invalid_format(
                "step_index",
                format!("{} has no step {}", kind, self.step_index),
            )
        })?;

        self.collected.insert(field, value);
        self.step_index += 1;

        match kind.field_at(self.step_index) {
            Some(next) => Ok(FormProgress::Next(next)),
            None => {
                self.state = self.state.transition_to(DialogueState::MainMenu)?;
                self.step_index = 0;
                Ok(FormProgress::Complete {
                    kind,
                    answers: std::mem::take(&mut self.collected),
                })
            }
        }
    }

    /// Enters the catalog at the department list.
    pub fn begin_browsing(&mut self) -> Result<(), ValidationError> {
        self.state = self.state.transition_to(DialogueState::SelectDepartment)?;
        self.selected_department = None;
        Ok(())
    }

    /// Records the chosen department and moves on to scheme selection.
    pub fn choose_department(&mut self, one_based: i64) -> Result<(), ValidationError> {
        self.state = self.state.transition_to(DialogueState::SelectScheme)?;
        self.selected_department = Some(one_based);
        Ok(())
    }

    /// Leaves the catalog after a scheme was shown.
    pub fn finish_browsing(&mut self) -> Result<(), ValidationError> {
        self.state = self.state.transition_to(DialogueState::MainMenu)?;
        self.selected_department = None;
        Ok(())
    }

    /// Forces the session back to the menu, dropping any partial flow.
    ///
    /// Used to recover when an invariant is found broken.
    pub fn reset(&mut self) {
        self.state = DialogueState::MainMenu;
        self.step_index = 0;
        self.collected.clear();
        self.selected_department = None;
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    mod forms {
        use super::*;

        #[test]
        fn begin_form_asks_first_field() {
            let mut session = Session::new();
            assert_eq!(session.begin_form(FormKind::Crop), Ok(Field::Nitrogen));
            assert_eq!(session.state(), DialogueState::CropForm);
            assert_eq!(session.step_index(), 0);
        }

        #[test]
        fn answers_advance_through_fields() {
            let mut session = Session::new();
            session.begin_form(FormKind::Fertilizer).unwrap();

            assert_eq!(session.record_answer("26"), Ok(FormProgress::Next(Field::Humidity)));
            assert_eq!(session.record_answer("52"), Ok(FormProgress::Next(Field::Moisture)));
            assert_eq!(session.step_index(), 2);
            assert_eq!(session.collected().get(Field::Temperature), Some("26"));
        }

        #[test]
        fn last_answer_completes_and_returns_to_menu() {
            let mut session = Session::new();
            session.begin_form(FormKind::Fertilizer).unwrap();
            let answers = ["26", "52", "38", "Sandy", "Maize", "37", "0", "0"];

            let mut last = None;
            for answer in answers {
                last = Some(session.record_answer(answer).unwrap());
            }

            match last {
                Some(FormProgress::Complete { kind, answers }) => {
                    assert_eq!(kind, FormKind::Fertilizer);
                    assert_eq!(answers.len(), 8);
                    assert_eq!(answers.get(Field::Crop), Some("Maize"));
                }
                other => panic!("expected completion, got {:?}", other),
            }
            assert_eq!(session.state(), DialogueState::MainMenu);
            assert_eq!(session.step_index(), 0);
            assert!(session.collected().is_empty());
        }

        #[test]
        fn restarting_a_form_clears_previous_answers() {
            let mut session = Session::new();
            session.begin_form(FormKind::Crop).unwrap();
            session.record_answer("40").unwrap();
            session.reset();

            session.begin_form(FormKind::Crop).unwrap();
            assert!(session.collected().is_empty());
        }

        #[test]
        fn record_answer_outside_form_is_rejected() {
            let mut session = Session::new();
            assert!(session.record_answer("40").is_err());
        }

        #[test]
        fn cannot_begin_form_mid_form() {
            let mut session = Session::new();
            session.begin_form(FormKind::Crop).unwrap();
            assert!(session.begin_form(FormKind::Fertilizer).is_err());
        }
    }

    mod browsing {
        use super::*;

        #[test]
        fn department_then_scheme_then_menu() {
            let mut session = Session::new();
            session.begin_browsing().unwrap();
            assert_eq!(session.state(), DialogueState::SelectDepartment);

            session.choose_department(2).unwrap();
            assert_eq!(session.state(), DialogueState::SelectScheme);
            assert_eq!(session.selected_department(), Some(2));

            session.finish_browsing().unwrap();
            assert_eq!(session.state(), DialogueState::MainMenu);
            assert_eq!(session.selected_department(), None);
        }

        #[test]
        fn cannot_choose_department_from_menu() {
            let mut session = Session::new();
            assert!(session.choose_department(1).is_err());
        }
    }
}
