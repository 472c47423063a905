//! Dialogue state machine.
//!
//! Defines where the user is in the conversation and which moves are legal.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::StateMachine;
use crate::domain::form::FormKind;

/// The position of a conversation.
///
/// - `MainMenu`: waiting for a menu option
/// - `CropForm` / `FertilizerForm`: answering form questions one per turn
/// - `SelectDepartment` / `SelectScheme`: drilling into the scheme catalog
///
/// Every flow returns to `MainMenu`; quitting is handled by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum DialogueState {
    #[default]
    MainMenu,
    CropForm,
    FertilizerForm,
    SelectDepartment,
    SelectScheme,
}

impl DialogueState {
    /// Returns the state that collects answers for `kind`.
    pub fn for_form(kind: FormKind) -> Self {
        match kind {
            FormKind::Crop => Self::CropForm,
            FormKind::Fertilizer => Self::FertilizerForm,
        }
    }

    /// Returns the form being filled in, if any.
    pub fn form(&self) -> Option<FormKind> {
        match self {
            Self::CropForm => Some(FormKind::Crop),
            Self::FertilizerForm => Some(FormKind::Fertilizer),
            _ => None,
        }
    }
}

impl StateMachine for DialogueState {
    fn can_transition_to(&self, target: &Self) -> bool {
        use DialogueState::*;
        matches!(
            (self, target),
            // Menu options
            (MainMenu, CropForm) |
            (MainMenu, FertilizerForm) |
            (MainMenu, SelectDepartment) |
            // Forms finish back at the menu
            (CropForm, MainMenu) |
            (FertilizerForm, MainMenu) |
            // Catalog drill-down
            (SelectDepartment, SelectScheme) |
            (SelectScheme, MainMenu)
        )
    }

    fn valid_transitions(&self) -> Vec<Self> {
        use DialogueState::*;
        match self {
            MainMenu => vec![CropForm, FertilizerForm, SelectDepartment],
            CropForm => vec![MainMenu],
            FertilizerForm => vec![MainMenu],
            SelectDepartment => vec![SelectScheme],
            SelectScheme => vec![MainMenu],
        }
    }
}
