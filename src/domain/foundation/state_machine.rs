//! Guarded transitions between enum states.

use super::ValidationError;

/// An enum whose values move only along declared edges.
///
/// # Example
///
/// ```ignore
/// impl StateMachine for DialogueState {
///     fn can_transition_to(&self, target: &Self) -> bool {
///         matches!((self, target), (MainMenu, CropForm) | (CropForm, MainMenu))
///     }
///
///     fn valid_transitions(&self) -> Vec<Self> {
///         match self {
///             MainMenu => vec![CropForm],
///             CropForm => vec![MainMenu],
///         }
///     }
/// }
///
/// let next = current.transition_to(DialogueState::CropForm)?;
/// ```
pub trait StateMachine: Sized + Copy + PartialEq + std::fmt::Debug {
    fn can_transition_to(&self, target: &Self) -> bool;

    /// States reachable in one step.
    fn valid_transitions(&self) -> Vec<Self>;

    /// Returns `target` when the edge exists.
    fn transition_to(&self, target: Self) -> Result<Self, ValidationError> {
        if !self.can_transition_to(&target) {
            return Err(ValidationError::invalid_format(
                "state",
                format!("no edge from {:?} to {:?}", self, target),
            ));
        }
        Ok(target)
    }
}
