use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CharacterError {
    /// The action needs a controller and none possesses the pawn.
    #[error("character is not possessed by a controller")]
    NotPossessed,
}
