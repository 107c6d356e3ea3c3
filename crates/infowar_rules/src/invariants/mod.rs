//! First-class invariants for Infowar.
//!
//! Invariants are logical properties that must hold for every game the
//! engine hands out. They are checked after each append in debug builds and
//! can be tested independently.

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants that can be checked together.
///
/// Implemented for tuples so sets compose by listing their members.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set, collecting every violation.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

fn record<S, I: Invariant<S>>(state: &S, violations: &mut Vec<InvariantViolation>) {
    if !I::holds(state) {
        violations.push(InvariantViolation::new(I::description()));
    }
}

fn finish(violations: Vec<InvariantViolation>) -> Result<(), Vec<InvariantViolation>> {
    if violations.is_empty() {
        Ok(())
    } else {
        Err(violations)
    }
}

impl<S, I1, I2> InvariantSet<S> for (I1, I2)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();
        record::<S, I1>(state, &mut violations);
        record::<S, I2>(state, &mut violations);
        finish(violations)
    }
}

impl<S, I1, I2, I3, I4> InvariantSet<S> for (I1, I2, I3, I4)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
    I3: Invariant<S>,
    I4: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();
        record::<S, I1>(state, &mut violations);
        record::<S, I2>(state, &mut violations);
        record::<S, I3>(state, &mut violations);
        record::<S, I4>(state, &mut violations);
        finish(violations)
    }
}

pub mod alternating_turn;
pub mod piece_conservation;
pub mod placement_quota;
pub mod replay_consistent;

pub use alternating_turn::AlternatingTurnInvariant;
pub use piece_conservation::PieceConservationInvariant;
pub use placement_quota::PlacementQuotaInvariant;
pub use replay_consistent::ReplayConsistentInvariant;

/// All Infowar invariants as a composable set.
pub type InfowarInvariants = (
    PlacementQuotaInvariant,
    PieceConservationInvariant,
    AlternatingTurnInvariant,
    ReplayConsistentInvariant,
);
