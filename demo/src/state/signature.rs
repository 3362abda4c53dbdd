#[cfg(test)]
#[path = "signature_test.rs"]
mod signature_test;

/// Host-owned signature value.
///
/// The widget never mutates this directly; the host updates it while
/// processing the widget's `Exported` and `Cleared` actions, and may veto or
/// transform the value on the way in.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SignatureState {
    /// Exported image value; empty while no signature has been saved.
    pub value: String,
}

impl SignatureState {
    /// Whether a committed signature is currently held.
    #[must_use]
    pub fn is_held(&self) -> bool {
        !self.value.is_empty()
    }
}
