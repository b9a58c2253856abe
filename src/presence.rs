//! Field presence.
//!
//! Optional single slots are `Option<T>`; repeated slots are `Vec<T>` and
//! count as set only when non-empty. An explicitly supplied empty array is
//! therefore indistinguishable from an absent one, and encodes as absent.

/// "Has this slot been set?" for every slot shape a record can carry.
pub trait Presence {
    fn is_set(&self) -> bool;
}

impl<T> Presence for Option<T> {
    fn is_set(&self) -> bool {
        self.is_some()
    }
}

impl<T> Presence for Vec<T> {
    fn is_set(&self) -> bool {
        !self.is_empty()
    }
}
