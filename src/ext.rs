//! The extensible-enumeration convention.
//!
//! Many IODEF attributes draw from a closed enumeration that always includes
//! the reserved value `ext-value`. Choosing it means "see `ext-<attr>`": the
//! paired free-text slot becomes mandatory, and it must stay absent for every
//! other value. [`check_ext_attr`] is the only place this rule is decided.

/// The reserved enumeration value that defers to the paired `ext-*` slot.
pub const EXT_VALUE: &str = "ext-value";

/// A slot value that may be the `ext-value` sentinel.
pub trait Extensible {
    fn is_ext_value(&self) -> bool;
}

impl Extensible for String {
    fn is_ext_value(&self) -> bool {
        self == EXT_VALUE
    }
}

impl Extensible for str {
    fn is_ext_value(&self) -> bool {
        self == EXT_VALUE
    }
}

/// Which half of the pairing rule was broken.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExtViolation {
    /// The sentinel is set but the `ext-*` slot is not.
    MissingExt,
    /// The `ext-*` slot is set but the value is not the sentinel.
    MisusedExt,
}

/// Check one enumerated/`ext-*` slot pair.
///
/// An absent enumerated slot counts as "not the sentinel", so a stray
/// `ext-*` value next to it is [`ExtViolation::MisusedExt`].
pub fn check_ext_attr<E: Extensible + ?Sized>(
    value: Option<&E>,
    ext_is_set: bool,
) -> Result<(), ExtViolation> {
    let sentinel = value.is_some_and(Extensible::is_ext_value);
    match (sentinel, ext_is_set) {
        (true, false) => Err(ExtViolation::MissingExt),
        (false, true) => Err(ExtViolation::MisusedExt),
        _ => Ok(()),
    }
}
