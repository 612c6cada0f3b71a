//! Single-element structural deltas.

use crate::{Error, Result};

/// The change one structural mutation made at a position.
///
/// Bulk mutations are expressed as a sequence of these; there is no batched
/// form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Adjustment {
    /// One element was inserted at the modified position.
    Inserted,
    /// One element was removed from the modified position.
    Removed,
}

impl Adjustment {
    /// Returns the signed delta: `+1` or `-1`.
    #[inline]
    pub const fn delta(self) -> isize {
        match self {
            Adjustment::Inserted => 1,
            Adjustment::Removed => -1,
        }
    }

    /// Applies the delta to a cursor position.
    ///
    /// Only called for positions strictly after the modified position, so a
    /// removal never underflows. Positions past the end of any real sequence
    /// wrap instead of panicking.
    #[inline]
    pub(crate) const fn apply(self, position: usize) -> usize {
        match self {
            Adjustment::Inserted => position.wrapping_add(1),
            Adjustment::Removed => position.wrapping_sub(1),
        }
    }
}

impl TryFrom<isize> for Adjustment {
    type Error = Error;

    fn try_from(delta: isize) -> Result<Self> {
        match delta {
            1 => Ok(Adjustment::Inserted),
            -1 => Ok(Adjustment::Removed),
            other => Err(Error::InvalidAdjustment(other)),
        }
    }
}

impl From<Adjustment> for isize {
    fn from(adjustment: Adjustment) -> Self {
        adjustment.delta()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_unit_deltas() {
        assert_eq!(Adjustment::try_from(1), Ok(Adjustment::Inserted));
        assert_eq!(Adjustment::try_from(-1), Ok(Adjustment::Removed));
        assert_eq!(isize::from(Adjustment::Inserted), 1);
        assert_eq!(isize::from(Adjustment::Removed), -1);
    }

    #[test]
    fn rejects_other_magnitudes() {
        for delta in [0, 2, -2, isize::MAX, isize::MIN] {
            assert_eq!(
                Adjustment::try_from(delta),
                Err(Error::InvalidAdjustment(delta))
            );
        }
    }

    #[test]
    fn apply() {
        assert_eq!(Adjustment::Inserted.apply(4), 5);
        assert_eq!(Adjustment::Removed.apply(4), 3);
        assert_eq!(Adjustment::Inserted.apply(usize::MAX), 0);
    }
}
