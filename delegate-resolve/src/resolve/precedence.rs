//! Specificity order over primitive kinds.
//!
//! The order is fixed:
//!
//! ```text
//! boolean < byte < short < int < char < long < float < double
//! ```
//!
//! where `a < b` reads "a is more specific than b". This is not the
//! widening-conversion graph: `char` widens to `int`, yet `int` ranks
//! ahead of `char` so that every pair of distinct kinds is ordered.

use crate::ty::PrimitiveKind;

use super::Resolution;

/// The specificity rank of a primitive kind. Lower is more specific.
pub fn rank(kind: PrimitiveKind) -> u8 {
    match kind {
        PrimitiveKind::Boolean => 0,
        PrimitiveKind::Byte => 1,
        PrimitiveKind::Short => 2,
        PrimitiveKind::Int => 3,
        PrimitiveKind::Char => 4,
        PrimitiveKind::Long => 5,
        PrimitiveKind::Float => 6,
        PrimitiveKind::Double => 7,
    }
}

/// Whether `a` is strictly more specific than `b`.
pub fn dominates(a: PrimitiveKind, b: PrimitiveKind) -> bool {
    rank(a) < rank(b)
}

/// Compare a left and a right primitive parameter type.
///
/// An exact tie is a conflict, not an absence of information.
pub fn resolve(left: PrimitiveKind, right: PrimitiveKind) -> Resolution {
    if left == right {
        Resolution::Ambiguous
    } else if dominates(left, right) {
        Resolution::Left
    } else {
        Resolution::Right
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use PrimitiveKind::*;

    #[test]
    fn test_ranks_are_distinct() {
        let mut ranks: Vec<_> = PrimitiveKind::ALL.into_iter().map(rank).collect();
        ranks.sort_unstable();
        ranks.dedup();
        assert_eq!(ranks.len(), 8);
    }

    #[test]
    fn test_every_pair_is_ordered() {
        let mut pairs = 0;
        for (i, &a) in PrimitiveKind::ALL.iter().enumerate() {
            for &b in &PrimitiveKind::ALL[i + 1..] {
                assert!(dominates(a, b) != dominates(b, a), "{} vs {}", a, b);
                pairs += 1;
            }
        }
        assert_eq!(pairs, 28);
    }

    #[test]
    fn test_transitive() {
        for a in PrimitiveKind::ALL {
            for b in PrimitiveKind::ALL {
                for c in PrimitiveKind::ALL {
                    if dominates(a, b) && dominates(b, c) {
                        assert!(dominates(a, c), "{} < {} < {}", a, b, c);
                    }
                }
            }
        }
    }

    #[test]
    fn test_irreflexive() {
        for kind in PrimitiveKind::ALL {
            assert!(!dominates(kind, kind));
        }
    }

    #[test]
    fn test_int_outranks_char() {
        assert!(dominates(Int, Char));
        assert_eq!(resolve(Int, Char), Resolution::Left);
        assert_eq!(resolve(Char, Int), Resolution::Right);
    }

    #[test]
    fn test_resolve() {
        assert_eq!(resolve(Byte, Short), Resolution::Left);
        assert_eq!(resolve(Double, Boolean), Resolution::Right);
        assert_eq!(resolve(Long, Long), Resolution::Ambiguous);
        assert_eq!(resolve(Float, Double), Resolution::Left);
    }
}
