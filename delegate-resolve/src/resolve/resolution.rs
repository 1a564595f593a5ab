//! The four-valued verdict of comparing two candidate bindings.

use std::fmt;

/// Outcome of comparing a left and a right candidate.
///
/// Verdicts form a small merge algebra: [`Resolution::Unknown`] is the
/// identity, [`Resolution::Ambiguous`] is absorbing, and a left verdict
/// merged with a right verdict is ambiguous in either order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Resolution {
    /// No information yet.
    #[default]
    Unknown,
    /// The left candidate is preferred.
    Left,
    /// The right candidate is preferred.
    Right,
    /// Conflicting or tied information.
    Ambiguous,
}

impl Resolution {
    /// Every verdict.
    pub const ALL: [Resolution; 4] = [
        Resolution::Unknown,
        Resolution::Left,
        Resolution::Right,
        Resolution::Ambiguous,
    ];

    /// Whether one side is strictly preferred.
    pub fn is_resolved(self) -> bool {
        matches!(self, Resolution::Left | Resolution::Right)
    }

    /// Combine two verdicts.
    pub fn merge(self, other: Resolution) -> Resolution {
        match (self, other) {
            (Resolution::Unknown, other) | (other, Resolution::Unknown) => other,
            (Resolution::Left, Resolution::Left) => Resolution::Left,
            (Resolution::Right, Resolution::Right) => Resolution::Right,
            _ => Resolution::Ambiguous,
        }
    }

    /// The verdict with the two sides swapped.
    pub fn mirror(self) -> Resolution {
        match self {
            Resolution::Left => Resolution::Right,
            Resolution::Right => Resolution::Left,
            other => other,
        }
    }

    /// Merge a sequence of verdicts, starting from `Unknown`.
    pub fn fold(verdicts: impl IntoIterator<Item = Resolution>) -> Resolution {
        verdicts
            .into_iter()
            .fold(Resolution::Unknown, Resolution::merge)
    }
}

impl fmt::Display for Resolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Resolution::Unknown => "unknown",
            Resolution::Left => "left",
            Resolution::Right => "right",
            Resolution::Ambiguous => "ambiguous",
        };
        f.write_str(name)
    }
}
