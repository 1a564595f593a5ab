//! Selection of a single binding out of many candidates.
//!
//! # Algorithm
//!
//! 1. **No candidates**: report [`SelectionError::NoCandidates`].
//! 2. **One candidate**: it wins without consulting the resolver.
//! 3. **Find maximal**: a candidate is maximal if no other candidate is
//!    preferred over it by the resolver.
//! 4. **Select**: a unique maximal candidate wins; anything else is
//!    ambiguous.

use std::fmt;

use thiserror::Error;
use tracing::debug;

use crate::method::{MethodBinding, MethodDescription};
use crate::resolve::{AmbiguityResolver, Resolution};

/// Why no single binding could be chosen.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectionError {
    #[error("no candidate binding for {method}")]
    NoCandidates { method: MethodDescription },

    #[error("{0}")]
    Ambiguous(AmbiguityError),
}

/// More than one candidate remained after resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AmbiguityError {
    /// The source method being delegated.
    pub source: MethodDescription,
    /// Targets of the candidates no other candidate beats. When
    /// preferences form a cycle this is every candidate.
    pub targets: Vec<MethodDescription>,
}

impl fmt::Display for AmbiguityError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "cannot resolve ambiguous delegation of {} to ", self.source)?;
        for (i, target) in self.targets.iter().enumerate() {
            match i {
                0 => {}
                i if i + 1 == self.targets.len() => write!(f, " or ")?,
                _ => write!(f, ", ")?,
            }
            write!(f, "{}", target)?;
        }
        Ok(())
    }
}

/// Choose the unique most preferable binding.
pub fn select<'a, R, B>(
    resolver: &R,
    source: &MethodDescription,
    candidates: &'a [B],
) -> Result<&'a B, SelectionError>
where
    R: AmbiguityResolver + ?Sized,
    B: MethodBinding,
{
    match candidates {
        [] => Err(SelectionError::NoCandidates {
            method: source.clone(),
        }),
        [only] => Ok(only),
        _ => {
            let maximal = find_maximal(resolver, source, candidates);
            debug!(
                source = %source,
                candidates = candidates.len(),
                maximal = maximal.len(),
                "selected maximal candidates"
            );
            match maximal.as_slice() {
                [winner] => Ok(*winner),
                [] => Err(ambiguous(source, candidates.iter())),
                _ => Err(ambiguous(source, maximal.iter().copied())),
            }
        }
    }
}

/// Candidates that no other candidate is preferred over.
fn find_maximal<'a, R, B>(
    resolver: &R,
    source: &MethodDescription,
    candidates: &'a [B],
) -> Vec<&'a B>
where
    R: AmbiguityResolver + ?Sized,
    B: MethodBinding,
{
    candidates
        .iter()
        .enumerate()
        .filter(|&(i, candidate)| {
            !candidates.iter().enumerate().any(|(j, other)| {
                i != j && resolver.resolve(source, other, candidate) == Resolution::Left
            })
        })
        .map(|(_, candidate)| candidate)
        .collect()
}

fn ambiguous<'a, B: MethodBinding + 'a>(
    source: &MethodDescription,
    candidates: impl Iterator<Item = &'a B>,
) -> SelectionError {
    SelectionError::Ambiguous(AmbiguityError {
        source: source.clone(),
        targets: candidates.map(|b| b.target().clone()).collect(),
    })
}
