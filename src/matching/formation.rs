//! The match engine and its output. `match_best` scores every catalog
//! entry against a token window and materializes the winner as a
//! Formation: the matched sub-sequence plus category-indexed access into
//! it.

use tracing::debug;

use crate::lexing::Token;
use crate::matching::catalog::{catalog, FormationKind};
use crate::matching::{Match, Set};

/// The realized result of a successful match. Read-only views over the
/// already-matched tokens; no re-matching happens here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Formation<'t> {
    kind: FormationKind,
    tokens: &'t [Token<'t>],
}

impl<'t> Formation<'t> {
    pub fn kind(&self) -> FormationKind {
        self.kind
    }

    pub fn tokens(&self) -> &'t [Token<'t>] {
        self.tokens
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Byte offset of the first matched token, for error reporting.
    pub fn offset(&self) -> usize {
        self.tokens
            .first()
            .map(|token| token.offset)
            .unwrap_or(0)
    }

    /// The first token drawn from the given set. Shapes guarantee
    /// presence for the sets their actions ask for; an absent set is the
    /// caller's error to surface.
    pub fn first_of(&self, set: &Set) -> Option<&'t Token<'t>> {
        self.tokens
            .iter()
            .find(|token| set.admits(token.category))
    }

    /// Every token drawn from the given set, in matched order.
    pub fn all_of<'f>(&'f self, set: &'f Set) -> impl Iterator<Item = &'t Token<'t>> + 'f {
        self.tokens
            .iter()
            .filter(|token| set.admits(token.category))
    }

    /// The tokens strictly between the first `start` marker and the next
    /// `end` marker after it. Empty when either marker is absent.
    pub fn range_between(&self, start: &Set, end: &Set) -> &'t [Token<'t>] {
        let Some(opening) = self
            .tokens
            .iter()
            .position(|token| start.admits(token.category))
        else {
            return &[];
        };
        let Some(closing) = self.tokens[opening + 1..]
            .iter()
            .position(|token| end.admits(token.category))
        else {
            return &[];
        };
        &self.tokens[opening + 1..opening + 1 + closing]
    }
}

/// Evaluate every catalog entry against the window and select the best
/// match: longest consumed prefix first, catalog order on ties. Returns
/// `None` when no known statement shape applies, which the caller must
/// surface as a syntax error at the window's position.
pub fn match_best<'t>(window: &'t [Token<'t>]) -> Option<Formation<'t>> {
    let mut best: Option<(Match, FormationKind)> = None;

    for entry in catalog() {
        let Some(expression) = &entry.expression else {
            continue;
        };
        let Some(matched) = expression.matches(window) else {
            continue;
        };
        if matched.consumed == 0 {
            continue;
        }
        let better = match &best {
            None => true,
            Some((current, _)) => matched.consumed > current.consumed,
        };
        if better {
            best = Some((matched, entry.kind));
        }
    }

    best.map(|(matched, kind)| {
        debug!(?kind, consumed = matched.consumed, "matched");
        Formation {
            kind,
            tokens: &window[..matched.consumed],
        }
    })
}
