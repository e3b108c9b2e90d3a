//! Remote record resolution.
//!
//! Searches the remote source for a tracked item and disambiguates the
//! results by a small additive score. Ties keep the first-seen candidate so
//! the remote's own ordering (newest first) breaks them.

use crate::errors::FailureKind;
use crate::model::{EntryError, RemoteCandidate, Stage, TrackedItem};
use crate::ports::RemoteSource;

/// Scoring weights for candidate disambiguation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoringWeights {
    /// Organization field contains the expected org name
    pub org_match: i64,
    /// Rule-type label contains [`ScoringWeights::notice_marker`]
    pub notice_kind: i64,
    /// Candidate carries a non-empty issue date
    pub has_issue_date: i64,
    pub notice_marker: String,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            org_match: 100,
            notice_kind: 20,
            has_issue_date: 1,
            notice_marker: "고시".to_string(),
        }
    }
}

impl ScoringWeights {
    pub fn score(&self, candidate: &RemoteCandidate, org_hint: &str) -> i64 {
        let mut score = 0;
        let org_hint = org_hint.trim();
        if !org_hint.is_empty()
            && candidate
                .org_name
                .as_deref()
                .is_some_and(|org| org.contains(org_hint))
        {
            score += self.org_match;
        }
        if !self.notice_marker.is_empty()
            && candidate
                .rule_kind
                .as_deref()
                .is_some_and(|kind| kind.contains(self.notice_marker.as_str()))
        {
            score += self.notice_kind;
        }
        if candidate
            .issue_date
            .as_deref()
            .is_some_and(|d| !d.trim().is_empty())
        {
            score += self.has_issue_date;
        }
        score
    }
}

/// Index of the strictly highest-scoring candidate; ties keep the first.
pub fn pick_best(
    candidates: &[RemoteCandidate],
    org_hint: &str,
    weights: &ScoringWeights,
) -> Option<usize> {
    let mut best: Option<(usize, i64)> = None;
    for (idx, candidate) in candidates.iter().enumerate() {
        let score = weights.score(candidate, org_hint);
        match best {
            Some((_, top)) if score <= top => {}
            _ => best = Some((idx, score)),
        }
    }
    best.map(|(idx, _)| idx)
}

/// Winning candidate plus its extracted identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedCandidate {
    pub remote_id: String,
    pub candidate: RemoteCandidate,
}

/// Resolve a tracked item to one remote record.
///
/// Failures come back as a search-stage [`EntryError`] tagged with the
/// query: transport failures unchanged, `no_results` when the search yields
/// nothing, `id_missing` when the winner has no identifier.
pub fn resolve(
    source: &dyn RemoteSource,
    item: &TrackedItem,
    weights: &ScoringWeights,
    display: u32,
) -> Result<ResolvedCandidate, EntryError> {
    let query = item.search_query();
    let candidates = source
        .search(query, item.category_code(), display)
        .map_err(|e| EntryError::from_transport(Stage::Search, e).with_query(query))?;

    let Some(idx) = pick_best(&candidates, item.org_hint(), weights) else {
        return Err(EntryError::new(Stage::Search, FailureKind::NoResults).with_query(query));
    };

    let candidate = candidates[idx].clone();
    match candidate.id() {
        Some(id) => Ok(ResolvedCandidate {
            remote_id: id.to_string(),
            candidate,
        }),
        None => Err(EntryError::new(Stage::Search, FailureKind::IdMissing).with_query(query)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cand(org: &str, kind: &str, date: &str) -> RemoteCandidate {
        RemoteCandidate {
            org_name: Some(org.to_string()),
            rule_kind: Some(kind.to_string()),
            issue_date: Some(date.to_string()),
            remote_id: Some(format!("{}-{}", org, kind)),
            link: None,
        }
    }

    #[test]
    fn test_score_components() {
        let w = ScoringWeights::default();
        assert_eq!(w.score(&cand("소방청", "고시", "20260101"), "소방청"), 121);
        assert_eq!(w.score(&cand("국토교통부", "고시", ""), "소방청"), 20);
        assert_eq!(w.score(&RemoteCandidate::default(), "소방청"), 0);
    }

    #[test]
    fn test_empty_hint_never_matches() {
        let w = ScoringWeights::default();
        assert_eq!(w.score(&cand("소방청", "훈령", ""), ""), 0);
    }

    #[test]
    fn test_pick_best_strictly_highest_wins() {
        let w = ScoringWeights::default();
        let candidates = vec![
            cand("국토교통부", "고시", ""),
            cand("소방청", "고시", "20260101"),
        ];
        assert_eq!(pick_best(&candidates, "소방청", &w), Some(1));
    }

    #[test]
    fn test_pick_best_tie_keeps_first() {
        let w = ScoringWeights::default();
        let candidates = vec![cand("소방청", "고시", "1"), cand("소방청", "고시", "2")];
        assert_eq!(pick_best(&candidates, "소방청", &w), Some(0));
        assert_eq!(pick_best(&[], "소방청", &w), None);
    }
}
