use std::sync::Arc;

use futures::future::join_all;
use tracing::{debug, error, info, warn};

use crate::core::scoring::{match_score, GOOD_MATCH_THRESHOLD};
use crate::models::{Item, ItemKind, ItemQuery, MatchWeights, ScoredMatch};
use crate::services::{ItemStore, NotificationDispatcher};

/// Matching engine wiring the two item collections, the scoring heuristic
/// and the notification fan-out together.
///
/// All store and notifier failures are absorbed here: matching runs as a
/// side effect of item reporting and must never fail the caller's request,
/// so errors are logged and an empty result is returned instead.
#[derive(Clone)]
pub struct MatchEngine {
    lost: Arc<dyn ItemStore>,
    found: Arc<dyn ItemStore>,
    notifier: Arc<dyn NotificationDispatcher>,
    weights: MatchWeights,
    candidate_limit: usize,
}

impl MatchEngine {
    pub fn new(
        lost: Arc<dyn ItemStore>,
        found: Arc<dyn ItemStore>,
        notifier: Arc<dyn NotificationDispatcher>,
        weights: MatchWeights,
        candidate_limit: usize,
    ) -> Self {
        Self {
            lost,
            found,
            notifier,
            weights,
            candidate_limit,
        }
    }

    /// Find good matches for a newly reported item and notify both owners
    /// of every hit.
    ///
    /// Candidates come from the opposite collection, restricted to open
    /// items in the same category and capped at the configured limit of
    /// most recent reports. Only matches scoring above the good-match
    /// threshold are returned.
    pub async fn find_matches(&self, item: &Item, kind: ItemKind) -> Vec<ScoredMatch> {
        let candidates = match self.fetch_candidates(item, kind).await {
            Ok(candidates) => candidates,
            Err(e) => {
                error!("Failed to fetch candidates for item {}: {}", item.id, e);
                return Vec::new();
            }
        };

        debug!(
            "Scoring {} candidate {} items for {} item {}",
            candidates.len(),
            kind.opposite(),
            kind,
            item.id
        );

        let mut matches = rank_candidates(item, candidates, &self.weights);
        matches.retain(|m| m.is_good_match);

        info!(
            "Found {} good matches for {} item: {}",
            matches.len(),
            kind,
            item.item_name
        );

        self.notify_owners(item, kind, &matches).await;
        matches
    }

    /// Full ranked candidate list for an existing item, good and poor
    /// matches alike, each annotated with its score. Sends no notifications.
    pub async fn matches_for_item(&self, item_id: &str, kind: ItemKind) -> Vec<ScoredMatch> {
        let store = self.store_for(kind);
        let item = match store.find_by_id(item_id).await {
            Ok(Some(item)) => item,
            Ok(None) => {
                warn!("No {} item found with id {}", kind, item_id);
                return Vec::new();
            }
            Err(e) => {
                error!("Failed to load {} item {}: {}", kind, item_id, e);
                return Vec::new();
            }
        };

        let candidates = match self.fetch_candidates(&item, kind).await {
            Ok(candidates) => candidates,
            Err(e) => {
                error!("Failed to fetch candidates for item {}: {}", item_id, e);
                return Vec::new();
            }
        };

        rank_candidates(&item, candidates, &self.weights)
    }

    /// Query the opposite collection for open items the reference could
    /// plausibly match.
    async fn fetch_candidates(
        &self,
        reference: &Item,
        kind: ItemKind,
    ) -> Result<Vec<Item>, crate::services::StoreError> {
        let opposite = kind.opposite();
        let query = ItemQuery {
            category: reference.category,
            status: opposite.open_status(),
            limit: self.candidate_limit,
        };
        self.store_for(opposite).find(&query).await
    }

    fn store_for(&self, kind: ItemKind) -> &Arc<dyn ItemStore> {
        match kind {
            ItemKind::Lost => &self.lost,
            ItemKind::Found => &self.found,
        }
    }

    /// Alert both parties of every good match: the candidate's owner hears
    /// about the newly reported item, the reporter hears about the candidate.
    /// Send failures are logged per notification and never bubble up.
    async fn notify_owners(&self, item: &Item, kind: ItemKind, matches: &[ScoredMatch]) {
        if matches.is_empty() {
            return;
        }

        let sends = matches.iter().flat_map(|m| {
            [
                self.notifier.notify_match(&m.item.owner_id, item, kind),
                self.notifier
                    .notify_match(&item.owner_id, &m.item, kind.opposite()),
            ]
        });

        for result in join_all(sends).await {
            if let Err(e) = result {
                warn!("Failed to send match notification: {}", e);
            }
        }
    }
}

/// Score every candidate against the reference and sort best first.
///
/// The sort is stable, so candidates with equal scores keep their retrieval
/// order (most recently reported first).
pub fn rank_candidates(
    reference: &Item,
    candidates: Vec<Item>,
    weights: &MatchWeights,
) -> Vec<ScoredMatch> {
    let mut matches: Vec<ScoredMatch> = candidates
        .into_iter()
        .map(|candidate| {
            let score = match_score(reference, &candidate, weights);
            ScoredMatch {
                item: candidate,
                score,
                is_good_match: score > GOOD_MATCH_THRESHOLD,
            }
        })
        .collect();

    matches.sort_by(|a, b| b.score.cmp(&a.score));
    matches
}
