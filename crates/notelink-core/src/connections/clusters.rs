use std::collections::HashSet;

use serde::Serialize;
use tracing::{debug, info};

use super::ConnectionFinder;
use crate::error::Result;
use crate::log_resource_metrics;
use crate::similarity::extract_key_phrases;
use crate::store::DocumentSource;

/// A group of mutually related documents around a seed document
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Cluster {
    /// First key phrase of the members' combined text, or the seed's name
    pub topic: String,
    /// Seed document first, then its neighbors best first
    pub member_ids: Vec<String>,
    /// Number of neighbors the seed pulled in
    pub connection_count: usize,
}

impl<S: DocumentSource + ?Sized> ConnectionFinder<'_, S> {
    /// Greedy single-pass clustering over the whole collection
    ///
    /// Each unassigned document seeds a group with its unassigned neighbors
    /// (capped by `clusters.neighbor_limit`, above `clusters.min_similarity`). Groups of
    /// at least `min_cluster_size` members become clusters and their members
    /// are not considered again. The result depends on listing order unless
    /// `clusters.sort_by_id` is set.
    #[tracing::instrument(skip(self))]
    pub fn find_note_clusters(&mut self, min_cluster_size: usize) -> Result<Vec<Cluster>> {
        let mut documents = self.source.list_documents()?;
        if self.config.clusters.sort_by_id {
            documents.sort_by(|a, b| a.id.cmp(&b.id));
        }
        let neighbor_limit = self.config.clusters.neighbor_limit;
        let min_similarity = self.config.clusters.min_similarity;

        let mut assigned: HashSet<String> = HashSet::new();
        let mut clusters = Vec::new();

        for seed in &documents {
            if assigned.contains(&seed.id) {
                continue;
            }

            // Assigned documents may outrank free ones, so widen the scan before capping
            let neighbors: Vec<String> = self
                .find_connected_notes(&seed.id, neighbor_limit + assigned.len(), min_similarity)?
                .into_iter()
                .map(|connection| connection.document_id)
                .filter(|id| !assigned.contains(id))
                .take(neighbor_limit)
                .collect();

            let mut member_ids = Vec::with_capacity(neighbors.len() + 1);
            member_ids.push(seed.id.clone());
            member_ids.extend(neighbors);

            if member_ids.len() < min_cluster_size {
                continue;
            }

            let topic = self
                .topic_of(&member_ids)
                .unwrap_or_else(|| seed.name.clone());
            debug!(seed = %seed.id, topic = %topic, members = member_ids.len(), "cluster");

            assigned.extend(member_ids.iter().cloned());
            clusters.push(Cluster {
                topic,
                connection_count: member_ids.len() - 1,
                member_ids,
            });
        }

        clusters.sort_by(|a, b| b.connection_count.cmp(&a.connection_count));
        info!(count = clusters.len(), "clusters found");
        log_resource_metrics!(self.cache.metrics(), "find_note_clusters");
        Ok(clusters)
    }

    /// First key phrase of the members' cached texts joined with spaces
    fn topic_of(&self, member_ids: &[String]) -> Option<String> {
        let combined = member_ids
            .iter()
            .map(|id| self.cache.get(id).map(|e| e.text.clone()).unwrap_or_default())
            .collect::<Vec<_>>()
            .join(" ");
        extract_key_phrases(&combined).into_iter().next()
    }
}
