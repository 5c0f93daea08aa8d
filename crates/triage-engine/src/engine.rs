//! DiagnosisEngine: the match → accumulate → rank pipeline over one knowledge base.

use tracing::{debug, info};
use triage_core::config::RankingConfig;
use triage_core::errors::ConfigError;
use triage_core::models::{Cause, Diagnosis, Observation};
use triage_core::traits::IDiagnoser;
use triage_core::Certainty;
use triage_knowledge::KnowledgeBase;

use crate::combinator::{self, Evidence};
use crate::matcher;
use crate::ranker;

/// A ranked cause resolved against the knowledge base, for presentation.
#[derive(Debug, Clone, Copy)]
pub struct Finding<'kb> {
    pub cause: &'kb Cause,
    pub confidence: Certainty,
}

impl<'kb> Finding<'kb> {
    /// Remedy steps for this cause, in order.
    pub fn remedies(&self) -> &'kb [String] {
        &self.cause.remedies
    }
}

/// Stateless diagnosis over a borrowed, immutable knowledge base.
///
/// Every call is a pure function of the observation; the engine may be
/// shared across threads freely.
#[derive(Debug, Clone)]
pub struct DiagnosisEngine<'kb> {
    kb: &'kb KnowledgeBase,
    ranking: RankingConfig,
}

impl<'kb> DiagnosisEngine<'kb> {
    /// Build an engine, rejecting ranking settings that would hide fired
    /// rules (`top_k = 0`, a `min_confidence` outside [0, 1] or NaN).
    pub fn new(kb: &'kb KnowledgeBase, ranking: RankingConfig) -> Result<Self, ConfigError> {
        ranking.validate()?;
        Ok(Self { kb, ranking })
    }

    pub fn knowledge_base(&self) -> &'kb KnowledgeBase {
        self.kb
    }

    pub fn ranking(&self) -> &RankingConfig {
        &self.ranking
    }

    /// Per-cause evidence before ranking. Useful for explaining a result.
    pub fn evidence(&self, observation: &Observation) -> Evidence {
        let fired = matcher::match_rules(observation, self.kb.rules());
        combinator::accumulate(self.kb, &fired)
    }

    /// Diagnose one observation.
    pub fn diagnose(&self, observation: &Observation) -> Diagnosis {
        if observation.is_empty() {
            debug!("empty observation");
            return Diagnosis::low_confidence();
        }

        let unknown = self.kb.unknown_symptoms(observation).len();
        if unknown > 0 {
            debug!(
                unknown,
                "observation contains ids outside the knowledge base"
            );
        }

        let evidence = self.evidence(observation);
        let diagnosis = ranker::rank(&evidence, &self.ranking);

        info!(
            observed = observation.len(),
            candidates = evidence.len(),
            status = ?diagnosis.status,
            top = diagnosis.top().map(|r| r.cause_id.as_str()).unwrap_or("-"),
            "diagnosis complete"
        );
        diagnosis
    }

    /// Convenience wrapper taking raw symptom ids.
    pub fn diagnose_ids<I, S>(&self, ids: I) -> Diagnosis
    where
        I: IntoIterator<Item = S>,
        S: Into<triage_core::SymptomId>,
    {
        self.diagnose(&Observation::from_ids(ids))
    }

    /// Resolve ranked causes to their full records. Unknown ids are skipped.
    pub fn findings(&self, diagnosis: &Diagnosis) -> Vec<Finding<'kb>> {
        diagnosis
            .ranked
            .iter()
            .filter_map(|ranked| {
                self.kb
                    .cause(ranked.cause_id.as_str())
                    .map(|cause| Finding {
                        cause,
                        confidence: ranked.confidence,
                    })
            })
            .collect()
    }
}

impl IDiagnoser for DiagnosisEngine<'_> {
    fn diagnose(&self, observation: &Observation) -> Diagnosis {
        DiagnosisEngine::diagnose(self, observation)
    }
}
