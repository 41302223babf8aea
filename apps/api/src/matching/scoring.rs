//! Match Scoring — pluggable, trait-based scorer for a resume against a job posting.
//!
//! Default: `SkillOverlapScorer` (pure-Rust, deterministic, weighted skill overlap).
//!
//! `AppState` holds an `Arc<dyn MatchScorer>`, chosen at startup.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::matching::skill_extraction::contains_term;
use crate::models::job::JobRequirement;
use crate::models::resume::Resume;
use crate::models::skill::Skill;

const EXACT_STRENGTH: f32 = 1.0;
const PARTIAL_NAME_STRENGTH: f32 = 0.6;
const SAME_CATEGORY_STRENGTH: f32 = 0.3;

const MATCHED_THRESHOLD: f32 = 0.8;
const PARTIAL_THRESHOLD: f32 = 0.3;

// ────────────────────────────────────────────────────────────────────────────
// Output data models
// ────────────────────────────────────────────────────────────────────────────

/// How well the resume covers one required skill.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillMatch {
    pub required: String,
    pub evidence: Option<String>, // resume skill that covers it
    pub weight: i32,
    pub strength: f32, // 0.0 – 1.0
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchReport {
    pub score: u32,                   // 0 – 100
    pub matched: Vec<SkillMatch>,     // strength ≥ 0.8
    pub partial: Vec<SkillMatch>,     // 0.3 – 0.79
    pub missing: Vec<SkillMatch>,     // strength < 0.3
    pub recommendation: String,
    pub scorer_backend: String,
}

// ────────────────────────────────────────────────────────────────────────────
// Trait definition
// ────────────────────────────────────────────────────────────────────────────

/// Implement this to swap scoring backends without touching handlers or the store.
#[async_trait]
pub trait MatchScorer: Send + Sync {
    async fn score(&self, resume: &Resume, job: &JobRequirement) -> Result<MatchReport, AppError>;
}

/// Weighted skill-overlap scorer.
///
/// For each required skill the best resume skill decides the strength:
/// exact name 1.0, one name containing the other as a whole term 0.6,
/// same category 0.3.
/// score = Σ(strength × weight) / Σ(weight) × 100, weights clamped at 0.
pub struct SkillOverlapScorer;

#[async_trait]
impl MatchScorer for SkillOverlapScorer {
    async fn score(&self, resume: &Resume, job: &JobRequirement) -> Result<MatchReport, AppError> {
        Ok(compute_skill_overlap(&resume.skills, &job.required_skills))
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Core overlap algorithm
// ────────────────────────────────────────────────────────────────────────────

pub fn compute_skill_overlap(candidate: &[Skill], required: &[Skill]) -> MatchReport {
    let mut matched = Vec::new();
    let mut partial = Vec::new();
    let mut missing = Vec::new();

    let mut total_weight = 0.0_f32;
    let mut total_score = 0.0_f32;

    for req in required {
        let weight = req.weight.max(0) as f32;
        total_weight += weight;

        let (strength, evidence) = best_match(candidate, req);
        total_score += strength * weight;

        let skill_match = SkillMatch {
            required: req.name.clone(),
            evidence,
            weight: req.weight,
            strength,
        };

        if strength >= MATCHED_THRESHOLD {
            matched.push(skill_match);
        } else if strength >= PARTIAL_THRESHOLD {
            partial.push(skill_match);
        } else {
            missing.push(skill_match);
        }
    }

    let score = if total_weight > 0.0 {
        ((total_score / total_weight) * 100.0).round().clamp(0.0, 100.0) as u32
    } else {
        0
    };

    let recommendation = if required.is_empty() {
        "The job lists no required skills, so there is nothing to match against.".to_string()
    } else {
        build_recommendation(score, &missing)
    };

    MatchReport {
        score,
        matched,
        partial,
        missing,
        recommendation,
        scorer_backend: "skill_overlap".to_string(),
    }
}

fn best_match(candidate: &[Skill], req: &Skill) -> (f32, Option<String>) {
    let req_name = req.name.trim().to_lowercase();
    let mut best = (0.0_f32, None);

    for skill in candidate {
        let name = skill.name.trim().to_lowercase();
        let strength = if name == req_name {
            EXACT_STRENGTH
        } else if !name.is_empty()
            && !req_name.is_empty()
            && (contains_term(&name, &req_name) || contains_term(&req_name, &name))
        {
            PARTIAL_NAME_STRENGTH
        } else if skill.category.trim().eq_ignore_ascii_case(req.category.trim()) {
            SAME_CATEGORY_STRENGTH
        } else {
            0.0
        };

        if strength > best.0 {
            best = (strength, Some(skill.name.clone()));
        }
    }
    best
}

fn build_recommendation(score: u32, missing: &[SkillMatch]) -> String {
    let top_missing: Vec<&str> = missing.iter().take(3).map(|m| m.required.as_str()).collect();

    if score >= 80 {
        "Strong match. The resume covers the key required skills.".to_string()
    } else if score >= 50 {
        format!(
            "Moderate match ({score}/100). Missing: {}.",
            top_missing.join(", ")
        )
    } else {
        format!(
            "Weak match ({score}/100). Significant gaps: {}.",
            top_missing.join(", ")
        )
    }
}
