//! Profile editor rules: only the owner may save, and saved data is tidied first.

use uuid::Uuid;

use crate::errors::AppError;
use crate::models::skill::Skill;
use crate::models::user::{Profile, User};

pub fn ensure_owner(actor: &User, user_id: Uuid) -> Result<(), AppError> {
    if actor.id == user_id {
        Ok(())
    } else {
        Err(AppError::Forbidden(
            "Profiles can only be edited by their owner".to_string(),
        ))
    }
}

fn clean(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Trims text, drops blanks, de-duplicates skills (by name, case-insensitive)
/// and activities, and drops education entries without a degree or institution.
pub fn normalize_profile(profile: Profile) -> Profile {
    let mut skills: Vec<Skill> = Vec::with_capacity(profile.skills.len());
    for mut skill in profile.skills {
        skill.name = skill.name.trim().to_string();
        skill.category = skill.category.trim().to_string();
        if skill.name.is_empty() || skills.iter().any(|s| s.same_name(&skill.name)) {
            continue;
        }
        skills.push(skill);
    }

    let mut extra_activities: Vec<String> = Vec::new();
    for activity in profile.extra_activities {
        let activity = activity.trim().to_string();
        if !activity.is_empty() && !extra_activities.contains(&activity) {
            extra_activities.push(activity);
        }
    }

    let education = profile
        .education
        .into_iter()
        .map(|mut e| {
            e.degree = e.degree.trim().to_string();
            e.institution = e.institution.trim().to_string();
            e.field_of_study = e.field_of_study.trim().to_string();
            e.proof_id = clean(e.proof_id);
            e
        })
        .filter(|e| !e.degree.is_empty() && !e.institution.is_empty())
        .collect();

    let other_profiles = profile
        .other_profiles
        .into_iter()
        .map(|(k, v)| (k.trim().to_string(), v.trim().to_string()))
        .filter(|(k, v)| !k.is_empty() && !v.is_empty())
        .collect();

    Profile {
        profile_photo: clean(profile.profile_photo),
        linkedin: clean(profile.linkedin),
        github: clean(profile.github),
        other_profiles,
        address: clean(profile.address),
        experience_level: clean(profile.experience_level),
        skills,
        education,
        extra_activities,
        employment_status: profile.employment_status,
        current_employer: clean(profile.current_employer),
    }
}
