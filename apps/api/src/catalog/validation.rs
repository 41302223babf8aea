use crate::errors::AppError;
use crate::models::job::NewJobRequirement;

/// Checks a job posting before it reaches the store.
///
/// FAIL conditions:
/// - blank title or description
/// - no required skills selected
/// - a salary band whose min exceeds its max
pub fn validate_new_job(job: &NewJobRequirement) -> Result<(), AppError> {
    let mut problems = Vec::new();

    if job.title.trim().is_empty() {
        problems.push("title is required".to_string());
    }
    if job.description.trim().is_empty() {
        problems.push("description is required".to_string());
    }
    if job.required_skills.is_empty() {
        problems.push("select at least one required skill".to_string());
    }
    if job.required_skills.iter().any(|s| s.name.trim().is_empty()) {
        problems.push("required skills must have a name".to_string());
    }
    if let Some(salary) = &job.salary {
        if salary.min > salary.max {
            problems.push(format!(
                "salary min ({}) must not exceed max ({})",
                salary.min, salary.max
            ));
        }
    }

    if problems.is_empty() {
        Ok(())
    } else {
        Err(AppError::Validation(problems.join("; ")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::job::SalaryRange;
    use crate::models::skill::Skill;

    fn valid_job() -> NewJobRequirement {
        NewJobRequirement {
            title: "Backend Developer".to_string(),
            description: "Python and databases".to_string(),
            required_skills: vec![Skill::new("Python", "Backend", 5)],
            ..Default::default()
        }
    }

    #[test]
    fn test_valid_job_passes() {
        assert!(validate_new_job(&valid_job()).is_ok());
    }

    #[test]
    fn test_blank_title_fails() {
        let job = NewJobRequirement {
            title: "   ".to_string(),
            ..valid_job()
        };
        let err = validate_new_job(&job).unwrap_err();
        assert!(err.to_string().contains("title is required"));
    }

    #[test]
    fn test_missing_skills_fails() {
        let job = NewJobRequirement {
            required_skills: vec![],
            ..valid_job()
        };
        assert!(matches!(validate_new_job(&job), Err(AppError::Validation(_))));
    }

    #[test]
    fn test_inverted_salary_fails() {
        let job = NewJobRequirement {
            salary: Some(SalaryRange {
                min: 120_000,
                max: 90_000,
                currency: "USD".to_string(),
            }),
            ..valid_job()
        };
        let err = validate_new_job(&job).unwrap_err();
        assert!(err.to_string().contains("salary min"));
    }

    #[test]
    fn test_all_problems_reported_together() {
        let job = NewJobRequirement::default();
        let message = validate_new_job(&job).unwrap_err().to_string();
        assert!(message.contains("title"));
        assert!(message.contains("description"));
        assert!(message.contains("skill"));
    }
}
