//! Pulls resume text out of an uploaded file and finds the catalog skills it mentions.

use crate::errors::AppError;
use crate::models::skill::Skill;

/// Upload formats we can read text from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResumeFormat {
    Pdf,
    PlainText,
}

impl ResumeFormat {
    pub fn from_filename(filename: &str) -> Result<Self, AppError> {
        let extension = filename
            .rsplit_once('.')
            .map(|(_, ext)| ext.to_ascii_lowercase())
            .unwrap_or_default();

        match extension.as_str() {
            "pdf" => Ok(ResumeFormat::Pdf),
            "txt" | "md" => Ok(ResumeFormat::PlainText),
            _ => Err(AppError::Validation(format!(
                "Unsupported resume file '{filename}': upload a .pdf, .txt or .md file"
            ))),
        }
    }
}

/// Extracts the text of an uploaded resume.
pub fn extract_resume_text(filename: &str, data: &[u8]) -> Result<String, AppError> {
    if data.is_empty() {
        return Err(AppError::Validation(format!("Resume file '{filename}' is empty")));
    }

    let text = match ResumeFormat::from_filename(filename)? {
        ResumeFormat::Pdf => pdf_extract::extract_text_from_mem(data).map_err(|e| {
            AppError::UnprocessableEntity(format!("Could not read PDF '{filename}': {e}"))
        })?,
        ResumeFormat::PlainText => String::from_utf8(data.to_vec()).map_err(|_| {
            AppError::UnprocessableEntity(format!("Resume '{filename}' is not valid UTF-8 text"))
        })?,
    };

    if text.trim().is_empty() {
        return Err(AppError::UnprocessableEntity(format!(
            "No text could be extracted from '{filename}'"
        )));
    }
    Ok(text)
}

/// Returns the catalog skills named in `text`, in catalog order.
/// A skill counts when its name appears as a whole term (case-insensitive).
pub fn extract_skills(text: &str, catalog: &[Skill]) -> Vec<Skill> {
    let haystack = text.to_lowercase();
    let mut found: Vec<Skill> = Vec::new();

    for skill in catalog {
        let needle = skill.name.trim().to_lowercase();
        if needle.is_empty() || found.iter().any(|f| f.same_name(&skill.name)) {
            continue;
        }
        if contains_term(&haystack, &needle) {
            found.push(skill.clone());
        }
    }
    found
}

/// Substring match that refuses to start or end inside an alphanumeric run,
/// so "Java" does not match "JavaScript" while "Node.js" and "CI/CD" still match.
pub(crate) fn contains_term(haystack: &str, needle: &str) -> bool {
    let mut start = 0;
    while let Some(offset) = haystack[start..].find(needle) {
        let begin = start + offset;
        let end = begin + needle.len();

        let before_ok = haystack[..begin]
            .chars()
            .next_back()
            .map(|c| !c.is_alphanumeric())
            .unwrap_or(true);
        let after_ok = haystack[end..]
            .chars()
            .next()
            .map(|c| !c.is_alphanumeric())
            .unwrap_or(true);

        if before_ok && after_ok {
            return true;
        }
        start = begin + haystack[begin..].chars().next().map(char::len_utf8).unwrap_or(1);
    }
    false
}
