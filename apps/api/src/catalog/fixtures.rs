//! Demo data the service starts with when `SEED_FIXTURES` is on.

use chrono::{DateTime, TimeZone, Utc};
use uuid::Uuid;

use crate::models::job::{
    EmploymentType, ExperienceLevel, JobRequirement, LocationType, SalaryRange,
};
use crate::models::resume::Resume;
use crate::models::skill::Skill;
use crate::models::user::{Profile, User, UserRole};

pub const ADMIN_EMAIL: &str = "admin@resumeai.com";

fn date(year: i32, month: u32, day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, 0, 0, 0)
        .single()
        .unwrap_or_else(Utc::now)
}

fn skills(list: &[(&str, &str, i32)]) -> Vec<Skill> {
    list.iter()
        .map(|&(name, category, weight)| Skill::new(name, category, weight))
        .collect()
}

pub fn fixture_skills() -> Vec<Skill> {
    skills(&[
        ("React", "Frontend", 5),
        ("TypeScript", "Frontend", 4),
        ("Python", "Backend", 5),
        ("Node.js", "Backend", 4),
        ("MongoDB", "Database", 3),
        ("PostgreSQL", "Database", 4),
        ("AWS", "Cloud", 4),
        ("Docker", "DevOps", 3),
        ("Kubernetes", "DevOps", 4),
        ("Git", "Tools", 3),
        ("CI/CD", "DevOps", 3),
        ("Redux", "Frontend", 3),
        ("REST API", "Backend", 4),
        ("GraphQL", "Backend", 3),
        ("Jest", "Testing", 3),
    ])
}

fn resume(
    name: &str,
    email: &str,
    filename: &str,
    uploaded: DateTime<Utc>,
    list: &[(&str, &str, i32)],
    score: u32,
) -> Resume {
    Resume {
        id: Uuid::new_v4(),
        name: name.to_string(),
        email: email.to_string(),
        filename: filename.to_string(),
        upload_date: uploaded,
        skills: skills(list),
        score: Some(score),
        owner_id: None,
    }
}

pub fn fixture_resumes() -> Vec<Resume> {
    vec![
        resume(
            "John Doe",
            "john.doe@example.com",
            "john_doe_resume.pdf",
            date(2023, 6, 15),
            &[
                ("React", "Frontend", 5),
                ("TypeScript", "Frontend", 4),
                ("Node.js", "Backend", 4),
                ("MongoDB", "Database", 3),
            ],
            85,
        ),
        resume(
            "Jane Smith",
            "jane.smith@example.com",
            "jane_smith_resume.pdf",
            date(2023, 7, 2),
            &[
                ("Python", "Backend", 5),
                ("PostgreSQL", "Database", 4),
                ("AWS", "Cloud", 4),
                ("Docker", "DevOps", 3),
            ],
            78,
        ),
        resume(
            "Alex Johnson",
            "alex.johnson@example.com",
            "alex_johnson_resume.pdf",
            date(2023, 7, 10),
            &[
                ("React", "Frontend", 5),
                ("Redux", "Frontend", 3),
                ("JavaScript", "Frontend", 5),
                ("Git", "Tools", 3),
            ],
            72,
        ),
        resume(
            "Sarah Williams",
            "sarah.williams@example.com",
            "sarah_williams_resume.pdf",
            date(2023, 8, 5),
            &[
                ("Python", "Backend", 5),
                ("Django", "Backend", 4),
                ("PostgreSQL", "Database", 4),
                ("AWS", "Cloud", 4),
            ],
            92,
        ),
    ]
}

struct JobSeed<'a> {
    title: &'a str,
    description: &'a str,
    skills: &'a [(&'a str, &'a str, i32)],
    created_at: DateTime<Utc>,
    salary: (u64, u64, &'a str),
    employment_type: EmploymentType,
    location_type: LocationType,
    experience_level: ExperienceLevel,
    location: &'a str,
}

impl JobSeed<'_> {
    fn build(self) -> JobRequirement {
        let (min, max, currency) = self.salary;
        JobRequirement {
            id: Uuid::new_v4(),
            title: self.title.to_string(),
            description: self.description.to_string(),
            required_skills: skills(self.skills),
            salary: Some(SalaryRange {
                min,
                max,
                currency: currency.to_string(),
            }),
            employment_type: Some(self.employment_type),
            location_type: Some(self.location_type),
            experience_level: Some(self.experience_level),
            location: Some(self.location.to_string()),
            deadline: None,
            created_at: self.created_at,
        }
    }
}

pub fn fixture_jobs() -> Vec<JobRequirement> {
    vec![
        JobSeed {
            title: "Frontend Developer",
            description: "We are looking for a skilled Frontend Developer with experience in React and TypeScript.",
            skills: &[
                ("React", "Frontend", 5),
                ("TypeScript", "Frontend", 4),
                ("Redux", "Frontend", 3),
                ("Jest", "Testing", 3),
            ],
            created_at: date(2023, 6, 10),
            salary: (80_000, 110_000, "USD"),
            employment_type: EmploymentType::FullTime,
            location_type: LocationType::Hybrid,
            experience_level: ExperienceLevel::Mid,
            location: "New York, NY",
        },
        JobSeed {
            title: "Backend Developer",
            description: "Looking for a Backend Developer proficient in Python and database management.",
            skills: &[
                ("Python", "Backend", 5),
                ("PostgreSQL", "Database", 4),
                ("REST API", "Backend", 4),
                ("Docker", "DevOps", 3),
            ],
            created_at: date(2023, 7, 1),
            salary: (90_000, 130_000, "USD"),
            employment_type: EmploymentType::FullTime,
            location_type: LocationType::Remote,
            experience_level: ExperienceLevel::Senior,
            location: "Remote (US)",
        },
        JobSeed {
            title: "Junior React Developer",
            description: "Great opportunity for junior developers to gain experience working with React.",
            skills: &[
                ("React", "Frontend", 3),
                ("JavaScript", "Frontend", 4),
                ("HTML/CSS", "Frontend", 3),
            ],
            created_at: date(2023, 8, 15),
            salary: (60_000, 75_000, "USD"),
            employment_type: EmploymentType::FullTime,
            location_type: LocationType::OnSite,
            experience_level: ExperienceLevel::Entry,
            location: "Austin, TX",
        },
        JobSeed {
            title: "DevOps Engineer (Contract)",
            description: "6-month contract position for an experienced DevOps engineer.",
            skills: &[
                ("Docker", "DevOps", 4),
                ("Kubernetes", "DevOps", 5),
                ("AWS", "Cloud", 4),
                ("CI/CD", "DevOps", 4),
            ],
            created_at: date(2023, 9, 5),
            salary: (100, 150, "USD/hr"),
            employment_type: EmploymentType::Contract,
            location_type: LocationType::Remote,
            experience_level: ExperienceLevel::Senior,
            location: "Remote (Global)",
        },
        JobSeed {
            title: "UX/UI Designer Intern",
            description: "Internship opportunity for aspiring UX/UI designers to work on real-world projects.",
            skills: &[
                ("Figma", "Design", 3),
                ("UI Design", "Design", 3),
                ("Prototyping", "Design", 2),
            ],
            created_at: date(2023, 10, 1),
            salary: (25, 30, "USD/hr"),
            employment_type: EmploymentType::Internship,
            location_type: LocationType::Hybrid,
            experience_level: ExperienceLevel::Entry,
            location: "San Francisco, CA",
        },
    ]
    .into_iter()
    .map(JobSeed::build)
    .collect()
}

pub fn fixture_admin() -> User {
    User {
        id: Uuid::new_v4(),
        email: ADMIN_EMAIL.to_string(),
        name: "Admin User".to_string(),
        role: UserRole::Admin,
        profile: Profile::default(),
    }
}
