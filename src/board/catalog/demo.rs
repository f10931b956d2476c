use crate::board::domain::{
    ApplicationStatus, Job, JobApplication, JobId, Role, User, UserId,
};
use chrono::NaiveDate;

struct Listing {
    id: &'static str,
    title: &'static str,
    company: &'static str,
    location: &'static str,
    description: &'static str,
    salary: &'static str,
    category: &'static str,
    job_type: &'static str,
    posted: (i32, u32, u32),
    deadline: (i32, u32, u32),
    skills: &'static [&'static str],
    logo: Option<&'static str>,
}

const LISTINGS: &[Listing] = &[
    Listing {
        id: "1",
        title: "Senior Frontend Developer",
        company: "TechCorp Inc.",
        location: "San Francisco, CA",
        description: "Build and maintain the customer dashboard used by thousands of businesses. You will own component architecture and performance budgets.",
        salary: "$120,000 - $150,000",
        category: "Technology",
        job_type: "Full-time",
        posted: (2025, 3, 1),
        deadline: (2025, 4, 15),
        skills: &["React", "TypeScript", "CSS"],
        logo: Some("https://placehold.co/400x400?text=TC"),
    },
    Listing {
        id: "2",
        title: "Backend Engineer",
        company: "DataFlow Systems",
        location: "Remote",
        description: "Design APIs and data pipelines that move billions of events per day. Experience with distributed systems is a plus.",
        salary: "$130,000 - $160,000",
        category: "Technology",
        job_type: "Full-time",
        posted: (2025, 3, 3),
        deadline: (2025, 4, 20),
        skills: &["Rust", "PostgreSQL", "Kafka"],
        logo: None,
    },
    Listing {
        id: "3",
        title: "Marketing Manager",
        company: "BrightPath Media",
        location: "New York, NY",
        description: "Lead campaign planning across paid and organic channels and report results to the executive team.",
        salary: "$90,000 - $110,000",
        category: "Marketing",
        job_type: "Full-time",
        posted: (2025, 2, 24),
        deadline: (2025, 4, 1),
        skills: &["SEO", "Analytics", "Content Strategy"],
        logo: Some("https://placehold.co/400x400?text=BP"),
    },
    Listing {
        id: "4",
        title: "UX Designer",
        company: "TechCorp Inc.",
        location: "Austin, TX",
        description: "Research user needs and turn them into flows, wireframes and polished interfaces.",
        salary: "$95,000 - $120,000",
        category: "Design",
        job_type: "Contract",
        posted: (2025, 3, 5),
        deadline: (2025, 4, 30),
        skills: &["Figma", "User Research", "Prototyping"],
        logo: Some("https://placehold.co/400x400?text=TC"),
    },
    Listing {
        id: "5",
        title: "Financial Analyst",
        company: "Summit Capital",
        location: "Chicago, IL",
        description: "Build forecasting models and support quarterly planning for the operations group.",
        salary: "$85,000 - $100,000",
        category: "Finance",
        job_type: "Full-time",
        posted: (2025, 2, 28),
        deadline: (2025, 3, 31),
        skills: &["Excel", "SQL", "Forecasting"],
        logo: None,
    },
    Listing {
        id: "6",
        title: "Customer Support Specialist",
        company: "HelpDesk Pro",
        location: "Remote",
        description: "Answer customer questions over chat and email and escalate product issues to engineering.",
        salary: "$45,000 - $55,000",
        category: "Customer Service",
        job_type: "Part-time",
        posted: (2025, 3, 7),
        deadline: (2025, 4, 10),
        skills: &["Communication", "Zendesk"],
        logo: None,
    },
    Listing {
        id: "7",
        title: "Data Science Intern",
        company: "DataFlow Systems",
        location: "San Francisco, CA",
        description: "Work with the analytics team on experimentation and churn modelling for a summer term.",
        salary: "$30/hour",
        category: "Technology",
        job_type: "Internship",
        posted: (2025, 3, 10),
        deadline: (2025, 5, 1),
        skills: &["Python", "Statistics", "Pandas"],
        logo: None,
    },
    Listing {
        id: "8",
        title: "Registered Nurse",
        company: "Northside Health",
        location: "Chicago, IL",
        description: "Provide patient care on a busy medical-surgical floor with rotating shifts.",
        salary: "$75,000 - $90,000",
        category: "Healthcare",
        job_type: "Full-time",
        posted: (2025, 3, 2),
        deadline: (2025, 4, 5),
        skills: &["Patient Care", "BLS Certification"],
        logo: Some("https://placehold.co/400x400?text=NH"),
    },
];

fn date((year, month, day): (i32, u32, u32)) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

pub(super) fn jobs() -> Vec<Job> {
    LISTINGS
        .iter()
        .map(|listing| Job {
            id: JobId(listing.id.to_string()),
            title: listing.title.to_string(),
            company: listing.company.to_string(),
            location: listing.location.to_string(),
            description: listing.description.to_string(),
            salary: listing.salary.to_string(),
            category: listing.category.to_string(),
            job_type: listing.job_type.to_string(),
            posted_date: date(listing.posted),
            deadline: date(listing.deadline),
            skills: listing.skills.iter().map(|skill| skill.to_string()).collect(),
            logo: listing.logo.map(str::to_string),
        })
        .collect()
}

pub(super) fn users() -> Vec<User> {
    [
        ("1", "John Doe", "seeker@example.com", Role::JobSeeker),
        ("2", "Jane Smith", "employer@example.com", Role::Employer),
        ("3", "Admin User", "admin@example.com", Role::Admin),
        ("4", "Maria Garcia", "maria.garcia@example.com", Role::JobSeeker),
        ("5", "Robert Chen", "hiring@dataflow.example.com", Role::Employer),
    ]
    .into_iter()
    .map(|(id, name, email, role)| User {
        id: UserId(id.to_string()),
        name: name.to_string(),
        email: email.to_string(),
        role,
    })
    .collect()
}

pub(super) fn applications() -> Vec<JobApplication> {
    [
        ("a1", "1", "1", ApplicationStatus::Pending, (2025, 3, 8)),
        ("a2", "2", "1", ApplicationStatus::Reviewed, (2025, 3, 9)),
        ("a3", "5", "1", ApplicationStatus::Rejected, (2025, 3, 4)),
        ("a4", "3", "4", ApplicationStatus::Accepted, (2025, 3, 1)),
    ]
    .into_iter()
    .map(|(id, job_id, user_id, status, applied_on)| JobApplication {
        id: id.to_string(),
        job_id: JobId(job_id.to_string()),
        user_id: UserId(user_id.to_string()),
        status,
        date: date(applied_on),
        resume: format!("resumes/{user_id}/resume.pdf"),
        cover_letter: String::new(),
    })
    .collect()
}
