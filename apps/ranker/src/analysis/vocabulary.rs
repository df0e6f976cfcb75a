//! Fixed word lists used to synthesize and score candidates.

pub const NAMES: &[&str] = &[
    "Alex Johnson",
    "Sarah Chen",
    "Michael Rodriguez",
    "Emily Davis",
    "David Kim",
    "Jessica Martinez",
    "James Wilson",
    "Ashley Brown",
    "Robert Taylor",
    "Amanda Garcia",
    "Christopher Lee",
    "Jennifer White",
    "Daniel Harris",
    "Lisa Thompson",
    "Matthew Clark",
    "Michelle Lewis",
    "Andrew Walker",
    "Stephanie Hall",
    "Joshua Allen",
    "Nicole Young",
];

pub const SKILLS: &[&str] = &[
    "JavaScript",
    "Python",
    "React",
    "Node.js",
    "SQL",
    "AWS",
    "Docker",
    "Kubernetes",
    "Machine Learning",
    "Data Analysis",
    "Project Management",
    "Agile",
    "Git",
    "TypeScript",
    "Java",
    "C++",
    "MongoDB",
    "PostgreSQL",
    "GraphQL",
    "REST APIs",
    "Leadership",
    "Communication",
    "Problem Solving",
    "Team Collaboration",
];

pub const EXPERIENCE_TITLES: &[&str] = &[
    "Senior Software Engineer",
    "Full Stack Developer",
    "Data Scientist",
    "Product Manager",
    "DevOps Engineer",
    "Frontend Developer",
    "Backend Developer",
    "Machine Learning Engineer",
    "Technical Lead",
    "Software Architect",
    "QA Engineer",
    "UI/UX Designer",
    "Business Analyst",
    "Project Manager",
    "Systems Administrator",
    "Cloud Engineer",
    "Security Engineer",
];

pub const COMPANIES: &[&str] = &[
    "Google",
    "Microsoft",
    "Apple",
    "Amazon",
    "Meta",
    "Netflix",
    "Tesla",
    "Spotify",
    "Uber",
    "Airbnb",
    "Salesforce",
    "Adobe",
    "Oracle",
    "IBM",
    "Intel",
    "Cisco",
    "Shopify",
    "Stripe",
    "Slack",
    "Zoom",
    "Dropbox",
    "Twitter",
    "LinkedIn",
    "PayPal",
];

/// Lowercased; compared against the lowercased candidate company.
pub const TOP_COMPANIES: &[&str] = &["google", "microsoft", "apple", "amazon", "meta", "netflix"];

pub const SENIORITY_TERMS: &[&str] = &["senior", "lead", "principal", "manager", "director"];

pub const EDUCATION_TERMS: &[&str] = &["degree", "bachelor", "master", "phd", "university", "college"];

pub const LOCATION_TERMS: &[&str] = &["remote", "san francisco", "new york", "seattle", "austin"];

pub const DEFAULT_EDUCATION: &str = "Bachelor's Degree in Computer Science";

pub const DEFAULT_LOCATION: &str = "San Francisco, CA";

/// Filename fragments that mark an upload as a multi-resume bundle.
pub const BULK_FILENAME_HINTS: &[&str] = &["bulk", "multiple", "batch", "resumes", "candidates"];

pub const STOP_WORDS: &[&str] = &[
    "the", "and", "for", "are", "but", "not", "you", "all", "can", "had", "her", "was", "one",
    "our", "out", "day", "get", "has", "him", "his", "how", "its", "may", "now", "see", "two",
    "who", "did", "put", "say", "she", "too", "use", "with", "have", "this", "will", "your",
    "from", "they", "been", "some", "than", "them", "were", "what", "when", "into", "also",
    "that", "their", "there", "which", "would", "about",
];
