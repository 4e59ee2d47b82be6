//! Value pools for synthetic employee generation.
//!
//! These are plain data, not logic: categorical pools match the CHECK
//! constraints of the employee schema exactly, and the department/position
//! map encodes which positions are valid for which department.

pub const GENDERS: &[&str] = &["Male", "Female", "Other"];

pub const MARITAL_STATUSES: &[&str] = &["Single", "Married", "Divorced", "Widowed"];

pub const EMPLOYMENT_TYPES: &[&str] = &["Full-time", "Part-time", "Contract", "Temporary"];

/// All statuses the schema permits.
pub const EMPLOYMENT_STATUSES: &[&str] = &["Active", "Inactive", "Terminated", "On Leave"];

/// Draw pool weighted 4:1:1 toward `Active`.
pub const EMPLOYMENT_STATUSES_WEIGHTED: &[&str] = &[
    "Active", "Active", "Active", "Active", "On Leave", "Inactive",
];

pub const DEPARTMENTS: &[&str] = &[
    "Engineering",
    "Marketing",
    "Sales",
    "HR",
    "Finance",
    "Operations",
    "IT",
    "Legal",
    "Customer Service",
];

/// Positions valid for the given department. Empty slice for unknown names.
pub fn positions_for(department: &str) -> &'static [&'static str] {
    match department {
        "Engineering" => &[
            "Software Engineer",
            "Senior Software Engineer",
            "Lead Engineer",
            "Engineering Manager",
            "DevOps Engineer",
        ],
        "Marketing" => &[
            "Marketing Specialist",
            "Digital Marketing Manager",
            "Content Manager",
            "Brand Manager",
            "Marketing Director",
        ],
        "Sales" => &[
            "Sales Representative",
            "Sales Manager",
            "Account Executive",
            "Sales Director",
            "Business Development Manager",
        ],
        "HR" => &[
            "HR Specialist",
            "HR Manager",
            "Recruiter",
            "HR Director",
            "HR Business Partner",
        ],
        "Finance" => &[
            "Financial Analyst",
            "Accountant",
            "Finance Manager",
            "CFO",
            "Budget Analyst",
        ],
        "Operations" => &[
            "Operations Manager",
            "Operations Analyst",
            "Operations Director",
            "Process Manager",
            "Quality Analyst",
        ],
        "IT" => &[
            "IT Support Specialist",
            "System Administrator",
            "IT Manager",
            "Network Engineer",
            "IT Director",
        ],
        "Legal" => &[
            "Legal Counsel",
            "Legal Assistant",
            "Compliance Officer",
            "Legal Director",
            "Contract Manager",
        ],
        "Customer Service" => &[
            "Customer Service Rep",
            "Customer Success Manager",
            "Support Manager",
            "Customer Service Director",
        ],
        _ => &[],
    }
}

pub const JOB_LEVELS: &[&str] = &[
    "Entry", "Mid", "Senior", "Lead", "Manager", "Director", "VP", "C-Level",
];

pub const EDUCATION_LEVELS: &[&str] = &["High School", "Associate", "Bachelor", "Master", "PhD"];

pub const SKILLS: &[&str] = &[
    "Python",
    "JavaScript",
    "SQL",
    "Project Management",
    "Data Analysis",
    "Marketing",
    "Sales",
    "Communication",
    "Leadership",
    "Excel",
    "PowerBI",
    "Tableau",
    "AWS",
    "Azure",
    "Docker",
    "Kubernetes",
];

pub const DEGREE_FIELDS: &[&str] = &[
    "Computer Science",
    "Business",
    "Engineering",
    "Marketing",
    "Finance",
    "Psychology",
];

pub const CERTIFICATION_VENDORS: &[&str] = &["AWS", "Microsoft", "Google", "Salesforce"];

pub const CERTIFICATION_GRADES: &[&str] = &["Certified", "Professional", "Expert"];

pub const EXTRA_LANGUAGES: &[&str] = &["Spanish", "French", "German", "Chinese", "Japanese"];

pub const EMERGENCY_RELATIONS: &[&str] = &["Spouse", "Parent", "Sibling", "Friend", "Child"];

pub const FIRST_NAMES: &[&str] = &[
    "James", "Mary", "Robert", "Patricia", "John", "Jennifer", "Michael", "Linda", "David",
    "Elizabeth", "William", "Barbara", "Richard", "Susan", "Joseph", "Jessica", "Thomas", "Sarah",
    "Charles", "Karen", "Christopher", "Lisa", "Daniel", "Nancy", "Matthew", "Betty", "Anthony",
    "Margaret", "Mark", "Sandra", "Donald", "Ashley", "Steven", "Kimberly", "Paul", "Emily",
    "Andrew", "Donna", "Joshua", "Michelle",
];

pub const LAST_NAMES: &[&str] = &[
    "Smith", "Johnson", "Williams", "Brown", "Jones", "Garcia", "Miller", "Davis", "Rodriguez",
    "Martinez", "Hernandez", "Lopez", "Gonzalez", "Wilson", "Anderson", "Thomas", "Taylor",
    "Moore", "Jackson", "Martin", "Lee", "Perez", "Thompson", "White", "Harris", "Sanchez",
    "Clark", "Ramirez", "Lewis", "Robinson", "Walker", "Young", "Allen", "King", "Wright",
    "Scott", "Torres", "Nguyen", "Hill", "Flores",
];

pub const CITIES: &[&str] = &[
    "Springfield",
    "Riverside",
    "Franklin",
    "Greenville",
    "Bristol",
    "Clinton",
    "Fairview",
    "Salem",
    "Madison",
    "Georgetown",
    "Arlington",
    "Ashland",
    "Oxford",
    "Burlington",
    "Manchester",
    "Milton",
    "Newport",
    "Auburn",
    "Dayton",
    "Lexington",
];

pub const STATES: &[&str] = &[
    "California",
    "Texas",
    "Florida",
    "New York",
    "Pennsylvania",
    "Illinois",
    "Ohio",
    "Georgia",
    "North Carolina",
    "Michigan",
    "Washington",
    "Arizona",
    "Massachusetts",
    "Colorado",
    "Oregon",
    "Virginia",
];

pub const COUNTRIES: &[&str] = &[
    "United States",
    "Canada",
    "United Kingdom",
    "Germany",
    "France",
    "Spain",
    "Italy",
    "Australia",
    "Japan",
    "Brazil",
    "India",
    "Netherlands",
    "Sweden",
    "Mexico",
    "Ireland",
];

pub const STREET_NAMES: &[&str] = &[
    "Oak", "Maple", "Cedar", "Pine", "Elm", "Washington", "Lake", "Hill", "Park", "Main",
    "Walnut", "Chestnut", "Spruce", "Birch", "Sunset", "Highland",
];

pub const STREET_SUFFIXES: &[&str] = &["Street", "Avenue", "Drive", "Lane", "Road", "Court"];

pub const UNIVERSITY_STEMS: &[&str] = &[
    "Northbrook",
    "Lakewood",
    "Ridgeway",
    "Harrington",
    "Castleton",
    "Westfield",
    "Sterling",
    "Brookdale",
    "Kingsley",
    "Eastgate",
    "Fairmont",
    "Clearwater",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_department_has_positions() {
        for dept in DEPARTMENTS {
            assert!(
                !positions_for(dept).is_empty(),
                "department {dept} has no positions"
            );
        }
    }

    #[test]
    fn test_unknown_department_has_no_positions() {
        assert!(positions_for("Astrology").is_empty());
    }

    #[test]
    fn test_weighted_statuses_stay_within_enumeration() {
        for status in EMPLOYMENT_STATUSES_WEIGHTED {
            assert!(EMPLOYMENT_STATUSES.contains(status));
        }
    }
}
