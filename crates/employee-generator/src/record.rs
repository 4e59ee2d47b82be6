//! In-memory employee record, mirroring the four employee tables.

use chrono::NaiveDate;
use rust_decimal::Decimal;

/// Maximum column widths declared by the employee schema.
///
/// Every generated string is clipped to the width of the column it targets,
/// so records can never violate a VARCHAR constraint at insert time.
pub mod widths {
    pub const NAME: usize = 50;
    pub const GENDER: usize = 10;
    pub const NATIONALITY: usize = 50;
    pub const MARITAL_STATUS: usize = 20;
    pub const SSN: usize = 20;
    pub const EMAIL: usize = 100;
    pub const PHONE: usize = 20;
    pub const ADDRESS_LINE: usize = 200;
    pub const CITY: usize = 100;
    pub const STATE: usize = 100;
    pub const POSTAL_CODE: usize = 20;
    pub const COUNTRY: usize = 100;
    pub const CONTACT_NAME: usize = 100;
    pub const CONTACT_RELATION: usize = 50;
    pub const EMPLOYEE_NUMBER: usize = 20;
    pub const DEPARTMENT: usize = 100;
    pub const POSITION: usize = 100;
    pub const JOB_LEVEL: usize = 50;
    pub const EMPLOYMENT_TYPE: usize = 50;
    pub const EMPLOYMENT_STATUS: usize = 20;
    pub const WORK_LOCATION: usize = 100;
    pub const CURRENCY: usize = 10;
    pub const EDUCATION_LEVEL: usize = 50;
    pub const UNIVERSITY: usize = 100;
    pub const DEGREE: usize = 100;
    pub const PHOTO_URL: usize = 500;
}

/// Biographical attributes (the `employee` table).
#[derive(Debug, Clone, PartialEq)]
pub struct Person {
    pub first_name: String,
    pub last_name: String,
    pub middle_name: Option<String>,
    pub date_of_birth: NaiveDate,
    pub gender: String,
    pub nationality: String,
    pub marital_status: String,
    pub social_security_number: String,
}

/// Contact, address, and emergency-contact fields (the `contact_info` table).
#[derive(Debug, Clone, PartialEq)]
pub struct Contact {
    pub email: String,
    pub phone_primary: String,
    pub phone_secondary: Option<String>,
    pub address_line1: String,
    pub address_line2: Option<String>,
    pub city: String,
    pub state: String,
    pub postal_code: String,
    pub country: String,
    pub emergency_contact_name: String,
    pub emergency_contact_phone: String,
    pub emergency_contact_relation: String,
}

/// Job and compensation fields (the `employment_info` table).
#[derive(Debug, Clone, PartialEq)]
pub struct Employment {
    pub employee_number: String,
    pub department: String,
    pub position: String,
    pub job_level: String,
    pub employment_type: String,
    pub hire_date: NaiveDate,
    pub termination_date: Option<NaiveDate>,
    pub employment_status: String,
    pub work_location: String,
    pub salary: Decimal,
    pub currency: String,
}

/// Education, skills, and performance fields (the `employee_details` table).
#[derive(Debug, Clone, PartialEq)]
pub struct Details {
    pub education_level: String,
    pub university: String,
    pub degree: String,
    pub graduation_year: i32,
    pub skills: Vec<String>,
    pub certifications: Vec<String>,
    pub languages: Vec<String>,
    pub previous_experience_years: i32,
    pub performance_rating: Decimal,
    pub last_promotion_date: Option<NaiveDate>,
    pub next_review_date: NaiveDate,
}

/// One complete generated employee spanning all four tables.
///
/// Server-generated ids and timestamps are not part of the record; the
/// loader captures the parent id at insert time and threads it through the
/// dependent rows.
#[derive(Debug, Clone, PartialEq)]
pub struct EmployeeRecord {
    pub person: Person,
    pub contact: Contact,
    pub employment: Employment,
    pub details: Details,
}
