//! Seeded employee record generator.

use crate::pools;
use crate::record::{widths, Contact, Details, EmployeeRecord, Employment, Person};
use chrono::{Days, NaiveDate, Utc};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rust_decimal::Decimal;

/// Clip a string to at most `max` characters.
pub fn clip(s: &str, max: usize) -> String {
    s.chars().take(max).collect()
}

/// Pick one entry from a non-empty pool.
fn pick<'a, R: Rng>(rng: &mut R, pool: &'a [&'static str]) -> &'a str {
    pool[rng.gen_range(0..pool.len())]
}

/// Sample `min..=max` unique entries from a pool.
fn sample<R: Rng>(rng: &mut R, pool: &[&'static str], min: usize, max: usize) -> Vec<String> {
    let max = max.min(pool.len());
    let min = min.min(max);
    let count = rng.gen_range(min..=max);
    let mut shuffled: Vec<&str> = pool.to_vec();
    shuffled.shuffle(rng);
    shuffled
        .into_iter()
        .take(count)
        .map(str::to_string)
        .collect()
}

/// Generator producing deterministic synthetic employee records.
///
/// Uses a seeded RNG: the same seed and today-date yield the identical
/// record sequence across runs. The row index feeds the unique fields
/// (email, employee number) so generated records never collide on the
/// schema's UNIQUE columns.
pub struct EmployeeGenerator {
    rng: StdRng,
    index: u64,
    today: NaiveDate,
}

impl EmployeeGenerator {
    /// Create a generator seeded for reproducibility, anchored at today.
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            index: 0,
            today: Utc::now().date_naive(),
        }
    }

    /// Override the anchor date used for all relative date draws.
    pub fn with_today(mut self, today: NaiveDate) -> Self {
        self.today = today;
        self
    }

    /// Current row index (number of records produced so far).
    pub fn current_index(&self) -> u64 {
        self.index
    }

    /// Generate the next employee record.
    pub fn next_record(&mut self) -> EmployeeRecord {
        let index = self.index;
        self.index += 1;

        let person = self.gen_person();
        let contact = self.gen_contact(&person, index);
        let employment = self.gen_employment(index);
        let details = self.gen_details(&employment);

        EmployeeRecord {
            person,
            contact,
            employment,
            details,
        }
    }

    /// Generate `count` records.
    pub fn records(&mut self, count: u64) -> Vec<EmployeeRecord> {
        (0..count).map(|_| self.next_record()).collect()
    }

    fn gen_person(&mut self) -> Person {
        let rng = &mut self.rng;
        let first_name = clip(pick(rng, pools::FIRST_NAMES), widths::NAME);
        let last_name = clip(pick(rng, pools::LAST_NAMES), widths::NAME);
        let middle_name = if rng.gen_bool(0.5) {
            Some(clip(pick(rng, pools::FIRST_NAMES), widths::NAME))
        } else {
            None
        };
        // Age between 22 and 65 years.
        let date_of_birth = self.today - Days::new(self.rng.gen_range(22 * 365..=65 * 365));
        let rng = &mut self.rng;
        Person {
            first_name,
            last_name,
            middle_name,
            date_of_birth,
            gender: pick(rng, pools::GENDERS).to_string(),
            nationality: clip(pick(rng, pools::COUNTRIES), widths::NATIONALITY),
            marital_status: pick(rng, pools::MARITAL_STATUSES).to_string(),
            social_security_number: format!(
                "{}-{}-{}",
                rng.gen_range(100..=999),
                rng.gen_range(10..=99),
                rng.gen_range(1000..=9999)
            ),
        }
    }

    fn gen_contact(&mut self, person: &Person, index: u64) -> Contact {
        let rng = &mut self.rng;
        let email = clip(
            &format!(
                "{}.{}{}@company.com",
                person.first_name.to_lowercase(),
                person.last_name.to_lowercase(),
                index + 1
            ),
            widths::EMAIL,
        );
        let address_line1 = clip(
            &format!(
                "{} {} {}",
                rng.gen_range(1..=9999),
                pick(rng, pools::STREET_NAMES),
                pick(rng, pools::STREET_SUFFIXES)
            ),
            widths::ADDRESS_LINE,
        );
        let address_line2 = if rng.gen_bool(0.5) {
            Some(format!("Apt. {}", rng.gen_range(1..=999)))
        } else {
            None
        };
        let phone_secondary = if rng.gen_bool(0.5) {
            Some(gen_phone(rng))
        } else {
            None
        };
        Contact {
            email,
            phone_primary: gen_phone(rng),
            phone_secondary,
            address_line1,
            address_line2,
            city: clip(pick(rng, pools::CITIES), widths::CITY),
            state: clip(pick(rng, pools::STATES), widths::STATE),
            postal_code: format!("{:05}", rng.gen_range(0..100000)),
            country: clip(pick(rng, pools::COUNTRIES), widths::COUNTRY),
            emergency_contact_name: clip(
                &format!(
                    "{} {}",
                    pick(rng, pools::FIRST_NAMES),
                    pick(rng, pools::LAST_NAMES)
                ),
                widths::CONTACT_NAME,
            ),
            emergency_contact_phone: gen_phone(rng),
            emergency_contact_relation: pick(rng, pools::EMERGENCY_RELATIONS).to_string(),
        }
    }

    fn gen_employment(&mut self, index: u64) -> Employment {
        let department = pick(&mut self.rng, pools::DEPARTMENTS).to_string();
        // Dependent draw: the position must be valid for the department.
        let position = clip(
            pick(&mut self.rng, pools::positions_for(&department)),
            widths::POSITION,
        );
        // Hired within the last 10 years.
        let hire_date = self.today - Days::new(self.rng.gen_range(0..=3650));
        let rng = &mut self.rng;
        Employment {
            employee_number: format!("EMP{:05}", index + 1),
            department: clip(&department, widths::DEPARTMENT),
            position,
            job_level: pick(rng, pools::JOB_LEVELS).to_string(),
            employment_type: pick(rng, pools::EMPLOYMENT_TYPES).to_string(),
            hire_date,
            termination_date: None,
            employment_status: pick(rng, pools::EMPLOYMENT_STATUSES_WEIGHTED).to_string(),
            work_location: clip(pick(rng, pools::CITIES), widths::WORK_LOCATION),
            // Uniform over cents: 40,000.00 to 200,000.00.
            salary: Decimal::new(rng.gen_range(4_000_000..=20_000_000), 2),
            currency: "USD".to_string(),
        }
    }

    fn gen_details(&mut self, employment: &Employment) -> Details {
        let rng = &mut self.rng;
        let education_level = pick(rng, pools::EDUCATION_LEVELS).to_string();
        let degree = clip(
            &format!("{} in {}", education_level, pick(rng, pools::DEGREE_FIELDS)),
            widths::DEGREE,
        );
        let certifications = if rng.gen_bool(0.5) {
            vec![format!(
                "{} {}",
                pick(rng, pools::CERTIFICATION_VENDORS),
                pick(rng, pools::CERTIFICATION_GRADES)
            )]
        } else {
            vec![]
        };
        let mut languages = vec!["English".to_string()];
        languages.extend(sample(rng, pools::EXTRA_LANGUAGES, 0, 2));

        let days_since_hire = (self.today - employment.hire_date).num_days().max(0) as u64;
        let last_promotion_date = if self.rng.gen_bool(0.5) {
            // Between the hire date and today.
            Some(employment.hire_date + Days::new(self.rng.gen_range(0..=days_since_hire)))
        } else {
            None
        };
        let next_review_date = self.today + Days::new(self.rng.gen_range(0..=365));

        let rng = &mut self.rng;
        Details {
            education_level: clip(&education_level, widths::EDUCATION_LEVEL),
            university: clip(
                &format!("{} University", pick(rng, pools::UNIVERSITY_STEMS)),
                widths::UNIVERSITY,
            ),
            degree,
            graduation_year: rng.gen_range(1995..=2023),
            skills: sample(rng, pools::SKILLS, 3, 8),
            certifications,
            languages,
            previous_experience_years: rng.gen_range(0..=20),
            // Uniform over hundredths: 2.50 to 5.00.
            performance_rating: Decimal::new(rng.gen_range(250..=500), 2),
            last_promotion_date,
            next_review_date,
        }
    }
}

/// Generate NANP-style phone numbers that fit a VARCHAR(20).
fn gen_phone<R: Rng>(rng: &mut R) -> String {
    format!(
        "+1-{:03}-{:03}-{:04}",
        rng.gen_range(200..1000),
        rng.gen_range(200..1000),
        rng.gen_range(0..10000)
    )
}

/// Generate `count` employee records from a fixed seed.
pub fn generate(count: u64, seed: u64) -> Vec<EmployeeRecord> {
    EmployeeGenerator::new(seed).records(count)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn sample_records() -> Vec<EmployeeRecord> {
        let today = NaiveDate::from_ymd_opt(2026, 8, 30).unwrap();
        EmployeeGenerator::new(42).with_today(today).records(100)
    }

    #[test]
    fn test_generates_requested_count() {
        assert_eq!(sample_records().len(), 100);
    }

    #[test]
    fn test_deterministic_with_same_seed() {
        let today = NaiveDate::from_ymd_opt(2026, 8, 30).unwrap();
        let a = EmployeeGenerator::new(7).with_today(today).records(20);
        let b = EmployeeGenerator::new(7).with_today(today).records(20);
        assert_eq!(a, b);
    }

    #[test]
    fn test_different_seeds_differ() {
        let today = NaiveDate::from_ymd_opt(2026, 8, 30).unwrap();
        let a = EmployeeGenerator::new(1).with_today(today).records(20);
        let b = EmployeeGenerator::new(2).with_today(today).records(20);
        assert_ne!(a, b);
    }

    #[test]
    fn test_position_belongs_to_department() {
        for record in sample_records() {
            let positions = pools::positions_for(&record.employment.department);
            assert!(
                positions.contains(&record.employment.position.as_str()),
                "position {:?} invalid for department {:?}",
                record.employment.position,
                record.employment.department
            );
        }
    }

    #[test]
    fn test_categorical_fields_within_enumerations() {
        for record in sample_records() {
            assert!(pools::GENDERS.contains(&record.person.gender.as_str()));
            assert!(pools::MARITAL_STATUSES.contains(&record.person.marital_status.as_str()));
            assert!(pools::EMPLOYMENT_TYPES.contains(&record.employment.employment_type.as_str()));
            assert!(pools::EMPLOYMENT_STATUSES
                .contains(&record.employment.employment_status.as_str()));
        }
    }

    #[test]
    fn test_string_fields_respect_column_widths() {
        for record in sample_records() {
            let p = &record.person;
            assert!(p.first_name.chars().count() <= widths::NAME);
            assert!(p.last_name.chars().count() <= widths::NAME);
            assert!(p.social_security_number.chars().count() <= widths::SSN);
            let c = &record.contact;
            assert!(c.email.chars().count() <= widths::EMAIL);
            assert!(c.phone_primary.chars().count() <= widths::PHONE);
            assert!(c.emergency_contact_phone.chars().count() <= widths::PHONE);
            assert!(c.address_line1.chars().count() <= widths::ADDRESS_LINE);
            assert!(c.postal_code.chars().count() <= widths::POSTAL_CODE);
            let e = &record.employment;
            assert!(e.employee_number.chars().count() <= widths::EMPLOYEE_NUMBER);
            assert!(e.position.chars().count() <= widths::POSITION);
            let d = &record.details;
            assert!(d.university.chars().count() <= widths::UNIVERSITY);
            assert!(d.degree.chars().count() <= widths::DEGREE);
        }
    }

    #[test]
    fn test_numeric_ranges() {
        let min_salary = Decimal::new(4_000_000, 2);
        let max_salary = Decimal::new(20_000_000, 2);
        let min_rating = Decimal::new(250, 2);
        let max_rating = Decimal::new(500, 2);
        for record in sample_records() {
            let salary = record.employment.salary;
            assert!(salary >= min_salary && salary <= max_salary, "salary {salary}");
            assert_eq!(salary.scale(), 2);
            let rating = record.details.performance_rating;
            assert!(rating >= min_rating && rating <= max_rating, "rating {rating}");
            assert!((1995..=2023).contains(&record.details.graduation_year));
            assert!((0..=20).contains(&record.details.previous_experience_years));
        }
    }

    #[test]
    fn test_date_consistency() {
        let today = NaiveDate::from_ymd_opt(2026, 8, 30).unwrap();
        for record in EmployeeGenerator::new(42).with_today(today).records(100) {
            let e = &record.employment;
            assert!(e.hire_date <= today);
            assert!(record.person.date_of_birth < e.hire_date || record.person.date_of_birth < today);
            if let Some(promoted) = record.details.last_promotion_date {
                assert!(promoted >= e.hire_date, "promotion before hire");
                assert!(promoted <= today, "promotion in the future");
            }
            assert!(record.details.next_review_date >= today);
        }
    }

    #[test]
    fn test_unique_fields_never_collide() {
        let records = sample_records();
        let emails: HashSet<_> = records.iter().map(|r| r.contact.email.clone()).collect();
        let numbers: HashSet<_> = records
            .iter()
            .map(|r| r.employment.employee_number.clone())
            .collect();
        assert_eq!(emails.len(), records.len());
        assert_eq!(numbers.len(), records.len());
    }

    #[test]
    fn test_skills_and_languages_shapes() {
        for record in sample_records() {
            let skills = &record.details.skills;
            assert!((3..=8).contains(&skills.len()));
            let unique: HashSet<_> = skills.iter().collect();
            assert_eq!(unique.len(), skills.len(), "duplicate skills");
            let langs = &record.details.languages;
            assert_eq!(langs[0], "English");
            assert!((1..=3).contains(&langs.len()));
            assert!(record.details.certifications.len() <= 1);
        }
    }

    #[test]
    fn test_department_grouping_accounts_for_every_record() {
        let records = sample_records();
        let mut counts = std::collections::HashMap::new();
        for record in &records {
            *counts.entry(record.employment.department.as_str()).or_insert(0u64) += 1;
        }
        assert_eq!(counts.values().sum::<u64>(), records.len() as u64);
        for dept in counts.keys() {
            assert!(pools::DEPARTMENTS.contains(dept));
        }
    }

    #[test]
    fn test_employee_numbers_are_sequential() {
        let records = sample_records();
        assert_eq!(records[0].employment.employee_number, "EMP00001");
        assert_eq!(records[99].employment.employee_number, "EMP00100");
        assert!(records[0].contact.email.ends_with("1@company.com"));
    }

    #[test]
    fn test_clip_handles_multibyte() {
        assert_eq!(clip("héllo wörld", 5), "héllo");
        assert_eq!(clip("ab", 5), "ab");
    }
}
