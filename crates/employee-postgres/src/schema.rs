//! Employee schema DDL.

use crate::error::EmployeeDbError;
use seed_core::SchemaMode;
use tokio_postgres::Client;
use tracing::{debug, info};

/// Personal information (root entity).
pub const EMPLOYEE_TABLE: &str = "
CREATE TABLE IF NOT EXISTS employee (
    employee_id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
    first_name VARCHAR(50) NOT NULL,
    last_name VARCHAR(50) NOT NULL,
    middle_name VARCHAR(50),
    date_of_birth DATE NOT NULL,
    gender VARCHAR(10) CHECK (gender IN ('Male', 'Female', 'Other')),
    nationality VARCHAR(50),
    marital_status VARCHAR(20) CHECK (marital_status IN ('Single', 'Married', 'Divorced', 'Widowed')),
    social_security_number VARCHAR(20) UNIQUE,
    created_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP,
    updated_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP
)";

/// Contact information, 1:1 with employee.
pub const CONTACT_INFO_TABLE: &str = "
CREATE TABLE IF NOT EXISTS contact_info (
    contact_id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
    employee_id UUID REFERENCES employee(employee_id) ON DELETE CASCADE,
    email VARCHAR(100) UNIQUE NOT NULL,
    phone_primary VARCHAR(20) NOT NULL,
    phone_secondary VARCHAR(20),
    address_line1 VARCHAR(200) NOT NULL,
    address_line2 VARCHAR(200),
    city VARCHAR(100) NOT NULL,
    state VARCHAR(100) NOT NULL,
    postal_code VARCHAR(20) NOT NULL,
    country VARCHAR(100) NOT NULL,
    emergency_contact_name VARCHAR(100),
    emergency_contact_phone VARCHAR(20),
    emergency_contact_relation VARCHAR(50),
    created_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP,
    updated_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP
)";

/// Employment information, 1:1 with employee, self-referential manager link.
pub const EMPLOYMENT_INFO_TABLE: &str = "
CREATE TABLE IF NOT EXISTS employment_info (
    employment_id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
    employee_id UUID REFERENCES employee(employee_id) ON DELETE CASCADE,
    employee_number VARCHAR(20) UNIQUE NOT NULL,
    department VARCHAR(100) NOT NULL,
    position VARCHAR(100) NOT NULL,
    job_level VARCHAR(50) NOT NULL,
    employment_type VARCHAR(50) CHECK (employment_type IN ('Full-time', 'Part-time', 'Contract', 'Temporary')),
    hire_date DATE NOT NULL,
    termination_date DATE,
    employment_status VARCHAR(20) CHECK (employment_status IN ('Active', 'Inactive', 'Terminated', 'On Leave')),
    manager_id UUID REFERENCES employee(employee_id),
    work_location VARCHAR(100),
    salary DECIMAL(12, 2),
    currency VARCHAR(10) DEFAULT 'USD',
    created_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP,
    updated_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP
)";

/// Additional employee details, 1:1 with employee.
pub const EMPLOYEE_DETAILS_TABLE: &str = "
CREATE TABLE IF NOT EXISTS employee_details (
    detail_id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
    employee_id UUID REFERENCES employee(employee_id) ON DELETE CASCADE,
    education_level VARCHAR(50),
    university VARCHAR(100),
    degree VARCHAR(100),
    graduation_year INTEGER,
    skills TEXT[],
    certifications TEXT[],
    languages TEXT[],
    previous_experience_years INTEGER,
    employee_photo_url VARCHAR(500),
    notes TEXT,
    performance_rating DECIMAL(3, 2) CHECK (performance_rating >= 1.0 AND performance_rating <= 5.0),
    last_promotion_date DATE,
    next_review_date DATE,
    created_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP,
    updated_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP
)";

/// Drop statements, children before parents.
const DROP_STATEMENTS: [&str; 4] = [
    "DROP TABLE IF EXISTS employee_details",
    "DROP TABLE IF EXISTS employment_info",
    "DROP TABLE IF EXISTS contact_info",
    "DROP TABLE IF EXISTS employee CASCADE",
];

/// Ordered DDL sequence for the given mode.
pub fn schema_statements(mode: SchemaMode) -> Vec<&'static str> {
    let mut statements = Vec::new();
    if mode == SchemaMode::DestructiveReset {
        statements.extend(DROP_STATEMENTS);
    }
    statements.extend([
        EMPLOYEE_TABLE,
        CONTACT_INFO_TABLE,
        EMPLOYMENT_INFO_TABLE,
        EMPLOYEE_DETAILS_TABLE,
    ]);
    statements
}

/// Create the employee tables.
///
/// Any statement failure aborts the sequence and surfaces as a fatal
/// [`EmployeeDbError::Schema`]; no partial recovery is attempted.
pub async fn create_schema(client: &Client, mode: SchemaMode) -> Result<(), EmployeeDbError> {
    info!("Creating employee tables ({mode:?})");
    for statement in schema_statements(mode) {
        debug!("DDL: {statement}");
        client
            .batch_execute(statement)
            .await
            .map_err(EmployeeDbError::Schema)?;
    }
    info!("All employee tables created");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_idempotent_mode_never_drops() {
        let statements = schema_statements(SchemaMode::Idempotent);
        assert_eq!(statements.len(), 4);
        for stmt in &statements {
            assert!(stmt.contains("CREATE TABLE IF NOT EXISTS"));
            assert!(!stmt.contains("DROP"));
        }
    }

    #[test]
    fn test_destructive_mode_drops_children_first() {
        let statements = schema_statements(SchemaMode::DestructiveReset);
        assert_eq!(statements.len(), 8);
        let drops: Vec<_> = statements
            .iter()
            .take_while(|s| s.starts_with("DROP"))
            .collect();
        assert_eq!(drops.len(), 4);
        // The root entity goes last.
        assert!(drops[3].contains("employee CASCADE"));
        assert!(drops[0].contains("employee_details"));
    }

    #[test]
    fn test_parents_created_before_children() {
        let statements = schema_statements(SchemaMode::Idempotent);
        let employee_pos = statements
            .iter()
            .position(|s| s.contains("CREATE TABLE IF NOT EXISTS employee ("))
            .unwrap();
        for (i, stmt) in statements.iter().enumerate() {
            if stmt.contains("REFERENCES employee(employee_id)") {
                assert!(i > employee_pos, "dependent table created before employee");
            }
        }
    }

    #[test]
    fn test_enumerations_match_generator_pools() {
        for gender in employee_generator::pools::GENDERS {
            assert!(EMPLOYEE_TABLE.contains(&format!("'{gender}'")));
        }
        for status in employee_generator::pools::EMPLOYMENT_STATUSES {
            assert!(EMPLOYMENT_INFO_TABLE.contains(&format!("'{status}'")));
        }
        for ty in employee_generator::pools::EMPLOYMENT_TYPES {
            assert!(EMPLOYMENT_INFO_TABLE.contains(&format!("'{ty}'")));
        }
        for status in employee_generator::pools::MARITAL_STATUSES {
            assert!(EMPLOYEE_TABLE.contains(&format!("'{status}'")));
        }
    }
}
