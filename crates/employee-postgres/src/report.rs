//! Read-only reports over the employee database.
//!
//! Report failures are non-fatal by contract: callers log the
//! [`EmployeeDbError::Query`] and continue with the remaining reports.

use crate::error::EmployeeDbError;
use rust_decimal::Decimal;
use tokio_postgres::Client;

/// One row of the active-employee listing.
#[derive(Debug, Clone)]
pub struct EmployeeRow {
    pub first_name: String,
    pub last_name: String,
    pub employee_number: String,
    pub department: String,
    pub position: String,
    pub email: String,
    pub city: String,
    pub state: String,
    pub salary: Decimal,
    pub performance_rating: Decimal,
}

/// Aggregate statistics for one department.
#[derive(Debug, Clone)]
pub struct DepartmentStats {
    pub department: String,
    pub employee_count: i64,
    pub avg_salary: Decimal,
    pub min_salary: Decimal,
    pub max_salary: Decimal,
    pub avg_performance: Decimal,
}

const ACTIVE_EMPLOYEES_QUERY: &str = "
SELECT
    p.first_name,
    p.last_name,
    c.email,
    c.city,
    c.state,
    e.employee_number,
    e.department,
    e.position,
    e.salary,
    d.performance_rating
FROM employee p
JOIN contact_info c ON p.employee_id = c.employee_id
JOIN employment_info e ON p.employee_id = e.employee_id
JOIN employee_details d ON p.employee_id = d.employee_id
WHERE e.employment_status = 'Active'
ORDER BY p.last_name, p.first_name
LIMIT $1";

const DEPARTMENT_STATISTICS_QUERY: &str = "
SELECT
    e.department,
    COUNT(*) AS employee_count,
    AVG(e.salary) AS avg_salary,
    MIN(e.salary) AS min_salary,
    MAX(e.salary) AS max_salary,
    AVG(d.performance_rating) AS avg_performance
FROM employment_info e
JOIN employee_details d ON e.employee_id = d.employee_id
WHERE e.employment_status = 'Active'
GROUP BY e.department
ORDER BY employee_count DESC";

/// Active employees ordered by surname then given name, limited to `limit`.
pub async fn active_employees(
    client: &Client,
    limit: i64,
) -> Result<Vec<EmployeeRow>, EmployeeDbError> {
    let rows = client
        .query(ACTIVE_EMPLOYEES_QUERY, &[&limit])
        .await
        .map_err(EmployeeDbError::Query)?;

    Ok(rows
        .iter()
        .map(|row| EmployeeRow {
            first_name: row.get("first_name"),
            last_name: row.get("last_name"),
            email: row.get("email"),
            city: row.get("city"),
            state: row.get("state"),
            employee_number: row.get("employee_number"),
            department: row.get("department"),
            position: row.get("position"),
            salary: row.get("salary"),
            performance_rating: row.get("performance_rating"),
        })
        .collect())
}

/// Per-department aggregates over active employees, busiest department first.
pub async fn department_statistics(
    client: &Client,
) -> Result<Vec<DepartmentStats>, EmployeeDbError> {
    let rows = client
        .query(DEPARTMENT_STATISTICS_QUERY, &[])
        .await
        .map_err(EmployeeDbError::Query)?;

    Ok(rows
        .iter()
        .map(|row| DepartmentStats {
            department: row.get("department"),
            employee_count: row.get("employee_count"),
            avg_salary: row.get("avg_salary"),
            min_salary: row.get("min_salary"),
            max_salary: row.get("max_salary"),
            avg_performance: row.get("avg_performance"),
        })
        .collect())
}

/// Print the active-employee listing in the console format.
pub fn print_employees(employees: &[EmployeeRow]) {
    println!("\n--- Employee Information ({} Active Employees) ---", employees.len());
    for emp in employees {
        println!("Name: {} {}", emp.first_name, emp.last_name);
        println!("Employee Number: {}", emp.employee_number);
        println!("Department: {}", emp.department);
        println!("Position: {}", emp.position);
        println!("Email: {}", emp.email);
        println!("Location: {}, {}", emp.city, emp.state);
        println!("Salary: ${}", emp.salary.round_dp(2));
        println!("Performance Rating: {}/5.0", emp.performance_rating);
        println!("{}", "-".repeat(50));
    }
}

/// Print the department statistics in the console format.
pub fn print_department_statistics(stats: &[DepartmentStats]) {
    println!("\n--- Department Statistics ---");
    for dept in stats {
        println!("Department: {}", dept.department);
        println!("  Employee Count: {}", dept.employee_count);
        println!("  Average Salary: ${}", dept.avg_salary.round_dp(2));
        println!(
            "  Salary Range: ${} - ${}",
            dept.min_salary.round_dp(2),
            dept.max_salary.round_dp(2)
        );
        println!(
            "  Average Performance: {}/5.0",
            dept.avg_performance.round_dp(2)
        );
        println!("{}", "-".repeat(40));
    }
}
