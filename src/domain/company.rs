//! Company value object.

use super::value_object::ValueObject;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Company contact details: company, department, and person in charge.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Company {
    company_name: String,
    department_name: String,
    responsible: String,
}

impl Company {
    pub fn new(
        company_name: impl Into<String>,
        department_name: impl Into<String>,
        responsible: impl Into<String>,
    ) -> Self {
        Self {
            company_name: company_name.into(),
            department_name: department_name.into(),
            responsible: responsible.into(),
        }
    }

    pub fn company_name(&self) -> &str {
        &self.company_name
    }

    pub fn department_name(&self) -> &str {
        &self.department_name
    }

    /// Person in charge.
    pub fn responsible(&self) -> &str {
        &self.responsible
    }
}

impl ValueObject for Company {}

// One labelled line per field, each terminated by a newline
impl fmt::Display for Company {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Company: {}", self.company_name)?;
        writeln!(f, "Department: {}", self.department_name)?;
        writeln!(f, "Responsible: {}", self.responsible)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_company_display() {
        let company = Company::new("株式会社サンプル", "営業部", "鈴木");
        assert_eq!(
            company.to_string(),
            "Company: 株式会社サンプル\nDepartment: 営業部\nResponsible: 鈴木\n"
        );
    }

    #[test]
    fn test_company_equality() {
        let a = Company::new("A", "B", "C");
        assert_eq!(a, Company::new("A", "B", "C"));
        assert_ne!(a, Company::new("A", "B", "D"));
    }
}
