//! Staff model.
//!
//! This module defines the Staff struct as supplied by the external staff
//! directory. Swap eligibility only ever considers staff sharing the same
//! base location.

use serde::{Deserialize, Serialize};

/// Represents one employee in the staff directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Staff {
    /// Unique identifier for the staff member.
    pub id: String,
    /// Contact email address.
    pub email: String,
    /// Employer-assigned staff number, used as the stable sort key for
    /// eligibility results.
    pub staff_number: String,
    /// Base location code (one of the configured base codes, e.g. "LGW").
    pub base_location: String,
    /// Whether this staff member is permitted to work double shifts.
    pub can_work_doubles: bool,
    /// The company the staff member belongs to.
    pub company_id: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_staff() -> Staff {
        Staff {
            id: "staff_001".to_string(),
            email: "crew@example.com".to_string(),
            staff_number: "100234".to_string(),
            base_location: "LGW".to_string(),
            can_work_doubles: true,
            company_id: "company_001".to_string(),
        }
    }

    #[test]
    fn test_staff_serialization() {
        let staff = sample_staff();
        let json = serde_json::to_string(&staff).unwrap();
        let deserialized: Staff = serde_json::from_str(&json).unwrap();
        assert_eq!(staff, deserialized);
    }

    #[test]
    fn test_staff_deserialization() {
        let json = r#"{
            "id": "staff_002",
            "email": "other@example.com",
            "staff_number": "100567",
            "base_location": "BRS",
            "can_work_doubles": false,
            "company_id": "company_001"
        }"#;

        let staff: Staff = serde_json::from_str(json).unwrap();
        assert_eq!(staff.base_location, "BRS");
        assert!(!staff.can_work_doubles);
    }
}
