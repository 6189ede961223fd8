//! The built-in sample roster and roster sanity checks.

use std::collections::HashSet;

use crate::error::RosterError;
use crate::model::StudentRecord;

/// The four sample students the report runs over.
pub fn sample_roster() -> Result<Vec<StudentRecord>, RosterError> {
    Ok(vec![
        StudentRecord::new("Avery Chen", [88, 92, 79, 95], true)?,
        StudentRecord::new("Diego Morales", [72, 68, 74], false)?,
        StudentRecord::new("Fatima Khalid", [99, 100, 97, 98], true)?,
        StudentRecord::new("Nora Patel", [55, 61, 59], false)?,
    ])
}

/// A non-fatal issue found in a roster.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationWarning {
    /// The student the warning is about (if applicable).
    pub student: Option<String>,
    /// Warning message.
    pub message: String,
}

/// Check a roster for issues that grade oddly but do not stop the report.
pub fn validate_roster(records: &[StudentRecord]) -> Vec<ValidationWarning> {
    let mut warnings = Vec::new();

    let mut seen = HashSet::new();
    for record in records {
        if !seen.insert(record.name.as_str()) {
            warnings.push(ValidationWarning {
                student: Some(record.name.clone()),
                message: format!("duplicate student name: {}", record.name),
            });
        }
    }

    for record in records {
        if record.name.trim().is_empty() {
            warnings.push(ValidationWarning {
                student: None,
                message: "student name is empty".into(),
            });
        }
    }

    for record in records {
        if record.scores.is_empty() {
            warnings.push(ValidationWarning {
                student: Some(record.name.clone()),
                message: "no scores recorded, student will receive an F".into(),
            });
        }
    }

    for record in records {
        for (i, score) in record.scores.iter().enumerate() {
            if !(0.0..=100.0).contains(&score.value()) {
                warnings.push(ValidationWarning {
                    student: Some(record.name.clone()),
                    message: format!("score #{i} ({score}) is outside 0..=100"),
                });
            }
        }
    }

    warnings
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Score;

    #[test]
    fn sample_roster_contents() {
        let roster = sample_roster().unwrap();
        let names: Vec<&str> = roster.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(
            names,
            vec!["Avery Chen", "Diego Morales", "Fatima Khalid", "Nora Patel"]
        );
        assert_eq!(roster[0].scores.len(), 4);
        assert!(roster[0].bonus_eligible);
        assert!(!roster[1].bonus_eligible);
    }

    #[test]
    fn sample_roster_is_clean() {
        assert!(validate_roster(&sample_roster().unwrap()).is_empty());
    }

    #[test]
    fn validate_duplicates() {
        let roster = vec![
            StudentRecord::new("Sam", [80], false).unwrap(),
            StudentRecord::new("Sam", [70], false).unwrap(),
        ];
        let warnings = validate_roster(&roster);
        assert!(warnings.iter().any(|w| w.message.contains("duplicate")));
    }

    #[test]
    fn validate_empty_scores() {
        let roster = vec![StudentRecord::new("Quiet", Vec::<i32>::new(), false).unwrap()];
        let warnings = validate_roster(&roster);
        assert_eq!(warnings.len(), 1);
        assert_eq!(warnings[0].student.as_deref(), Some("Quiet"));
    }

    #[test]
    fn validate_out_of_range() {
        let roster = vec![StudentRecord {
            name: "Over".into(),
            scores: vec![Score(105.0), Score(-1.0), Score(50.0)],
            bonus_eligible: false,
        }];
        let warnings = validate_roster(&roster);
        assert_eq!(warnings.len(), 2);
        assert!(warnings[0].message.contains("105"));
    }

    #[test]
    fn validate_blank_name() {
        let roster = vec![StudentRecord {
            name: String::new(),
            scores: vec![Score(50.0)],
            bonus_eligible: false,
        }];
        let warnings = validate_roster(&roster);
        assert!(warnings.iter().any(|w| w.message.contains("empty")));
    }
}
