use std::fmt;

/// Per-field message for inline display next to the offending input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: &'static str,
    pub message: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ValidationErrors {
    pub fields: Vec<FieldError>,
}

impl ValidationErrors {
    pub fn field(&self, field: &str) -> Option<&'static str> {
        self.fields
            .iter()
            .find(|err| err.field == field)
            .map(|err| err.message)
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, err) in self.fields.iter().enumerate() {
            if i > 0 {
                write!(f, "; ")?;
            }
            write!(f, "{}: {}", err.field, err.message)?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}

/// A mechanic form that passed validation, fields trimmed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MechanicForm {
    pub name: String,
    pub phone: String,
    pub location: String,
}

/// Validates the mechanic create/edit form. Nothing is sent to the network
/// until this passes.
pub fn validate_mechanic_form(
    name: &str,
    phone: &str,
    location: &str,
) -> Result<MechanicForm, ValidationErrors> {
    let name = name.trim();
    let phone = phone.trim();
    let location = location.trim();

    let mut errors = ValidationErrors::default();

    if name.chars().count() < 2 {
        errors.fields.push(FieldError {
            field: "name",
            message: "Name must be at least 2 characters",
        });
    } else if name.chars().count() > 100 {
        errors.fields.push(FieldError {
            field: "name",
            message: "Name must be at most 100 characters",
        });
    }

    if !is_uganda_phone(phone) {
        errors.fields.push(FieldError {
            field: "phone",
            message: "Valid Uganda phone required",
        });
    }

    if location.chars().count() < 2 {
        errors.fields.push(FieldError {
            field: "location",
            message: "Location required",
        });
    } else if location.chars().count() > 100 {
        errors.fields.push(FieldError {
            field: "location",
            message: "Location must be at most 100 characters",
        });
    }

    if !errors.fields.is_empty() {
        return Err(errors);
    }

    Ok(MechanicForm {
        name: name.to_string(),
        phone: phone.to_string(),
        location: location.to_string(),
    })
}

/// `+256` or `0` prefix followed by exactly nine digits.
fn is_uganda_phone(phone: &str) -> bool {
    let rest = match phone.strip_prefix("+256") {
        Some(rest) => rest,
        None => match phone.strip_prefix('0') {
            Some(rest) => rest,
            None => return false,
        },
    };

    rest.len() == 9 && rest.bytes().all(|b| b.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::{is_uganda_phone, validate_mechanic_form};

    #[test]
    fn international_prefix_passes() {
        assert!(is_uganda_phone("+256701234567"));
    }

    #[test]
    fn local_prefix_passes() {
        assert!(is_uganda_phone("0701234567"));
    }

    #[test]
    fn short_number_fails() {
        assert!(!is_uganda_phone("12345"));
        assert!(!is_uganda_phone("+25670123456"));
        assert!(!is_uganda_phone("+2567012345678"));
    }

    #[test]
    fn letters_fail() {
        assert!(!is_uganda_phone("+25670123456a"));
    }

    #[test]
    fn valid_form_is_trimmed() {
        let form = validate_mechanic_form("  Okello James ", "+256701234567", " Kampala ")
            .expect("valid form");
        assert_eq!(form.name, "Okello James");
        assert_eq!(form.location, "Kampala");
    }

    #[test]
    fn bad_phone_reports_phone_field() {
        let errors = validate_mechanic_form("Okello", "12345", "Kampala").unwrap_err();
        assert_eq!(errors.field("phone"), Some("Valid Uganda phone required"));
        assert_eq!(errors.field("name"), None);
    }

    #[test]
    fn short_name_and_location_report_both_fields() {
        let errors = validate_mechanic_form("A", "+256701234567", "").unwrap_err();
        assert_eq!(errors.field("name"), Some("Name must be at least 2 characters"));
        assert_eq!(errors.field("location"), Some("Location required"));
    }

    #[test]
    fn overlong_name_is_rejected() {
        let name = "x".repeat(101);
        let errors = validate_mechanic_form(&name, "+256701234567", "Kampala").unwrap_err();
        assert_eq!(errors.field("name"), Some("Name must be at most 100 characters"));
    }
}
