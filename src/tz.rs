//! Résolution des identifiants de fuseau IANA.

use crate::rotation::ValidationError;
use chrono_tz::Tz;

/// Résout un identifiant IANA (`Europe/Paris`, `UTC`, ...).
pub fn parse_timezone(raw: &str) -> Result<Tz, ValidationError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        tracing::warn!("timezone was empty");
        return Err(ValidationError::UnknownTimezone(String::new()));
    }

    match trimmed.parse::<Tz>() {
        Ok(tz) => Ok(tz),
        Err(err) => {
            tracing::warn!(timezone = %trimmed, error = %err, "failed to parse timezone id");
            Err(ValidationError::UnknownTimezone(trimmed.to_string()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_known_ids() {
        assert_eq!(parse_timezone("Europe/Paris").unwrap(), chrono_tz::Europe::Paris);
        assert_eq!(parse_timezone(" UTC ").unwrap(), chrono_tz::UTC);
    }

    #[test]
    fn rejects_unknown_or_blank() {
        assert_eq!(
            parse_timezone("Mars/Olympus_Mons"),
            Err(ValidationError::UnknownTimezone("Mars/Olympus_Mons".into()))
        );
        assert!(parse_timezone("   ").is_err());
    }
}
