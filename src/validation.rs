/// Separator between owner name and record type in a record identifier.
pub const RECORD_ID_SEPARATOR: &str = ":::";

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum RecordIdError {
    #[error("'{0}' has no ':::' separator")]
    MissingSeparator(String),
    #[error("'{0}' contains more than one ':::' separator")]
    TooManySeparators(String),
    #[error("'{0}' has an empty name")]
    EmptyName(String),
    #[error("'{0}' has an empty record type")]
    EmptyType(String),
}

/// Join an owner name and record type into a record identifier.
pub fn record_id(name: &str, rtype: &str) -> String {
    format!("{name}{RECORD_ID_SEPARATOR}{rtype}")
}

/// Split a `<name>:::<type>` identifier into its name and type.
pub fn parse_record_id(id: &str) -> Result<(&str, &str), RecordIdError> {
    let mut parts = id.split(RECORD_ID_SEPARATOR);
    let (Some(name), Some(rtype)) = (parts.next(), parts.next()) else {
        return Err(RecordIdError::MissingSeparator(id.to_string()));
    };
    if parts.next().is_some() {
        return Err(RecordIdError::TooManySeparators(id.to_string()));
    }
    if name.is_empty() {
        return Err(RecordIdError::EmptyName(id.to_string()));
    }
    if rtype.is_empty() {
        return Err(RecordIdError::EmptyType(id.to_string()));
    }

    Ok((name, rtype))
}
