use crate::core::error::ValidationError;
use crate::models::user::{NewUser, UserFields, UserPatch};

/// Fields a create request must carry
pub const CREATE_REQUIRED: [&str; 3] = ["first", "last", "email"];

/// Check a create body. Absent, null and empty values all count as missing,
/// and every missing field is reported.
pub fn validate_create(fields: UserFields) -> Result<NewUser, ValidationError> {
    let UserFields { first, last, email, role } = fields;

    let first = non_empty(first);
    let last = non_empty(last);
    let email = non_empty(email);

    let missing: Vec<&'static str> = CREATE_REQUIRED
        .iter()
        .zip([first.is_none(), last.is_none(), email.is_none()])
        .filter_map(|(name, absent)| absent.then_some(*name))
        .collect();

    match (first, last, email) {
        (Some(first), Some(last), Some(email)) => Ok(NewUser { first, last, email, role }),
        _ => Err(ValidationError::MissingFields(missing)),
    }
}

/// Check an update body. Supplied name and email fields must be non-empty;
/// role is free text.
pub fn validate_update(fields: UserFields) -> Result<UserPatch, ValidationError> {
    let empty: Vec<&'static str> = [
        ("first", &fields.first),
        ("last", &fields.last),
        ("email", &fields.email),
    ]
    .into_iter()
    .filter_map(|(name, value)| matches!(value.as_deref(), Some("")).then_some(name))
    .collect();

    if !empty.is_empty() {
        return Err(ValidationError::EmptyFields(empty));
    }

    Ok(UserPatch {
        first: fields.first,
        last: fields.last,
        email: fields.email,
        role: fields.role,
    })
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}
