/// Joins name parts as `"surname name patronymic"`, skipping empty parts.
pub fn full_name(surname: &str, name: &str, patronymic: &str) -> String {
    [surname, name, patronymic]
        .iter()
        .map(|part| part.trim())
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Trims a required name part, rejecting blank values.
pub fn required(field: &str, value: &str) -> Result<String, crate::server::error::AppError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(crate::server::error::AppError::BadRequest(format!(
            "{} must not be empty",
            field
        )));
    }
    Ok(value.to_string())
}
