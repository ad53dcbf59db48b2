use uuid::Uuid;

/// Generate an id for a newly created record
///
/// # Returns
///
/// * `String` - simple (hyphenless) UUIDv4
pub fn new_record_id() -> String {
    Uuid::new_v4().simple().to_string()
}

pub fn get_utc_date() -> String {
    chrono::Utc::now().format("%Y-%m-%d").to_string()
}
