use chrono::Utc;
use nanoid::nanoid;

const REQUEST_ID_SIZE: usize = 16;

/// Timestamp-prefixed random id, so ids sort by creation time.
pub fn request_id() -> String {
    format!("{}-{}", Utc::now().timestamp_millis(), nanoid!(REQUEST_ID_SIZE))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_unique_and_prefixed() {
        let a = request_id();
        let b = request_id();

        assert_ne!(a, b);

        let (millis, random) = a.split_once('-').unwrap();
        assert!(millis.parse::<i64>().is_ok());
        assert_eq!(random.chars().count(), REQUEST_ID_SIZE);
    }
}
