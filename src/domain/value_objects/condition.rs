/// Fixed severity ranking for weather condition categories.
///
/// Used only to break frequency ties when picking the dominant condition of
/// a day. Returns `None` for conditions outside the table: they count as
/// severity 0 but lose ties against any ranked condition, including Clear.
#[must_use]
pub fn condition_severity(condition: &str) -> Option<u8> {
    match condition {
        "Thunderstorm" => Some(5),
        "Snow" => Some(4),
        "Rain" => Some(3),
        "Drizzle" => Some(2),
        "Clouds" => Some(1),
        "Clear" => Some(0),
        _ => None,
    }
}
