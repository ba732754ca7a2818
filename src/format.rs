//! Display strings for distances, durations and address areas.

use std::sync::LazyLock;

use regex::Regex;

/// Label for addresses with no recognisable area.
pub const UNKNOWN_AREA: &str = "기타";

static DISTRICT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s([가-힣]{1,3}구)(?:\s|$)").expect("district pattern"));
static CITY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([가-힣]{2,4}시|[가-힣]{2,4}도)").expect("city pattern"));

/// `"350m"` under a kilometer, `"7.1km"` under ten, `"12km"` beyond.
/// Whole meters and kilometers are truncated, not rounded.
pub fn format_distance(distance_km: f64) -> String {
    let distance_km = distance_km.max(0.0);
    if distance_km < 1.0 {
        format!("{}m", (distance_km * 1000.0) as i64)
    } else if distance_km < 10.0 {
        format!("{:.1}km", distance_km)
    } else {
        format!("{}km", distance_km as i64)
    }
}

pub fn format_minutes(minutes: i64) -> String {
    let minutes = minutes.max(0);
    if minutes < 60 {
        format!("{}분", minutes)
    } else if minutes < 1440 {
        format!("{}시간 {}분", minutes / 60, minutes % 60)
    } else {
        format!("{}일 {}시간", minutes / 1440, (minutes % 1440) / 60)
    }
}

/// The `…구` district of a Korean address, or [`UNKNOWN_AREA`].
pub fn extract_district(address: Option<&str>) -> String {
    address
        .and_then(district)
        .unwrap_or(UNKNOWN_AREA)
        .to_string()
}

/// Like [`extract_district`], but falls back to the `…시`/`…도` part when
/// there is no district. Used for grouping list rows.
pub fn extract_area(address: Option<&str>) -> String {
    address
        .filter(|address| !address.trim().is_empty())
        .and_then(|address| district(address).or_else(|| first_capture(&CITY, address)))
        .unwrap_or(UNKNOWN_AREA)
        .to_string()
}

fn district(address: &str) -> Option<&str> {
    first_capture(&DISTRICT, address)
}

fn first_capture<'a>(pattern: &Regex, text: &'a str) -> Option<&'a str> {
    pattern
        .captures(text)
        .and_then(|captures| captures.get(1))
        .map(|found| found.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_distance() {
        assert_eq!(format_distance(0.0), "0m");
        assert_eq!(format_distance(0.3509), "350m");
        assert_eq!(format_distance(1.0), "1.0km");
        assert_eq!(format_distance(7.14), "7.1km");
        assert_eq!(format_distance(16.9), "16km");
    }

    #[test]
    fn test_format_minutes() {
        assert_eq!(format_minutes(33), "33분");
        assert_eq!(format_minutes(60), "1시간 0분");
        assert_eq!(format_minutes(135), "2시간 15분");
        assert_eq!(format_minutes(1500), "1일 1시간");
    }

    #[test]
    fn test_extract_district() {
        assert_eq!(extract_district(Some("서울 강남구 강남대로 396")), "강남구");
        assert_eq!(extract_district(Some("서울특별시 중구 세종대로 110")), "중구");
        assert_eq!(extract_district(Some("서울 영등포구")), "영등포구");
        assert_eq!(extract_district(Some("경기도 성남시 수정로 1")), UNKNOWN_AREA);
        assert_eq!(extract_district(None), UNKNOWN_AREA);
    }

    #[test]
    fn test_district_needs_word_boundary() {
        // attached to the city name, so not a standalone district
        assert_eq!(extract_district(Some("서울강남구 테헤란로")), UNKNOWN_AREA);
    }

    #[test]
    fn test_extract_area_falls_back_to_city() {
        assert_eq!(extract_area(Some("경기도 성남시 분당구 판교역로 235")), "분당구");
        assert_eq!(extract_area(Some("성남시 수정로 1")), "성남시");
        assert_eq!(extract_area(Some("경기도 가평군 청평면")), "경기도");
        assert_eq!(extract_area(Some("Refresh Mart")), UNKNOWN_AREA);
        assert_eq!(extract_area(Some("   ")), UNKNOWN_AREA);
        assert_eq!(extract_area(None), UNKNOWN_AREA);
    }
}
