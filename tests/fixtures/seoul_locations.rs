//! Real Seoul locations for realistic test fixtures.

use refresh_route::geo::GeoPoint;

/// A named location with coordinates.
#[derive(Debug, Clone)]
pub struct Location {
    pub name: &'static str,
    pub lat: f64,
    pub lon: f64,
}

impl Location {
    pub const fn new(name: &'static str, lat: f64, lon: f64) -> Self {
        Self { name, lat, lon }
    }

    pub fn point(&self) -> GeoPoint {
        GeoPoint::new(self.lat, self.lon)
    }
}

pub const CITY_HALL: Location = Location::new("Seoul City Hall", 37.5666805, 126.9784147);
pub const GANGNAM_STATION: Location = Location::new("Gangnam Station", 37.498095, 127.02761);
pub const YEOUIDO_STATION: Location = Location::new("Yeouido Station", 37.521718, 126.924234);

// ============================================================================
// Pickup sites spread across the city
// ============================================================================

pub const PICKUP_SITES: &[Location] = &[
    Location::new("Seoul Station", 37.554648, 126.970702),
    Location::new("Gwanghwamun", 37.571648, 126.976372),
    Location::new("Myeongdong", 37.563656, 126.985950),
    Location::new("Dongdaemun History & Culture Park", 37.565138, 127.007896),
    Location::new("Hongik Univ. Station", 37.557527, 126.924467),
    Location::new("Sinchon Station", 37.555134, 126.936893),
    Location::new("Itaewon Station", 37.534542, 126.994596),
    Location::new("Jamsil Station", 37.513305, 127.100129),
    Location::new("Konkuk Univ. Station", 37.540693, 127.070230),
    Location::new("Wangsimni Station", 37.561268, 127.037103),
    Location::new("Yongsan Station", 37.529849, 126.964561),
    Location::new("Sadang Station", 37.476538, 126.981544),
];

/// Returns the first `count` pickup sites.
pub fn sample_sites(count: usize) -> Vec<Location> {
    PICKUP_SITES.iter().take(count).cloned().collect()
}
