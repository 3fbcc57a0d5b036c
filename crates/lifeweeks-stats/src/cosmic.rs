//! Cosmic perspective

use lifeweeks_core::{
    days_to_years, EARTH_ORBITAL_SPEED_KM_PER_DAY, SOLAR_SYSTEM_SPEED_KM_PER_HOUR,
    UNIVERSE_AGE_YEARS,
};
use serde::Serialize;

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct CosmicStats {
    /// Distance Earth has carried you around the Sun
    pub earth_travel_km: u64,
    /// Distance the solar system has moved through the Milky Way
    pub solar_system_travel_km: u64,
    pub universe_age_percent: f64,
    pub trips_around_sun: u64,
}

pub fn cosmic_stats(days_lived: u64) -> CosmicStats {
    let days = days_lived as f64;
    let years = days_to_years(days_lived as i64);

    CosmicStats {
        earth_travel_km: (days * EARTH_ORBITAL_SPEED_KM_PER_DAY).round() as u64,
        solar_system_travel_km: (days * 24.0 * SOLAR_SYSTEM_SPEED_KM_PER_HOUR).round() as u64,
        universe_age_percent: years / UNIVERSE_AGE_YEARS * 100.0,
        trips_around_sun: years.floor() as u64,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_one_year() {
        let stats = cosmic_stats(366);
        assert_eq!(stats.earth_travel_km, 366 * 2_571_000);
        assert_eq!(stats.solar_system_travel_km, 366 * 24 * 828_000);
        assert_eq!(stats.trips_around_sun, 1);
    }

    #[test]
    fn test_trip_boundary() {
        // 365 days is just short of a 365.25-day year
        assert_eq!(cosmic_stats(365).trips_around_sun, 0);
        assert_eq!(cosmic_stats(0).earth_travel_km, 0);
    }

    #[test]
    fn test_universe_share_is_tiny() {
        let stats = cosmic_stats(80 * 365);
        assert!(stats.universe_age_percent > 5.7e-7);
        assert!(stats.universe_age_percent < 5.8e-7);
    }
}
