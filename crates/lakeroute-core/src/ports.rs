//! Named port presets.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Port {
    pub name: &'static str,
    pub lon: f64,
    pub lat: f64,
}

impl Port {
    pub fn lon_lat(&self) -> [f64; 2] {
        [self.lon, self.lat]
    }

    /// City part of the name, e.g. `Green Bay` for `Green Bay, WI`.
    pub fn city(&self) -> &'static str {
        self.name.split(',').next().unwrap_or(self.name).trim()
    }
}

pub const PORTS: [Port; 9] = [
    Port { name: "Detroit, MI", lon: -83.0458, lat: 42.3314 },
    Port { name: "Cleveland, OH", lon: -81.6954, lat: 41.4993 },
    Port { name: "Toledo, OH", lon: -83.5379, lat: 41.6528 },
    Port { name: "Chicago, IL", lon: -87.6298, lat: 41.8781 },
    Port { name: "Milwaukee, WI", lon: -87.9065, lat: 43.0389 },
    Port { name: "Green Bay, WI", lon: -88.0198, lat: 44.5133 },
    Port { name: "Duluth, MN", lon: -92.1005, lat: 46.7867 },
    Port { name: "Sault Ste. Marie, MI", lon: -84.3453, lat: 46.4953 },
    Port { name: "Thunder Bay, ON", lon: -89.2477, lat: 48.3809 },
];

/// Look up a port by full name or city, ignoring case.
pub fn find_port(name: &str) -> Option<&'static Port> {
    let query = name.trim();
    PORTS.iter().find(|port| {
        port.name.eq_ignore_ascii_case(query) || port.city().eq_ignore_ascii_case(query)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_by_full_name_or_city() {
        assert_eq!(find_port("Chicago, IL").map(|p| p.lon), Some(-87.6298));
        assert_eq!(find_port("thunder bay").map(|p| p.name), Some("Thunder Bay, ON"));
        assert_eq!(find_port("  SAULT STE. MARIE ").map(|p| p.lat), Some(46.4953));
        assert!(find_port("Buffalo").is_none());
    }

    #[test]
    fn cities_are_unique() {
        let mut cities: Vec<&str> = PORTS.iter().map(Port::city).collect();
        cities.sort_unstable();
        cities.dedup();
        assert_eq!(cities.len(), PORTS.len());
    }
}
