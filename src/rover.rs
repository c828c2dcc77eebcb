use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use std::str::FromStr;

/// Length of a Martian solar day, in Earth hours (24h 39m 35s)
pub const SOL_LENGTH_HOURS: f64 = 24.0 + 39.0 / 60.0 + 35.0 / 3600.0;

/// The rovers whose photos can go on the wallpaper
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rover {
    Perseverance,
    Curiosity,
}

impl Rover {
    /// The rover's name as it appears in API paths
    pub fn api_name(&self) -> &'static str {
        match self {
            Rover::Perseverance => "perseverance",
            Rover::Curiosity => "curiosity",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Rover::Perseverance => "Perseverance",
            Rover::Curiosity => "Curiosity",
        }
    }
}

impl FromStr for Rover {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "perseverance" | "percy" => Ok(Rover::Perseverance),
            "curiosity" => Ok(Rover::Curiosity),
            _ => Err(format!(
                "unknown rover \"{s}\": expected \"perseverance\" or \"curiosity\""
            )),
        }
    }
}

impl std::fmt::Display for Rover {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}

/// How rover photos are arranged on the right half of the wallpaper
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoverLayout {
    /// The single largest photo of the sol
    Single,
    /// Up to `max_photos` photos of the sol, tiled `columns` wide
    Grid { columns: usize, max_photos: usize },
}

/// Which rover to show, which of its cameras to use, and how to lay the photos out
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoverVariant {
    pub rover: Rover,
    /// API camera code to filter photos by, e.g. `MCZ_LEFT`
    pub camera: String,
    /// Camera name used in the wallpaper caption
    pub camera_label: String,
    pub layout: RoverLayout,
}

impl RoverVariant {
    /// Perseverance's left Mastcam-Z, showing the largest photo of the latest sol
    pub fn perseverance() -> RoverVariant {
        RoverVariant {
            rover: Rover::Perseverance,
            camera: "MCZ_LEFT".to_string(),
            camera_label: "Mastcam".to_string(),
            layout: RoverLayout::Single,
        }
    }

    /// Curiosity's Mastcam, showing a 2x2 grid of the latest sol's photos
    pub fn curiosity() -> RoverVariant {
        RoverVariant {
            rover: Rover::Curiosity,
            camera: "MAST".to_string(),
            camera_label: "Mastcam".to_string(),
            layout: RoverLayout::Grid {
                columns: 2,
                max_photos: 4,
            },
        }
    }

    pub fn for_rover(rover: Rover) -> RoverVariant {
        match rover {
            Rover::Perseverance => Self::perseverance(),
            Rover::Curiosity => Self::curiosity(),
        }
    }

    /// The two caption lines shown under the rover photos
    pub fn captions(&self, max_sol: u32, clock: &MissionClock, now: NaiveDateTime) -> [String; 2] {
        [
            format!(
                "{} {} - Latest Sol: {max_sol}",
                self.rover.display_name(),
                self.camera_label
            ),
            format!(
                "On Mars for {} sols ({} Earth days)",
                clock.sols_since_landing(now),
                clock.earth_days_since_landing(now)
            ),
        ]
    }
}

impl Default for RoverVariant {
    fn default() -> Self {
        Self::perseverance()
    }
}

/// Counts time on Mars since a rover landed. The landing is taken to be at midnight on the
/// landing date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MissionClock {
    pub landing_date: NaiveDate,
}

impl MissionClock {
    pub fn new(landing_date: NaiveDate) -> MissionClock {
        MissionClock { landing_date }
    }

    fn landing(&self) -> NaiveDateTime {
        self.landing_date.and_time(NaiveTime::MIN)
    }

    /// Whole sols elapsed between landing and `now`
    pub fn sols_since_landing(&self, now: NaiveDateTime) -> i64 {
        let elapsed_hours = (now - self.landing()).num_seconds() as f64 / 3600.0;
        (elapsed_hours / SOL_LENGTH_HOURS) as i64
    }

    /// Whole Earth days elapsed between landing and `now`
    pub fn earth_days_since_landing(&self, now: NaiveDateTime) -> i64 {
        (now - self.landing()).num_days()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(y: i32, m: u32, d: u32, h: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, 0, 0)
            .unwrap()
    }

    #[test]
    fn parses_rover_names() {
        assert_eq!("Perseverance".parse::<Rover>(), Ok(Rover::Perseverance));
        assert_eq!("CURIOSITY".parse::<Rover>(), Ok(Rover::Curiosity));
        assert!("opportunity".parse::<Rover>().is_err());
    }

    #[test]
    fn a_sol_is_longer_than_a_day() {
        let clock = MissionClock::new(NaiveDate::from_ymd_opt(2021, 2, 18).unwrap());
        assert_eq!(clock.sols_since_landing(at(2021, 2, 18, 0)), 0);
        // one Earth day in, the first sol isn't over yet
        assert_eq!(clock.sols_since_landing(at(2021, 2, 19, 0)), 0);
        assert_eq!(clock.earth_days_since_landing(at(2021, 2, 19, 0)), 1);
        assert_eq!(clock.sols_since_landing(at(2021, 2, 19, 1)), 1);
    }

    #[test]
    fn long_missions_drift_apart() {
        let clock = MissionClock::new(NaiveDate::from_ymd_opt(2012, 8, 6).unwrap());
        let now = at(2024, 8, 6, 0);
        let days = clock.earth_days_since_landing(now);
        assert_eq!(days, 4383);
        // 4383 days * 24 / 24.6597 hours
        assert_eq!(clock.sols_since_landing(now), 4265);
    }

    #[test]
    fn captions_name_the_rover_and_camera() {
        let clock = MissionClock::new(NaiveDate::from_ymd_opt(2021, 2, 18).unwrap());
        let [first, second] =
            RoverVariant::perseverance().captions(1234, &clock, at(2021, 2, 28, 12));
        assert_eq!(first, "Perseverance Mastcam - Latest Sol: 1234");
        assert_eq!(second, "On Mars for 10 sols (10 Earth days)");
    }

    #[test]
    fn variants_per_rover() {
        assert_eq!(RoverVariant::for_rover(Rover::Perseverance).camera, "MCZ_LEFT");
        assert_eq!(RoverVariant::for_rover(Rover::Curiosity).camera, "MAST");
        assert!(matches!(
            RoverVariant::curiosity().layout,
            RoverLayout::Grid { columns: 2, .. }
        ));
    }
}
