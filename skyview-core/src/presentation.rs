//! Condition to icon/background lookup tables.
//!
//! Every function here is total: unknown condition strings fall through to
//! [`Condition::Other`] and get the default icon and image.

/// Coarse weather category, parsed case-insensitively from provider strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Condition {
    Clear,
    Clouds,
    /// Few or scattered clouds.
    PartlyCloudy,
    Rain,
    Drizzle,
    Thunderstorm,
    Snow,
    /// Mist or fog.
    Mist,
    Other,
}

impl Condition {
    pub fn parse(condition: &str) -> Self {
        match condition.trim().to_lowercase().as_str() {
            "clear" => Self::Clear,
            "clouds" => Self::Clouds,
            "few clouds" | "scattered clouds" => Self::PartlyCloudy,
            "rain" => Self::Rain,
            "drizzle" => Self::Drizzle,
            "thunderstorm" => Self::Thunderstorm,
            "snow" => Self::Snow,
            "mist" | "fog" => Self::Mist,
            _ => Self::Other,
        }
    }

    /// Parse `condition`, using `description` to pick out partly cloudy skies.
    pub fn refine(condition: &str, description: &str) -> Self {
        match Self::parse(condition) {
            Self::Clouds => {
                let description = description.to_lowercase();
                if description.contains("few") || description.contains("scattered") {
                    Self::PartlyCloudy
                } else {
                    Self::Clouds
                }
            }
            other => other,
        }
    }
}

impl From<&str> for Condition {
    fn from(value: &str) -> Self {
        Self::parse(value)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IconId {
    Sun,
    MoonStar,
    CloudSun,
    CloudMoon,
    Cloudy,
    CloudRain,
    CloudDrizzle,
    CloudLightning,
    CloudSnow,
    CloudFog,
    Cloud,
    Moon,
}

impl IconId {
    pub fn as_str(&self) -> &'static str {
        match self {
            IconId::Sun => "sun",
            IconId::MoonStar => "moon-star",
            IconId::CloudSun => "cloud-sun",
            IconId::CloudMoon => "cloud-moon",
            IconId::Cloudy => "cloudy",
            IconId::CloudRain => "cloud-rain",
            IconId::CloudDrizzle => "cloud-drizzle",
            IconId::CloudLightning => "cloud-lightning",
            IconId::CloudSnow => "cloud-snow",
            IconId::CloudFog => "cloud-fog",
            IconId::Cloud => "cloud",
            IconId::Moon => "moon",
        }
    }

    /// Terminal glyph.
    pub fn glyph(&self) -> &'static str {
        match self {
            IconId::Sun => "☀️",
            IconId::MoonStar => "🌟",
            IconId::CloudSun => "⛅",
            IconId::CloudMoon => "☁️🌙",
            IconId::Cloudy => "☁️",
            IconId::CloudRain => "🌧️",
            IconId::CloudDrizzle => "🌦️",
            IconId::CloudLightning => "⛈️",
            IconId::CloudSnow => "🌨️",
            IconId::CloudFog => "🌫️",
            IconId::Cloud => "🌥️",
            IconId::Moon => "🌙",
        }
    }
}

impl std::fmt::Display for IconId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Icon for a condition; accepts a raw provider string or a parsed [`Condition`].
pub fn icon_for(condition: impl Into<Condition>, is_daytime: bool) -> IconId {
    use Condition::*;

    match (condition.into(), is_daytime) {
        (Clear, true) => IconId::Sun,
        (Clear, false) => IconId::MoonStar,
        (PartlyCloudy, true) => IconId::CloudSun,
        (PartlyCloudy, false) => IconId::CloudMoon,
        (Clouds, _) => IconId::Cloudy,
        (Rain, _) => IconId::CloudRain,
        (Drizzle, _) => IconId::CloudDrizzle,
        (Thunderstorm, _) => IconId::CloudLightning,
        (Snow, _) => IconId::CloudSnow,
        (Mist, _) => IconId::CloudFog,
        (Other, true) => IconId::Cloud,
        (Other, false) => IconId::Moon,
    }
}

const UNSPLASH: &str = "https://images.unsplash.com";

macro_rules! photo {
    ($id:literal) => {
        concat!("https://images.unsplash.com/", $id, "?auto=format&fit=crop&q=80")
    };
}

pub const NIGHT_CLEAR: &str = photo!("photo-1475274047050-1d0c0975c63e");
pub const NIGHT_CLOUDS: &str = photo!("photo-1501418611786-e29f9929fe03");
pub const NIGHT_RAIN: &str = photo!("photo-1438260483147-81148f799f25");
pub const NIGHT_SNOW: &str = photo!("photo-1517299321609-52687d1bc55a");
pub const NIGHT_DEFAULT: &str = photo!("photo-1532978379970-2260b0c57fc1");

pub const DAY_CLEAR: &str = photo!("photo-1598717123623-994ab270a041");
pub const DAY_CLOUDS: &str = photo!("photo-1611928482473-7b27d24eab80");
pub const DAY_RAIN: &str = photo!("photo-1534274988757-a28bf1a57c17");
pub const DAY_SNOW: &str = photo!("photo-1491002052546-bf38f186af56");
pub const DAY_MIST: &str = photo!("photo-1543968996-ee822b8176ba");
pub const DAY_DRIZZLE: &str = photo!("photo-1541919329513-35f7af297129");
pub const DAY_DEFAULT: &str = photo!("photo-1601297183305-6df142704ea2");

/// Same image by day and night.
pub const THUNDERSTORM: &str = photo!("photo-1605727216801-e27ce1d0cc28");

/// Background image URL for a condition.
pub fn background_for(condition: impl Into<Condition>, is_daytime: bool) -> &'static str {
    use Condition::*;

    let condition = condition.into();
    if !is_daytime {
        return match condition {
            Clear => NIGHT_CLEAR,
            Clouds | PartlyCloudy => NIGHT_CLOUDS,
            Rain => NIGHT_RAIN,
            Thunderstorm => THUNDERSTORM,
            Snow => NIGHT_SNOW,
            Drizzle | Mist | Other => NIGHT_DEFAULT,
        };
    }

    match condition {
        Clear => DAY_CLEAR,
        Clouds | PartlyCloudy => DAY_CLOUDS,
        Rain => DAY_RAIN,
        Thunderstorm => THUNDERSTORM,
        Snow => DAY_SNOW,
        Mist => DAY_MIST,
        Drizzle => DAY_DRIZZLE,
        Other => DAY_DEFAULT,
    }
}

/// True when `url` points at the image host used for backgrounds.
pub fn is_background_url(url: &str) -> bool {
    url.starts_with(UNSPLASH)
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [Condition; 9] = [
        Condition::Clear,
        Condition::Clouds,
        Condition::PartlyCloudy,
        Condition::Rain,
        Condition::Drizzle,
        Condition::Thunderstorm,
        Condition::Snow,
        Condition::Mist,
        Condition::Other,
    ];

    #[test]
    fn parse_is_case_insensitive() {
        assert_eq!(Condition::parse("Clear"), Condition::Clear);
        assert_eq!(Condition::parse("CLOUDS"), Condition::Clouds);
        assert_eq!(Condition::parse("thunderstorm"), Condition::Thunderstorm);
        assert_eq!(Condition::parse("Fog"), Condition::Mist);
        assert_eq!(Condition::parse("Scattered Clouds"), Condition::PartlyCloudy);
    }

    #[test]
    fn unknown_strings_fall_back_to_other() {
        for s in ["", "Haze", "Smoke", "Tornado", "🌪", "clear sky"] {
            assert_eq!(Condition::parse(s), Condition::Other, "{s:?}");
        }
    }

    #[test]
    fn refine_detects_partly_cloudy_from_description() {
        assert_eq!(Condition::refine("Clouds", "few clouds"), Condition::PartlyCloudy);
        assert_eq!(Condition::refine("Clouds", "scattered clouds"), Condition::PartlyCloudy);
        assert_eq!(Condition::refine("Clouds", "overcast clouds"), Condition::Clouds);
        assert_eq!(Condition::refine("Rain", "few drops"), Condition::Rain);
    }

    #[test]
    fn clear_sky_icons() {
        assert_eq!(icon_for(Condition::Clear, true), IconId::Sun);
        assert_eq!(icon_for(Condition::Clear, false), IconId::MoonStar);
    }

    #[test]
    fn night_icons_use_moon_variants() {
        assert_eq!(icon_for(Condition::PartlyCloudy, false), IconId::CloudMoon);
        assert_eq!(icon_for(Condition::PartlyCloudy, true), IconId::CloudSun);
        assert_eq!(icon_for(Condition::Other, false), IconId::Moon);
        assert_eq!(icon_for(Condition::Other, true), IconId::Cloud);
    }

    #[test]
    fn precipitation_icons_ignore_time_of_day() {
        for is_day in [true, false] {
            assert_eq!(icon_for(Condition::Rain, is_day), IconId::CloudRain);
            assert_eq!(icon_for(Condition::Drizzle, is_day), IconId::CloudDrizzle);
            assert_eq!(icon_for(Condition::Thunderstorm, is_day), IconId::CloudLightning);
            assert_eq!(icon_for(Condition::Snow, is_day), IconId::CloudSnow);
            assert_eq!(icon_for(Condition::Mist, is_day), IconId::CloudFog);
        }
    }

    #[test]
    fn every_condition_has_an_icon_and_background() {
        for condition in ALL {
            for is_day in [true, false] {
                assert!(!icon_for(condition, is_day).as_str().is_empty());
                assert!(is_background_url(background_for(condition, is_day)));
            }
        }
    }

    #[test]
    fn mist_and_drizzle_backgrounds_are_day_only() {
        assert_eq!(background_for(Condition::Mist, true), DAY_MIST);
        assert_eq!(background_for(Condition::Drizzle, true), DAY_DRIZZLE);
        assert_eq!(background_for(Condition::Mist, false), NIGHT_DEFAULT);
        assert_eq!(background_for(Condition::Drizzle, false), NIGHT_DEFAULT);
    }

    #[test]
    fn thunderstorm_background_is_shared() {
        assert_eq!(background_for(Condition::Thunderstorm, true), THUNDERSTORM);
        assert_eq!(background_for(Condition::Thunderstorm, false), THUNDERSTORM);
    }

    #[test]
    fn raw_strings_are_accepted() {
        assert_eq!(icon_for("CLEAR", true), IconId::Sun);
        assert_eq!(icon_for("", false), IconId::Moon);
        assert_eq!(background_for("Snow", false), NIGHT_SNOW);
        assert_eq!(background_for("whatever", true), DAY_DEFAULT);
    }

    #[test]
    fn unrecognized_condition_gets_defaults() {
        let c = Condition::parse("volcanic ash");
        assert_eq!(background_for(c, true), DAY_DEFAULT);
        assert_eq!(background_for(c, false), NIGHT_DEFAULT);
    }
}
