//! Game settings and preferences
//!
//! Nothing is persisted: every session starts from the defaults, and URL
//! query parameters can override them (`?lang=en&sound=off&sprites=off`).

/// Score label language
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Locale {
    #[default]
    Chinese,
    English,
}

impl Locale {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "zh" | "cn" | "chinese" => Some(Locale::Chinese),
            "en" | "english" => Some(Locale::English),
            _ => None,
        }
    }
}

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    /// Language of the score label
    pub locale: Locale,
    /// Draw sprite images when they load (vector shapes otherwise)
    pub sprites: bool,
    /// Sound effects on/off
    pub sound: bool,
    /// Master volume (0.0 - 1.0)
    pub master_volume: f32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            locale: Locale::Chinese,
            sprites: true,
            sound: true,
            master_volume: 0.8,
        }
    }
}

fn parse_switch(value: &str) -> Option<bool> {
    match value.to_lowercase().as_str() {
        "on" | "1" | "true" | "yes" => Some(true),
        "off" | "0" | "false" | "no" => Some(false),
        _ => None,
    }
}

impl Settings {
    /// Defaults with the page's query string applied on top
    pub fn from_query(query: &str) -> Self {
        let mut settings = Self::default();
        settings.apply_query(query);
        settings
    }

    /// Apply overrides from a URL query string (leading `?` optional).
    /// Unknown keys and unparseable values are ignored.
    pub fn apply_query(&mut self, query: &str) {
        let query = query.strip_prefix('?').unwrap_or(query);
        for pair in query.split('&').filter(|p| !p.is_empty()) {
            let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
            match key {
                "lang" => {
                    if let Some(locale) = Locale::from_str(value) {
                        self.locale = locale;
                    }
                }
                "sound" => {
                    if let Some(on) = parse_switch(value) {
                        self.sound = on;
                    }
                }
                "sprites" => {
                    if let Some(on) = parse_switch(value) {
                        self.sprites = on;
                    }
                }
                "volume" => {
                    if let Ok(v) = value.parse::<f32>() {
                        self.master_volume = v.clamp(0.0, 1.0);
                    }
                }
                _ => log::debug!("Ignoring unknown setting '{}'", key),
            }
        }
    }

    /// Effective volume (0 when sound is off)
    pub fn effective_volume(&self) -> f32 {
        if self.sound {
            self.master_volume.clamp(0.0, 1.0)
        } else {
            0.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_overrides() {
        let mut s = Settings::default();
        s.apply_query("?lang=en&sound=off&sprites=0&volume=2.5");
        assert_eq!(s.locale, Locale::English);
        assert!(!s.sound);
        assert!(!s.sprites);
        assert_eq!(s.master_volume, 1.0);
        assert_eq!(s.effective_volume(), 0.0);
    }

    #[test]
    fn test_query_ignores_garbage() {
        let mut s = Settings::default();
        s.apply_query("lang=klingon&sound=maybe&bogus&=x&&");
        assert_eq!(s, Settings::default());
    }

    #[test]
    fn test_every_session_starts_from_defaults() {
        assert_eq!(Settings::from_query(""), Settings::default());
        assert_eq!(Settings::from_query("?"), Settings::default());

        let english = Settings::from_query("?lang=en");
        assert_eq!(
            english,
            Settings {
                locale: Locale::English,
                ..Settings::default()
            }
        );
    }

    #[test]
    fn test_locale_names() {
        assert_eq!(Locale::from_str("EN"), Some(Locale::English));
        assert_eq!(Locale::from_str("zh"), Some(Locale::Chinese));
        assert_eq!(Locale::from_str("fr"), None);
    }
}
