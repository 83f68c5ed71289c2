use url::Url;

/// Forms relay used whenever no usable override was baked into the build.
pub const DEFAULT_RELAY_URL: &str = "https://formspree.io/f/myzdyrdj";

const SCRIPT_RELAY_HOST: &str = "script.google.com";

pub const SITE_OWNER: &str = "Shayan Shaikh";
pub const HOME_TITLE: &str = "Shayan Shaikh | Creative Technologist & Web Developer";

pub const LOGO_PATH: &str = "/logo/s.svg.jpg";
pub const BACKGROUND_VIDEO_PATH: &str = "/background/background.mp4";

pub const PAGE_LOAD_SOUND: &str = "/sounds/page-load.mp3";
pub const LOADER_SOUND: &str = "/sounds/loader.wav";
pub const NAME_SOUND: &str = "/sounds/name-sound.mp3.wav";
pub const CLICK_SOUND: &str = "/sounds/click.wav";

/// Relay override baked in at build time, e.g. `CONTACT_RELAY_URL=... trunk build`.
pub fn relay_override() -> Option<&'static str> {
    option_env!("CONTACT_RELAY_URL")
}

/// Where contact submissions go and in which shape.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RelayEndpoint {
    /// Multipart POST with `Accept: application/json`.
    FormsRelay(String),
    /// URL-encoded POST to an Apps Script web app.
    ScriptRelay(String),
}

impl RelayEndpoint {
    /// Always yields an endpoint; a missing or unusable override falls back
    /// to [`DEFAULT_RELAY_URL`].
    pub fn resolve(configured: Option<&str>) -> Self {
        let configured = match configured.map(str::trim) {
            Some(raw) if !raw.is_empty() => raw,
            _ => return Self::default(),
        };

        match Url::parse(configured) {
            Ok(url) if url.host_str() == Some(SCRIPT_RELAY_HOST) => {
                Self::ScriptRelay(url.to_string())
            }
            Ok(url) if matches!(url.scheme(), "http" | "https") => Self::FormsRelay(url.to_string()),
            Ok(url) => {
                log::warn!("Relay override has unsupported scheme {}, using default", url.scheme());
                Self::default()
            }
            Err(e) => {
                log::warn!("Relay override {:?} is not a valid URL ({}), using default", configured, e);
                Self::default()
            }
        }
    }

    pub fn from_build_env() -> Self {
        Self::resolve(relay_override())
    }

    pub fn url(&self) -> &str {
        match self {
            Self::FormsRelay(url) | Self::ScriptRelay(url) => url,
        }
    }
}

impl Default for RelayEndpoint {
    fn default() -> Self {
        Self::FormsRelay(DEFAULT_RELAY_URL.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_override_falls_back_to_forms_relay() {
        assert_eq!(
            RelayEndpoint::resolve(None),
            RelayEndpoint::FormsRelay(DEFAULT_RELAY_URL.to_string())
        );
        assert_eq!(RelayEndpoint::resolve(Some("   ")), RelayEndpoint::default());
    }

    #[test]
    fn apps_script_override_uses_script_relay() {
        let endpoint = RelayEndpoint::resolve(Some(
            "https://script.google.com/macros/s/AKfycbx123/exec",
        ));
        assert_eq!(
            endpoint,
            RelayEndpoint::ScriptRelay("https://script.google.com/macros/s/AKfycbx123/exec".to_string())
        );
    }

    #[test]
    fn other_override_uses_forms_relay() {
        let endpoint = RelayEndpoint::resolve(Some(" https://formspree.io/f/abcdef "));
        assert_eq!(endpoint, RelayEndpoint::FormsRelay("https://formspree.io/f/abcdef".to_string()));
    }

    #[test]
    fn unusable_override_falls_back() {
        assert_eq!(RelayEndpoint::resolve(Some("not a url")), RelayEndpoint::default());
        assert_eq!(RelayEndpoint::resolve(Some("mailto:me@example.com")), RelayEndpoint::default());
    }
}
