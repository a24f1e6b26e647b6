//! Site configuration module.
//!
//! Handles loading, validating, and merging `config.toml`. Stock defaults are
//! overridden key-by-key by the user's `config.toml` in the content root, so a
//! config file only needs the values it wants to change.
//!
//! ## Configuration Options
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! [site]
//! artist_name = "Artist Name"
//! tagline = "Visual Artist & Creator"
//! email = "hello@artistname.com"
//! instagram = "artistname"
//! location = "Brooklyn, New York"
//! years_of_practice = 12
//! # copyright_year = 2026    # Omitted from the footer when unset
//!
//! [motion]
//! reveal_threshold = 0.1                  # Fraction visible before reveal
//! reveal_root_margin = "0px 0px -50px 0px"
//! count_up_duration_ms = 2000
//! cursor_lag = 0.15                       # Ring easing factor per frame
//! magnetic_strength = 0.3
//! parallax_speed = 0.5
//!
//! [contact]
//! send_delay_ms = 1000      # Simulated delivery time
//! display_delay_ms = 3000   # How long "Message Sent!" stays up
//! # endpoint = "https://formspree.io/f/xxxx"
//!
//! [colors.light]
//! background = "#ffffff"
//! background_alt = "#f6f5f2"
//! text = "#111111"
//! text_muted = "#666666"
//! border = "#e0e0e0"
//! accent = "#111111"
//!
//! [colors.dark]
//! background = "#0a0a0a"
//! background_alt = "#151515"
//! text = "#eeeeee"
//! text_muted = "#999999"
//! border = "#333333"
//! accent = "#f2f2f2"
//!
//! [processing]
//! max_processes = 4         # Max parallel page renderers (omit for auto = CPU cores)
//! ```
//!
//! Unknown keys are rejected to catch typos early.

use crate::motion::reveal::RootMargin;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::time::Duration;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Site configuration loaded from `config.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteConfig {
    /// Artist identity and contact details shown across pages.
    pub site: SiteInfo,
    /// Parameters for reveal, count-up, cursor and parallax effects.
    pub motion: MotionConfig,
    /// Contact form timing and optional production endpoint.
    pub contact: ContactConfig,
    /// Color schemes for light and dark modes.
    pub colors: ColorConfig,
    /// Parallel rendering settings.
    pub processing: ProcessingConfig,
}

impl SiteConfig {
    /// Validate config values are within acceptable ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.site.artist_name.trim().is_empty() {
            return Err(ConfigError::Validation(
                "site.artist_name must not be empty".into(),
            ));
        }
        if !(0.0..=1.0).contains(&self.motion.reveal_threshold) {
            return Err(ConfigError::Validation(
                "motion.reveal_threshold must be between 0 and 1".into(),
            ));
        }
        if RootMargin::parse(&self.motion.reveal_root_margin).is_none() {
            return Err(ConfigError::Validation(format!(
                "motion.reveal_root_margin is not a CSS margin: {:?}",
                self.motion.reveal_root_margin
            )));
        }
        if !(self.motion.cursor_lag > 0.0 && self.motion.cursor_lag <= 1.0) {
            return Err(ConfigError::Validation(
                "motion.cursor_lag must be in (0, 1]".into(),
            ));
        }
        if !(0.0..=1.0).contains(&self.motion.magnetic_strength) {
            return Err(ConfigError::Validation(
                "motion.magnetic_strength must be between 0 and 1".into(),
            ));
        }
        if !self.motion.parallax_speed.is_finite() {
            return Err(ConfigError::Validation(
                "motion.parallax_speed must be a finite number".into(),
            ));
        }
        if self.motion.count_up_duration_ms == 0 {
            return Err(ConfigError::Validation(
                "motion.count_up_duration_ms must be positive".into(),
            ));
        }
        Ok(())
    }
}

/// Artist identity.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteInfo {
    pub artist_name: String,
    pub tagline: String,
    pub email: String,
    /// Instagram handle without the leading `@`.
    pub instagram: String,
    pub location: String,
    /// Shown by the "Years Practice" counter.
    pub years_of_practice: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub copyright_year: Option<u16>,
}

impl Default for SiteInfo {
    fn default() -> Self {
        Self {
            artist_name: "Artist Name".to_string(),
            tagline: "Visual Artist & Creator".to_string(),
            email: "hello@artistname.com".to_string(),
            instagram: "artistname".to_string(),
            location: "Brooklyn, New York".to_string(),
            years_of_practice: 12,
            copyright_year: None,
        }
    }
}

/// Animation parameters. Passed to the page script as `data-*` attributes
/// and used to construct the Rust motion models.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MotionConfig {
    /// Fraction of a region that must be visible before it reveals.
    pub reveal_threshold: f64,
    /// CSS margin shorthand applied to the viewport when testing visibility.
    pub reveal_root_margin: String,
    pub count_up_duration_ms: u64,
    /// Fraction of the remaining distance the cursor ring covers per frame.
    pub cursor_lag: f64,
    /// How far magnetic elements lean toward the pointer.
    pub magnetic_strength: f64,
    pub parallax_speed: f64,
}

impl Default for MotionConfig {
    fn default() -> Self {
        Self {
            reveal_threshold: 0.1,
            reveal_root_margin: "0px 0px -50px 0px".to_string(),
            count_up_duration_ms: 2000,
            cursor_lag: 0.15,
            magnetic_strength: 0.3,
            parallax_speed: 0.5,
        }
    }
}

/// Contact form timing.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ContactConfig {
    pub send_delay_ms: u64,
    pub display_delay_ms: u64,
    /// Production form handler. When unset the form only simulates delivery.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub endpoint: Option<String>,
}

impl ContactConfig {
    pub fn send_delay(&self) -> Duration {
        Duration::from_millis(self.send_delay_ms)
    }

    pub fn display_delay(&self) -> Duration {
        Duration::from_millis(self.display_delay_ms)
    }
}

impl Default for ContactConfig {
    fn default() -> Self {
        Self {
            send_delay_ms: 1000,
            display_delay_ms: 3000,
            endpoint: None,
        }
    }
}

/// Parallel rendering settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ProcessingConfig {
    /// Maximum number of parallel page renderers.
    /// When absent, defaults to the number of CPU cores.
    /// Values larger than the core count are clamped down.
    pub max_processes: Option<usize>,
}

/// Resolve the effective thread count from config.
///
/// - `None` → use all available cores
/// - `Some(n)` → use `min(n, cores)` (user can constrain down, not up)
pub fn effective_threads(config: &ProcessingConfig) -> usize {
    let cores = std::thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(1);
    config
        .max_processes
        .map(|n| n.clamp(1, cores))
        .unwrap_or(cores)
}

/// Color configuration for light and dark modes.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ColorConfig {
    pub light: ColorScheme,
    pub dark: ColorScheme,
}

impl Default for ColorConfig {
    fn default() -> Self {
        Self {
            light: ColorScheme::default_light(),
            dark: ColorScheme::default_dark(),
        }
    }
}

/// Individual color scheme (light or dark).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ColorScheme {
    pub background: String,
    /// Alternate section background (series context, quote, stats).
    pub background_alt: String,
    pub text: String,
    /// Secondary text: labels, meta lines, captions.
    pub text_muted: String,
    pub border: String,
    /// Buttons, cursor ring, active filter tab.
    pub accent: String,
}

impl ColorScheme {
    pub fn default_light() -> Self {
        Self {
            background: "#ffffff".to_string(),
            background_alt: "#f6f5f2".to_string(),
            text: "#111111".to_string(),
            text_muted: "#666666".to_string(),
            border: "#e0e0e0".to_string(),
            accent: "#111111".to_string(),
        }
    }

    pub fn default_dark() -> Self {
        Self {
            background: "#0a0a0a".to_string(),
            background_alt: "#151515".to_string(),
            text: "#eeeeee".to_string(),
            text_muted: "#999999".to_string(),
            border: "#333333".to_string(),
            accent: "#f2f2f2".to_string(),
        }
    }
}

impl Default for ColorScheme {
    fn default() -> Self {
        Self::default_light()
    }
}

// =============================================================================
// Config loading, merging, and validation
// =============================================================================

/// Returns the stock default config as a `toml::Value::Table`.
///
/// This is the base layer user overrides are merged onto.
pub fn stock_defaults_value() -> Result<toml::Value, ConfigError> {
    toml::Value::try_from(SiteConfig::default())
        .map_err(|e| ConfigError::Validation(format!("default config must serialize: {e}")))
}

/// Recursively merge `overlay` on top of `base`.
///
/// - Tables are merged key-by-key (overlay keys override base keys).
/// - Non-table values in overlay replace base values entirely.
/// - Keys in base that are not in overlay are preserved.
pub fn merge_toml(base: toml::Value, overlay: toml::Value) -> toml::Value {
    match (base, overlay) {
        (toml::Value::Table(mut base_table), toml::Value::Table(overlay_table)) => {
            for (key, overlay_val) in overlay_table {
                let merged = match base_table.remove(&key) {
                    Some(base_val) => merge_toml(base_val, overlay_val),
                    None => overlay_val,
                };
                base_table.insert(key, merged);
            }
            toml::Value::Table(base_table)
        }
        (_, overlay) => overlay,
    }
}

/// Load `config.toml` from a directory as a raw TOML value.
///
/// Returns `Ok(None)` if no `config.toml` exists in the directory.
pub fn load_raw_config(path: &Path) -> Result<Option<toml::Value>, ConfigError> {
    let config_path = path.join("config.toml");
    if !config_path.exists() {
        return Ok(None);
    }
    let content = fs::read_to_string(&config_path)?;
    let value: toml::Value = toml::from_str(&content)?;
    Ok(Some(value))
}

/// Merge an optional overlay onto a base value, then deserialize and validate.
pub fn resolve_config(
    base: toml::Value,
    overlay: Option<toml::Value>,
) -> Result<SiteConfig, ConfigError> {
    let merged = match overlay {
        Some(ov) => merge_toml(base, ov),
        None => base,
    };
    let config: SiteConfig = merged.try_into()?;
    config.validate()?;
    Ok(config)
}

/// Load config from `config.toml` in the given directory, on top of stock
/// defaults.
pub fn load_config(root: &Path) -> Result<SiteConfig, ConfigError> {
    let base = stock_defaults_value()?;
    let overlay = load_raw_config(root)?;
    resolve_config(base, overlay)
}

/// Returns a fully-commented stock `config.toml` with all keys and explanations.
///
/// Used by the `gen-config` CLI command.
pub fn stock_config_toml() -> &'static str {
    r##"# Atelier Configuration
# =====================
# All settings are optional. Remove or comment out any you don't need.
# Values shown below are the defaults. Unknown keys will cause an error.

# ---------------------------------------------------------------------------
# Artist identity
# ---------------------------------------------------------------------------
[site]
artist_name = "Artist Name"
tagline = "Visual Artist & Creator"
email = "hello@artistname.com"
# Instagram handle without the leading @.
instagram = "artistname"
location = "Brooklyn, New York"
# Shown by the "Years Practice" counter on the portfolio page.
years_of_practice = 12
# Footer copyright year. Omitted from the footer when unset.
# copyright_year = 2026

# ---------------------------------------------------------------------------
# Motion
# ---------------------------------------------------------------------------
[motion]
# Fraction (0-1) of a section that must be on screen before it fades in.
reveal_threshold = 0.1
# CSS margin applied to the viewport edges for the reveal test.
reveal_root_margin = "0px 0px -50px 0px"
# How long the portfolio counters take to reach their value.
count_up_duration_ms = 2000
# Fraction of the remaining distance the cursor ring covers each frame.
cursor_lag = 0.15
# How far magnetic buttons lean toward the pointer (0-1).
magnetic_strength = 0.3
# Hero background drift relative to scroll.
parallax_speed = 0.5

# ---------------------------------------------------------------------------
# Contact form
# ---------------------------------------------------------------------------
[contact]
# Simulated delivery time before "Message Sent!".
send_delay_ms = 1000
# How long the confirmation stays before the form resets.
display_delay_ms = 3000
# Production form handler (e.g. Formspree). Without it the form only simulates.
# endpoint = "https://formspree.io/f/xxxx"

# ---------------------------------------------------------------------------
# Colors - Light mode (prefers-color-scheme: light)
# ---------------------------------------------------------------------------
[colors.light]
background = "#ffffff"
background_alt = "#f6f5f2"
text = "#111111"
text_muted = "#666666"
border = "#e0e0e0"
accent = "#111111"

# ---------------------------------------------------------------------------
# Colors - Dark mode (prefers-color-scheme: dark)
# ---------------------------------------------------------------------------
[colors.dark]
background = "#0a0a0a"
background_alt = "#151515"
text = "#eeeeee"
text_muted = "#999999"
border = "#333333"
accent = "#f2f2f2"

# ---------------------------------------------------------------------------
# Processing
# ---------------------------------------------------------------------------
[processing]
# Maximum parallel page renderers.
# Omit or comment out to auto-detect (= number of CPU cores).
# max_processes = 4
"##
}

/// Generate CSS custom properties from color config.
pub fn generate_color_css(colors: &ColorConfig) -> String {
    format!(
        r#":root {{
    --color-bg: {light_bg};
    --color-bg-alt: {light_bg_alt};
    --color-text: {light_text};
    --color-text-muted: {light_text_muted};
    --color-border: {light_border};
    --color-accent: {light_accent};
}}

@media (prefers-color-scheme: dark) {{
    :root {{
        --color-bg: {dark_bg};
        --color-bg-alt: {dark_bg_alt};
        --color-text: {dark_text};
        --color-text-muted: {dark_text_muted};
        --color-border: {dark_border};
        --color-accent: {dark_accent};
    }}
}}"#,
        light_bg = colors.light.background,
        light_bg_alt = colors.light.background_alt,
        light_text = colors.light.text,
        light_text_muted = colors.light.text_muted,
        light_border = colors.light.border,
        light_accent = colors.light.accent,
        dark_bg = colors.dark.background,
        dark_bg_alt = colors.dark.background_alt,
        dark_text = colors.dark.text,
        dark_text_muted = colors.dark.text_muted,
        dark_border = colors.dark.border,
        dark_accent = colors.dark.accent,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn default_config_has_site_identity() {
        let config = SiteConfig::default();
        assert_eq!(config.site.artist_name, "Artist Name");
        assert_eq!(config.site.years_of_practice, 12);
        assert_eq!(config.site.copyright_year, None);
    }

    #[test]
    fn default_motion_values() {
        let motion = MotionConfig::default();
        assert_eq!(motion.reveal_threshold, 0.1);
        assert_eq!(motion.reveal_root_margin, "0px 0px -50px 0px");
        assert_eq!(motion.count_up_duration_ms, 2000);
        assert_eq!(motion.cursor_lag, 0.15);
    }

    #[test]
    fn default_contact_delays() {
        let contact = ContactConfig::default();
        assert_eq!(contact.send_delay(), Duration::from_millis(1000));
        assert_eq!(contact.display_delay(), Duration::from_millis(3000));
        assert!(contact.endpoint.is_none());
    }

    #[test]
    fn parse_partial_config() {
        let toml = r##"
[site]
artist_name = "Mara Vell"

[colors.light]
background = "#fafafa"
"##;
        let config: SiteConfig = toml::from_str(toml).unwrap();
        assert_eq!(config.site.artist_name, "Mara Vell");
        assert_eq!(config.site.tagline, "Visual Artist & Creator");
        assert_eq!(config.colors.light.background, "#fafafa");
        assert_eq!(config.colors.light.text, "#111111");
        assert_eq!(config.motion.count_up_duration_ms, 2000);
    }

    #[test]
    fn generate_css_uses_config_colors() {
        let mut colors = ColorConfig::default();
        colors.light.background = "#f0f0f0".to_string();
        colors.dark.background = "#1a1a1a".to_string();

        let css = generate_color_css(&colors);
        assert!(css.contains("--color-bg: #f0f0f0"));
        assert!(css.contains("--color-bg: #1a1a1a"));
        assert!(css.contains("@media (prefers-color-scheme: dark)"));
        assert!(css.contains("--color-accent:"));
    }

    // =========================================================================
    // load_config
    // =========================================================================

    #[test]
    fn load_config_returns_default_when_no_file() {
        let tmp = TempDir::new().unwrap();
        let config = load_config(tmp.path()).unwrap();
        assert_eq!(config.site.email, "hello@artistname.com");
        assert_eq!(config.contact.send_delay_ms, 1000);
    }

    #[test]
    fn load_config_reads_file() {
        let tmp = TempDir::new().unwrap();
        fs::write(
            tmp.path().join("config.toml"),
            r#"
[contact]
display_delay_ms = 5000
endpoint = "https://forms.example.com/x"

[motion]
cursor_lag = 0.2
"#,
        )
        .unwrap();

        let config = load_config(tmp.path()).unwrap();
        assert_eq!(config.contact.display_delay_ms, 5000);
        assert_eq!(config.contact.send_delay_ms, 1000);
        assert_eq!(
            config.contact.endpoint.as_deref(),
            Some("https://forms.example.com/x")
        );
        assert_eq!(config.motion.cursor_lag, 0.2);
    }

    #[test]
    fn load_config_invalid_toml_is_error() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("config.toml"), "this is not valid toml [[[").unwrap();
        assert!(matches!(load_config(tmp.path()), Err(ConfigError::Toml(_))));
    }

    #[test]
    fn load_config_validates_values() {
        let tmp = TempDir::new().unwrap();
        fs::write(
            tmp.path().join("config.toml"),
            r#"
[motion]
reveal_threshold = 1.5
"#,
        )
        .unwrap();
        assert!(matches!(
            load_config(tmp.path()),
            Err(ConfigError::Validation(_))
        ));
    }

    // =========================================================================
    // Unknown key rejection
    // =========================================================================

    #[test]
    fn unknown_key_rejected() {
        let result: Result<SiteConfig, _> = toml::from_str(
            r#"
[motion]
cursor_lagg = 0.2
"#,
        );
        let err = result.unwrap_err().to_string();
        assert!(err.contains("unknown field"));
    }

    #[test]
    fn unknown_section_rejected() {
        let result: Result<SiteConfig, _> = toml::from_str("[thumbnails]\naspect_ratio = [4, 5]\n");
        assert!(result.is_err());
    }

    // =========================================================================
    // Validation
    // =========================================================================

    #[test]
    fn validate_default_config_passes() {
        assert!(SiteConfig::default().validate().is_ok());
    }

    #[test]
    fn validate_threshold_bounds() {
        let mut config = SiteConfig::default();
        config.motion.reveal_threshold = 0.0;
        assert!(config.validate().is_ok());
        config.motion.reveal_threshold = 1.0;
        assert!(config.validate().is_ok());
        config.motion.reveal_threshold = -0.1;
        assert!(config.validate().is_err());
    }

    #[test]
    fn validate_root_margin() {
        let mut config = SiteConfig::default();
        config.motion.reveal_root_margin = "10%".to_string();
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("reveal_root_margin"));
    }

    #[test]
    fn validate_cursor_lag() {
        let mut config = SiteConfig::default();
        config.motion.cursor_lag = 0.0;
        assert!(config.validate().is_err());
        config.motion.cursor_lag = 1.0;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn validate_parallax_speed_is_finite() {
        let mut config = SiteConfig::default();
        config.motion.parallax_speed = -0.5;
        assert!(config.validate().is_ok());
        for raw in ["nan", "inf", "-inf"] {
            let config: SiteConfig =
                toml::from_str(&format!("[motion]\nparallax_speed = {raw}\n")).unwrap();
            assert!(config.validate().is_err(), "{raw}");
        }
    }

    #[test]
    fn validate_blank_artist_name() {
        let mut config = SiteConfig::default();
        config.site.artist_name = "   ".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn validate_zero_count_up_duration() {
        let mut config = SiteConfig::default();
        config.motion.count_up_duration_ms = 0;
        assert!(config.validate().is_err());
    }

    // =========================================================================
    // merge_toml
    // =========================================================================

    #[test]
    fn merge_toml_deep_nested() {
        let base: toml::Value = toml::from_str(
            r##"
[colors.light]
background = "#fff"
text = "#000"
"##,
        )
        .unwrap();
        let overlay: toml::Value = toml::from_str(
            r##"
[colors.light]
background = "#fafafa"
"##,
        )
        .unwrap();
        let merged = merge_toml(base, overlay);
        let light = merged.get("colors").unwrap().get("light").unwrap();
        assert_eq!(light.get("background").unwrap().as_str(), Some("#fafafa"));
        assert_eq!(light.get("text").unwrap().as_str(), Some("#000"));
    }

    #[test]
    fn merge_toml_scalar_replaces_table() {
        let base: toml::Value = toml::from_str("[a]\nb = 1\n").unwrap();
        let overlay: toml::Value = toml::from_str("a = 3\n").unwrap();
        let merged = merge_toml(base, overlay);
        assert_eq!(merged.get("a").unwrap().as_integer(), Some(3));
    }

    #[test]
    fn resolve_config_without_overlay_is_default() {
        let config = resolve_config(stock_defaults_value().unwrap(), None).unwrap();
        assert_eq!(config.motion.parallax_speed, 0.5);
    }

    // =========================================================================
    // Processing
    // =========================================================================

    #[test]
    fn effective_threads_user_constrains_down() {
        let config = ProcessingConfig {
            max_processes: Some(1),
        };
        assert_eq!(effective_threads(&config), 1);
    }

    #[test]
    fn effective_threads_never_zero() {
        let config = ProcessingConfig {
            max_processes: Some(0),
        };
        assert_eq!(effective_threads(&config), 1);
    }

    // =========================================================================
    // stock_config_toml
    // =========================================================================

    #[test]
    fn stock_config_toml_roundtrips_to_defaults() {
        let config: SiteConfig = toml::from_str(stock_config_toml()).unwrap();
        assert_eq!(config.site.artist_name, "Artist Name");
        assert_eq!(config.motion.reveal_root_margin, "0px 0px -50px 0px");
        assert_eq!(config.contact.display_delay_ms, 3000);
        assert_eq!(config.colors.dark.background_alt, "#151515");
        assert_eq!(config.processing.max_processes, None);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn stock_config_toml_contains_all_sections() {
        let content = stock_config_toml();
        for section in ["[site]", "[motion]", "[contact]", "[colors.light]", "[colors.dark]", "[processing]"] {
            assert!(content.contains(section), "missing {section}");
        }
    }

    #[test]
    fn stock_defaults_value_has_all_sections() {
        let val = stock_defaults_value().unwrap();
        for key in ["site", "motion", "contact", "colors", "processing"] {
            assert!(val.get(key).is_some(), "missing {key}");
        }
    }
}
