use chrono::{DateTime, Utc};
use clap::Parser;
use std::path::{Path, PathBuf};
use tour_package_lib::{Config, ErrorPolicy};

#[derive(Parser, Debug, Clone)]
#[clap(author, version, about, long_about = None)]
/// Tour Packager - Converts KML/GPX tracks into guided tours for in-car navigation units
pub struct Settings {
    /// KML or GPX file to convert (format chosen by extension, KML otherwise)
    #[clap(short, long, value_name = "FILE", default_value = "in.kml")]
    pub input: PathBuf,

    /// Zip file to write, or the drive root when --directory is set
    #[clap(short, long, value_name = "PATH", default_value = "out.zip")]
    pub output: PathBuf,

    /// Maximum sampled waypoints between two consecutive places
    #[clap(long = "max-wp", default_value = "10")]
    pub max_waypoints: usize,

    /// Display name written into every tour instead of the track's own name
    #[clap(short, long)]
    pub name: Option<String>,

    /// Fixed creation time (RFC 3339) for reproducible output
    #[clap(long, value_name = "TIME")]
    pub creation_time: Option<DateTime<Utc>>,

    /// Write BMWData/Navigation/Routes below the output directory instead of a zip
    #[clap(short, long, default_value = "false")]
    pub directory: bool,

    /// Skip routes that fail validation instead of aborting
    #[clap(long, default_value = "false")]
    pub skip_invalid: bool,

    /// Log debug output (RUST_LOG takes precedence)
    #[clap(short, long, default_value = "false")]
    pub verbose: bool,
}

/// Source track format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputFormat {
    Kml,
    Gpx,
}

impl InputFormat {
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("gpx") => InputFormat::Gpx,
            _ => InputFormat::Kml,
        }
    }
}

impl Settings {
    pub fn config(&self) -> Config {
        Config {
            max_waypoints_per_segment: self.max_waypoints,
            name_override: self.name.clone(),
            creation_time: self.creation_time,
            error_policy: if self.skip_invalid {
                ErrorPolicy::SkipInvalid
            } else {
                ErrorPolicy::Strict
            },
        }
    }

    pub fn input_format(&self) -> InputFormat {
        InputFormat::from_path(&self.input)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = Settings::parse_from(["tour-packager"]);
        assert_eq!(settings.input, PathBuf::from("in.kml"));
        assert_eq!(settings.output, PathBuf::from("out.zip"));
        assert_eq!(settings.max_waypoints, 10);
        assert!(!settings.directory);

        let config = settings.config();
        assert_eq!(config.max_waypoints_per_segment, 10);
        assert_eq!(config.error_policy, ErrorPolicy::Strict);
        assert!(config.creation_time.is_none());
    }

    #[test]
    fn test_flags_map_to_config() {
        let settings = Settings::parse_from([
            "tour-packager",
            "--input",
            "trip.GPX",
            "--max-wp",
            "25",
            "--name",
            "Weekend",
            "--creation-time",
            "2024-05-01T12:30:00Z",
            "--skip-invalid",
        ]);
        assert_eq!(settings.input_format(), InputFormat::Gpx);

        let config = settings.config();
        assert_eq!(config.max_waypoints_per_segment, 25);
        assert_eq!(config.name_override.as_deref(), Some("Weekend"));
        assert_eq!(config.error_policy, ErrorPolicy::SkipInvalid);
        assert_eq!(
            config.creation_time.map(|time| time.timestamp()),
            Some(1_714_566_600)
        );
    }

    #[test]
    fn test_unknown_extension_is_kml() {
        assert_eq!(InputFormat::from_path(Path::new("export")), InputFormat::Kml);
        assert_eq!(InputFormat::from_path(Path::new("a.kml")), InputFormat::Kml);
    }
}
