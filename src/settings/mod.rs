// SPDX-License-Identifier: GPL-3.0-or-later
use anyhow::Context as _;
use serde::Deserialize;
use tracing::debug;

use std::fs;
use std::path::PathBuf;

mod cli;

use crate::grid::{Orientation, RangePolicy};
use crate::render::ViewerSettings;
pub(crate) use cli::Args;

fn default_input() -> PathBuf {
    PathBuf::from("./depthmap_data/data1_scene.txt")
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub(crate) struct Settings {
    /// The depth grid file to display.
    #[serde(default = "default_input")]
    pub(crate) input: PathBuf,

    /// How values outside of [0, 1] are handled.
    #[serde(default)]
    pub(crate) range_policy: RangePolicy,

    /// How the grid is laid out in the final image.
    #[serde(default)]
    pub(crate) orientation: Orientation,

    /// The program used to show the image.
    #[serde(default)]
    pub(crate) viewer: ViewerSettings,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            input: default_input(),
            range_policy: RangePolicy::default(),
            orientation: Orientation::default(),
            viewer: ViewerSettings::default(),
        }
    }
}

impl Settings {
    /// Combine the configuration file (if any) with the command line arguments.
    ///
    /// Command line arguments take precedence over the configuration file.
    pub(crate) fn from_args(args: Args) -> anyhow::Result<Self> {
        let mut settings = match &args.config_path {
            Some(config_path) => {
                debug!(path = ?config_path, "Loading configuration");
                let config_data = fs::read_to_string(config_path).with_context(|| {
                    format!("Unable to read configuration from {}", config_path.display())
                })?;
                toml::from_str(&config_data).with_context(|| {
                    format!("Unable to parse configuration in {}", config_path.display())
                })?
            }
            None => Self::default(),
        };
        if let Some(input) = args.input {
            settings.input = input;
        }
        if let Some(range_policy) = args.range_policy {
            settings.range_policy = range_policy;
        }
        Ok(settings)
    }
}

#[cfg(test)]
mod de_tests {
    use super::{Args, Settings};
    use crate::grid::orient::Rotation;
    use crate::grid::{Orientation, RangePolicy};
    use crate::render::ViewerSettings;
    use std::io::Write;
    use std::path::PathBuf;
    use tempfile::NamedTempFile;

    #[test]
    fn minimal_toml() {
        let parsed: Result<Settings, _> = toml::from_str("");
        assert!(parsed.is_ok(), "Unable to parse TOML: {:?}", parsed);
        assert_eq!(parsed.unwrap(), Settings::default());
    }

    #[test]
    fn full_toml() {
        let source = r#"
        input = "scene.txt"
        range_policy = "clamp"

        [orientation]
        rotation = 180
        flip_horizontal = true

        [viewer]
        command = "feh"
        "#;
        let parsed = toml::from_str(source);
        assert!(parsed.is_ok(), "Unable to parse TOML: {:?}", parsed);
        let parsed: Settings = parsed.unwrap();
        let expected = Settings {
            input: PathBuf::from("scene.txt"),
            range_policy: RangePolicy::Clamp,
            orientation: Orientation {
                rotation: Rotation::OneEighty,
                flip_horizontal: true,
                flip_vertical: false,
            },
            viewer: ViewerSettings {
                command: Some("feh".to_string()),
                wait: false,
            },
        };
        assert_eq!(parsed, expected);
    }

    #[test]
    fn full_json() {
        let source = r#"
        {
            "input": "scene.txt",
            "range_policy": "reject",
            "orientation": {"rotation": 0}
        }"#;
        let parsed = serde_json::from_str(source);
        assert!(parsed.is_ok(), "Unable to parse JSON: {:?}", parsed);
        let parsed: Settings = parsed.unwrap();
        assert_eq!(parsed.input, PathBuf::from("scene.txt"));
        assert_eq!(parsed.range_policy, RangePolicy::Reject);
        assert_eq!(parsed.orientation.rotation, Rotation::Zero);
    }

    #[test]
    fn example_config() {
        let parsed: Result<Settings, _> = toml::from_str(include_str!("../../config_example.toml"));
        assert!(parsed.is_ok(), "Unable to parse example config: {:?}", parsed);
        assert_eq!(parsed.unwrap(), Settings::default());
    }

    #[test]
    fn error_bad_policy() {
        let source = r#"range_policy = "wrap""#;
        let parsed: Result<Settings, _> = toml::from_str(source);
        assert!(
            parsed.is_err(),
            "Did not detect invalid range policy in:\n{}",
            source
        );
    }

    #[test]
    fn args_without_config() {
        let args = Args {
            config_path: None,
            range_policy: None,
            input: None,
        };
        assert_eq!(Settings::from_args(args).unwrap(), Settings::default());
    }

    #[test]
    fn args_override_config() {
        let mut file = NamedTempFile::new().expect("to be able to create a temp file");
        write!(
            file,
            "input = \"from_config.txt\"\nrange_policy = \"reject\"\n[orientation]\nrotation = 270\n"
        )
        .expect("to be able to write to a new temp file");
        let args = Args {
            config_path: Some(file.path().to_path_buf()),
            range_policy: Some(RangePolicy::Clamp),
            input: Some(PathBuf::from("from_args.txt")),
        };
        let settings = Settings::from_args(args).unwrap();
        assert_eq!(settings.input, PathBuf::from("from_args.txt"));
        assert_eq!(settings.range_policy, RangePolicy::Clamp);
        assert_eq!(settings.orientation.rotation, Rotation::TwoSeventy);
    }

    #[test]
    fn missing_config() {
        let args = Args {
            config_path: Some(PathBuf::from("/not/a/real/path/config.toml")),
            range_policy: None,
            input: None,
        };
        assert!(Settings::from_args(args).is_err());
    }
}
