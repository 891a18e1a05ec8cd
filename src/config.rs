// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Wellpick-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Wellpick and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Editor tolerances and layout proportions.
//!
//! Defaults reproduce the classic plate dialog. Overrides come from TOML or from
//! `WELLPICK_*` environment variables.

use std::env;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

pub const CLICK_THRESHOLD_ENV: &str = "WELLPICK_CLICK_THRESHOLD";
pub const BOX_INSET_SLACK_ENV: &str = "WELLPICK_BOX_INSET_SLACK";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("invalid env {name}={value}")]
    InvalidEnv { name: String, value: String },
    #[error("invalid value for {field}: {value}")]
    InvalidValue { field: &'static str, value: String },
    #[error("invalid config toml: {0}")]
    Toml(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EditorConfig {
    /// A release closer than this to the press (on both axes) is a click.
    pub click_threshold: f64,
    /// Subtracted from the half-well inset applied to box gestures.
    pub box_inset_slack: f64,
    /// Plate padding is `min(w, h) / padding_divisor`.
    pub padding_divisor: f64,
    /// Outer margin is `min(w, h) / margin_divisor`.
    pub margin_divisor: f64,
    /// Minimum surface extent per well, used for the minimum surface size.
    pub min_well_extent: f64,
    /// Drawn circles are shrunk by `well_size / well_inset_divisor`.
    pub well_inset_divisor: f64,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            click_threshold: 3.0,
            box_inset_slack: 1.0,
            padding_divisor: 36.0,
            margin_divisor: 8.0,
            min_well_extent: 24.0,
            well_inset_divisor: 12.0,
        }
    }
}

impl EditorConfig {
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        let config: Self =
            toml::from_str(source).map_err(|err| ConfigError::Toml(err.message().to_owned()))?;
        config.validate()?;
        Ok(config)
    }

    /// Defaults with `WELLPICK_CLICK_THRESHOLD` / `WELLPICK_BOX_INSET_SLACK` applied.
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut config = Self::default();
        if let Some(value) = env_f64(CLICK_THRESHOLD_ENV)? {
            debug!(value, "click threshold override");
            config.click_threshold = value;
        }
        if let Some(value) = env_f64(BOX_INSET_SLACK_ENV)? {
            debug!(value, "box inset slack override");
            config.box_inset_slack = value;
        }
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        non_negative("click_threshold", self.click_threshold)?;
        non_negative("box_inset_slack", self.box_inset_slack)?;
        non_negative("min_well_extent", self.min_well_extent)?;
        positive("padding_divisor", self.padding_divisor)?;
        positive("margin_divisor", self.margin_divisor)?;
        positive("well_inset_divisor", self.well_inset_divisor)?;
        Ok(())
    }
}

fn non_negative(field: &'static str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() && value >= 0.0 {
        return Ok(());
    }
    Err(ConfigError::InvalidValue {
        field,
        value: value.to_string(),
    })
}

fn positive(field: &'static str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 {
        return Ok(());
    }
    Err(ConfigError::InvalidValue {
        field,
        value: value.to_string(),
    })
}

fn env_f64(name: &str) -> Result<Option<f64>, ConfigError> {
    let raw = match env::var(name) {
        Ok(raw) => raw,
        Err(env::VarError::NotPresent) => return Ok(None),
        Err(env::VarError::NotUnicode(_)) => {
            return Err(ConfigError::InvalidEnv {
                name: name.to_owned(),
                value: "<non-unicode>".to_owned(),
            });
        }
    };

    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }

    trimmed
        .parse::<f64>()
        .map(Some)
        .map_err(|err| ConfigError::InvalidEnv {
            name: name.to_owned(),
            value: format!("{trimmed} ({err})"),
        })
}
