//! Data-driven game balance
//!
//! Every physics and layout constant in one serde struct. Defaults match
//! `crate::consts`; a JSON override can replace any subset of fields.
//! Tunings are validated before a game is built from them, so authoring
//! mistakes fail fast instead of producing impossible obstacles.

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::difficulty::DifficultyTier;

/// Invalid tuning
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigurationError {
    #[error("{field} must be a finite number (got {value})")]
    NotFinite { field: &'static str, value: f32 },

    #[error("{field} must be greater than zero (got {value})")]
    NotPositive { field: &'static str, value: f32 },

    #[error(
        "gap of {gap} for {tier} does not fit a playfield of height {height} \
         with margins {top_margin}/{bottom_margin}"
    )]
    GapTooLarge {
        tier: &'static str,
        gap: f32,
        height: f32,
        top_margin: f32,
        bottom_margin: f32,
    },

    #[error("avatar column {avatar_x} lies outside the playfield width {width}")]
    AvatarOffscreen { avatar_x: f32, width: f32 },

    #[error("invalid tuning JSON: {0}")]
    Parse(String),
}

/// Game balance parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    pub width: f32,
    pub height: f32,
    pub gravity: f32,
    pub jump_impulse: f32,
    pub avatar_x: f32,
    pub visual_radius: f32,
    /// Hit radius used when `forgiving_hitbox` is on
    pub forgiving_radius: f32,
    /// Collide with the smaller `forgiving_radius` instead of the visual radius
    pub forgiving_hitbox: bool,
    pub obstacle_width: f32,
    pub obstacle_spacing: f32,
    pub obstacle_speed: f32,
    pub first_obstacle_offset: f32,
    pub gap_top_margin: f32,
    pub gap_bottom_margin: f32,
    /// Enable difficulty/cosmetic unlock gates
    pub progression: bool,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            width: PLAYFIELD_WIDTH,
            height: PLAYFIELD_HEIGHT,
            gravity: GRAVITY,
            jump_impulse: JUMP_IMPULSE,
            avatar_x: AVATAR_X,
            visual_radius: AVATAR_RADIUS,
            forgiving_radius: AVATAR_FORGIVING_RADIUS,
            forgiving_hitbox: true,
            obstacle_width: OBSTACLE_WIDTH,
            obstacle_spacing: OBSTACLE_SPACING,
            obstacle_speed: OBSTACLE_SPEED,
            first_obstacle_offset: FIRST_OBSTACLE_OFFSET,
            gap_top_margin: GAP_TOP_MARGIN,
            gap_bottom_margin: GAP_BOTTOM_MARGIN,
            progression: true,
        }
    }
}

impl Tuning {
    /// Single-mode variant: visual-radius hitbox, no unlock gates
    pub fn classic() -> Self {
        Self {
            forgiving_hitbox: false,
            progression: false,
            ..Self::default()
        }
    }

    /// Parse and validate a JSON tuning. Missing fields take defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigurationError> {
        let tuning: Tuning =
            serde_json::from_str(json).map_err(|e| ConfigurationError::Parse(e.to_string()))?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Radius used for collision tests
    pub fn hit_radius(&self) -> f32 {
        if self.forgiving_hitbox {
            self.forgiving_radius
        } else {
            self.visual_radius
        }
    }

    /// Check every field, and every tier's gap against the playfield
    pub fn validate(&self) -> Result<(), ConfigurationError> {
        let finite = [
            ("width", self.width),
            ("height", self.height),
            ("gravity", self.gravity),
            ("jump_impulse", self.jump_impulse),
            ("avatar_x", self.avatar_x),
            ("visual_radius", self.visual_radius),
            ("forgiving_radius", self.forgiving_radius),
            ("obstacle_width", self.obstacle_width),
            ("obstacle_spacing", self.obstacle_spacing),
            ("obstacle_speed", self.obstacle_speed),
            ("first_obstacle_offset", self.first_obstacle_offset),
            ("gap_top_margin", self.gap_top_margin),
            ("gap_bottom_margin", self.gap_bottom_margin),
        ];
        for (field, value) in finite {
            if !value.is_finite() {
                return Err(ConfigurationError::NotFinite { field, value });
            }
        }

        let positive = [
            ("width", self.width),
            ("height", self.height),
            ("visual_radius", self.visual_radius),
            ("forgiving_radius", self.forgiving_radius),
            ("obstacle_width", self.obstacle_width),
            ("obstacle_spacing", self.obstacle_spacing),
            ("obstacle_speed", self.obstacle_speed),
        ];
        for (field, value) in positive {
            if value <= 0.0 {
                return Err(ConfigurationError::NotPositive { field, value });
            }
        }

        if self.avatar_x < 0.0 || self.avatar_x > self.width {
            return Err(ConfigurationError::AvatarOffscreen {
                avatar_x: self.avatar_x,
                width: self.width,
            });
        }

        for tier in DifficultyTier::ALL {
            let gap = tier.gap();
            if gap + self.gap_top_margin + self.gap_bottom_margin > self.height {
                return Err(ConfigurationError::GapTooLarge {
                    tier: tier.name(),
                    gap,
                    height: self.height,
                    top_margin: self.gap_top_margin,
                    bottom_margin: self.gap_bottom_margin,
                });
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        assert_eq!(Tuning::default().validate(), Ok(()));
        assert_eq!(Tuning::classic().validate(), Ok(()));
    }

    #[test]
    fn test_hit_radius_follows_forgiveness() {
        let tuning = Tuning::default();
        assert_eq!(tuning.hit_radius(), AVATAR_FORGIVING_RADIUS);
        let tuning = Tuning::classic();
        assert_eq!(tuning.hit_radius(), AVATAR_RADIUS);
    }

    #[test]
    fn test_short_playfield_rejected() {
        let tuning = Tuning {
            height: 300.0,
            ..Tuning::default()
        };
        match tuning.validate() {
            Err(ConfigurationError::GapTooLarge { tier, .. }) => assert_eq!(tier, "Easy"),
            other => panic!("expected GapTooLarge, got {other:?}"),
        }
    }

    #[test]
    fn test_gap_exactly_filling_playfield_allowed() {
        let tuning = Tuning {
            height: 155.0 + GAP_TOP_MARGIN + GAP_BOTTOM_MARGIN,
            ..Tuning::default()
        };
        assert_eq!(tuning.validate(), Ok(()));
    }

    #[test]
    fn test_non_positive_speed_rejected() {
        let tuning = Tuning {
            obstacle_speed: 0.0,
            ..Tuning::default()
        };
        assert!(matches!(
            tuning.validate(),
            Err(ConfigurationError::NotPositive {
                field: "obstacle_speed",
                ..
            })
        ));
    }

    #[test]
    fn test_nan_rejected() {
        let tuning = Tuning {
            gravity: f32::NAN,
            ..Tuning::default()
        };
        assert!(matches!(
            tuning.validate(),
            Err(ConfigurationError::NotFinite { field: "gravity", .. })
        ));
    }

    #[test]
    fn test_avatar_outside_playfield_rejected() {
        let tuning = Tuning {
            avatar_x: 900.0,
            ..Tuning::default()
        };
        assert!(matches!(
            tuning.validate(),
            Err(ConfigurationError::AvatarOffscreen { .. })
        ));
    }

    #[test]
    fn test_from_json_partial_override() {
        let tuning = Tuning::from_json(r#"{ "gravity": 0.5, "progression": false }"#).unwrap();
        assert_eq!(tuning.gravity, 0.5);
        assert!(!tuning.progression);
        assert_eq!(tuning.height, PLAYFIELD_HEIGHT);
    }

    #[test]
    fn test_from_json_validates() {
        let err = Tuning::from_json(r#"{ "height": 200 }"#).unwrap_err();
        assert!(matches!(err, ConfigurationError::GapTooLarge { .. }));
        assert!(err.to_string().contains("does not fit"));
    }

    #[test]
    fn test_from_json_bad_syntax() {
        let err = Tuning::from_json("{ nope").unwrap_err();
        assert!(matches!(err, ConfigurationError::Parse(_)));
    }
}
