use serde::{Deserialize, Serialize};

/// Opacity applied when the raw value is not a number.
pub const DEFAULT_OPACITY: f64 = 100.0;

/// Drop shadow drawn behind an element.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Shadow {
    pub offset_x: f64,
    pub offset_y: f64,
    pub blur: f64,
    pub color: String,
}

impl Default for Shadow {
    fn default() -> Self {
        Self {
            offset_x: 2.0,
            offset_y: 2.0,
            blur: 4.0,
            color: "rgba(0,0,0,0.25)".to_string(),
        }
    }
}

/// Style shared by every element type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CommonStyle {
    /// 0 (transparent) to 100 (opaque)
    pub opacity: f64,
    /// Clockwise degrees in `[0, 360)`
    pub rotation: f64,
    pub shadow: Option<Shadow>,
    pub locked: bool,
    pub visible: bool,
}

impl Default for CommonStyle {
    fn default() -> Self {
        Self {
            opacity: DEFAULT_OPACITY,
            rotation: 0.0,
            shadow: None,
            locked: false,
            visible: true,
        }
    }
}

impl CommonStyle {
    /// Brings opacity and rotation back into their valid ranges.
    pub fn normalized(mut self) -> Self {
        self.opacity = normalize_opacity(self.opacity);
        self.rotation = normalize_rotation(self.rotation);
        self
    }
}

/// Clamps an opacity to `[0, 100]`. NaN becomes fully opaque.
pub fn normalize_opacity(raw: f64) -> f64 {
    if raw.is_nan() {
        DEFAULT_OPACITY
    } else {
        raw.clamp(0.0, 100.0)
    }
}

/// Wraps a rotation into `[0, 360)`. Non-finite input becomes 0.
pub fn normalize_rotation(raw: f64) -> f64 {
    if !raw.is_finite() {
        return 0.0;
    }
    let wrapped = raw.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360 for tiny negative inputs
    if wrapped >= 360.0 {
        0.0
    } else {
        wrapped
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opacity_is_clamped() {
        assert_eq!(normalize_opacity(150.0), 100.0);
        assert_eq!(normalize_opacity(-3.0), 0.0);
        assert_eq!(normalize_opacity(42.5), 42.5);
        assert_eq!(normalize_opacity(f64::NAN), 100.0);
    }

    #[test]
    fn test_rotation_wraps() {
        assert_eq!(normalize_rotation(360.0), 0.0);
        assert_eq!(normalize_rotation(-90.0), 270.0);
        assert_eq!(normalize_rotation(725.0), 5.0);
        assert_eq!(normalize_rotation(-1e-14), 0.0);
        assert_eq!(normalize_rotation(f64::INFINITY), 0.0);
    }
}
