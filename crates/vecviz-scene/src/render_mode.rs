//! Vector render modes

use std::fmt;
use std::str::FromStr;

use crate::error::SceneError;

/// How a vector entity is drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum RenderMode {
    /// Arrow from start to end
    #[default]
    Vector,
    /// Marker placed at the start point
    Waypoint,
    Line,
    DashedLine,
    Man,
    Dog,
    Spaceship,
    Triangle,
    Box,
    Torus,
    Plane,
    /// Arc between two referenced vectors
    Angle,
}

impl RenderMode {
    /// All modes, in menu order
    pub const ALL: [RenderMode; 12] = [
        RenderMode::Vector,
        RenderMode::Waypoint,
        RenderMode::Line,
        RenderMode::DashedLine,
        RenderMode::Man,
        RenderMode::Dog,
        RenderMode::Spaceship,
        RenderMode::Triangle,
        RenderMode::Box,
        RenderMode::Torus,
        RenderMode::Plane,
        RenderMode::Angle,
    ];

    /// Name used in commands and scripts
    pub fn as_str(&self) -> &'static str {
        match self {
            RenderMode::Vector => "vector",
            RenderMode::Waypoint => "waypoint",
            RenderMode::Line => "line",
            RenderMode::DashedLine => "dashedLine",
            RenderMode::Man => "man",
            RenderMode::Dog => "dog",
            RenderMode::Spaceship => "spaceship",
            RenderMode::Triangle => "triangle",
            RenderMode::Box => "box",
            RenderMode::Torus => "torus",
            RenderMode::Plane => "plane",
            RenderMode::Angle => "angle",
        }
    }

    /// Model modes are positioned at the start point rather than spanning
    /// start to end
    pub fn is_model(&self) -> bool {
        matches!(
            self,
            RenderMode::Man
                | RenderMode::Dog
                | RenderMode::Spaceship
                | RenderMode::Triangle
                | RenderMode::Box
                | RenderMode::Torus
                | RenderMode::Plane
                | RenderMode::Waypoint
        )
    }
}

impl fmt::Display for RenderMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RenderMode {
    type Err = SceneError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RenderMode::ALL
            .into_iter()
            .find(|mode| mode.as_str() == s)
            .ok_or_else(|| SceneError::UnknownRenderMode(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_render_mode() {
        assert_eq!("dashedLine".parse::<RenderMode>().unwrap(), RenderMode::DashedLine);
        assert!("DashedLine".parse::<RenderMode>().is_err());
        for mode in RenderMode::ALL {
            assert_eq!(mode.to_string().parse::<RenderMode>().unwrap(), mode);
        }
    }

    #[test]
    fn test_model_modes() {
        assert!(RenderMode::Waypoint.is_model());
        assert!(RenderMode::Dog.is_model());
        assert!(!RenderMode::Vector.is_model());
        assert!(!RenderMode::Angle.is_model());
    }
}
