//! Mapping strategy selection and its parameters.

use serde::{Deserialize, Serialize};

/// Default perimeter band depth.
pub const DEFAULT_DEPTH: f64 = 0.05;

/// Default ambient edge bias.
pub const DEFAULT_EDGE_BIAS: f64 = 0.5;

/// Strategy used to turn an LED position into a sampling region.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum MappingMode {
    /// Each LED samples its own grid position
    Wall,
    /// Each LED samples a band along its nearest screen edge
    Perimeter,
    /// Blend of wall and edge sampling weighted by edge proximity
    #[default]
    Ambient,
}

impl MappingMode {
    /// All modes, in CLI listing order.
    pub const ALL: [Self; 3] = [Self::Perimeter, Self::Wall, Self::Ambient];

    /// Lowercase name used on the command line and in config files.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Wall => "wall",
            Self::Perimeter => "perimeter",
            Self::Ambient => "ambient",
        }
    }
}

impl std::fmt::Display for MappingMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for MappingMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "wall" => Ok(Self::Wall),
            "perimeter" => Ok(Self::Perimeter),
            "ambient" => Ok(Self::Ambient),
            other => Err(format!(
                "invalid mapping mode '{other}'. Must be 'perimeter', 'wall', or 'ambient'"
            )),
        }
    }
}

/// Parameters consumed by the mapping engine.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MappingParams {
    /// Mapping strategy
    pub mode: MappingMode,
    /// Use boundary markers to define the monitor area
    pub boundary_aware: bool,
    /// Ambient only: how strongly LEDs are pulled toward the nearest edge
    pub edge_bias: f64,
    /// Perimeter only: band thickness inward from the edge
    pub depth: f64,
    /// Output group written on every record
    pub group: i32,
}

impl Default for MappingParams {
    fn default() -> Self {
        Self {
            mode: MappingMode::default(),
            boundary_aware: false,
            edge_bias: DEFAULT_EDGE_BIAS,
            depth: DEFAULT_DEPTH,
            group: 0,
        }
    }
}

impl MappingParams {
    /// Creates parameters for a mode with every other value at its default.
    #[must_use]
    pub fn for_mode(mode: MappingMode) -> Self {
        Self {
            mode,
            ..Self::default()
        }
    }

    /// Sets boundary-aware mode.
    #[must_use]
    pub const fn with_boundary_aware(mut self, boundary_aware: bool) -> Self {
        self.boundary_aware = boundary_aware;
        self
    }

    /// Sets the ambient edge bias.
    #[must_use]
    pub const fn with_edge_bias(mut self, edge_bias: f64) -> Self {
        self.edge_bias = edge_bias;
        self
    }

    /// Sets the perimeter depth.
    #[must_use]
    pub const fn with_depth(mut self, depth: f64) -> Self {
        self.depth = depth;
        self
    }

    /// Sets the output group.
    #[must_use]
    pub const fn with_group(mut self, group: i32) -> Self {
        self.group = group;
        self
    }
}
