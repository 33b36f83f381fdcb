//! Conversion pipeline: parameters → boundary → per-LED mappings.
//!
//! All fatal conditions surface before the first LED is mapped, so a
//! successful [`Conversion`] always covers every LED in the grid.

use crate::error::{MappingError, MappingWarning, MappingWarningKind};
use crate::models::{BoundaryRectangle, GridModel, LedMapping, MappingMode, MappingParams};
use crate::services::{boundary, mapper};
use tracing::{debug, info, warn};

/// Result of mapping a grid.
#[derive(Debug, Clone)]
pub struct Conversion {
    /// Rectangle the LEDs were normalized against
    pub boundary: BoundaryRectangle,
    /// Parameters actually used (after clamping)
    pub params: MappingParams,
    /// One mapping per LED, ascending by index
    pub mappings: Vec<LedMapping>,
    /// Non-fatal issues found along the way
    pub warnings: Vec<MappingWarning>,
}

impl Conversion {
    /// Whether the normalized coordinates are meant to stay within [0, 1].
    #[must_use]
    pub const fn is_boundary_aware(&self) -> bool {
        self.params.boundary_aware
    }
}

/// Maps every LED of a grid.
///
/// # Errors
///
/// Returns `NoBoundaryMarkers` when boundary-aware mode is requested on a
/// grid without markers.
pub fn convert(grid: &GridModel, params: &MappingParams) -> Result<Conversion, MappingError> {
    let (params, mut warnings) = normalize_params(params);

    info!(
        leds = grid.led_count(),
        markers = grid.boundary_count(),
        mode = %params.mode,
        "Converting LED layout"
    );

    let boundary = boundary::analyze(grid, params.boundary_aware)?;

    if params.boundary_aware {
        info!("Using boundary markers to define screen area: {}", boundary);
    } else {
        debug!("Using LED bounds as screen area: {}", boundary);
        if params.mode != MappingMode::Wall {
            warnings.push(MappingWarning::new(
                MappingWarningKind::InferredBoundary,
                format!(
                    "{} mode without boundary markers uses the LED bounding box ({}) as the screen; results are best-effort",
                    params.mode, boundary
                ),
            ));
        }
    }

    if params.mode == MappingMode::Perimeter && params.boundary_aware {
        let interior = grid
            .leds()
            .filter(|(_, cell)| boundary.contains(*cell))
            .count();
        if interior > 0 {
            warnings.push(MappingWarning::new(
                MappingWarningKind::InteriorLeds,
                format!(
                    "{interior} LEDs lie inside the monitor area - these may not work well in perimeter mode"
                ),
            ));
        }
    }

    let mappings = mapper::map(grid, &boundary, &params);

    for warning in &warnings {
        warn!("{}", warning);
    }

    Ok(Conversion {
        boundary,
        params,
        mappings,
        warnings,
    })
}

/// Clamps `edge_bias` and `depth` into [0, 1], reporting each adjustment.
///
/// A NaN falls back to the default value.
pub fn normalize_params(params: &MappingParams) -> (MappingParams, Vec<MappingWarning>) {
    let mut normalized = *params;
    let mut warnings = Vec::new();

    if let Some((value, warning)) = clamp_unit("edge_bias", params.edge_bias, MappingParams::default().edge_bias) {
        normalized.edge_bias = value;
        warnings.push(warning);
    }

    if let Some((value, warning)) = clamp_unit("depth", params.depth, MappingParams::default().depth) {
        normalized.depth = value;
        warnings.push(warning);
    }

    (normalized, warnings)
}

fn clamp_unit(name: &str, value: f64, fallback: f64) -> Option<(f64, MappingWarning)> {
    if (0.0..=1.0).contains(&value) {
        return None;
    }

    let clamped = if value.is_nan() {
        fallback
    } else {
        value.clamp(0.0, 1.0)
    };

    Some((
        clamped,
        MappingWarning::new(
            MappingWarningKind::ParameterRange,
            format!("{name} {value} is outside 0.0-1.0, using {clamped}"),
        ),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::MappingErrorKind;
    use crate::parser::{parse_grid, GridFormat};

    const FRAMED: &str = "\
0,1,2,3,4
13,x,x,x,5
12,x,x,x,6
11,x,x,x,7
10,9,,8,
";

    fn framed() -> GridModel {
        parse_grid(FRAMED, &GridFormat::default()).unwrap()
    }

    #[test]
    fn test_convert_covers_every_led() {
        let conversion = convert(
            &framed(),
            &MappingParams::for_mode(MappingMode::Perimeter).with_boundary_aware(true),
        )
        .unwrap();

        let indices: Vec<u32> = conversion.mappings.iter().map(|m| m.led_index).collect();
        assert_eq!(indices, (0..=13).collect::<Vec<u32>>());
        assert_eq!(conversion.boundary, BoundaryRectangle::new(1, 3, 1, 3).unwrap());
        assert!(conversion.warnings.is_empty());
        assert!(conversion.is_boundary_aware());
    }

    #[test]
    fn test_convert_without_markers_fails_before_mapping() {
        let grid = parse_grid("0,1\n2,3", &GridFormat::default()).unwrap();
        let err = convert(&grid, &MappingParams::default().with_boundary_aware(true)).unwrap_err();
        assert_eq!(err.kind, MappingErrorKind::NoBoundaryMarkers);
    }

    #[test]
    fn test_out_of_range_params_are_clamped_with_warning() {
        let params = MappingParams::for_mode(MappingMode::Perimeter)
            .with_boundary_aware(true)
            .with_depth(1.5)
            .with_edge_bias(-0.2);

        let conversion = convert(&framed(), &params).unwrap();

        assert_eq!(conversion.params.depth, 1.0);
        assert_eq!(conversion.params.edge_bias, 0.0);
        let kinds: Vec<MappingWarningKind> = conversion.warnings.iter().map(|w| w.kind).collect();
        assert_eq!(
            kinds,
            vec![MappingWarningKind::ParameterRange, MappingWarningKind::ParameterRange]
        );
        assert!(conversion.warnings[0].message.contains("edge_bias"));
        assert!(conversion.warnings[1].message.contains("depth"));
    }

    #[test]
    fn test_nan_param_falls_back_to_default() {
        let (params, warnings) = normalize_params(&MappingParams::default().with_depth(f64::NAN));
        assert_eq!(params.depth, 0.05);
        assert_eq!(warnings.len(), 1);
    }

    #[test]
    fn test_in_range_params_untouched() {
        let input = MappingParams::default().with_depth(0.0).with_edge_bias(1.0);
        let (params, warnings) = normalize_params(&input);
        assert_eq!(params, input);
        assert!(warnings.is_empty());
    }

    #[test]
    fn test_inferred_boundary_warning() {
        let conversion = convert(&framed(), &MappingParams::for_mode(MappingMode::Ambient)).unwrap();
        assert_eq!(conversion.warnings.len(), 1);
        assert_eq!(conversion.warnings[0].kind, MappingWarningKind::InferredBoundary);

        let conversion = convert(&framed(), &MappingParams::for_mode(MappingMode::Wall)).unwrap();
        assert!(conversion.warnings.is_empty());
    }

    #[test]
    fn test_interior_leds_warning() {
        let grid = parse_grid("0,1,2\nx,3,x\nx,x,x", &GridFormat::default()).unwrap();
        let conversion = convert(
            &grid,
            &MappingParams::for_mode(MappingMode::Perimeter).with_boundary_aware(true),
        )
        .unwrap();

        assert_eq!(conversion.warnings.len(), 1);
        assert_eq!(conversion.warnings[0].kind, MappingWarningKind::InteriorLeds);
        assert!(conversion.warnings[0].message.starts_with("1 LEDs"));
    }

    #[test]
    fn test_convert_is_deterministic() {
        let grid = framed();
        let params = MappingParams::for_mode(MappingMode::Ambient)
            .with_boundary_aware(true)
            .with_edge_bias(0.7);

        let first = convert(&grid, &params).unwrap().mappings;
        for _ in 0..5 {
            let again = convert(&grid, &params).unwrap().mappings;
            assert_eq!(first.len(), again.len());
            for (a, b) in first.iter().zip(&again) {
                assert_eq!(a.hscan.minimum.to_bits(), b.hscan.minimum.to_bits());
                assert_eq!(a.vscan.minimum.to_bits(), b.vscan.minimum.to_bits());
            }
        }
    }
}
