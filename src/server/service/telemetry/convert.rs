//! Reservoir measurement conversion.
//!
//! Maps raw electrical sensor readings (loop current, RTD resistance) onto
//! physical quantities (water level, temperature) using a per-reservoir
//! formula. Conversion is pure: no I/O, no shared state. Reservoirs without
//! a configured formula are rejected; the converter never substitutes a
//! default.

use thiserror::Error;

/// Reservoir id of the Andijan site, the only formula currently configured.
pub const ANDIJAN_RES_ID: i64 = 1;

/// Site-specific calibration offset for Andijan, in level units.
const ANDIJAN_LEVEL_OFFSET: f64 = 9.3855;

/// Physical quantities derived from one raw reading.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct DerivedMeasurement {
    pub res_id: i64,
    pub level: f64,
    pub temperature: f64,
}

#[derive(Error, Debug)]
pub enum ConvertError {
    /// No conversion formula is configured for this reservoir. A coverage
    /// gap, not a runtime fault; the offending id is named so it can be
    /// traced back to the device fleet.
    #[error("unsupported reservoir id {0}")]
    UnsupportedReservoir(i64),
}

/// Converts a raw reading using the formula of the given reservoir.
///
/// `indicator_level` is the externally supplied reference water level
/// baseline, `current` the 4-20 mA loop reading, `resistance` the RTD
/// element resistance in ohms.
pub fn convert(
    res_id: i64,
    indicator_level: f64,
    current: f64,
    resistance: f64,
) -> Result<DerivedMeasurement, ConvertError> {
    match res_id {
        ANDIJAN_RES_ID => Ok(convert_andijan(indicator_level, current, resistance)),
        other => Err(ConvertError::UnsupportedReservoir(other)),
    }
}

/// Andijan formula: the 4-20 mA loop span maps onto a 0-60 unit virtual
/// height contribution, the calibration offset is folded in, and the level
/// is rounded UP to two decimals. Rounding direction is part of the site's
/// numeric contract and must not change. Temperature is the PT100 linear
/// approximation (100 Ω base, 0.385 Ω/°C).
fn convert_andijan(indicator_level: f64, current: f64, resistance: f64) -> DerivedMeasurement {
    let virtual_height = ((current - 4.0) / 16.0) * 60.0;
    let raw_height = indicator_level - ANDIJAN_LEVEL_OFFSET + virtual_height;

    let level = (raw_height * 100.0).ceil() / 100.0;
    let temperature = (resistance - 100.0) / 0.385;

    DerivedMeasurement {
        res_id: ANDIJAN_RES_ID,
        level,
        temperature,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn supported_reservoir_echoes_res_id() {
        let measurement = convert(ANDIJAN_RES_ID, 10.0, 12.0, 120.0).unwrap();
        assert_eq!(measurement.res_id, ANDIJAN_RES_ID);
    }

    #[test]
    fn unsupported_reservoir_names_the_id() {
        let err = convert(42, 10.0, 12.0, 120.0).unwrap_err();
        assert!(err.to_string().contains("42"));
        assert!(matches!(err, ConvertError::UnsupportedReservoir(42)));
    }

    #[test]
    fn reference_reading_rounds_level_up() {
        // virtual_height = ((12-4)/16)*60 = 30.0
        // raw_height = 10.0 - 9.3855 + 30.0 = 30.6145
        // nearest-rounding would give 30.61; the contract is ceiling.
        let measurement = convert(ANDIJAN_RES_ID, 10.0, 12.0, 120.0).unwrap();

        assert_eq!(measurement.level, 30.62);
        assert!((measurement.temperature - 51.948051948051948).abs() < 1e-9);
    }

    #[test]
    fn loop_current_boundaries_span_the_full_height() {
        // With the indicator pinned at the calibration offset the level is
        // exactly the virtual height: 0 at 4 mA, 60 at 20 mA.
        let low = convert(ANDIJAN_RES_ID, ANDIJAN_LEVEL_OFFSET, 4.0, 120.0).unwrap();
        let high = convert(ANDIJAN_RES_ID, ANDIJAN_LEVEL_OFFSET, 20.0, 120.0).unwrap();

        assert_eq!(low.level, 0.0);
        assert_eq!(high.level, 60.0);
    }

    #[test]
    fn pt100_base_resistance_is_zero_celsius() {
        let measurement = convert(ANDIJAN_RES_ID, 10.0, 12.0, 100.0).unwrap();
        assert_eq!(measurement.temperature, 0.0);
    }
}
