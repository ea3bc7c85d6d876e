use std::fmt;

use crate::codec::HEADER_SIZE;

/// One decoded telemetry frame from the meter.
///
/// Fields are listed in wire order. Scaled integer fields carry their scale
/// in the name: `_e6` means the raw value is the physical quantity times
/// 10^6, and so on.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct FlowRecord {
    /// Upstream transit time, scaled by 1e12.
    pub tof_up_e12: u32,
    /// Downstream transit time, scaled by 1e12.
    pub tof_dn_e12: u32,
    /// Upstream receive amplitude.
    pub amp_up: i16,
    /// Downstream receive amplitude.
    pub amp_dn: i16,
    /// Upstream transducer power level.
    pub pwr_up: u8,
    /// Downstream transducer power level.
    pub pwr_dn: u8,
    /// Minimum observed power level.
    pub pwr_min: u8,
    /// Maximum observed power level.
    pub pwr_max: u8,
    /// Kinematic viscosity, scaled by 1e14.
    pub vis_e14: u64,
    /// Reynolds number, scaled by 1e6.
    pub reyn_e6: u64,
    /// Calibration factor, scaled by 1e6.
    pub kf_e6: u32,
    /// Uncompensated velocity, scaled by 1e6.
    pub ucv_e6: i32,
    /// Speed of sound in the medium, scaled by 1e6.
    pub sos_e6: u32,
    /// Flow rate, scaled by 1e6.
    pub flow_e6: i32,
    /// Flow rate as computed by the device firmware.
    pub flow_calculated: f32,
    /// Status word bitmask.
    pub status_wm: u32,
    /// Medium temperature in tenths of a degree Celsius.
    pub temperature_e1: i16,
    /// Firmware health indicator.
    pub fhl: u8,
    /// Accumulated volume.
    pub volume: f64,
    /// Sample count as declared by the device.
    ///
    /// Known to be wrong on affected firmware revisions. Kept as reported
    /// telemetry; the authoritative count is `samples.len()`.
    pub array_length: u16,
    /// Trailing waveform samples. The count is derived from the bytes that
    /// were actually present in the frame, never from `array_length`.
    pub samples: Vec<i16>,
}

impl FlowRecord {
    /// Medium temperature in degrees Celsius.
    pub fn temperature_celsius(&self) -> f32 {
        f32::from(self.temperature_e1) / 10.0
    }

    /// Whether the declared sample count agrees with the samples actually
    /// carried by the frame. A mismatch is the known firmware defect.
    pub fn declared_matches_actual(&self) -> bool {
        usize::from(self.array_length) == self.samples.len()
    }

    /// The total wire size of this record (fixed header + samples).
    pub fn wire_size(&self) -> usize {
        HEADER_SIZE + 2 * self.samples.len()
    }
}

impl fmt::Display for FlowRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "flow={} e-6, status={:#06x}, temp={:.1}°C, samples={} (declared {})",
            self.flow_e6,
            self.status_wm,
            self.temperature_celsius(),
            self.samples.len(),
            self.array_length
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn temperature_is_tenths_of_a_degree() {
        let record = FlowRecord {
            temperature_e1: 215,
            ..FlowRecord::default()
        };
        assert!((record.temperature_celsius() - 21.5).abs() < f32::EPSILON);

        let below_zero = FlowRecord {
            temperature_e1: -40,
            ..FlowRecord::default()
        };
        assert!((below_zero.temperature_celsius() + 4.0).abs() < f32::EPSILON);
    }

    #[test]
    fn declared_mismatch_is_detectable() {
        let honest = FlowRecord {
            array_length: 3,
            samples: vec![1, 2, 3],
            ..FlowRecord::default()
        };
        assert!(honest.declared_matches_actual());

        let lying = FlowRecord {
            array_length: 100,
            samples: vec![1, 2, 3],
            ..FlowRecord::default()
        };
        assert!(!lying.declared_matches_actual());
    }

    #[test]
    fn wire_size_counts_header_and_samples() {
        let record = FlowRecord {
            samples: vec![0; 5],
            ..FlowRecord::default()
        };
        assert_eq!(record.wire_size(), HEADER_SIZE + 10);
    }
}
