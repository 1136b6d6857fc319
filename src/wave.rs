use serde::{
    Deserialize,
    Serialize,
};

/// Carrier shape of a wave packet.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumIter,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum WaveKind {
    #[default]
    Sine,
    Cosine,
    /// Cosine carrier under a Gaussian envelope that travels with the group
    /// velocity.
    Gaussian,
}

impl WaveKind {
    /// Whether the renderer should scale elapsed time by the group velocity
    /// before evaluating.
    ///
    /// The Gaussian form already moves its envelope with the group velocity,
    /// so it gets the raw time.
    pub fn scales_time_by_group_velocity(&self) -> bool {
        match self {
            WaveKind::Sine | WaveKind::Cosine => true,
            WaveKind::Gaussian => false,
        }
    }
}

/// Width factor of the Gaussian envelope: `exp(-ENVELOPE_WIDTH * d^2)`.
pub const ENVELOPE_WIDTH: f64 = 0.1;

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize, derive_more::Display)]
#[display(
    "k={k:.2}, v_g={group_velocity:.2}, A={amplitude:.2}, kind={kind}, v_p={phase_velocity:.2}"
)]
pub struct WavePacket {
    /// Wavenumber
    pub k: f64,
    pub group_velocity: f64,
    pub amplitude: f64,
    pub kind: WaveKind,
    pub phase_velocity: f64,
}

impl WavePacket {
    /// Angular frequency `ω = k * v_p`.
    pub fn angular_frequency(&self) -> f64 {
        self.k * self.phase_velocity
    }

    pub fn evaluate(&self, x: f64, t: f64) -> f64 {
        match self.kind {
            WaveKind::Sine => self.amplitude * (self.k * x - self.angular_frequency() * t).sin(),
            WaveKind::Cosine => self.amplitude * (self.k * x - self.angular_frequency() * t).cos(),
            WaveKind::Gaussian => {
                let d = x - self.group_velocity * t;
                let envelope = (-ENVELOPE_WIDTH * d * d).exp();
                self.amplitude * envelope * (self.k * (x - self.phase_velocity * t)).cos()
            }
        }
    }

    /// Adds this packet's contribution at time `t` onto `out`.
    ///
    /// # Panics
    ///
    /// Panics if `xs` and `out` differ in length.
    pub fn sample_into(&self, xs: &[f64], t: f64, out: &mut [f64]) {
        assert_eq!(xs.len(), out.len(), "sample buffer size mismatch");

        for (y, x) in out.iter_mut().zip(xs) {
            *y += self.evaluate(*x, t);
        }
    }

    pub fn sample(&self, xs: &[f64], t: f64) -> Vec<f64> {
        xs.iter().map(|x| self.evaluate(*x, t)).collect()
    }
}

#[cfg(test)]
mod tests {
    use std::f64::consts::{
        FRAC_PI_2,
        FRAC_PI_4,
    };

    use crate::wave::{
        WaveKind,
        WavePacket,
    };

    fn packet(kind: WaveKind) -> WavePacket {
        WavePacket {
            k: 2.0,
            group_velocity: 1.0,
            amplitude: 5.0,
            kind,
            phase_velocity: 1.0,
        }
    }

    #[test]
    fn sine_is_zero_at_origin() {
        let value = packet(WaveKind::Sine).evaluate(0.0, 0.0);
        assert!(value.abs() < 1e-12, "{value}");
    }

    #[test]
    fn sine_peaks_at_quarter_period() {
        let value = packet(WaveKind::Sine).evaluate(FRAC_PI_4, 0.0);
        assert!((value - 5.0).abs() < 1e-12, "{value}");
    }

    #[test]
    fn cosine_peaks_at_origin() {
        let value = packet(WaveKind::Cosine).evaluate(0.0, 0.0);
        assert!((value - 5.0).abs() < 1e-12, "{value}");
    }

    #[test]
    fn oscillation_travels_with_phase_velocity() {
        let mut packet = packet(WaveKind::Sine);
        packet.phase_velocity = 3.0;

        // shifting both x and t by the phase velocity leaves the phase unchanged
        let a = packet.evaluate(0.3, 0.0);
        let b = packet.evaluate(0.3 + 3.0 * 1.5, 1.5);
        assert!((a - b).abs() < 1e-9, "{a} != {b}");
    }

    #[test]
    fn gaussian_envelope_follows_group_velocity() {
        let mut packet = packet(WaveKind::Gaussian);
        packet.group_velocity = 2.0;
        packet.phase_velocity = 2.0;
        packet.amplitude = 1.0;

        // at the envelope center the carrier is cos(0) when v_p == v_g
        let value = packet.evaluate(2.0 * 4.0, 4.0);
        assert!((value - 1.0).abs() < 1e-12, "{value}");

        // far from the center it vanishes
        let value = packet.evaluate(100.0, 0.0);
        assert!(value.abs() < 1e-12, "{value}");
    }

    #[test]
    fn gaussian_with_unit_amplitude_matches_enveloped_carrier() {
        let packet = WavePacket {
            k: 1.5,
            group_velocity: 0.5,
            amplitude: 1.0,
            kind: WaveKind::Gaussian,
            phase_velocity: 2.0,
        };
        let (x, t): (f64, f64) = (3.0, 1.2);
        let expected =
            (-0.1 * (x - 0.5 * t) * (x - 0.5 * t)).exp() * (1.5 * (x - 2.0 * t)).cos();
        assert!((packet.evaluate(x, t) - expected).abs() < 1e-12);
    }

    #[test]
    fn simplified_variant_is_unit_phase_velocity() {
        let packet = packet(WaveKind::Sine);
        assert_eq!(packet.angular_frequency(), packet.k);
        let expected = 5.0 * (2.0 * 1.0 - 2.0 * 0.25_f64).sin();
        assert!((packet.evaluate(1.0, 0.25) - expected).abs() < 1e-12);
    }

    #[test]
    fn sample_into_adds_onto_buffer() {
        let xs = [0.0, FRAC_PI_4, FRAC_PI_2];
        let mut out = [1.0; 3];
        packet(WaveKind::Sine).sample_into(&xs, 0.0, &mut out);

        let expected = [1.0, 6.0, 1.0];
        for (value, expected) in out.iter().zip(expected) {
            assert!((value - expected).abs() < 1e-9, "{value} != {expected}");
        }
    }

    #[test]
    fn label_uses_two_decimals() {
        let packet = WavePacket {
            k: 2.0,
            group_velocity: -1.5,
            amplitude: 5.0,
            kind: WaveKind::Cosine,
            phase_velocity: 0.25,
        };
        assert_eq!(
            packet.to_string(),
            "k=2.00, v_g=-1.50, A=5.00, kind=cosine, v_p=0.25"
        );
    }
}
