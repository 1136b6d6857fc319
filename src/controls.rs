//! Pending packet parameters as set by the sliders, and the free-text entry
//! form.

use serde::{
    Deserialize,
    Serialize,
};

use crate::wave::{
    WaveKind,
    WavePacket,
};

/// Maps integer slider ticks to values: `value = min + tick * step`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct SliderScale {
    pub min: f64,
    pub max: f64,
    pub step: f64,
    pub default: f64,
}

impl SliderScale {
    pub const fn new(min: f64, max: f64, step: f64, default: f64) -> Self {
        Self {
            min,
            max,
            step,
            default,
        }
    }

    /// Highest tick position. The lowest is always 0.
    pub fn ticks(&self) -> u32 {
        if self.step <= 0.0 || self.max <= self.min {
            0
        }
        else {
            ((self.max - self.min) / self.step).round() as u32
        }
    }

    pub fn value_at(&self, tick: u32) -> f64 {
        self.min + tick.min(self.ticks()) as f64 * self.step
    }

    /// Nearest tick for `value`, clamped to the slider range.
    pub fn tick_for(&self, value: f64) -> u32 {
        if self.step <= 0.0 {
            return 0;
        }
        let tick = ((value - self.min) / self.step).round();
        tick.clamp(0.0, self.ticks() as f64) as u32
    }

    pub fn default_tick(&self) -> u32 {
        self.tick_for(self.default)
    }

    pub fn readout(&self, tick: u32) -> String {
        format!("{:.2}", self.value_at(tick))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct SliderConfig {
    #[serde(default = "default_k")]
    pub k: SliderScale,

    #[serde(default = "default_group_velocity")]
    pub group_velocity: SliderScale,

    #[serde(default = "default_amplitude")]
    pub amplitude: SliderScale,

    #[serde(default = "default_phase_velocity")]
    pub phase_velocity: SliderScale,
}

impl Default for SliderConfig {
    fn default() -> Self {
        Self {
            k: default_k(),
            group_velocity: default_group_velocity(),
            amplitude: default_amplitude(),
            phase_velocity: default_phase_velocity(),
        }
    }
}

fn default_k() -> SliderScale {
    SliderScale::new(-10.0, 10.0, 0.01, 2.0)
}

fn default_group_velocity() -> SliderScale {
    SliderScale::new(-10.0, 10.0, 0.01, 2.0)
}

fn default_amplitude() -> SliderScale {
    SliderScale::new(-10.0, 10.0, 0.01, 2.0)
}

fn default_phase_velocity() -> SliderScale {
    SliderScale::new(-5.0, 5.0, 0.1, 2.0)
}

/// Identifies one of the four parameter sliders.
#[derive(Clone, Copy, Debug, PartialEq, Eq, strum::Display, strum::EnumIter)]
pub enum Parameter {
    #[strum(to_string = "Wavenumber (k)")]
    K,
    #[strum(to_string = "Group velocity")]
    GroupVelocity,
    #[strum(to_string = "Amplitude")]
    Amplitude,
    #[strum(to_string = "Phase velocity")]
    PhaseVelocity,
}

impl SliderConfig {
    pub fn scale(&self, parameter: Parameter) -> &SliderScale {
        match parameter {
            Parameter::K => &self.k,
            Parameter::GroupVelocity => &self.group_velocity,
            Parameter::Amplitude => &self.amplitude,
            Parameter::PhaseVelocity => &self.phase_velocity,
        }
    }
}

/// Slider positions, wave kind and invert flag that the next added packet
/// will be made from.
#[derive(Clone, Debug)]
pub struct PendingPacket {
    scales: SliderConfig,
    k: u32,
    group_velocity: u32,
    amplitude: u32,
    phase_velocity: u32,
    pub kind: WaveKind,
    pub invert: bool,
}

impl PendingPacket {
    pub fn new(scales: SliderConfig) -> Self {
        let mut this = Self {
            scales,
            k: 0,
            group_velocity: 0,
            amplitude: 0,
            phase_velocity: 0,
            kind: WaveKind::default(),
            invert: false,
        };
        this.reset();
        this
    }

    pub fn scales(&self) -> &SliderConfig {
        &self.scales
    }

    pub fn tick(&self, parameter: Parameter) -> u32 {
        match parameter {
            Parameter::K => self.k,
            Parameter::GroupVelocity => self.group_velocity,
            Parameter::Amplitude => self.amplitude,
            Parameter::PhaseVelocity => self.phase_velocity,
        }
    }

    pub fn tick_mut(&mut self, parameter: Parameter) -> &mut u32 {
        match parameter {
            Parameter::K => &mut self.k,
            Parameter::GroupVelocity => &mut self.group_velocity,
            Parameter::Amplitude => &mut self.amplitude,
            Parameter::PhaseVelocity => &mut self.phase_velocity,
        }
    }

    pub fn set_tick(&mut self, parameter: Parameter, tick: u32) {
        let ticks = self.scales.scale(parameter).ticks();
        *self.tick_mut(parameter) = tick.min(ticks);
    }

    pub fn value(&self, parameter: Parameter) -> f64 {
        self.scales.scale(parameter).value_at(self.tick(parameter))
    }

    pub fn readout(&self, parameter: Parameter) -> String {
        self.scales.scale(parameter).readout(self.tick(parameter))
    }

    /// Puts the sliders back to their defaults. Kind and invert are kept.
    pub fn reset(&mut self) {
        self.k = self.scales.k.default_tick();
        self.group_velocity = self.scales.group_velocity.default_tick();
        self.amplitude = self.scales.amplitude.default_tick();
        self.phase_velocity = self.scales.phase_velocity.default_tick();
    }

    pub fn commit(&self) -> WavePacket {
        make_packet(
            self.value(Parameter::K),
            self.value(Parameter::GroupVelocity),
            self.value(Parameter::Amplitude),
            self.value(Parameter::PhaseVelocity),
            self.kind,
            self.invert,
        )
    }
}

fn make_packet(
    k: f64,
    group_velocity: f64,
    amplitude: f64,
    phase_velocity: f64,
    kind: WaveKind,
    invert: bool,
) -> WavePacket {
    WavePacket {
        k,
        group_velocity,
        amplitude: if invert { -amplitude } else { amplitude },
        kind,
        phase_velocity,
    }
}

/// Parses a free-text numeric field. Malformed or non-finite input yields
/// `None`.
pub fn parse_field(text: &str) -> Option<f64> {
    text.trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
}

/// Text buffers of the manual entry form.
#[derive(Clone, Debug, Default)]
pub struct ManualEntry {
    pub k: String,
    pub group_velocity: String,
    pub amplitude: String,
    pub phase_velocity: String,
}

impl ManualEntry {
    /// Prefills the form with the pending slider values.
    pub fn from_pending(pending: &PendingPacket) -> Self {
        Self {
            k: pending.readout(Parameter::K),
            group_velocity: pending.readout(Parameter::GroupVelocity),
            amplitude: pending.readout(Parameter::Amplitude),
            phase_velocity: pending.readout(Parameter::PhaseVelocity),
        }
    }

    pub fn field_mut(&mut self, parameter: Parameter) -> &mut String {
        match parameter {
            Parameter::K => &mut self.k,
            Parameter::GroupVelocity => &mut self.group_velocity,
            Parameter::Amplitude => &mut self.amplitude,
            Parameter::PhaseVelocity => &mut self.phase_velocity,
        }
    }

    /// Builds a packet, or `None` if any field doesn't parse.
    pub fn commit(&self, kind: WaveKind, invert: bool) -> Option<WavePacket> {
        Some(make_packet(
            parse_field(&self.k)?,
            parse_field(&self.group_velocity)?,
            parse_field(&self.amplitude)?,
            parse_field(&self.phase_velocity)?,
            kind,
            invert,
        ))
    }
}
