use crate::{
    grid::TimeGrid,
    registry::PacketRegistry,
    wave::WavePacket,
};

/// Summed signal of all registered packets for one frame.
///
/// This is only data. Painting it is up to the UI.
#[derive(Clone, Debug, PartialEq)]
pub struct Signal {
    pub frame: usize,
    pub time: f64,
    pub x: Vec<f64>,
    pub sum: Vec<f64>,
    /// Individual packet curves, in registry order. Empty unless requested.
    pub components: Vec<Vec<f64>>,
}

impl Signal {
    pub fn compute(
        registry: &PacketRegistry,
        grid: &TimeGrid,
        frame: usize,
        with_components: bool,
    ) -> Self {
        let frame = grid.clamp_frame(frame);
        let time = grid.time_at(frame);
        let x = grid.values();

        let mut sum = vec![0.0; x.len()];
        let mut components = Vec::new();

        for packet in registry.iter() {
            let t = packet_time(packet, time);

            if with_components {
                let component = packet.sample(x, t);
                for (y, c) in sum.iter_mut().zip(&component) {
                    *y += *c;
                }
                components.push(component);
            }
            else {
                packet.sample_into(x, t, &mut sum);
            }
        }

        Self {
            frame,
            time,
            x: x.to_owned(),
            sum,
            components,
        }
    }

    /// Blank signal for an empty registry.
    pub fn empty(grid: &TimeGrid) -> Self {
        Self::compute(&PacketRegistry::default(), grid, 0, false)
    }

    /// `(x, y)` pairs of the sum, in the shape plotting wants.
    pub fn sum_points(&self) -> Vec<[f64; 2]> {
        zip_points(&self.x, &self.sum)
    }

    pub fn component_points(&self) -> impl Iterator<Item = Vec<[f64; 2]>> + '_ {
        self.components
            .iter()
            .map(|component| zip_points(&self.x, component))
    }
}

/// Elapsed time a packet is evaluated at.
pub fn packet_time(packet: &WavePacket, time: f64) -> f64 {
    if packet.kind.scales_time_by_group_velocity() {
        packet.group_velocity * time
    }
    else {
        time
    }
}

fn zip_points(x: &[f64], y: &[f64]) -> Vec<[f64; 2]> {
    x.iter().zip(y).map(|(x, y)| [*x, *y]).collect()
}
