use crate::wave::WavePacket;

/// Ordered list of the packets the user has added, plus the selected row of
/// the packet list.
#[derive(Clone, Debug, Default)]
pub struct PacketRegistry {
    packets: Vec<WavePacket>,
    selected: Option<usize>,
}

impl PacketRegistry {
    /// Appends a packet and returns its index.
    pub fn add(&mut self, packet: WavePacket) -> usize {
        self.packets.push(packet);
        self.packets.len() - 1
    }

    /// Removes the selected packet.
    ///
    /// Returns `None` and leaves the registry untouched if nothing is
    /// selected.
    pub fn remove_selected(&mut self) -> Option<WavePacket> {
        let index = self.selected.filter(|index| *index < self.packets.len())?;
        self.selected = None;
        Some(self.packets.remove(index))
    }

    pub fn select(&mut self, index: Option<usize>) {
        self.selected = index.filter(|index| *index < self.packets.len());
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    pub fn get(&self, index: usize) -> Option<&WavePacket> {
        self.packets.get(index)
    }

    pub fn len(&self) -> usize {
        self.packets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.packets.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &WavePacket> {
        self.packets.iter()
    }

    /// List labels, in registry order.
    pub fn labels(&self) -> Vec<String> {
        self.packets.iter().map(ToString::to_string).collect()
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        registry::PacketRegistry,
        wave::{
            WaveKind,
            WavePacket,
        },
    };

    fn packet(k: f64) -> WavePacket {
        WavePacket {
            k,
            group_velocity: 1.0,
            amplitude: 1.0,
            kind: WaveKind::Sine,
            phase_velocity: 1.0,
        }
    }

    #[test]
    fn add_then_remove_only_entry_empties_registry() {
        let mut registry = PacketRegistry::default();
        let index = registry.add(packet(2.0));
        registry.select(Some(index));

        assert_eq!(registry.remove_selected(), Some(packet(2.0)));
        assert!(registry.is_empty());
        assert!(registry.labels().is_empty());
        assert_eq!(registry.selected(), None);
    }

    #[test]
    fn add_preserves_order() {
        let mut registry = PacketRegistry::default();
        for (i, k) in [1.0, 2.0, 3.0].into_iter().enumerate() {
            assert_eq!(registry.add(packet(k)), i);
        }

        let labels = registry.labels();
        for (i, k) in [1.0, 2.0, 3.0].into_iter().enumerate() {
            assert_eq!(registry.get(i), Some(&packet(k)));
            assert_eq!(labels[i], packet(k).to_string());
        }
    }

    #[test]
    fn remove_without_selection_is_noop() {
        let mut registry = PacketRegistry::default();
        registry.add(packet(1.0));

        assert_eq!(registry.remove_selected(), None);
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn remove_middle_entry_keeps_neighbours() {
        let mut registry = PacketRegistry::default();
        registry.add(packet(1.0));
        registry.add(packet(2.0));
        registry.add(packet(3.0));

        registry.select(Some(1));
        registry.remove_selected();

        let ks = registry.iter().map(|packet| packet.k).collect::<Vec<_>>();
        assert_eq!(ks, vec![1.0, 3.0]);
    }

    #[test]
    fn out_of_range_selection_is_ignored() {
        let mut registry = PacketRegistry::default();
        registry.add(packet(1.0));
        registry.select(Some(4));
        assert_eq!(registry.selected(), None);
        assert_eq!(registry.remove_selected(), None);
    }
}
