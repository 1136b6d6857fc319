use std::time::Instant;

use crate::{
    animation::{
        AnimationError,
        Animator,
    },
    config::AppConfig,
    controls::{
        ManualEntry,
        PendingPacket,
    },
    grid::TimeGrid,
    registry::PacketRegistry,
    render::Signal,
    wave::WavePacket,
};

/// Everything the window shows, independent of any widget.
///
/// Every user action is a method here. The UI only forwards events and paints
/// [`AppState::signal`].
#[derive(Clone, Debug)]
pub struct AppState {
    grid: TimeGrid,
    registry: PacketRegistry,
    pending: PendingPacket,
    animator: Animator,
    frame: usize,
    signal: Signal,
    show_components: bool,
}

impl AppState {
    pub fn new(config: &AppConfig) -> Self {
        let grid = TimeGrid::from_config(&config.grid);
        let signal = Signal::empty(&grid);

        Self {
            grid,
            registry: PacketRegistry::default(),
            pending: PendingPacket::new(config.sliders),
            animator: Animator::new(config.animation.interval()),
            frame: 0,
            signal,
            show_components: config.plot.show_components,
        }
    }

    pub fn grid(&self) -> &TimeGrid {
        &self.grid
    }

    pub fn registry(&self) -> &PacketRegistry {
        &self.registry
    }

    pub fn pending(&self) -> &PendingPacket {
        &self.pending
    }

    pub fn pending_mut(&mut self) -> &mut PendingPacket {
        &mut self.pending
    }

    pub fn animator(&self) -> &Animator {
        &self.animator
    }

    pub fn frame(&self) -> usize {
        self.frame
    }

    pub fn signal(&self) -> &Signal {
        &self.signal
    }

    pub fn show_components(&self) -> bool {
        self.show_components
    }

    pub fn set_show_components(&mut self, show_components: bool) {
        if self.show_components != show_components {
            self.show_components = show_components;
            self.render(self.frame);
        }
    }

    pub fn select(&mut self, index: Option<usize>) {
        self.registry.select(index);
    }

    /// Adds a packet made from the pending slider values.
    pub fn add_pending_packet(&mut self) -> usize {
        let packet = self.pending.commit();
        self.add_packet(packet)
    }

    /// Adds a packet from the manual entry form. Does nothing if a field
    /// doesn't parse.
    pub fn add_manual_packet(&mut self, entry: &ManualEntry) -> Option<usize> {
        let packet = entry.commit(self.pending.kind, self.pending.invert)?;
        Some(self.add_packet(packet))
    }

    pub fn add_packet(&mut self, packet: WavePacket) -> usize {
        let index = self.registry.add(packet);
        tracing::info!(index, %packet, "added wave packet");
        self.render(0);
        index
    }

    /// Removes the selected packet, if any.
    pub fn remove_selected(&mut self) -> Option<WavePacket> {
        let packet = self.registry.remove_selected()?;
        tracing::info!(%packet, "removed wave packet");
        self.render(0);
        Some(packet)
    }

    pub fn reset_controls(&mut self) {
        tracing::debug!("reset sliders to defaults");
        self.pending.reset();
    }

    /// Starts the animation from frame 0.
    pub fn start_animation(&mut self, now: Instant) -> Result<(), AnimationError> {
        if let Err(error) = self.animator.start(now, self.registry.len()) {
            tracing::warn!(%error, "animation not started");
            return Err(error);
        }

        tracing::info!(interval = ?self.animator.interval(), "animation started");
        self.render(0);
        Ok(())
    }

    /// Stops the animation and keeps the current frame on screen.
    pub fn stop_animation(&mut self) {
        if self.animator.stop() {
            tracing::info!(frame = self.frame, "animation stopped");
        }
    }

    /// Advances the animation if a tick is due. Returns whether the signal
    /// changed.
    pub fn poll_animation(&mut self, now: Instant) -> bool {
        let ticks = self.animator.poll(now);
        for _ in 0..ticks {
            self.render(self.grid.next_frame(self.frame));
        }
        ticks > 0
    }

    fn render(&mut self, frame: usize) {
        self.frame = self.grid.clamp_frame(frame);
        self.signal = Signal::compute(&self.registry, &self.grid, self.frame, self.show_components);
        tracing::trace!(frame = self.frame, time = self.signal.time, "rendered");
    }
}
