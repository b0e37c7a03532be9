//! Frame buffer layout.
//! Must stay in sync with the host's `protocol.js`.
//!
//! Layout (all values f32 / 4 bytes):
//! ```text
//! [Header: 32 floats]
//! [Nodes:  max_nodes × 8 floats]   id, rot_x, rot_y, rot_z, scale, opacity, visible, pad
//! [Events: max_events × 4 floats]  kind, a, b, c
//! ```
//!
//! Capacities are written into the header every frame.
//! The host reads them from the header to compute offsets.

use crate::api::app::{AppConfig, EngineContext};
use crate::api::types::HostEvent;

/// Number of floats in the header section.
pub const HEADER_FLOATS: usize = 32;

/// Header field indices.
pub const HEADER_FRAME_COUNTER: usize = 0;
pub const HEADER_CAMERA_POS: usize = 1; // 3 floats
pub const HEADER_CAMERA_TARGET: usize = 4; // 3 floats
pub const HEADER_CAMERA_FOV: usize = 7;
pub const HEADER_CAMERA_ASPECT: usize = 8;
pub const HEADER_CAMERA_DRIVEN: usize = 9;
pub const HEADER_SUN_POS: usize = 10; // 3 floats
pub const HEADER_SUN_INTENSITY: usize = 13;
pub const HEADER_NODE_COUNT: usize = 14;
pub const HEADER_EVENT_COUNT: usize = 15;
pub const HEADER_MAX_NODES: usize = 16;
pub const HEADER_MAX_EVENTS: usize = 17;
pub const HEADER_PROTOCOL_VERSION: usize = 18;
pub const HEADER_CAMERA_NEAR: usize = 19;
pub const HEADER_CAMERA_FAR: usize = 20;

/// The frame counter wraps here so every value stays exact in an `f32`.
pub const FRAME_COUNTER_WRAP: u64 = 1 << 24;

/// Protocol version written into the header.
pub const PROTOCOL_VERSION: f32 = 1.0;

/// Floats per node record (fixed by the wire format).
pub const NODE_FLOATS: usize = 8;

/// Floats per host event (fixed by the wire format).
pub const EVENT_FLOATS: usize = HostEvent::FLOATS;

/// Runtime-computed buffer layout.
#[derive(Debug, Clone, PartialEq)]
pub struct ProtocolLayout {
    pub max_nodes: usize,
    pub max_events: usize,
    /// Offset (in floats) where node data begins.
    pub node_data_offset: usize,
    /// Offset (in floats) where event data begins.
    pub event_data_offset: usize,
    /// Total buffer size in floats.
    pub buffer_total_floats: usize,
}

impl ProtocolLayout {
    /// Compute layout from raw capacity values.
    pub fn new(max_nodes: usize, max_events: usize) -> Self {
        let node_data_offset = HEADER_FLOATS;
        let event_data_offset = node_data_offset + max_nodes * NODE_FLOATS;
        let buffer_total_floats = event_data_offset + max_events * EVENT_FLOATS;
        Self {
            max_nodes,
            max_events,
            node_data_offset,
            event_data_offset,
            buffer_total_floats,
        }
    }

    /// Compute layout from an AppConfig.
    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(config.max_nodes, config.max_events)
    }
}

/// Owns the frame buffer and serializes engine state into it.
pub struct FrameWriter {
    layout: ProtocolLayout,
    buffer: Vec<f32>,
    overflow_logged: bool,
}

impl FrameWriter {
    pub fn new(layout: ProtocolLayout) -> Self {
        let buffer = vec![0.0; layout.buffer_total_floats];
        Self {
            layout,
            buffer,
            overflow_logged: false,
        }
    }

    pub fn layout(&self) -> &ProtocolLayout {
        &self.layout
    }

    pub fn as_slice(&self) -> &[f32] {
        &self.buffer
    }

    pub fn as_ptr(&self) -> *const f32 {
        self.buffer.as_ptr()
    }

    /// Write one frame. Nodes or events beyond capacity are dropped.
    pub fn write(&mut self, frame_counter: u64, ctx: &EngineContext) {
        let node_count = ctx.scene.len().min(self.layout.max_nodes);
        let event_count = ctx.events.len().min(self.layout.max_events);
        if !self.overflow_logged
            && (node_count < ctx.scene.len() || event_count < ctx.events.len())
        {
            log::warn!(
                "frame buffer full: {} nodes / {} events (capacity {} / {})",
                ctx.scene.len(),
                ctx.events.len(),
                self.layout.max_nodes,
                self.layout.max_events,
            );
            self.overflow_logged = true;
        }

        let h = &mut self.buffer[..HEADER_FLOATS];
        h[HEADER_FRAME_COUNTER] = (frame_counter % FRAME_COUNTER_WRAP) as f32;
        h[HEADER_CAMERA_POS..HEADER_CAMERA_POS + 3].copy_from_slice(&ctx.camera.position.to_array());
        h[HEADER_CAMERA_TARGET..HEADER_CAMERA_TARGET + 3].copy_from_slice(&ctx.camera.target.to_array());
        h[HEADER_CAMERA_FOV] = ctx.camera.fov_deg;
        h[HEADER_CAMERA_ASPECT] = ctx.camera.aspect;
        h[HEADER_CAMERA_DRIVEN] = if ctx.camera_driven { 1.0 } else { 0.0 };
        h[HEADER_SUN_POS..HEADER_SUN_POS + 3].copy_from_slice(&ctx.sun.position.to_array());
        h[HEADER_SUN_INTENSITY] = ctx.sun.intensity;
        h[HEADER_NODE_COUNT] = node_count as f32;
        h[HEADER_EVENT_COUNT] = event_count as f32;
        h[HEADER_MAX_NODES] = self.layout.max_nodes as f32;
        h[HEADER_MAX_EVENTS] = self.layout.max_events as f32;
        h[HEADER_PROTOCOL_VERSION] = PROTOCOL_VERSION;
        h[HEADER_CAMERA_NEAR] = ctx.camera.near;
        h[HEADER_CAMERA_FAR] = ctx.camera.far;

        let nodes = &mut self.buffer[self.layout.node_data_offset..self.layout.event_data_offset];
        for (slot, node) in nodes.chunks_exact_mut(NODE_FLOATS).zip(ctx.scene.iter()) {
            slot[0] = node.id.0 as f32;
            slot[1] = node.rotation.x;
            slot[2] = node.rotation.y;
            slot[3] = node.rotation.z;
            slot[4] = node.scale;
            slot[5] = node.opacity;
            slot[6] = if node.visible { 1.0 } else { 0.0 };
            slot[7] = 0.0;
        }

        let events = &mut self.buffer[self.layout.event_data_offset..];
        let src: &[f32] = bytemuck::cast_slice(&ctx.events[..event_count]);
        events[..src.len()].copy_from_slice(src);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::scene::Node;
    use glam::Vec3;

    #[test]
    fn default_config_layout() {
        let layout = ProtocolLayout::from_config(&AppConfig::default());
        assert_eq!(layout.node_data_offset, HEADER_FLOATS);
        assert_eq!(layout.event_data_offset, HEADER_FLOATS + 64 * NODE_FLOATS);
        assert_eq!(layout.buffer_total_floats, HEADER_FLOATS + 64 * 8 + 32 * 4);
    }

    #[test]
    fn offsets_are_contiguous() {
        let layout = ProtocolLayout::new(10, 5);
        assert_eq!(layout.event_data_offset, layout.node_data_offset + 10 * NODE_FLOATS);
        assert_eq!(layout.buffer_total_floats, layout.event_data_offset + 5 * EVENT_FLOATS);
    }

    #[test]
    fn header_nodes_and_events_are_written() {
        let mut ctx = EngineContext::new();
        let id = ctx.next_id();
        ctx.scene.spawn(Node::group(id).with_rotation(Vec3::new(0.0, 0.25, -0.4)).with_opacity(0.5));
        ctx.sun.position = Vec3::new(5.0, 1.0, 0.0);
        ctx.camera_driven = true;
        ctx.emit_event(HostEvent { kind: 2.0, a: 1.0, b: 0.0, c: 0.0 });

        let mut writer = FrameWriter::new(ProtocolLayout::new(4, 4));
        writer.write(12, &ctx);
        let buf = writer.as_slice();

        assert_eq!(buf[HEADER_FRAME_COUNTER], 12.0);
        assert_eq!(&buf[HEADER_CAMERA_POS..HEADER_CAMERA_POS + 3], &[0.0, 0.0, 3.0]);
        assert_eq!(&buf[HEADER_SUN_POS..HEADER_SUN_POS + 3], &[5.0, 1.0, 0.0]);
        assert_eq!(buf[HEADER_CAMERA_DRIVEN], 1.0);
        assert_eq!(buf[HEADER_NODE_COUNT], 1.0);
        assert_eq!(buf[HEADER_EVENT_COUNT], 1.0);

        let node = &buf[HEADER_FLOATS..HEADER_FLOATS + NODE_FLOATS];
        assert_eq!(node, &[id.0 as f32, 0.0, 0.25, -0.4, 1.0, 0.5, 1.0, 0.0]);

        let ev = writer.layout().event_data_offset;
        assert_eq!(&buf[ev..ev + 4], &[2.0, 1.0, 0.0, 0.0]);
    }

    #[test]
    fn frame_counter_wraps_exactly() {
        let ctx = EngineContext::new();
        let mut writer = FrameWriter::new(ProtocolLayout::new(1, 1));

        writer.write(FRAME_COUNTER_WRAP - 1, &ctx);
        assert_eq!(writer.as_slice()[HEADER_FRAME_COUNTER], 16_777_215.0);

        writer.write(FRAME_COUNTER_WRAP + 5, &ctx);
        assert_eq!(writer.as_slice()[HEADER_FRAME_COUNTER], 5.0);
    }

    #[test]
    fn overflow_is_truncated() {
        let mut ctx = EngineContext::new();
        for _ in 0..3 {
            let id = ctx.next_id();
            ctx.scene.spawn(Node::group(id));
        }
        let mut writer = FrameWriter::new(ProtocolLayout::new(2, 1));
        writer.write(0, &ctx);
        assert_eq!(writer.as_slice()[HEADER_NODE_COUNT], 2.0);
        assert_eq!(writer.as_slice().len(), HEADER_FLOATS + 2 * 8 + 4);
    }
}
