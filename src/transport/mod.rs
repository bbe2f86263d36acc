//! # Transport Module
//!
//! Forwards engine output to the streaming server's control channel.
//!
//! This module handles:
//! - Opening the control connection (TCP or UDP, per profile settings)
//! - Scaling local view coordinates to the remote screen space
//! - Encoding input events into wire frames and writing them out
//!
//! Coordinate scaling lives here rather than in the engine: the pads and
//! panel work purely in local view pixels, and the remote screen size is a
//! property of the connection (`remote_dim / local_view_dim` per axis).

pub mod channel;

use crate::error::{Result, VpadError};
use crate::input::event::InputEvent;
use crate::wire::encoder;
use tracing::{debug, info};

pub use channel::{ChannelIO, TcpChannel, UdpChannel};

/// Which transport carries the control channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlProtocol {
    Tcp,
    Udp,
}

impl std::str::FromStr for ControlProtocol {
    type Err = VpadError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "tcp" => Ok(Self::Tcp),
            "udp" => Ok(Self::Udp),
            other => Err(VpadError::Transport(format!(
                "unknown control protocol '{other}' (expected tcp or udp)"
            ))),
        }
    }
}

/// Maps local view coordinates to the remote screen space.
///
/// The mapping is a simple linear scale per axis. It reports `None` until
/// both the view and the remote screen have positive dimensions, mirroring
/// the legacy behavior of silently skipping events sent before the
/// handshake supplied a screen size.
#[derive(Debug, Clone, Copy)]
pub struct ScreenMapper {
    view_width: f32,
    view_height: f32,
    remote_width: u16,
    remote_height: u16,
}

impl ScreenMapper {
    /// Creates a mapper with no geometry; set dimensions before use.
    #[must_use]
    pub fn new() -> Self {
        Self {
            view_width: 0.0,
            view_height: 0.0,
            remote_width: 0,
            remote_height: 0,
        }
    }

    /// Sets the local view dimensions in pixels.
    pub fn set_view(&mut self, width: f32, height: f32) {
        self.view_width = width;
        self.view_height = height;
    }

    /// Sets the remote screen dimensions in pixels.
    pub fn set_remote(&mut self, width: u16, height: u16) {
        self.remote_width = width;
        self.remote_height = height;
    }

    /// True once both view and remote dimensions are usable.
    #[must_use]
    pub fn is_ready(&self) -> bool {
        self.view_width > 0.0
            && self.view_height > 0.0
            && self.remote_width > 0
            && self.remote_height > 0
    }

    /// Scales an absolute local position to remote coordinates.
    ///
    /// Returns `None` while the geometry is incomplete.
    #[must_use]
    pub fn map(&self, x: f32, y: f32) -> Option<(u16, u16)> {
        if !self.is_ready() {
            return None;
        }
        let rx = x * f32::from(self.remote_width) / self.view_width;
        let ry = y * f32::from(self.remote_height) / self.view_height;
        Some((
            rx.clamp(0.0, f32::from(self.remote_width - 1)) as u16,
            ry.clamp(0.0, f32::from(self.remote_height - 1)) as u16,
        ))
    }

    /// Scales a local delta to remote coordinates. Deltas scale by the same
    /// per-axis factors as positions.
    #[must_use]
    pub fn map_delta(&self, dx: f32, dy: f32) -> Option<(u16, u16)> {
        if !self.is_ready() {
            return None;
        }
        let rx = dx * f32::from(self.remote_width) / self.view_width;
        let ry = dy * f32::from(self.remote_height) / self.view_height;
        Some((
            rx.clamp(0.0, f32::from(u16::MAX)) as u16,
            ry.clamp(0.0, f32::from(u16::MAX)) as u16,
        ))
    }
}

impl Default for ScreenMapper {
    fn default() -> Self {
        Self::new()
    }
}

/// Sends engine output down a control channel.
///
/// Owns the channel and the coordinate mapper. Events that need coordinates
/// while the mapper has no geometry are skipped, not errors: the engine may
/// legitimately run before the connection handshake finishes.
pub struct ControlSender<C: ChannelIO> {
    channel: C,
    mapper: ScreenMapper,
}

impl<C: ChannelIO> ControlSender<C> {
    /// Wraps a channel with a coordinate mapper.
    pub fn new(channel: C, mapper: ScreenMapper) -> Self {
        Self { channel, mapper }
    }

    /// The coordinate mapper, for geometry updates.
    pub fn mapper_mut(&mut self) -> &mut ScreenMapper {
        &mut self.mapper
    }

    /// Encodes and writes one event.
    ///
    /// Returns `Ok(true)` when a frame went out, `Ok(false)` when the event
    /// was skipped for missing geometry.
    ///
    /// # Errors
    ///
    /// Returns [`VpadError::Transport`] when the channel write fails.
    pub async fn send(&mut self, event: &InputEvent) -> Result<bool> {
        let frame = match *event {
            InputEvent::Key {
                pressed,
                scancode,
                keycode,
                modifiers,
                unicode,
            } => encoder::encode_key(pressed, scancode, keycode, modifiers, unicode),
            InputEvent::MouseButton {
                pressed,
                button,
                x,
                y,
            } => {
                let Some((rx, ry)) = self.mapper.map(x, y) else {
                    debug!("mouse button skipped: no screen geometry");
                    return Ok(false);
                };
                encoder::encode_mouse_key(pressed, button, rx, ry)
            }
            InputEvent::MouseMotion {
                x,
                y,
                dx,
                dy,
                state,
                relative,
            } => {
                let (Some((rx, ry)), Some((rdx, rdy))) =
                    (self.mapper.map(x, y), self.mapper.map_delta(dx, dy))
                else {
                    debug!("mouse motion skipped: no screen geometry");
                    return Ok(false);
                };
                encoder::encode_mouse_motion(rx, ry, rdx, rdy, state, relative)
            }
        };
        self.channel
            .write_all(&frame)
            .await
            .map_err(|e| VpadError::Transport(format!("control channel write failed: {e}")))?;
        Ok(true)
    }

    /// Flushes the channel.
    ///
    /// # Errors
    ///
    /// Returns [`VpadError::Transport`] when the flush fails.
    pub async fn flush(&mut self) -> Result<()> {
        self.channel
            .flush()
            .await
            .map_err(|e| VpadError::Transport(format!("control channel flush failed: {e}")))
    }
}

#[async_trait::async_trait]
impl ChannelIO for Box<dyn ChannelIO> {
    async fn write_all(&mut self, data: &[u8]) -> std::io::Result<()> {
        (**self).write_all(data).await
    }

    async fn flush(&mut self) -> std::io::Result<()> {
        (**self).flush().await
    }
}

/// Connects the control channel to `host:port` over the chosen protocol.
///
/// # Errors
///
/// Returns [`VpadError::Transport`] when the connection cannot be
/// established.
pub async fn connect(
    protocol: ControlProtocol,
    host: &str,
    port: u16,
) -> Result<ControlSender<Box<dyn ChannelIO>>> {
    let addr = format!("{host}:{port}");
    let channel: Box<dyn ChannelIO> = match protocol {
        ControlProtocol::Tcp => {
            let stream = tokio::net::TcpStream::connect(&addr)
                .await
                .map_err(|e| VpadError::Transport(format!("connect to {addr} failed: {e}")))?;
            stream
                .set_nodelay(true)
                .map_err(|e| VpadError::Transport(format!("set_nodelay failed: {e}")))?;
            Box::new(TcpChannel::new(stream))
        }
        ControlProtocol::Udp => {
            let socket = tokio::net::UdpSocket::bind("0.0.0.0:0")
                .await
                .map_err(|e| VpadError::Transport(format!("udp bind failed: {e}")))?;
            socket
                .connect(&addr)
                .await
                .map_err(|e| VpadError::Transport(format!("connect to {addr} failed: {e}")))?;
            Box::new(UdpChannel::new(socket))
        }
    };
    info!("control channel connected to {} ({:?})", addr, protocol);
    Ok(ControlSender::new(channel, ScreenMapper::new()))
}

#[cfg(test)]
mod tests {
    use super::channel::mocks::MockChannel;
    use super::*;
    use crate::input::event::InputEvent;
    use crate::wire::protocol::{offset, CTRL_MSG_SIZE, MSGTYPE_MOUSEKEY};

    fn ready_mapper() -> ScreenMapper {
        let mut mapper = ScreenMapper::new();
        mapper.set_view(1280.0, 720.0);
        mapper.set_remote(1920, 1080);
        mapper
    }

    // ==================== Protocol Tests ====================

    #[test]
    fn test_control_protocol_parsing() {
        assert_eq!(
            "tcp".parse::<ControlProtocol>().unwrap(),
            ControlProtocol::Tcp
        );
        assert_eq!(
            "udp".parse::<ControlProtocol>().unwrap(),
            ControlProtocol::Udp
        );
        assert!("sctp".parse::<ControlProtocol>().is_err());
    }

    // ==================== ScreenMapper Tests ====================

    #[test]
    fn test_mapper_not_ready_without_geometry() {
        let mapper = ScreenMapper::new();
        assert!(!mapper.is_ready());
        assert_eq!(mapper.map(10.0, 10.0), None);
        assert_eq!(mapper.map_delta(1.0, 1.0), None);
    }

    #[test]
    fn test_mapper_scales_linearly() {
        let mapper = ready_mapper();
        // 1280 -> 1920 and 720 -> 1080: factor 1.5 on both axes
        assert_eq!(mapper.map(640.0, 360.0), Some((960, 540)));
        assert_eq!(mapper.map(0.0, 0.0), Some((0, 0)));
        assert_eq!(mapper.map_delta(10.0, 20.0), Some((15, 30)));
    }

    #[test]
    fn test_mapper_clamps_to_remote_bounds() {
        let mapper = ready_mapper();
        assert_eq!(mapper.map(5000.0, 5000.0), Some((1919, 1079)));
        assert_eq!(mapper.map(-50.0, -50.0), Some((0, 0)));
    }

    #[test]
    fn test_mapper_negative_delta_clamps_to_zero() {
        let mapper = ready_mapper();
        assert_eq!(mapper.map_delta(-10.0, -10.0), Some((0, 0)));
    }

    // ==================== ControlSender Tests ====================

    #[tokio::test]
    async fn test_send_key_event() {
        let mock = MockChannel::new();
        let mut sender = ControlSender::new(mock.clone(), ScreenMapper::new());

        let sent = sender
            .send(&InputEvent::key(true, 82, 0x4000_0052))
            .await
            .unwrap();
        assert!(sent);
        assert_eq!(mock.frame_count(), 1);

        let frames = mock.written_data.lock().unwrap();
        assert_eq!(frames[0].len(), CTRL_MSG_SIZE);
    }

    #[tokio::test]
    async fn test_mouse_event_skipped_without_geometry() {
        let mock = MockChannel::new();
        let mut sender = ControlSender::new(mock.clone(), ScreenMapper::new());

        let sent = sender
            .send(&InputEvent::mouse_button(true, 1, 10.0, 10.0))
            .await
            .unwrap();
        assert!(!sent, "no geometry yet: event must be skipped");
        assert_eq!(mock.frame_count(), 0);
    }

    #[tokio::test]
    async fn test_mouse_event_scaled_before_encoding() {
        let mock = MockChannel::new();
        let mut sender = ControlSender::new(mock.clone(), ready_mapper());

        sender
            .send(&InputEvent::mouse_button(true, 1, 640.0, 360.0))
            .await
            .unwrap();

        let frames = mock.written_data.lock().unwrap();
        let frame = &frames[0];
        assert_eq!(frame[offset::MSGTYPE], MSGTYPE_MOUSEKEY);
        let x = u16::from_be_bytes([frame[offset::MOUSE_X], frame[offset::MOUSE_X + 1]]);
        let y = u16::from_be_bytes([frame[offset::MOUSE_Y], frame[offset::MOUSE_Y + 1]]);
        assert_eq!((x, y), (960, 540));
    }

    #[tokio::test]
    async fn test_write_error_becomes_transport_error() {
        let mock = MockChannel::new();
        *mock.write_error.lock().unwrap() = Some(std::io::ErrorKind::BrokenPipe);
        let mut sender = ControlSender::new(mock, ScreenMapper::new());

        let result = sender.send(&InputEvent::key(true, 4, 97)).await;
        assert!(matches!(result, Err(VpadError::Transport(_))));
    }

    #[tokio::test]
    async fn test_motion_event_roundtrip() {
        let mock = MockChannel::new();
        let mut sender = ControlSender::new(mock.clone(), ready_mapper());

        let sent = sender
            .send(&InputEvent::MouseMotion {
                x: 100.0,
                y: 100.0,
                dx: 4.0,
                dy: 2.0,
                state: 0,
                relative: false,
            })
            .await
            .unwrap();
        assert!(sent);
        assert_eq!(mock.frame_count(), 1);
    }
}
