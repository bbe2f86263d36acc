//! Trait abstraction for control-channel I/O to enable testing

use async_trait::async_trait;
use std::io;

/// Trait for control channel write operations
#[async_trait]
pub trait ChannelIO: Send {
    /// Write all data to the channel
    async fn write_all(&mut self, data: &[u8]) -> io::Result<()>;

    /// Flush the output buffer
    async fn flush(&mut self) -> io::Result<()>;
}

/// Wrapper around tokio::net::TcpStream that implements ChannelIO
pub struct TcpChannel {
    stream: tokio::net::TcpStream,
}

impl TcpChannel {
    pub fn new(stream: tokio::net::TcpStream) -> Self {
        Self { stream }
    }
}

#[async_trait]
impl ChannelIO for TcpChannel {
    async fn write_all(&mut self, data: &[u8]) -> io::Result<()> {
        use tokio::io::AsyncWriteExt;
        self.stream.write_all(data).await
    }

    async fn flush(&mut self) -> io::Result<()> {
        use tokio::io::AsyncWriteExt;
        self.stream.flush().await
    }
}

/// Wrapper around a connected tokio::net::UdpSocket that implements ChannelIO.
/// Each frame goes out as one datagram; flushing is a no-op.
pub struct UdpChannel {
    socket: tokio::net::UdpSocket,
}

impl UdpChannel {
    pub fn new(socket: tokio::net::UdpSocket) -> Self {
        Self { socket }
    }
}

#[async_trait]
impl ChannelIO for UdpChannel {
    async fn write_all(&mut self, data: &[u8]) -> io::Result<()> {
        let sent = self.socket.send(data).await?;
        if sent != data.len() {
            return Err(io::Error::new(
                io::ErrorKind::WriteZero,
                "short datagram write",
            ));
        }
        Ok(())
    }

    async fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
