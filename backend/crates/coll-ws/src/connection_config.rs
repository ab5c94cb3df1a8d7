pub const DEFAULT_READ_BUFFER_SIZE: usize = 1024;
pub const DEFAULT_WRITE_BUFFER_SIZE: usize = 1024;

/// Configuration for WebSocket connections
#[derive(Debug, Clone)]
pub struct ConnectionConfig {
    /// Read buffer size handed to the protocol layer on upgrade
    pub read_buffer_size: usize,
    /// Write buffer size handed to the protocol layer on upgrade
    pub write_buffer_size: usize,
}

impl Default for ConnectionConfig {
    fn default() -> Self {
        Self {
            read_buffer_size: DEFAULT_READ_BUFFER_SIZE,
            write_buffer_size: DEFAULT_WRITE_BUFFER_SIZE,
        }
    }
}
