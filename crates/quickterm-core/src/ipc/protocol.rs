//! i3 IPC wire format.
//!
//! Every message is `"i3-ipc"`, a u32 payload length, a u32 message type
//! (both in native byte order) and a JSON payload. Replies reuse the request
//! type; events have the high bit of the type set.

use std::io::{Read, Write};

use crate::ipc::errors::IpcError;

pub const MAGIC: &[u8; 6] = b"i3-ipc";
pub const HEADER_LEN: usize = MAGIC.len() + 8;

/// Upper bound on a payload we are willing to allocate for.
pub const MAX_PAYLOAD_LEN: usize = 64 * 1024 * 1024;

pub const RUN_COMMAND: u32 = 0;
pub const GET_WORKSPACES: u32 = 1;
pub const SUBSCRIBE: u32 = 2;
pub const GET_TREE: u32 = 4;

pub const EVENT_MASK: u32 = 1 << 31;
pub const EVENT_WINDOW: u32 = EVENT_MASK | 3;

/// One decoded message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    pub message_type: u32,
    pub payload: Vec<u8>,
}

impl Frame {
    pub fn is_event(&self) -> bool {
        self.message_type & EVENT_MASK != 0
    }
}

pub fn encode(message_type: u32, payload: &[u8]) -> Vec<u8> {
    let mut buf = Vec::with_capacity(HEADER_LEN + payload.len());
    buf.extend_from_slice(MAGIC);
    buf.extend_from_slice(&(payload.len() as u32).to_ne_bytes());
    buf.extend_from_slice(&message_type.to_ne_bytes());
    buf.extend_from_slice(payload);
    buf
}

pub fn write_message<W: Write>(
    writer: &mut W,
    message_type: u32,
    payload: &[u8],
) -> Result<(), IpcError> {
    writer.write_all(&encode(message_type, payload))?;
    writer.flush()?;
    Ok(())
}

pub fn read_message<R: Read>(reader: &mut R) -> Result<Frame, IpcError> {
    let mut header = [0u8; HEADER_LEN];
    reader.read_exact(&mut header)?;

    if &header[..MAGIC.len()] != MAGIC {
        return Err(IpcError::protocol("invalid magic in message header"));
    }

    let mut len_bytes = [0u8; 4];
    len_bytes.copy_from_slice(&header[6..10]);
    let mut type_bytes = [0u8; 4];
    type_bytes.copy_from_slice(&header[10..14]);

    let len = u32::from_ne_bytes(len_bytes) as usize;
    if len > MAX_PAYLOAD_LEN {
        return Err(IpcError::protocol(format!(
            "payload of {} bytes exceeds limit",
            len
        )));
    }

    let mut payload = vec![0u8; len];
    reader.read_exact(&mut payload)?;

    Ok(Frame {
        message_type: u32::from_ne_bytes(type_bytes),
        payload,
    })
}
