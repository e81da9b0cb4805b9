//! Wire framing: clientbound packet frames and the primitive field codecs
//! shared by every release (VarInt, length-prefixed UTF-8, big-endian int32).
use crate::error::CapabilityError;
use bytes::{Buf, BufMut, Bytes, BytesMut};

/// Protocol string limit up to 1.12.
pub const MAX_CHAT_LEN_LEGACY: usize = 32767;
/// Protocol string limit for chat components from 1.13.
pub const MAX_CHAT_LEN_MODERN: usize = 262144;

/// One encoded clientbound packet: id plus field bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    pub packet_id: i32,
    pub payload: Bytes,
}

impl Frame {
    /// Id and payload as they appear inside the length-prefixed envelope.
    pub fn to_bytes(&self) -> Bytes {
        let mut buf = BytesMut::with_capacity(self.payload.len() + 5);
        put_varint(&mut buf, self.packet_id);
        buf.put_slice(&self.payload);
        buf.freeze()
    }

    pub fn reader(&self) -> PacketReader {
        PacketReader {
            buf: self.payload.clone(),
        }
    }
}

fn put_varint(buf: &mut BytesMut, value: i32) {
    let mut value = value as u32;
    loop {
        if value & !0x7F == 0 {
            buf.put_u8(value as u8);
            return;
        }
        buf.put_u8((value & 0x7F) as u8 | 0x80);
        value >>= 7;
    }
}

/// Builds the payload of one frame.
#[derive(Debug)]
pub struct PacketWriter {
    packet_id: i32,
    buf: BytesMut,
}

impl PacketWriter {
    pub fn new(packet_id: i32) -> Self {
        Self {
            packet_id,
            buf: BytesMut::new(),
        }
    }

    pub fn varint(mut self, value: i32) -> Self {
        put_varint(&mut self.buf, value);
        self
    }

    pub fn int(mut self, value: i32) -> Self {
        self.buf.put_i32(value);
        self
    }

    pub fn byte(mut self, value: u8) -> Self {
        self.buf.put_u8(value);
        self
    }

    pub fn boolean(self, value: bool) -> Self {
        self.byte(value as u8)
    }

    /// Length-prefixed UTF-8; `max_len` counts UTF-16 units like the client does.
    pub fn string(mut self, value: &str, max_len: usize) -> Result<Self, CapabilityError> {
        let units = value.encode_utf16().count();
        if units > max_len {
            return Err(CapabilityError::PacketEncoding(format!(
                "string of {} units exceeds protocol limit {}",
                units, max_len
            )));
        }
        put_varint(&mut self.buf, value.len() as i32);
        self.buf.put_slice(value.as_bytes());
        Ok(self)
    }

    pub fn finish(self) -> Frame {
        Frame {
            packet_id: self.packet_id,
            payload: self.buf.freeze(),
        }
    }
}

/// Reads fields back out of a frame payload.
#[derive(Debug)]
pub struct PacketReader {
    buf: Bytes,
}

impl PacketReader {
    fn truncated(what: &str) -> CapabilityError {
        CapabilityError::PacketEncoding(format!("truncated frame while reading {}", what))
    }

    pub fn varint(&mut self) -> Result<i32, CapabilityError> {
        let mut value: u32 = 0;
        for shift in (0..35).step_by(7) {
            if !self.buf.has_remaining() {
                return Err(Self::truncated("varint"));
            }
            let byte = self.buf.get_u8();
            value |= ((byte & 0x7F) as u32) << shift;
            if byte & 0x80 == 0 {
                return Ok(value as i32);
            }
        }
        Err(CapabilityError::PacketEncoding("varint longer than 5 bytes".to_string()))
    }

    pub fn int(&mut self) -> Result<i32, CapabilityError> {
        if self.buf.remaining() < 4 {
            return Err(Self::truncated("int"));
        }
        Ok(self.buf.get_i32())
    }

    pub fn byte(&mut self) -> Result<u8, CapabilityError> {
        if !self.buf.has_remaining() {
            return Err(Self::truncated("byte"));
        }
        Ok(self.buf.get_u8())
    }

    pub fn boolean(&mut self) -> Result<bool, CapabilityError> {
        Ok(self.byte()? != 0)
    }

    pub fn string(&mut self) -> Result<String, CapabilityError> {
        let len = self.varint()? as usize;
        if self.buf.remaining() < len {
            return Err(Self::truncated("string"));
        }
        let raw = self.buf.split_to(len);
        String::from_utf8(raw.to_vec())
            .map_err(|e| CapabilityError::PacketEncoding(format!("invalid UTF-8: {}", e)))
    }

    pub fn remaining(&self) -> usize {
        self.buf.remaining()
    }
}
