use bytes::{BufMut, Bytes, BytesMut};

pub const QTYPE_A: u16 = 1;

/// Standard recursive query for `domain`.
pub fn query(id: u16, domain: &str) -> Bytes {
    let mut buf = BytesMut::new();
    buf.put_u16(id);
    buf.put_u16(0x0100);
    buf.put_u16(1);
    buf.put_u16(0);
    buf.put_u16(0);
    buf.put_u16(0);
    for label in domain.split('.') {
        buf.put_u8(label.len() as u8);
        buf.put_slice(label.as_bytes());
    }
    buf.put_u8(0);
    buf.put_u16(QTYPE_A);
    buf.put_u16(1);
    buf.freeze()
}
