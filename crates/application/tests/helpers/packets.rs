use bytes::{BufMut, Bytes, BytesMut};

pub const QTYPE_A: u16 = 1;
pub const QTYPE_AAAA: u16 = 28;

/// Standard recursive query for `domain` with the given id and QTYPE.
pub fn query(id: u16, domain: &str, qtype: u16) -> Bytes {
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
    buf.put_u16(qtype);
    buf.put_u16(1);
    buf.freeze()
}

/// Minimal upstream-style answer: query header flipped to a response with one
/// A record pointing at 93.184.216.34.
pub fn answer_for(query: &[u8]) -> Bytes {
    let mut buf = BytesMut::from(query);
    buf[2] = 0x81;
    buf[3] = 0x80;
    buf[6] = 0;
    buf[7] = 1;
    buf.put_u16(0xC00C);
    buf.put_u16(QTYPE_A);
    buf.put_u16(1);
    buf.put_u32(300);
    buf.put_u16(4);
    buf.put_slice(&[93, 184, 216, 34]);
    buf.freeze()
}
