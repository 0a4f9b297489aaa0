//! Query Codec: the minimal slice of the DNS wire format this engine needs.
//!
//! Only the header and the first question are inspected. Blocked responses
//! are synthesized by reusing the original question bytes, so no general
//! DNS encoder is required.
//!
//! ```text
//! +--+--+--+--+--+--+--+--+--+--+--+--+--+--+--+--+
//! |                      ID                       |  offset 0
//! |QR|   Opcode  |AA|TC|RD|RA|   Z    |   RCODE   |  offset 2
//! |                    QDCOUNT                    |  offset 4
//! |                    ANCOUNT                    |  offset 6
//! |                    NSCOUNT                    |  offset 8
//! |                    ARCOUNT                    |  offset 10
//! +--+--+--+--+--+--+--+--+--+--+--+--+--+--+--+--+
//! |                 Question ...                  |  offset 12
//! ```

use crate::errors::PacketError;
use crate::query::{ParsedQuery, QuestionKind};
use bytes::{BufMut, Bytes, BytesMut};
use std::sync::Arc;

/// Size of the fixed DNS header.
pub const DNS_HEADER_LEN: usize = 12;

/// Flag bytes of a synthesized blocked answer: QR=1, RD=1, RA=1, RCODE=3.
pub const NXDOMAIN_FLAGS: [u8; 2] = [0x81, 0x83];

/// Parse a raw UDP payload into a [`ParsedQuery`].
///
/// Takes the transaction id from offset 0, then walks length-prefixed labels
/// from offset 12 up to the terminating zero-length label. QTYPE/QCLASS are
/// read if the four bytes after the name are present.
///
/// The decoded name is lowercased and otherwise kept byte for byte: label
/// bytes outside printable ASCII, plus `.` and `\` inside a label, are
/// written in `\DDD` decimal form, so distinct wire names never share a
/// domain.
pub fn parse_query(packet: Bytes) -> Result<ParsedQuery, PacketError> {
    if packet.len() < DNS_HEADER_LEN {
        return Err(PacketError::TooShort { len: packet.len() });
    }

    let transaction_id = [packet[0], packet[1]];
    let (domain, name_end) = read_question_name(&packet)?;
    if domain.is_empty() {
        return Err(PacketError::EmptyName);
    }

    let question = read_question_kind(&packet, name_end);

    Ok(ParsedQuery {
        transaction_id,
        domain: Arc::from(domain),
        question,
        raw: packet,
    })
}

/// Walk the question name starting at offset 12.
///
/// Returns the dotted, escaped, lowercased name and the offset one past the
/// terminating zero byte.
fn read_question_name(packet: &[u8]) -> Result<(String, usize), PacketError> {
    let mut pos = DNS_HEADER_LEN;
    let mut name = String::with_capacity(64);

    loop {
        let Some(&len_byte) = packet.get(pos) else {
            return Err(PacketError::UnterminatedName);
        };
        let label_len = len_byte as usize;
        pos += 1;

        if label_len == 0 {
            return Ok((name, pos));
        }

        if pos + label_len > packet.len() {
            return Err(PacketError::LabelOverrun {
                offset: pos - 1,
                label_len,
                packet_len: packet.len(),
            });
        }

        if !name.is_empty() {
            name.push('.');
        }
        push_label(&mut name, &packet[pos..pos + label_len]);
        pos += label_len;
    }
}

fn push_label(name: &mut String, label: &[u8]) {
    for &byte in label {
        match byte {
            b'.' | b'\\' => push_escaped(name, byte),
            b if b.is_ascii_graphic() => name.push(b.to_ascii_lowercase() as char),
            b => push_escaped(name, b),
        }
    }
}

#[inline]
fn push_escaped(name: &mut String, byte: u8) {
    name.push('\\');
    name.push(char::from(b'0' + byte / 100));
    name.push(char::from(b'0' + byte / 10 % 10));
    name.push(char::from(b'0' + byte % 10));
}

fn read_question_kind(packet: &[u8], name_end: usize) -> Option<QuestionKind> {
    let fixed = packet.get(name_end..name_end + 4)?;
    Some(QuestionKind {
        qtype: u16::from_be_bytes([fixed[0], fixed[1]]),
        qclass: u16::from_be_bytes([fixed[2], fixed[3]]),
    })
}

/// Build the NXDOMAIN answer for a blocked query.
///
/// Layout: original transaction id, flags `0x81 0x83`, QDCOUNT=1,
/// AN/NS/ARCOUNT=0, then every byte of the original packet from offset 12.
pub fn synthesize_blocked(query: &ParsedQuery) -> Bytes {
    let question = &query.raw[DNS_HEADER_LEN..];
    let mut out = BytesMut::with_capacity(DNS_HEADER_LEN + question.len());

    out.put_slice(&query.transaction_id);
    out.put_slice(&NXDOMAIN_FLAGS);
    out.put_u16(1);
    out.put_u16(0);
    out.put_u16(0);
    out.put_u16(0);
    out.put_slice(question);

    out.freeze()
}

/// Copy `response` with its transaction id replaced by `transaction_id`.
///
/// Used when replaying a cached upstream answer to a new requester.
pub fn with_transaction_id(response: &Bytes, transaction_id: [u8; 2]) -> Bytes {
    if response.len() < 2 {
        return response.clone();
    }
    let mut out = BytesMut::from(response.as_ref());
    out[..2].copy_from_slice(&transaction_id);
    out.freeze()
}

/// Read the transaction id of any DNS message.
#[inline]
pub fn transaction_id(message: &[u8]) -> Option<[u8; 2]> {
    match message {
        [a, b, ..] => Some([*a, *b]),
        _ => None,
    }
}

/// Read QTYPE/QCLASS of the first question of any DNS message.
pub fn question_kind(message: &[u8]) -> Option<QuestionKind> {
    if message.len() < DNS_HEADER_LEN {
        return None;
    }
    let (_, name_end) = read_question_name(message).ok()?;
    read_question_kind(message, name_end)
}
