#![allow(dead_code)]

pub mod mock_ports;
pub mod packets;
