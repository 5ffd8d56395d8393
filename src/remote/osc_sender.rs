use std::net::{SocketAddr, ToSocketAddrs, UdpSocket};

use rosc::{encoder, OscMessage, OscPacket};

use crate::error::EmitError;
use crate::event::{HitEvent, StateEvent};

/// OSC client bound to one destination. Each send encodes a single message
/// and fires one datagram; nothing is awaited.
pub struct OscSender {
    socket: UdpSocket,
    target: SocketAddr,
}

impl OscSender {
    /// Resolve `host:port` and bind an ephemeral socket of the matching family.
    pub fn new(host: &str, port: u16) -> Result<Self, EmitError> {
        let target_str = format!("{}:{}", host, port);
        let target = (host, port)
            .to_socket_addrs()
            .map_err(|source| EmitError::Resolve { target: target_str.clone(), source })?
            .next()
            .ok_or_else(|| EmitError::NoAddress { target: target_str })?;

        let bind_addr = if target.is_ipv4() { "0.0.0.0:0" } else { "[::]:0" };
        let socket = UdpSocket::bind(bind_addr).map_err(EmitError::Bind)?;

        match socket.local_addr() {
            Ok(local) => tracing::debug!(%local, dest = %target, "OSC sender ready"),
            Err(_) => tracing::debug!(dest = %target, "OSC sender ready"),
        }

        Ok(OscSender { socket, target })
    }

    pub fn target(&self) -> SocketAddr {
        self.target
    }

    pub fn send_hit(&self, hit: &HitEvent) -> Result<(), EmitError> {
        self.send_osc_message(hit.to_osc())
    }

    pub fn send_state(&self, state: &StateEvent) -> Result<(), EmitError> {
        self.send_osc_message(state.to_osc())
    }

    fn send_osc_message(&self, msg: OscMessage) -> Result<(), EmitError> {
        let addr = msg.addr.clone();
        let packet = OscPacket::Message(msg);
        let msg_buf = encoder::encode(&packet)?;
        match self.socket.send_to(&msg_buf, self.target) {
            Ok(bytes_sent) => {
                tracing::trace!(bytes_sent, dest = %self.target, %addr, "sent OSC");
                Ok(())
            }
            Err(source) => Err(EmitError::Send { target: self.target.to_string(), source }),
        }
    }
}
