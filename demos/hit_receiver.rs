use std::net::UdpSocket;

use clap::Parser;
use rosc::{decoder, OscMessage, OscPacket, OscType};

/// Watch what the emitter sends: prints every /hit and /state it receives.
#[derive(Parser, Debug)]
#[command(name = "hit_receiver")]
struct Args {
    /// Address to listen on
    #[arg(long, default_value = "127.0.0.1:9000")]
    bind: String,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    let socket = UdpSocket::bind(&args.bind)?;
    println!("Listening for /hit and /state on {}", args.bind);

    let mut buf = [0u8; decoder::MTU];
    loop {
        match socket.recv_from(&mut buf) {
            Ok((size, peer)) => match decoder::decode_udp(&buf[..size]) {
                Ok((_, packet)) => print_packet(&packet),
                Err(e) => eprintln!("Failed to decode OSC from {}: {}", peer, e),
            },
            Err(e) => eprintln!("Failed to receive: {}", e),
        }
    }
}

fn print_packet(packet: &OscPacket) {
    match packet {
        OscPacket::Message(msg) => print_message(msg),
        OscPacket::Bundle(bundle) => {
            for inner in &bundle.content {
                print_packet(inner);
            }
        }
    }
}

fn print_message(msg: &OscMessage) {
    match (msg.addr.as_str(), msg.args.as_slice()) {
        ("/hit", [OscType::Int(id), OscType::Float(x), OscType::Float(y), OscType::Float(energy), OscType::Int(surface)]) => {
            println!("hit   id={} x={:.2} y={:.2} energy={:.2} surface={}", id, x, y, energy, surface);
        }
        ("/state", [OscType::Float(activity), OscType::Float(gesture), OscType::Float(presence)]) => {
            println!("state activity={:.2} gesture={:.2} presence={:.2}", activity, gesture, presence);
        }
        _ => println!("other {} {:?}", msg.addr, msg.args),
    }
}
