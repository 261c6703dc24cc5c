#![allow(dead_code)]
use ferrous_resolve_infrastructure::dns::codec::MessageBuilder;
use hickory_proto::op::{Message, MessageType, OpCode, ResponseCode};
use hickory_proto::rr::rdata::A;
use hickory_proto::rr::{RData, Record, RecordType};
use std::net::{Ipv4Addr, SocketAddr};
use std::sync::{Arc, Mutex};
use tokio::net::UdpSocket;
use tokio::sync::oneshot;

/// Authoritative-looking UDP server for tests.
///
/// Answers every A question with a fixed address and everything else with
/// an empty NOERROR. Records the RD flag of each query it receives.
pub struct MockDnsServer {
    addr: SocketAddr,
    recursion_desired: Arc<Mutex<Vec<bool>>>,
    shutdown_tx: Option<oneshot::Sender<()>>,
}

impl MockDnsServer {
    /// Starts on an ephemeral loopback port.
    pub async fn start(address: Ipv4Addr) -> Result<Self, std::io::Error> {
        let socket = UdpSocket::bind(SocketAddr::from(([127, 0, 0, 1], 0))).await?;
        let addr = socket.local_addr()?;

        let recursion_desired = Arc::new(Mutex::new(Vec::new()));
        let seen = Arc::clone(&recursion_desired);
        let (shutdown_tx, mut shutdown_rx) = oneshot::channel();

        tokio::spawn(async move {
            let mut buf = vec![0u8; 512];

            loop {
                tokio::select! {
                    _ = &mut shutdown_rx => {
                        break;
                    }
                    result = socket.recv_from(&mut buf) => {
                        if let Ok((len, peer)) = result {
                            let Ok(query) = Message::from_vec(&buf[..len]) else {
                                continue;
                            };
                            seen.lock().unwrap().push(query.recursion_desired());

                            if let Some(response) = Self::build_response(&query, address) {
                                let _ = socket.send_to(&response, peer).await;
                            }
                        }
                    }
                }
            }
        });

        Ok(Self {
            addr,
            recursion_desired,
            shutdown_tx: Some(shutdown_tx),
        })
    }

    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    pub fn port(&self) -> u16 {
        self.addr.port()
    }

    /// RD flag of every query received so far.
    pub fn recursion_desired(&self) -> Vec<bool> {
        self.recursion_desired.lock().unwrap().clone()
    }

    fn build_response(query: &Message, address: Ipv4Addr) -> Option<Vec<u8>> {
        let mut response = Message::new(query.id(), MessageType::Response, OpCode::Query);
        response.set_authoritative(true);
        response.set_response_code(ResponseCode::NoError);

        for question in query.queries() {
            response.add_query(question.clone());
            if question.query_type() == RecordType::A {
                response.add_answer(Record::from_rdata(
                    question.name().clone(),
                    60,
                    RData::A(A(address)),
                ));
            }
        }

        MessageBuilder::serialize_message(&response).ok()
    }

    pub fn shutdown(mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}

impl Drop for MockDnsServer {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}
