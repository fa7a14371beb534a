#![allow(dead_code)]
use hickory_proto::op::{Message, MessageType, ResponseCode};
use hickory_proto::rr::rdata::{A, TXT};
use hickory_proto::rr::{RData, Record};
use std::net::{Ipv4Addr, SocketAddr};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tokio::net::UdpSocket;
use tokio::sync::oneshot;

#[derive(Debug, Clone, Copy)]
pub enum MockBehavior {
    /// One A record for whatever was asked.
    Answer { ip: Ipv4Addr, ttl: u32 },
    NxDomain,
    /// `count` TXT records of 200 bytes each, well past 4 KiB on the wire.
    LargeTxt { count: usize },
    /// Counts datagrams, never replies.
    Silent,
}

pub struct MockDnsServer {
    addr: SocketAddr,
    received: Arc<AtomicUsize>,
    shutdown_tx: Option<oneshot::Sender<()>>,
}

impl MockDnsServer {
    pub async fn start(behavior: MockBehavior) -> Result<Self, std::io::Error> {
        let socket = UdpSocket::bind(SocketAddr::from(([127, 0, 0, 1], 0))).await?;
        let addr = socket.local_addr()?;
        let received = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&received);

        let (shutdown_tx, mut shutdown_rx) = oneshot::channel();

        tokio::spawn(async move {
            let mut buf = vec![0u8; 4096];

            loop {
                tokio::select! {
                    _ = &mut shutdown_rx => break,
                    result = socket.recv_from(&mut buf) => {
                        let Ok((len, peer)) = result else { continue };
                        counter.fetch_add(1, Ordering::SeqCst);

                        if let Some(reply) = Self::build_reply(&buf[..len], behavior) {
                            let _ = socket.send_to(&reply, peer).await;
                        }
                    }
                }
            }
        });

        Ok(Self {
            addr,
            received,
            shutdown_tx: Some(shutdown_tx),
        })
    }

    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    pub fn received(&self) -> usize {
        self.received.load(Ordering::SeqCst)
    }

    fn build_reply(query: &[u8], behavior: MockBehavior) -> Option<Vec<u8>> {
        let query = Message::from_vec(query).ok()?;

        let mut reply = Message::new();
        reply
            .set_id(query.id())
            .set_message_type(MessageType::Response)
            .set_op_code(query.op_code())
            .set_recursion_desired(query.recursion_desired())
            .set_recursion_available(true);
        reply.add_queries(query.queries().to_vec());

        match behavior {
            MockBehavior::Silent => return None,
            MockBehavior::NxDomain => {
                reply.set_response_code(ResponseCode::NXDomain);
            }
            MockBehavior::LargeTxt { count } => {
                let name = query.queries().first()?.name().clone();
                for i in 0..count {
                    let text = format!("{:03}{}", i, "x".repeat(197));
                    reply.add_answer(Record::from_rdata(
                        name.clone(),
                        60,
                        RData::TXT(TXT::new(vec![text])),
                    ));
                }
            }
            MockBehavior::Answer { ip, ttl } => {
                let name = query.queries().first()?.name().clone();
                reply.add_answer(Record::from_rdata(name, ttl, RData::A(A(ip))));
            }
        }

        reply.to_vec().ok()
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
