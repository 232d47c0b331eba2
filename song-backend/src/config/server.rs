use std::net::{IpAddr, SocketAddr};

use educe::Educe;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Educe)]
#[educe(Default)]
#[serde(default)]
pub struct Server {
    #[educe(Default(expression = IpAddr::from([127, 0, 0, 1])))]
    pub host: IpAddr,
    #[educe(Default(expression = 3000))]
    pub port: u16,
}

impl Server {
    pub fn to_socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}
