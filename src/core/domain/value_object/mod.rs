mod hostname;
mod ipv4_address;
mod pihole_host;
mod pihole_port;
mod pihole_url;

pub use hostname::is_valid_hostname;
pub use ipv4_address::is_valid_ipv4;
pub use pihole_host::PiholeHost;
pub use pihole_port::PiholePort;
pub use pihole_url::PiholeUrl;

pub(crate) use hostname::validate_hostname;
pub(crate) use ipv4_address::validate_ipv4;
