//! Well-known ALPN protocol identifiers
//!
//! A constant table of registered (and a few historical) protocol IDs with
//! their descriptions, specification references and deprecation status. The
//! table is advisory: nothing in the codec or negotiator consults it.
//!
//! | ID            | Family | Reference            | Deprecated |
//! |---------------|--------|----------------------|------------|
//! | `http/1.1`    | HTTP   | RFC 7230-7237        |            |
//! | `h2`          | HTTP   | RFC 7540             |            |
//! | `h2c`         | HTTP   |                      |            |
//! | `h3`          | HTTP   | RFC 9114             |            |
//! | `websocket`   | Other  | RFC 6455             |            |
//! | `spdy/2`      | Other  |                      | yes        |
//! | `spdy/3`      | Other  |                      | yes        |
//! | `spdy/3.1`    | Other  |                      | yes        |
//! | `grpc`        | Other  | gRPC Specification   |            |
//! | `mqtt`        | Other  | ISO/IEC 20922        |            |
//! | `xmpp-client` | Other  | RFC 6120             |            |
//! | `xmpp-server` | Other  | RFC 6120             |            |
//! | `ftp`         | Other  | RFC 959              |            |
//! | `imap`        | Email  | RFC 3501             |            |
//! | `pop3`        | Email  | RFC 1939             |            |
//! | `smtp`        | Email  | RFC 5321             |            |
//! | `acme-tls/1`  | Other  | RFC 8737             |            |

/// Protocol identifier constants.
pub mod protocols {
    /// HTTP/1.1
    pub const HTTP_1_1: &str = "http/1.1";
    /// HTTP/2 over TLS
    pub const HTTP_2: &str = "h2";
    /// HTTP/2 over cleartext TCP
    pub const HTTP_2_CLEARTEXT: &str = "h2c";
    /// HTTP/3
    pub const HTTP_3: &str = "h3";
    /// WebSocket
    pub const WEBSOCKET: &str = "websocket";
    /// SPDY/2 (deprecated)
    pub const SPDY_2: &str = "spdy/2";
    /// SPDY/3 (deprecated)
    pub const SPDY_3: &str = "spdy/3";
    /// SPDY/3.1 (deprecated)
    pub const SPDY_3_1: &str = "spdy/3.1";
    /// gRPC over HTTP/2
    pub const GRPC: &str = "grpc";
    /// MQTT over TLS
    pub const MQTT: &str = "mqtt";
    /// XMPP client connections
    pub const XMPP_CLIENT: &str = "xmpp-client";
    /// XMPP server connections
    pub const XMPP_SERVER: &str = "xmpp-server";
    /// FTP over TLS
    pub const FTP: &str = "ftp";
    /// IMAP over TLS
    pub const IMAP: &str = "imap";
    /// POP3 over TLS
    pub const POP3: &str = "pop3";
    /// SMTP over TLS
    pub const SMTP: &str = "smtp";
    /// ACME TLS-ALPN-01 challenge
    pub const ACME_TLS: &str = "acme-tls/1";
}

use protocols::*;

/// Description returned for identifiers not in the catalog.
pub const UNKNOWN_DESCRIPTION: &str = "Unknown protocol";

/// Protocol family used for grouping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProtocolFamily {
    /// HTTP versions
    Http,
    /// Mail access and transfer
    Email,
    /// Everything else
    Other,
}

/// Catalog entry for one protocol.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProtocolInfo {
    /// Protocol identifier.
    pub id: &'static str,
    /// Human-readable description.
    pub description: &'static str,
    /// Defining specification, when there is one.
    pub rfc: Option<&'static str>,
    /// Whether the protocol is obsolete.
    pub deprecated: bool,
    /// Family the protocol belongs to.
    pub family: ProtocolFamily,
}

const fn entry(
    id: &'static str,
    description: &'static str,
    rfc: Option<&'static str>,
    deprecated: bool,
    family: ProtocolFamily,
) -> ProtocolInfo {
    ProtocolInfo {
        id,
        description,
        rfc,
        deprecated,
        family,
    }
}

/// Every catalogued protocol, in declaration order.
pub static CATALOG: &[ProtocolInfo] = &[
    entry(
        HTTP_1_1,
        "Hypertext Transfer Protocol version 1.1",
        Some("RFC 7230-7237"),
        false,
        ProtocolFamily::Http,
    ),
    entry(
        HTTP_2,
        "Hypertext Transfer Protocol version 2",
        Some("RFC 7540"),
        false,
        ProtocolFamily::Http,
    ),
    entry(
        HTTP_2_CLEARTEXT,
        "HTTP/2 over cleartext",
        None,
        false,
        ProtocolFamily::Http,
    ),
    entry(
        HTTP_3,
        "Hypertext Transfer Protocol version 3",
        Some("RFC 9114"),
        false,
        ProtocolFamily::Http,
    ),
    entry(
        WEBSOCKET,
        "WebSocket Protocol",
        Some("RFC 6455"),
        false,
        ProtocolFamily::Other,
    ),
    entry(
        SPDY_2,
        "SPDY Protocol version 2 (deprecated)",
        None,
        true,
        ProtocolFamily::Other,
    ),
    entry(
        SPDY_3,
        "SPDY Protocol version 3 (deprecated)",
        None,
        true,
        ProtocolFamily::Other,
    ),
    entry(
        SPDY_3_1,
        "SPDY Protocol version 3.1 (deprecated)",
        None,
        true,
        ProtocolFamily::Other,
    ),
    entry(
        GRPC,
        "gRPC over HTTP/2",
        Some("gRPC Specification"),
        false,
        ProtocolFamily::Other,
    ),
    entry(
        MQTT,
        "Message Queuing Telemetry Transport",
        Some("ISO/IEC 20922"),
        false,
        ProtocolFamily::Other,
    ),
    entry(
        XMPP_CLIENT,
        "Extensible Messaging and Presence Protocol (Client)",
        Some("RFC 6120"),
        false,
        ProtocolFamily::Other,
    ),
    entry(
        XMPP_SERVER,
        "Extensible Messaging and Presence Protocol (Server)",
        Some("RFC 6120"),
        false,
        ProtocolFamily::Other,
    ),
    entry(
        FTP,
        "File Transfer Protocol",
        Some("RFC 959"),
        false,
        ProtocolFamily::Other,
    ),
    entry(
        IMAP,
        "Internet Message Access Protocol",
        Some("RFC 3501"),
        false,
        ProtocolFamily::Email,
    ),
    entry(
        POP3,
        "Post Office Protocol version 3",
        Some("RFC 1939"),
        false,
        ProtocolFamily::Email,
    ),
    entry(
        SMTP,
        "Simple Mail Transfer Protocol",
        Some("RFC 5321"),
        false,
        ProtocolFamily::Email,
    ),
    entry(
        ACME_TLS,
        "Automatic Certificate Management Environment",
        Some("RFC 8737"),
        false,
        ProtocolFamily::Other,
    ),
];

/// Look up a protocol's catalog entry.
pub fn lookup(protocol: impl AsRef<[u8]>) -> Option<&'static ProtocolInfo> {
    let protocol = protocol.as_ref();
    CATALOG.iter().find(|info| info.id.as_bytes() == protocol)
}

/// All catalogued identifiers.
pub fn all_protocols() -> impl Iterator<Item = &'static str> {
    CATALOG.iter().map(|info| info.id)
}

fn family(wanted: ProtocolFamily) -> impl Iterator<Item = &'static str> {
    CATALOG
        .iter()
        .filter(move |info| info.family == wanted)
        .map(|info| info.id)
}

/// HTTP family identifiers.
pub fn http_protocols() -> impl Iterator<Item = &'static str> {
    family(ProtocolFamily::Http)
}

/// Email family identifiers.
pub fn email_protocols() -> impl Iterator<Item = &'static str> {
    family(ProtocolFamily::Email)
}

/// Deprecated identifiers.
pub fn deprecated_protocols() -> impl Iterator<Item = &'static str> {
    CATALOG
        .iter()
        .filter(|info| info.deprecated)
        .map(|info| info.id)
}

/// Whether the protocol is in the catalog.
pub fn is_known(protocol: impl AsRef<[u8]>) -> bool {
    lookup(protocol).is_some()
}

/// Whether the protocol is an HTTP version.
pub fn is_http_protocol(protocol: impl AsRef<[u8]>) -> bool {
    lookup(protocol).is_some_and(|info| info.family == ProtocolFamily::Http)
}

/// Whether the protocol is a mail protocol.
pub fn is_email_protocol(protocol: impl AsRef<[u8]>) -> bool {
    lookup(protocol).is_some_and(|info| info.family == ProtocolFamily::Email)
}

/// Whether the protocol is catalogued as deprecated.
pub fn is_deprecated(protocol: impl AsRef<[u8]>) -> bool {
    lookup(protocol).is_some_and(|info| info.deprecated)
}

/// Description of the protocol, or [`UNKNOWN_DESCRIPTION`].
pub fn description(protocol: impl AsRef<[u8]>) -> &'static str {
    lookup(protocol).map_or(UNKNOWN_DESCRIPTION, |info| info.description)
}

/// Defining specification of the protocol, if catalogued.
pub fn rfc(protocol: impl AsRef<[u8]>) -> Option<&'static str> {
    lookup(protocol).and_then(|info| info.rfc)
}
