//! Protocol version handling

use semver::Version;

use crate::PROTOCOL_VERSION;

/// Parsed protocol version of this build
pub fn protocol_version() -> Version {
    Version::parse(PROTOCOL_VERSION).unwrap_or_else(|_| Version::new(0, 0, 0))
}

/// Check whether a peer's protocol version can talk to this build
///
/// Versions are compatible when the major versions match, and for `0.x`
/// releases the minor versions match as well. Unparseable versions are
/// never compatible.
pub fn is_compatible(peer: &str) -> bool {
    let Ok(peer) = Version::parse(peer) else {
        return false;
    };
    let ours = protocol_version();
    if ours.major != peer.major {
        return false;
    }
    ours.major > 0 || ours.minor == peer.minor
}
