//! Session port - the current user's privilege level

pub trait SessionPort: Send + Sync {
    /// True when the current user has gamemaster privilege
    fn is_gm(&self) -> bool;
}
