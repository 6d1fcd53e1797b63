/// Compatibility domain - device, policy and support-matrix models plus the
/// pure services that join them.
///
/// Nothing in this module performs I/O.
pub mod domain;
pub mod services;
