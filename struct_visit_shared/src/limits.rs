//! The translation-time limits of the member registration mechanism.

/// The maximum amount of members that can be registered for a single structure.
///
/// Registering more members than this is a compile-time error,
/// telling the user to enable the `high_member_limit` feature,
/// which raises the ceiling to 1000.
///
/// This is a hard limit rather than a recoverable condition:
/// no code is generated for a structure that exceeds it.
#[cfg(not(feature = "high_member_limit"))]
pub const MAX_VISITABLE_MEMBERS: usize = 200;

/// The maximum amount of members that can be registered for a single structure.
///
/// This is the raised ceiling, enabled by the `high_member_limit` feature.
#[cfg(feature = "high_member_limit")]
pub const MAX_VISITABLE_MEMBERS: usize = 1000;
