/// Maximum drift allowed between an expense amount and the sum of its
/// allocations, and between two amounts considered "equal".
pub const SPLIT_TOLERANCE: f64 = 0.01;

/// Allocations at or below this are treated as "not involved" and pruned
/// before persistence. Absorbs float artifacts from equal division.
pub const INVOLVEMENT_EPSILON: f64 = 0.005;
