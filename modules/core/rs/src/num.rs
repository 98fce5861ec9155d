use std::fmt::{Debug, Display};

/// T values are primitive integers
pub trait PrimInt: ::num::PrimInt + Debug + Default {}
impl<T: ::num::PrimInt + Debug + Default> PrimInt for T {}

/// T values are non-negative primitive integers
pub trait PrimUInt: PrimInt + ::num::Unsigned {}

impl<T: PrimInt + ::num::Unsigned> PrimUInt for T {}

/// T values are alignment scores: signed primitive integers.
/// Scores can be negative, so unsigned integers are not valid scores.
pub trait Score: PrimInt + ::num::Signed + Display {}

impl<T: PrimInt + ::num::Signed + Display> Score for T {}
