//! Macros for defining units, conversions, and derived-operation rules.

/// Generates `From` trait implementations for all pairs of units within a
/// kind, for every variant and magnitude type.
#[macro_export]
macro_rules! impl_unit_conversions {
    // Base case: single unit, no conversions needed
    ($unit:ty) => {};

    // Recursive case: implement conversions from first to all others, then recurse
    ($first:ty, $($rest:ty),+ $(,)?) => {
        $(
            impl<V: $crate::Variant, F: $crate::Magnitude> From<$crate::Scalar<$first, V, F>>
                for $crate::Scalar<$rest, V, F>
            {
                fn from(value: $crate::Scalar<$first, V, F>) -> Self {
                    value.to::<$rest>()
                }
            }

            impl<V: $crate::Variant, F: $crate::Magnitude> From<$crate::Scalar<$rest, V, F>>
                for $crate::Scalar<$first, V, F>
            {
                fn from(value: $crate::Scalar<$rest, V, F>) -> Self {
                    value.to::<$first>()
                }
            }
        )+

        // Recurse with the rest of the units
        $crate::impl_unit_conversions!($($rest),+);
    };
}

/// Declares multiplication rules between quantity kinds.
///
/// Each entry `(A, B) => C` states that a scalar of kind `A` times a scalar
/// of kind `B` yields kind `C`. Declare the commuted pair too if both operand
/// orders should typecheck.
///
/// ```rust,ignore
/// derived_mul! {
///     (Length, Length) => Area,
///     (Length, Force) => Energy,
/// }
/// ```
#[macro_export]
macro_rules! derived_mul {
    ($(($a:ty, $b:ty) => $out:ty),+ $(,)?) => {
        $(
            impl $crate::KindMul for ($a, $b) {
                type Output = $out;
            }
        )+
    };
}

/// Declares division rules between quantity kinds.
///
/// Each entry `(A, B) => C` states that a scalar of kind `A` divided by a
/// scalar of kind `B` yields kind `C`. Same-kind pairs `(K, K)` must not be
/// declared; they are covered by the blanket dimensionless rule.
///
/// ```rust,ignore
/// derived_div! {
///     (Length, Duration) => Speed,
/// }
/// ```
#[macro_export]
macro_rules! derived_div {
    ($(($a:ty, $b:ty) => $out:ty),+ $(,)?) => {
        $(
            impl $crate::KindDiv for ($a, $b) {
                type Output = $out;
            }
        )+
    };
}
