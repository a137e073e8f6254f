/// Helper macro to provide implementations of binary operator traits
///
/// Generates the impl for every combination of owned/borrowed operands.
/// The body receives owned copies of both operands as `$a` and `$b`.
///
/// I would use the `auto_ops`/`impl_ops` crates, but they don't support const generics, so roll my own
#[macro_export]
macro_rules! impl_op {
    (impl $({$($bounds:tt)*})? $($operator:ident)::+ : fn $fn_name:ident ($a:ident : $a_ty:ty, $b:ident : $b_ty:ty) -> $ret_ty:ty $body:block) => {
        $crate::impl_op!(@inner impl $({$($bounds)*})? $($operator)::+ : fn $fn_name ($a:  $a_ty, $b:  $b_ty) -> $ret_ty $body);
        $crate::impl_op!(@inner impl $({$($bounds)*})? $($operator)::+ : fn $fn_name ($a:  $a_ty, $b: &$b_ty) -> $ret_ty $body);
        $crate::impl_op!(@inner impl $({$($bounds)*})? $($operator)::+ : fn $fn_name ($a: &$a_ty, $b:  $b_ty) -> $ret_ty $body);
        $crate::impl_op!(@inner impl $({$($bounds)*})? $($operator)::+ : fn $fn_name ($a: &$a_ty, $b: &$b_ty) -> $ret_ty $body);
    };

    (@inner impl $({$($bounds:tt)*})? $($operator:ident)::+ : fn $fn_name:ident ($a:ident: $a_ty:ty, $b:ident : $b_ty:ty) -> $ret_ty:ty $body:block) => {
        impl $($($bounds)*)? $($operator)::+<$b_ty> for $a_ty {
            type Output = $ret_ty;

            #[inline]
            fn $fn_name(self, rhs: $b_ty) -> Self::Output {
                // Cloning is the easiest way to ensure that we get a owned value, from either a reference or owned val
                #[allow(unused_mut, clippy::clone_on_copy)]
                let (mut $a, $b) = (self.clone(), rhs.clone());
                $body
            }
        }
    };
}

/// Same as [impl_op], for the unary operators (`Neg`)
#[macro_export]
macro_rules! impl_op_unary {
    (impl $({$($bounds:tt)*})? $($operator:ident)::+ : fn $fn_name:ident ($a:ident : $a_ty:ty) -> $ret_ty:ty $body:block) => {
        $crate::impl_op_unary!(@inner impl $({$($bounds)*})? $($operator)::+ : fn $fn_name ($a:  $a_ty) -> $ret_ty $body);
        $crate::impl_op_unary!(@inner impl $({$($bounds)*})? $($operator)::+ : fn $fn_name ($a: &$a_ty) -> $ret_ty $body);
    };

    (@inner impl $({$($bounds:tt)*})? $($operator:ident)::+ : fn $fn_name:ident ($a:ident: $a_ty:ty) -> $ret_ty:ty $body:block) => {
        impl $($($bounds)*)? $($operator)::+ for $a_ty {
            type Output = $ret_ty;

            #[inline]
            fn $fn_name(self) -> Self::Output {
                #[allow(unused_mut, clippy::clone_on_copy)]
                let mut $a = self.clone();
                $body
            }
        }
    };
}

/// See [impl_op]
///
/// The body mutates `$a`, which is written back into `self` afterwards. The right-hand operand is never touched.
#[macro_export]
macro_rules! impl_op_assign {
    (impl $({$($bounds:tt)*})? $($operator:ident)::+ : fn $fn_name:ident ($a:ident : $a_ty:ty, $b:ident : $b_ty:ty) $body:block) => {
        $crate::impl_op_assign!(@inner impl $({$($bounds)*})? $($operator)::+ : fn $fn_name ($a: $a_ty, $b:  $b_ty) $body);
        $crate::impl_op_assign!(@inner impl $({$($bounds)*})? $($operator)::+ : fn $fn_name ($a: $a_ty, $b: &$b_ty) $body);
    };

    (@inner impl $({$($bounds:tt)*})? $($operator:ident)::+ : fn $fn_name:ident ($a:ident: $lhs:ty, $b:ident : $rhs:ty) $body:block) => {
        impl $($($bounds)*)? $($operator)::+<$rhs> for $lhs {
            #[inline]
            fn $fn_name(&mut self, rhs: $rhs) {
                // Cloning is the easiest way to ensure that we get a owned value, from either a reference or owned val
                #[allow(unused_mut, clippy::clone_on_copy)]
                let (mut $a, $b) = (self.clone(), rhs.clone());
                $body;
                *self = $a;
            }
        }
    };
}

/// Forwards a list of per-channel float functions (`abs()`, `clamp(..)`, ...) onto a type that has a `map()` method
#[macro_export]
macro_rules! forward_fn {
    ( $(

        impl $({$($bounds:tt)*})? $type:ty {$(
            $fn:ident($( $arg_name:ident : $arg_type:tt),*) $(,)? );*
        $(;)? }

    )* ) =>

    {$(

        impl $($($bounds)*)? $type { $(
            pub fn $fn (&self, $( $arg_name : $arg_type ),* ) -> Self {
                self.map(|c| c.$fn( $($arg_name),* ))
            }
        )* }

    )* };
}
