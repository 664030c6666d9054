//! Utility macros.

macro_rules! impl_binop {
    ($op:ident, $method:ident, $tl:ty, $tr:ty, $to:ty, |$lhs:ident, $rhs:ident| $body:block) => {
        impl<'a> ::std::ops::$op<&'a $tr> for &'a $tl {
            type Output = $to;

            #[inline]
            fn $method(self, rhs: &'a $tr) -> Self::Output {
                let $lhs = *self;
                let $rhs = *rhs;
                $body
            }
        }

        impl ::std::ops::$op<$tr> for &$tl {
            type Output = $to;

            #[inline]
            fn $method(self, rhs: $tr) -> Self::Output {
                self.$method(&rhs)
            }
        }

        impl<'a> ::std::ops::$op<&'a $tr> for $tl {
            type Output = $to;

            #[inline]
            fn $method(self, rhs: &'a $tr) -> Self::Output {
                (&self).$method(rhs)
            }
        }

        impl ::std::ops::$op<$tr> for $tl {
            type Output = $to;

            #[inline]
            fn $method(self, rhs: $tr) -> Self::Output {
                (&self).$method(&rhs)
            }
        }
    };
}

macro_rules! impl_unary_op {
    ($op:ident, $method:ident, $t:ty, $to:ty, |$this:ident| $body:block) => {
        impl ::std::ops::$op for &$t {
            type Output = $to;

            #[inline]
            fn $method(self) -> Self::Output {
                let $this = *self;
                $body
            }
        }

        impl ::std::ops::$op for $t {
            type Output = $to;

            #[inline]
            fn $method(self) -> Self::Output {
                (&self).$method()
            }
        }
    };
}

/// Implements a compound assignment operator in terms of the corresponding
/// binary operator.
macro_rules! impl_binop_assign {
    ($op:ident, $method:ident, $tl:ty, $tr:ty, $binop:ident, $binop_method:ident) => {
        impl ::std::ops::$op<&$tr> for $tl {
            #[inline]
            fn $method(&mut self, rhs: &$tr) {
                *self = ::std::ops::$binop::$binop_method(*self, *rhs);
            }
        }

        impl ::std::ops::$op<$tr> for $tl {
            #[inline]
            fn $method(&mut self, rhs: $tr) {
                self.$method(&rhs);
            }
        }
    };
}

/// Implements component-wise absolute and relative approximate equality for a
/// vector type with `f32` components.
macro_rules! impl_approx_eq {
    ($t:ty, [$($field:ident),+]) => {
        impl ::approx::AbsDiffEq for $t {
            type Epsilon = f32;

            fn default_epsilon() -> Self::Epsilon {
                f32::default_epsilon()
            }

            fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
                true $(&& self.$field.abs_diff_eq(&other.$field, epsilon))+
            }
        }

        impl ::approx::RelativeEq for $t {
            fn default_max_relative() -> Self::Epsilon {
                f32::default_max_relative()
            }

            fn relative_eq(
                &self,
                other: &Self,
                epsilon: Self::Epsilon,
                max_relative: Self::Epsilon,
            ) -> bool {
                true $(&& self.$field.relative_eq(&other.$field, epsilon, max_relative))+
            }
        }
    };
}

/// Implements the component accessors, array views and bounds-checked
/// indexing shared by all vector types.
macro_rules! impl_components {
    ($t:ty, $c:ty, $n:literal, [$($idx:literal => $field:ident, $field_mut:ident);+ $(;)?]) => {
        impl $t {
            $(
                #[doc = concat!("Returns the ", stringify!($field), "-component.")]
                #[inline]
                pub const fn $field(&self) -> $c {
                    self.$field
                }

                #[doc = concat!("Returns a mutable reference to the ", stringify!($field), "-component.")]
                #[inline]
                pub fn $field_mut(&mut self) -> &mut $c {
                    &mut self.$field
                }
            )+

            /// Returns the components as an array.
            #[inline]
            pub fn as_array(&self) -> &[$c; $n] {
                bytemuck::cast_ref(self)
            }

            /// Returns the components as a mutable array.
            #[inline]
            pub fn as_array_mut(&mut self) -> &mut [$c; $n] {
                bytemuck::cast_mut(self)
            }

            /// Returns the component with the given index without checking
            /// bounds in release builds.
            ///
            /// # Safety
            /// `idx` must be smaller than the number of components.
            #[inline]
            pub unsafe fn get_unchecked(&self, idx: usize) -> $c {
                debug_assert!(idx < $n, "index out of bounds");
                // SAFETY: The caller guarantees that the index is in bounds.
                unsafe { *self.as_array().get_unchecked(idx) }
            }
        }

        impl From<[$c; $n]> for $t {
            #[inline]
            fn from(components: [$c; $n]) -> Self {
                bytemuck::cast(components)
            }
        }

        impl From<$t> for [$c; $n] {
            #[inline]
            fn from(vector: $t) -> Self {
                bytemuck::cast(vector)
            }
        }

        impl ::std::ops::Index<usize> for $t {
            type Output = $c;

            #[inline]
            fn index(&self, idx: usize) -> &Self::Output {
                match idx {
                    $($idx => &self.$field,)+
                    _ => panic!("index out of bounds"),
                }
            }
        }

        impl ::std::ops::IndexMut<usize> for $t {
            #[inline]
            fn index_mut(&mut self, idx: usize) -> &mut Self::Output {
                match idx {
                    $($idx => &mut self.$field,)+
                    _ => panic!("index out of bounds"),
                }
            }
        }

        impl ::std::fmt::Debug for $t {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.debug_struct(stringify!($t))
                    $(.field(stringify!($field), &self.$field))+
                    .finish()
            }
        }
    };
}

/// Defines functions that write the result of the corresponding by-value
/// function to an output parameter instead of returning it.
///
/// Vector arguments are taken by reference and scalar arguments, listed after
/// the semicolon, by value.
macro_rules! define_into_variants {
    ($(
        $name:ident => $into:ident($($arg:ident: $ty:ty),+ $(; $($sarg:ident: $sty:ty),+)?) -> $out:ty;
    )+) => {
        $(
            #[doc = concat!("Like [`", stringify!($name), "`], but writes the result to `result`.")]
            #[inline]
            pub fn $into($($arg: &$ty,)+ $($($sarg: $sty,)+)? result: &mut $out) {
                *result = $name($(*$arg,)+ $($($sarg,)+)?);
            }
        )+
    };
}
