//! Declaration macros for kernels, quantity kinds and the relations between them.

/// Scaling of a kernel wrapper by a plain number: `q * k`, `k * q`, `q / k` and the compound forms,
/// for every payload shape.
macro_rules! impl_scaling {
    ($wrapper:ident) => {
        impl_scaling!(@payload $wrapper, N);
        impl_scaling!(@payload $wrapper, $crate::value::Vector<N>);
        impl_scaling!(@payload $wrapper, $crate::value::SymmetricDyadic<N>);
        impl_scaling!(@payload $wrapper, $crate::value::Dyadic<N>);
        impl_scaling!(@left $wrapper, f32);
        impl_scaling!(@left $wrapper, f64);
    };

    (@payload $wrapper:ident, $payload:ty) => {
        impl<K, N: $crate::Number> ::core::ops::Mul<N> for $wrapper<K, $payload> {
            type Output = Self;
            #[inline]
            fn mul(self, rhs: N) -> Self {
                Self::from_standard(self.value * rhs)
            }
        }

        impl<K, N: $crate::Number> ::core::ops::MulAssign<N> for $wrapper<K, $payload> {
            #[inline]
            fn mul_assign(&mut self, rhs: N) {
                self.value *= rhs;
            }
        }

        impl<K, N: $crate::Number> ::core::ops::Div<N> for $wrapper<K, $payload> {
            type Output = Self;
            #[inline]
            fn div(self, rhs: N) -> Self {
                Self::from_standard(self.value / rhs)
            }
        }

        impl<K, N: $crate::Number> ::core::ops::DivAssign<N> for $wrapper<K, $payload> {
            #[inline]
            fn div_assign(&mut self, rhs: N) {
                self.value /= rhs;
            }
        }
    };

    (@left $wrapper:ident, $float:ty) => {
        impl<K> ::core::ops::Mul<$wrapper<K, $float>> for $float {
            type Output = $wrapper<K, $float>;
            #[inline]
            fn mul(self, rhs: $wrapper<K, $float>) -> Self::Output {
                rhs * self
            }
        }

        impl<K> ::core::ops::Mul<$wrapper<K, $crate::value::Vector<$float>>> for $float {
            type Output = $wrapper<K, $crate::value::Vector<$float>>;
            #[inline]
            fn mul(self, rhs: Self::Output) -> Self::Output {
                rhs * self
            }
        }

        impl<K> ::core::ops::Mul<$wrapper<K, $crate::value::SymmetricDyadic<$float>>> for $float {
            type Output = $wrapper<K, $crate::value::SymmetricDyadic<$float>>;
            #[inline]
            fn mul(self, rhs: Self::Output) -> Self::Output {
                rhs * self
            }
        }

        impl<K> ::core::ops::Mul<$wrapper<K, $crate::value::Dyadic<$float>>> for $float {
            type Output = $wrapper<K, $crate::value::Dyadic<$float>>;
            #[inline]
            fn mul(self, rhs: Self::Output) -> Self::Output {
                rhs * self
            }
        }
    };
}

/// Declares a quantity kind marker together with its named alias.
///
/// ```ignore
/// quantity! {
///     /// Distance along a path.
///     Length(LengthKind): DimensionalScalar<LengthUnit>
/// }
/// ```
///
/// Dimensional kinds are additive unless declared `affine`. Dimensionless kinds name no unit
/// family.
macro_rules! quantity {
    ($(#[$meta:meta])* $name:ident($kind:ident): $kernel:ident<$unit:ty>) => {
        quantity!(@dimensional $(#[$meta])* $name($kind): $kernel<$unit>);
        impl $crate::Additive for $kind {}
    };

    ($(#[$meta:meta])* $name:ident($kind:ident): $kernel:ident<$unit:ty>, affine) => {
        quantity!(@dimensional $(#[$meta])* $name($kind): $kernel<$unit>);
    };

    ($(#[$meta:meta])* $name:ident($kind:ident): $kernel:ident) => {
        quantity!(@kind $(#[$meta])* $name($kind): $kernel);
        impl $crate::Additive for $kind {}
    };

    (@dimensional $(#[$meta:meta])* $name:ident($kind:ident): $kernel:ident<$unit:ty>) => {
        quantity!(@kind $(#[$meta])* $name($kind): $kernel);
        impl $crate::DimensionalKind for $kind {
            type Unit = $unit;
        }
    };

    (@kind $(#[$meta:meta])* $name:ident($kind:ident): $kernel:ident) => {
        #[doc = concat!("Kind marker of [`", stringify!($name), "`].")]
        #[derive(Debug)]
        pub enum $kind {}

        impl $crate::Kind for $kind {
            const NAME: &'static str = stringify!($name);
        }

        $(#[$meta])*
        pub type $name<N = f64> = $crate::$kernel<$kind, N>;
    };
}

/// Declares `A * B = C` between two scalar kinds, with the commuted product and both quotients `C /
/// A = B` and `C / B = A`.
macro_rules! impl_product {
    ($a:ident * $b:ident = $c:ident) => {
        impl_product!(@mul $a * $b = $c);
        impl_product!(@mul $b * $a = $c);
        impl_product!(@div $c / $a = $b);
        impl_product!(@div $c / $b = $a);
        assert_dimensions!($a * $b = $c);
    };

    (@mul $a:ident * $b:ident = $c:ident) => {
        impl<N: $crate::Number> ::core::ops::Mul<$b<N>> for $a<N> {
            type Output = $c<N>;
            #[inline]
            fn mul(self, rhs: $b<N>) -> $c<N> {
                $crate::Quantity::from_stored(
                    $crate::Quantity::stored(&self) * $crate::Quantity::stored(&rhs),
                )
            }
        }
    };

    (@div $c:ident / $a:ident = $b:ident) => {
        impl<N: $crate::Number> ::core::ops::Div<$a<N>> for $c<N> {
            type Output = $b<N>;
            #[inline]
            fn div(self, rhs: $a<N>) -> $b<N> {
                $crate::Quantity::from_stored(
                    $crate::Quantity::stored(&self) / $crate::Quantity::stored(&rhs),
                )
            }
        }
    };
}

/// Declares `A * A = C` for a scalar kind, with the quotient `C / A = A`.
macro_rules! impl_square {
    ($a:ident * $a2:ident = $c:ident) => {
        impl_product!(@mul $a * $a2 = $c);
        impl_product!(@div $c / $a = $a2);
        assert_dimensions!($a * $a2 = $c);
    };
}

/// Declares `A * B = C` where `A` and `C` carry a vector or dyadic payload and `B` is a scalar
/// kind, with the commuted product and the quotient `C / B = A`.
macro_rules! impl_scaled {
    ($a:ident * $b:ident = $c:ident) => {
        impl_product!(@mul $a * $b = $c);
        impl<N: $crate::Number> ::core::ops::Mul<$a<N>> for $b<N> {
            type Output = $c<N>;
            #[inline]
            fn mul(self, rhs: $a<N>) -> $c<N> {
                $crate::Quantity::from_stored(
                    $crate::Quantity::stored(&rhs) * $crate::Quantity::stored(&self),
                )
            }
        }
        impl_product!(@div $c / $b = $a);
        assert_dimensions!($a * $b = $c);
    };
}

/// Compile-time check that a declared relation is dimensionally consistent.
macro_rules! assert_dimensions {
    ($a:ident * $b:ident = $c:ident) => {
        const _: () = assert!(
            <$a as $crate::Quantity>::DIMENSIONS
                .product(<$b as $crate::Quantity>::DIMENSIONS)
                .equals(<$c as $crate::Quantity>::DIMENSIONS),
            concat!(
                "dimensions of ",
                stringify!($a),
                " * ",
                stringify!($b),
                " do not match ",
                stringify!($c)
            )
        );
    };
}
