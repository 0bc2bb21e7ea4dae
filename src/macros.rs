/// Implements the shared value-type traits for a `repr(C)` struct whose fields are all
/// of the type parameter.
///
/// Generates `Copy`, `Clone`, `Default`, `PartialEq` and a tuple-style `Debug`.
#[macro_export]
macro_rules! impl_standard_traits {
    ($type_name:ident, $type_param:ident, $($field:ident),+) => {
        impl<$type_param> Copy for $type_name<$type_param> where $type_param: Copy {}

        impl<$type_param> Clone for $type_name<$type_param>
        where
            $type_param: Clone,
        {
            fn clone(&self) -> Self {
                Self {
                    $($field: self.$field.clone()),+
                }
            }
        }

        impl<$type_param> Default for $type_name<$type_param>
        where
            $type_param: Default,
        {
            #[inline]
            fn default() -> Self {
                Self {
                    $($field: Default::default()),+
                }
            }
        }

        impl<$type_param> PartialEq for $type_name<$type_param>
        where
            $type_param: PartialEq,
        {
            #[inline]
            fn eq(&self, other: &Self) -> bool {
                true $(&& self.$field == other.$field)+
            }
        }

        impl<$type_param> core::fmt::Debug for $type_name<$type_param>
        where
            $type_param: core::fmt::Debug,
        {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                f.debug_tuple(stringify!($type_name))
                    $(.field(&self.$field))+
                    .finish()
            }
        }

        #[cfg(test)]
        paste::paste! {
            #[cfg(test)]
            mod [<tests_gen_ $type_name:lower>] {
                use super::*;

                #[test]
                fn test_default_is_zero() {
                    let value = $type_name::<f32>::default();
                    $(assert_eq!(value.$field, 0.0);)+
                }

                #[test]
                fn test_copy_keeps_components() {
                    let mut original = $type_name::<f32>::default();
                    $(original.$field = 1.5;)+
                    let copy = original;
                    $(assert_eq!(copy.$field, original.$field);)+
                }
            }
        }
    };
}
