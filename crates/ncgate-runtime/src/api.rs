//! Operation table expansion
//!
//! `netcdf_operations!` turns one declarative list of native entry points
//! into the three places that must agree on them:
//!
//! - the [`NetcdfApi`](crate::ops::NetcdfApi) collaborator trait,
//! - one [`Gateway`](crate::gateway::Gateway) method per entry, each a thin
//!   call to `Gateway::invoke`,
//! - the symbol table and trait implementation for the dynamically loaded
//!   libnetcdf.
//!
//! Entries in the `unsafe` group pass caller-sized buffers whose extent the
//! native layer trusts; their trait and gateway methods are `unsafe fn`.

/// Placeholder type for a lowered argument; resolved from the call site
macro_rules! lowered {
    ($arg:ident) => {
        _
    };
}

macro_rules! netcdf_operations {
    (
        safe {
            $(
                $(#[$smeta:meta])*
                fn $sname:ident ( $( $sarg:ident : $sty:ty ),* $(,)? ) => $ssym:ident ;
            )*
        }
        unsafe {
            $(
                $(#[$umeta:meta])*
                fn $uname:ident ( $( $uarg:ident : $uty:ty ),* $(,)? ) => $usym:ident ;
            )*
        }
    ) => {
        /// Native netCDF entry points as seen by the gateway
        ///
        /// Every table operation has a default body returning
        /// [`Status::NOT_BUILT`](crate::status::Status::NOT_BUILT), so a
        /// collaborator implements only what it supports.
        pub trait NetcdfApi: Send + Sync {
            /// `nc_inq_libvers`
            fn inq_libvers(&self) -> String {
                String::new()
            }

            /// `nc_strerror`
            fn strerror(&self, status: $crate::status::Status) -> String {
                status.describe().to_string()
            }

            $(
                $(#[$smeta])*
                #[doc = concat!("\n\nNative entry point: `", stringify!($ssym), "`")]
                #[allow(unused_variables, clippy::too_many_arguments)]
                fn $sname(&self, $( $sarg: $sty ),*) -> $crate::status::Status {
                    $crate::status::Status::NOT_BUILT
                }
            )*

            $(
                $(#[$umeta])*
                #[doc = concat!("\n\nNative entry point: `", stringify!($usym), "`")]
                ///
                /// # Safety
                ///
                /// Every buffer must be large enough for what the native call
                /// reads or writes given the other arguments.
                #[allow(unused_variables, clippy::too_many_arguments)]
                unsafe fn $uname(&self, $( $uarg: $uty ),*) -> $crate::status::Status {
                    $crate::status::Status::NOT_BUILT
                }
            )*
        }

        impl<L: NetcdfApi> $crate::gateway::Gateway<L> {
            $(
                $(#[$smeta])*
                #[doc = concat!("\n\nSerialized call to `", stringify!($ssym), "`.")]
                #[allow(clippy::too_many_arguments)]
                pub fn $sname(
                    &self,
                    $( $sarg: $sty ),*
                ) -> $crate::error::GatewayResult<$crate::status::Status> {
                    self.invoke(stringify!($ssym), |lib| lib.$sname($( $sarg ),*))
                }
            )*

            $(
                $(#[$umeta])*
                #[doc = concat!("\n\nSerialized call to `", stringify!($usym), "`.")]
                ///
                /// # Safety
                ///
                /// Every buffer must be large enough for what the native call
                /// reads or writes given the other arguments. The gateway does
                /// not check buffer extents against shapes.
                #[allow(clippy::too_many_arguments)]
                pub unsafe fn $uname(
                    &self,
                    $( $uarg: $uty ),*
                ) -> $crate::error::GatewayResult<$crate::status::Status> {
                    self.invoke(stringify!($usym), |lib| unsafe { lib.$uname($( $uarg ),*) })
                }
            )*
        }

        /// Resolved entry points of a loaded libnetcdf; `None` when not exported
        pub(crate) struct Symbols {
            $( $sname: Option<$crate::ffi::libnetcdf::RawSymbol>, )*
            $( $uname: Option<$crate::ffi::libnetcdf::RawSymbol>, )*
        }

        impl Symbols {
            pub(crate) fn resolve(library: &libloading::Library) -> Self {
                Self {
                    $( $sname: $crate::ffi::libnetcdf::lookup(library, stringify!($ssym)), )*
                    $( $uname: $crate::ffi::libnetcdf::lookup(library, stringify!($usym)), )*
                }
            }

            /// Table entries the library does not export
            pub(crate) fn missing(&self) -> Vec<&'static str> {
                let mut missing = Vec::new();
                $( if self.$sname.is_none() { missing.push(stringify!($ssym)); } )*
                $( if self.$uname.is_none() { missing.push(stringify!($usym)); } )*
                missing
            }

            /// Number of table entries
            pub(crate) const LEN: usize = [$( stringify!($ssym), )* $( stringify!($usym), )*].len();
        }

        impl NetcdfApi for $crate::ffi::libnetcdf::Libnetcdf {
            fn inq_libvers(&self) -> String {
                self.libvers()
            }

            fn strerror(&self, status: $crate::status::Status) -> String {
                self.describe(status)
            }

            $(
                #[allow(clippy::too_many_arguments)]
                fn $sname(&self, $( $sarg: $sty ),*) -> $crate::status::Status {
                    match self.symbols.$sname {
                        // SAFETY: the symbol was resolved under its C name and the
                        // table declares its C signature argument by argument.
                        Some(symbol) => unsafe {
                            let native: unsafe extern "C" fn($( lowered!($sarg) ),*) -> std::ffi::c_int =
                                std::mem::transmute(symbol);
                            $crate::status::Status::from_raw(native(
                                $( $crate::ffi::lower::Lower::lower($sarg) ),*
                            ))
                        },
                        None => $crate::status::Status::NOT_BUILT,
                    }
                }
            )*

            $(
                #[allow(clippy::too_many_arguments)]
                unsafe fn $uname(&self, $( $uarg: $uty ),*) -> $crate::status::Status {
                    match self.symbols.$uname {
                        Some(symbol) => unsafe {
                            let native: unsafe extern "C" fn($( lowered!($uarg) ),*) -> std::ffi::c_int =
                                std::mem::transmute(symbol);
                            $crate::status::Status::from_raw(native(
                                $( $crate::ffi::lower::Lower::lower($uarg) ),*
                            ))
                        },
                        None => $crate::status::Status::NOT_BUILT,
                    }
                }
            )*
        }
    };
}
