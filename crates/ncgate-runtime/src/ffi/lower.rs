//! Lowering of typed gateway arguments to C ABI values
//!
//! Each argument type in the operation table knows its C representation.
//! Lowering is a pure reinterpretation: no copies, no allocation, no
//! conversion of values. Slices become pointers to their first element and
//! optional slices become null when absent.

use crate::buffer::{Raw, RawMut, StrPtr, Vlen};
use crate::handle::{Handle, NameBuffer};
use std::ffi::{c_char, c_int, c_void, CStr};
use std::ptr;

/// Conversion of a gateway argument into the value passed to C
pub trait Lower {
    /// C ABI representation
    type Raw: Copy;

    fn lower(self) -> Self::Raw;
}

/// Element types whose Rust layout matches the C element layout
///
/// # Safety
///
/// Implementors must be `repr(C)`/`repr(transparent)` or primitive, with the
/// same size and alignment as the C type libnetcdf reads or writes.
pub unsafe trait Element: Copy {}

unsafe impl Element for i8 {}
unsafe impl Element for u8 {}
unsafe impl Element for i16 {}
unsafe impl Element for u16 {}
unsafe impl Element for i32 {}
unsafe impl Element for u32 {}
unsafe impl Element for i64 {}
unsafe impl Element for u64 {}
unsafe impl Element for f32 {}
unsafe impl Element for f64 {}
unsafe impl Element for usize {}
unsafe impl Element for isize {}
unsafe impl<K> Element for Handle<K> {}
unsafe impl Element for StrPtr<'_> {}
unsafe impl Element for Vlen {}

macro_rules! lower_by_value {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Lower for $ty {
                type Raw = $ty;

                fn lower(self) -> $ty {
                    self
                }
            }
        )*
    };
}

lower_by_value!(c_int, usize, f32);

impl<K> Lower for Handle<K> {
    type Raw = c_int;

    fn lower(self) -> c_int {
        self.raw()
    }
}

impl Lower for &CStr {
    type Raw = *const c_char;

    fn lower(self) -> *const c_char {
        self.as_ptr()
    }
}

impl<T: Element> Lower for &mut T {
    type Raw = *mut T;

    fn lower(self) -> *mut T {
        self
    }
}

impl Lower for &mut NameBuffer {
    type Raw = *mut c_char;

    fn lower(self) -> *mut c_char {
        self.as_mut_bytes().as_mut_ptr().cast()
    }
}

impl<T: Element> Lower for &[T] {
    type Raw = *const T;

    fn lower(self) -> *const T {
        self.as_ptr()
    }
}

impl<T: Element> Lower for &mut [T] {
    type Raw = *mut T;

    fn lower(self) -> *mut T {
        self.as_mut_ptr()
    }
}

impl<T: Element> Lower for Option<&[T]> {
    type Raw = *const T;

    fn lower(self) -> *const T {
        self.map_or(ptr::null(), <[T]>::as_ptr)
    }
}

impl<T: Element> Lower for Option<&mut [T]> {
    type Raw = *mut T;

    fn lower(self) -> *mut T {
        self.map_or(ptr::null_mut(), <[T]>::as_mut_ptr)
    }
}

impl Lower for Raw<'_> {
    type Raw = *const c_void;

    fn lower(self) -> *const c_void {
        self.as_ptr()
    }
}

impl Lower for RawMut<'_> {
    type Raw = *mut c_void;

    fn lower(mut self) -> *mut c_void {
        self.as_mut_ptr()
    }
}

impl Lower for Option<Raw<'_>> {
    type Raw = *const c_void;

    fn lower(self) -> *const c_void {
        self.map_or(ptr::null(), |raw| raw.as_ptr())
    }
}

impl Lower for Option<RawMut<'_>> {
    type Raw = *mut c_void;

    fn lower(self) -> *mut c_void {
        self.map_or(ptr::null_mut(), |mut raw| raw.as_mut_ptr())
    }
}
