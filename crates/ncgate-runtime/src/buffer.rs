//! Caller-owned memory handed to the native layer
//!
//! Typed data operations take plain slices. The untyped variants (`get_var`,
//! `put_att`, the `_ptr` forms) move bytes whose layout only the native type
//! system knows, so they take a [`Raw`] / [`RawMut`] region instead. Strings
//! and variable-length values read from a dataset are allocated by libnetcdf
//! and must be released through `free_string` / `free_vlens`.

use std::ffi::{c_char, c_void, CStr};
use std::fmt;
use std::marker::PhantomData;
use std::ptr;

/// Read-only untyped memory region borrowed for the duration of one call
#[derive(Clone, Copy)]
pub struct Raw<'a> {
    ptr: *const c_void,
    len: usize,
    _borrow: PhantomData<&'a [u8]>,
}

impl<'a> Raw<'a> {
    /// View a typed slice as an untyped region
    pub fn from_slice<T: Copy>(slice: &'a [T]) -> Self {
        Self {
            ptr: slice.as_ptr().cast(),
            len: std::mem::size_of_val(slice),
            _borrow: PhantomData,
        }
    }

    /// # Safety
    ///
    /// `ptr` must be valid for reads of `len` bytes for `'a`.
    pub unsafe fn from_raw_parts(ptr: *const c_void, len: usize) -> Self {
        Self {
            ptr,
            len,
            _borrow: PhantomData,
        }
    }

    /// Size of the region in bytes
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn as_ptr(&self) -> *const c_void {
        self.ptr
    }
}

impl fmt::Debug for Raw<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Raw")
            .field("ptr", &self.ptr)
            .field("len", &self.len)
            .finish()
    }
}

/// Writable untyped memory region borrowed for the duration of one call
pub struct RawMut<'a> {
    ptr: *mut c_void,
    len: usize,
    _borrow: PhantomData<&'a mut [u8]>,
}

impl<'a> RawMut<'a> {
    /// View a typed slice as a writable untyped region
    ///
    /// Only element types that are valid for every bit pattern should be used
    /// here; the native layer writes whatever the dataset holds.
    pub fn from_slice<T: Copy>(slice: &'a mut [T]) -> Self {
        Self {
            ptr: slice.as_mut_ptr().cast(),
            len: std::mem::size_of_val(slice),
            _borrow: PhantomData,
        }
    }

    /// # Safety
    ///
    /// `ptr` must be valid for writes of `len` bytes for `'a` and must not be
    /// aliased while the region is alive.
    pub unsafe fn from_raw_parts(ptr: *mut c_void, len: usize) -> Self {
        Self {
            ptr,
            len,
            _borrow: PhantomData,
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn as_mut_ptr(&mut self) -> *mut c_void {
        self.ptr
    }

    /// Shorter-lived copy, so one region can be passed to several calls
    pub fn reborrow(&mut self) -> RawMut<'_> {
        RawMut {
            ptr: self.ptr,
            len: self.len,
            _borrow: PhantomData,
        }
    }
}

impl fmt::Debug for RawMut<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RawMut")
            .field("ptr", &self.ptr)
            .field("len", &self.len)
            .finish()
    }
}

/// `nc_vlen_t`: one variable-length element
#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct Vlen {
    pub len: usize,
    pub p: *mut c_void,
}

impl Vlen {
    pub const fn empty() -> Self {
        Self {
            len: 0,
            p: ptr::null_mut(),
        }
    }

    /// Describe caller-owned elements for a write
    ///
    /// The record borrows `values` without tracking the borrow. It is only
    /// for passing to a `put_*` call. Never hand it to `free_vlens`: that
    /// releases `p` with the C allocator, and this memory belongs to Rust.
    /// Only records filled by a `get_*` call are released that way.
    pub fn from_slice<T>(values: &[T]) -> Self {
        Self {
            len: values.len(),
            p: values.as_ptr() as *mut c_void,
        }
    }
}

impl Default for Vlen {
    fn default() -> Self {
        Self::empty()
    }
}

/// `char *` slot of an `NC_STRING` array
///
/// For writes it borrows caller strings; after a read it points at memory
/// owned by libnetcdf until `free_string` releases it.
#[repr(transparent)]
#[derive(Clone, Copy)]
pub struct StrPtr<'a> {
    ptr: *mut c_char,
    _borrow: PhantomData<&'a CStr>,
}

impl<'a> StrPtr<'a> {
    pub const fn null() -> Self {
        Self {
            ptr: ptr::null_mut(),
            _borrow: PhantomData,
        }
    }

    pub fn from_cstr(s: &'a CStr) -> Self {
        Self {
            ptr: s.as_ptr() as *mut c_char,
            _borrow: PhantomData,
        }
    }

    /// Slot holding a pointer produced outside Rust, as a native read does
    ///
    /// # Safety
    ///
    /// `ptr` must be null or point at a NUL-terminated string valid for `'a`.
    pub unsafe fn from_raw(ptr: *mut c_char) -> Self {
        Self {
            ptr,
            _borrow: PhantomData,
        }
    }

    pub fn is_null(&self) -> bool {
        self.ptr.is_null()
    }

    /// # Safety
    ///
    /// The slot must be null or point at a NUL-terminated string that has not
    /// been released yet.
    pub unsafe fn as_cstr(&self) -> Option<&CStr> {
        if self.ptr.is_null() {
            None
        } else {
            Some(CStr::from_ptr(self.ptr))
        }
    }

    pub fn as_ptr(&self) -> *mut c_char {
        self.ptr
    }
}

impl Default for StrPtr<'_> {
    fn default() -> Self {
        Self::null()
    }
}

impl fmt::Debug for StrPtr<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "StrPtr({:p})", self.ptr)
    }
}
