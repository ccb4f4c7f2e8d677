//! Native handles as non-owning capability tokens
//!
//! libnetcdf identifies datasets, groups, dimensions, variables and types by
//! plain `int`s. `Handle<K>` keeps the integer but tags it with the kind of
//! object it names, so a dimension id cannot be passed where a variable id is
//! expected. Handles never own anything: they are valid between the native
//! call that produced them and the matching close, and only together with the
//! dataset they came from.

use crate::consts::NC_MAX_NAME;
use std::ffi::{c_int, CStr};
use std::fmt;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;

mod sealed {
    pub trait Sealed {}
}

/// Marker for the kind of object a handle names
pub trait HandleKind: sealed::Sealed {
    /// Kind name used in `Debug` output
    const NAME: &'static str;
}

/// Dataset or group (libnetcdf uses the same id space for both)
#[derive(Debug)]
pub enum Dataset {}

/// Dimension within a dataset or group
#[derive(Debug)]
pub enum Dimension {}

/// Variable within a dataset or group
#[derive(Debug)]
pub enum Variable {}

/// Atomic or user-defined (compound, enum, opaque, vlen) type
#[derive(Debug)]
pub enum DataType {}

impl sealed::Sealed for Dataset {}
impl sealed::Sealed for Dimension {}
impl sealed::Sealed for Variable {}
impl sealed::Sealed for DataType {}

impl HandleKind for Dataset {
    const NAME: &'static str = "Ncid";
}
impl HandleKind for Dimension {
    const NAME: &'static str = "DimId";
}
impl HandleKind for Variable {
    const NAME: &'static str = "VarId";
}
impl HandleKind for DataType {
    const NAME: &'static str = "TypeId";
}

/// Integer handle minted by the native library, tagged with its kind
#[repr(transparent)]
pub struct Handle<K> {
    raw: c_int,
    _kind: PhantomData<fn() -> K>,
}

/// Dataset or group id
pub type Ncid = Handle<Dataset>;
/// Dimension id
pub type DimId = Handle<Dimension>;
/// Variable id
pub type VarId = Handle<Variable>;
/// Type id (atomic or user-defined)
pub type TypeId = Handle<DataType>;

impl<K> Handle<K> {
    /// Wrap a raw id returned by the native library
    pub const fn from_raw(raw: c_int) -> Self {
        Self {
            raw,
            _kind: PhantomData,
        }
    }

    /// The raw id
    pub const fn raw(self) -> c_int {
        self.raw
    }
}

impl<K> Clone for Handle<K> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<K> Copy for Handle<K> {}

impl<K> PartialEq for Handle<K> {
    fn eq(&self, other: &Self) -> bool {
        self.raw == other.raw
    }
}

impl<K> Eq for Handle<K> {}

impl<K> Hash for Handle<K> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.raw.hash(state);
    }
}

impl<K> Default for Handle<K> {
    fn default() -> Self {
        Self::from_raw(0)
    }
}

impl<K: HandleKind> fmt::Debug for Handle<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({})", K::NAME, self.raw)
    }
}

impl Handle<Variable> {
    /// Owner of dataset-level (global) attributes
    pub const GLOBAL: VarId = VarId::from_raw(-1);
}

impl Handle<DataType> {
    pub const NAT: TypeId = TypeId::from_raw(0);
    pub const BYTE: TypeId = TypeId::from_raw(1);
    pub const CHAR: TypeId = TypeId::from_raw(2);
    pub const SHORT: TypeId = TypeId::from_raw(3);
    pub const INT: TypeId = TypeId::from_raw(4);
    pub const FLOAT: TypeId = TypeId::from_raw(5);
    pub const DOUBLE: TypeId = TypeId::from_raw(6);
    pub const UBYTE: TypeId = TypeId::from_raw(7);
    pub const USHORT: TypeId = TypeId::from_raw(8);
    pub const UINT: TypeId = TypeId::from_raw(9);
    pub const INT64: TypeId = TypeId::from_raw(10);
    pub const UINT64: TypeId = TypeId::from_raw(11);
    pub const STRING: TypeId = TypeId::from_raw(12);

    /// Whether this id names one of the built-in atomic types
    pub const fn is_atomic(self) -> bool {
        self.raw >= Self::BYTE.raw && self.raw <= Self::STRING.raw
    }
}

/// Buffer for a name written by the native library (`NC_MAX_NAME` + NUL)
#[derive(Clone)]
pub struct NameBuffer([u8; NC_MAX_NAME + 1]);

impl NameBuffer {
    pub const fn new() -> Self {
        Self([0; NC_MAX_NAME + 1])
    }

    /// Name bytes up to the first NUL
    pub fn to_bytes(&self) -> &[u8] {
        let end = self.0.iter().position(|&b| b == 0).unwrap_or(self.0.len());
        &self.0[..end]
    }

    pub fn to_str(&self) -> Result<&str, std::str::Utf8Error> {
        std::str::from_utf8(self.to_bytes())
    }

    /// The name as a C string, if the native layer terminated it
    pub fn as_cstr(&self) -> Option<&CStr> {
        CStr::from_bytes_until_nul(&self.0).ok()
    }

    /// Whole backing storage, for collaborators that fill the buffer
    pub fn as_mut_bytes(&mut self) -> &mut [u8] {
        &mut self.0
    }

    pub fn clear(&mut self) {
        self.0.fill(0);
    }
}

impl Default for NameBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for NameBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("NameBuffer")
            .field(&String::from_utf8_lossy(self.to_bytes()))
            .finish()
    }
}
