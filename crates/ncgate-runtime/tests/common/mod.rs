//! Shared test utilities: a scriptable in-memory netCDF collaborator
//!
//! `FakeNetcdf` counts how many calls are executing at once, so any overlap
//! the gateway lets through shows up in `FakeState::overlaps`. Reads return
//! configured bytes, writes are recorded byte for byte, and any operation can
//! be made to fail with a chosen status.

#![allow(dead_code)]

use ncgate_runtime::{
    DimId, Gateway, MemoryReporter, NameBuffer, NetcdfApi, Ncid, Raw, RawMut, Status, StrPtr,
    TypeId, VarId, Vlen,
};
use std::collections::HashMap;
use std::ffi::{c_int, CStr, CString};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};
use std::thread::{self, ThreadId};
use std::time::{Duration, Instant};

pub use pretty_assertions::assert_eq;

pub const LIBVERS: &str = "4.9.2 of Jan  1 2024 00:00:00 $";

/// How a read or write addressed the variable
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Addressing {
    Whole,
    Point(Vec<usize>),
    Region {
        start: Vec<usize>,
        count: Vec<usize>,
    },
    Strided {
        start: Vec<usize>,
        count: Vec<usize>,
        stride: Vec<isize>,
    },
    Attribute {
        name: String,
        xtype: Option<TypeId>,
        len: Option<usize>,
    },
}

/// One data transfer seen by the fake
#[derive(Debug, Clone, PartialEq)]
pub struct Transfer {
    pub op: &'static str,
    pub ncid: Ncid,
    pub varid: VarId,
    pub addressing: Addressing,
    pub bytes: Vec<u8>,
}

/// One completed call with its timing
#[derive(Debug, Clone)]
pub struct CallRecord {
    pub op: &'static str,
    pub thread: ThreadId,
    pub entered: Instant,
    pub exited: Instant,
}

/// One schema or tuning call with its arguments, in call order
#[derive(Debug, Clone, PartialEq)]
pub struct Setting {
    pub op: &'static str,
    pub args: Vec<String>,
}

/// Arguments of a recorded setting, each formatted with `Debug`
macro_rules! args {
    ($($arg:expr),* $(,)?) => {
        vec![$(format!("{:?}", $arg)),*]
    };
}

type Hook = Box<dyn FnOnce(&'static str) + Send>;

#[derive(Default)]
pub struct FakeState {
    in_flight: AtomicUsize,
    max_in_flight: AtomicUsize,
    overlaps: AtomicUsize,
    calls: Mutex<Vec<CallRecord>>,
    variables: Mutex<HashMap<(c_int, c_int), Vec<u8>>>,
    attributes: Mutex<HashMap<(c_int, c_int, String), Vec<u8>>>,
    strings: Mutex<Vec<CString>>,
    vlens: Mutex<Vec<Vec<i32>>>,
    freed_strings: AtomicUsize,
    freed_vlens: AtomicUsize,
    transfers: Mutex<Vec<Transfer>>,
    settings: Mutex<Vec<Setting>>,
    nvars: Mutex<c_int>,
    failures: Mutex<HashMap<&'static str, Status>>,
    latency: Mutex<Option<Duration>>,
    hook: Mutex<Option<Hook>>,
    next_ncid: AtomicUsize,
    format: Mutex<c_int>,
    panic_on: Mutex<Option<&'static str>>,
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

impl FakeState {
    /// Bytes returned by reads of `varid`
    pub fn set_variable(&self, ncid: Ncid, varid: VarId, bytes: Vec<u8>) {
        lock(&self.variables).insert((ncid.raw(), varid.raw()), bytes);
    }

    pub fn set_attribute(&self, ncid: Ncid, varid: VarId, name: &str, bytes: Vec<u8>) {
        lock(&self.attributes).insert((ncid.raw(), varid.raw(), name.to_string()), bytes);
    }

    /// Strings handed out, in order, by string reads
    pub fn set_strings(&self, strings: &[&str]) {
        *lock(&self.strings) = strings
            .iter()
            .map(|s| CString::new(*s).unwrap())
            .collect();
    }

    /// Records handed out, in order, by variable-length reads
    pub fn set_vlens(&self, records: Vec<Vec<i32>>) {
        *lock(&self.vlens) = records;
    }

    /// Make `op` return `status` without doing anything else
    pub fn fail(&self, op: &'static str, status: Status) {
        lock(&self.failures).insert(op, status);
    }

    /// Sleep this long inside every call
    pub fn set_latency(&self, latency: Duration) {
        *lock(&self.latency) = Some(latency);
    }

    pub fn set_format(&self, format: c_int) {
        *lock(&self.format) = format;
    }

    /// Run `hook` once, from inside the next call
    pub fn on_next_call(&self, hook: impl FnOnce(&'static str) + Send + 'static) {
        *lock(&self.hook) = Some(Box::new(hook));
    }

    /// Panic from inside the next call to `op`
    pub fn panic_on(&self, op: &'static str) {
        *lock(&self.panic_on) = Some(op);
    }

    pub fn overlaps(&self) -> usize {
        self.overlaps.load(Ordering::SeqCst)
    }

    pub fn max_in_flight(&self) -> usize {
        self.max_in_flight.load(Ordering::SeqCst)
    }

    pub fn calls(&self) -> Vec<CallRecord> {
        lock(&self.calls).clone()
    }

    pub fn call_names(&self) -> Vec<&'static str> {
        lock(&self.calls).iter().map(|c| c.op).collect()
    }

    pub fn transfers(&self) -> Vec<Transfer> {
        lock(&self.transfers).clone()
    }

    pub fn last_transfer(&self) -> Option<Transfer> {
        lock(&self.transfers).last().cloned()
    }

    pub fn settings(&self) -> Vec<Setting> {
        lock(&self.settings).clone()
    }

    /// Variable count reported by `inq_varids`
    pub fn set_nvars(&self, nvars: c_int) {
        *lock(&self.nvars) = nvars;
    }

    pub fn freed_strings(&self) -> usize {
        self.freed_strings.load(Ordering::SeqCst)
    }

    pub fn freed_vlens(&self) -> usize {
        self.freed_vlens.load(Ordering::SeqCst)
    }
}

/// In-memory collaborator recording every call
#[derive(Default)]
pub struct FakeNetcdf {
    state: Arc<FakeState>,
}

impl FakeNetcdf {
    pub fn new() -> (Self, Arc<FakeState>) {
        let fake = Self::default();
        let state = Arc::clone(&fake.state);
        (fake, state)
    }

    fn track(&self, op: &'static str, body: impl FnOnce() -> Status) -> Status {
        let entered = Instant::now();
        let previous = self.state.in_flight.fetch_add(1, Ordering::SeqCst);
        if previous != 0 {
            self.state.overlaps.fetch_add(1, Ordering::SeqCst);
        }
        self.state
            .max_in_flight
            .fetch_max(previous + 1, Ordering::SeqCst);

        let hook = lock(&self.state.hook).take();
        if let Some(hook) = hook {
            hook(op);
        }
        if let Some(latency) = *lock(&self.state.latency) {
            thread::sleep(latency);
        }
        let should_panic = *lock(&self.state.panic_on) == Some(op);
        if should_panic {
            lock(&self.state.panic_on).take();
            self.state.in_flight.fetch_sub(1, Ordering::SeqCst);
            panic!("fake native fault in {}", op);
        }

        let failure = lock(&self.state.failures).get(op).copied();
        let status = match failure {
            Some(status) => status,
            None => body(),
        };

        self.state.in_flight.fetch_sub(1, Ordering::SeqCst);
        lock(&self.state.calls).push(CallRecord {
            op,
            thread: thread::current().id(),
            entered,
            exited: Instant::now(),
        });
        status
    }

    fn setting(&self, op: &'static str, args: Vec<String>) -> Status {
        self.track(op, || {
            lock(&self.state.settings).push(Setting { op, args });
            Status::NOERR
        })
    }

    fn assign_ncid(&self, path: &CStr, ncidp: &mut Ncid) -> Status {
        if path.to_bytes().is_empty() {
            return Status::from_raw(2);
        }
        let next = self.state.next_ncid.fetch_add(1, Ordering::SeqCst) as c_int;
        *ncidp = Ncid::from_raw((next + 1) << 16);
        Status::NOERR
    }

    fn read(
        &self,
        op: &'static str,
        ncid: Ncid,
        varid: VarId,
        addressing: Addressing,
        out: &mut [u8],
    ) -> Status {
        self.track(op, || {
            let variables = lock(&self.state.variables);
            let Some(source) = variables.get(&(ncid.raw(), varid.raw())) else {
                return Status::ENOTVAR;
            };
            let n = out.len().min(source.len());
            out[..n].copy_from_slice(&source[..n]);
            lock(&self.state.transfers).push(Transfer {
                op,
                ncid,
                varid,
                addressing,
                bytes: out[..n].to_vec(),
            });
            Status::NOERR
        })
    }

    fn write(
        &self,
        op: &'static str,
        ncid: Ncid,
        varid: VarId,
        addressing: Addressing,
        bytes: &[u8],
    ) -> Status {
        self.track(op, || {
            lock(&self.state.transfers).push(Transfer {
                op,
                ncid,
                varid,
                addressing,
                bytes: bytes.to_vec(),
            });
            Status::NOERR
        })
    }

    fn read_att(&self, op: &'static str, ncid: Ncid, varid: VarId, name: &CStr, out: &mut [u8]) -> Status {
        self.track(op, || {
            let name = name.to_string_lossy().into_owned();
            let attributes = lock(&self.state.attributes);
            let Some(source) = attributes.get(&(ncid.raw(), varid.raw(), name.clone())) else {
                return Status::ENOTATT;
            };
            let n = out.len().min(source.len());
            out[..n].copy_from_slice(&source[..n]);
            lock(&self.state.transfers).push(Transfer {
                op,
                ncid,
                varid,
                addressing: Addressing::Attribute {
                    name,
                    xtype: None,
                    len: None,
                },
                bytes: out[..n].to_vec(),
            });
            Status::NOERR
        })
    }

    #[allow(clippy::too_many_arguments)]
    fn write_att(
        &self,
        op: &'static str,
        ncid: Ncid,
        varid: VarId,
        name: &CStr,
        xtype: Option<TypeId>,
        len: usize,
        bytes: &[u8],
    ) -> Status {
        let addressing = Addressing::Attribute {
            name: name.to_string_lossy().into_owned(),
            xtype,
            len: Some(len),
        };
        self.write(op, ncid, varid, addressing, bytes)
    }

    fn read_strings(&self, op: &'static str, ncid: Ncid, varid: VarId, addressing: Addressing, out: &mut [StrPtr<'_>]) -> Status {
        self.track(op, || {
            let strings = lock(&self.state.strings);
            for (slot, s) in out.iter_mut().zip(strings.iter()) {
                // SAFETY: the strings live in the shared state for the whole test.
                *slot = unsafe { StrPtr::from_raw(s.as_ptr() as *mut _) };
            }
            let joined = out
                .iter()
                .filter_map(|slot| unsafe { slot.as_cstr() })
                .flat_map(|s| s.to_bytes_with_nul().to_vec())
                .collect();
            lock(&self.state.transfers).push(Transfer {
                op,
                ncid,
                varid,
                addressing,
                bytes: joined,
            });
            Status::NOERR
        })
    }

    fn write_strings(&self, op: &'static str, ncid: Ncid, varid: VarId, addressing: Addressing, values: &[StrPtr<'_>]) -> Status {
        let joined: Vec<u8> = values
            .iter()
            .filter_map(|slot| unsafe { slot.as_cstr() })
            .flat_map(|s| s.to_bytes_with_nul().to_vec())
            .collect();
        self.write(op, ncid, varid, addressing, &joined)
    }
}

fn region(start: &[usize], count: &[usize]) -> Addressing {
    Addressing::Region {
        start: start.to_vec(),
        count: count.to_vec(),
    }
}

fn strided(start: &[usize], count: &[usize], stride: &[isize]) -> Addressing {
    Addressing::Strided {
        start: start.to_vec(),
        count: count.to_vec(),
        stride: stride.to_vec(),
    }
}

fn vlen_bytes(values: &[Vlen]) -> Vec<u8> {
    values.iter().flat_map(|v| v.len.to_ne_bytes()).collect()
}

/// Typed variable reads and writes for one element type, in all four addressing modes
macro_rules! typed_variable_data {
    ($(
        $ty:ty => $get_var:ident, $get_var1:ident, $get_vara:ident, $get_vars:ident,
                  $put_var:ident, $put_var1:ident, $put_vara:ident, $put_vars:ident;
    )*) => {$(
        unsafe fn $get_var(&self, ncid: Ncid, varid: VarId, ip: &mut [$ty]) -> Status {
            self.read(concat!("nc_", stringify!($get_var)), ncid, varid, Addressing::Whole, bytemuck::cast_slice_mut(ip))
        }

        unsafe fn $get_var1(&self, ncid: Ncid, varid: VarId, index: &[usize], ip: &mut [$ty]) -> Status {
            self.read(concat!("nc_", stringify!($get_var1)), ncid, varid, Addressing::Point(index.to_vec()), bytemuck::cast_slice_mut(ip))
        }

        unsafe fn $get_vara(&self, ncid: Ncid, varid: VarId, start: &[usize], count: &[usize], ip: &mut [$ty]) -> Status {
            self.read(concat!("nc_", stringify!($get_vara)), ncid, varid, region(start, count), bytemuck::cast_slice_mut(ip))
        }

        unsafe fn $get_vars(&self, ncid: Ncid, varid: VarId, start: &[usize], count: &[usize], stride: &[isize], ip: &mut [$ty]) -> Status {
            self.read(concat!("nc_", stringify!($get_vars)), ncid, varid, strided(start, count, stride), bytemuck::cast_slice_mut(ip))
        }

        unsafe fn $put_var(&self, ncid: Ncid, varid: VarId, op: &[$ty]) -> Status {
            self.write(concat!("nc_", stringify!($put_var)), ncid, varid, Addressing::Whole, bytemuck::cast_slice(op))
        }

        unsafe fn $put_var1(&self, ncid: Ncid, varid: VarId, index: &[usize], op: &[$ty]) -> Status {
            self.write(concat!("nc_", stringify!($put_var1)), ncid, varid, Addressing::Point(index.to_vec()), bytemuck::cast_slice(op))
        }

        unsafe fn $put_vara(&self, ncid: Ncid, varid: VarId, start: &[usize], count: &[usize], op: &[$ty]) -> Status {
            self.write(concat!("nc_", stringify!($put_vara)), ncid, varid, region(start, count), bytemuck::cast_slice(op))
        }

        unsafe fn $put_vars(&self, ncid: Ncid, varid: VarId, start: &[usize], count: &[usize], stride: &[isize], op: &[$ty]) -> Status {
            self.write(concat!("nc_", stringify!($put_vars)), ncid, varid, strided(start, count, stride), bytemuck::cast_slice(op))
        }
    )*};
}

/// Typed attribute reads and writes carrying an explicit file type
macro_rules! typed_attribute_data {
    ($($ty:ty => $get_att:ident, $put_att:ident;)*) => {$(
        unsafe fn $get_att(&self, ncid: Ncid, varid: VarId, name: &CStr, ip: &mut [$ty]) -> Status {
            self.read_att(concat!("nc_", stringify!($get_att)), ncid, varid, name, bytemuck::cast_slice_mut(ip))
        }

        unsafe fn $put_att(&self, ncid: Ncid, varid: VarId, name: &CStr, xtype: TypeId, len: usize, op: &[$ty]) -> Status {
            self.write_att(concat!("nc_", stringify!($put_att)), ncid, varid, name, Some(xtype), len, bytemuck::cast_slice(op))
        }
    )*};
}

impl NetcdfApi for FakeNetcdf {
    fn inq_libvers(&self) -> String {
        LIBVERS.to_string()
    }

    fn open(&self, path: &CStr, _mode: c_int, ncidp: &mut Ncid) -> Status {
        self.track("nc_open", || self.assign_ncid(path, ncidp))
    }

    fn create(&self, path: &CStr, _cmode: c_int, ncidp: &mut Ncid) -> Status {
        self.track("nc_create", || self.assign_ncid(path, ncidp))
    }

    fn close(&self, _ncid: Ncid) -> Status {
        self.track("nc_close", || Status::NOERR)
    }

    fn enddef(&self, _ncid: Ncid) -> Status {
        self.track("nc_enddef", || Status::NOERR)
    }

    fn sync(&self, _ncid: Ncid) -> Status {
        self.track("nc_sync", || Status::NOERR)
    }

    fn inq_format(&self, _ncid: Ncid, formatp: &mut c_int) -> Status {
        self.track("nc_inq_format", || {
            *formatp = *lock(&self.state.format);
            Status::NOERR
        })
    }

    fn inq_dimname(&self, _ncid: Ncid, dimid: DimId, name: &mut NameBuffer) -> Status {
        self.track("nc_inq_dimname", || {
            let dim = format!("dim{}", dimid.raw());
            name.clear();
            name.as_mut_bytes()[..dim.len()].copy_from_slice(dim.as_bytes());
            Status::NOERR
        })
    }

    fn inq_dimlen(&self, _ncid: Ncid, dimid: DimId, lenp: &mut usize) -> Status {
        self.track("nc_inq_dimlen", || {
            *lenp = 10 * dimid.raw() as usize;
            Status::NOERR
        })
    }

    fn rename_grp(&self, grpid: Ncid, name: &CStr) -> Status {
        self.setting("nc_rename_grp", args![grpid, name])
    }

    fn def_compound(&self, ncid: Ncid, size: usize, name: &CStr, typeidp: &mut TypeId) -> Status {
        *typeidp = TypeId::from_raw(32);
        self.setting("nc_def_compound", args![ncid, size, name])
    }

    fn insert_compound(
        &self,
        ncid: Ncid,
        xtype: TypeId,
        name: &CStr,
        offset: usize,
        field_typeid: TypeId,
    ) -> Status {
        self.setting("nc_insert_compound", args![ncid, xtype, name, offset, field_typeid])
    }

    fn def_enum(&self, ncid: Ncid, base_typeid: TypeId, name: &CStr, typeidp: &mut TypeId) -> Status {
        *typeidp = TypeId::from_raw(33);
        self.setting("nc_def_enum", args![ncid, base_typeid, name])
    }

    fn def_var_deflate(
        &self,
        ncid: Ncid,
        varid: VarId,
        shuffle: c_int,
        deflate: c_int,
        deflate_level: c_int,
    ) -> Status {
        self.setting("nc_def_var_deflate", args![ncid, varid, shuffle, deflate, deflate_level])
    }

    fn def_var_endian(&self, ncid: Ncid, varid: VarId, endian: c_int) -> Status {
        self.setting("nc_def_var_endian", args![ncid, varid, endian])
    }

    fn set_var_chunk_cache(
        &self,
        ncid: Ncid,
        varid: VarId,
        size: usize,
        nelems: usize,
        preemption: f32,
    ) -> Status {
        self.setting("nc_set_var_chunk_cache", args![ncid, varid, size, nelems, preemption])
    }

    unsafe fn inq_varids(&self, _ncid: Ncid, nvars: &mut c_int, varids: Option<&mut [VarId]>) -> Status {
        self.track("nc_inq_varids", || {
            let count = *lock(&self.state.nvars);
            *nvars = count;
            if let Some(varids) = varids {
                for (i, slot) in varids.iter_mut().take(count as usize).enumerate() {
                    *slot = VarId::from_raw(i as c_int);
                }
            }
            Status::NOERR
        })
    }

    unsafe fn insert_enum(&self, ncid: Ncid, xtype: TypeId, name: &CStr, value: Raw<'_>) -> Status {
        let bytes = std::slice::from_raw_parts(value.as_ptr().cast::<u8>(), value.len());
        self.setting("nc_insert_enum", args![ncid, xtype, name, bytes])
    }

    unsafe fn def_var_chunking(
        &self,
        ncid: Ncid,
        varid: VarId,
        storage: c_int,
        chunksizesp: Option<&[usize]>,
    ) -> Status {
        self.setting("nc_def_var_chunking", args![ncid, varid, storage, chunksizesp])
    }

    unsafe fn def_var_fill(
        &self,
        ncid: Ncid,
        varid: VarId,
        no_fill: c_int,
        fill_value: Option<Raw<'_>>,
    ) -> Status {
        let fill = fill_value
            .map(|raw| std::slice::from_raw_parts(raw.as_ptr().cast::<u8>(), raw.len()).to_vec());
        self.setting("nc_def_var_fill", args![ncid, varid, no_fill, fill])
    }

    fn def_dim(&self, _ncid: Ncid, _name: &CStr, _len: usize, idp: &mut DimId) -> Status {
        self.track("nc_def_dim", || {
            *idp = DimId::from_raw(idp.raw() + 1);
            Status::NOERR
        })
    }

    unsafe fn def_var(
        &self,
        ncid: Ncid,
        _name: &CStr,
        _xtype: TypeId,
        ndims: c_int,
        dimidsp: &[DimId],
        varidp: &mut VarId,
    ) -> Status {
        self.track("nc_def_var", || {
            let dims: Vec<u8> = dimidsp[..ndims as usize]
                .iter()
                .flat_map(|d| d.raw().to_ne_bytes())
                .collect();
            *varidp = VarId::from_raw(ndims);
            lock(&self.state.transfers).push(Transfer {
                op: "nc_def_var",
                ncid,
                varid: *varidp,
                addressing: Addressing::Whole,
                bytes: dims,
            });
            Status::NOERR
        })
    }

    unsafe fn free_string(&self, len: usize, data: &mut [StrPtr<'_>]) -> Status {
        self.track("nc_free_string", || {
            for slot in data.iter_mut().take(len) {
                *slot = StrPtr::null();
            }
            self.state.freed_strings.fetch_add(len, Ordering::SeqCst);
            Status::NOERR
        })
    }

    unsafe fn free_vlens(&self, len: usize, vlens: &mut [Vlen]) -> Status {
        self.track("nc_free_vlens", || {
            for vlen in vlens.iter_mut().take(len) {
                *vlen = Vlen::empty();
            }
            self.state.freed_vlens.fetch_add(len, Ordering::SeqCst);
            Status::NOERR
        })
    }

    typed_variable_data! {
        u8 => get_var_text, get_var1_text, get_vara_text, get_vars_text,
              put_var_text, put_var1_text, put_vara_text, put_vars_text;
        i8 => get_var_schar, get_var1_schar, get_vara_schar, get_vars_schar,
              put_var_schar, put_var1_schar, put_vara_schar, put_vars_schar;
        u8 => get_var_uchar, get_var1_uchar, get_vara_uchar, get_vars_uchar,
              put_var_uchar, put_var1_uchar, put_vara_uchar, put_vars_uchar;
        u8 => get_var_ubyte, get_var1_ubyte, get_vara_ubyte, get_vars_ubyte,
              put_var_ubyte, put_var1_ubyte, put_vara_ubyte, put_vars_ubyte;
        i16 => get_var_short, get_var1_short, get_vara_short, get_vars_short,
               put_var_short, put_var1_short, put_vara_short, put_vars_short;
        u16 => get_var_ushort, get_var1_ushort, get_vara_ushort, get_vars_ushort,
               put_var_ushort, put_var1_ushort, put_vara_ushort, put_vars_ushort;
        i32 => get_var_int, get_var1_int, get_vara_int, get_vars_int,
               put_var_int, put_var1_int, put_vara_int, put_vars_int;
        u32 => get_var_uint, get_var1_uint, get_vara_uint, get_vars_uint,
               put_var_uint, put_var1_uint, put_vara_uint, put_vars_uint;
        i64 => get_var_longlong, get_var1_longlong, get_vara_longlong, get_vars_longlong,
               put_var_longlong, put_var1_longlong, put_vara_longlong, put_vars_longlong;
        u64 => get_var_ulonglong, get_var1_ulonglong, get_vara_ulonglong, get_vars_ulonglong,
               put_var_ulonglong, put_var1_ulonglong, put_vara_ulonglong, put_vars_ulonglong;
        f32 => get_var_float, get_var1_float, get_vara_float, get_vars_float,
               put_var_float, put_var1_float, put_vara_float, put_vars_float;
        f64 => get_var_double, get_var1_double, get_vara_double, get_vars_double,
               put_var_double, put_var1_double, put_vara_double, put_vars_double;
        u8 => get_var, get_var1, get_vara, get_vars,
              put_var, put_var1, put_vara, put_vars;
    }

    typed_attribute_data! {
        i8 => get_att_schar, put_att_schar;
        u8 => get_att_uchar, put_att_uchar;
        u8 => get_att_ubyte, put_att_ubyte;
        i16 => get_att_short, put_att_short;
        u16 => get_att_ushort, put_att_ushort;
        i32 => get_att_int, put_att_int;
        u32 => get_att_uint, put_att_uint;
        i64 => get_att_longlong, put_att_longlong;
        u64 => get_att_ulonglong, put_att_ulonglong;
        f32 => get_att_float, put_att_float;
        f64 => get_att_double, put_att_double;
        u8 => get_att, put_att;
    }

    unsafe fn get_att_text(&self, ncid: Ncid, varid: VarId, name: &CStr, ip: &mut [u8]) -> Status {
        self.read_att("nc_get_att_text", ncid, varid, name, ip)
    }

    unsafe fn put_att_text(&self, ncid: Ncid, varid: VarId, name: &CStr, len: usize, op: &[u8]) -> Status {
        self.write_att("nc_put_att_text", ncid, varid, name, None, len, op)
    }

    unsafe fn put_att_string(
        &self,
        ncid: Ncid,
        varid: VarId,
        name: &CStr,
        len: usize,
        op: &[StrPtr<'_>],
    ) -> Status {
        let joined: Vec<u8> = op
            .iter()
            .filter_map(|slot| slot.as_cstr())
            .flat_map(|s| s.to_bytes_with_nul().to_vec())
            .collect();
        self.write_att("nc_put_att_string", ncid, varid, name, None, len, &joined)
    }

    unsafe fn get_var_string(&self, ncid: Ncid, varid: VarId, ip: &mut [StrPtr<'_>]) -> Status {
        self.read_strings("nc_get_var_string", ncid, varid, Addressing::Whole, ip)
    }

    unsafe fn get_vara_string(
        &self,
        ncid: Ncid,
        varid: VarId,
        start: &[usize],
        count: &[usize],
        ip: &mut [StrPtr<'_>],
    ) -> Status {
        self.read_strings("nc_get_vara_string", ncid, varid, region(start, count), ip)
    }

    unsafe fn put_var_string(&self, ncid: Ncid, varid: VarId, op: &[StrPtr<'_>]) -> Status {
        self.write_strings("nc_put_var_string", ncid, varid, Addressing::Whole, op)
    }

    unsafe fn put_vars_string(
        &self,
        ncid: Ncid,
        varid: VarId,
        start: &[usize],
        count: &[usize],
        stride: &[isize],
        op: &[StrPtr<'_>],
    ) -> Status {
        self.write_strings("nc_put_vars_string", ncid, varid, strided(start, count, stride), op)
    }

    unsafe fn get_var_ptr(&self, ncid: Ncid, varid: VarId, mut ip: RawMut<'_>) -> Status {
        let out = std::slice::from_raw_parts_mut(ip.as_mut_ptr().cast::<u8>(), ip.len());
        self.read("nc_get_var", ncid, varid, Addressing::Whole, out)
    }

    unsafe fn put_vara_ptr(
        &self,
        ncid: Ncid,
        varid: VarId,
        start: &[usize],
        count: &[usize],
        op: Raw<'_>,
    ) -> Status {
        let bytes = std::slice::from_raw_parts(op.as_ptr().cast::<u8>(), op.len());
        self.write("nc_put_vara", ncid, varid, region(start, count), bytes)
    }

    unsafe fn get_var_vlen(&self, ncid: Ncid, varid: VarId, ip: &mut [Vlen]) -> Status {
        self.track("nc_get_var", || {
            let mut records = lock(&self.state.vlens);
            for (slot, record) in ip.iter_mut().zip(records.iter_mut()) {
                *slot = Vlen {
                    len: record.len(),
                    p: record.as_mut_ptr().cast(),
                };
            }
            lock(&self.state.transfers).push(Transfer {
                op: "nc_get_var",
                ncid,
                varid,
                addressing: Addressing::Whole,
                bytes: vlen_bytes(ip),
            });
            Status::NOERR
        })
    }

    unsafe fn put_var_vlen(&self, ncid: Ncid, varid: VarId, op: &[Vlen]) -> Status {
        self.write("nc_put_var", ncid, varid, Addressing::Whole, &vlen_bytes(op))
    }
}

/// Gateway over a fresh fake, with violations kept in memory
pub fn gateway() -> (Gateway<FakeNetcdf>, Arc<FakeState>, MemoryReporter) {
    let (fake, state) = FakeNetcdf::new();
    let reporter = MemoryReporter::new();
    let gateway = Gateway::new(fake).with_reporter(Arc::new(reporter.clone()));
    (gateway, state, reporter)
}

pub fn ncid() -> Ncid {
    Ncid::from_raw(65536)
}

pub fn varid(raw: c_int) -> VarId {
    VarId::from_raw(raw)
}
