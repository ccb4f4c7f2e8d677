//! The gateway's operation surface
//!
//! One entry per libnetcdf entry point, with the Rust-side argument types.
//! Entries that take caller-sized arrays or untyped memory are in the
//! `unsafe` group: the native layer trusts their extent. Several Rust
//! methods may bind the same native symbol when it accepts differently
//! typed buffers (`get_var`, `get_var_vlen`, `get_var_ptr`).
//!
//! Shape arguments follow libnetcdf: `index`, `start` and `count` hold one
//! entry per dimension of the variable, `stride` one signed step per
//! dimension.

use crate::buffer::{Raw, RawMut, StrPtr, Vlen};
use crate::handle::{DimId, NameBuffer, Ncid, TypeId, VarId};
use std::ffi::{c_int, CStr};

netcdf_operations! {
    safe {
        /// Open an existing dataset.
        fn open(path: &CStr, mode: c_int, ncidp: &mut Ncid) => nc_open;
        /// Create a dataset; it starts in define mode.
        fn create(path: &CStr, cmode: c_int, ncidp: &mut Ncid) => nc_create;
        fn close(ncid: Ncid) => nc_close;
        fn abort(ncid: Ncid) => nc_abort;
        /// Re-enter define mode.
        fn redef(ncid: Ncid) => nc_redef;
        /// Leave define mode.
        fn enddef(ncid: Ncid) => nc_enddef;
        fn sync(ncid: Ncid) => nc_sync;
        fn set_default_format(format: c_int, old_formatp: &mut c_int) => nc_set_default_format;
        fn inq_format(ncid: Ncid, formatp: &mut c_int) => nc_inq_format;
        fn inq_format_extended(
            ncid: Ncid,
            formatp: &mut c_int,
            modep: &mut c_int,
        ) => nc_inq_format_extended;
        fn inq_grpname(ncid: Ncid, name: &mut NameBuffer) => nc_inq_grpname;
        /// Length of the full path name of a group, excluding the NUL.
        fn inq_grpname_len(ncid: Ncid, lenp: &mut usize) => nc_inq_grpname_len;
        fn inq_ndims(ncid: Ncid, ndimsp: &mut c_int) => nc_inq_ndims;
        fn inq_dim(ncid: Ncid, dimid: DimId, name: &mut NameBuffer, lenp: &mut usize) => nc_inq_dim;
        fn inq_dimid(ncid: Ncid, name: &CStr, idp: &mut DimId) => nc_inq_dimid;
        fn inq_dimname(ncid: Ncid, dimid: DimId, name: &mut NameBuffer) => nc_inq_dimname;
        fn inq_dimlen(ncid: Ncid, dimid: DimId, lenp: &mut usize) => nc_inq_dimlen;
        /// Number of global attributes.
        fn inq_natts(ncid: Ncid, nattsp: &mut c_int) => nc_inq_natts;
        fn inq_attname(
            ncid: Ncid,
            varid: VarId,
            attnum: c_int,
            name: &mut NameBuffer,
        ) => nc_inq_attname;
        fn inq_att(
            ncid: Ncid,
            varid: VarId,
            name: &CStr,
            xtypep: &mut TypeId,
            lenp: &mut usize,
        ) => nc_inq_att;
        fn inq_atttype(
            ncid: Ncid,
            varid: VarId,
            name: &CStr,
            xtypep: &mut TypeId,
        ) => nc_inq_atttype;
        /// Number of values in an attribute (characters for text).
        fn inq_attlen(ncid: Ncid, varid: VarId, name: &CStr, lenp: &mut usize) => nc_inq_attlen;
        fn del_att(ncid: Ncid, varid: VarId, name: &CStr) => nc_del_att;
        fn rename_att(ncid: Ncid, varid: VarId, name: &CStr, newname: &CStr) => nc_rename_att;
        fn inq_nvars(ncid: Ncid, nvarsp: &mut c_int) => nc_inq_nvars;
        fn inq_varid(ncid: Ncid, name: &CStr, varidp: &mut VarId) => nc_inq_varid;
        fn inq_varname(ncid: Ncid, varid: VarId, name: &mut NameBuffer) => nc_inq_varname;
        fn inq_vartype(ncid: Ncid, varid: VarId, xtypep: &mut TypeId) => nc_inq_vartype;
        fn inq_varndims(ncid: Ncid, varid: VarId, ndimsp: &mut c_int) => nc_inq_varndims;
        fn inq_varnatts(ncid: Ncid, varid: VarId, nattsp: &mut c_int) => nc_inq_varnatts;
        fn inq_type(
            ncid: Ncid,
            xtype: TypeId,
            name: &mut NameBuffer,
            sizep: &mut usize,
        ) => nc_inq_type;
        /// Describe a user-defined type; `classp` receives one of the `NC_VLEN`..`NC_COMPOUND` classes.
        fn inq_user_type(
            ncid: Ncid,
            xtype: TypeId,
            name: &mut NameBuffer,
            sizep: &mut usize,
            base_nc_typep: &mut TypeId,
            nfieldsp: &mut usize,
            classp: &mut c_int,
        ) => nc_inq_user_type;
        fn inq_enum(
            ncid: Ncid,
            xtype: TypeId,
            name: &mut NameBuffer,
            base_nc_typep: &mut TypeId,
            base_sizep: &mut usize,
            num_membersp: &mut usize,
        ) => nc_inq_enum;
        fn inq_opaque(
            ncid: Ncid,
            xtype: TypeId,
            name: &mut NameBuffer,
            sizep: &mut usize,
        ) => nc_inq_opaque;
        fn inq_compound(
            ncid: Ncid,
            xtype: TypeId,
            name: &mut NameBuffer,
            sizep: &mut usize,
            nfieldsp: &mut usize,
        ) => nc_inq_compound;
        fn inq_vlen(
            ncid: Ncid,
            xtype: TypeId,
            name: &mut NameBuffer,
            datum_sizep: &mut usize,
            base_nc_typep: &mut TypeId,
        ) => nc_inq_vlen;
        /// Create a child group.
        fn def_grp(parent_ncid: Ncid, name: &CStr, new_ncid: &mut Ncid) => nc_def_grp;
        fn rename_grp(grpid: Ncid, name: &CStr) => nc_rename_grp;
        /// Define a dimension; pass `NC_UNLIMITED` as `len` for the record dimension.
        fn def_dim(ncid: Ncid, name: &CStr, len: usize, idp: &mut DimId) => nc_def_dim;
        fn rename_dim(ncid: Ncid, dimid: DimId, name: &CStr) => nc_rename_dim;
        fn rename_var(ncid: Ncid, varid: VarId, name: &CStr) => nc_rename_var;
        fn def_compound(
            ncid: Ncid,
            size: usize,
            name: &CStr,
            typeidp: &mut TypeId,
        ) => nc_def_compound;
        fn insert_compound(
            ncid: Ncid,
            xtype: TypeId,
            name: &CStr,
            offset: usize,
            field_typeid: TypeId,
        ) => nc_insert_compound;
        fn def_enum(
            ncid: Ncid,
            base_typeid: TypeId,
            name: &CStr,
            typeidp: &mut TypeId,
        ) => nc_def_enum;
        fn def_opaque(ncid: Ncid, size: usize, name: &CStr, xtypep: &mut TypeId) => nc_def_opaque;
        fn def_vlen(
            ncid: Ncid,
            name: &CStr,
            base_typeid: TypeId,
            xtypep: &mut TypeId,
        ) => nc_def_vlen;
        fn def_var_deflate(
            ncid: Ncid,
            varid: VarId,
            shuffle: c_int,
            deflate: c_int,
            deflate_level: c_int,
        ) => nc_def_var_deflate;
        fn inq_var_deflate(
            ncid: Ncid,
            varid: VarId,
            shufflep: &mut c_int,
            deflatep: &mut c_int,
            deflate_levelp: &mut c_int,
        ) => nc_inq_var_deflate;
        fn inq_var_szip(
            ncid: Ncid,
            varid: VarId,
            options_maskp: &mut c_int,
            pixels_per_blockp: &mut c_int,
        ) => nc_inq_var_szip;
        fn def_var_fletcher32(ncid: Ncid, varid: VarId, fletcher32: c_int) => nc_def_var_fletcher32;
        fn inq_var_fletcher32(
            ncid: Ncid,
            varid: VarId,
            fletcher32p: &mut c_int,
        ) => nc_inq_var_fletcher32;
        fn def_var_endian(ncid: Ncid, varid: VarId, endian: c_int) => nc_def_var_endian;
        fn inq_var_endian(ncid: Ncid, varid: VarId, endianp: &mut c_int) => nc_inq_var_endian;
        /// Set the fill mode (`NC_FILL` or `NC_NOFILL`) of a dataset open for writing.
        fn set_fill(ncid: Ncid, fillmode: c_int, old_modep: &mut c_int) => nc_set_fill;
        /// Default chunk cache for datasets opened or created afterwards.
        fn set_chunk_cache(size: usize, nelems: usize, preemption: f32) => nc_set_chunk_cache;
        fn get_chunk_cache(
            sizep: &mut usize,
            nelemsp: &mut usize,
            preemptionp: &mut f32,
        ) => nc_get_chunk_cache;
        fn set_var_chunk_cache(
            ncid: Ncid,
            varid: VarId,
            size: usize,
            nelems: usize,
            preemption: f32,
        ) => nc_set_var_chunk_cache;
        fn get_var_chunk_cache(
            ncid: Ncid,
            varid: VarId,
            sizep: &mut usize,
            nelemsp: &mut usize,
            preemptionp: &mut f32,
        ) => nc_get_var_chunk_cache;
        /// Native log verbosity; only available in libraries built with logging.
        fn set_log_level(new_level: c_int) => nc_set_log_level;
    }
    unsafe {
        /// With `ncids` absent only the count is written.
        fn inq_grps(ncid: Ncid, numgrps: &mut c_int, ncids: Option<&mut [Ncid]>) => nc_inq_grps;
        fn inq_grpname_full(
            ncid: Ncid,
            lenp: &mut usize,
            full_name: Option<&mut [u8]>,
        ) => nc_inq_grpname_full;
        fn inq_unlimdims(
            ncid: Ncid,
            nunlimdimsp: &mut c_int,
            unlimdimidsp: Option<&mut [DimId]>,
        ) => nc_inq_unlimdims;
        fn inq_dimids(
            ncid: Ncid,
            ndims: &mut c_int,
            dimids: Option<&mut [DimId]>,
            include_parents: c_int,
        ) => nc_inq_dimids;
        fn inq_varids(ncid: Ncid, nvars: &mut c_int, varids: Option<&mut [VarId]>) => nc_inq_varids;
        /// `dimidsp` must hold one id per dimension of the variable.
        fn inq_var(
            ncid: Ncid,
            varid: VarId,
            name: &mut NameBuffer,
            xtypep: &mut TypeId,
            ndimsp: &mut c_int,
            dimidsp: Option<&mut [DimId]>,
            nattsp: &mut c_int,
        ) => nc_inq_var;
        fn inq_vardimid(ncid: Ncid, varid: VarId, dimidsp: &mut [DimId]) => nc_inq_vardimid;
        fn inq_typeids(
            ncid: Ncid,
            ntypes: &mut c_int,
            typeids: Option<&mut [TypeId]>,
        ) => nc_inq_typeids;
        /// `value` receives one value of the enum's base type.
        fn inq_enum_member(
            ncid: Ncid,
            xtype: TypeId,
            idx: c_int,
            name: &mut NameBuffer,
            value: RawMut<'_>,
        ) => nc_inq_enum_member;
        fn inq_compound_field(
            ncid: Ncid,
            xtype: TypeId,
            fieldid: c_int,
            name: &mut NameBuffer,
            offsetp: &mut usize,
            field_typeidp: &mut TypeId,
            ndimsp: &mut c_int,
            dim_sizesp: Option<&mut [c_int]>,
        ) => nc_inq_compound_field;
        /// Define a variable over `ndims` dimensions taken from `dimidsp`.
        fn def_var(
            ncid: Ncid,
            name: &CStr,
            xtype: TypeId,
            ndims: c_int,
            dimidsp: &[DimId],
            varidp: &mut VarId,
        ) => nc_def_var;
        fn insert_array_compound(
            ncid: Ncid,
            xtype: TypeId,
            name: &CStr,
            offset: usize,
            field_typeid: TypeId,
            ndims: c_int,
            dim_sizes: &[c_int],
        ) => nc_insert_array_compound;
        /// `value` holds one value of the enum's base type.
        fn insert_enum(ncid: Ncid, xtype: TypeId, name: &CStr, value: Raw<'_>) => nc_insert_enum;
        fn def_var_chunking(
            ncid: Ncid,
            varid: VarId,
            storage: c_int,
            chunksizesp: Option<&[usize]>,
        ) => nc_def_var_chunking;
        fn inq_var_chunking(
            ncid: Ncid,
            varid: VarId,
            storagep: &mut c_int,
            chunksizesp: Option<&mut [usize]>,
        ) => nc_inq_var_chunking;
        /// `fill_value` holds one value of the variable's type.
        fn def_var_fill(
            ncid: Ncid,
            varid: VarId,
            no_fill: c_int,
            fill_value: Option<Raw<'_>>,
        ) => nc_def_var_fill;
        fn inq_var_fill(
            ncid: Ncid,
            varid: VarId,
            no_fill: &mut c_int,
            fill_valuep: Option<RawMut<'_>>,
        ) => nc_inq_var_fill;
        /// Release strings allocated by a string read.
        fn free_string(len: usize, data: &mut [StrPtr<'_>]) => nc_free_string;
        /// Release variable-length data allocated by a read.
        fn free_vlens(len: usize, vlens: &mut [Vlen]) => nc_free_vlens;
        fn get_att_text(ncid: Ncid, varid: VarId, name: &CStr, ip: &mut [u8]) => nc_get_att_text;
        fn get_att_schar(ncid: Ncid, varid: VarId, name: &CStr, ip: &mut [i8]) => nc_get_att_schar;
        fn get_att_uchar(ncid: Ncid, varid: VarId, name: &CStr, ip: &mut [u8]) => nc_get_att_uchar;
        fn get_att_ubyte(ncid: Ncid, varid: VarId, name: &CStr, ip: &mut [u8]) => nc_get_att_ubyte;
        fn get_att_short(ncid: Ncid, varid: VarId, name: &CStr, ip: &mut [i16]) => nc_get_att_short;
        fn get_att_ushort(
            ncid: Ncid,
            varid: VarId,
            name: &CStr,
            ip: &mut [u16],
        ) => nc_get_att_ushort;
        fn get_att_int(ncid: Ncid, varid: VarId, name: &CStr, ip: &mut [c_int]) => nc_get_att_int;
        fn get_att_uint(ncid: Ncid, varid: VarId, name: &CStr, ip: &mut [u32]) => nc_get_att_uint;
        fn get_att_longlong(
            ncid: Ncid,
            varid: VarId,
            name: &CStr,
            ip: &mut [i64],
        ) => nc_get_att_longlong;
        fn get_att_ulonglong(
            ncid: Ncid,
            varid: VarId,
            name: &CStr,
            ip: &mut [u64],
        ) => nc_get_att_ulonglong;
        fn get_att_float(ncid: Ncid, varid: VarId, name: &CStr, ip: &mut [f32]) => nc_get_att_float;
        fn get_att_double(
            ncid: Ncid,
            varid: VarId,
            name: &CStr,
            ip: &mut [f64],
        ) => nc_get_att_double;
        fn get_att_string(
            ncid: Ncid,
            varid: VarId,
            name: &CStr,
            ip: &mut [StrPtr<'_>],
        ) => nc_get_att_string;
        /// Attribute values in their native layout.
        fn get_att(ncid: Ncid, varid: VarId, name: &CStr, ip: &mut [u8]) => nc_get_att;
        fn get_att_vlen(ncid: Ncid, varid: VarId, name: &CStr, ip: &mut [Vlen]) => nc_get_att;
        fn get_att_ptr(ncid: Ncid, varid: VarId, name: &CStr, ip: RawMut<'_>) => nc_get_att;
        fn put_att_text(
            ncid: Ncid,
            varid: VarId,
            name: &CStr,
            len: usize,
            op: &[u8],
        ) => nc_put_att_text;
        fn put_att_schar(
            ncid: Ncid,
            varid: VarId,
            name: &CStr,
            xtype: TypeId,
            len: usize,
            op: &[i8],
        ) => nc_put_att_schar;
        fn put_att_uchar(
            ncid: Ncid,
            varid: VarId,
            name: &CStr,
            xtype: TypeId,
            len: usize,
            op: &[u8],
        ) => nc_put_att_uchar;
        fn put_att_ubyte(
            ncid: Ncid,
            varid: VarId,
            name: &CStr,
            xtype: TypeId,
            len: usize,
            op: &[u8],
        ) => nc_put_att_ubyte;
        fn put_att_short(
            ncid: Ncid,
            varid: VarId,
            name: &CStr,
            xtype: TypeId,
            len: usize,
            op: &[i16],
        ) => nc_put_att_short;
        fn put_att_ushort(
            ncid: Ncid,
            varid: VarId,
            name: &CStr,
            xtype: TypeId,
            len: usize,
            op: &[u16],
        ) => nc_put_att_ushort;
        fn put_att_int(
            ncid: Ncid,
            varid: VarId,
            name: &CStr,
            xtype: TypeId,
            len: usize,
            op: &[c_int],
        ) => nc_put_att_int;
        fn put_att_uint(
            ncid: Ncid,
            varid: VarId,
            name: &CStr,
            xtype: TypeId,
            len: usize,
            op: &[u32],
        ) => nc_put_att_uint;
        fn put_att_longlong(
            ncid: Ncid,
            varid: VarId,
            name: &CStr,
            xtype: TypeId,
            len: usize,
            op: &[i64],
        ) => nc_put_att_longlong;
        fn put_att_ulonglong(
            ncid: Ncid,
            varid: VarId,
            name: &CStr,
            xtype: TypeId,
            len: usize,
            op: &[u64],
        ) => nc_put_att_ulonglong;
        fn put_att_float(
            ncid: Ncid,
            varid: VarId,
            name: &CStr,
            xtype: TypeId,
            len: usize,
            op: &[f32],
        ) => nc_put_att_float;
        fn put_att_double(
            ncid: Ncid,
            varid: VarId,
            name: &CStr,
            xtype: TypeId,
            len: usize,
            op: &[f64],
        ) => nc_put_att_double;
        fn put_att_string(
            ncid: Ncid,
            varid: VarId,
            name: &CStr,
            len: usize,
            op: &[StrPtr<'_>],
        ) => nc_put_att_string;
        fn put_att(
            ncid: Ncid,
            varid: VarId,
            name: &CStr,
            xtype: TypeId,
            len: usize,
            op: &[u8],
        ) => nc_put_att;
        fn put_att_vlen(
            ncid: Ncid,
            varid: VarId,
            name: &CStr,
            xtype: TypeId,
            len: usize,
            op: &[Vlen],
        ) => nc_put_att;
        fn put_att_ptr(
            ncid: Ncid,
            varid: VarId,
            name: &CStr,
            xtype: TypeId,
            len: usize,
            op: Raw<'_>,
        ) => nc_put_att;
        fn get_var_text(ncid: Ncid, varid: VarId, ip: &mut [u8]) => nc_get_var_text;
        fn get_var_schar(ncid: Ncid, varid: VarId, ip: &mut [i8]) => nc_get_var_schar;
        fn get_var_uchar(ncid: Ncid, varid: VarId, ip: &mut [u8]) => nc_get_var_uchar;
        fn get_var_ubyte(ncid: Ncid, varid: VarId, ip: &mut [u8]) => nc_get_var_ubyte;
        fn get_var_short(ncid: Ncid, varid: VarId, ip: &mut [i16]) => nc_get_var_short;
        fn get_var_ushort(ncid: Ncid, varid: VarId, ip: &mut [u16]) => nc_get_var_ushort;
        fn get_var_int(ncid: Ncid, varid: VarId, ip: &mut [c_int]) => nc_get_var_int;
        fn get_var_uint(ncid: Ncid, varid: VarId, ip: &mut [u32]) => nc_get_var_uint;
        fn get_var_longlong(ncid: Ncid, varid: VarId, ip: &mut [i64]) => nc_get_var_longlong;
        fn get_var_ulonglong(ncid: Ncid, varid: VarId, ip: &mut [u64]) => nc_get_var_ulonglong;
        fn get_var_float(ncid: Ncid, varid: VarId, ip: &mut [f32]) => nc_get_var_float;
        fn get_var_double(ncid: Ncid, varid: VarId, ip: &mut [f64]) => nc_get_var_double;
        fn get_var_string(ncid: Ncid, varid: VarId, ip: &mut [StrPtr<'_>]) => nc_get_var_string;
        /// Read raw values, whole variable.
        fn get_var(ncid: Ncid, varid: VarId, ip: &mut [u8]) => nc_get_var;
        fn get_var_vlen(ncid: Ncid, varid: VarId, ip: &mut [Vlen]) => nc_get_var;
        fn get_var_ptr(ncid: Ncid, varid: VarId, ip: RawMut<'_>) => nc_get_var;
        fn get_var1_text(
            ncid: Ncid,
            varid: VarId,
            index: &[usize],
            ip: &mut [u8],
        ) => nc_get_var1_text;
        fn get_var1_schar(
            ncid: Ncid,
            varid: VarId,
            index: &[usize],
            ip: &mut [i8],
        ) => nc_get_var1_schar;
        fn get_var1_uchar(
            ncid: Ncid,
            varid: VarId,
            index: &[usize],
            ip: &mut [u8],
        ) => nc_get_var1_uchar;
        fn get_var1_ubyte(
            ncid: Ncid,
            varid: VarId,
            index: &[usize],
            ip: &mut [u8],
        ) => nc_get_var1_ubyte;
        fn get_var1_short(
            ncid: Ncid,
            varid: VarId,
            index: &[usize],
            ip: &mut [i16],
        ) => nc_get_var1_short;
        fn get_var1_ushort(
            ncid: Ncid,
            varid: VarId,
            index: &[usize],
            ip: &mut [u16],
        ) => nc_get_var1_ushort;
        fn get_var1_int(
            ncid: Ncid,
            varid: VarId,
            index: &[usize],
            ip: &mut [c_int],
        ) => nc_get_var1_int;
        fn get_var1_uint(
            ncid: Ncid,
            varid: VarId,
            index: &[usize],
            ip: &mut [u32],
        ) => nc_get_var1_uint;
        fn get_var1_longlong(
            ncid: Ncid,
            varid: VarId,
            index: &[usize],
            ip: &mut [i64],
        ) => nc_get_var1_longlong;
        fn get_var1_ulonglong(
            ncid: Ncid,
            varid: VarId,
            index: &[usize],
            ip: &mut [u64],
        ) => nc_get_var1_ulonglong;
        fn get_var1_float(
            ncid: Ncid,
            varid: VarId,
            index: &[usize],
            ip: &mut [f32],
        ) => nc_get_var1_float;
        fn get_var1_double(
            ncid: Ncid,
            varid: VarId,
            index: &[usize],
            ip: &mut [f64],
        ) => nc_get_var1_double;
        fn get_var1_string(
            ncid: Ncid,
            varid: VarId,
            index: &[usize],
            ip: &mut [StrPtr<'_>],
        ) => nc_get_var1_string;
        /// Read raw values, one element at `index`.
        fn get_var1(ncid: Ncid, varid: VarId, index: &[usize], ip: &mut [u8]) => nc_get_var1;
        fn get_var1_vlen(ncid: Ncid, varid: VarId, index: &[usize], ip: &mut [Vlen]) => nc_get_var1;
        fn get_var1_ptr(ncid: Ncid, varid: VarId, index: &[usize], ip: RawMut<'_>) => nc_get_var1;
        fn get_vara_text(
            ncid: Ncid,
            varid: VarId,
            start: &[usize],
            count: &[usize],
            ip: &mut [u8],
        ) => nc_get_vara_text;
        fn get_vara_schar(
            ncid: Ncid,
            varid: VarId,
            start: &[usize],
            count: &[usize],
            ip: &mut [i8],
        ) => nc_get_vara_schar;
        fn get_vara_uchar(
            ncid: Ncid,
            varid: VarId,
            start: &[usize],
            count: &[usize],
            ip: &mut [u8],
        ) => nc_get_vara_uchar;
        fn get_vara_ubyte(
            ncid: Ncid,
            varid: VarId,
            start: &[usize],
            count: &[usize],
            ip: &mut [u8],
        ) => nc_get_vara_ubyte;
        fn get_vara_short(
            ncid: Ncid,
            varid: VarId,
            start: &[usize],
            count: &[usize],
            ip: &mut [i16],
        ) => nc_get_vara_short;
        fn get_vara_ushort(
            ncid: Ncid,
            varid: VarId,
            start: &[usize],
            count: &[usize],
            ip: &mut [u16],
        ) => nc_get_vara_ushort;
        fn get_vara_int(
            ncid: Ncid,
            varid: VarId,
            start: &[usize],
            count: &[usize],
            ip: &mut [c_int],
        ) => nc_get_vara_int;
        fn get_vara_uint(
            ncid: Ncid,
            varid: VarId,
            start: &[usize],
            count: &[usize],
            ip: &mut [u32],
        ) => nc_get_vara_uint;
        fn get_vara_longlong(
            ncid: Ncid,
            varid: VarId,
            start: &[usize],
            count: &[usize],
            ip: &mut [i64],
        ) => nc_get_vara_longlong;
        fn get_vara_ulonglong(
            ncid: Ncid,
            varid: VarId,
            start: &[usize],
            count: &[usize],
            ip: &mut [u64],
        ) => nc_get_vara_ulonglong;
        fn get_vara_float(
            ncid: Ncid,
            varid: VarId,
            start: &[usize],
            count: &[usize],
            ip: &mut [f32],
        ) => nc_get_vara_float;
        fn get_vara_double(
            ncid: Ncid,
            varid: VarId,
            start: &[usize],
            count: &[usize],
            ip: &mut [f64],
        ) => nc_get_vara_double;
        fn get_vara_string(
            ncid: Ncid,
            varid: VarId,
            start: &[usize],
            count: &[usize],
            ip: &mut [StrPtr<'_>],
        ) => nc_get_vara_string;
        /// Read raw values, hyper-rectangle at `start` of extent `count`.
        fn get_vara(
            ncid: Ncid,
            varid: VarId,
            start: &[usize],
            count: &[usize],
            ip: &mut [u8],
        ) => nc_get_vara;
        fn get_vara_vlen(
            ncid: Ncid,
            varid: VarId,
            start: &[usize],
            count: &[usize],
            ip: &mut [Vlen],
        ) => nc_get_vara;
        fn get_vara_ptr(
            ncid: Ncid,
            varid: VarId,
            start: &[usize],
            count: &[usize],
            ip: RawMut<'_>,
        ) => nc_get_vara;
        fn get_vars_text(
            ncid: Ncid,
            varid: VarId,
            start: &[usize],
            count: &[usize],
            stride: &[isize],
            ip: &mut [u8],
        ) => nc_get_vars_text;
        fn get_vars_schar(
            ncid: Ncid,
            varid: VarId,
            start: &[usize],
            count: &[usize],
            stride: &[isize],
            ip: &mut [i8],
        ) => nc_get_vars_schar;
        fn get_vars_uchar(
            ncid: Ncid,
            varid: VarId,
            start: &[usize],
            count: &[usize],
            stride: &[isize],
            ip: &mut [u8],
        ) => nc_get_vars_uchar;
        fn get_vars_ubyte(
            ncid: Ncid,
            varid: VarId,
            start: &[usize],
            count: &[usize],
            stride: &[isize],
            ip: &mut [u8],
        ) => nc_get_vars_ubyte;
        fn get_vars_short(
            ncid: Ncid,
            varid: VarId,
            start: &[usize],
            count: &[usize],
            stride: &[isize],
            ip: &mut [i16],
        ) => nc_get_vars_short;
        fn get_vars_ushort(
            ncid: Ncid,
            varid: VarId,
            start: &[usize],
            count: &[usize],
            stride: &[isize],
            ip: &mut [u16],
        ) => nc_get_vars_ushort;
        fn get_vars_int(
            ncid: Ncid,
            varid: VarId,
            start: &[usize],
            count: &[usize],
            stride: &[isize],
            ip: &mut [c_int],
        ) => nc_get_vars_int;
        fn get_vars_uint(
            ncid: Ncid,
            varid: VarId,
            start: &[usize],
            count: &[usize],
            stride: &[isize],
            ip: &mut [u32],
        ) => nc_get_vars_uint;
        fn get_vars_longlong(
            ncid: Ncid,
            varid: VarId,
            start: &[usize],
            count: &[usize],
            stride: &[isize],
            ip: &mut [i64],
        ) => nc_get_vars_longlong;
        fn get_vars_ulonglong(
            ncid: Ncid,
            varid: VarId,
            start: &[usize],
            count: &[usize],
            stride: &[isize],
            ip: &mut [u64],
        ) => nc_get_vars_ulonglong;
        fn get_vars_float(
            ncid: Ncid,
            varid: VarId,
            start: &[usize],
            count: &[usize],
            stride: &[isize],
            ip: &mut [f32],
        ) => nc_get_vars_float;
        fn get_vars_double(
            ncid: Ncid,
            varid: VarId,
            start: &[usize],
            count: &[usize],
            stride: &[isize],
            ip: &mut [f64],
        ) => nc_get_vars_double;
        fn get_vars_string(
            ncid: Ncid,
            varid: VarId,
            start: &[usize],
            count: &[usize],
            stride: &[isize],
            ip: &mut [StrPtr<'_>],
        ) => nc_get_vars_string;
        /// Read raw values, strided hyper-rectangle.
        fn get_vars(
            ncid: Ncid,
            varid: VarId,
            start: &[usize],
            count: &[usize],
            stride: &[isize],
            ip: &mut [u8],
        ) => nc_get_vars;
        fn get_vars_vlen(
            ncid: Ncid,
            varid: VarId,
            start: &[usize],
            count: &[usize],
            stride: &[isize],
            ip: &mut [Vlen],
        ) => nc_get_vars;
        fn get_vars_ptr(
            ncid: Ncid,
            varid: VarId,
            start: &[usize],
            count: &[usize],
            stride: &[isize],
            ip: RawMut<'_>,
        ) => nc_get_vars;
        fn put_var_text(ncid: Ncid, varid: VarId, op: &[u8]) => nc_put_var_text;
        fn put_var_schar(ncid: Ncid, varid: VarId, op: &[i8]) => nc_put_var_schar;
        fn put_var_uchar(ncid: Ncid, varid: VarId, op: &[u8]) => nc_put_var_uchar;
        fn put_var_ubyte(ncid: Ncid, varid: VarId, op: &[u8]) => nc_put_var_ubyte;
        fn put_var_short(ncid: Ncid, varid: VarId, op: &[i16]) => nc_put_var_short;
        fn put_var_ushort(ncid: Ncid, varid: VarId, op: &[u16]) => nc_put_var_ushort;
        fn put_var_int(ncid: Ncid, varid: VarId, op: &[c_int]) => nc_put_var_int;
        fn put_var_uint(ncid: Ncid, varid: VarId, op: &[u32]) => nc_put_var_uint;
        fn put_var_longlong(ncid: Ncid, varid: VarId, op: &[i64]) => nc_put_var_longlong;
        fn put_var_ulonglong(ncid: Ncid, varid: VarId, op: &[u64]) => nc_put_var_ulonglong;
        fn put_var_float(ncid: Ncid, varid: VarId, op: &[f32]) => nc_put_var_float;
        fn put_var_double(ncid: Ncid, varid: VarId, op: &[f64]) => nc_put_var_double;
        fn put_var_string(ncid: Ncid, varid: VarId, op: &[StrPtr<'_>]) => nc_put_var_string;
        /// Write raw values, whole variable.
        fn put_var(ncid: Ncid, varid: VarId, op: &[u8]) => nc_put_var;
        fn put_var_vlen(ncid: Ncid, varid: VarId, op: &[Vlen]) => nc_put_var;
        fn put_var_ptr(ncid: Ncid, varid: VarId, op: Raw<'_>) => nc_put_var;
        fn put_var1_text(ncid: Ncid, varid: VarId, index: &[usize], op: &[u8]) => nc_put_var1_text;
        fn put_var1_schar(
            ncid: Ncid,
            varid: VarId,
            index: &[usize],
            op: &[i8],
        ) => nc_put_var1_schar;
        fn put_var1_uchar(
            ncid: Ncid,
            varid: VarId,
            index: &[usize],
            op: &[u8],
        ) => nc_put_var1_uchar;
        fn put_var1_ubyte(
            ncid: Ncid,
            varid: VarId,
            index: &[usize],
            op: &[u8],
        ) => nc_put_var1_ubyte;
        fn put_var1_short(
            ncid: Ncid,
            varid: VarId,
            index: &[usize],
            op: &[i16],
        ) => nc_put_var1_short;
        fn put_var1_ushort(
            ncid: Ncid,
            varid: VarId,
            index: &[usize],
            op: &[u16],
        ) => nc_put_var1_ushort;
        fn put_var1_int(ncid: Ncid, varid: VarId, index: &[usize], op: &[c_int]) => nc_put_var1_int;
        fn put_var1_uint(ncid: Ncid, varid: VarId, index: &[usize], op: &[u32]) => nc_put_var1_uint;
        fn put_var1_longlong(
            ncid: Ncid,
            varid: VarId,
            index: &[usize],
            op: &[i64],
        ) => nc_put_var1_longlong;
        fn put_var1_ulonglong(
            ncid: Ncid,
            varid: VarId,
            index: &[usize],
            op: &[u64],
        ) => nc_put_var1_ulonglong;
        fn put_var1_float(
            ncid: Ncid,
            varid: VarId,
            index: &[usize],
            op: &[f32],
        ) => nc_put_var1_float;
        fn put_var1_double(
            ncid: Ncid,
            varid: VarId,
            index: &[usize],
            op: &[f64],
        ) => nc_put_var1_double;
        fn put_var1_string(
            ncid: Ncid,
            varid: VarId,
            index: &[usize],
            op: &[StrPtr<'_>],
        ) => nc_put_var1_string;
        /// Write raw values, one element at `index`.
        fn put_var1(ncid: Ncid, varid: VarId, index: &[usize], op: &[u8]) => nc_put_var1;
        fn put_var1_vlen(ncid: Ncid, varid: VarId, index: &[usize], op: &[Vlen]) => nc_put_var1;
        fn put_var1_ptr(ncid: Ncid, varid: VarId, index: &[usize], op: Raw<'_>) => nc_put_var1;
        fn put_vara_text(
            ncid: Ncid,
            varid: VarId,
            start: &[usize],
            count: &[usize],
            op: &[u8],
        ) => nc_put_vara_text;
        fn put_vara_schar(
            ncid: Ncid,
            varid: VarId,
            start: &[usize],
            count: &[usize],
            op: &[i8],
        ) => nc_put_vara_schar;
        fn put_vara_uchar(
            ncid: Ncid,
            varid: VarId,
            start: &[usize],
            count: &[usize],
            op: &[u8],
        ) => nc_put_vara_uchar;
        fn put_vara_ubyte(
            ncid: Ncid,
            varid: VarId,
            start: &[usize],
            count: &[usize],
            op: &[u8],
        ) => nc_put_vara_ubyte;
        fn put_vara_short(
            ncid: Ncid,
            varid: VarId,
            start: &[usize],
            count: &[usize],
            op: &[i16],
        ) => nc_put_vara_short;
        fn put_vara_ushort(
            ncid: Ncid,
            varid: VarId,
            start: &[usize],
            count: &[usize],
            op: &[u16],
        ) => nc_put_vara_ushort;
        fn put_vara_int(
            ncid: Ncid,
            varid: VarId,
            start: &[usize],
            count: &[usize],
            op: &[c_int],
        ) => nc_put_vara_int;
        fn put_vara_uint(
            ncid: Ncid,
            varid: VarId,
            start: &[usize],
            count: &[usize],
            op: &[u32],
        ) => nc_put_vara_uint;
        fn put_vara_longlong(
            ncid: Ncid,
            varid: VarId,
            start: &[usize],
            count: &[usize],
            op: &[i64],
        ) => nc_put_vara_longlong;
        fn put_vara_ulonglong(
            ncid: Ncid,
            varid: VarId,
            start: &[usize],
            count: &[usize],
            op: &[u64],
        ) => nc_put_vara_ulonglong;
        fn put_vara_float(
            ncid: Ncid,
            varid: VarId,
            start: &[usize],
            count: &[usize],
            op: &[f32],
        ) => nc_put_vara_float;
        fn put_vara_double(
            ncid: Ncid,
            varid: VarId,
            start: &[usize],
            count: &[usize],
            op: &[f64],
        ) => nc_put_vara_double;
        fn put_vara_string(
            ncid: Ncid,
            varid: VarId,
            start: &[usize],
            count: &[usize],
            op: &[StrPtr<'_>],
        ) => nc_put_vara_string;
        /// Write raw values, hyper-rectangle at `start` of extent `count`.
        fn put_vara(
            ncid: Ncid,
            varid: VarId,
            start: &[usize],
            count: &[usize],
            op: &[u8],
        ) => nc_put_vara;
        fn put_vara_vlen(
            ncid: Ncid,
            varid: VarId,
            start: &[usize],
            count: &[usize],
            op: &[Vlen],
        ) => nc_put_vara;
        fn put_vara_ptr(
            ncid: Ncid,
            varid: VarId,
            start: &[usize],
            count: &[usize],
            op: Raw<'_>,
        ) => nc_put_vara;
        fn put_vars_text(
            ncid: Ncid,
            varid: VarId,
            start: &[usize],
            count: &[usize],
            stride: &[isize],
            op: &[u8],
        ) => nc_put_vars_text;
        fn put_vars_schar(
            ncid: Ncid,
            varid: VarId,
            start: &[usize],
            count: &[usize],
            stride: &[isize],
            op: &[i8],
        ) => nc_put_vars_schar;
        fn put_vars_uchar(
            ncid: Ncid,
            varid: VarId,
            start: &[usize],
            count: &[usize],
            stride: &[isize],
            op: &[u8],
        ) => nc_put_vars_uchar;
        fn put_vars_ubyte(
            ncid: Ncid,
            varid: VarId,
            start: &[usize],
            count: &[usize],
            stride: &[isize],
            op: &[u8],
        ) => nc_put_vars_ubyte;
        fn put_vars_short(
            ncid: Ncid,
            varid: VarId,
            start: &[usize],
            count: &[usize],
            stride: &[isize],
            op: &[i16],
        ) => nc_put_vars_short;
        fn put_vars_ushort(
            ncid: Ncid,
            varid: VarId,
            start: &[usize],
            count: &[usize],
            stride: &[isize],
            op: &[u16],
        ) => nc_put_vars_ushort;
        fn put_vars_int(
            ncid: Ncid,
            varid: VarId,
            start: &[usize],
            count: &[usize],
            stride: &[isize],
            op: &[c_int],
        ) => nc_put_vars_int;
        fn put_vars_uint(
            ncid: Ncid,
            varid: VarId,
            start: &[usize],
            count: &[usize],
            stride: &[isize],
            op: &[u32],
        ) => nc_put_vars_uint;
        fn put_vars_longlong(
            ncid: Ncid,
            varid: VarId,
            start: &[usize],
            count: &[usize],
            stride: &[isize],
            op: &[i64],
        ) => nc_put_vars_longlong;
        fn put_vars_ulonglong(
            ncid: Ncid,
            varid: VarId,
            start: &[usize],
            count: &[usize],
            stride: &[isize],
            op: &[u64],
        ) => nc_put_vars_ulonglong;
        fn put_vars_float(
            ncid: Ncid,
            varid: VarId,
            start: &[usize],
            count: &[usize],
            stride: &[isize],
            op: &[f32],
        ) => nc_put_vars_float;
        fn put_vars_double(
            ncid: Ncid,
            varid: VarId,
            start: &[usize],
            count: &[usize],
            stride: &[isize],
            op: &[f64],
        ) => nc_put_vars_double;
        fn put_vars_string(
            ncid: Ncid,
            varid: VarId,
            start: &[usize],
            count: &[usize],
            stride: &[isize],
            op: &[StrPtr<'_>],
        ) => nc_put_vars_string;
        /// Write raw values, strided hyper-rectangle.
        fn put_vars(
            ncid: Ncid,
            varid: VarId,
            start: &[usize],
            count: &[usize],
            stride: &[isize],
            op: &[u8],
        ) => nc_put_vars;
        fn put_vars_vlen(
            ncid: Ncid,
            varid: VarId,
            start: &[usize],
            count: &[usize],
            stride: &[isize],
            op: &[Vlen],
        ) => nc_put_vars;
        fn put_vars_ptr(
            ncid: Ncid,
            varid: VarId,
            start: &[usize],
            count: &[usize],
            stride: &[isize],
            op: Raw<'_>,
        ) => nc_put_vars;
    }
}
