//! Byte-level model of the Go FlatBuffers runtime used by integration tests.
//!
//! `StructWriter` replays a struct constructor plan the way the Go builder
//! executes it (growing backward). `TableWriter`/`TableView` lay out and
//! read a table through its vtable, following the same rules as the
//! generated accessors.

#![allow(dead_code)]

use flatgo_codegen::go::BuildOp;
use flatgo_schema::ScalarKind;
use std::collections::HashMap;

/// Encodes a schema default constant for `kind` as little-endian bytes.
pub fn encode_constant(kind: ScalarKind, constant: &str) -> Vec<u8> {
    let constant = constant.trim();
    match kind {
        ScalarKind::Bool => vec![u8::from(!matches!(constant, "" | "0" | "false"))],
        ScalarKind::Float32 => constant
            .parse::<f32>()
            .expect("Invalid float constant")
            .to_le_bytes()
            .to_vec(),
        ScalarKind::Float64 => constant
            .parse::<f64>()
            .expect("Invalid float constant")
            .to_le_bytes()
            .to_vec(),
        ScalarKind::UInt64 => constant
            .parse::<u64>()
            .expect("Invalid integer constant")
            .to_le_bytes()
            .to_vec(),
        _ => {
            let value = constant.parse::<i64>().expect("Invalid integer constant");
            value.to_le_bytes()[..kind.size()].to_vec()
        }
    }
}

/// Returns a distinct non-zero sample value of `kind` for index `i`.
pub fn sample(kind: ScalarKind, i: usize) -> Vec<u8> {
    match kind {
        ScalarKind::Bool => vec![1],
        ScalarKind::Float32 => (i as f32 + 0.5).to_le_bytes().to_vec(),
        ScalarKind::Float64 => (i as f64 + 0.25).to_le_bytes().to_vec(),
        _ => {
            let value = (i as u64 + 1).wrapping_mul(0x0101_0101_0101_0101);
            value.to_le_bytes()[..kind.size()].to_vec()
        }
    }
}

/// Backward-growing byte buffer mirroring the Go builder.
#[derive(Debug, Default)]
pub struct StructWriter {
    bytes: Vec<u8>,
}

impl StructWriter {
    pub fn new() -> Self {
        Self::default()
    }

    fn pad(&mut self, n: usize) {
        self.bytes.splice(0..0, std::iter::repeat_n(0u8, n));
    }

    fn prep(&mut self, align: usize, additional: usize) {
        let used = self.bytes.len() + additional;
        let padding = (align - used % align) % align;
        self.pad(padding);
    }

    fn prepend(&mut self, value: &[u8]) {
        self.prep(value.len(), 0);
        self.bytes.splice(0..0, value.iter().copied());
    }

    /// Executes `ops`, taking scalar arguments by name from `args`.
    pub fn run(&mut self, ops: &[BuildOp], args: &HashMap<String, Vec<u8>>) {
        for op in ops {
            match op {
                BuildOp::Prep { align, size } => self.prep(*align, *size),
                BuildOp::Pad(n) => self.pad(*n),
                BuildOp::Prepend { arg, .. } => {
                    let value = args.get(arg).expect("Missing argument");
                    self.prepend(value);
                }
            }
        }
    }

    /// Returns the written bytes, first byte at offset 0 of the struct.
    pub fn finish(self) -> Vec<u8> {
        self.bytes
    }
}

/// Forward table layout: vtable first, then the table object.
///
/// The object starts 8-byte aligned, so alignment relative to the object is
/// also absolute.
#[derive(Debug)]
pub struct TableWriter {
    num_fields: usize,
    fields: Vec<(usize, Vec<u8>, usize)>,
}

impl TableWriter {
    pub fn start_object(num_fields: usize) -> Self {
        Self {
            num_fields,
            fields: Vec::new(),
        }
    }

    /// Adds a slot value, omitting it when it equals the default.
    pub fn add_slot(&mut self, slot: usize, value: Vec<u8>, default: &[u8]) {
        assert!(slot < self.num_fields, "slot {} out of range", slot);
        if value != default {
            let align = value.len();
            self.fields.push((slot, value, align));
        }
    }

    /// Adds an inline struct. Structs have no default and are always stored.
    pub fn add_struct_slot(&mut self, slot: usize, value: Vec<u8>, align: usize) {
        assert!(slot < self.num_fields, "slot {} out of range", slot);
        self.fields.push((slot, value, align));
    }

    /// Lays out the table. Returns the buffer and the table position.
    pub fn end_object(self) -> (Vec<u8>, usize) {
        let mut object = vec![0u8; 4];
        let entries = self.fields.iter().map(|(slot, _, _)| slot + 1).max().unwrap_or(0);
        let mut vtable = vec![0u16; entries];

        for (slot, value, align) in &self.fields {
            while object.len() % align != 0 {
                object.push(0);
            }
            vtable[*slot] = u16::try_from(object.len()).expect("Table too large");
            object.extend_from_slice(value);
        }

        let vt_size = 4 + 2 * entries;
        let pos = vt_size.div_ceil(8) * 8;
        let mut buf = Vec::with_capacity(pos + object.len());
        buf.extend_from_slice(&(vt_size as u16).to_le_bytes());
        buf.extend_from_slice(&(object.len() as u16).to_le_bytes());
        for entry in vtable {
            buf.extend_from_slice(&entry.to_le_bytes());
        }
        buf.resize(pos, 0);

        object[..4].copy_from_slice(&(pos as i32).to_le_bytes());
        buf.extend_from_slice(&object);
        (buf, pos)
    }
}

/// Reader resolving fields through the vtable.
#[derive(Debug)]
pub struct TableView<'a> {
    buf: &'a [u8],
    pos: usize,
}

impl<'a> TableView<'a> {
    pub fn new(buf: &'a [u8], pos: usize) -> Self {
        Self { buf, pos }
    }

    fn u16_at(&self, at: usize) -> usize {
        usize::from(u16::from_le_bytes([self.buf[at], self.buf[at + 1]]))
    }

    /// Returns the field offset stored at `vtable_offset`, or 0 if absent.
    pub fn offset(&self, vtable_offset: usize) -> usize {
        let soffset = i32::from_le_bytes(
            self.buf[self.pos..self.pos + 4]
                .try_into()
                .expect("Short buffer"),
        );
        let vtable = (self.pos as i64 - i64::from(soffset)) as usize;
        if vtable_offset < self.u16_at(vtable) {
            self.u16_at(vtable + vtable_offset)
        } else {
            0
        }
    }

    /// Reads `size` bytes of the field at `vtable_offset`, if present.
    pub fn get(&self, vtable_offset: usize, size: usize) -> Option<&'a [u8]> {
        match self.offset(vtable_offset) {
            0 => None,
            o => Some(&self.buf[self.pos + o..self.pos + o + size]),
        }
    }
}
