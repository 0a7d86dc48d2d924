//! Output sink for MAT5 data elements
//!
//! Wraps any `std::io::Write` and writes words, element buffers, tags and
//! padding in the configured byte order. Tags and padding are derived from
//! [`Tag`], the same formula the size queries use.

use crate::config::{Endianness, WriterConfig};
use crate::{Error, Result};
use byteorder::{BigEndian, ByteOrder, LittleEndian, WriteBytesExt};
use mat5_core::format::constants::array_flags::WORD_COUNT;
use mat5_core::{ArrayFlags, Mat5Element, Mat5Error, Mat5Type, Tag, TagWords};
use std::io::{self, Write};

const ZEROS: [u8; 8] = [0; 8];

/// Element types the sink can write in either byte order
pub trait SinkElement: Mat5Element {
    /// Write one element in byte order `B`
    fn write_one<B: ByteOrder, W: Write>(self, writer: &mut W) -> io::Result<()>;
}

/// Macro to implement SinkElement for multi-byte primitives
macro_rules! impl_sink_element {
    ($type:ty, $method:ident) => {
        impl SinkElement for $type {
            fn write_one<B: ByteOrder, W: Write>(self, writer: &mut W) -> io::Result<()> {
                writer.$method::<B>(self)
            }
        }
    };
}

impl_sink_element!(f32, write_f32);
impl_sink_element!(f64, write_f64);
impl_sink_element!(i16, write_i16);
impl_sink_element!(u16, write_u16);
impl_sink_element!(i32, write_i32);
impl_sink_element!(u32, write_u32);
impl_sink_element!(i64, write_i64);
impl_sink_element!(u64, write_u64);

impl SinkElement for i8 {
    fn write_one<B: ByteOrder, W: Write>(self, writer: &mut W) -> io::Result<()> {
        writer.write_i8(self)
    }
}

impl SinkElement for u8 {
    fn write_one<B: ByteOrder, W: Write>(self, writer: &mut W) -> io::Result<()> {
        writer.write_u8(self)
    }
}

/// Sequential writer for MAT5 data
pub struct Sink<W: Write> {
    inner: W,
    config: WriterConfig,
    position: u64,
}

impl<W: Write> Sink<W> {
    /// Create a sink with the default config
    pub fn new(inner: W) -> Self {
        Self::with_config(inner, WriterConfig::default())
    }

    /// Create a sink with an explicit config
    pub fn with_config(inner: W, config: WriterConfig) -> Self {
        Self {
            inner,
            config,
            position: 0,
        }
    }

    pub fn config(&self) -> &WriterConfig {
        &self.config
    }

    /// Number of bytes written through this sink
    pub fn position(&self) -> u64 {
        self.position
    }

    pub fn get_ref(&self) -> &W {
        &self.inner
    }

    /// Flush the underlying writer
    pub fn flush(&mut self) -> Result<()> {
        self.inner.flush()?;
        Ok(())
    }

    /// Unwrap the underlying writer
    pub fn into_inner(self) -> W {
        self.inner
    }

    pub fn write_bytes(&mut self, bytes: &[u8]) -> Result<()> {
        self.inner.write_all(bytes)?;
        self.position += bytes.len() as u64;
        Ok(())
    }

    pub fn write_zeros(&mut self, count: usize) -> Result<()> {
        let mut remaining = count;
        while remaining > 0 {
            let n = remaining.min(ZEROS.len());
            self.write_bytes(&ZEROS[..n])?;
            remaining -= n;
        }
        Ok(())
    }

    pub fn write_u32(&mut self, value: u32) -> Result<()> {
        self.write_elements(&[value])
    }

    pub fn write_i32(&mut self, value: i32) -> Result<()> {
        self.write_elements(&[value])
    }

    /// Write raw elements without tag or padding
    pub fn write_elements<T: SinkElement>(&mut self, values: &[T]) -> Result<()> {
        if self.config.endianness.is_native() {
            return self.write_bytes(bytemuck::cast_slice(values));
        }
        match self.config.endianness {
            Endianness::Little => write_all::<LittleEndian, _, _>(&mut self.inner, values)?,
            Endianness::Big => write_all::<BigEndian, _, _>(&mut self.inner, values)?,
        }
        self.position += std::mem::size_of_val(values) as u64;
        Ok(())
    }

    /// Write a data element tag
    pub fn write_element_tag(&mut self, tag: Tag) -> Result<()> {
        match tag.words()? {
            TagWords::Regular([data_type, num_bytes]) => {
                self.write_u32(data_type)?;
                self.write_u32(num_bytes)
            }
            TagWords::Packed(word) => self.write_u32(word),
        }
    }

    /// Write the tag for `count` elements of `data_type`
    pub fn write_tag(&mut self, data_type: Mat5Type, count: usize) -> Result<()> {
        self.write_element_tag(Tag::for_elements(data_type, count))
    }

    /// Write the padding that follows `count` elements of `data_type`
    pub fn write_padding(&mut self, data_type: Mat5Type, count: usize) -> Result<()> {
        self.write_zeros(data_type.padding(count))
    }

    /// Write a complete segment: tag, elements and padding
    pub fn write_segment<T: SinkElement>(&mut self, values: &[T]) -> Result<()> {
        self.write_tag(T::MAT5_TYPE, values.len())?;
        self.write_elements(values)?;
        self.write_padding(T::MAT5_TYPE, values.len())
    }

    /// Write the array flags subelement
    pub fn write_array_flags(&mut self, flags: &ArrayFlags) -> Result<()> {
        self.write_tag(Mat5Type::UInt32, WORD_COUNT)?;
        self.write_elements(&flags.encode())
    }

    /// Write the dimensions subelement
    pub fn write_dimensions(&mut self, dims: &[usize]) -> Result<()> {
        let dims = dimensions_to_i32(dims)?;
        self.write_segment(&dims)
    }

    /// Write the array name subelement
    pub fn write_name(&mut self, name: &str) -> Result<()> {
        let bytes: &[i8] = bytemuck::cast_slice(name.as_bytes());
        self.write_segment(bytes)
    }
}

/// Convert dimensions to their 32-bit wire form
pub fn dimensions_to_i32(dims: &[usize]) -> Result<Vec<i32>> {
    dims.iter()
        .map(|&dim| i32::try_from(dim).map_err(|_| Error::from(Mat5Error::SizeOverflow)))
        .collect()
}

fn write_all<B: ByteOrder, W: Write, T: SinkElement>(
    writer: &mut W,
    values: &[T],
) -> io::Result<()> {
    for &value in values {
        value.write_one::<B, W>(writer)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use mat5_core::MatlabType;

    fn sink(endianness: Endianness) -> Sink<Vec<u8>> {
        Sink::with_config(Vec::new(), WriterConfig::new().with_endianness(endianness))
    }

    #[test]
    fn test_byte_order() {
        let mut little = sink(Endianness::Little);
        little.write_u32(0x0102_0304).unwrap();
        assert_eq!(little.into_inner(), vec![4, 3, 2, 1]);

        let mut big = sink(Endianness::Big);
        big.write_u32(0x0102_0304).unwrap();
        big.write_elements(&[1.0f64]).unwrap();
        assert_eq!(
            big.into_inner(),
            vec![1, 2, 3, 4, 0x3f, 0xf0, 0, 0, 0, 0, 0, 0]
        );
    }

    #[test]
    fn test_regular_segment() {
        let mut sink = sink(Endianness::Little);
        sink.write_segment(&[1i32, 2, 3]).unwrap();
        assert_eq!(sink.position(), 24);

        let bytes = sink.into_inner();
        assert_eq!(&bytes[0..8], &[5, 0, 0, 0, 12, 0, 0, 0]);
        assert_eq!(&bytes[8..12], &[1, 0, 0, 0]);
        assert_eq!(&bytes[20..24], &[0, 0, 0, 0]);
    }

    #[test]
    fn test_small_element_segment() {
        let mut sink = sink(Endianness::Little);
        sink.write_name("abc").unwrap();
        assert_eq!(sink.into_inner(), vec![1, 0, 3, 0, b'a', b'b', b'c', 0]);

        let mut sink = self::sink(Endianness::Big);
        sink.write_segment(&[7i32]).unwrap();
        assert_eq!(sink.into_inner(), vec![0, 4, 0, 5, 0, 0, 0, 7]);
    }

    #[test]
    fn test_empty_segment() {
        let mut sink = sink(Endianness::Little);
        sink.write_name("").unwrap();
        assert_eq!(sink.into_inner(), vec![1, 0, 0, 0, 0, 0, 0, 0]);
    }

    #[test]
    fn test_array_flags_subelement() {
        let flags = ArrayFlags::new(MatlabType::Sparse)
            .with_global(true)
            .with_nz_max(4);
        let mut sink = sink(Endianness::Little);
        sink.write_array_flags(&flags).unwrap();
        assert_eq!(
            sink.into_inner(),
            vec![6, 0, 0, 0, 8, 0, 0, 0, 5, 4, 0, 0, 4, 0, 0, 0]
        );
    }

    #[test]
    fn test_dimensions_overflow() {
        let mut sink = sink(Endianness::Little);
        let err = sink.write_dimensions(&[1, usize::MAX]).unwrap_err();
        assert_eq!(err.format_error(), Some(Mat5Error::SizeOverflow));
        assert_eq!(sink.position(), 0);
    }

    #[test]
    fn test_write_zeros() {
        let mut sink = sink(Endianness::Little);
        sink.write_zeros(19).unwrap();
        assert_eq!(sink.position(), 19);
        assert!(sink.into_inner().iter().all(|&b| b == 0));
    }
}
