use std::fmt;
use std::io::{Read, Write};
use std::str::FromStr;

use byteorder::{LittleEndian, ReadBytesExt, WriteBytesExt};
use uuid::Uuid;

use crate::error;
use crate::error::{Error, Result};

/// A Windows GUID in its structured 16-byte form.
///
/// The field split mirrors the textual 8-4-4-4-12 grouping: `data1` is the
/// first group, `data2` and `data3` the next two, and `data4` holds the
/// fourth and fifth groups concatenated (2 + 6 bytes). In the binary wire
/// layout the first three fields are little-endian; `data4` is a plain byte
/// sequence.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub struct Guid {
    pub data1: u32,
    pub data2: u16,
    pub data3: u16,
    pub data4: [u8; 8],
}

impl Guid {
    /// The null GUID, `{00000000-0000-0000-0000-000000000000}`.
    pub const NULL: Guid = Guid {
        data1: 0,
        data2: 0,
        data3: 0,
        data4: [0; 8],
    };

    /// Creates a GUID from its component values.
    pub const fn from_values(data1: u32, data2: u16, data3: u16, data4: [u8; 8]) -> Self {
        Guid { data1, data2, data3, data4 }
    }

    pub fn is_null(&self) -> bool {
        *self == Guid::NULL
    }

    /// Parses GUID text of the form `XXXXXXXX-XXXX-XXXX-XXXX-XXXXXXXXXXXX`,
    /// optionally wrapped in a single matching pair of braces enclosing the
    /// whole string. Hex digits may be any mix of upper and lower case.
    ///
    /// The match must consume the entire input: wrong grouping, missing
    /// hyphens (including the contiguous 32-digit form), stray whitespace
    /// and unbalanced braces are all errors.
    pub fn parse(text: &str) -> Result<Guid> {
        let inner = match text.strip_prefix('{') {
            Some(rest) => rest
                .strip_suffix('}')
                .ok_or_else(|| error::parse(Some(format!("unbalanced braces: {:?}", text))))?,
            None => text,
        };

        let bytes = inner.as_bytes();
        if bytes.len() != 36
            || bytes[8] != b'-'
            || bytes[13] != b'-'
            || bytes[18] != b'-'
            || bytes[23] != b'-'
        {
            return Err(error::parse(Some(format!("malformed GUID text: {:?}", text))));
        }

        // Hyphen positions are checked above, so these slices fall on char
        // boundaries even for non-ASCII garbage.
        let data1 = u32::from_be_bytes(decode_group::<4>(&inner[0..8])?);
        let data2 = u16::from_be_bytes(decode_group::<2>(&inner[9..13])?);
        let data3 = u16::from_be_bytes(decode_group::<2>(&inner[14..18])?);
        let head = decode_group::<2>(&inner[19..23])?;
        let tail = decode_group::<6>(&inner[24..36])?;

        let mut data4 = [0u8; 8];
        data4[..2].copy_from_slice(&head);
        data4[2..].copy_from_slice(&tail);

        Ok(Guid { data1, data2, data3, data4 })
    }

    /// Parses like [`Guid::parse`] but returns the null GUID on any failure,
    /// with no error signal — the classic single-return contract of the
    /// Windows-side helpers. A caller that must tell a failed parse apart
    /// from genuine `{00000000-0000-0000-0000-000000000000}` input should
    /// use [`Guid::parse`] instead.
    pub fn parse_or_null(text: &str) -> Guid {
        Guid::parse(text).unwrap_or(Guid::NULL)
    }

    /// Returns the 16-byte mixed-endian (Windows wire) layout: `data1`,
    /// `data2` and `data3` little-endian, `data4` as-is.
    pub fn to_le_bytes(&self) -> [u8; 16] {
        let mut out = [0u8; 16];
        out[0..4].copy_from_slice(&self.data1.to_le_bytes());
        out[4..6].copy_from_slice(&self.data2.to_le_bytes());
        out[6..8].copy_from_slice(&self.data3.to_le_bytes());
        out[8..16].copy_from_slice(&self.data4);
        out
    }

    /// Builds a GUID from the 16-byte mixed-endian layout.
    pub fn from_le_bytes(bytes: [u8; 16]) -> Guid {
        Guid {
            data1: u32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]),
            data2: u16::from_le_bytes([bytes[4], bytes[5]]),
            data3: u16::from_le_bytes([bytes[6], bytes[7]]),
            data4: [
                bytes[8], bytes[9], bytes[10], bytes[11],
                bytes[12], bytes[13], bytes[14], bytes[15],
            ],
        }
    }

    /// Reads a GUID from the current position of `rdr` in the mixed-endian
    /// binary layout, consuming exactly 16 bytes.
    pub fn from_reader(mut rdr: impl Read) -> Result<Guid> {
        let data1 = rdr.read_u32::<LittleEndian>().map_err(error::map_io_err)?;
        let data2 = rdr.read_u16::<LittleEndian>().map_err(error::map_io_err)?;
        let data3 = rdr.read_u16::<LittleEndian>().map_err(error::map_io_err)?;
        let mut data4 = [0u8; 8];
        rdr.read_exact(&mut data4).map_err(error::map_io_err)?;

        Ok(Guid { data1, data2, data3, data4 })
    }

    /// Writes the GUID at the current position of `wr` in the mixed-endian
    /// binary layout.
    pub fn write_to(&self, mut wr: impl Write) -> Result<()> {
        wr.write_u32::<LittleEndian>(self.data1).map_err(error::map_io_err)?;
        wr.write_u16::<LittleEndian>(self.data2).map_err(error::map_io_err)?;
        wr.write_u16::<LittleEndian>(self.data3).map_err(error::map_io_err)?;
        wr.write_all(&self.data4).map_err(error::map_io_err)?;

        Ok(())
    }

    /// Builds a GUID from an RFC 4122 [`Uuid`], which stores the same four
    /// fields in all-big-endian order.
    pub fn from_uuid(uuid: &Uuid) -> Guid {
        let (data1, data2, data3, data4) = uuid.as_fields();
        Guid { data1, data2, data3, data4: *data4 }
    }

    /// Converts the GUID to an RFC 4122 [`Uuid`].
    pub fn to_uuid(&self) -> Uuid {
        Uuid::from_fields(self.data1, self.data2, self.data3, &self.data4)
    }
}

impl FromStr for Guid {
    type Err = Error;

    fn from_str(s: &str) -> Result<Guid> {
        Guid::parse(s)
    }
}

impl From<Uuid> for Guid {
    fn from(uuid: Uuid) -> Guid {
        Guid::from_uuid(&uuid)
    }
}

impl From<Guid> for Uuid {
    fn from(guid: Guid) -> Uuid {
        guid.to_uuid()
    }
}

/// The canonical textual form: brace-wrapped, uppercase, zero-padded
/// 8-4-4-4-12 grouping.
impl fmt::Display for Guid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{{{:08X}-{:04X}-{:04X}-{:02X}{:02X}-{:02X}{:02X}{:02X}{:02X}{:02X}{:02X}}}",
            self.data1, self.data2, self.data3,
            self.data4[0], self.data4[1],
            self.data4[2], self.data4[3], self.data4[4],
            self.data4[5], self.data4[6], self.data4[7],
        )
    }
}

fn decode_group<const N: usize>(group: &str) -> Result<[u8; N]> {
    let mut out = [0u8; N];
    hex::decode_to_slice(group, &mut out)
        .map_err(|_| error::parse(Some(format!("bad hex group: {:?}", group))))?;

    Ok(out)
}
