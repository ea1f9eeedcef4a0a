//! Binson wire marks: the single leading byte that tags every element.
//!
//! The raw byte constants are what the encoder writes; the decoder classifies
//! an incoming byte once via [`Mark::from_byte`] and dispatches on the enum.

pub const BEGIN: u8 = 0x40;
pub const END: u8 = 0x41;
pub const BEGIN_ARRAY: u8 = 0x42;
pub const END_ARRAY: u8 = 0x43;
pub const TRUE: u8 = 0x44;
pub const FALSE: u8 = 0x45;
pub const DOUBLE: u8 = 0x46;

pub const INTEGER1: u8 = 0x10;
pub const INTEGER2: u8 = 0x11;
pub const INTEGER4: u8 = 0x12;
pub const INTEGER8: u8 = 0x13;

pub const STRING1: u8 = 0x14;
pub const STRING2: u8 = 0x15;
pub const STRING4: u8 = 0x16;

pub const BYTES1: u8 = 0x18;
pub const BYTES2: u8 = 0x19;
pub const BYTES4: u8 = 0x1a;

/// A classified wire mark.
///
/// Width-carrying marks (`Integer`, `String`, `Bytes`) hold the byte width of
/// the integer payload or length prefix: 1, 2, 4 (or 8 for integers).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mark {
    Begin,
    End,
    BeginArray,
    EndArray,
    True,
    False,
    Double,
    Integer(usize),
    String(usize),
    Bytes(usize),
}

impl Mark {
    /// Classify a byte, or `None` if it is not a Binson mark.
    pub fn from_byte(byte: u8) -> Option<Mark> {
        let mark = match byte {
            BEGIN => Mark::Begin,
            END => Mark::End,
            BEGIN_ARRAY => Mark::BeginArray,
            END_ARRAY => Mark::EndArray,
            TRUE => Mark::True,
            FALSE => Mark::False,
            DOUBLE => Mark::Double,
            INTEGER1 => Mark::Integer(1),
            INTEGER2 => Mark::Integer(2),
            INTEGER4 => Mark::Integer(4),
            INTEGER8 => Mark::Integer(8),
            STRING1 => Mark::String(1),
            STRING2 => Mark::String(2),
            STRING4 => Mark::String(4),
            BYTES1 => Mark::Bytes(1),
            BYTES2 => Mark::Bytes(2),
            BYTES4 => Mark::Bytes(4),
            _ => return None,
        };
        Some(mark)
    }

    /// The wire byte for this mark.
    pub fn byte(self) -> u8 {
        match self {
            Mark::Begin => BEGIN,
            Mark::End => END,
            Mark::BeginArray => BEGIN_ARRAY,
            Mark::EndArray => END_ARRAY,
            Mark::True => TRUE,
            Mark::False => FALSE,
            Mark::Double => DOUBLE,
            Mark::Integer(1) => INTEGER1,
            Mark::Integer(2) => INTEGER2,
            Mark::Integer(4) => INTEGER4,
            Mark::Integer(_) => INTEGER8,
            Mark::String(1) => STRING1,
            Mark::String(2) => STRING2,
            Mark::String(_) => STRING4,
            Mark::Bytes(1) => BYTES1,
            Mark::Bytes(2) => BYTES2,
            Mark::Bytes(_) => BYTES4,
        }
    }
}

impl std::fmt::Display for Mark {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Mark::Begin => f.write_str("begin"),
            Mark::End => f.write_str("end"),
            Mark::BeginArray => f.write_str("begin-array"),
            Mark::EndArray => f.write_str("end-array"),
            Mark::True => f.write_str("true"),
            Mark::False => f.write_str("false"),
            Mark::Double => f.write_str("double"),
            Mark::Integer(w) => write!(f, "integer{w}"),
            Mark::String(w) => write!(f, "string{w}"),
            Mark::Bytes(w) => write!(f, "bytes{w}"),
        }
    }
}
