use bitvec::prelude::{BitVec, Msb0};
use std::fmt;

/// MSB-first storage, so that bit 1 of the FIPS-46 tables is index 0 here.
type Bits = BitVec<u8, Msb0>;

/// Fixed-length bit sequence used for every intermediate value of the cipher
/// (64, 56, 48, 32, 28, 6 and 4 bits all occur).
#[derive(Clone, PartialEq, Eq)]
pub struct BitVector {
    bits: Bits,
}

impl BitVector {
    pub fn with_capacity(bits: usize) -> Self {
        BitVector {
            bits: Bits::with_capacity(bits),
        }
    }

    /// Interprets each byte MSB-first, so `from_bytes(&[0x80])` starts with a set bit.
    pub fn from_bytes(bytes: &[u8]) -> Self {
        BitVector {
            bits: Bits::from_slice(bytes),
        }
    }

    pub fn len(&self) -> usize {
        self.bits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    pub fn bit(&self, index: usize) -> bool {
        self.bits[index]
    }

    pub fn push(&mut self, bit: bool) {
        self.bits.push(bit);
    }

    /// Appends the low 4 bits of `value`, most significant first.
    pub fn push_nibble(&mut self, value: u8) {
        for shift in (0..4).rev() {
            self.bits.push((value >> shift) & 1 != 0);
        }
    }

    /// Applies a 1-based permutation table: `output[i] = input[table[i] - 1]`.
    ///
    /// The output has the table's length, which may duplicate or drop input
    /// bits. A table entry outside `1..=len` means the constant table itself
    /// is malformed, so this panics rather than guessing.
    pub fn permute(&self, table: &[usize]) -> BitVector {
        let mut permuted = Bits::with_capacity(table.len());
        for (slot, &position) in table.iter().enumerate() {
            assert!(
                position >= 1 && position <= self.bits.len(),
                "permutation table slot {} selects bit {} of a {}-bit input",
                slot,
                position,
                self.bits.len()
            );
            permuted.push(self.bits[position - 1]);
        }
        BitVector { bits: permuted }
    }

    pub fn xor(&self, other: &BitVector) -> BitVector {
        assert_eq!(
            self.len(),
            other.len(),
            "xor operands must have equal widths"
        );
        let bits = self
            .bits
            .iter()
            .by_vals()
            .zip(other.bits.iter().by_vals())
            .map(|(a, b)| a ^ b)
            .collect();
        BitVector { bits }
    }

    /// Rotates left, wrapping within the vector's own length.
    pub fn rotate_left(&mut self, count: usize) {
        let len = self.bits.len();
        if len > 0 {
            self.bits.rotate_left(count % len);
        }
    }

    pub fn split_at(&self, mid: usize) -> (BitVector, BitVector) {
        let (head, tail) = self.bits.split_at(mid);
        (
            BitVector {
                bits: head.iter().by_vals().collect(),
            },
            BitVector {
                bits: tail.iter().by_vals().collect(),
            },
        )
    }

    pub fn concat(&self, other: &BitVector) -> BitVector {
        let mut bits = Bits::with_capacity(self.len() + other.len());
        bits.extend(self.bits.iter().by_vals());
        bits.extend(other.bits.iter().by_vals());
        BitVector { bits }
    }

    /// Packs MSB-first; trailing bits of a partial final byte are zero.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.bits.len().div_ceil(8));
        for chunk in self.bits.chunks(8) {
            let mut byte = 0u8;
            for (offset, bit) in chunk.iter().by_vals().enumerate() {
                if bit {
                    byte |= 1 << (7 - offset);
                }
            }
            bytes.push(byte);
        }
        bytes
    }
}

impl fmt::Debug for BitVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, bit) in self.bits.iter().by_vals().enumerate() {
            if index > 0 && index % 8 == 0 {
                f.write_str(" ")?;
            }
            f.write_str(if bit { "1" } else { "0" })?;
        }
        Ok(())
    }
}
