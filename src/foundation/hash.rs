//! 32-bit string hashes over UTF-16 code units.
//!
//! Both hashes walk `str::encode_utf16` so that a tag hashes to the same value a
//! browser computes from `charCodeAt`.

/// Rolling `h * 31 + c` hash, wrapping in a signed 32-bit accumulator.
///
/// This is the canonical hash behind tag colors.
pub fn rolling_hash31(s: &str) -> i32 {
    let mut h = 0i32;
    for unit in s.encode_utf16() {
        h = h.wrapping_mul(31).wrapping_add(i32::from(unit));
    }
    h
}

/// Streaming 32-bit FNV-1a over UTF-16 code units.
#[derive(Clone, Copy, Debug)]
pub(crate) struct Fnv1a32(u32);

impl Fnv1a32 {
    pub(crate) const OFFSET_BASIS: u32 = 0x811c_9dc5;
    const PRIME: u32 = 0x0100_0193;

    pub(crate) fn new_default() -> Self {
        Self(Self::OFFSET_BASIS)
    }

    pub(crate) fn write_u16(&mut self, unit: u16) {
        self.0 ^= u32::from(unit);
        self.0 = self.0.wrapping_mul(Self::PRIME);
    }

    pub(crate) fn write_str(&mut self, s: &str) {
        for unit in s.encode_utf16() {
            self.write_u16(unit);
        }
    }

    pub(crate) fn finish(self) -> u32 {
        self.0
    }
}

/// One-shot FNV-1a 32 of a string. Used for SVG gradient ids, never for colors.
pub fn fnv1a32(s: &str) -> u32 {
    let mut h = Fnv1a32::new_default();
    h.write_str(s);
    h.finish()
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/hash.rs"]
mod tests;
