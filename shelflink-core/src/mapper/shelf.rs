//! Shelf-number derivation
//!
//! An online record does not carry a shelf number, so the reverse mapping
//! derives one from the library name. The value must be stable across
//! platforms, runs, and deployments, which rules out the standard library's
//! randomized hasher: the derivation is pinned to 32-bit FNV-1a over the
//! UTF-8 bytes of the name, reduced modulo 100.

const FNV_OFFSET_BASIS: u32 = 0x811c_9dc5;
const FNV_PRIME: u32 = 0x0100_0193;

/// Derive a shelf number in `0..100` from a library name.
pub(crate) fn shelf_number_for(library_name: &str) -> u32 {
    fnv1a(library_name.as_bytes()) % 100
}

/// 32-bit FNV-1a
fn fnv1a(bytes: &[u8]) -> u32 {
    bytes.iter().fold(FNV_OFFSET_BASIS, |hash, &byte| {
        (hash ^ u32::from(byte)).wrapping_mul(FNV_PRIME)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fnv1a_reference_vectors() {
        // Published FNV-1a 32-bit test vectors
        assert_eq!(fnv1a(b""), 0x811c_9dc5);
        assert_eq!(fnv1a(b"a"), 0xe40c_292c);
        assert_eq!(fnv1a(b"foobar"), 0xbf9c_f968);
    }

    #[test]
    fn test_shelf_number_is_bounded_and_deterministic() {
        let first = shelf_number_for("Main Library");
        let second = shelf_number_for("Main Library");
        assert_eq!(first, second);
        assert!(first < 100);
    }

    #[test]
    fn test_known_shelf_numbers() {
        // fnv1a("Main Library") = 0xd7d26133, mod 100
        assert_eq!(shelf_number_for("Main Library"), 83);
        // fnv1a("Unknown Library") = 0x221c6e6e, mod 100
        assert_eq!(shelf_number_for("Unknown Library"), 22);
    }
}
