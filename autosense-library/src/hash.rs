//! Sensor and category name hashing
//!
//! Names are stored and compared as 16-bit djb2 hashes of the upper-cased
//! ASCII name (`h = h·33 + c`, seed 5381). The hashes are part of the
//! persisted configuration format, so the function must never change.

/// Case-insensitive 16-bit djb2 hash. Usable in `const` context.
pub const fn name_hash(name: &str) -> u16 {
    let bytes = name.as_bytes();
    let mut hash: u16 = 5381;
    let mut i = 0;
    while i < bytes.len() {
        hash = hash.wrapping_mul(33).wrapping_add(bytes[i].to_ascii_uppercase() as u16);
        i += 1;
    }
    hash
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matches_stored_hashes() {
        assert_eq!(name_hash("NONE"), 0x2F75);
        assert_eq!(name_hash("VDO_2BAR_CURVE"), 0x6FB8);
        assert_eq!(name_hash("W_PHASE_RPM"), 0x1F3A);
        assert_eq!(name_hash("NTC"), 0x09CA);
    }

    #[test]
    fn case_insensitive() {
        assert_eq!(name_hash("max6675"), name_hash("MAX6675"));
        assert_eq!(name_hash("Hall_Speed"), 0xB076);
    }

    #[test]
    fn empty_name_is_seed() {
        assert_eq!(name_hash(""), 5381);
    }
}
