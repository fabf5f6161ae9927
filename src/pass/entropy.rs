/// Password entropy in bits for `length` uniform draws from `alphabet_len` symbols.
pub fn entropy_bits(length: usize, alphabet_len: usize) -> f64 {
    if alphabet_len == 0 {
        return 0.0;
    }
    length as f64 * (alphabet_len as f64).log2()
}

pub fn strength(bits: f64) -> &'static str {
    match bits as u32 {
        0..=35 => "Weak",
        36..=59 => "Fair",
        60..=127 => "Strong",
        _ => "Very Strong",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digits_only_pin() {
        let bits = entropy_bits(4, 10);
        assert!((bits - 13.287).abs() < 0.001);
        assert_eq!(strength(bits), "Weak");
    }

    #[test]
    fn full_alphabet_default_length() {
        // 12 * log2(81) ≈ 76.1
        let bits = entropy_bits(12, 81);
        assert_eq!(strength(bits), "Strong");
        assert_eq!(strength(entropy_bits(32, 81)), "Very Strong");
    }

    #[test]
    fn empty_alphabet_has_no_entropy() {
        assert_eq!(entropy_bits(12, 0), 0.0);
    }
}
