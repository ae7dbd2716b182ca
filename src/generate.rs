use crate::alphabet::Alphabet;
use crate::id::Id;
use crate::rng::RandomSource;

/// Generates an id of exactly `length` characters drawn from `alphabet`.
///
/// Sampling is done with a bitmask and rejection: every random byte is
/// masked down to the smallest power-of-two range covering the alphabet
/// indexes, and bytes that still land outside the alphabet are discarded.
/// A plain `byte % len` would favor low indexes whenever the alphabet size
/// is not a power of two; the mask keeps the accepted bytes uniform and
/// bounds the rejection rate below 50%, so the expected work stays linear
/// in `length`.
///
/// Bytes are drawn in oversized batches (sliced from successive 64-bit
/// pulls, low byte first) so that one batch usually yields enough accepted
/// bytes to fill the id in a single pass. The batch size is a throughput
/// tuning knob only; completion is guaranteed by re-drawing until the id
/// is full.
///
/// `length == 0` returns the empty id without consuming any randomness.
///
/// ```
/// use nid::{generate, Alphabet, SeededRandom};
///
/// let hex = Alphabet::new("0123456789abcdef");
/// let id = generate(&hex, 16, &mut SeededRandom::new(1));
///
/// assert_eq!(&*id, "c0d3cf7cbba63682");
/// ```
pub fn generate(alphabet: &Alphabet, length: usize, source: &mut impl RandomSource) -> Id {
    if length == 0 {
        return Id::from("");
    }

    let k = alphabet.len();

    // Smallest all-ones bitmask covering every valid index. 0 for a
    // single-entry alphabet.
    let mask = k.next_power_of_two() - 1;

    // Oversize the batch so that, in expectation, one batch survives the
    // rejection below with `length` bytes to spare. 1.6 is a tuning
    // constant, not a correctness requirement.
    let steps = length.max((1.6 * mask as f64 * length as f64 / k as f64).ceil() as usize);

    let mut out = String::with_capacity(length);
    let mut filled = 0;
    let mut bytes = vec![0; steps];

    loop {
        fill_bytes(source, &mut bytes);

        for &b in &bytes {
            let idx = (b as usize) & mask;

            if idx >= k {
                continue;
            }

            out.push(alphabet.char_at(idx));
            filled += 1;

            if filled == length {
                return Id::from(out);
            }
        }

        trace!("Batch exhausted at {}/{} chars, drawing again", filled, length);
    }
}

// Slice 64-bit pulls into bytes, low byte first. Excess bytes of the
// final pull are discarded.
fn fill_bytes(source: &mut impl RandomSource, buf: &mut [u8]) {
    for chunk in buf.chunks_mut(8) {
        let bytes = source.next_u64().to_le_bytes();
        chunk.copy_from_slice(&bytes[..chunk.len()]);
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::rng::SeededRandom;

    #[test]
    fn zero_length_consumes_no_randomness() {
        let alphabet = Alphabet::new("abc");

        let mut draws = 0;
        let id = generate(&alphabet, 0, &mut || -> u64 {
            draws += 1;
            0
        });

        assert_eq!(&*id, "");
        assert_eq!(draws, 0);
    }

    #[test]
    fn bytes_are_consumed_low_byte_first() {
        let alphabet = Alphabet::url_safe();

        // Little-endian slicing of this value yields bytes 0x00..=0x07.
        let id = generate(alphabet, 4, &mut || -> u64 { 0x0706050403020100 });

        assert_eq!(&*id, "0123");
    }

    #[test]
    fn out_of_range_bytes_are_rejected() {
        let alphabet = Alphabet::new("abcde");

        // k = 5, mask = 7. The low three bytes (5, 6, 7) mask in range
        // but index past the alphabet, so only 0..=4 may contribute.
        let id = generate(&alphabet, 5, &mut || -> u64 { 0x0403020100070605 });

        assert_eq!(&*id, "abcde");
    }

    #[test]
    fn single_entry_alphabet_always_picks_it() {
        // mask = 0: every byte indexes entry 0.
        let id = generate(&Alphabet::new("a"), 10, &mut SeededRandom::new(9));
        assert_eq!(&*id, "aaaaaaaaaa");
    }

    #[test]
    fn full_byte_alphabet_rejects_nothing() {
        let chars: String = (0..256u32).map(|i| char::from_u32(0x100 + i).unwrap()).collect();
        let alphabet = Alphabet::new(&chars);

        let id = generate(&alphabet, 50, &mut SeededRandom::new(4));

        assert_eq!(id.chars().count(), 50);
        assert!(id.chars().all(|c| alphabet.contains(c)));
    }

    #[test]
    fn seeded_generation_is_reference_stable() {
        // Pinned output: any change to masking, batch slicing or byte
        // order shows up here.
        let id = generate(Alphabet::url_safe(), 21, &mut SeededRandom::new(0xCAFE));
        assert_eq!(&*id, "RNlGu_1wwk2MaQinLSy1T");

        let id = generate(&Alphabet::new("abcde"), 10, &mut SeededRandom::new(2));
        assert_eq!(&*id, "bcabdbeebb");
    }
}
