//! # MD5 Message Digest (RFC 1321)
//!
//! Self-contained implementation of MD5 over a complete in-memory message.
//! There is no streaming state: the message is padded in one step and the
//! compression function runs over each 64-byte block in turn.
//!
//! ## Properties
//!
//! - Total: defined for every input length, including zero. No error type.
//! - All arithmetic is modulo 2^32 (`wrapping_add`, `rotate_left`).
//! - The 64-round schedule has no data-dependent branches; the quartile
//!   selection depends only on the round index.
//!
//! MD5 is not collision resistant. It is provided for byte-exact
//! interoperability with existing identifier hashes, not for security.

/// Size of an MD5 digest in bytes.
pub const MD5_OUTPUT_LEN: usize = 16;

const BLOCK_LEN: usize = 64;

/// Length field appended during padding, in bytes.
const LENGTH_FIELD_LEN: usize = 8;

const INITIAL_STATE: [u32; 4] = [0x6745_2301, 0xefcd_ab89, 0x98ba_dcfe, 0x1032_5476];

/// `K[j] = floor(2^32 * |sin(j + 1)|)`.
#[rustfmt::skip]
const K: [u32; 64] = [
    0xd76a_a478, 0xe8c7_b756, 0x2420_70db, 0xc1bd_ceee,
    0xf57c_0faf, 0x4787_c62a, 0xa830_4613, 0xfd46_9501,
    0x6980_98d8, 0x8b44_f7af, 0xffff_5bb1, 0x895c_d7be,
    0x6b90_1122, 0xfd98_7193, 0xa679_438e, 0x49b4_0821,
    0xf61e_2562, 0xc040_b340, 0x265e_5a51, 0xe9b6_c7aa,
    0xd62f_105d, 0x0244_1453, 0xd8a1_e681, 0xe7d3_fbc8,
    0x21e1_cde6, 0xc337_07d6, 0xf4d5_0d87, 0x455a_14ed,
    0xa9e3_e905, 0xfcef_a3f8, 0x676f_02d9, 0x8d2a_4c8a,
    0xfffa_3942, 0x8771_f681, 0x6d9d_6122, 0xfde5_380c,
    0xa4be_ea44, 0x4bde_cfa9, 0xf6bb_4b60, 0xbebf_bc70,
    0x289b_7ec6, 0xeaa1_27fa, 0xd4ef_3085, 0x0488_1d05,
    0xd9d4_d039, 0xe6db_99e5, 0x1fa2_7cf8, 0xc4ac_5665,
    0xf429_2244, 0x432a_ff97, 0xab94_23a7, 0xfc93_a039,
    0x655b_59c3, 0x8f0c_cc92, 0xffef_f47d, 0x8584_5dd1,
    0x6fa8_7e4f, 0xfe2c_e6e0, 0xa301_4314, 0x4e08_11a1,
    0xf753_7e82, 0xbd3a_f235, 0x2ad7_d2bb, 0xeb86_d391,
];

/// Per-round left-rotation amounts.
#[rustfmt::skip]
const S: [u32; 64] = [
    7, 12, 17, 22, 7, 12, 17, 22, 7, 12, 17, 22, 7, 12, 17, 22,
    5, 9, 14, 20, 5, 9, 14, 20, 5, 9, 14, 20, 5, 9, 14, 20,
    4, 11, 16, 23, 4, 11, 16, 23, 4, 11, 16, 23, 4, 11, 16, 23,
    6, 10, 15, 21, 6, 10, 15, 21, 6, 10, 15, 21, 6, 10, 15, 21,
];

/// Compute the MD5 digest of `message`.
///
/// The output is the four state words concatenated in little-endian order.
pub fn md5(message: &[u8]) -> [u8; MD5_OUTPUT_LEN] {
    let padded = pad_message(message);

    let mut state = INITIAL_STATE;
    for block in padded.chunks_exact(BLOCK_LEN) {
        compress(&mut state, block);
    }

    let mut digest = [0u8; MD5_OUTPUT_LEN];
    for (out, word) in digest.chunks_exact_mut(4).zip(state) {
        out.copy_from_slice(&word.to_le_bytes());
    }
    digest
}

/// Append `0x80`, zero fill to 56 mod 64, then the bit length as a
/// little-endian `u64`.
///
/// The result is a non-empty multiple of 64 bytes and is 9 to 72 bytes
/// longer than `message`.
pub(crate) fn pad_message(message: &[u8]) -> Vec<u8> {
    let zero_fill = (BLOCK_LEN - (message.len() + 1 + LENGTH_FIELD_LEN) % BLOCK_LEN) % BLOCK_LEN;
    // Length in bits, modulo 2^64.
    let bit_len = (message.len() as u64).wrapping_mul(8);

    let mut padded = Vec::with_capacity(message.len() + 1 + zero_fill + LENGTH_FIELD_LEN);
    padded.extend_from_slice(message);
    padded.push(0x80);
    padded.resize(padded.len() + zero_fill, 0);
    padded.extend_from_slice(&bit_len.to_le_bytes());
    padded
}

/// Run the 64-round compression function over one 64-byte block.
fn compress(state: &mut [u32; 4], block: &[u8]) {
    let mut m = [0u32; 16];
    for (word, bytes) in m.iter_mut().zip(block.chunks_exact(4)) {
        *word = u32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]);
    }

    let [mut a, mut b, mut c, mut d] = *state;

    for j in 0..64 {
        let (mix, g) = match j / 16 {
            0 => ((b & c) | (!b & d), j),
            1 => ((b & d) | (c & !d), (5 * j + 1) % 16),
            2 => (b ^ c ^ d, (3 * j + 5) % 16),
            _ => (c ^ (b | !d), (7 * j) % 16),
        };

        let f = a
            .wrapping_add(mix)
            .wrapping_add(K[j])
            .wrapping_add(m[g]);
        let rotated = b.wrapping_add(f.rotate_left(S[j]));

        a = d;
        d = c;
        c = b;
        b = rotated;
    }

    state[0] = state[0].wrapping_add(a);
    state[1] = state[1].wrapping_add(b);
    state[2] = state[2].wrapping_add(c);
    state[3] = state[3].wrapping_add(d);
}
