// Port of Johannes Baagøe's Alea PRNG, the string-seeded generator that
// the seedrandom JS library ships as `alea`. Everything below is plain
// IEEE-754 f64 arithmetic, so a given seed yields the same sequence on
// every platform (and matches the JS output bit for bit).

const MASH_SEED: f64 = 4_022_871_197.0; // 0xefc8249d
const MASH_MULTIPLIER: f64 = 0.025_196_032_824_169_38;
const ALEA_MULTIPLIER: f64 = 2_091_639.0;
const TWO_POW_32: f64 = 4_294_967_296.0;
const INV_TWO_POW_32: f64 = 2.328_306_436_538_696_3e-10; // 2^-32

// Baagøe's "Mash" avalanche: folds UTF-16 code units into a running
// accumulator and emits a float in [0, 1) per call.
struct Mash {
    n: f64,
}

impl Mash {
    fn new() -> Self {
        Self { n: MASH_SEED }
    }

    fn mix(&mut self, data: &str) -> f64 {
        for unit in data.encode_utf16() {
            self.n += unit as f64;
            let mut h = MASH_MULTIPLIER * self.n;
            self.n = to_uint32(h);
            h -= self.n;
            h *= self.n;
            self.n = to_uint32(h);
            h -= self.n;
            self.n += h * TWO_POW_32;
        }
        to_uint32(self.n) * INV_TWO_POW_32
    }
}

// JavaScript's `>>> 0` (ToUint32) for the non-negative values Mash
// produces: truncate, then wrap modulo 2^32.
#[inline]
fn to_uint32(x: f64) -> f64 {
    (x.trunc() as u64 & 0xFFFF_FFFF) as f64
}

// Three float state words plus a 32-bit carry; period about 2^116.
pub struct Alea {
    s0: f64,
    s1: f64,
    s2: f64,
    c: u32,
}

impl Alea {
    pub fn new(seed: &str) -> Self {
        let mut mash = Mash::new();
        // the state starts from mash(' ') and is then perturbed by the
        // seed, exactly as in the reference implementation
        let mut s0 = mash.mix(" ");
        let mut s1 = mash.mix(" ");
        let mut s2 = mash.mix(" ");
        s0 -= mash.mix(seed);
        if s0 < 0.0 {
            s0 += 1.0;
        }
        s1 -= mash.mix(seed);
        if s1 < 0.0 {
            s1 += 1.0;
        }
        s2 -= mash.mix(seed);
        if s2 < 0.0 {
            s2 += 1.0;
        }
        Self { s0, s1, s2, c: 1 }
    }

    // Next uniform float in [0, 1)
    pub fn next(&mut self) -> f64 {
        let t = ALEA_MULTIPLIER * self.s0 + self.c as f64 * INV_TWO_POW_32;
        self.s0 = self.s1;
        self.s1 = self.s2;
        // t stays below 2^22, so truncation matches JS `t | 0`
        self.c = t as u32;
        self.s2 = t - self.c as f64;
        self.s2
    }
}
