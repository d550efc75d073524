#[cfg(not(any(target_pointer_width = "64")))]
compile_error!("this crate requires 64-bit limbs");

use crate::blsparam::BLSParam;
use crate::traits::{BLSField, One};
use crate::BLSError;
use crypto_bigint::{Integer, Limb, NonZero, Random, Uint, Word, Zero};
use crypto_bigint::rand_core::{RngCore, TryRngCore};
use crypto_bigint::subtle::{Choice, ConditionallySelectable, ConstantTimeEq, ConstantTimeLess, CtOption};
use rand::Rng;
use sha3::{Shake128, Shake256};
use sha3::digest::ExtendableOutput;
use std::fmt::{Debug, Display, Formatter};
use std::marker::PhantomData;
use std::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign};

/// An element of the prime field <b>F</b><sub><i>p</i></sub>, kept in
/// Montgomery form: the limb array holds <i>a&middot;s</i> mod <i>p</i>,
/// where <i>s</i> &#x2254; <i>2&#x2076;&#x2074;&#x02E1;</i> &gt; <i>p</i>
/// and the limb array is canonical (strictly below <i>p</i>) at all times.
pub struct BLSFp<BLS: BLSParam, const LIMBS: usize>(
    #[doc(hidden)]
    pub Uint<LIMBS>,
    #[doc(hidden)]
    pub PhantomData<BLS>,
);

impl<BLS: BLSParam, const LIMBS: usize> BLSFp<BLS, LIMBS> {
    /// Montgomery reduction of <i>t</i> = (<i>t_lo</i>, <i>t_hi</i>) in range 0..&lt;<i>p&times;2&#x02B7;</i>,
    /// where <i>p &lt; 2&#x02B7;</i> is the field modulus and <i>w</i> &#x2254; <i>64&times;LIMBS</i>.
    ///
    /// Return <i>t&times;2&#8315;&#x02B7;</i> in range 0..&lt;<i>p</i>.
    #[inline]
    fn redc(t_lo: Uint<LIMBS>, t_hi: Uint<LIMBS>) -> Uint<LIMBS> {
        let p: Uint<LIMBS> = Uint::from_words(BLS::MODULUS.try_into().unwrap());  // p < 2^w
        let q: Uint<LIMBS> = Uint::from_words(BLS::NEG_INV_MOD.try_into().unwrap());  // q := -1/p mod 2^w
        // m ← ((t mod s)*q) mod s = (t_lo*q) mod s:
        let (m, _) = t_lo.widening_mul(&q);
        // t ← (t + m*p) / s:
        let (mp_lo, mp_hi) = m.widening_mul(&p);
        let (_, carry) = t_lo.carrying_add(&mp_lo, Limb::ZERO);
        let (t, _) = t_hi.carrying_add(&mp_hi, carry);
        // return if t < p { t } else { t - p }
        t - Uint::conditional_select(&p, &Uint::ZERO, t.ct_lt(&p))
    }

    /// Convert an unsigned integer (Uint) value <i>w</i> to Montgomery form,
    /// namely, the value <i>w&middot;s</i> mod <i>p</i> =
    /// redc((<i>w</i> mod <i>p</i>)&middot;(<i>s&sup2;</i> mod <i>p</i>)),
    /// where <i>s &gt; p</i> is a power of 2.
    #[inline]
    pub fn from_uint(w: Uint<LIMBS>) -> Self {
        let s2: Uint<LIMBS> = Uint::from_words(BLS::MONTY_P.try_into().unwrap());
        let (lo, hi) = w.widening_mul(&s2);
        Self {
            0: Self::redc(lo, hi),
            1: Default::default(),
        }
    }

    /// Convert a word-sized integer <i>w</i> to Montgomery form.
    #[inline]
    pub fn from_word(w: Word) -> Self {
        Self::from_uint(Uint::from_word(w))
    }

    /// Convert an integer <i>w</i> represented by a sequence of words to Montgomery form.
    #[inline]
    pub(crate) fn from_words(v: [Word; LIMBS]) -> Self {
        Self::from_uint(Uint::from_words(v))
    }

    /// Convert a big-endian hexadecimal string (exactly 16&times;LIMBS digits,
    /// no prefix) to a field element in Montgomery form.
    #[inline]
    pub fn from_be_hex(s: &str) -> Self {
        Self::from_uint(Uint::from_be_hex(s))
    }

    /// Hash input data into a field element with SHAKE-128.
    ///
    /// Twice as much hash output is converted to the field element via Montgomery reduction.
    /// This ensures the deviation from uniform sampling over <b>F</b><sub><i>p</i></sub>
    /// is upper-bounded by <i>p&#8315;&sup1;</i>, well below the target
    /// adversary advantage <i>O</i>(<i>p<sup>-&frac12;</sup></i>).
    #[inline]
    pub fn shake128(data: &[u8]) -> Self {
        let mut out = vec![0u8; 2*LIMBS*8];  // twice the space taken by a base field element
        Shake128::digest_xof(data, &mut out);
        out[2*LIMBS*8 - 1] = 0;  // make sure the lift to Z does not exceed p*2^(64*LIMBS)
        let lo = Uint::from_le_slice(&out[0..LIMBS*8]);
        let hi = Uint::from_le_slice(&out[LIMBS*8..]);
        Self {
            0: Self::redc(lo, hi),
            1: Default::default(),
        }
    }

    /// Hash input data into a field element with SHAKE-256.
    ///
    /// Twice as much hash output is converted to the field element via Montgomery reduction.
    /// This ensures the deviation from uniform sampling over <b>F</b><sub><i>p</i></sub>
    /// is upper-bounded by <i>p&#8315;&sup1;</i>, well below the target
    /// adversary advantage <i>O</i>(<i>p<sup>-&frac12;</sup></i>).
    #[inline]
    pub fn shake256(data: &[u8]) -> Self {
        let mut out = vec![0u8; 2*LIMBS*8];  // twice the space taken by a base field element
        Shake256::digest_xof(data, &mut out);
        out[2*LIMBS*8 - 1] = 0;  // make sure the lift to Z does not exceed p*2^(64*LIMBS)
        let lo = Uint::from_le_slice(&out[0..LIMBS*8]);
        let hi = Uint::from_le_slice(&out[LIMBS*8..]);
        Self {
            0: Self::redc(lo, hi),
            1: Default::default(),
        }
    }

    /// Hash input data into a pair of base field elements with SHAKE-128.
    ///
    /// Mainly for use by the quadratic extension field.
    #[inline]
    pub(crate) fn shake128pair(data: &[u8]) -> (Self, Self) {
        let mut out = vec![0u8; 4*LIMBS*8];  // twice the space taken by two base field elements
        Shake128::digest_xof(data, &mut out);
        out[2*LIMBS*8 - 1] = 0;  // make sure the lift of c0 to Z does not exceed p*2^(64*LIMBS)
        out[4*LIMBS*8 - 1] = 0;  // make sure the lift of c1 to Z does not exceed p*2^(64*LIMBS)
        let c0_lo = Uint::from_le_slice(&out[0..LIMBS*8]);
        let c0_hi = Uint::from_le_slice(&out[LIMBS*8..2*LIMBS*8]);
        let c1_lo = Uint::from_le_slice(&out[2*LIMBS*8..3*LIMBS*8]);
        let c1_hi = Uint::from_le_slice(&out[3*LIMBS*8..]);
        (
            Self { 0: Self::redc(c0_lo, c0_hi), 1: Default::default(), },
            Self { 0: Self::redc(c1_lo, c1_hi), 1: Default::default(), },
        )
    }

    /// Hash input data into a pair of base field elements with SHAKE-256.
    ///
    /// Mainly for use by the quadratic extension field.
    #[inline]
    pub(crate) fn shake256pair(data: &[u8]) -> (Self, Self) {
        let mut out = vec![0u8; 4*LIMBS*8];  // twice the space taken by two base field elements
        Shake256::digest_xof(data, &mut out);
        out[2*LIMBS*8 - 1] = 0;  // make sure the lift of c0 to Z does not exceed p*2^(64*LIMBS)
        out[4*LIMBS*8 - 1] = 0;  // make sure the lift of c1 to Z does not exceed p*2^(64*LIMBS)
        let c0_lo = Uint::from_le_slice(&out[0..LIMBS*8]);
        let c0_hi = Uint::from_le_slice(&out[LIMBS*8..2*LIMBS*8]);
        let c1_lo = Uint::from_le_slice(&out[2*LIMBS*8..3*LIMBS*8]);
        let c1_hi = Uint::from_le_slice(&out[3*LIMBS*8..]);
        (
            Self { 0: Self::redc(c0_lo, c0_hi), 1: Default::default(), },
            Self { 0: Self::redc(c1_lo, c1_hi), 1: Default::default(), },
        )
    }

    /// Convert an integer in Montgomery form to plain representation.
    ///
    /// NB: the plain representation of <i>m</i> = <i>w&middot;s</i> mod <i>p</i> is
    /// <i>w</i> = redc(<i>m</i>), where <i>s &gt; p</i> is a power of 2.
    #[inline]
    pub fn to_uint(&self) -> Uint<LIMBS> {
        Self::redc(self.0, Uint::ZERO)
    }

    /// Recover a field element from its canonical byte representation:
    /// 8&times;LIMBS bytes, big-endian, value strictly below <i>p</i>.
    pub fn try_from_bytes(bytes: &[u8]) -> Result<Self, BLSError> {
        if bytes.len() != LIMBS << 3 {
            return Err(BLSError::Decode);
        }
        let mut w: [Word; LIMBS] = [0; LIMBS];
        for j in 0..LIMBS {
            let chunk = &bytes[(LIMBS - 1 - j) << 3..(LIMBS - j) << 3];
            w[j] = Word::from_be_bytes(chunk.try_into().unwrap());
        }
        let v = Uint::from_words(w);
        let p: Uint<LIMBS> = Uint::from_words(BLS::MODULUS.try_into().unwrap());
        if !v.cmp(&p).is_lt() {
            return Err(BLSError::Decode);
        }
        Ok(Self::from_uint(v))
    }

    /// Compute <i>v</i> = `self`<i>&#x02E3;</i> for a non-negative integer exponent <i>x</i>,
    /// via plain left-to-right square-and-multiply.
    ///
    /// The scan pattern depends only on the bit length of the exponent container,
    /// and the exponents actually used internally (square root, inversion) are
    /// fixed and public, hence this method suffices for them.
    #[inline]
    pub fn pow<const EXP_LIMBS: usize>(&self, x: &Uint<EXP_LIMBS>) -> Self {
        let mut v = Self::one();
        let w = x.as_words();  // presumed NOT to be in Montgomery form
        for i in (0..EXP_LIMBS << 6).rev() {
            v = v.sq();
            if ((w[i >> 6] >> (i & 63)) & 1) == 1 {
                v *= *self;
            }
        }
        v
    }

    /// Determine if the plain representation of `self` is odd.
    #[inline]
    pub(crate) fn is_odd(&self) -> Choice {
        Self::redc(self.0, Uint::ZERO).is_odd()
    }

    /// Compute <i>r</i> = <i>&radic;`self`</i> = <i>`self`<sup>(p+1)/4</sup></i> mod <i>p</i>
    /// (applicable because <i>p &equiv; 3 (mod 4)</i>).
    ///
    /// The result is only present if `self` is a quadratic residue mod <i>p</i>,
    /// i.e. if the candidate root <i>r</i> satisfies <i>r&sup2;</i> mod <i>p</i> = `self`.
    #[inline]
    pub fn sqrt(&self) -> CtOption<Self> {
        let p: Uint<LIMBS> = Uint::from_words(BLS::MODULUS.try_into().unwrap());
        let r = self.pow(&(p + Uint::ONE).shr(2));  // sqrt exponent: (p + 1)/4
        CtOption::new(r, r.sq().ct_eq(self))
    }

    /// Compute <i>r</i> = <i>1/&radic;`self`</i> = <i>`self`<sup>(p+1)/4-1</sup></i> mod <i>p</i>,
    /// which satisfies <i>`self`&times;r&sup2;</i> mod <i>p = 1</i> if <i>`self` &ne; 0</i> and
    /// <i>`self`</i> is a quadratic residue mod <i>p</i>.
    #[inline]
    pub(crate) fn inv_sqrt(&self) -> Self {
        let p: Uint<LIMBS> = Uint::from_words(BLS::MODULUS.try_into().unwrap());
        self.pow(&((p + Uint::ONE).shr(2) - Uint::ONE)) // exponent: (p + 1)/4 - 1
    }

    /// Compute the Legendre symbol (<i>`self`/p</i>) in isochronous fashion:<br>
    /// &nbsp;   +1      if <i>`self`</i> is a nonzero quadratic residue mod <i>p</i>,<br>
    /// &nbsp;   &nbsp;0 if <i>`self`</i> = <i>0</i><br>
    /// &nbsp;   -1      if <i>`self`</i> is a nonzero quadratic non-residue mod <i>p</i>.
    #[inline]
    pub(crate) fn legendre(&self) -> isize {
        let p: Uint<LIMBS> = Uint::from_words(BLS::MODULUS.try_into().unwrap());
        // (v/p) = v^((p - 1)/2) mod p for prime p
        let m = self.pow(&((p - Uint::ONE) >> 1)).to_uint();
        // take the two least significant bits of m:
        let r = (m.as_words()[0] & 3) as isize;  // (v/p) = p-1, 0, 1
        // NB: since p = 3 (mod 4), it follows that -1 = 2 (mod 4)
        -(r >> 1) + (r & 1)
    }

    /// Compute <i>r</i> = <i>u&#8315;&sup1;</i> for <i>u</i> &#x2254; `self` (or 0, if <i>u</i> = 0)
    /// via the binary extended Euclidean algorithm on the plain representative.
    ///
    /// Warning: this is a <i>variable-time</i> algorithm, meant for contexts where
    /// the operand is public. It must agree with the Fermat inversion path
    /// BLSField::inv on every input.
    pub fn inv_vartime(&self) -> Self {
        if bool::from(self.is_zero()) {
            return Self::zero();
        }
        let p: Uint<LIMBS> = Uint::from_words(BLS::MODULUS.try_into().unwrap());
        let mut u = self.to_uint();
        let mut v = p;
        let mut x1 = Uint::ONE;
        let mut x2 = Uint::ZERO;
        while u != Uint::ONE && v != Uint::ONE {
            while bool::from(!u.is_odd()) {
                u = u >> 1;
                // if x1 is odd, x1 + p is even and (x1 + p)/2 keeps the congruence
                x1 = Uint::conditional_select(&x1, &x1.add(p), x1.is_odd()) >> 1;
            }
            while bool::from(!v.is_odd()) {
                v = v >> 1;
                x2 = Uint::conditional_select(&x2, &x2.add(p), x2.is_odd()) >> 1;
            }
            if u >= v {
                u = u - v;
                x1 = x1.sub_mod(&x2, &p);
            } else {
                v = v - u;
                x2 = x2.sub_mod(&x1, &p);
            }
        }
        let w = if u == Uint::ONE { x1 } else { x2 };
        Self::from_uint(w)  // plain inverse back into Montgomery form
    }

}

impl<BLS: BLSParam, const LIMBS: usize> Add for BLSFp<BLS, LIMBS> {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self::Output {
        let p: Uint<LIMBS> = Uint::from_words(BLS::MODULUS.try_into().unwrap());
        let nzp: NonZero<Uint<LIMBS>> = NonZero::new(p).unwrap();
        Self::Output {
            0: self.0.add_mod(&rhs.0, &nzp),
            1: Default::default(),
        }
    }
}

impl<BLS: BLSParam, const LIMBS: usize> AddAssign for BLSFp<BLS, LIMBS> {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        let p: Uint<LIMBS> = Uint::from_words(BLS::MODULUS.try_into().unwrap());
        let nzp: NonZero<Uint<LIMBS>> = NonZero::new(p).unwrap();
        self.0 = self.0.add_mod(&rhs.0, &nzp);
    }
}

impl<BLS: BLSParam, const LIMBS: usize> BLSField for BLSFp<BLS, LIMBS> {
    /// Convert `self` to its canonical byte representation:
    /// 8&times;LIMBS bytes, big-endian.
    #[inline]
    fn to_bytes(&self) -> Vec<u8> {
        let binding = self.to_uint();
        let val = binding.as_words();
        let mut bytes = Vec::<u8>::with_capacity(LIMBS << 3);
        for j in (0..LIMBS).rev() {
            bytes.extend_from_slice(&val[j].to_be_bytes());
        }
        bytes
    }

    /// Compute the value of twice this element.
    #[inline]
    fn double(&self) -> Self {
        let p: Uint<LIMBS> = Uint::from_words(BLS::MODULUS.try_into().unwrap());
        let nzp: NonZero<Uint<LIMBS>> = NonZero::new(p).unwrap();
        Self {
            0: self.0.add_mod(&self.0, &nzp),
            1: Default::default(),
        }
    }

    /// Compute <i>u/2 mod p</i>.
    ///
    /// Technique: if the lift of <i>u</i> (either in plain or in Montgomery form)
    /// to &Zopf; is even, a right-shift does the required division;
    /// if it is odd, then <i>u + p</i> is even, and <i>0 &leq; (u + p) &gt;&gt; 1 &lt; p</i> is the desired value.
    #[inline]
    fn half(&self) -> Self {
        let p: Uint<LIMBS> = Uint::from_words(BLS::MODULUS.try_into().unwrap());
        Self {
            0: Uint::conditional_select(&self.0, &self.0.add(p), self.0.is_odd()) >> 1,
            1: Default::default(),
        }
    }

    /// Compute the square of a field element.
    #[inline]
    fn sq(&self) -> Self {
        let (lo, hi) = self.0.square_wide();
        Self {
            0: Self::redc(lo, hi),
            1: Default::default(),
        }
    }

    /// Compute the cube of a field element.
    #[inline]
    fn cb(&self) -> Self {
        let (lo, hi) = self.0.square_wide();
        let (lo, hi) = self.0.widening_mul(&Self::redc(lo, hi));
        Self {
            0: Self::redc(lo, hi),
            1: Default::default(),
        }
    }

    /// Compute <i>r</i> = <i>u&#8315;&sup1;</i> = <i>u&#x1D56;&#8315;&sup2;</i> mod <i>p</i>
    /// for <i>u</i> &#x2254; `self`, which satisfies
    /// <i>r&times;u</i> mod <i>p</i> = <i>1</i> if <i>u &ne; 0</i>.
    #[inline]
    fn inv(&self) -> Self {
        let p: Uint<LIMBS> = Uint::from_words(BLS::MODULUS.try_into().unwrap());
        self.pow(&(p - Uint::from_word(2))) // inv exponent: p - 2
    }
}

impl<BLS: BLSParam, const LIMBS: usize> Clone for BLSFp<BLS, LIMBS> {
    fn clone(&self) -> Self {
        Self {
            0: self.0.clone(),
            1: Default::default(),
        }
    }
}

impl<BLS: BLSParam, const LIMBS: usize> ConditionallySelectable for BLSFp<BLS, LIMBS> {
    #[inline]
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        Self {
            0: Uint::conditional_select(&a.0, &b.0, choice),
            1: Default::default(),
        }
    }
}

impl<BLS: BLSParam, const LIMBS: usize> ConstantTimeEq for BLSFp<BLS, LIMBS> {
    #[inline]
    fn ct_eq(&self, other: &Self) -> Choice {
        self.0.ct_eq(&other.0)
    }

    #[inline]
    fn ct_ne(&self, other: &Self) -> Choice {
        self.0.ct_ne(&other.0)
    }
}

impl<BLS: BLSParam, const LIMBS: usize> Copy for BLSFp<BLS, LIMBS> {}

impl<BLS: BLSParam, const LIMBS: usize> Debug for BLSFp<BLS, LIMBS> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        Display::fmt(&self, f)
    }
}

impl<BLS: BLSParam, const LIMBS: usize> Display for BLSFp<BLS, LIMBS> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", Self::redc(self.0, Uint::ZERO).to_string_radix_vartime(10))
    }
}

impl<BLS: BLSParam, const LIMBS: usize> Mul for BLSFp<BLS, LIMBS> {
    type Output = Self;

    /// Compute a product in <b>F</b><sub><i>p</i></sub>.
    #[inline]
    fn mul(self, rhs: Self) -> Self::Output {
        let (lo, hi) = self.0.widening_mul(&rhs.0);
        Self::Output {
            0: Self::redc(lo, hi),
            1: Default::default(),
        }
    }
}

impl<BLS: BLSParam, const LIMBS: usize> Mul<BLSFp<BLS, LIMBS>> for Word {
    type Output = BLSFp<BLS, LIMBS>;

    /// Compute the product of a small integer left factor
    /// by a right factor from <b>F</b><sub><i>p</i></sub>.
    #[inline]
    fn mul(self, rhs: BLSFp<BLS, LIMBS>) -> Self::Output {
        assert!(self < 1 << 4);  // only meant for very small factors
        let mut val = Self::Output::zero();
        let mut fac = self as u8;
        let mut add = rhs;
        for _ in 0..4 {
            val = BLSFp::conditional_select(&val, &(val + add), Choice::from(fac & 1));
            fac >>= 1;
            add += add;
        }
        val
    }
}

impl<BLS: BLSParam, const LIMBS: usize> Mul<BLSFp<BLS, LIMBS>> for Uint<LIMBS> {
    type Output = BLSFp<BLS, LIMBS>;

    /// Compute the product of an integer left factor
    /// by a right factor from <b>F</b><sub><i>p</i></sub>.
    #[inline]
    fn mul(self, rhs: BLSFp<BLS, LIMBS>) -> Self::Output {
        BLSFp::from_uint(self)*rhs
    }
}

impl<BLS: BLSParam, const LIMBS: usize> MulAssign for BLSFp<BLS, LIMBS> {
    #[inline]
    fn mul_assign(&mut self, rhs: Self) {
        let (lo, hi) = self.0.widening_mul(&rhs.0);
        self.0 = Self::redc(lo, hi);
    }
}

impl<BLS: BLSParam, const LIMBS: usize> Neg for BLSFp<BLS, LIMBS> {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self::Output {
        let p: Uint<LIMBS> = Uint::from_words(BLS::MODULUS.try_into().unwrap());
        let nzp: NonZero<Uint<LIMBS>> = NonZero::new(p).unwrap();
        Self::Output {
            0: self.0.neg_mod(&nzp),
            1: Default::default(),
        }
    }
}

impl<BLS: BLSParam, const LIMBS: usize> One for BLSFp<BLS, LIMBS> {
    #[inline]
    fn one() -> Self {
        let s2: Uint<LIMBS> = Uint::from_words(BLS::MONTY_P.try_into().unwrap());
        Self {
            0: Self::redc(s2, Uint::ZERO),  // (1*s) mod p
            1: Default::default(),
        }
    }

    fn is_one(&self) -> Choice {
        Self::redc(self.0, Uint::ZERO).ct_eq(&Uint::ONE)
    }
}

impl<BLS: BLSParam, const LIMBS: usize> PartialEq for BLSFp<BLS, LIMBS> {
    fn eq(&self, other: &Self) -> bool {
        self.0.ct_eq(&other.0).into()
    }

    fn ne(&self, other: &Self) -> bool {
        self.0.ct_ne(&other.0).into()
    }
}

impl<BLS: BLSParam, const LIMBS: usize> Random for BLSFp<BLS, LIMBS> {
    /// Pick a uniform element from <b>F</b><sub><i>p</i></sub> by rejection sampling mod <i>p</i>.
    fn random<R: RngCore + ?Sized>(rng: &mut R) -> Self {
        let p: Uint<LIMBS> = Uint::from_words(BLS::MODULUS.try_into().unwrap());
        let top = BLS::MODULUS.len() - 1;
        let mask = (1 << 61) - 1; // the modulus bitlength is 381 = 64*LIMBS - 3
        let mut w: [Word; LIMBS] = [0; LIMBS];
        loop {
            // uniformly sample the bit capacity of the modulus:
            rng.fill(&mut w);
            w[top] &= mask;
            // rejection sampling for the most significant word:
            while w[top].cmp(&BLS::MODULUS[top]).is_gt() {  // this means the whole value exceeds the modulus
                w[top] = rng.next_u64() & mask;
            }
            // rejection sampling for the whole value:
            let r = Uint::from_words(w);
            if r.cmp(&p).is_lt() {
                return Self::from_uint(r);
            }
        }
    }

    /// Try to pick a uniform element from <b>F</b><sub><i>p</i></sub> by rejection sampling mod <i>p</i>.
    fn try_random<R: TryRngCore + ?Sized>(rng: &mut R) -> Result<Self, <R as TryRngCore>::Error> where R: TryRngCore {
        let p: Uint<LIMBS> = Uint::from_words(BLS::MODULUS.try_into().unwrap());
        let top = BLS::MODULUS.len() - 1;
        let mask = (1 << 61) - 1; // the modulus bitlength is 381 = 64*LIMBS - 3
        let mut w: [Word; LIMBS] = [0; LIMBS];
        loop {
            // uniformly sample the bit capacity of the modulus:
            for wi in &mut w {
                *wi = rng.try_next_u64()?
            }
            w[top] &= mask;
            // rejection sampling for the most significant word:
            while w[top].cmp(&BLS::MODULUS[top]).is_gt() {  // this means the whole value exceeds the modulus
                w[top] = rng.try_next_u64()? & mask;
            }
            // rejection sampling for the whole value:
            let r = Uint::from_words(w);
            if r.cmp(&p).is_lt() {
                return Ok(Self::from_uint(r));
            }
        }
    }
}

impl<BLS: BLSParam, const LIMBS: usize> Sub for BLSFp<BLS, LIMBS> {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self::Output {
        let p: Uint<LIMBS> = Uint::from_words(BLS::MODULUS.try_into().unwrap());
        let nzp: NonZero<Uint<LIMBS>> = NonZero::new(p).unwrap();
        Self::Output {
            0: self.0.sub_mod(&rhs.0, &nzp),
            1: Default::default(),
        }
    }
}

impl<BLS: BLSParam, const LIMBS: usize> SubAssign for BLSFp<BLS, LIMBS> {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        let p: Uint<LIMBS> = Uint::from_words(BLS::MODULUS.try_into().unwrap());
        let nzp: NonZero<Uint<LIMBS>> = NonZero::new(p).unwrap();
        self.0 = self.0.sub_mod(&rhs.0, &nzp);
    }
}

impl<BLS: BLSParam, const LIMBS: usize> Zero for BLSFp<BLS, LIMBS> {
    #[inline]
    fn zero() -> Self {
        Self {
            0: Uint::ZERO,  // (0*s) mod p
            1: Default::default(),
        }
    }

    #[inline]
    fn is_zero(&self) -> Choice {
        self.0.is_zero()
    }

    fn set_zero(&mut self) {
        self.0.set_zero()
    }
}


#[cfg(test)]
mod tests {
    use crate::blsparam::BLS381Param;
    use crypto_bigint::NonZero;
    use crypto_bigint::rand_core::RngCore;
    use rand::Rng;
    use std::ops::Rem;
    use std::time::SystemTime;
    use super::*;

    const TESTS: usize = 100;

    /// General BLSFp test template.
    #[allow(non_snake_case)]
    fn BLSFp_test<BLS: BLSParam, const LIMBS: usize>() {
        let mut rng = rand::rng();
        let p: Uint<LIMBS> = Uint::from_words(BLS::MODULUS.try_into().unwrap());
        let nzp = NonZero::new(p).unwrap();

        println!();
        println!("Performing {} BLSFp test(s)...", TESTS);
        let now = SystemTime::now();

        // neutral elements:
        //println!("0 = {}", BLSFp::zero());
        assert!(bool::from(BLSFp::<BLS, LIMBS>::zero().is_zero()));
        //println!("1 = {}", BLSFp::one());
        assert!(bool::from(BLSFp::<BLS, LIMBS>::one().is_one()));

        // Montgomery encoding of the neutral elements:
        assert_eq!(BLSFp::<BLS, LIMBS>::from_uint(Uint::ZERO).to_uint(), Uint::ZERO);
        assert_eq!(BLSFp::<BLS, LIMBS>::from_word(1), BLSFp::one());
        assert_eq!(BLSFp::<BLS, LIMBS>::one().to_uint(), Uint::ONE);

        for _t in 0..TESTS {
            //println!("======== {}", _t);

            // Montgomery form:
            let v1: Word = rng.next_u64() & 0xF;
            //println!("v1 = {}", v1);
            let m1: BLSFp<BLS, LIMBS> = BLSFp::from_word(v1);
            //println!("m1 ? {}", m1);
            assert_eq!(Uint::from_word(v1), m1.to_uint());

            let e1: BLSFp<BLS, LIMBS> = BLSFp::random(&mut rng);
            //println!("e1     = {}", e1);
            //println!("e1 + 0 = {}", e1 + BLSFp::zero());
            assert_eq!(e1 + BLSFp::zero(), e1);
            //println!("e1*0   = {}", e1*BLSFp::zero());
            assert!(bool::from((e1*BLSFp::zero()).is_zero()));
            //println!("e1*1   = {}", e1*BLSFp::one());
            assert_eq!(e1*BLSFp::one(), e1);

            // addition vs subtraction:
            //println!("-e1      = {}", -e1);
            //println!("e1 - e1  = {}", e1 - e1);
            //println!("e1+(-e1) = {}", e1 + (-e1));
            assert!(bool::from((e1 - e1).is_zero()));
            assert!(bool::from((e1 + (-e1)).is_zero()));

            // double and half:
            //println!("2*e1   = {}", e1.double());
            //println!("e1/2   = {}", e1.half());
            assert_eq!(e1.double(), e1 + e1);
            assert_eq!(e1.double().half(), e1);
            assert_eq!(e1.half().double(), e1);
            assert_eq!(e1.double()*e1.half(), e1.sq());

            // square and cube:
            //println!("e1^2   = {}", e1.sq());
            assert_eq!(e1.sq(), e1*e1);
            //println!("e1^3   = {}", e1.cb());
            assert_eq!(e1.cb(), e1*e1*e1);

            // byte encoding:
            let bytes = e1.to_bytes();
            assert_eq!(bytes.len(), LIMBS << 3);
            assert_eq!(BLSFp::<BLS, LIMBS>::try_from_bytes(&bytes).unwrap(), e1);
            assert_eq!(BLSFp::<BLS, LIMBS>::try_from_bytes(&bytes[1..]).unwrap_err(), BLSError::Decode);
            let mut modulus_bytes = Vec::<u8>::with_capacity(LIMBS << 3);
            for j in (0..LIMBS).rev() {
                modulus_bytes.extend_from_slice(&BLS::MODULUS[j].to_be_bytes());
            }
            // the modulus itself is the smallest non-canonical value:
            assert_eq!(BLSFp::<BLS, LIMBS>::try_from_bytes(&modulus_bytes).unwrap_err(), BLSError::Decode);

            // exponentiation:
            assert_eq!(e1.pow(&Uint::<LIMBS>::ZERO), BLSFp::one());
            assert_eq!(e1.pow(&Uint::<LIMBS>::ONE), e1);
            assert_eq!(e1.pow(&Uint::<LIMBS>::from_word(8)), e1.sq().sq().sq());
            assert_eq!(e1.pow(&p), e1);
            assert!(bool::from(e1.pow(&(p - Uint::ONE)).is_one() | e1.is_zero()));

            // field inversion, all paths:
            //println!("e1^-1  = {}", e1.inv());
            //println!("e1*e1^-1 = {}", e1*e1.inv());
            assert!(bool::from((e1*e1.inv()).is_one() | e1.is_zero()));
            assert_eq!(e1.inv(), e1.inv_vartime());
            assert_eq!(e1.inv(), e1.pow(&(p - Uint::from_word(2))));
            assert_eq!(BLSFp::<BLS, LIMBS>::from_uint(e1.inv().to_uint()), e1.inv_vartime());

            // square roots:
            let nr: BLSFp<BLS, LIMBS> = BLSFp::from_word(BLS::NQR);
            assert!(bool::from(nr.sqrt().is_none()));
            assert_eq!(nr.legendre(), -1);
            let sr1 = e1.sq().sqrt();
            assert!(bool::from(sr1.is_some()));
            let r1 = sr1.unwrap_or(BLSFp::zero());
            assert_eq!(r1.sq(), e1.sq());
            let inv_sr1 = e1.inv_sqrt();
            assert!(bool::from((e1*inv_sr1.sq()).is_one() | e1.is_zero()) || e1.legendre() < 0);

            // hash to field element:
            let h1: BLSFp<BLS, LIMBS> = BLSFp::shake128(&e1.to_bytes());
            let h2: BLSFp<BLS, LIMBS> = BLSFp::shake256(&e1.to_bytes());
            assert_eq!(BLSFp::<BLS, LIMBS>::try_from_bytes(&h1.to_bytes()).unwrap(), h1);
            assert_eq!(BLSFp::<BLS, LIMBS>::try_from_bytes(&h2.to_bytes()).unwrap(), h2);

            // hybrid multiplication (Word*BLSFp and Uint*BLSFp):
            let k1: Word = rng.next_u64() & 0xF;
            //println!("k1*e1 = {}", k1*e1);
            assert_eq!(k1*e1, BLSFp::from_word(k1)*e1);
            let mut w1: [Word; LIMBS] = [0; LIMBS];
            rng.fill(&mut w1);
            let u1 = Uint::from_words(w1).rem(&nzp);
            //println!("u1*e1 = {}", u1*e1);
            assert_eq!(u1*e1, BLSFp::from_words(w1)*e1);

            let f1 = BLSFp::random(&mut rng);
            //println!("f1     = {}", f1);
            let g1 = BLSFp::random(&mut rng);
            //println!("g1     = {}", g1);

            // commutativity of addition and multiplication:
            assert_eq!(e1 + f1, f1 + e1);
            assert_eq!(e1*f1, f1*e1);

            // associativity and distributivity:
            assert_eq!((e1 + f1) + g1, e1 + (f1 + g1));
            assert_eq!((e1*f1)*g1, e1*(f1*g1));
            assert_eq!(e1*(f1 + g1), e1*f1 + e1*g1);
        }
        match now.elapsed() {
            Ok(elapsed) => {
                println!("Elapsed time: {} ms.", (elapsed.as_micros() as f64)/1000.0);
            }
            Err(e) => {
                println!("Error: {e:?}");
            }
        }
    }

    #[test]
    #[allow(non_snake_case)]
    fn BLS381Fp_test() {
        const LIMBS: usize = BLS381Param::LIMBS;
        BLSFp_test::<BLS381Param, LIMBS>();
    }

}
