#[cfg(not(any(target_pointer_width = "64")))]
compile_error!("this crate requires 64-bit limbs");

use crate::blsparam::BLSParam;
use crate::traits::{BLSField, One};
use crate::BLSError;
use crypto_bigint::{Integer, Limb, NonZero, Random, Uint, Word, Zero};
use crypto_bigint::rand_core::{RngCore, TryRngCore};
use crypto_bigint::subtle::{Choice, ConditionallySelectable, ConstantTimeEq, ConstantTimeLess};
use rand::Rng;
use sha3::{Shake128, Shake256};
use sha3::digest::ExtendableOutput;
use std::fmt::{Debug, Display, Formatter};
use std::marker::PhantomData;
use std::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign};

/// An element of the scalar field &Zopf;<sub><i>r</i></sub>, where <i>r</i> is
/// the prime order of the pairing groups, kept in Montgomery form.
///
/// NB: the scalar field takes fewer limbs than the base field
/// (<i>r</i> is a 255-bit prime), hence the separate LIMBS parameter.
pub struct BLSZr<BLS: BLSParam, const LIMBS: usize>(
    #[doc(hidden)]
    pub Uint<LIMBS>,
    #[doc(hidden)]
    pub PhantomData<BLS>,
);

impl<BLS: BLSParam, const LIMBS: usize> BLSZr<BLS, LIMBS> {
    /// Montgomery reduction of <i>t</i> = (<i>t_lo</i>, <i>t_hi</i>) in range 0..&lt;<i>r&times;2&#x02B7;</i>,
    /// where <i>r &lt; 2&#x02B7;</i> is the group order and <i>w</i> &#x2254; <i>64&times;LIMBS</i>.
    ///
    /// Return <i>t&times;2&#8315;&#x02B7;</i> in range 0..&lt;<i>r</i>.
    #[inline]
    fn redc(t_lo: Uint<LIMBS>, t_hi: Uint<LIMBS>) -> Uint<LIMBS> {
        let r: Uint<LIMBS> = Uint::from_words(BLS::ORDER.try_into().unwrap());  // r < 2^w
        let q: Uint<LIMBS> = Uint::from_words(BLS::NEG_INV_ORD.try_into().unwrap());  // q := -1/r mod 2^w
        // m ← ((t mod s)*q) mod s = (t_lo*q) mod s:
        let (m, _) = t_lo.widening_mul(&q);
        // t ← (t + m*r) / s:
        let (mr_lo, mr_hi) = m.widening_mul(&r);
        let (_, carry) = t_lo.carrying_add(&mr_lo, Limb::ZERO);
        let (t, _) = t_hi.carrying_add(&mr_hi, carry);
        // return if t < r { t } else { t - r }
        t - Uint::conditional_select(&r, &Uint::ZERO, t.ct_lt(&r))
    }

    /// Convert an unsigned integer (Uint) value <i>w</i> to Montgomery form,
    /// namely, the value <i>w&middot;s</i> mod <i>r</i>.
    #[inline]
    pub fn from_uint(w: Uint<LIMBS>) -> Self {
        let s2: Uint<LIMBS> = Uint::from_words(BLS::MONTY_R.try_into().unwrap());
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

    /// Hash input data into a scalar with SHAKE-128.
    ///
    /// Twice as much hash output is converted to the scalar via Montgomery
    /// reduction, keeping the deviation from uniform sampling below <i>r&#8315;&sup1;</i>.
    #[inline]
    pub fn shake128(data: &[u8]) -> Self {
        let mut out = vec![0u8; 2*LIMBS*8];  // twice the space taken by a scalar
        Shake128::digest_xof(data, &mut out);
        out[2*LIMBS*8 - 1] = 0;  // make sure the lift to Z does not exceed r*2^(64*LIMBS)
        let lo = Uint::from_le_slice(&out[0..LIMBS*8]);
        let hi = Uint::from_le_slice(&out[LIMBS*8..]);
        Self {
            0: Self::redc(lo, hi),
            1: Default::default(),
        }
    }

    /// Hash input data into a scalar with SHAKE-256.
    #[inline]
    pub fn shake256(data: &[u8]) -> Self {
        let mut out = vec![0u8; 2*LIMBS*8];  // twice the space taken by a scalar
        Shake256::digest_xof(data, &mut out);
        out[2*LIMBS*8 - 1] = 0;  // make sure the lift to Z does not exceed r*2^(64*LIMBS)
        let lo = Uint::from_le_slice(&out[0..LIMBS*8]);
        let hi = Uint::from_le_slice(&out[LIMBS*8..]);
        Self {
            0: Self::redc(lo, hi),
            1: Default::default(),
        }
    }

    /// Convert a scalar in Montgomery form to plain representation.
    #[inline]
    pub fn to_uint(&self) -> Uint<LIMBS> {
        Self::redc(self.0, Uint::ZERO)
    }

    /// Recover a scalar from its canonical byte representation:
    /// 8&times;LIMBS bytes, big-endian, value strictly below <i>r</i>.
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
        let r: Uint<LIMBS> = Uint::from_words(BLS::ORDER.try_into().unwrap());
        if !v.cmp(&r).is_lt() {
            return Err(BLSError::Decode);
        }
        Ok(Self::from_uint(v))
    }

    /// Compute <i>v</i> = `self`<i>&#x02E3;</i> mod <i>r</i>.
    #[inline]
    fn pow(&self, x: Uint<LIMBS>) -> Self {
        // this method is private, and the only exponent in actual use
        // (inversion) is fixed and public, hence plain square-and-multiply suffices:
        let mut v = Self::one();
        let w = x.as_words();  // presumed NOT to be in Montgomery form
        for i in (0..LIMBS << 6).rev() {
            v = v.sq();
            if ((w[i >> 6] >> (i & 63)) & 1) == 1 {
                v *= *self;
            }
        }
        v
    }

}

impl<BLS: BLSParam, const LIMBS: usize> Add for BLSZr<BLS, LIMBS> {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self::Output {
        let r: Uint<LIMBS> = Uint::from_words(BLS::ORDER.try_into().unwrap());
        let nzr: NonZero<Uint<LIMBS>> = NonZero::new(r).unwrap();
        Self::Output {
            0: self.0.add_mod(&rhs.0, &nzr),
            1: Default::default(),
        }
    }
}

impl<BLS: BLSParam, const LIMBS: usize> AddAssign for BLSZr<BLS, LIMBS> {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        let r: Uint<LIMBS> = Uint::from_words(BLS::ORDER.try_into().unwrap());
        let nzr: NonZero<Uint<LIMBS>> = NonZero::new(r).unwrap();
        self.0 = self.0.add_mod(&rhs.0, &nzr);
    }
}

impl<BLS: BLSParam, const LIMBS: usize> BLSField for BLSZr<BLS, LIMBS> {
    /// Convert `self` to byte array representation (big-endian).
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

    /// Compute the value of twice this scalar.
    #[inline]
    fn double(&self) -> Self {
        let r: Uint<LIMBS> = Uint::from_words(BLS::ORDER.try_into().unwrap());
        let nzr: NonZero<Uint<LIMBS>> = NonZero::new(r).unwrap();
        Self {
            0: self.0.add_mod(&self.0, &nzr),
            1: Default::default(),
        }
    }

    /// Compute the value of half this scalar.
    #[inline]
    fn half(&self) -> Self {
        let r: Uint<LIMBS> = Uint::from_words(BLS::ORDER.try_into().unwrap());
        Self {
            0: Uint::conditional_select(&self.0, &self.0.add(r), self.0.is_odd()) >> 1,
            1: Default::default(),
        }
    }

    /// Compute the square of a scalar.
    #[inline]
    fn sq(&self) -> Self {
        let (lo, hi) = self.0.square_wide();
        Self {
            0: Self::redc(lo, hi),
            1: Default::default(),
        }
    }

    /// Compute the cube of a scalar.
    #[inline]
    fn cb(&self) -> Self {
        let (lo, hi) = self.0.square_wide();
        let (lo, hi) = self.0.widening_mul(&Self::redc(lo, hi));
        Self {
            0: Self::redc(lo, hi),
            1: Default::default(),
        }
    }

    /// Compute <i>v</i> = <i>u&#8315;&sup1;</i> = <i>u&#x02B3;&#8315;&sup2;</i> mod <i>r</i>
    /// for <i>u</i> &#x2254; `self`, which satisfies
    /// <i>v&times;u</i> mod <i>r</i> = <i>1</i> if <i>u &ne; 0</i>.
    #[inline]
    fn inv(&self) -> Self {
        let r: Uint<LIMBS> = Uint::from_words(BLS::ORDER.try_into().unwrap());
        self.pow(r - Uint::from_word(2)) // inv exponent: r - 2
    }
}

impl<BLS: BLSParam, const LIMBS: usize> Clone for BLSZr<BLS, LIMBS> {
    fn clone(&self) -> Self {
        Self {
            0: self.0.clone(),
            1: Default::default(),
        }
    }
}

impl<BLS: BLSParam, const LIMBS: usize> ConditionallySelectable for BLSZr<BLS, LIMBS> {
    #[inline]
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        Self {
            0: Uint::conditional_select(&a.0, &b.0, choice),
            1: Default::default(),
        }
    }
}

impl<BLS: BLSParam, const LIMBS: usize> ConstantTimeEq for BLSZr<BLS, LIMBS> {
    #[inline]
    fn ct_eq(&self, other: &Self) -> Choice {
        self.0.ct_eq(&other.0)
    }

    #[inline]
    fn ct_ne(&self, other: &Self) -> Choice {
        self.0.ct_ne(&other.0)
    }
}

impl<BLS: BLSParam, const LIMBS: usize> Copy for BLSZr<BLS, LIMBS> {}

impl<BLS: BLSParam, const LIMBS: usize> Debug for BLSZr<BLS, LIMBS> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        Display::fmt(&self, f)
    }
}

impl<BLS: BLSParam, const LIMBS: usize> Display for BLSZr<BLS, LIMBS> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", Self::redc(self.0, Uint::ZERO).to_string_radix_vartime(10))
    }
}

impl<BLS: BLSParam, const LIMBS: usize> Mul for BLSZr<BLS, LIMBS> {
    type Output = Self;

    /// Compute a product in &Zopf;<sub><i>r</i></sub>.
    #[inline]
    fn mul(self, rhs: Self) -> Self::Output {
        let (lo, hi) = self.0.widening_mul(&rhs.0);
        Self::Output {
            0: Self::redc(lo, hi),
            1: Default::default(),
        }
    }
}

impl<BLS: BLSParam, const LIMBS: usize> Mul<BLSZr<BLS, LIMBS>> for Word {
    type Output = BLSZr<BLS, LIMBS>;

    /// Compute the product of a small integer left factor
    /// by a right factor from &Zopf;<sub><i>r</i></sub>.
    #[inline]
    fn mul(self, rhs: BLSZr<BLS, LIMBS>) -> Self::Output {
        assert!(self < 1 << 4);  // only meant for very small factors
        let mut val = Self::Output::zero();
        let mut fac = self as u8;
        let mut add = rhs;
        for _ in 0..4 {
            val = BLSZr::conditional_select(&val, &(val + add), Choice::from(fac & 1));
            fac >>= 1;
            add += add;
        }
        val
    }
}

impl<BLS: BLSParam, const LIMBS: usize> Mul<BLSZr<BLS, LIMBS>> for Uint<LIMBS> {
    type Output = BLSZr<BLS, LIMBS>;

    /// Compute the product of an integer left factor
    /// by a right factor from &Zopf;<sub><i>r</i></sub>.
    #[inline]
    fn mul(self, rhs: BLSZr<BLS, LIMBS>) -> Self::Output {
        BLSZr::from_uint(self)*rhs
    }
}

impl<BLS: BLSParam, const LIMBS: usize> MulAssign for BLSZr<BLS, LIMBS> {
    #[inline]
    fn mul_assign(&mut self, rhs: Self) {
        let (lo, hi) = self.0.widening_mul(&rhs.0);
        self.0 = Self::redc(lo, hi);
    }
}

impl<BLS: BLSParam, const LIMBS: usize> Neg for BLSZr<BLS, LIMBS> {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self::Output {
        let r: Uint<LIMBS> = Uint::from_words(BLS::ORDER.try_into().unwrap());
        let nzr: NonZero<Uint<LIMBS>> = NonZero::new(r).unwrap();
        Self::Output {
            0: self.0.neg_mod(&nzr),
            1: Default::default(),
        }
    }
}

impl<BLS: BLSParam, const LIMBS: usize> One for BLSZr<BLS, LIMBS> {
    #[inline]
    fn one() -> Self {
        let s2: Uint<LIMBS> = Uint::from_words(BLS::MONTY_R.try_into().unwrap());
        Self {
            0: Self::redc(s2, Uint::ZERO),  // (1*s) mod r
            1: Default::default(),
        }
    }

    fn is_one(&self) -> Choice {
        Self::redc(self.0, Uint::ZERO).ct_eq(&Uint::ONE)
    }
}

impl<BLS: BLSParam, const LIMBS: usize> PartialEq for BLSZr<BLS, LIMBS> {
    fn eq(&self, other: &Self) -> bool {
        self.0.ct_eq(&other.0).into()
    }

    fn ne(&self, other: &Self) -> bool {
        self.0.ct_ne(&other.0).into()
    }
}

impl<BLS: BLSParam, const LIMBS: usize> Random for BLSZr<BLS, LIMBS> {
    /// Pick a uniform scalar by rejection sampling mod <i>r</i>.
    fn random<R: RngCore + ?Sized>(rng: &mut R) -> Self {
        let r: Uint<LIMBS> = Uint::from_words(BLS::ORDER.try_into().unwrap());
        let top = BLS::ORDER.len() - 1;
        let mask = (1 << 63) - 1; // the group order bitlength is 255 = 64*LIMBS - 1
        let mut w: [Word; LIMBS] = [0; LIMBS];
        loop {
            // uniformly sample the bit capacity of the group order:
            rng.fill(&mut w);
            w[top] &= mask;
            // rejection sampling for the most significant word:
            while w[top].cmp(&BLS::ORDER[top]).is_gt() {  // this means the whole value exceeds the group order
                w[top] = rng.next_u64() & mask;
            }
            // rejection sampling for the whole value:
            let v = Uint::from_words(w);
            if v.cmp(&r).is_lt() {
                return Self::from_uint(v);
            }
        }
    }

    /// Try to pick a uniform scalar by rejection sampling mod <i>r</i>.
    fn try_random<R: TryRngCore + ?Sized>(rng: &mut R) -> Result<Self, <R as TryRngCore>::Error> where R: TryRngCore {
        let r: Uint<LIMBS> = Uint::from_words(BLS::ORDER.try_into().unwrap());
        let top = BLS::ORDER.len() - 1;
        let mask = (1 << 63) - 1; // the group order bitlength is 255 = 64*LIMBS - 1
        let mut w: [Word; LIMBS] = [0; LIMBS];
        loop {
            // uniformly sample the bit capacity of the group order:
            for wi in &mut w {
                *wi = rng.try_next_u64()?
            }
            w[top] &= mask;
            // rejection sampling for the most significant word:
            while w[top].cmp(&BLS::ORDER[top]).is_gt() {  // this means the whole value exceeds the group order
                w[top] = rng.try_next_u64()? & mask;
            }
            // rejection sampling for the whole value:
            let v = Uint::from_words(w);
            if v.cmp(&r).is_lt() {
                return Ok(Self::from_uint(v));
            }
        }
    }
}

impl<BLS: BLSParam, const LIMBS: usize> Sub for BLSZr<BLS, LIMBS> {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self::Output {
        let r: Uint<LIMBS> = Uint::from_words(BLS::ORDER.try_into().unwrap());
        let nzr: NonZero<Uint<LIMBS>> = NonZero::new(r).unwrap();
        Self::Output {
            0: self.0.sub_mod(&rhs.0, &nzr),
            1: Default::default(),
        }
    }
}

impl<BLS: BLSParam, const LIMBS: usize> SubAssign for BLSZr<BLS, LIMBS> {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        let r: Uint<LIMBS> = Uint::from_words(BLS::ORDER.try_into().unwrap());
        let nzr: NonZero<Uint<LIMBS>> = NonZero::new(r).unwrap();
        self.0 = self.0.sub_mod(&rhs.0, &nzr);
    }
}

impl<BLS: BLSParam, const LIMBS: usize> Zero for BLSZr<BLS, LIMBS> {
    #[inline]
    fn zero() -> Self {
        Self {
            0: Uint::ZERO,  // (0*s) mod r
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
    use crypto_bigint::rand_core::RngCore;
    use std::time::SystemTime;
    use super::*;

    const TESTS: usize = 100;

    /// General BLSZr test template.
    #[allow(non_snake_case)]
    fn BLSZr_test<BLS: BLSParam, const LIMBS: usize>() {
        let mut rng = rand::rng();

        println!();
        println!("Performing {} BLSZr test(s)...", TESTS);
        let now = SystemTime::now();

        // neutral elements:
        assert!(bool::from(BLSZr::<BLS, LIMBS>::zero().is_zero()));
        assert!(bool::from(BLSZr::<BLS, LIMBS>::one().is_one()));
        assert_eq!(BLSZr::<BLS, LIMBS>::from_word(1), BLSZr::one());

        for _t in 0..TESTS {
            //println!("======== {}", _t);

            let v1: Word = rng.next_u64() & 0xF;
            let m1: BLSZr<BLS, LIMBS> = BLSZr::from_word(v1);
            assert_eq!(Uint::from_word(v1), m1.to_uint());

            let e1: BLSZr<BLS, LIMBS> = BLSZr::random(&mut rng);
            assert_eq!(e1 + BLSZr::zero(), e1);
            assert_eq!(e1*BLSZr::one(), e1);

            // addition vs subtraction:
            assert!(bool::from((e1 - e1).is_zero()));
            assert!(bool::from((e1 + (-e1)).is_zero()));

            // double and half:
            assert_eq!(e1.double().half(), e1);
            assert_eq!(e1.half().double(), e1);

            // square and cube:
            assert_eq!(e1.sq(), e1*e1);
            assert_eq!(e1.cb(), e1*e1*e1);

            // inversion:
            assert!(bool::from((e1*e1.inv()).is_one() | e1.is_zero()));

            // byte encoding:
            let bytes = e1.to_bytes();
            assert_eq!(bytes.len(), LIMBS << 3);
            assert_eq!(BLSZr::<BLS, LIMBS>::try_from_bytes(&bytes).unwrap(), e1);
            assert_eq!(BLSZr::<BLS, LIMBS>::try_from_bytes(&bytes[1..]).unwrap_err(), BLSError::Decode);

            // hash to scalar:
            let h1: BLSZr<BLS, LIMBS> = BLSZr::shake128(&bytes);
            let h2: BLSZr<BLS, LIMBS> = BLSZr::shake256(&bytes);
            assert_eq!(BLSZr::<BLS, LIMBS>::try_from_bytes(&h1.to_bytes()).unwrap(), h1);
            assert_eq!(BLSZr::<BLS, LIMBS>::try_from_bytes(&h2.to_bytes()).unwrap(), h2);

            let f1 = BLSZr::random(&mut rng);
            let g1 = BLSZr::random(&mut rng);

            // commutativity, associativity, distributivity:
            assert_eq!(e1 + f1, f1 + e1);
            assert_eq!(e1*f1, f1*e1);
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
    fn BLS381Zr_test() {
        const LIMBS: usize = 4;
        BLSZr_test::<BLS381Param, LIMBS>();
    }

}
