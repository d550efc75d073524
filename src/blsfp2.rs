#[cfg(not(any(target_pointer_width = "64")))]
compile_error!("this crate requires 64-bit limbs");

use crate::blsfp::BLSFp;
use crate::blsparam::BLSParam;
use crate::traits::{BLSField, One};
use crate::BLSError;
use crypto_bigint::{Random, Uint, Word, Zero};
use crypto_bigint::rand_core::{RngCore, TryRngCore};
use crypto_bigint::subtle::{Choice, ConditionallySelectable, ConstantTimeEq, CtOption};
use std::fmt::{Debug, Display, Formatter};
use std::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign};

/// The <b>F</b><sub><i>p&sup2;</i></sub> &simeq; <b>F</b><sub><i>p</i></sub>&lbrack;<i>u</i>&rbrack;/&lt;<i>u&sup2;</i> + 1&gt;
/// extension field.  NB: <i>u&sup2;</i> = -1.
pub struct BLSFp2<BLS: BLSParam, const LIMBS: usize> {
    pub(crate) c0: BLSFp<BLS, LIMBS>,
    pub(crate) c1: BLSFp<BLS, LIMBS>,
}

impl<BLS: BLSParam, const LIMBS: usize> BLSFp2<BLS, LIMBS> {
    /// Convert an <b>F</b><sub><i>p</i></sub> element to its <b>F</b><sub><i>p&sup2;</i></sub> counterpart.
    #[inline]
    pub fn from_base(c0: BLSFp<BLS, LIMBS>) -> Self {
        Self {
            c0,
            c1: BLSFp::zero(),
        }
    }

    /// Convert a word-sized integer <i>w</i> to its <b>F</b><sub><i>p&sup2;</i></sub> counterpart.
    #[inline]
    pub fn from_word(w: Word) -> Self {
        Self {
            c0: BLSFp::from_word(w),
            c1: BLSFp::zero(),
        }
    }

    /// Assemble an <b>F</b><sub><i>p&sup2;</i></sub> element
    /// from its <b>F</b><sub><i>p</i></sub> components.
    #[inline]
    pub fn from(c0: BLSFp<BLS, LIMBS>, c1: BLSFp<BLS, LIMBS>) -> Self {
        Self {
            c0,
            c1,
        }
    }

    /// Hash input data into a field element with SHAKE-128.
    #[inline]
    pub fn shake128(data: &[u8]) -> Self {
        let (c0, c1) = BLSFp::shake128pair(data);
        Self {
            c0,
            c1,
        }
    }

    /// Hash input data into a field element with SHAKE-256.
    #[inline]
    pub fn shake256(data: &[u8]) -> Self {
        let (c0, c1) = BLSFp::shake256pair(data);
        Self {
            c0,
            c1,
        }
    }

    #[inline]
    pub(crate) fn is_odd(&self) -> Choice {
        self.c0.is_odd()
    }

    /// Complex conjugate of this <b>F</b><sub><i>p&sup2;</i></sub> element,
    /// namely, if this element is <i>a + bu</i>, return <i>a - bu</i>.
    #[inline]
    pub(crate) fn conj(&self) -> Self {
        Self { c0: self.c0, c1: -self.c1, }
    }

    /// <b>F</b><sub><i>p</i></sub>-norm of this <b>F</b><sub><i>p&sup2;</i></sub> element,
    /// namely, if this element is <i>a + bu</i>, return <i>a&sup2; + b&sup2;</i>.
    #[inline]
    pub(crate) fn norm(&self) -> BLSFp<BLS, LIMBS> {
        self.c0.sq() + self.c1.sq()
    }

    /// Compute the product of a field element <i>a + bu</i> by <i>u</i>.
    #[inline]
    pub(crate) fn mul_u(&self) -> Self {
        // (a + bu)u = (-b + au)
        Self { c0: -self.c1, c1: self.c0, }
    }

    /// Compute the product of a field element <i>a + bu</i> by the
    /// tower non-residue <i>&xi;</i> &#x2254; <i>1 + u</i>.
    #[inline]
    pub fn mul_xi(&self) -> Self {
        // (a + bu)*(1 + u) = (a - b) + (a + b)u
        Self {
            c0: self.c0 - self.c1,
            c1: self.c0 + self.c1,
        }
    }

    /// Apply the <i>power</i>-th Frobenius map <i>&pi;<sup>power</sup></i> to this element.
    /// On <b>F</b><sub><i>p&sup2;</i></sub> this is complex conjugation for odd powers
    /// and the identity for even powers.
    #[inline]
    pub fn frobenius_map(&self, power: usize) -> Self {
        Self::conditional_select(self, &self.conj(), Choice::from((power & 1) as u8))
    }

    /// Compute <i>v</i> = `self`<i>&#x1D4F;</i> in <b>F</b><sub><i>p&sup2;</i></sub>.
    #[inline]
    pub fn pow<const EXP_LIMBS: usize>(&self, k: &Uint<EXP_LIMBS>) -> Self {
        // prepare a table such that t[d] = v^d, where 0 <= d < 16:
        let mut t = [Self::one(); 16];
        t[1] = self.clone();
        for d in 1..8 {
            t[2*d] = t[d].sq();  // v^(2*d) = (v^d)^2
            t[2*d + 1] = t[2*d].clone()*(*self);  // v^(2*d + 1) = (v^d)^2*v
        }

        // perform fixed-window raising to the exponent, one hex digit at a time:
        let mut v = Self::one();  // accumulator
        let x = k.as_words();  // exponent
        for j in (0..x.len() << 4).rev() {  // scan the exponent from most to least significant nybble
            v = v.sq().sq().sq().sq();  // raise the accumulator to the 16th
            let d = ((x[j >> 4] >> ((j & 0xF) << 2)) & 0xF) as usize;  // hex digit at index j
            // perform constant-time sequential search on t to extract t[d]:
            let mut w = Self::one();
            for e in 0..16 {  // t[] contains 16 serialized elements...
                w = Self::conditional_select(&w, &t[e], e.ct_eq(&d)); // ... (of which only the d-th is to be kept)
            }
            v *= w;  // accumulate t[d] into v
        }
        v
    }

    /// Compute the square root of this element <i>a + bu &in; <b>F</b><sub>p&sup2;</sub></i>
    /// if such a root exists.  The result is only present when `self` is a square.
    ///
    /// Reference:
    ///
    /// * M. Scott, "Implementing cryptographic pairings" (invited talk),
    /// International Conference on Pairing-Based Cryptography -- Pairing 2007,
    /// Lecture Notes in Computer Science, vol. 4575, pp. 177--196, Springer, 2007.
    /// https://link.springer.com/book/10.1007/978-3-540-73489-5
    #[inline]
    pub fn sqrt(&self) -> CtOption<Self> {
        let n = self.norm();  // n = (a^2 + b^2) mod p
        let m_opt = n.sqrt();  // the norm of a square is itself a square in F_p
        let m = m_opt.unwrap_or(BLSFp::zero());
        let z: BLSFp<BLS, LIMBS> = BLSFp::conditional_select(&(self.c0 + m).half(), &self.c0, self.c1.is_zero());  // (a + m)/2 mod p, or just a when b = 0
        let t = z.inv_sqrt();  // 1/sqrt(z) = z^((p + 1)/4 - 1) mod p
        let r = z*t;  // sqrt(z) = z*t mod p
        let s = self.c1*t.half(); // b*t/2 mod p = ±b*(r*t)*t/2 mod p (NB: r*t is just a ± sign)
        let ch = r.sq().ct_eq(&z);  // sign flip and swap flag
        let mu = BLSFp::conditional_select(&s, &r, ch);
        let nu = BLSFp::conditional_select(&(-r), &s, ch);
        let root = Self::from(mu, nu);
        CtOption::new(root, root.sq().ct_eq(self))
    }

    /// Compute the generalized Legendre symbol <i>(a/<b>F</b><sub>p&sup2;</sub>)</i>:<br>
    /// &nbsp;   +1      if <i>a</i> is a nonzero quadratic residue in <b>F</b><sub><i>p&sup2;</i></sub>,<br>
    /// &nbsp;   &nbsp;0 if <i>a</i> = <i>0</i><br>
    /// &nbsp;   -1      if <i>a</i> is a nonzero quadratic non-residue in <b>F</b><sub><i>p&sup2;</i></sub>.
    #[inline]
    pub(crate) fn legendre(&self) -> isize {
        self.norm().legendre()
    }

    /// Recover a field element from its canonical byte representation:
    /// 16&times;LIMBS bytes, big-endian, the <i>c&#x2081;</i> component first.
    pub fn try_from_bytes(bytes: &[u8]) -> Result<Self, BLSError> {
        if bytes.len() != LIMBS << 4 {
            return Err(BLSError::Decode);
        }
        let c1 = BLSFp::try_from_bytes(&bytes[0..LIMBS << 3])?;
        let c0 = BLSFp::try_from_bytes(&bytes[LIMBS << 3..])?;
        Ok(Self { c0, c1 })
    }
}

impl<BLS: BLSParam, const LIMBS: usize> Add for BLSFp2<BLS, LIMBS> {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self::Output {
        Self {
            c0: self.c0 + rhs.c0,
            c1: self.c1 + rhs.c1,
        }
    }
}

impl<BLS: BLSParam, const LIMBS: usize> AddAssign for BLSFp2<BLS, LIMBS> {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        self.c0 += rhs.c0;
        self.c1 += rhs.c1;
    }
}

impl<BLS: BLSParam, const LIMBS: usize> BLSField for BLSFp2<BLS, LIMBS> {
    /// Convert `self` to byte array representation,
    /// the <i>c&#x2081;</i> component first.
    #[inline]
    fn to_bytes(&self) -> Vec<u8> {
        let mut bytes = self.c1.to_bytes();
        let mut next = self.c0.to_bytes(); bytes.append(&mut next);
        bytes
    }

    /// Compute the value of twice this element.
    #[inline]
    fn double(&self) -> Self {
        Self {
            c0: self.c0.double(),
            c1: self.c1.double(),
        }
    }

    /// Compute the value of half this element.
    #[inline]
    fn half(&self) -> Self {
        Self {
            c0: self.c0.half(),
            c1: self.c1.half(),
        }
    }

    /// Compute the square of this <b>F</b><sub><i>p&sup2;</i></sub> element.
    #[inline]
    fn sq(&self) -> Self {
        // (a + bu)^2 = a^2 - b^2 + 2abu = (a + b)*(a - b) + 2abu
        let apb = self.c0 + self.c1;
        let amb = self.c0 - self.c1;
        let atb = self.c0*self.c1;
        Self {
            c0: apb*amb,
            c1: atb + atb
        }
    }

    /// Compute the cube of this <b>F</b><sub><i>p&sup2;</i></sub> element.
    #[inline]
    fn cb(&self) -> Self {
        // (a + bu)^3 = a*(a^2 - 3*b^2) + b*(3*a^2 - b^2) u
        let a2 = self.c0.sq();
        let b2 = self.c1.sq();
        let d = a2 - b2;
        Self {
            c0: self.c0*(d - b2 - b2),
            c1: self.c1*(a2 + a2 + d)
        }
    }

    /// Compute the inverse of `self` in <b>F</b><sub><i>p&sup2;</i></sub>
    /// (or 0, if `self` is itself 0).
    #[inline]
    fn inv(&self) -> Self {
        // (a + bu)^-1 = (a^2 + b^2)^-1*(a - bu) = norm^-1*conj.
        self.norm().inv()*self.conj()
    }
}

impl<BLS: BLSParam, const LIMBS: usize> Clone for BLSFp2<BLS, LIMBS> {
    #[inline]
    fn clone(&self) -> Self {
        Self { c0: self.c0.clone(), c1: self.c1.clone() }
    }
}

impl<BLS: BLSParam, const LIMBS: usize> ConditionallySelectable for BLSFp2<BLS, LIMBS> {
    #[inline]
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        Self {
            c0: BLSFp::conditional_select(&a.c0, &b.c0, choice),
            c1: BLSFp::conditional_select(&a.c1, &b.c1, choice),
        }
    }
}

impl<BLS: BLSParam, const LIMBS: usize> ConstantTimeEq for BLSFp2<BLS, LIMBS> {
    #[inline]
    fn ct_eq(&self, other: &Self) -> Choice {
        self.c0.ct_eq(&other.c0) & self.c1.ct_eq(&other.c1)
    }

    #[inline]
    fn ct_ne(&self, other: &Self) -> Choice {
        self.c0.ct_ne(&other.c0) | self.c1.ct_ne(&other.c1)
    }
}

impl<BLS: BLSParam, const LIMBS: usize> Copy for BLSFp2<BLS, LIMBS> {}

impl<BLS: BLSParam, const LIMBS: usize> Debug for BLSFp2<BLS, LIMBS> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        Display::fmt(&self, f)
    }
}

impl<BLS: BLSParam, const LIMBS: usize> Display for BLSFp2<BLS, LIMBS> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        if bool::from(self.c1.is_zero()) {
            write!(f, "{}",
                self.c0.to_string()
            )
        } else if bool::from(self.c0.is_zero()) {
            if bool::from(self.c1.is_one()) {
                write!(f, "u")
            } else if bool::from((-self.c1).is_one()) {
                write!(f, "-u")
            } else {
                write!(f, "{}*u",
                    self.c1.to_string()
                )
            }
        } else {
            if bool::from(self.c1.is_one()) {
                write!(f, "{} + u", self.c0.to_string())
            } else if bool::from((-self.c1).is_one()) {
                write!(f, "{} - u", self.c0.to_string())
            } else {
                write!(f, "{} + {}*u",
                    self.c0.to_string(),
                    self.c1.to_string()
                )
            }
        }
    }
}

impl<BLS: BLSParam, const LIMBS: usize> Mul for BLSFp2<BLS, LIMBS> {
    type Output = Self;

    /// Compute a product in <b>F</b><sub><i>p&sup2;</i></sub>.
    #[inline]
    fn mul(self, rhs: Self) -> Self::Output {
        let mut val = self;
        val *= rhs;
        val
    }
}

impl<BLS: BLSParam, const LIMBS: usize> Mul<BLSFp2<BLS, LIMBS>> for Word {
    type Output = BLSFp2<BLS, LIMBS>;

    /// Compute the product of a small integer left factor
    /// by a right factor from <b>F</b><sub><i>p&sup2;</i></sub>.
    #[inline]
    fn mul(self, rhs: BLSFp2<BLS, LIMBS>) -> Self::Output {
        Self::Output {
            c0: self*rhs.c0,
            c1: self*rhs.c1
        }
    }
}

impl<BLS: BLSParam, const LIMBS: usize> Mul<BLSFp2<BLS, LIMBS>> for Uint<LIMBS> {
    type Output = BLSFp2<BLS, LIMBS>;

    /// Compute the product of an integer left factor
    /// by a right factor from <b>F</b><sub><i>p&sup2;</i></sub>.
    #[inline]
    fn mul(self, rhs: BLSFp2<BLS, LIMBS>) -> Self::Output {
        Self::Output {
            c0: self*rhs.c0,
            c1: self*rhs.c1
        }
    }
}

impl<BLS: BLSParam, const LIMBS: usize> Mul<BLSFp2<BLS, LIMBS>> for BLSFp<BLS, LIMBS> {
    type Output = BLSFp2<BLS, LIMBS>;

    /// Compute the product of a left factor from <b>F</b><sub><i>p</i></sub>
    /// by a right factor from <b>F</b><sub><i>p&sup2;</i></sub>.
    #[inline]
    fn mul(self, rhs: BLSFp2<BLS, LIMBS>) -> Self::Output {
        Self::Output {
            c0: self*rhs.c0,
            c1: self*rhs.c1
        }
    }
}

impl<BLS: BLSParam, const LIMBS: usize> MulAssign for BLSFp2<BLS, LIMBS> {
    #[inline]
    fn mul_assign(&mut self, rhs: Self) {
        // (a + bu)*(c + du) = ac - bd + (ad + bc)u
        // (a + b)*(c + d) - ac - bd = ad + bc
        let v0 = self.c0*rhs.c0;
        let v1 = self.c1*rhs.c1;
        let mix = (self.c0 + self.c1)*(rhs.c0 + rhs.c1);
        self.c0 = v0 - v1;
        self.c1 = mix - v0 - v1;
    }
}

impl<BLS: BLSParam, const LIMBS: usize> Neg for BLSFp2<BLS, LIMBS> {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self::Output {
        Self::Output {
            c0: -self.c0,
            c1: -self.c1,
        }
    }
}

impl<BLS: BLSParam, const LIMBS: usize> One for BLSFp2<BLS, LIMBS> {
    #[inline]
    fn one() -> Self {
        Self {
            c0: BLSFp::one(),
            c1: BLSFp::zero(),
        }
    }

    #[inline]
    fn is_one(&self) -> Choice {
        self.c0.is_one() & self.c1.is_zero()
    }
}

impl<BLS: BLSParam, const LIMBS: usize> PartialEq for BLSFp2<BLS, LIMBS> {
    #[inline]
    fn eq(&self, other: &Self) -> bool { self.ct_eq(&other).into() }

    #[inline]
    fn ne(&self, other: &Self) -> bool { self.ct_ne(&other).into() }
}

impl<BLS: BLSParam, const LIMBS: usize> Random for BLSFp2<BLS, LIMBS> {
    /// Pick a uniform element from <b>F</b><sub><i>p&sup2;</i></sub> by rejection sampling.
    #[inline]
    fn random<R: RngCore + ?Sized>(rng: &mut R) -> Self {
        Self {
            c0: BLSFp::random(rng),
            c1: BLSFp::random(rng),
        }
    }

    /// Try to pick a uniform element from <b>F</b><sub><i>p&sup2;</i></sub> by rejection sampling.
    fn try_random<R: TryRngCore + ?Sized>(rng: &mut R) -> Result<Self, <R as TryRngCore>::Error> where R: TryRngCore {
        let try_c0 = match BLSFp::try_random(rng) {
            Ok(val) => Ok(val),
            Err(e) => Err(e),
        }?;

        let try_c1 = match BLSFp::try_random(rng) {
            Ok(val) => Ok(val),
            Err(e) => Err(e),
        }?;

        Ok(Self { c0: try_c0, c1: try_c1 })
    }
}

impl<BLS: BLSParam, const LIMBS: usize> Sub for BLSFp2<BLS, LIMBS> {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self::Output {
        Self {
            c0: self.c0 - rhs.c0,
            c1: self.c1 - rhs.c1,
        }
    }
}

impl<BLS: BLSParam, const LIMBS: usize> SubAssign for BLSFp2<BLS, LIMBS> {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        self.c0 -= rhs.c0;
        self.c1 -= rhs.c1;
    }
}

impl<BLS: BLSParam, const LIMBS: usize> Zero for BLSFp2<BLS, LIMBS> {
    #[inline]
    fn zero() -> Self {
        Self {
            c0: BLSFp::zero(),
            c1: BLSFp::zero(),
        }
    }

    #[inline]
    fn is_zero(&self) -> Choice {
        self.c0.is_zero() & self.c1.is_zero()
    }

    #[inline]
    fn set_zero(&mut self) {
        self.c0.set_zero();
        self.c1.set_zero()
    }
}


#[cfg(test)]
mod tests {
    use crate::blsparam::BLS381Param;
    use crypto_bigint::{NonZero, RandomMod};
    use crypto_bigint::rand_core::RngCore;
    use std::time::SystemTime;
    use super::*;

    const TESTS: usize = 100;

    /// General BLSFp2 test template.
    #[allow(non_snake_case)]
    fn BLSFp2_test<BLS: BLSParam, const LIMBS: usize>() {
        let mut rng = rand::rng();

        println!();
        println!("Performing {} BLSFp2 test(s)...", TESTS);
        let now = SystemTime::now();

        // neutral elements:
        //println!("0 = {}", BLSFp2::zero());
        assert!(bool::from(BLSFp2::<BLS, LIMBS>::zero().is_zero()));
        //println!("1 = {}", BLSFp2::one());
        assert!(bool::from(BLSFp2::<BLS, LIMBS>::one().is_one()));

        // canonical encodings decode and re-encode verbatim:
        let seed = vec![1u8; LIMBS << 4];
        let fe = BLSFp2::<BLS, LIMBS>::try_from_bytes(&seed).unwrap();
        assert_eq!(fe.to_bytes(), seed);

        for _t in 0..TESTS {
            //println!("======== {}", _t);

            let e2: BLSFp2<BLS, LIMBS> = BLSFp2::random(&mut rng);
            //println!("e2 = {}", e2);
            assert_eq!(e2 + BLSFp2::zero(), e2);
            assert_eq!(e2*BLSFp2::one(), e2);

            // addition vs subtraction:
            assert!(bool::from((e2 - e2).is_zero()));
            assert!(bool::from((e2 + (-e2)).is_zero()));

            // double and half:
            assert_eq!(e2.double().half(), e2);
            assert_eq!(e2.half().double(), e2);
            assert_eq!(e2.double()*e2.half(), e2.sq());

            // square and cube:
            //println!("e2^2 = e2*e2 ? {}", e2.sq() == e2*e2);
            assert_eq!(e2.sq(), e2*e2);
            assert_eq!(e2.cb(), e2*e2*e2);

            // norm:
            //println!("|e2| = {}", e2.norm());
            assert!(bool::from((e2*e2.conj()).c0.ct_eq(&e2.norm()) & (e2*e2.conj()).c1.is_zero()));

            // tower non-residue:
            let xi: BLSFp2<BLS, LIMBS> = BLSFp2::from(BLSFp::one(), BLSFp::one());
            assert_eq!(e2.mul_xi(), e2*xi);
            assert_eq!(e2.mul_u(), e2*BLSFp2::from(BLSFp::zero(), BLSFp::one()));

            // Frobenius:
            let p: Uint<LIMBS> = Uint::from_words(BLS::MODULUS.try_into().unwrap());
            assert_eq!(e2.frobenius_map(1), e2.pow(&p));
            assert_eq!(e2.frobenius_map(2), e2);

            // field inversion:
            //println!("e2^-1 = {}", e2.inv());
            assert!(bool::from((e2*e2.inv()).is_one() | e2.is_zero()));

            // exponentiation:
            assert_eq!(e2.pow(&Uint::<LIMBS>::ZERO), BLSFp2::one());
            assert_eq!(e2.pow(&Uint::<LIMBS>::ONE), e2);
            assert_eq!(e2.pow(&Uint::<LIMBS>::from_word(8)), e2.sq().sq().sq());

            // square roots:
            assert!(bool::from(xi.sqrt().is_none()));  // xi = 1 + u is a non-residue
            assert!(xi.legendre() < 0);
            let sq = e2.sq();
            let sr = sq.sqrt();
            assert!(bool::from(sr.is_some()));
            assert_eq!(sr.unwrap_or(BLSFp2::zero()).sq(), sq);
            let e1: BLSFp2<BLS, LIMBS> = BLSFp2::from_base(BLSFp::random(&mut rng));
            let sr = e1.sqrt();  // a base field value always has a square root in Fp2
            assert!(bool::from(sr.is_some()));
            assert_eq!(sr.unwrap_or(BLSFp2::zero()).sq(), e1);

            // byte encoding (c1 || c0):
            let bytes = e2.to_bytes();
            assert_eq!(bytes.len(), LIMBS << 4);
            assert_eq!(&bytes[0..LIMBS << 3], &e2.c1.to_bytes()[..]);
            assert_eq!(&bytes[LIMBS << 3..], &e2.c0.to_bytes()[..]);
            assert_eq!(BLSFp2::<BLS, LIMBS>::try_from_bytes(&bytes).unwrap(), e2);
            assert_eq!(BLSFp2::<BLS, LIMBS>::try_from_bytes(&bytes[1..]).unwrap_err(), BLSError::Decode);

            // hash to field element:
            let h2: BLSFp2<BLS, LIMBS> = BLSFp2::shake256(&bytes);
            assert_eq!(BLSFp2::<BLS, LIMBS>::try_from_bytes(&h2.to_bytes()).unwrap(), h2);

            // subring multiplication (Word*BLSFp2, Uint*BLSFp2, and BLSFp*BLSFp2):
            let k2: Word = rng.next_u64() & 0xF;
            assert_eq!(k2*e2, BLSFp::from_word(k2)*e2);
            let u2 = Uint::random_mod(&mut rng, &NonZero::new(p).unwrap());
            assert_eq!(u2*e2, BLSFp::from_uint(u2)*e2);
            assert_eq!(u2*e2, BLSFp2::from(BLSFp::from_uint(u2), BLSFp::zero())*e2);

            let e3 = BLSFp2::random(&mut rng);

            // norm homomorphism:
            //println!("|e2*e3| = |e2|*|e3| ? {}", (e2*e3).norm() == e2.norm()*e3.norm());
            assert_eq!((e2*e3).norm(), e2.norm()*e3.norm());

            let f2 = BLSFp2::random(&mut rng);
            let g2 = BLSFp2::random(&mut rng);

            // commutativity of addition and multiplication:
            assert_eq!(e2 + f2, f2 + e2);
            assert_eq!(e2*f2, f2*e2);

            // associativity and distributivity:
            assert_eq!((e2 + f2) + g2, e2 + (f2 + g2));
            assert_eq!((e2*f2)*g2, e2*(f2*g2));
            assert_eq!(e2*(f2 + g2), e2*f2 + e2*g2);
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
    fn BLS381Fp2_test() {
        const LIMBS: usize = BLS381Param::LIMBS;
        BLSFp2_test::<BLS381Param, LIMBS>();
    }

}
