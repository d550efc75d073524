#[cfg(not(any(target_pointer_width = "64")))]
compile_error!("this crate requires 64-bit limbs");

use crate::blsfp::BLSFp;
use crate::blsfp2::BLSFp2;
use crate::blsparam::BLSParam;
use crate::traits::{BLSField, One};
use crate::BLSError;
use crypto_bigint::{Random, Uint, Zero};
use crypto_bigint::rand_core::{RngCore, TryRngCore};
use crypto_bigint::subtle::{Choice, ConditionallySelectable, ConstantTimeEq};
use std::fmt::{Debug, Display, Formatter};
use std::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign};

/// The <b>F</b><sub><i>p&#x2076;</i></sub> = <b>F</b><sub><i>p&sup2;</i></sub>&lbrack;<i>v</i>&rbrack;/&lt;<i>v&sup3; - &xi;</i>&gt;
/// extension field, with <i>&xi;</i> = <i>1 + u</i>.
/// NB: <i>v&sup3;</i> = <i>&xi;</i>.
pub struct BLSFp6<BLS: BLSParam, const LIMBS: usize> {
    pub(crate) c0: BLSFp2<BLS, LIMBS>,
    pub(crate) c1: BLSFp2<BLS, LIMBS>,
    pub(crate) c2: BLSFp2<BLS, LIMBS>,
}

impl<BLS: BLSParam, const LIMBS: usize> BLSFp6<BLS, LIMBS> {
    /// Map an <b>F</b><sub><i>p&sup2;</i></sub> element to its <b>F</b><sub><i>p&#x2076;</i></sub> counterpart.
    #[inline]
    pub fn from_base(c0: BLSFp2<BLS, LIMBS>) -> Self {
        Self {
            c0, c1: BLSFp2::zero(), c2: BLSFp2::zero()
        }
    }

    /// Assemble an <b>F</b><sub><i>p&#x2076;</i></sub> element from its components.
    #[inline]
    pub fn from(c0: BLSFp2<BLS, LIMBS>, c1: BLSFp2<BLS, LIMBS>, c2: BLSFp2<BLS, LIMBS>) -> Self {
        Self {
            c0, c1, c2
        }
    }

    /// Compute the product of this element and `rhs` using 3-way Karatsuba over <b>F</b><sub><i>p&sup2;</i></sub>.
    #[inline]
    fn kara3mul(&mut self, rhs: Self) {
        let t0 = self.c0*rhs.c0;
        let t1 = self.c1*rhs.c1;
        let t2 = self.c2*rhs.c2;
        let t3 = (self.c0 + self.c1)*(rhs.c0 + rhs.c1) - t0 - t1;
        let t4 = (self.c0 + self.c2)*(rhs.c0 + rhs.c2) - t0 - t2;
        let t5 = (self.c1 + self.c2)*(rhs.c1 + rhs.c2) - t1 - t2;
        self.c0 = t0 + t5.mul_xi();
        self.c1 = t3 + t2.mul_xi();
        self.c2 = t4 + t1;
    }

    /// Multiply this element by the sparse element <i>b&#x2080; + b&#x2081;v</i>.
    ///
    /// This is the workhorse of the sparse line-function accumulation in the
    /// Miller loop; it must agree with the general product against
    /// <i>b&#x2080; + b&#x2081;v + 0&middot;v&sup2;</i>.
    #[inline]
    pub fn mul_by_01(&self, b0: BLSFp2<BLS, LIMBS>, b1: BLSFp2<BLS, LIMBS>) -> Self {
        let t0 = self.c0*b0;
        let t1 = self.c1*b1;
        Self {
            c0: ((self.c1 + self.c2)*b1 - t1).mul_xi() + t0,
            c1: (self.c0 + self.c1)*(b0 + b1) - t0 - t1,
            c2: (self.c0 + self.c2)*b0 - t0 + t1,
        }
    }

    /// Multiply this element by the sparse element <i>b&#x2081;v</i>.
    #[inline]
    pub fn mul_by_1(&self, b1: BLSFp2<BLS, LIMBS>) -> Self {
        Self {
            c0: (self.c2*b1).mul_xi(),
            c1: self.c0*b1,
            c2: self.c1*b1,
        }
    }

    /// Multiply this element by the cubic non-residue <i>v</i>:
    /// (<i>c&#x2080;</i>, <i>c&#x2081;</i>, <i>c&#x2082;</i>) &#8614;
    /// (<i>&xi;c&#x2082;</i>, <i>c&#x2080;</i>, <i>c&#x2081;</i>).
    #[inline]
    pub fn mul_by_nonresidue(&self) -> Self {
        Self {
            c0: self.c2.mul_xi(),
            c1: self.c0,
            c2: self.c1,
        }
    }

    /// Apply the <i>power</i>-th Frobenius map <i>&pi;<sup>power</sup></i>,
    /// <i>&pi;(a)</i> &#x2254; <i>a&#x1D56;</i>, to this element, for <i>0 &leq; power &leq; 3</i>.
    ///
    /// The coordinates are mapped through the <b>F</b><sub><i>p&sup2;</i></sub> Frobenius
    /// and then scaled by the precomputed constants
    /// <i>&xi;<sup>(p^power - 1)/3</sup></i> and <i>&xi;<sup>2(p^power - 1)/3</sup></i>.
    #[inline]
    pub fn frobenius_map(&self, power: usize) -> Self {
        assert!(power <= 3);
        match power {
            1 => {
                let g1: BLSFp2<BLS, LIMBS> = BLSFp2::from(BLSFp::zero(), BLSFp::from_words(BLS::GAMMA_12.try_into().unwrap()));
                let g2: BLSFp<BLS, LIMBS> = BLSFp::from_words(BLS::GAMMA_14.try_into().unwrap());
                Self {
                    c0: self.c0.conj(),
                    c1: self.c1.conj()*g1,
                    c2: g2*self.c2.conj(),
                }
            },
            2 => {
                let g1: BLSFp<BLS, LIMBS> = BLSFp::from_words(BLS::GAMMA_22.try_into().unwrap());
                let g2: BLSFp<BLS, LIMBS> = BLSFp::from_words(BLS::GAMMA_24.try_into().unwrap());
                Self {
                    c0: self.c0,
                    c1: g1*self.c1,
                    c2: g2*self.c2,
                }
            },
            3 => {
                // xi^((p^3 - 1)/3) = xi^((p - 1)/3)*xi^((p^2 - 1)/3), and likewise
                // for the second coefficient, since p^2-Frobenius fixes F_{p^2}
                let g12: BLSFp<BLS, LIMBS> = BLSFp::from_words(BLS::GAMMA_12.try_into().unwrap());
                let g22: BLSFp<BLS, LIMBS> = BLSFp::from_words(BLS::GAMMA_22.try_into().unwrap());
                let g14: BLSFp<BLS, LIMBS> = BLSFp::from_words(BLS::GAMMA_14.try_into().unwrap());
                let g24: BLSFp<BLS, LIMBS> = BLSFp::from_words(BLS::GAMMA_24.try_into().unwrap());
                Self {
                    c0: self.c0.conj(),
                    c1: self.c1.conj()*BLSFp2::from(BLSFp::zero(), g12*g22),
                    c2: (g14*g24)*self.c2.conj(),
                }
            },
            _ => self.clone(),
        }
    }

    /// Compute <i>v</i> = `self`<i>&#x1D4F;</i> in <b>F</b><sub><i>p&#x2076;</i></sub>.
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

    /// Recover a field element from its canonical byte representation:
    /// 48&times;LIMBS bytes, big-endian, components in the order
    /// <i>c&#x2082;</i>, <i>c&#x2081;</i>, <i>c&#x2080;</i>.
    pub fn try_from_bytes(bytes: &[u8]) -> Result<Self, BLSError> {
        if bytes.len() != 3*(LIMBS << 4) {
            return Err(BLSError::Decode);
        }
        let c2 = BLSFp2::try_from_bytes(&bytes[0..LIMBS << 4])?;
        let c1 = BLSFp2::try_from_bytes(&bytes[LIMBS << 4..2*(LIMBS << 4)])?;
        let c0 = BLSFp2::try_from_bytes(&bytes[2*(LIMBS << 4)..])?;
        Ok(Self { c0, c1, c2 })
    }
}

impl<BLS: BLSParam, const LIMBS: usize> Add for BLSFp6<BLS, LIMBS> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        let mut val = self;
        val += rhs;
        val
    }
}

impl<BLS: BLSParam, const LIMBS: usize> AddAssign for BLSFp6<BLS, LIMBS> {
    fn add_assign(&mut self, rhs: Self) {
        self.c0 += rhs.c0;
        self.c1 += rhs.c1;
        self.c2 += rhs.c2;
    }
}

impl<BLS: BLSParam, const LIMBS: usize> BLSField for BLSFp6<BLS, LIMBS> {
    /// Convert `self` to serialized (byte array) representation,
    /// components in the order <i>c&#x2082;</i>, <i>c&#x2081;</i>, <i>c&#x2080;</i>.
    #[inline]
    fn to_bytes(&self) -> Vec<u8> {
        let mut bytes = self.c2.to_bytes();
        let mut next = self.c1.to_bytes(); bytes.append(&mut next);
        let mut next = self.c0.to_bytes(); bytes.append(&mut next);
        bytes
    }

    /// Compute the value of twice this element.
    #[inline]
    fn double(&self) -> Self {
        Self {
            c0: self.c0.double(), c1: self.c1.double(), c2: self.c2.double()
        }
    }

    /// Compute the value of half this element.
    #[inline]
    fn half(&self) -> Self {
        Self {
            c0: self.c0.half(), c1: self.c1.half(), c2: self.c2.half()
        }
    }

    /// Compute the square of this <b>F</b><sub><i>p&#x2076;</i></sub> element
    /// via the Chung-Hasan SQR3 formulas.
    ///
    /// Reference:
    ///
    /// * Jaewook Chung, M. Anwar Hasan:
    /// "Asymmetric Squaring Formulae."
    /// 18th IEEE Symposium on Computer Arithmetic -- ARITH '07,
    /// pp. 113--122, IEEE, 2007. https://doi.org/10.1109/ARITH.2007.11
    #[inline]
    fn sq(&self) -> Self {
        let s0 = self.c0.sq();
        let ab = self.c0*self.c1;
        let s1 = ab + ab;
        let s2 = (self.c0 - self.c1 + self.c2).sq();
        let bc = self.c1*self.c2;
        let s3 = bc + bc;
        let s4 = self.c2.sq();
        Self {
            c0: s3.mul_xi() + s0,
            c1: s4.mul_xi() + s1,
            c2: s1 + s2 + s3 - s0 - s4,
        }
    }

    /// Compute the cube of this <b>F</b><sub><i>p&#x2076;</i></sub> element.
    #[inline]
    fn cb(&self) -> Self {
        self.sq()*(*self)
    }

    /// Compute the inverse of this <b>F</b><sub><i>p&#x2076;</i></sub> element
    /// (or 0, if this element is itself 0).
    #[inline]
    fn inv(&self) -> Self {
        // |a| = a*a^(p^2)*a^(p^4) lies in F_{p^2}
        // :: a^-1 = |a|^-1*a^(p^2)*a^(p^4)
        //
        // a^(p^2)*a^(p^4) = (c_0^2 - c_1*c_2*xi) + (c_2^2*xi - c_0*c_1) v + (c_1^2 - c_0*c_2) v^2
        let t0 = self.c0.sq() - self.c1*self.c2.mul_xi();  // c_0^2 - c_1*c_2*xi
        let t1 = self.c2.sq().mul_xi() - self.c0*self.c1;  // c_2^2*xi - c_0*c_1
        let t2 = self.c1.sq() - self.c0*self.c2;  // c_1^2 - c_0*c_2

        // compute the inverse of the Fp2-norm:
        let norm_inv = (self.c0*t0 + (self.c1*t2 + self.c2*t1).mul_xi()).inv();

        // complete the inversion in Fp6:
        norm_inv*Self::from(t0, t1, t2)
    }
}

impl<BLS: BLSParam, const LIMBS: usize> Clone for BLSFp6<BLS, LIMBS> {
    fn clone(&self) -> Self {
        Self {
            c0: self.c0.clone(), c1: self.c1.clone(), c2: self.c2.clone()
        }
    }
}

impl<BLS: BLSParam, const LIMBS: usize> ConditionallySelectable for BLSFp6<BLS, LIMBS> {
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        let c0 = BLSFp2::conditional_select(&a.c0, &b.c0, choice);
        let c1 = BLSFp2::conditional_select(&a.c1, &b.c1, choice);
        let c2 = BLSFp2::conditional_select(&a.c2, &b.c2, choice);
        Self { c0, c1, c2 }
    }
}

impl<BLS: BLSParam, const LIMBS: usize> ConstantTimeEq for BLSFp6<BLS, LIMBS> {
    fn ct_eq(&self, other: &Self) -> Choice {
        self.c0.ct_eq(&other.c0) & self.c1.ct_eq(&other.c1) & self.c2.ct_eq(&other.c2)
    }

    fn ct_ne(&self, other: &Self) -> Choice {
        self.c0.ct_ne(&other.c0) | self.c1.ct_ne(&other.c1) | self.c2.ct_ne(&other.c2)
    }
}

impl<BLS: BLSParam, const LIMBS: usize> Copy for BLSFp6<BLS, LIMBS> {}

impl<BLS: BLSParam, const LIMBS: usize> Debug for BLSFp6<BLS, LIMBS> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        Display::fmt(&self, f)
    }
}

impl<BLS: BLSParam, const LIMBS: usize> Display for BLSFp6<BLS, LIMBS> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        if bool::from(self.c1.is_zero() & self.c2.is_zero()) {
            // element in F_{p^2}:
            write!(f, "{}", self.c0)
        } else {
            write!(f, "({}) + ({})*v + ({})*v^2", self.c0, self.c1, self.c2)
        }
    }
}

impl<BLS: BLSParam, const LIMBS: usize> Mul for BLSFp6<BLS, LIMBS> {
    type Output = Self;

    /// Compute a product in <b>F</b><sub><i>p&#x2076;</i></sub>.
    fn mul(self, rhs: Self) -> Self::Output {
        let mut val = self;
        val *= rhs;
        val
    }
}

impl<BLS: BLSParam, const LIMBS: usize> Mul<BLSFp6<BLS, LIMBS>> for BLSFp<BLS, LIMBS> {
    type Output = BLSFp6<BLS, LIMBS>;

    /// Compute the product of a left factor from <b>F</b><sub><i>p</i></sub>
    /// by a right factor from <b>F</b><sub><i>p&#x2076;</i></sub>.
    fn mul(self, rhs: BLSFp6<BLS, LIMBS>) -> Self::Output {
        Self::Output {
            c0: self*rhs.c0, c1: self*rhs.c1, c2: self*rhs.c2
        }
    }
}

impl<BLS: BLSParam, const LIMBS: usize> Mul<BLSFp6<BLS, LIMBS>> for BLSFp2<BLS, LIMBS> {
    type Output = BLSFp6<BLS, LIMBS>;

    /// Compute the product of a left factor from <i><b>F</b><sub>p&sup2;</sub></i>
    /// by a right factor from <b>F</b><sub><i>p&#x2076;</i></sub>.
    fn mul(self, rhs: BLSFp6<BLS, LIMBS>) -> Self::Output {
        Self::Output {
            c0: self*rhs.c0, c1: self*rhs.c1, c2: self*rhs.c2
        }
    }
}

impl<BLS: BLSParam, const LIMBS: usize> MulAssign for BLSFp6<BLS, LIMBS> {
    fn mul_assign(&mut self, rhs: Self) {
        self.kara3mul(rhs);
    }
}

impl<BLS: BLSParam, const LIMBS: usize> Neg for BLSFp6<BLS, LIMBS> {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self::Output {
            c0: -self.c0, c1: -self.c1, c2: -self.c2
        }
    }
}

impl<BLS: BLSParam, const LIMBS: usize> One for BLSFp6<BLS, LIMBS> {
    #[inline]
    fn one() -> Self {
        Self {
            c0: BLSFp2::one(), c1: BLSFp2::zero(), c2: BLSFp2::zero()
        }
    }

    fn is_one(&self) -> Choice {
        self.c0.is_one() & self.c1.is_zero() & self.c2.is_zero()
    }
}

impl<BLS: BLSParam, const LIMBS: usize> PartialEq for BLSFp6<BLS, LIMBS> {
    fn eq(&self, other: &Self) -> bool { self.ct_eq(&other).into() }

    fn ne(&self, other: &Self) -> bool { self.ct_ne(&other).into() }
}

impl<BLS: BLSParam, const LIMBS: usize> Random for BLSFp6<BLS, LIMBS> {
    /// Pick a uniform element from <b>F</b><sub><i>p&#x2076;</i></sub> by rejection sampling.
    fn random<R: RngCore + ?Sized>(rng: &mut R) -> Self {
        Self {
            c0: BLSFp2::random(rng), c1: BLSFp2::random(rng), c2: BLSFp2::random(rng),
        }
    }

    /// Try to pick a uniform element from <b>F</b><sub><i>p&#x2076;</i></sub> by rejection sampling.
    fn try_random<R: TryRngCore + ?Sized>(rng: &mut R) -> Result<Self, <R as TryRngCore>::Error> where R: TryRngCore {
        let try_c0 = match BLSFp2::try_random(rng) {
            Ok(val) => Ok(val),
            Err(e) => Err(e),
        }?;

        let try_c1 = match BLSFp2::try_random(rng) {
            Ok(val) => Ok(val),
            Err(e) => Err(e),
        }?;

        let try_c2 = match BLSFp2::try_random(rng) {
            Ok(val) => Ok(val),
            Err(e) => Err(e),
        }?;

        Ok(Self { c0: try_c0, c1: try_c1, c2: try_c2 })
    }
}

impl<BLS: BLSParam, const LIMBS: usize> Sub for BLSFp6<BLS, LIMBS> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        let mut val = self;
        val -= rhs;
        val
    }
}

impl<BLS: BLSParam, const LIMBS: usize> SubAssign for BLSFp6<BLS, LIMBS> {
    fn sub_assign(&mut self, rhs: Self) {
        self.c0 -= rhs.c0;
        self.c1 -= rhs.c1;
        self.c2 -= rhs.c2;
    }
}

impl<BLS: BLSParam, const LIMBS: usize> Zero for BLSFp6<BLS, LIMBS> {
    fn zero() -> Self {
        Self {
            c0: BLSFp2::zero(), c1: BLSFp2::zero(), c2: BLSFp2::zero()
        }
    }

    fn is_zero(&self) -> Choice {
        self.c0.is_zero() & self.c1.is_zero() & self.c2.is_zero()
    }

    fn set_zero(&mut self) {
        self.c0.set_zero();
        self.c1.set_zero();
        self.c2.set_zero();
    }
}


#[cfg(test)]
mod tests {
    use crate::blsparam::BLS381Param;
    use std::time::SystemTime;
    use super::*;

    const TESTS: usize = 100;

    /// General BLSFp6 test template.
    #[allow(non_snake_case)]
    fn BLSFp6_test<BLS: BLSParam, const LIMBS: usize>() {
        let mut rng = rand::rng();

        println!();
        println!("Performing {} BLSFp6 test(s)...", TESTS);
        let now = SystemTime::now();

        // neutral elements:
        //println!("0 = {}", BLSFp6::zero());
        assert!(bool::from(BLSFp6::<BLS, LIMBS>::zero().is_zero()));
        //println!("1 = {}", BLSFp6::one());
        assert!(bool::from(BLSFp6::<BLS, LIMBS>::one().is_one()));

        // canonical encodings decode and re-encode verbatim:
        let seed = vec![1u8; 3*(LIMBS << 4)];
        let fe = BLSFp6::<BLS, LIMBS>::try_from_bytes(&seed).unwrap();
        assert_eq!(fe.to_bytes(), seed);

        for _t in 0..TESTS {
            //println!("======== {}", _t);

            let e6: BLSFp6<BLS, LIMBS> = BLSFp6::random(&mut rng);
            //println!("e6 = {}", e6);
            assert_eq!(e6 + BLSFp6::zero(), e6);
            assert_eq!(e6*BLSFp6::one(), e6);
            let e2: BLSFp2<BLS, LIMBS> = BLSFp2::random(&mut rng);
            assert_eq!(BLSFp6::from_base(e2), BLSFp6::from(e2, BLSFp2::zero(), BLSFp2::zero()));

            // addition vs subtraction:
            assert!(bool::from((e6 - e6).is_zero()));
            assert!(bool::from((e6 + (-e6)).is_zero()));

            // double and half:
            assert_eq!(e6.double().half(), e6);
            assert_eq!(e6.half().double(), e6);

            // square and cube:
            //println!("e6^2 = e6*e6 ? {}", e6.sq() == e6*e6);
            assert_eq!(e6.sq(), e6*e6);
            assert_eq!(e6.cb(), e6*e6*e6);

            // sparse multiplication against the masked general product:
            let b6: BLSFp6<BLS, LIMBS> = BLSFp6::random(&mut rng);
            let masked01 = BLSFp6::from(b6.c0, b6.c1, BLSFp2::zero());
            assert_eq!(e6.mul_by_01(b6.c0, b6.c1), e6*masked01);
            let masked1 = BLSFp6::from(BLSFp2::zero(), b6.c1, BLSFp2::zero());
            assert_eq!(e6.mul_by_1(b6.c1), e6*masked1);

            // multiplication by the cubic non-residue v:
            let v6: BLSFp6<BLS, LIMBS> = BLSFp6::from(BLSFp2::zero(), BLSFp2::one(), BLSFp2::zero());
            assert_eq!(e6.mul_by_nonresidue(), e6*v6);

            // Frobenius maps:
            let p: Uint<LIMBS> = Uint::from_words(BLS::MODULUS.try_into().unwrap());
            assert_eq!(e6.frobenius_map(1), e6.pow(&p));
            assert_eq!(e6.frobenius_map(2), e6.frobenius_map(1).frobenius_map(1));
            assert_eq!(e6.frobenius_map(3), e6.frobenius_map(1).frobenius_map(2));

            // field inversion:
            //println!("e6^-1 = {};", e6.inv());
            assert!(bool::from((e6*e6.inv()).is_one()));

            // exponentiation:
            assert_eq!(e6.pow(&Uint::<LIMBS>::ZERO), BLSFp6::one());
            assert_eq!(e6.pow(&Uint::<LIMBS>::ONE), e6);
            assert_eq!(e6.pow(&Uint::<LIMBS>::from_word(8)), e6.sq().sq().sq());

            // byte encoding (c2 || c1 || c0):
            let bytes = e6.to_bytes();
            assert_eq!(bytes.len(), 3*(LIMBS << 4));
            assert_eq!(BLSFp6::<BLS, LIMBS>::try_from_bytes(&bytes).unwrap(), e6);
            assert_eq!(BLSFp6::<BLS, LIMBS>::try_from_bytes(&bytes[1..]).unwrap_err(), BLSError::Decode);

            // subring multiplication (BLSFp*BLSFp6 and BLSFp2*BLSFp6):
            let s1: BLSFp<BLS, LIMBS> = BLSFp::random(&mut rng);
            assert_eq!(s1*e6, BLSFp2::from_base(s1)*e6);
            assert_eq!(BLSFp2::from_base(s1)*e6, BLSFp6::from_base(BLSFp2::from_base(s1))*e6);

            let f6 = BLSFp6::random(&mut rng);
            let g6 = BLSFp6::random(&mut rng);

            // commutativity of addition and multiplication:
            assert_eq!(e6 + f6, f6 + e6);
            assert_eq!(e6*f6, f6*e6);

            // associativity and distributivity:
            assert_eq!((e6 + f6) + g6, e6 + (f6 + g6));
            assert_eq!((e6*f6)*g6, e6*(f6*g6));
            assert_eq!(e6*(f6 + g6), e6*f6 + e6*g6);
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
    fn BLS381Fp6_test() {
        const LIMBS: usize = BLS381Param::LIMBS;
        BLSFp6_test::<BLS381Param, LIMBS>();
    }

}
