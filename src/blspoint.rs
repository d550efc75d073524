#[cfg(not(any(target_pointer_width = "64")))]
compile_error!("this crate requires 64-bit limbs");

use crate::blsfp::BLSFp;
use crate::blsparam::BLSParam;
use crate::blszr::BLSZr;
use crate::traits::{BLSField, One};
use crate::BLSError;
use crypto_bigint::{Random, Uint, Zero};
use crypto_bigint::rand_core::{RngCore, TryRngCore};
use crypto_bigint::subtle::{Choice, ConditionallySelectable, ConstantTimeEq};
use std::fmt::{Debug, Display, Formatter};
use std::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign};

/// The group <b>G&#x2081;</b> &#x2254; <i>E</i>&lbrack;<i>r</i>&rbrack;(<b>F</b><sub><i>p</i></sub>)
/// of <b>F</b><sub><i>p</i></sub>-rational <i>r</i>-torsion points on the curve
/// <i>E</i>/<b>F</b><sub><i>p</i></sub> : <i>Y&sup2;</i> = <i>X&sup3;</i> + <i>b</i>,
/// in Jacobian coordinates: the triple (<i>X</i>, <i>Y</i>, <i>Z</i>) stands for the
/// affine point (<i>X</i>/<i>Z&sup2;</i>, <i>Y</i>/<i>Z&sup3;</i>), and the point at
/// infinity is marked by <i>Z</i> = 0.
pub struct BLSPoint<BLS: BLSParam, const LIMBS: usize> {
    pub(crate) x: BLSFp<BLS, LIMBS>,
    pub(crate) y: BLSFp<BLS, LIMBS>,
    pub(crate) z: BLSFp<BLS, LIMBS>,
}

impl<BLS: BLSParam, const LIMBS: usize> BLSPoint<BLS, LIMBS> {

    /// Create a normalized point from given affine coordinates <i>x</i> and <i>y</i>,
    /// rejecting coordinate pairs that do not satisfy the curve equation.
    #[inline]
    pub fn from_affine(x: BLSFp<BLS, LIMBS>, y: BLSFp<BLS, LIMBS>) -> Result<Self, BLSError> {
        let point = Self { x, y, z: BLSFp::one() };
        if bool::from(point.is_on_curve()) {
            Ok(point)
        } else {
            Err(BLSError::NotOnCurve)
        }
    }

    /// Create a point from given Jacobian coordinates <i>X</i>, <i>Y</i>, and <i>Z</i>,
    /// rejecting coordinate triples that do not satisfy the curve equation.
    #[inline]
    pub fn from_jacobian(x: BLSFp<BLS, LIMBS>, y: BLSFp<BLS, LIMBS>, z: BLSFp<BLS, LIMBS>) -> Result<Self, BLSError> {
        let point = Self { x, y, z };
        if bool::from(point.is_on_curve()) {
            Ok(point)
        } else {
            Err(BLSError::NotOnCurve)
        }
    }

    /// Create an instance of the conventional generator of <b>G</b><i>&#x2081;</i>.
    #[inline]
    pub fn generator() -> Self {
        Self {
            x: BLSFp::from_words(BLS::G1_X.try_into().unwrap()),
            y: BLSFp::from_words(BLS::G1_Y.try_into().unwrap()),
            z: BLSFp::one(),
        }
    }

    /// Determine if this point satisfies the Jacobian form of the curve equation,
    /// <i>Y&sup2;</i> = <i>X&sup3;</i> + <i>bZ&#x2076;</i>.
    /// The point at infinity trivially does.
    #[inline]
    pub fn is_on_curve(&self) -> Choice {
        self.y.sq().ct_eq(&(self.x.cb() + BLSFp::from_word(BLS::CURVE_B)*self.z.sq().cb()))
    }

    /// Determine if this point lies in the <i>r</i>-torsion group
    /// <b>G</b><i>&#x2081;</i>, i.e. if &lbrack;<i>r</i>&rbrack;`self` = <i>O</i>.
    ///
    /// A point that is merely on the curve may still sit in a subgroup of
    /// cofactor size; pairing soundness requires this check on untrusted inputs.
    pub fn in_correct_subgroup(&self) -> Choice {
        // [r]P via double-and-add over the group order words:
        let n = BLS::ORDER;
        let mut v = Self::zero();
        for j in (0..64*n.len()).rev() {
            v.double_self(1);
            if ((n[j >> 6] >> (j & 63)) & 1) == 1 {
                v += *self;
            }
        }
        v.is_zero()
    }

    /// Compute a normalized (i.e. affine) point equivalent to this one:
    /// <i>Z</i> = 1 when the point is finite, <i>Z</i> = 0 otherwise.
    /// Idempotent on already-normalized points.
    #[inline]
    pub fn normalize(&self) -> Self {
        let ch = self.z.is_zero();
        let inv = BLSFp::conditional_select(&self.z, &self.y, ch).inv();
        let inv2 = inv.sq();
        Self {
            x: self.x*inv2,
            y: self.y*inv2*inv,
            z: BLSFp::conditional_select(&BLSFp::one(), &BLSFp::zero(), ch),
        }
    }

    /// Compute &lbrack;<i>2&#x1D57;</i>&rbrack;<i>P</i>
    /// (i.e. double <i>t</i> times) via Jacobian point doubling.
    #[inline]
    pub fn double(&self, t: usize) -> Self {
        let mut d = self.clone();
        d.double_self(t);
        d
    }

    /// Compute &lbrack;<i>2&#x1D57;</i>&rbrack;<i>P</i>
    /// (i.e. double <i>t</i> times) via Jacobian point doubling.
    ///
    /// Reference:
    ///
    /// * Daniel J. Bernstein, Tanja Lange:
    /// <a href="https://hyperelliptic.org/EFD/g1p/auto-shortw-jacobian-0.html">
    /// "Explicit-Formulas Database"</a>, dbl-2009-l
    /// (Jacobian doubling for short Weierstrass curves with <i>a</i> = 0).
    #[inline]
    pub(crate) fn double_self(&mut self, t: usize) {
        let mut x = self.x;
        let mut y = self.y;
        let mut z = self.z;

        for _ in 0..t {
            let a = x.sq();
            let b = y.sq();
            let c = b.sq();
            let d = ((x + b).sq() - a - c).double();
            let e = a.double() + a;
            let f = e.sq();

            let x3 = f - d.double();
            let y3 = e*(d - x3) - c.double().double().double();
            let z3 = (y*z).double();

            x = x3;
            y = y3;
            z = z3;
        }
        self.x = x;
        self.y = y;
        self.z = z;
    }

    /// Convert `self` to its uncompressed affine byte representation,
    /// <i>x</i> &Vert; <i>y</i> in canonical <b>F</b><sub><i>p</i></sub> encoding.
    /// The point at infinity maps to the all-zero string.
    #[inline]
    pub fn to_bytes(&self) -> Vec<u8> {
        let n = self.normalize();
        if bool::from(n.is_zero()) {
            return vec![0u8; LIMBS << 4];
        }
        let mut bytes = n.x.to_bytes();
        let mut next = n.y.to_bytes(); bytes.append(&mut next);
        bytes
    }

    /// Recover a point from its uncompressed affine byte representation,
    /// rejecting malformed coordinates and off-curve points.
    /// The all-zero string decodes to the point at infinity.
    ///
    /// NB: this primitive alone does not vouch for <i>r</i>-torsion membership;
    /// see BLSPoint::try_from_bytes_subgroup_checked.
    pub fn try_from_bytes(bytes: &[u8]) -> Result<Self, BLSError> {
        if bytes.len() != LIMBS << 4 {
            return Err(BLSError::Decode);
        }
        if bytes.iter().all(|&b| b == 0) {
            return Ok(Self::zero());
        }
        let x = BLSFp::try_from_bytes(&bytes[0..LIMBS << 3])?;
        let y = BLSFp::try_from_bytes(&bytes[LIMBS << 3..])?;
        Self::from_affine(x, y)
    }

    /// Recover a point from its uncompressed affine byte representation,
    /// additionally rejecting points outside the <i>r</i>-torsion group.
    pub fn try_from_bytes_subgroup_checked(bytes: &[u8]) -> Result<Self, BLSError> {
        let point = Self::try_from_bytes(bytes)?;
        if bool::from(point.in_correct_subgroup()) {
            Ok(point)
        } else {
            Err(BLSError::NotInSubgroup)
        }
    }

}

impl<BLS: BLSParam, const LIMBS: usize> Add for BLSPoint<BLS, LIMBS> {
    type Output = Self;

    /// Jacobian elliptic point addition.
    fn add(self, other: Self) -> Self::Output {
        let mut point = self;
        point += other;
        point
    }
}

impl<BLS: BLSParam, const LIMBS: usize> AddAssign for BLSPoint<BLS, LIMBS> {

    /// Jacobian elliptic point addition, with explicit handling of the
    /// point at infinity and of the doubling case.
    ///
    /// Warning: this is a <i>variable-time</i> formula: the branch structure
    /// depends on the coordinates. The fixed-window scalar multiplication
    /// ladder masks this for secret scalars on public points.
    ///
    /// Reference:
    ///
    /// * Daniel J. Bernstein, Tanja Lange:
    /// <a href="https://hyperelliptic.org/EFD/g1p/auto-shortw-jacobian-0.html">
    /// "Explicit-Formulas Database"</a>, add-2007-bl
    /// (Jacobian addition for short Weierstrass curves).
    fn add_assign(&mut self, pair: Self) {
        if bool::from(self.is_zero()) {
            *self = pair;
            return;
        }
        if bool::from(pair.is_zero()) {
            return;
        }

        let z1z1 = self.z.sq();
        let z2z2 = pair.z.sq();
        let u1 = self.x*z2z2;
        let u2 = pair.x*z1z1;
        let s1 = self.y*pair.z*z2z2;
        let s2 = pair.y*self.z*z1z1;

        if u1 == u2 {
            if s1 == s2 {
                self.double_self(1);  // doubling fallback
            } else {
                *self = Self::zero();  // P + (-P) = O
            }
            return;
        }

        let h = u2 - u1;
        let i = h.double().sq();
        let j = h*i;
        let r = (s2 - s1).double();
        let v = u1*i;

        let x3 = r.sq() - j - v.double();
        let y3 = r*(v - x3) - (s1*j).double();
        let z3 = ((self.z + pair.z).sq() - z1z1 - z2z2)*h;

        self.x = x3;
        self.y = y3;
        self.z = z3;
    }

}

impl<BLS: BLSParam, const LIMBS: usize> Clone for BLSPoint<BLS, LIMBS> {
    fn clone(&self) -> Self {
        Self {
            x: self.x.clone(),
            y: self.y.clone(),
            z: self.z.clone(),
        }
    }
}

impl<BLS: BLSParam, const LIMBS: usize> Copy for BLSPoint<BLS, LIMBS> {}

impl<BLS: BLSParam, const LIMBS: usize> ConditionallySelectable for BLSPoint<BLS, LIMBS> {
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        let x = BLSFp::conditional_select(&a.x, &b.x, choice);
        let y = BLSFp::conditional_select(&a.y, &b.y, choice);
        let z = BLSFp::conditional_select(&a.z, &b.z, choice);
        Self { x, y, z }
    }
}

impl<BLS: BLSParam, const LIMBS: usize> ConstantTimeEq for BLSPoint<BLS, LIMBS> {
    fn ct_eq(&self, pair: &Self) -> Choice {
        // x/z^2 = pair.x/pair.z^2 <=> x*pair.z^2 = pair.x*z^2
        // y/z^3 = pair.y/pair.z^3 <=> y*pair.z^3 = pair.y*z^3
        let z1z1 = self.z.sq();
        let z2z2 = pair.z.sq();
        (self.x*z2z2).ct_eq(&(pair.x*z1z1)) &
        (self.y*z2z2*pair.z).ct_eq(&(pair.y*z1z1*self.z))
    }

    fn ct_ne(&self, pair: &Self) -> Choice {
        !self.ct_eq(pair)
    }
}

impl<BLS: BLSParam, const LIMBS: usize> Debug for BLSPoint<BLS, LIMBS> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        Display::fmt(&self, f)
    }
}

impl<BLS: BLSParam, const LIMBS: usize> Display for BLSPoint<BLS, LIMBS> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let normal = self.normalize();
        write!(f, "[{} : {} : {}]", normal.x, normal.y, normal.z)
    }
}

impl<BLS: BLSParam, const LIMBS: usize, const SCALAR_LIMBS: usize> Mul<BLSPoint<BLS, LIMBS>> for Uint<SCALAR_LIMBS> {
    type Output = BLSPoint<BLS, LIMBS>;

    fn mul(self, point: BLSPoint<BLS, LIMBS>) -> Self::Output {
        let mut v = point;
        v *= self;
        v
    }
}

impl<BLS: BLSParam, const LIMBS: usize, const SCALAR_LIMBS: usize> Mul<BLSPoint<BLS, LIMBS>> for BLSZr<BLS, SCALAR_LIMBS> {
    type Output = BLSPoint<BLS, LIMBS>;

    fn mul(self, point: BLSPoint<BLS, LIMBS>) -> Self::Output {
        let mut v = point;
        v *= self.to_uint();
        v
    }
}

impl<BLS: BLSParam, const LIMBS: usize, const SCALAR_LIMBS: usize> MulAssign<Uint<SCALAR_LIMBS>> for BLSPoint<BLS, LIMBS> {

    /// Multiply a non-negative integer scalar and a point via fixed-window multiplication.
    ///
    /// Reference:
    ///
    /// * Alfred J. Menezes, Paul C. van Oorschot, Scott A. Vanstone,
    /// <a href="https://cacr.uwaterloo.ca/hac/">"Handbook of Applied Cryptography"</a>,
    /// CRC Press (1997), section 14.6 (Exponentiation), algorithm 14.82.
    fn mul_assign(&mut self, scalar: Uint<SCALAR_LIMBS>) {
        // prepare a table such that t[d] = d*P, where 0 <= d < 16:
        let mut t = [Self::zero(); 16];
        t[1] = self.clone();
        for d in 1..8 {
            t[2*d] = t[d].double(1);  // (2*d)*P = 2*(d*P)
            t[2*d + 1] = t[2*d].clone() + *self;  // (2*d + 1)*P = 2*(d*P) + P
        }

        // perform fixed-window multiplication by the scalar, one hex digit at a time:
        let mut v = Self::zero();  // accumulator
        let s = scalar.as_words();  // scalar
        for j in (0..s.len() << 4).rev() {  // scan the scalar from most to least significant nybble
            v.double_self(4);  // multiply the accumulator by 16
            let d = ((s[j >> 4] >> ((j & 0xF) << 2)) & 0xF) as usize;  // hex digit at index j
            // perform constant-time sequential search on t to extract t[d]:
            let mut w = Self::zero();
            for e in 0..16 {  // t[] contains 16 points...
                w = Self::conditional_select(&w, &t[e], e.ct_eq(&d)); // ... (of which only the d-th is to be kept)
            }
            v += w;  // accumulate t[d] into v
        }
        *self = v
    }
}

impl<BLS: BLSParam, const LIMBS: usize> Neg for BLSPoint<BLS, LIMBS> {
    type Output = Self;

    /// Compute the opposite of a point.
    fn neg(self) -> Self::Output {
        Self::Output {
            x: self.x,
            y: self.y.neg(),
            z: self.z,
        }
    }
}

impl<BLS: BLSParam, const LIMBS: usize> PartialEq<Self> for BLSPoint<BLS, LIMBS> {
    fn eq(&self, pair: &Self) -> bool {
        self.ct_eq(&pair).into()
    }

    fn ne(&self, pair: &Self) -> bool {
        self.ct_ne(&pair).into()
    }
}

impl<BLS: BLSParam, const LIMBS: usize> Random for BLSPoint<BLS, LIMBS> {
    /// Pick a uniform point from <b>G</b><i>&#x2081;</i>, as a random scalar
    /// multiple of the conventional generator.
    fn random<R: RngCore + ?Sized>(rng: &mut R) -> Self {
        Uint::<LIMBS>::random(rng)*Self::generator()
    }

    /// Try to pick a uniform point from <b>G</b><i>&#x2081;</i>, as a random scalar
    /// multiple of the conventional generator.
    fn try_random<R: TryRngCore + ?Sized>(rng: &mut R) -> Result<Self, <R as TryRngCore>::Error> where R: TryRngCore {
        match Uint::<LIMBS>::try_random(rng) {
            Ok(val) => Ok(val*Self::generator()),
            Err(e) => Err(e),
        }
    }
}

impl<BLS: BLSParam, const LIMBS: usize> Sub for BLSPoint<BLS, LIMBS> {
    type Output = Self;

    fn sub(self, other: Self) -> Self::Output {
        let mut point = self;
        point -= other;
        point
    }
}

impl<BLS: BLSParam, const LIMBS: usize> SubAssign for BLSPoint<BLS, LIMBS> {
    fn sub_assign(&mut self, pair: Self) {
        self.add_assign(pair.neg())
    }
}

impl<BLS: BLSParam, const LIMBS: usize> Zero for BLSPoint<BLS, LIMBS> {
    /// Create an instance of the neutral element ("point at infinity"),
    /// conventionally &lbrack;1 : 1 : 0&rbrack; in Jacobian coordinates.
    fn zero() -> Self {
        Self { x: BLSFp::one(), y: BLSFp::one(), z: BLSFp::zero() }
    }

    /// Determine if this point is the neutral element, i.e. if <i>Z</i> = 0.
    fn is_zero(&self) -> Choice {
        self.z.is_zero()
    }

    fn set_zero(&mut self) {
        *self = Self::zero();
    }
}
