#[cfg(not(any(target_pointer_width = "64")))]
compile_error!("this crate requires 64-bit limbs");

use crate::blsfp2::BLSFp2;
use crate::blsfp12::BLSFp12;
use crate::blsparam::BLSParam;
use crate::blspoint::BLSPoint;
use crate::blspoint2::BLSPoint2;
use crate::traits::{BLSField, One};
use crate::BLSError;
use crypto_bigint::subtle::ConditionallySelectable;
use crypto_bigint::Zero;
use std::marker::PhantomData;

/// The optimal ate pairing engine for BLS12 curves.
///
/// The engine is stateless: it owns no buffers and needs no construction,
/// all scratch data being per-call stack values, so distinct pairing
/// evaluations may freely proceed in parallel.
#[allow(non_snake_case)]
pub struct BLSPairing<BLS: BLSParam, const LIMBS: usize>(
    #[doc(hidden)]
    pub PhantomData<BLS>,
);

impl<BLS: BLSParam, const LIMBS: usize> BLSPairing<BLS, LIMBS> {

    /// One step of the Miller loop ladder: double the accumulator
    /// <i>T</i> &#x2254; &lbrack;<i>X</i> : <i>Y</i> : <i>Z</i>&rbrack; (homogeneous
    /// projective over <b>F</b><sub><i>p&sup2;</i></sub>) and return the coefficients
    /// (<i>&ell;&#x2080;</i>, <i>&ell;&#x2081;</i>, <i>&ell;&#x2082;</i>) of the tangent
    /// line at <i>T</i>, to be evaluated at a <b>G</b><i>&#x2081;</i> point.
    ///
    /// Reference:
    ///
    /// * Craig Costello, Tanja Lange, Michael Naehrig:
    /// "Faster Pairing Computations on Curves with High-Degree Twists."
    /// In: Nguyen, P. Q., Pointcheval, D. (eds), Public Key Cryptography -- PKC 2010.
    /// Lecture Notes in Computer Science, vol. 6056, pp. 224--242. Springer, 2010.
    /// https://doi.org/10.1007/978-3-642-13013-7_14
    #[inline]
    fn doubling_step(t: &mut [BLSFp2<BLS, LIMBS>; 3]) -> [BLSFp2<BLS, LIMBS>; 3] {
        let t0 = (t[0]*t[1]).half();             // XY/2
        let t1 = t[1].sq();                      // Y^2
        let t2 = t[2].sq();                      // Z^2
        let t7 = t2.double() + t2;               // 3Z^2
        let t3 = t7.mul_xi().double().double();  // 3b'Z^2, with b' = b*xi = 4*xi
        let t4 = t3.double() + t3;               // 9b'Z^2
        let t5 = (t1 + t4).half();               // (Y^2 + 9b'Z^2)/2
        let t6 = (t[1] + t[2]).sq() - (t1 + t2); // 2YZ
        let t8 = t[0].sq();                      // X^2
        let t9 = t3.sq();                        // (3b'Z^2)^2

        // double the accumulator, T = [2]T:
        t[0] = t0*(t1 - t4);
        t[1] = t5.sq() - (t9.double() + t9);
        t[2] = t1*t6;

        // tangent line at the (pre-doubling) accumulator:
        // g(x, y) = (3b'Z^2 - Y^2) + 3X^2*x - 2YZ*y
        [t3 - t1, t8.double() + t8, -t6]
    }

    /// One step of the Miller loop ladder: mixed-add the affine twist point
    /// <i>Q</i> into the accumulator <i>T</i> and return the coefficients
    /// (<i>&ell;&#x2080;</i>, <i>&ell;&#x2081;</i>, <i>&ell;&#x2082;</i>) of the line
    /// through <i>T</i> and <i>Q</i>, to be evaluated at a <b>G</b><i>&#x2081;</i> point.
    #[inline]
    fn addition_step(t: &mut [BLSFp2<BLS, LIMBS>; 3], q: &BLSPoint2<BLS, LIMBS>) -> [BLSFp2<BLS, LIMBS>; 3] {
        let theta = t[1] - q.y*t[2];
        let lambda = t[0] - q.x*t[2];
        let c = theta.sq();
        let d = lambda.sq();
        let e = lambda*d;
        let f = t[2]*c;
        let g = t[0]*d;
        let h = e + f - g.double();

        // add the points, T = T + Q:
        t[0] = lambda*h;
        t[1] = theta*(g - h) - t[1]*e;
        t[2] = t[2]*e;

        // chord through T and Q:
        // g(x, y) = (theta*x_Q - lambda*y_Q) - theta*x + lambda*y
        [theta*q.x - lambda*q.y, -theta, lambda]
    }

    /// Evaluate the Miller function <i>&prod;&#x1D62; f<sub>|x|,Q&#x1D62;</sub></i>(<i>P&#x1D62;</i>)
    /// over the binary expansion of the curve selector, conjugating the result
    /// to account for the sign of <i>x</i>.
    ///
    /// Degenerate factors (either member at infinity) are skipped; the
    /// remaining inputs are affinized up front so that every line evaluation
    /// costs two <b>F</b><sub><i>p</i></sub>-by-<b>F</b><sub><i>p&sup2;</i></sub> products
    /// and one sparse <b>F</b><sub><i>p&sup1;&#xFEFF;&sup2;</i></sub> multiplication.
    ///
    /// Reference:
    ///
    /// * Victor Miller:
    /// "The Weil Pairing, and Its Efficient Calculation."
    /// Journal of Cryptology, vol. 17, pp. 235--261 (2004).
    /// https://doi.org/10.1007/s00145-004-0315-8
    #[allow(non_snake_case)]
    pub fn miller_loop(points: &[BLSPoint<BLS, LIMBS>], twists: &[BLSPoint2<BLS, LIMBS>]) -> BLSFp12<BLS, LIMBS> {
        // collect the affine coordinates of the non-degenerate factors:
        let mut ps: Vec<BLSPoint<BLS, LIMBS>> = Vec::with_capacity(points.len());
        let mut qs: Vec<BLSPoint2<BLS, LIMBS>> = Vec::with_capacity(twists.len());
        for (P, Q) in points.iter().zip(twists.iter()) {
            if bool::from(!P.is_zero() & !Q.is_zero()) {
                ps.push(P.normalize());
                qs.push(Q.normalize());
            }
        }
        let mut f: BLSFp12<BLS, LIMBS> = BLSFp12::one();
        if ps.is_empty() {
            return f;
        }

        // per-pair accumulators T_i := Q_i, in homogeneous projective form:
        let mut t: Vec<[BLSFp2<BLS, LIMBS>; 3]> = qs.iter().map(|q| [q.x, q.y, q.z]).collect();

        // |x| is a 64-bit value with its top bit set; scan the bits below it:
        for j in (0..63).rev() {
            f = f.sq();
            for i in 0..ps.len() {
                let l = Self::doubling_step(&mut t[i]);
                f.mul_by_014_assign(l[0], ps[i].x*l[1], ps[i].y*l[2]);
            }
            if (BLS::UX >> j) & 1 == 1 {
                for i in 0..ps.len() {
                    let l = Self::addition_step(&mut t[i], &qs[i]);
                    f.mul_by_014_assign(l[0], ps[i].x*l[1], ps[i].y*l[2]);
                }
            }
        }
        // now T_i = [|x|]Q_i and f = prod f_{|x|,Q_i}(P_i);
        // the curve selector is negative, so replace inversion by conjugation:
        f.conj()
    }

    /// The optimal ate pairing, batched over factor pairs:
    /// compute <i>&prod;&#x1D62; e</i>(<i>P&#x1D62;</i>, <i>Q&#x1D62;</i>) &#x2254;
    /// (<i>&prod;&#x1D62; f<sub>x,Q&#x1D62;</sub></i>(<i>P&#x1D62;</i>))<sup>(<i>p&sup1;&sup2; - 1</i>)/<i>r</i></sup>.
    ///
    /// Any factor with a member at infinity contributes the neutral value 1.
    /// Soundness presumes every <i>P&#x1D62;</i> and <i>Q&#x1D62;</i> lies in its
    /// respective <i>r</i>-torsion group; the point decoders offer the
    /// corresponding subgroup checks for untrusted inputs.
    ///
    /// Reference:
    ///
    /// * Frederik Vercauteren: "Optimal pairings."
    /// IEEE Transactions on Information Theory, vol. 56, no. 1, pp. 455--461.
    /// IEEE, 2010. https://doi.org/10.1109/TIT.2009.2034881
    pub fn pair(points: &[BLSPoint<BLS, LIMBS>], twists: &[BLSPoint2<BLS, LIMBS>]) -> Result<BLSFp12<BLS, LIMBS>, BLSError> {
        if points.len() != twists.len() {
            return Err(BLSError::LengthMismatch);
        }
        let f = Self::miller_loop(points, twists).final_exp();
        Ok(BLSFp12::conditional_select(&f, &BLSFp12::one(), f.is_zero()))
    }
}


#[cfg(test)]
mod tests {
    use crate::blsfp::BLSFp;
    use crate::blsfp6::BLSFp6;
    use crate::blsparam::BLS381Param;
    use crate::blszr::BLSZr;
    use crypto_bigint::{Random, Uint};
    use std::time::SystemTime;
    use super::*;

    const TESTS: usize = 2;

    /// The canonical single-pair value e(G1, G2), one 48-byte big-endian
    /// coordinate per F_p slot of the F_{p^12} result, most significant
    /// (c1.c2.c1) first.
    const PAIR_G1_G2: [&str; 12] = [
        "0f41e58663bf08cf068672cbd01a7ec73baca4d72ca93544deff686bfd6df543d48eaa24afe47e1efde449383b676631",
        "04c581234d086a9902249b64728ffd21a189e87935a954051c7cdba7b3872629a4fafc05066245cb9108f0242d0fe3ef",
        "03350f55a7aefcd3c31b4fcb6ce5771cc6a0e9786ab5973320c806ad360829107ba810c5a09ffdd9be2291a0c25a99a2",
        "11b8b424cd48bf38fcef68083b0b0ec5c81a93b330ee1a677d0d15ff7b984e8978ef48881e32fac91b93b47333e2ba57",
        "06fba23eb7c5af0d9f80940ca771b6ffd5857baaf222eb95a7d2809d61bfe02e1bfd1b68ff02f0b8102ae1c2d5d5ab1a",
        "19f26337d205fb469cd6bd15c3d5a04dc88784fbb3d0b2dbdea54d43b2b73f2cbb12d58386a8703e0f948226e47ee89d",
        "018107154f25a764bd3c79937a45b84546da634b8f6be14a8061e55cceba478b23f7dacaa35c8ca78beae9624045b4b6",
        "01b2f522473d171391125ba84dc4007cfbf2f8da752f7c74185203fcca589ac719c34dffbbaad8431dad1c1fb597aaa5",
        "193502b86edb8857c273fa075a50512937e0794e1e65a7617c90d8bd66065b1fffe51d7a579973b1315021ec3c19934f",
        "1368bb445c7c2d209703f239689ce34c0378a68e72a6b3b216da0e22a5031b54ddff57309396b38c881c4c849ec23e87",
        "089a1c5b46e5110b86750ec6a532348868a84045483c92b7af5af689452eafabf1a8943e50439f1d59882a98eaa0170f",
        "1250ebd871fc0a92a7b2d83168d0d727272d441befa15c503dd8e90ce98db3e7b6d194f60839c508a84305aaca1789b6",
    ];

    /// General BLSPairing test template.
    #[allow(non_snake_case)]
    fn BLSPairing_test<BLS: BLSParam, const LIMBS: usize>() {
        let mut rng = rand::rng();
        let r: Uint<4> = Uint::from_words(BLS::ORDER.try_into().unwrap());
        println!();
        println!("Performing {} BLSPairing test(s)...", TESTS);
        let now = SystemTime::now();

        // default generators and infinity:
        let O1: BLSPoint<BLS, LIMBS> = BLSPoint::zero();
        let G1: BLSPoint<BLS, LIMBS> = BLSPoint::generator();
        let O2: BLSPoint2<BLS, LIMBS> = BLSPoint2::zero();
        let G2: BLSPoint2<BLS, LIMBS> = BLSPoint2::generator();

        // mismatched slice lengths must be rejected:
        assert_eq!(BLSPairing::pair(&[G1, G1], &[G2]).unwrap_err(), BLSError::LengthMismatch);

        // degenerate factors contribute the neutral value:
        let g1 = BLSPairing::pair(&[O1], &[G2]).unwrap();
        //println!("**** e(O1, G2) = {}", g1);
        assert!(bool::from(g1.is_one()));
        let g2 = BLSPairing::pair(&[G1], &[O2]).unwrap();
        //println!("**** e(G1, O2) = {}", g2);
        assert!(bool::from(g2.is_one()));
        let g3 = BLSPairing::<BLS, LIMBS>::pair(&[], &[]).unwrap();
        assert!(bool::from(g3.is_one()));

        // non-degeneracy and order of the canonical pairing value:
        let g0 = BLSPairing::pair(&[G1], &[G2]).unwrap();
        //println!("**** e(G1, G2) = {}", g0);
        assert!(bool::from(!g0.is_one() & g0.pow(&r).is_one()));

        // the Miller loop and the final exponentiation compose into the pairing:
        assert_eq!(BLSPairing::miller_loop(&[G1], &[G2]).final_exp(), g0);

        // known-answer test for the canonical single pairing:
        let h = |s: &str| BLSFp::<BLS, LIMBS>::from_be_hex(s);
        let expected: BLSFp12<BLS, LIMBS> = BLSFp12::from(
            BLSFp6::from(
                BLSFp2::from(h(PAIR_G1_G2[11]), h(PAIR_G1_G2[10])),
                BLSFp2::from(h(PAIR_G1_G2[9]), h(PAIR_G1_G2[8])),
                BLSFp2::from(h(PAIR_G1_G2[7]), h(PAIR_G1_G2[6])),
            ),
            BLSFp6::from(
                BLSFp2::from(h(PAIR_G1_G2[5]), h(PAIR_G1_G2[4])),
                BLSFp2::from(h(PAIR_G1_G2[3]), h(PAIR_G1_G2[2])),
                BLSFp2::from(h(PAIR_G1_G2[1]), h(PAIR_G1_G2[0])),
            ),
        );
        assert_eq!(g0, expected);

        for _t in 0..TESTS {
            let k = BLSZr::<BLS, 4>::random(&mut rng);
            let a = BLSPairing::pair(&[G1], &[(k*G2).normalize()]).unwrap();
            let b = BLSPairing::pair(&[(k*G1).normalize()], &[G2]).unwrap();
            let c = g0.pow(&k.to_uint());
            assert!(bool::from(!a.is_one() & a.pow(&r).is_one()));
            assert!(bool::from(!b.is_one() & b.pow(&r).is_one()));
            assert!(bool::from(!c.is_one() & c.pow(&r).is_one()));
            assert_eq!(a, c);
            assert_eq!(b, c);

            let P1: BLSPoint<BLS, LIMBS> = BLSPoint::random(&mut rng);
            let P2: BLSPoint<BLS, LIMBS> = BLSPoint::random(&mut rng);
            let Q1: BLSPoint2<BLS, LIMBS> = BLSPoint2::random(&mut rng);
            let Q2: BLSPoint2<BLS, LIMBS> = BLSPoint2::random(&mut rng);

            let g = BLSPairing::pair(&[P1], &[Q1]).unwrap();

            // linearity in the 1st argument:
            let gs = BLSPairing::pair(&[P1 + P2], &[Q1]).unwrap();
            //println!("**** e(P1 + P2, Q1)       = {}", gs);
            let gp = g*BLSPairing::pair(&[P2], &[Q1]).unwrap();
            //println!("**** e(P1, Q1)*e(P2, Q1)  = {}", gp);
            assert_eq!(gp, gs);
            // ... which is also a two-factor product:
            assert_eq!(BLSPairing::pair(&[P1, P2], &[Q1, Q1]).unwrap(), gs);

            // linearity in the 2nd argument:
            let gs = BLSPairing::pair(&[P1], &[Q1 + Q2]).unwrap();
            //println!("**** e(P1, Q1 + Q2)       = {}", gs);
            let gp = g*BLSPairing::pair(&[P1], &[Q2]).unwrap();
            //println!("**** e(P1, Q1)*e(P1, Q2)  = {}", gp);
            assert_eq!(gp, gs);
        }

        // bilinearity over a batch: e(a_i*G1, b_i*G2) accumulated over
        // pairSize random factor pairs against e(G1, G2)^sum(a_i*b_i):
        let pair_size = 50;
        let mut points: Vec<BLSPoint<BLS, LIMBS>> = Vec::with_capacity(pair_size);
        let mut twists: Vec<BLSPoint2<BLS, LIMBS>> = Vec::with_capacity(pair_size);
        let mut acc = BLSZr::<BLS, 4>::zero();
        for _ in 0..pair_size {
            let a = BLSZr::<BLS, 4>::random(&mut rng);
            let b = BLSZr::<BLS, 4>::random(&mut rng);
            points.push((a*G1).normalize());
            twists.push((b*G2).normalize());
            acc += a*b;
        }
        let f0 = BLSPairing::pair(&points, &twists).unwrap();
        let f1 = BLSPairing::pair(&[G1], &[G2]).unwrap().pow(&acc.to_uint());
        assert_eq!(f0, f1);

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
    fn BLS381Pairing_test() {
        const LIMBS: usize = BLS381Param::LIMBS;
        BLSPairing_test::<BLS381Param, LIMBS>();
    }

}
