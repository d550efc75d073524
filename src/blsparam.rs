//! Curve parameters and precomputed constants for BLS12-381.
//!
//! A BLS12 curve is specified by an integer selector <i>x</i> &#8712; &Zopf; such that
//! <i>p</i> &#x2254; (<i>x</i> - 1)&sup2;(<i>x&#x2074;</i> - <i>x&sup2;</i> + 1)/3 + <i>x</i> is prime,
//! defining a finite field <b>F</b><sub><i>p</i></sub>, and such that
//! <i>r</i> &#x2254; <i>x&#x2074;</i> - <i>x&sup2;</i> + 1 is prime as well.
//! For BLS12-381 the selector is <i>x</i> = -0xd201000000010000, chosen with
//! low Hamming weight to speed up the Miller loop and the final exponentiation,
//! and negative so that the loop inversion can be replaced by conjugation.
//!
//! The constraint <i>p &equiv; 3 (mod 4)</i> enables the quadratic extension
//! <b>F</b><sub><i>p&sup2;</i></sub> = <b>F</b><sub><i>p</i></sub>&lbrack;<i>u</i>&rbrack;/&lt;<i>u&sup2; + 1</i>&gt;
//! and the tower-friendly extensions
//! <b>F</b><sub><i>p&#x2076;</i></sub> = <b>F</b><sub><i>p&sup2;</i></sub>&lbrack;<i>v</i>&rbrack;/&lt;<i>v&sup3; - &xi;</i>&gt; and
//! <b>F</b><sub><i>p&sup1;&#xFEFF;&sup2;</i></sub> = <b>F</b><sub><i>p&#x2076;</i></sub>&lbrack;<i>w</i>&rbrack;/&lt;<i>w&sup2; - v</i>&gt;,
//! where <i>&xi;</i> = <i>1 + u</i>.
//!
//! All constants below are plain (non-Montgomery) little-endian 64-bit limb
//! arrays; conversion to Montgomery form happens on use, through the
//! precomputed value of <i>(2&#x2076;&#x2074;&#x02E1;)&sup2;</i> mod the respective modulus.
//!
//! References:
//!
//! * Paulo S. L. M. Barreto, Ben Lynn, Mike Scott:
//! "Constructing Elliptic Curves with Prescribed Embedding Degrees."
//! In: Cimato, S., Persiano, G., Galdi, C. (eds), <i>Security in Communication
//! Networks -- SCN 2002</i>. Lecture Notes in Computer Science, vol. 2576,
//! pp. 257--267. Springer, 2003. https://doi.org/10.1007/3-540-36413-7_19
//!
//! * Sean Bowe: "BLS12-381: New zk-SNARK Elliptic Curve Construction."
//! Electric Coin Company blog, 2017. https://electriccoin.co/blog/new-snark-curve/

use crypto_bigint::Word;

pub trait BLSParam {
    const LIMBS: usize;                       // number of limbs required to represent a base field element
    const MODULUS: &'static [Word];           // base finite field modulus p
    const NEG_INV_MOD: &'static [Word];       // -1/p mod 2^(64*LIMBS)
    const MONTY_P: &'static [Word];           // (2^(64*LIMBS))^2 mod p
    const ORDER: &'static [Word];             // cryptographic subgroup order r = x^4 - x^2 + 1
    const NEG_INV_ORD: &'static [Word];       // -1/r mod 2^(64*ORDER.len())
    const MONTY_R: &'static [Word];           // (2^(64*ORDER.len()))^2 mod r
    const UX: Word;                           // the BLS curve selector x, in absolute value (x itself is negative)
    const CURVE_B: Word = 4;                  // curve equation coefficient; the twist coefficient is b*xi
    const NQR: Word = 2;                      // a quadratic non-residue in F_p
    const G1_X: &'static [Word];              // affine x-coordinate of the G_1 generator
    const G1_Y: &'static [Word];              // affine y-coordinate of the G_1 generator
    const G2_X0: &'static [Word];             // G_2 generator, x-coordinate, "real" part
    const G2_X1: &'static [Word];             // G_2 generator, x-coordinate, "imaginary" part
    const G2_Y0: &'static [Word];             // G_2 generator, y-coordinate, "real" part
    const G2_Y1: &'static [Word];             // G_2 generator, y-coordinate, "imaginary" part
    const GAMMA_11: &'static [Word];          // xi^((p - 1)/6) in F_{p^2}, as (c0, c1)
    const GAMMA_12: &'static [Word];          // xi^((p - 1)/3) = g*u: the purely "imaginary" component g
    const GAMMA_14: &'static [Word];          // xi^(2(p - 1)/3), which lies in F_p
    const GAMMA_21: &'static [Word];          // xi^((p^2 - 1)/6), which lies in F_p
    const GAMMA_22: &'static [Word];          // xi^((p^2 - 1)/3), which lies in F_p
    const GAMMA_24: &'static [Word];          // xi^(2(p^2 - 1)/3), which lies in F_p
}


pub struct BLS381Param;

impl BLSParam for BLS381Param {
    const LIMBS: usize = 6;
    const MODULUS: &'static [Word] = &[  // base finite field modulus
        0xB9FEFFFFFFFFAAAB, 0x1EABFFFEB153FFFF, 0x6730D2A0F6B0F624,
        0x64774B84F38512BF, 0x4B1BA7B6434BACD7, 0x1A0111EA397FE69A,
        // p = 4002409555221667393417789825735904156556882819939007885332058136124031650490837864442687629129015664037894272559787: 381 bits
    ];
    const NEG_INV_MOD: &'static [Word] = &[  // -1/p mod 2^(64*LIMBS)
        0x89F3FFFCFFFCFFFD, 0x286ADB92D9D113E8, 0x16EF2EF0C8E30B48,
        0x19ECCA0E8EB2DB4C, 0x68B316FEE268CF58, 0xCEB06106FEAAFC94,
    ];
    const MONTY_P: &'static [Word] = &[  // (2^(64*LIMBS))^2 mod p
        0xF4DF1F341C341746, 0x0A76E6A609D104F1, 0x8DE5476C4C95B6D5,
        0x67EB88A9939D83C0, 0x9A793E85B519952D, 0x11988FE592CAE3AA,
    ];
    const ORDER: &'static [Word] = &[  // cryptographic subgroup order
        0xFFFFFFFF00000001, 0x53BDA402FFFE5BFE, 0x3339D80809A1D805, 0x73EDA753299D7D48,
        // r = 52435875175126190479447740508185965837690552500527637822603658699938581184513: 255 bits
    ];
    const NEG_INV_ORD: &'static [Word] = &[  // -1/r mod 2^256
        0xFFFFFFFEFFFFFFFF, 0x53BA5BFFFFFE5BFD, 0x181B2C170004EC06, 0x3D443AB0D7BF2839,
    ];
    const MONTY_R: &'static [Word] = &[  // (2^256)^2 mod r
        0xC999E990F3F29C6D, 0x2B6CEDCB87925C23, 0x05D314967254398F, 0x0748D9D99F59FF11,
    ];
    const UX: Word = 0xD201000000010000;  // |x| = 15132376222941642752
    const G1_X: &'static [Word] = &[
        0xFB3AF00ADB22C6BB, 0x6C55E83FF97A1AEF, 0xA14E3A3F171BAC58,
        0xC3688C4F9774B905, 0x2695638C4FA9AC0F, 0x17F1D3A73197D794,
    ];
    const G1_Y: &'static [Word] = &[
        0x0CAA232946C5E7E1, 0xD03CC744A2888AE4, 0x00DB18CB2C04B3ED,
        0xFCF5E095D5D00AF6, 0xA09E30ED741D8AE4, 0x08B3F481E3AAA0F1,
    ];
    const G2_X0: &'static [Word] = &[
        0xD48056C8C121BDB8, 0x0BAC0326A805BBEF, 0xB4510B647AE3D177,
        0xC6E47AD4FA403B02, 0x260805272DC51051, 0x024AA2B2F08F0A91,
    ];
    const G2_X1: &'static [Word] = &[
        0xE5AC7D055D042B7E, 0x334CF11213945D57, 0xB5DA61BBDC7F5049,
        0x596BD0D09920B61A, 0x7DACD3A088274F65, 0x13E02B6052719F60,
    ];
    const G2_Y0: &'static [Word] = &[
        0xE193548608B82801, 0x923AC9CC3BACA289, 0x6D429A695160D12C,
        0xADFD9BAA8CBDD3A7, 0x8CC9CDC6DA2E351A, 0x0CE5D527727D6E11,
    ];
    const G2_Y1: &'static [Word] = &[
        0xAAA9075FF05F79BE, 0x3F370D275CEC1DA1, 0x267492AB572E99AB,
        0xCB3E287E85A763AF, 0x32ACD2B02BC28B99, 0x0606C4A02EA734CC,
    ];
    const GAMMA_11: &'static [Word] = &[  // xi^((p - 1)/6), as (c0, c1)
        0x8D0775ED92235FB8, 0xF67EA53D63E7813D, 0x7B2443D784BAB9C4,
        0x0FD603FD3CBD5F4F, 0xC231BEB4202C0D1F, 0x1904D3BF02BB0667,
        0x2CF78A126DDC4AF3, 0x282D5AC14D6C7EC2, 0xEC0C8EC971F63C5F,
        0x54A14787B6C7B36F, 0x88E9E902231F9FB8, 0x00FC3E2B36C4E032,
    ];
    const GAMMA_12: &'static [Word] = &[  // xi^((p - 1)/3) = g*u, component g
        0x8BFD00000000AAAC, 0x409427EB4F49FFFD, 0x897D29650FB85F9B,
        0xAA0D857D89759AD4, 0xEC02408663D4DE85, 0x1A0111EA397FE699,
    ];
    const GAMMA_14: &'static [Word] = &[  // xi^(2(p - 1)/3)
        0x8BFD00000000AAAD, 0x409427EB4F49FFFD, 0x897D29650FB85F9B,
        0xAA0D857D89759AD4, 0xEC02408663D4DE85, 0x1A0111EA397FE699,
    ];
    const GAMMA_21: &'static [Word] = &[  // xi^((p^2 - 1)/6)
        0x2E01FFFFFFFEFFFF, 0xDE17D813620A0002, 0xDDB3A93BE6F89688,
        0xBA69C6076A0F77EA, 0x5F19672FDF76CE51, 0x0000000000000000,
    ];
    const GAMMA_22: &'static [Word] = &[  // xi^((p^2 - 1)/3)
        0x2E01FFFFFFFEFFFE, 0xDE17D813620A0002, 0xDDB3A93BE6F89688,
        0xBA69C6076A0F77EA, 0x5F19672FDF76CE51, 0x0000000000000000,
    ];
    const GAMMA_24: &'static [Word] = &[  // xi^(2(p^2 - 1)/3)
        0x8BFD00000000AAAC, 0x409427EB4F49FFFD, 0x897D29650FB85F9B,
        0xAA0D857D89759AD4, 0xEC02408663D4DE85, 0x1A0111EA397FE699,
    ];
}
