#![allow(dead_code)]

/// Some literature, that has been useful in designing and implementing this library.
pub enum Bibliography {
    /// B.C. Carlson, 1995: *Numerical computation of real or complex elliptic integrals*.
    /// Numerical Algorithms 10(1), pp.13-26.
    /// [DOI](https://doi.org/10.1007/BF02198293)
    Car95,

    /// NIST Digital Library of Mathematical Functions, *Chapter 19: Elliptic Integrals*.
    /// B.C. Carlson (ed.).
    /// [URL](https://dlmf.nist.gov/19)
    Dlmf,

    /// C.G.J. Jacobi, 1839: *Note von der geodätischen Linie auf einem Ellipsoid und den
    /// verschiedenen Anwendungen einer merkwürdigen analytischen Substitution*.
    /// Journal für die reine und angewandte Mathematik 19, pp.309-313.
    Jac39,

    /// Charles F.F. Karney, 2022: *GeographicLib*, version 2.0.
    /// [URL](https://geographiclib.sourceforge.io)
    Kar22,
}
