/// Builtin ellipsoids: name, a, b, c.
///
/// The biaxial entries are included for convenience; on an oblate
/// ellipsoid, the y quadrant of Jacobi's projection is infinite (the
/// projection degenerates to the Mercator).
#[rustfmt::skip]
pub(super) const ELLIPSOID_LIST: [(&str, f64, f64, f64); 4] = [
    ("earth", 6_378_172.0, 6_378_102.0, 6_356_752.0),
    ("GRS80", 6_378_137.0, 6_378_137.0, 6_356_752.314_140_347),
    ("WGS84", 6_378_137.0, 6_378_137.0, 6_356_752.314_245_179),
    ("intl",  6_378_388.0, 6_378_388.0, 6_356_911.946_127_946),
];
