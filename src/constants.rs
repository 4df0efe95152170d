
//// Physical constants
// Everything inside the numerical core is expressed in S.I. units.
pub const G_SI : f64 = 6.67408e-11;  // m^3.kg^-1.s^-2 (S.I. units)

//// Conversion factors
pub const KM : f64 = 1.0e3; // m
pub const AU : f64 = 1.496e11; // m
pub const HOUR : f64 = 3600.; // s
pub const DAY : f64 = 24.*HOUR; // s
pub const YEAR : f64 = 365.25*DAY; // s (julian year)

////////////////////////////////////////////////////////////////////////////////
// Reference bodies, handy to build cases and tests
pub const M_SUN : f64 = 1.989e30; // kg
pub const M_EARTH : f64 = 5.972e24; // kg
////////////////////////////////////////////////////////////////////////////////

pub const INITIAL_CONDITIONS_COLUMNS : usize = 7; // mass x y z vx vy vz
